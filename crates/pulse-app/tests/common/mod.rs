//! Shared fixtures for the integration tests.
#![allow(dead_code)] // each test binary uses a different subset

use pulse_app::PulseApp;
use pulse_runtime::{
    Customer, Directory, DirectorySeed, Employee, MemoryStore, MockAuthBackend, MockIdentity,
    RecordingSink,
};
use pulse_survey::Question;
use pulse_types::{CustomerId, IdentityKind, OrganizationId, QuestionId, RespondentId, Role};
use std::sync::Arc;

pub const EMPLOYEE_EMAIL: &str = "sam@plant1.com";
pub const ADMIN_EMAIL: &str = "ana@example.com";
pub const MASTER_EMAIL: &str = "mia@example.com";
pub const PASSWORD: &str = "pw";

pub fn org() -> OrganizationId {
    OrganizationId::seeded("acme")
}

pub fn plant1() -> CustomerId {
    CustomerId::seeded("plant-1")
}

pub fn question_id(i: usize) -> QuestionId {
    QuestionId::seeded(&format!("survey-q{i}"))
}

/// A 14-question catalog: 12 ratings and 2 free-text questions.
pub fn fourteen_questions() -> Vec<Question> {
    (0..14)
        .map(|i| {
            if i % 7 == 6 {
                Question::free_text(question_id(i), format!("Tell us more #{i}"), "open", i as u32)
            } else {
                Question::rating(question_id(i), format!("Statement #{i}"), "general", i as u32)
            }
        })
        .collect()
}

pub fn seeded_directory() -> Arc<Directory> {
    Arc::new(Directory::with_seed(DirectorySeed {
        customers: vec![Customer::new(plant1(), "Plant 1", org())],
        employees: vec![Employee::new(
            RespondentId::seeded("sam"),
            "Sam",
            EMPLOYEE_EMAIL,
            plant1(),
        )],
        questions: fourteen_questions(),
    }))
}

pub fn backend() -> MockAuthBackend {
    MockAuthBackend::with_identities(vec![
        MockIdentity::new(EMPLOYEE_EMAIL, PASSWORD, org(), Role::Member, IdentityKind::Employee),
        MockIdentity::new(ADMIN_EMAIL, PASSWORD, org(), Role::Admin, IdentityKind::Hr),
        MockIdentity::new(MASTER_EMAIL, PASSWORD, org(), Role::Master, IdentityKind::Hr),
    ])
}

pub fn app() -> PulseApp<MockAuthBackend, MemoryStore> {
    PulseApp::builder(backend(), MemoryStore::new())
        .directory(seeded_directory())
        .sink(Arc::new(RecordingSink::new()))
        .build()
}
