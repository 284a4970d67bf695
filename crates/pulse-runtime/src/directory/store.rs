//! The in-memory directory store.

use parking_lot::RwLock;
use pulse_survey::{CatalogError, Question, SurveyCatalog};
use pulse_types::{CustomerId, OrganizationId, QuestionId, RespondentId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A customer of the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Identity.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Owning organization.
    pub organization: OrganizationId,
}

impl Customer {
    /// Creates a customer.
    #[must_use]
    pub fn new(id: CustomerId, name: impl Into<String>, organization: OrganizationId) -> Self {
        Self {
            id,
            name: name.into(),
            organization,
        }
    }
}

/// An employee of a customer, eligible to answer surveys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Identity, doubling as the respondent reference.
    pub id: RespondentId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// The customer this employee belongs to.
    pub customer: CustomerId,
}

impl Employee {
    /// Creates an employee.
    #[must_use]
    pub fn new(
        id: RespondentId,
        name: impl Into<String>,
        email: impl Into<String>,
        customer: CustomerId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            customer,
        }
    }
}

/// Initial contents for a [`Directory`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorySeed {
    /// Customers to start with.
    pub customers: Vec<Customer>,
    /// Employees to start with.
    pub employees: Vec<Employee>,
    /// Base question catalog (annotations are per-customer overlays,
    /// any annotation on a seed question is ignored).
    pub questions: Vec<Question>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    questions: Vec<Question>,
    // Per-customer annotation overlays keyed by (question, customer).
    annotations: HashMap<(QuestionId, CustomerId), String>,
}

/// In-memory customers / employees / question catalog.
///
/// Thread-safe behind an `RwLock`; the survey engine consumes it
/// through the [`SurveyCatalog`] trait, staff CRUD goes through the
/// inherent methods.
///
/// # Example
///
/// ```
/// use pulse_runtime::directory::{Customer, Directory, DirectorySeed};
/// use pulse_survey::Question;
/// use pulse_types::{CustomerId, OrganizationId, QuestionId};
///
/// let org = OrganizationId::seeded("acme");
/// let customer = Customer::new(CustomerId::seeded("plant-1"), "Plant 1", org);
/// let directory = Directory::with_seed(DirectorySeed {
///     customers: vec![customer],
///     employees: vec![],
///     questions: vec![Question::rating(QuestionId::seeded("w"), "Workload", "load", 1)],
/// });
///
/// assert_eq!(directory.customers().len(), 1);
/// assert_eq!(directory.base_questions().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Directory {
    state: RwLock<DirectoryState>,
}

impl Directory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory from seed data.
    #[must_use]
    pub fn with_seed(seed: DirectorySeed) -> Self {
        let questions = seed
            .questions
            .into_iter()
            .map(|mut q| {
                q.annotation = None;
                q
            })
            .collect();
        Self {
            state: RwLock::new(DirectoryState {
                customers: seed.customers,
                employees: seed.employees,
                questions,
                annotations: HashMap::new(),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Customers
    // ------------------------------------------------------------------

    /// Returns all customers.
    #[must_use]
    pub fn customers(&self) -> Vec<Customer> {
        self.state.read().customers.clone()
    }

    /// Looks up one customer.
    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<Customer> {
        self.state.read().customers.iter().find(|c| c.id == id).cloned()
    }

    /// Adds a customer. Replaces an existing one with the same id.
    pub fn upsert_customer(&self, customer: Customer) {
        let mut state = self.state.write();
        state.customers.retain(|c| c.id != customer.id);
        state.customers.push(customer);
    }

    /// Removes a customer together with its employees and annotation
    /// overlays. Returns `false` if the customer was unknown.
    pub fn remove_customer(&self, id: CustomerId) -> bool {
        let mut state = self.state.write();
        let before = state.customers.len();
        state.customers.retain(|c| c.id != id);
        if state.customers.len() == before {
            return false;
        }
        state.employees.retain(|e| e.customer != id);
        state.annotations.retain(|(_, customer), _| *customer != id);
        true
    }

    // ------------------------------------------------------------------
    // Employees
    // ------------------------------------------------------------------

    /// Returns the employees of a customer.
    #[must_use]
    pub fn employees(&self, customer: CustomerId) -> Vec<Employee> {
        self.state
            .read()
            .employees
            .iter()
            .filter(|e| e.customer == customer)
            .cloned()
            .collect()
    }

    /// Looks up an employee by login email (case-insensitive).
    #[must_use]
    pub fn employee_by_email(&self, email: &str) -> Option<Employee> {
        self.state
            .read()
            .employees
            .iter()
            .find(|e| e.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Adds an employee. Replaces an existing one with the same id.
    pub fn upsert_employee(&self, employee: Employee) {
        let mut state = self.state.write();
        state.employees.retain(|e| e.id != employee.id);
        state.employees.push(employee);
    }

    /// Removes an employee. Returns `false` if unknown.
    pub fn remove_employee(&self, id: RespondentId) -> bool {
        let mut state = self.state.write();
        let before = state.employees.len();
        state.employees.retain(|e| e.id != id);
        state.employees.len() != before
    }

    // ------------------------------------------------------------------
    // Questions
    // ------------------------------------------------------------------

    /// Returns the base catalog ordered by display order, without
    /// customer annotations.
    #[must_use]
    pub fn base_questions(&self) -> Vec<Question> {
        let mut questions = self.state.read().questions.clone();
        questions.sort_by_key(|q| q.display_order);
        questions
    }

    /// Adds a question to the base catalog. Replaces an existing one
    /// with the same id. Any annotation on the value is dropped —
    /// annotations are per-customer overlays.
    pub fn upsert_question(&self, mut question: Question) {
        question.annotation = None;
        let mut state = self.state.write();
        state.questions.retain(|q| q.id != question.id);
        state.questions.push(question);
    }

    /// Moves a question to a new display order. Returns `false` if
    /// unknown.
    pub fn reorder_question(&self, id: QuestionId, display_order: u32) -> bool {
        let mut state = self.state.write();
        match state.questions.iter_mut().find(|q| q.id == id) {
            Some(question) => {
                question.display_order = display_order;
                true
            }
            None => false,
        }
    }

    /// Removes a question together with its annotation overlays.
    /// Returns `false` if unknown.
    pub fn remove_question(&self, id: QuestionId) -> bool {
        let mut state = self.state.write();
        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        if state.questions.len() == before {
            return false;
        }
        state.annotations.retain(|(question, _), _| *question != id);
        true
    }

    /// Returns the annotation a customer sees on a question, if any.
    #[must_use]
    pub fn annotation(&self, question: QuestionId, customer: CustomerId) -> Option<String> {
        self.state.read().annotations.get(&(question, customer)).cloned()
    }
}

impl SurveyCatalog for Directory {
    async fn questions(&self, customer: CustomerId) -> Result<Vec<Question>, CatalogError> {
        let state = self.state.read();
        if !state.customers.iter().any(|c| c.id == customer) {
            return Err(CatalogError::UnknownCustomer(customer));
        }

        let mut questions: Vec<Question> = state
            .questions
            .iter()
            .map(|q| {
                let mut q = q.clone();
                q.annotation = state.annotations.get(&(q.id, customer)).cloned();
                q
            })
            .collect();
        questions.sort_by_key(|q| q.display_order);
        Ok(questions)
    }

    async fn set_annotation(
        &self,
        question: QuestionId,
        customer: CustomerId,
        text: &str,
    ) -> Result<(), CatalogError> {
        let mut state = self.state.write();
        if !state.questions.iter().any(|q| q.id == question) {
            return Err(CatalogError::UnknownQuestion(question));
        }
        if !state.customers.iter().any(|c| c.id == customer) {
            return Err(CatalogError::UnknownCustomer(customer));
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            state.annotations.remove(&(question, customer));
        } else {
            state
                .annotations
                .insert((question, customer), trimmed.to_string());
        }
        Ok(())
    }
}
