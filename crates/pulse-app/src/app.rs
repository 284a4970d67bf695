//! The application façade.

use crate::AppError;
use pulse_auth::{PermissionSet, Principal, Route, RoutePolicy};
use pulse_runtime::{
    AuthBackend, Credentials, Customer, Directory, FallbackPolicy, LoginOutcome, PulseConfig,
    RecordingSink, SessionManager, SessionStore,
};
use pulse_survey::SurveyRunner;
use pulse_types::{CustomerId, QuestionId, RespondentId, SurveyId};
use std::sync::Arc;

/// What the router should do with a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Render the route.
    Proceed {
        /// The resolved route.
        route: Route,
        /// Whether to overlay the employee restriction notice.
        restriction_notice: bool,
    },
    /// Send the principal to this route instead.
    Redirect(Route),
    /// No principal; send to the login view.
    Login,
}

/// Builder for [`PulseApp`].
///
/// The auth backend and session store are injected up front; the
/// directory, sink, and config have working defaults.
pub struct PulseAppBuilder<B, S> {
    backend: B,
    store: S,
    config: Option<PulseConfig>,
    directory: Option<Arc<Directory>>,
    sink: Option<Arc<RecordingSink>>,
}

impl<B: AuthBackend, S: SessionStore> PulseAppBuilder<B, S> {
    /// Creates a builder around the injected collaborators.
    #[must_use]
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            store,
            config: None,
            directory: None,
            sink: None,
        }
    }

    /// Uses this configuration instead of the defaults.
    #[must_use]
    pub fn config(mut self, config: PulseConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Uses this directory instead of an empty one.
    #[must_use]
    pub fn directory(mut self, directory: Arc<Directory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Uses this submission sink instead of a fresh one.
    #[must_use]
    pub fn sink(mut self, sink: Arc<RecordingSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Assembles the application.
    #[must_use]
    pub fn build(self) -> PulseApp<B, S> {
        let config = self.config.unwrap_or_default();
        let fallback = FallbackPolicy {
            enabled: config.auth.allow_fallback,
            ..FallbackPolicy::default()
        };
        PulseApp {
            sessions: SessionManager::new(self.backend, self.store, fallback),
            policy: RoutePolicy,
            directory: self.directory.unwrap_or_default(),
            sink: self.sink.unwrap_or_default(),
            config,
        }
    }
}

/// The assembled application.
///
/// Owns the session manager and shares the directory and sink with the
/// survey runners it hands out.
pub struct PulseApp<B, S> {
    sessions: SessionManager<B, S>,
    policy: RoutePolicy,
    directory: Arc<Directory>,
    sink: Arc<RecordingSink>,
    config: PulseConfig,
}

impl<B: AuthBackend, S: SessionStore> PulseApp<B, S> {
    /// Starts a builder.
    #[must_use]
    pub fn builder(backend: B, store: S) -> PulseAppBuilder<B, S> {
        PulseAppBuilder::new(backend, store)
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    /// Returns the shared directory.
    #[must_use]
    pub fn directory(&self) -> &Arc<Directory> {
        &self.directory
    }

    /// Returns the shared submission sink.
    #[must_use]
    pub fn sink(&self) -> &Arc<RecordingSink> {
        &self.sink
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Returns the logged-in principal, if any.
    #[must_use]
    pub fn current_principal(&self) -> Option<&Principal> {
        self.sessions.current()
    }

    /// Logs in through the session manager.
    ///
    /// # Errors
    ///
    /// See [`SessionManager::login`].
    pub async fn login(&mut self, credentials: &Credentials) -> Result<LoginOutcome, AppError> {
        Ok(self.sessions.login(credentials).await?)
    }

    /// Restores a persisted session at startup.
    ///
    /// # Errors
    ///
    /// See [`SessionManager::restore`].
    pub async fn restore(&mut self) -> Result<Option<&Principal>, AppError> {
        Ok(self.sessions.restore().await?)
    }

    /// Logs out.
    pub async fn logout(&mut self) {
        self.sessions.logout().await;
    }

    // ------------------------------------------------------------------
    // Navigation guard
    // ------------------------------------------------------------------

    /// Decides what to do with a requested path.
    ///
    /// Unknown paths behave like denied ones: back to the landing
    /// route, or to login when nobody is logged in.
    #[must_use]
    pub fn navigate(&self, path: &str) -> Navigation {
        let principal = self.sessions.current();

        let Some(route) = Route::from_path(path) else {
            tracing::debug!(path, "unknown path requested");
            return match principal {
                Some(p) => Navigation::Redirect(self.policy.landing_route(p)),
                None => Navigation::Login,
            };
        };

        let decision = self.policy.decide(principal, route);
        if decision.allowed {
            let restriction_notice = principal
                .is_some_and(|p| self.policy.shows_restriction_notice(p, route));
            Navigation::Proceed {
                route,
                restriction_notice,
            }
        } else {
            match decision.redirect_to {
                Some(target) => Navigation::Redirect(target),
                None => Navigation::Login,
            }
        }
    }

    /// Returns the landing route for the current principal, if any.
    #[must_use]
    pub fn landing_route(&self) -> Option<Route> {
        self.sessions.current().map(|p| self.policy.landing_route(p))
    }

    // ------------------------------------------------------------------
    // Staff operations
    // ------------------------------------------------------------------

    /// Adds or replaces a customer. Requires `MANAGE_CUSTOMERS`.
    ///
    /// # Errors
    ///
    /// [`AppError::NotAuthenticated`] / [`AppError::Forbidden`].
    pub fn upsert_customer(&self, customer: Customer) -> Result<(), AppError> {
        self.require(PermissionSet::MANAGE_CUSTOMERS)?;
        self.directory.upsert_customer(customer);
        Ok(())
    }

    /// Sets the annotation a customer sees on a question. Requires
    /// `MANAGE_QUESTIONS`.
    ///
    /// # Errors
    ///
    /// Permission errors as above, plus
    /// [`CatalogError`](pulse_survey::CatalogError) for unknown ids.
    pub async fn annotate_question(
        &self,
        question: QuestionId,
        customer: CustomerId,
        text: &str,
    ) -> Result<(), AppError> {
        use pulse_survey::SurveyCatalog;

        self.require(PermissionSet::MANAGE_QUESTIONS)?;
        self.directory
            .set_annotation(question, customer, text)
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Survey flow
    // ------------------------------------------------------------------

    /// Opens a survey attempt for the current principal.
    ///
    /// Requires the `ANSWER_SURVEY` capability. The respondent
    /// reference resolves to the principal's employee record when the
    /// directory has one for their email, and falls back to an id
    /// derived from the principal otherwise.
    ///
    /// # Errors
    ///
    /// [`AppError::NotAuthenticated`] / [`AppError::Forbidden`].
    pub fn start_survey(
        &self,
        customer: CustomerId,
    ) -> Result<SurveyRunner<Arc<Directory>, Arc<RecordingSink>>, AppError> {
        let principal = self.require(PermissionSet::ANSWER_SURVEY)?;

        let respondent = self
            .directory
            .employee_by_email(principal.email())
            .map_or_else(|| RespondentId::from(principal.id()), |e| e.id);
        let survey = SurveyId::seeded(&customer.to_string());

        tracing::debug!(
            principal = %principal.id(),
            customer = %customer,
            survey = %survey,
            "starting survey attempt"
        );

        Ok(SurveyRunner::new(
            survey,
            respondent,
            customer,
            Arc::clone(&self.directory),
            Arc::clone(&self.sink),
        ))
    }

    fn require(&self, required: PermissionSet) -> Result<&Principal, AppError> {
        let principal = self
            .sessions
            .current()
            .ok_or(AppError::NotAuthenticated)?;
        if !principal.can(required) {
            tracing::warn!(
                principal = %principal.id(),
                required = %required,
                held = %principal.permissions(),
                "operation denied"
            );
            return Err(AppError::Forbidden { required });
        }
        Ok(principal)
    }
}
