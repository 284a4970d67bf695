//! View route identifiers.
//!
//! The route policy decides access per [`Route`], not per raw path
//! string; parsing happens once at the navigation boundary and unknown
//! paths simply fail to parse.

use serde::{Deserialize, Serialize};

/// A known view route.
///
/// # Example
///
/// ```
/// use pulse_auth::Route;
///
/// assert_eq!(Route::from_path("/survey"), Some(Route::Survey));
/// assert_eq!(Route::from_path("/nope"), None);
/// assert_eq!(Route::Customers.path(), "/customers");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Landing view for staff.
    Dashboard,
    /// Question catalog maintenance.
    Questions,
    /// Aggregated report views.
    Reports,
    /// Customer directory maintenance.
    Customers,
    /// Employee directory maintenance.
    Employees,
    /// The multi-page survey for respondents.
    Survey,
}

impl Route {
    /// Every known route, in navigation-menu order.
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Questions,
        Route::Reports,
        Route::Customers,
        Route::Employees,
        Route::Survey,
    ];

    /// Parses a view path. Unknown paths return `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "/dashboard" | "" | "/" => Some(Self::Dashboard),
            "/questions" => Some(Self::Questions),
            "/reports" => Some(Self::Reports),
            "/customers" => Some(Self::Customers),
            "/employees" => Some(Self::Employees),
            "/survey" => Some(Self::Survey),
            _ => None,
        }
    }

    /// Returns the canonical path for this route.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Questions => "/questions",
            Self::Reports => "/reports",
            Self::Customers => "/customers",
            Self::Employees => "/employees",
            Self::Survey => "/survey",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
