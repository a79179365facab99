//! Route state for page navigation.

use std::any::Any;

use bookstall_states::{State, state_assign_impl};
use serde::{Deserialize, Serialize};

/// Dashboard section. Each section owns one listing instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Books,
    Coupons,
    Orders,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Books, Self::Coupons, Self::Orders];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Books => "Books",
            Self::Coupons => "Coupons",
            Self::Orders => "Orders",
        }
    }
}

/// Which page the application currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// The seller dashboard with its section listings.
    Dashboard(Section),
    /// Search results for a submitted query.
    Search { query: String },
    /// Placeholder for the storefront's login/sign-up flow (owned by the
    /// storefront proper, not this dashboard).
    LoginSignup,
}

impl Default for Route {
    fn default() -> Self {
        Self::Dashboard(Section::default())
    }
}

impl Route {
    /// The active dashboard section, if the dashboard is showing.
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::Dashboard(section) => Some(*section),
            _ => None,
        }
    }
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route_is_books_dashboard() {
        assert_eq!(Route::default(), Route::Dashboard(Section::Books));
    }

    #[test]
    fn test_section_only_on_dashboard() {
        assert_eq!(
            Route::Dashboard(Section::Orders).section(),
            Some(Section::Orders)
        );
        assert_eq!(
            Route::Search {
                query: "tolkien".to_owned()
            }
            .section(),
            None
        );
        assert_eq!(Route::LoginSignup.section(), None);
    }
}
