use std::any::Any;

use bookstall_states::{State, state_assign_impl};

/// The client-held credential artifact.
///
/// The token is opaque: it is set by the storefront's login flow, cleared on
/// logout, and never inspected here.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    access_token: Option<String>,
}

impl CredentialStore {
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }

    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn clear(&mut self) {
        self.access_token = None;
    }
}

impl State for CredentialStore {
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
