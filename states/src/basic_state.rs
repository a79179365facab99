use std::any::Any;

use chrono::{DateTime, Utc};

use crate::{State, state_assign_impl};

/// Virtual clock.
///
/// The app advances it once per frame; everything time-dependent (poll
/// intervals, notice expiry) reads it through the context so tests can pin
/// the clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl State for Time {
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

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
