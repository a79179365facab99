use std::any::{Any, TypeId};

use crate::{Dep, Updater};

/// Dependency declaration of a `Compute`: state `TypeId`s first, then
/// compute `TypeId`s. When any of them changes, the compute is marked dirty
/// and re-run on the next `StateCtx::run_computed`.
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// Outcome of one `Compute::compute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeStage {
    /// The cache is up to date; nothing in flight.
    Finished,
    /// An async job was started. The compute stays pending (and is not
    /// re-run) until its result arrives through the updater.
    Pending,
}

/// A derived or fetched cache stored in a `StateCtx`.
///
/// `compute` must not mutate anything directly: it either finishes
/// synchronously or kicks off async work that publishes a replacement value
/// via `Updater::set`.
pub trait Compute: Any {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep, updater: Updater) -> ComputeStage;

    fn as_any(&self) -> &dyn Any;

    /// Replace `self` with a freshly published value of the same type.
    ///
    /// Implement as `assign_impl(self, new_self)`.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for `Compute` implementors.
pub fn assign_impl<T: Compute + Sized>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(next) => *this = *next,
        Err(_) => log::error!(
            "compute assign: published value is not a {}",
            std::any::type_name::<T>()
        ),
    }
}
