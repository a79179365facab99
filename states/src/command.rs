use crate::{Dep, Updater};

/// An explicit user action.
///
/// Commands are dispatched via `StateCtx::dispatch::<C>()`, or enqueued
/// during rendering with `StateCtx::enqueue_command::<C>()` and flushed at
/// the end of the frame. A command reads inputs from `deps` and publishes
/// results through the updater; it never mutates the context directly, which
/// keeps widget code free to hold borrows while enqueueing.
pub trait Command: Default + 'static {
    fn run(&self, deps: Dep, updater: Updater);
}
