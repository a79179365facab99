use std::any::Any;

/// Plain application state stored in a `StateCtx`.
///
/// Implementors provide the `Any` plumbing so the context can store them as
/// trait objects and so updates published through an `Updater` can be
/// assigned back by type.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a freshly published value of the same type.
    ///
    /// Implement as `state_assign_impl(self, new_self)`.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for `State` implementors.
///
/// A type mismatch is a wiring bug between an `Updater::set` call and the
/// registered target; it is logged and the old value kept.
pub fn state_assign_impl<T: State + Sized>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(next) => *this = *next,
        Err(_) => log::error!(
            "state assign: published value is not a {}",
            std::any::type_name::<T>()
        ),
    }
}
