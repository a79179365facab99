use std::{
    any::{Any, TypeId},
    collections::BTreeMap,
    ptr::NonNull,
};

use crate::{Compute, Error, State};

/// Read access to registered states and computes for the duration of one
/// command or compute invocation.
///
/// # Safety
///
/// `Dep` holds raw pointers into the `StateCtx` storage. Commands and
/// computes are invoked synchronously while the context is not otherwise
/// borrowed, and a `Dep` never outlives the invocation it was built for.
pub struct Dep {
    inner: BTreeMap<TypeId, NonNull<dyn Any>>,
}

impl Dep {
    pub(crate) fn new(entries: impl Iterator<Item = (TypeId, NonNull<dyn Any>)>) -> Self {
        Self {
            inner: entries.collect(),
        }
    }

    /// Borrow a registered state by type.
    ///
    /// # Panics
    /// Panics if the state type was never added to the context.
    pub fn get_state_ref<T: State>(&self) -> &T {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|ptr| unsafe { ptr.as_ref() }.downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!("{}", Error::state_not_found(TypeId::of::<T>(), "Dep"))
            })
    }

    /// Borrow a registered compute by type.
    ///
    /// # Panics
    /// Panics if the compute type was never recorded in the context.
    pub fn get_compute_ref<T: Compute>(&self) -> &T {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|ptr| unsafe { ptr.as_ref() }.downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!("{}", Error::compute_not_found(TypeId::of::<T>(), "Dep"))
            })
    }
}
