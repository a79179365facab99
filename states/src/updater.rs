use std::any::{Any, TypeId};

use flume::Sender;

/// One published replacement value, routed by target `TypeId` and guarded by
/// the generation of the dispatch that produced it.
pub(crate) struct Envelope {
    pub source: TypeId,
    pub generation: u64,
    pub target: TypeId,
    pub value: Box<dyn Any + Send>,
}

/// Handle that commands and computes use to publish replacement state.
///
/// The handle is `Send` and cheap to clone, so async callbacks (`ehttp`
/// completions in particular) can carry it across threads. Each handle is
/// stamped with the generation of the dispatch that created it; if a newer
/// dispatch of the same source has been issued by the time a value arrives,
/// `StateCtx::sync_computes` drops it.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Envelope>,
    source: TypeId,
    generation: u64,
}

impl Updater {
    pub(crate) fn new(send: Sender<Envelope>, source: TypeId, generation: u64) -> Self {
        Self {
            send,
            source,
            generation,
        }
    }

    /// Publish `value` as the new content of the registered state or compute
    /// of type `T`. Applied on the next `StateCtx::sync_computes`.
    pub fn set<T: Any + Send>(&self, value: T) {
        let envelope = Envelope {
            source: self.source,
            generation: self.generation,
            target: TypeId::of::<T>(),
            value: Box::new(value),
        };
        if self.send.send(envelope).is_err() {
            log::error!(
                "updater: context dropped before update for {}",
                std::any::type_name::<T>()
            );
        }
    }
}
