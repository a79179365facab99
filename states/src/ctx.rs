use std::any::TypeId;
use std::collections::BTreeMap;
use std::ptr::NonNull;

use flume::{Receiver, Sender};

use crate::updater::Envelope;
use crate::{Command, Compute, ComputeStage, Dep, Error, State, StateSyncStatus, Updater};

struct ComputeSlot {
    value: Box<dyn Compute>,
    status: StateSyncStatus,
}

fn run_command<C: Command>(ctx: &mut StateCtx) {
    ctx.dispatch::<C>();
}

/// Owner of all registered states and computes.
///
/// The app drives it once per frame:
/// 1. `sync_computes()` at frame start applies results published by async
///    jobs since the last frame (dropping stale generations).
/// 2. Widgets read via `state`/`cached`, mutate via `state_mut`/`update`,
///    and enqueue commands.
/// 3. `flush_commands()` then `run_computed()` at frame end dispatch the
///    queued actions and re-run dirty computes.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, ComputeSlot>,
    send: Sender<Envelope>,
    recv: Receiver<Envelope>,
    // Latest issued generation per dispatch source; envelopes from older
    // generations are dropped in sync_computes.
    issued: BTreeMap<TypeId, u64>,
    queued: Vec<fn(&mut StateCtx)>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            send,
            recv,
            issued: BTreeMap::new(),
            queued: Vec::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(
            TypeId::of::<T>(),
            ComputeSlot {
                value: Box::new(compute),
                status: StateSyncStatus::default(),
            },
        );
    }

    /// Borrow a registered state.
    ///
    /// # Panics
    /// Panics if the state type was never added.
    pub fn state<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    Error::state_not_found(TypeId::of::<T>(), "StateCtx::state")
                )
            })
    }

    /// Mutably borrow a registered state, marking computes that depend on it
    /// dirty.
    ///
    /// # Panics
    /// Panics if the state type was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.mark_dependents_dirty(TypeId::of::<T>());
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    Error::state_not_found(TypeId::of::<T>(), "StateCtx::state_mut")
                )
            })
    }

    /// Run `f` against a registered state.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Read a recorded compute's cache, if recorded.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
    }

    /// Current lifecycle status of a recorded compute.
    pub fn compute_status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.computes.get(&TypeId::of::<T>()).map(|slot| slot.status)
    }

    /// Dispatch a command immediately.
    pub fn dispatch<C: Command>(&mut self) {
        let updater = self.updater_for(TypeId::of::<C>());
        let deps = self.dep();
        C::default().run(deps, updater);
    }

    /// Queue a command for the end-of-frame `flush_commands`.
    ///
    /// Widgets enqueue rather than dispatch so they can keep whatever borrow
    /// of the context they are rendering with.
    pub fn enqueue_command<C: Command>(&mut self) {
        self.queued.push(run_command::<C>);
    }

    /// Dispatch all queued commands in enqueue order.
    pub fn flush_commands(&mut self) {
        let queued = std::mem::take(&mut self.queued);
        for run in queued {
            run(self);
        }
    }

    /// Apply every value published through updaters since the last call.
    ///
    /// An envelope whose generation is no longer the latest issued for its
    /// source is dropped: a superseded request cannot overwrite the state a
    /// newer one produced.
    pub fn sync_computes(&mut self) {
        while let Ok(envelope) = self.recv.try_recv() {
            let Envelope {
                source,
                generation,
                target,
                value,
            } = envelope;

            let current = self.issued.get(&source).copied().unwrap_or(0);
            if generation != current {
                log::info!(
                    "dropping stale update for {target:?} (generation {generation}, current {current})"
                );
                continue;
            }

            match self.computes.get_mut(&target) {
                Some(slot) => {
                    slot.value.assign_box(value);
                    slot.status = StateSyncStatus::Clean;
                    // A cross-source update supersedes whatever fetch the
                    // compute itself may have in flight.
                    if source != target
                        && let Some(generation) = self.issued.get_mut(&target)
                    {
                        *generation += 1;
                    }
                }
                None => match self.states.get_mut(&target) {
                    Some(state) => state.assign_box(value),
                    None => {
                        log::error!("published update targets unregistered type {target:?}");
                        continue;
                    }
                },
            }
            self.mark_dependents_dirty(target);
        }
    }

    /// Run every compute that is new or whose dependencies changed.
    ///
    /// A compute that reports `Pending` is left alone until its async result
    /// lands through `sync_computes`.
    pub fn run_computed(&mut self) {
        let runnable: Vec<TypeId> = self
            .computes
            .iter()
            .filter(|(_, slot)| {
                matches!(slot.status, StateSyncStatus::Init | StateSyncStatus::Dirty)
            })
            .map(|(id, _)| *id)
            .collect();

        for id in runnable {
            let updater = self.updater_for(id);
            let deps = self.dep();
            let stage = match self.computes.get(&id) {
                Some(slot) => slot.value.compute(deps, updater),
                None => continue,
            };
            if let Some(slot) = self.computes.get_mut(&id) {
                slot.status = match stage {
                    ComputeStage::Finished => StateSyncStatus::Clean,
                    ComputeStage::Pending => StateSyncStatus::Pending,
                };
            }
        }
    }

    fn updater_for(&mut self, source: TypeId) -> Updater {
        let generation = self.issued.entry(source).and_modify(|g| *g += 1).or_insert(1);
        Updater::new(self.send.clone(), source, *generation)
    }

    fn dep(&self) -> Dep {
        let states = self
            .states
            .iter()
            .map(|(id, state)| (*id, NonNull::from(state.as_any())));
        let computes = self
            .computes
            .iter()
            .map(|(id, slot)| (*id, NonNull::from(slot.value.as_any())));
        Dep::new(states.chain(computes))
    }

    fn mark_dependents_dirty(&mut self, changed: TypeId) {
        for slot in self.computes.values_mut() {
            let (state_ids, compute_ids) = slot.value.deps();
            if (state_ids.contains(&changed) || compute_ids.contains(&changed))
                && slot.status == StateSyncStatus::Clean
            {
                slot.status = StateSyncStatus::Dirty;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::Mutex;

    use crate::{Time, assign_impl, state_assign_impl};

    use super::*;

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {
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

    #[test]
    fn add_read_and_update_state() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());

        assert_eq!(ctx.state::<Counter>().value, 0);

        ctx.update::<Counter>(|c| c.value = 7);
        assert_eq!(ctx.state::<Counter>().value, 7);

        ctx.state_mut::<Counter>().value += 1;
        assert_eq!(ctx.state::<Counter>().value, 8);
    }

    #[derive(Default)]
    struct IncrementCommand;

    impl Command for IncrementCommand {
        fn run(&self, deps: Dep, updater: Updater) {
            let current = deps.get_state_ref::<Counter>().value;
            updater.set(Counter { value: current + 1 });
        }
    }

    #[test]
    fn command_publishes_through_updater() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());

        ctx.dispatch::<IncrementCommand>();
        // Not applied until the next sync.
        assert_eq!(ctx.state::<Counter>().value, 0);

        ctx.sync_computes();
        assert_eq!(ctx.state::<Counter>().value, 1);
    }

    #[test]
    fn enqueued_commands_run_on_flush() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());

        ctx.enqueue_command::<IncrementCommand>();
        ctx.sync_computes();
        assert_eq!(ctx.state::<Counter>().value, 0, "nothing dispatched yet");

        ctx.flush_commands();
        ctx.sync_computes();
        assert_eq!(ctx.state::<Counter>().value, 1);
    }

    static STASHED: Mutex<Vec<Updater>> = Mutex::new(Vec::new());

    #[derive(Default)]
    struct StashUpdaterCommand;

    impl Command for StashUpdaterCommand {
        fn run(&self, _deps: Dep, updater: Updater) {
            STASHED.lock().unwrap().push(updater);
        }
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());

        STASHED.lock().unwrap().clear();
        ctx.dispatch::<StashUpdaterCommand>();
        ctx.dispatch::<StashUpdaterCommand>();

        let (first, second) = {
            let stashed = STASHED.lock().unwrap();
            (stashed[0].clone(), stashed[1].clone())
        };

        // The newer dispatch resolves first; the older one arrives late and
        // must not clobber it.
        second.set(Counter { value: 2 });
        first.set(Counter { value: 1 });
        ctx.sync_computes();

        assert_eq!(
            ctx.state::<Counter>().value,
            2,
            "stale response must not overwrite the latest one"
        );
    }

    #[derive(Debug, Default, Clone)]
    struct Doubled {
        value: i32,
    }

    impl Compute for Doubled {
        fn deps(&self) -> crate::ComputeDeps {
            const STATE_IDS: [TypeId; 1] = [TypeId::of::<Counter>()];
            (&STATE_IDS, &[])
        }

        fn compute(&self, deps: Dep, updater: Updater) -> ComputeStage {
            let counter = deps.get_state_ref::<Counter>();
            updater.set(Doubled {
                value: counter.value * 2,
            });
            ComputeStage::Finished
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    #[test]
    fn compute_reruns_when_dependency_changes() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 3 });
        ctx.record_compute(Doubled::default());

        ctx.run_computed();
        ctx.sync_computes();
        assert_eq!(ctx.cached::<Doubled>().unwrap().value, 6);
        assert_eq!(
            ctx.compute_status::<Doubled>(),
            Some(StateSyncStatus::Clean)
        );

        ctx.update::<Counter>(|c| c.value = 5);
        assert_eq!(
            ctx.compute_status::<Doubled>(),
            Some(StateSyncStatus::Dirty),
            "mutating a dependency must dirty the compute"
        );

        ctx.run_computed();
        ctx.sync_computes();
        assert_eq!(ctx.cached::<Doubled>().unwrap().value, 10);
    }

    #[test]
    fn time_state_roundtrip() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Time::default());

        let now = chrono::Utc::now();
        ctx.update::<Time>(|t| *t.as_mut() = now);
        assert_eq!(*ctx.state::<Time>().as_ref(), now);
    }
}
