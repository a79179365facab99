//! A small typed state container for egui applications.
//!
//! The pieces fit together like this:
//! - [`State`]: plain application state, stored in [`StateCtx`] by `TypeId`.
//! - [`Compute`]: a cache that re-derives (or re-fetches) itself when marked
//!   dirty. Network-backed computes return [`ComputeStage::Pending`] and
//!   publish their replacement through an [`Updater`] once the response lands.
//! - [`Command`]: an explicit user action, dispatched via
//!   `StateCtx::dispatch` (or enqueued during rendering and flushed at the
//!   end of the frame).
//!
//! Every [`Updater`] is stamped with a generation for its dispatch source.
//! `StateCtx::sync_computes` drops envelopes whose generation is no longer
//! current, so a superseded in-flight request can never overwrite state that
//! a newer request already produced.

mod basic_state;
mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod state;
mod sync_status;
mod updater;

pub use basic_state::Time;
pub use command::Command;
pub use compute::{Compute, ComputeDeps, ComputeStage, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use state::{State, state_assign_impl};
pub use sync_status::StateSyncStatus;
pub use updater::Updater;
