/// Lifecycle of a recorded compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Recorded but never run.
    #[default]
    Init,
    /// A dependency changed since the last run.
    Dirty,
    /// An async job is in flight; do not re-run until its result lands.
    Pending,
    /// Up to date.
    Clean,
}
