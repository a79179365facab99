//! Session state behind the navigation bar.
//!
//! `SessionCompute` polls the storefront's status endpoint and caches the
//! logged-in flag; `LogoutCommand` drives the logout transition. Both publish
//! through generation-stamped updaters, so a superseded request can never
//! overwrite state a newer one produced.
//!
//! Failure policy: a failed status check keeps the prior flag (logged, not
//! user-visible); a failed logout keeps the session and credential untouched
//! and raises a transient error notice.

use std::any::{Any, TypeId};

use bookstall_states::{
    Command, Compute, ComputeDeps, ComputeStage, Dep, Time, Updater, assign_impl,
};
use chrono::{DateTime, Utc};
use log::{error, info};
use serde::Deserialize;

use crate::{BusinessConfig, CredentialStore, Notices};

/// How long a successful or failed check stays fresh before the compute
/// fetches again.
pub const SESSION_RECHECK_MINUTES: i64 = 5;

/// Body of `GET {api}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
}

/// Body of `GET {api}/logout`. Only logged; the credential is cleared on
/// HTTP-ok regardless of what the body says.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutResponse {
    pub message: Option<String>,
}

/// Cached login flag for the navigation bar.
#[derive(Debug, Clone, Default)]
pub struct SessionCompute {
    logged_in: bool,
    last_check: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

impl SessionCompute {
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The value a fresh status response produces.
    pub fn checked(logged_in: bool, now: DateTime<Utc>) -> Self {
        Self {
            logged_in,
            last_check: Some(now),
            last_error: None,
        }
    }

    /// The value a completed logout produces.
    pub fn logged_out(now: DateTime<Utc>) -> Self {
        Self {
            logged_in: false,
            last_check: Some(now),
            last_error: None,
        }
    }

    fn failed(&self, error: String, now: DateTime<Utc>) -> Self {
        // Keep the prior flag; only record when and why the check failed.
        Self {
            logged_in: self.logged_in,
            last_check: Some(now),
            last_error: Some(error),
        }
    }
}

impl Compute for SessionCompute {
    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 1] = [TypeId::of::<Time>()];
        (&STATE_IDS, &[])
    }

    fn compute(&self, deps: Dep, updater: Updater) -> ComputeStage {
        let now = *deps.get_state_ref::<Time>().as_ref();
        let should_fetch = match self.last_check {
            Some(last_check) => {
                now.signed_duration_since(last_check).num_minutes() >= SESSION_RECHECK_MINUTES
            }
            None => true,
        };
        if !should_fetch {
            return ComputeStage::Finished;
        }

        let config = deps.get_state_ref::<BusinessConfig>();
        let url = format!("{}/status", config.api_url());
        let prior = self.clone();

        info!("checking session status at {now:?}");
        ehttp::fetch(ehttp::Request::get(&url), move |result| match result {
            Ok(response) if response.ok => {
                match serde_json::from_slice::<StatusResponse>(&response.bytes) {
                    Ok(status) => {
                        info!(
                            "session status: user is {}",
                            if status.is_logged_in {
                                "logged in"
                            } else {
                                "not logged in"
                            }
                        );
                        updater.set(SessionCompute::checked(status.is_logged_in, now));
                    }
                    Err(err) => {
                        error!("session status: failed to parse response: {err}");
                        updater.set(prior.failed(err.to_string(), now));
                    }
                }
            }
            Ok(response) => {
                error!("session status check returned status {}", response.status);
                updater.set(prior.failed(format!("status {}", response.status), now));
            }
            Err(err) => {
                error!("session status check failed: {err}");
                updater.set(prior.failed(err, now));
            }
        });
        ComputeStage::Pending
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Signs the seller out.
///
/// On HTTP-ok the client credential artifact is cleared (regardless of the
/// response body) and the session flag flips to logged out. On failure the
/// user stays apparently logged in: state is untouched, the failure is
/// logged, and a transient error notice tells the user to retry.
///
/// Dispatch via `ctx.enqueue_command::<LogoutCommand>()`.
#[derive(Default, Debug)]
pub struct LogoutCommand;

impl Command for LogoutCommand {
    fn run(&self, deps: Dep, updater: Updater) {
        let config = deps.get_state_ref::<BusinessConfig>();
        let now = *deps.get_state_ref::<Time>().as_ref();
        let url = format!("{}/logout", config.api_url());

        info!("logging out via {url}");
        ehttp::fetch(ehttp::Request::get(&url), move |result| match result {
            Ok(response) if response.ok => {
                match serde_json::from_slice::<LogoutResponse>(&response.bytes) {
                    Ok(body) => info!("logged out: {}", body.message.as_deref().unwrap_or("ok")),
                    Err(_) => info!("logged out"),
                }
                updater.set(CredentialStore::default());
                updater.set(SessionCompute::logged_out(now));
            }
            Ok(response) => {
                error!("logout failed with status {}", response.status);
                updater.set(Notices::error("Logout failed. Please try again.", now));
            }
            Err(err) => {
                error!("logout failed: {err}");
                updater.set(Notices::error("Logout failed. Please try again.", now));
            }
        });
    }
}
