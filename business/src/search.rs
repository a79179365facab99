//! Storefront search from the navigation bar.

use std::any::Any;

use bookstall_states::{Command, Dep, State, Time, Updater, state_assign_impl};
use log::info;

use crate::{Notices, Route};

/// Queries shorter than this are rejected with a warning instead of
/// navigating.
pub const MIN_QUERY_CHARS: usize = 3;

/// The text currently in the app bar's search box.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub query: String,
}

impl State for SearchInput {
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

/// The storefront path a query navigates to, query URL-encoded.
pub fn search_path(query: &str) -> String {
    format!("/Search?name={}", urlencoding::encode(query))
}

/// Submits the search box.
///
/// Under [`MIN_QUERY_CHARS`] characters: one transient warning notice, no
/// navigation. Otherwise the route switches to the search results page.
///
/// Dispatch via `ctx.enqueue_command::<SubmitSearchCommand>()`.
#[derive(Default, Debug)]
pub struct SubmitSearchCommand;

impl Command for SubmitSearchCommand {
    fn run(&self, deps: Dep, updater: Updater) {
        let input = deps.get_state_ref::<SearchInput>();
        let now = *deps.get_state_ref::<Time>().as_ref();

        if input.query.chars().count() < MIN_QUERY_CHARS {
            info!("search rejected: query shorter than {MIN_QUERY_CHARS} characters");
            updater.set(Notices::warning(
                "Search needs at least 3 characters.",
                now,
            ));
            return;
        }

        info!("navigating to {}", search_path(&input.query));
        updater.set(Route::Search {
            query: input.query.clone(),
        });
    }
}
