use bookstall_business::{NoticeKind, Notices, Route, SearchInput, SubmitSearchCommand};
use bookstall_states::Time;
use bookstall_ui::widgets;

use crate::common::TestCtx;

mod common;

/// Tests that a query under three characters raises exactly one warning and
/// does not navigate.
#[tokio::test]
async fn test_short_query_warns_without_navigating() {
    let mut ctx = TestCtx::new(|ui, state| {
        widgets::app_bar(&mut state.ctx, ui);
    })
    .await;

    let harness = ctx.harness_mut();
    harness.step();

    harness
        .state_mut()
        .ctx
        .update::<SearchInput>(|input| input.query = "ab".to_owned());
    harness.state_mut().ctx.enqueue_command::<SubmitSearchCommand>();
    harness.state_mut().ctx.flush_commands();
    harness.state_mut().ctx.sync_computes();
    harness.step();

    assert_eq!(
        *harness.state().ctx.state::<Route>(),
        Route::default(),
        "a short query must not navigate"
    );

    let now = *harness.state().ctx.state::<Time>().as_ref();
    let notices = harness.state().ctx.state::<Notices>();
    let notice = notices
        .active(now)
        .expect("a short query must raise a warning notice");
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert!(notice.message.contains("3 characters"));
}

/// Tests that a long-enough query switches the route to the search page.
#[tokio::test]
async fn test_valid_query_navigates_to_search() {
    let mut ctx = TestCtx::new(|ui, state| {
        widgets::app_bar(&mut state.ctx, ui);
    })
    .await;

    let harness = ctx.harness_mut();
    harness.step();

    harness
        .state_mut()
        .ctx
        .update::<SearchInput>(|input| input.query = "dune".to_owned());
    harness.state_mut().ctx.enqueue_command::<SubmitSearchCommand>();
    harness.state_mut().ctx.flush_commands();
    harness.state_mut().ctx.sync_computes();
    harness.step();

    assert_eq!(
        *harness.state().ctx.state::<Route>(),
        Route::Search {
            query: "dune".to_owned()
        }
    );

    let now = *harness.state().ctx.state::<Time>().as_ref();
    assert!(
        harness.state().ctx.state::<Notices>().active(now).is_none(),
        "a valid query must not raise a notice"
    );
}
