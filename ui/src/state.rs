use bookstall_business::{
    BooksListing, BusinessConfig, CouponsListing, CredentialStore, Notices, OrdersListing, Route,
    SearchInput, SessionCompute,
};
use bookstall_states::{StateCtx, Time};

/// The main application state: a fully populated state context.
pub struct State {
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    /// State wired to a test server instead of the production API.
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }

    fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(Route::default());
        ctx.add_state(SearchInput::default());
        ctx.add_state(Notices::default());
        ctx.add_state(CredentialStore::default());
        ctx.add_state(BooksListing::default());
        ctx.add_state(CouponsListing::default());
        ctx.add_state(OrdersListing::default());
        ctx.record_compute(SessionCompute::default());

        Self { ctx }
    }
}
