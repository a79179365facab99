use bookstall_ui::state::State;
use egui_kittest::Harness;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a, T = State> {
    _mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, State> {
    /// Harness whose mock storefront reports a logged-in session and accepts
    /// logout.
    pub async fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        Self::with_endpoints(app, true, 200).await
    }

    /// Harness whose mock storefront reports a logged-out session.
    #[allow(unused)]
    pub async fn new_logged_out(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        Self::with_endpoints(app, false, 200).await
    }

    /// Logged-in harness whose logout endpoint answers with `logout_status`.
    #[allow(unused)]
    pub async fn new_with_logout_status(
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
        logout_status: u16,
    ) -> Self {
        Self::with_endpoints(app, true, logout_status).await
    }

    async fn with_endpoints(
        app: impl FnMut(&mut egui::Ui, &mut State) + 'a,
        logged_in: bool,
        logout_status: u16,
    ) -> Self {
        let (mock_server, state) = setup_test_state(logged_in, logout_status).await;
        let harness = Harness::new_ui_state(app, state);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }
}

async fn setup_test_state(logged_in: bool, logout_status: u16) -> (MockServer, State) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "isLoggedIn": logged_in })),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/logout"))
        .respond_with(
            ResponseTemplate::new(logout_status)
                .set_body_json(serde_json::json!({ "message": "signed out" })),
        )
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let state = State::test(base_url);

    (mock_server, state)
}
