use bookstall_business::{Route, Section};
use bookstall_states::StateCtx;
use egui::{Response, Ui};

/// Placeholder for the storefront's login/sign-up flow, which lives outside
/// the seller dashboard.
pub fn login_signup_page(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Login / Sign up");
        ui.label("Signing in happens in the Bookstall storefront.");

        ui.add_space(16.0);
        if ui.button("Back to dashboard").clicked() {
            state_ctx.update::<Route>(|route| *route = Route::Dashboard(Section::default()));
        }
    })
    .response
}
