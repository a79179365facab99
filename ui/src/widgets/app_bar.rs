//! Top navigation bar.
//!
//! Always shows the brand and the search box. The session-dependent actions
//! come from `SessionCompute`: Seller Center + Logout when logged in, a
//! Login / Sign up link otherwise. A small status dot reflects the last
//! status check.

use bookstall_business::{
    LogoutCommand, Route, SearchInput, Section, SessionCompute, SubmitSearchCommand,
};
use bookstall_states::StateCtx;
use egui::{Align, Color32, Layout, Response, RichText, Ui};

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

/// Radius of the session status dot (in pixels)
const STATUS_DOT_RADIUS: f32 = 5.0;

pub fn app_bar(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.horizontal(|ui| {
        let brand = ui.add(
            egui::Label::new(RichText::new("Bookstall").heading().strong())
                .sense(egui::Sense::click()),
        );
        if brand.clicked() {
            state_ctx.update::<Route>(|route| *route = Route::Dashboard(Section::default()));
        }

        ui.add_space(16.0);
        search_box(state_ctx, ui);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let _ = session_status_dot(state_ctx, ui);
            ui.add_space(8.0);
            session_actions(state_ctx, ui);
        });
    })
    .response
}

fn search_box(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let mut query = state_ctx.state::<SearchInput>().query.clone();

    let edit = ui.add(
        egui::TextEdit::singleline(&mut query)
            .hint_text("Search for books…")
            .desired_width(280.0),
    );
    let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    if query != state_ctx.state::<SearchInput>().query {
        state_ctx.update::<SearchInput>(|input| input.query = query.clone());
    }
    if submitted {
        state_ctx.enqueue_command::<SubmitSearchCommand>();
    }
}

fn session_actions(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let logged_in = state_ctx
        .cached::<SessionCompute>()
        .map(|session| session.is_logged_in())
        .unwrap_or(false);

    if logged_in {
        if ui.button("Logout").clicked() {
            state_ctx.enqueue_command::<LogoutCommand>();
        }
        if ui.button("Seller Center").clicked() {
            state_ctx.update::<Route>(|route| *route = Route::Dashboard(Section::default()));
        }
    } else if ui.button("Login / Sign up").clicked() {
        state_ctx.update::<Route>(|route| *route = Route::LoginSignup);
    }
}

fn session_status_dot(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    let (tooltip, color) = match state_ctx.cached::<SessionCompute>() {
        Some(session) => match session.last_error() {
            Some(error) => (format!("Session check failed: {error}"), COLOR_RED),
            None if session.is_logged_in() => ("Signed in".to_owned(), COLOR_GREEN),
            None => ("Signed out".to_owned(), COLOR_AMBER),
        },
        None => ("Session: checking".to_owned(), COLOR_AMBER),
    };
    status_dot(ui, tooltip, color)
}

fn status_dot(ui: &mut Ui, tooltip_text: String, dot_color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        egui::Sense::hover(),
    );

    let center = rect.center();
    ui.painter()
        .circle(center, STATUS_DOT_RADIUS, dot_color, egui::Stroke::NONE);

    response.on_hover_text(tooltip_text)
}
