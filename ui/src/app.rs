use bookstall_states::{StateCtx, Time};
use chrono::Utc;

use bookstall_business::Route;

use crate::{pages, state::State, widgets};

pub struct BookstallApp {
    state: State,
}

impl BookstallApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn ctx(&self) -> &StateCtx {
        &self.state.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut StateCtx {
        &mut self.state.ctx
    }
}

impl eframe::App for BookstallApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance the virtual clock, then apply async results for render.
        self.state
            .ctx
            .update::<Time>(|time| *time.as_mut() = Utc::now());
        self.state.ctx.sync_computes();

        egui::TopBottomPanel::top("app_bar").show(ctx, |ui| {
            widgets::app_bar(&mut self.state.ctx, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let route = self.state.ctx.state::<Route>().clone();
            match route {
                Route::Dashboard(section) => {
                    pages::dashboard_page(&mut self.state.ctx, ui, section);
                }
                Route::Search { query } => {
                    pages::search_page(&mut self.state.ctx, ui, &query);
                }
                Route::LoginSignup => {
                    pages::login_signup_page(&mut self.state.ctx, ui);
                }
            }
        });

        widgets::notice_toast(&self.state.ctx, ctx);

        // Run queued actions and background jobs end-of-frame.
        self.state.ctx.flush_commands();
        self.state.ctx.run_computed();
    }
}
