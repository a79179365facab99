use bookstall_business::{BOOK_ROWS, Route, Section, search_path};
use bookstall_states::StateCtx;
use egui::{Response, RichText, Ui};

/// Results page for a submitted search.
///
/// The dashboard only carries the seeded books, so matching is a simple
/// title lookup; the storefront proper serves the real catalog.
pub fn search_page(state_ctx: &mut StateCtx, ui: &mut Ui, query: &str) -> Response {
    ui.vertical(|ui| {
        ui.heading("Search");
        ui.label(RichText::new(search_path(query)).monospace().small());
        ui.add_space(8.0);

        let matches: Vec<_> = BOOK_ROWS
            .iter()
            .filter(|row| row.book.to_lowercase().contains(&query.to_lowercase()))
            .collect();

        if matches.is_empty() {
            ui.label(format!("No books matching \"{query}\"."));
        } else {
            for row in matches {
                ui.label(format!("{} ({})", row.book, row.description));
            }
        }

        ui.add_space(16.0);
        if ui.button("Back to dashboard").clicked() {
            state_ctx.update::<Route>(|route| *route = Route::Dashboard(Section::default()));
        }
    })
    .response
}
