use bookstall_business::{
    BOOK_ROWS, BOOKS, BooksListing, COUPON_ROWS, COUPONS, CouponsListing, ORDER_ROWS, ORDERS,
    OrdersListing, Route, Section,
};
use bookstall_states::StateCtx;
use egui::{Response, Ui};

use crate::widgets;

/// Renders the seller dashboard: the section tabs plus the active section's
/// listing. Each section keeps its own filter and pagination state.
pub fn dashboard_page(state_ctx: &mut StateCtx, ui: &mut Ui, section: Section) -> Response {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            for candidate in Section::ALL {
                if ui
                    .selectable_label(section == candidate, candidate.label())
                    .clicked()
                    && section != candidate
                {
                    state_ctx.update::<Route>(|route| *route = Route::Dashboard(candidate));
                }
            }
        });
        ui.add_space(8.0);

        match section {
            Section::Books => {
                let books = state_ctx.state_mut::<BooksListing>();
                widgets::listing_table(ui, &BOOKS, &BOOK_ROWS, &mut books.listing);
            }
            Section::Coupons => {
                let coupons = state_ctx.state_mut::<CouponsListing>();
                widgets::listing_table(ui, &COUPONS, &COUPON_ROWS, &mut coupons.listing);
            }
            Section::Orders => {
                let orders = state_ctx.state_mut::<OrdersListing>();
                widgets::listing_table(ui, &ORDERS, &ORDER_ROWS, &mut orders.listing);
            }
        }
    })
    .response
}
