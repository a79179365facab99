//! The generic listing widget: category tabs, the table itself, and the
//! pagination strip. Instantiated once per dashboard section with that
//! section's `ListingSpec`, seed rows, and `ListingState`.

use bookstall_business::{
    CellAlign, ListingSpec, ListingState, PageView, ROWS_PER_PAGE_OPTIONS, page_view,
};
use egui::{Align, Layout, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

const ROW_HEIGHT: f32 = 28.0;
const HEADER_HEIGHT: f32 = 24.0;

pub fn listing_table<R>(ui: &mut Ui, spec: &ListingSpec<R>, rows: &[R], state: &mut ListingState) {
    ui.push_id(spec.title, |ui| {
        category_tabs(ui, spec, state);
        ui.separator();

        let view = page_view(spec, rows, state);
        data_table(ui, spec, &view);

        ui.separator();
        pagination_strip(ui, state, &view);
    });
}

fn category_tabs<R>(ui: &mut Ui, spec: &ListingSpec<R>, state: &mut ListingState) {
    ui.horizontal(|ui| {
        for category in spec.categories {
            if ui
                .selectable_label(state.category() == *category, *category)
                .clicked()
            {
                state.select_category(category);
            }
        }
    });
}

fn data_table<R>(ui: &mut Ui, spec: &ListingSpec<R>, view: &PageView<'_, R>) {
    let mut builder = TableBuilder::new(ui).striped(true).id_salt(spec.title);
    for column in spec.columns {
        builder = builder.column(match column.min_width {
            Some(width) => TableColumn::remainder().at_least(width),
            None => TableColumn::remainder(),
        });
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            for column in spec.columns {
                header.col(|ui| {
                    cell_layout(ui, column.align, |ui| {
                        ui.strong(column.label);
                    });
                });
            }
        })
        .body(|mut body| {
            for row in &view.rows {
                body.row(ROW_HEIGHT, |mut table_row| {
                    for column in spec.columns {
                        table_row.col(|ui| {
                            cell_layout(ui, column.align, |ui| {
                                ui.label(column.display(row));
                            });
                        });
                    }
                });
            }
        });
}

fn cell_layout(ui: &mut Ui, align: CellAlign, add: impl FnOnce(&mut Ui)) {
    let layout = match align {
        CellAlign::Right => Layout::right_to_left(Align::Center),
        CellAlign::Left => Layout::left_to_right(Align::Center),
    };
    ui.with_layout(layout, add);
}

fn pagination_strip<R>(ui: &mut Ui, state: &mut ListingState, view: &PageView<'_, R>) {
    ui.horizontal(|ui| {
        ui.label("Rows per page:");
        egui::ComboBox::from_id_salt("rows_per_page")
            .selected_text(state.rows_per_page().to_string())
            .show_ui(ui, |ui| {
                for option in ROWS_PER_PAGE_OPTIONS {
                    if ui
                        .selectable_label(state.rows_per_page() == option, option.to_string())
                        .clicked()
                    {
                        state.set_rows_per_page(option);
                    }
                }
            });

        ui.add_space(12.0);
        let (start, end) = view.display_range();
        ui.label(format!("{start}–{end} of {}", view.filtered_len));

        let can_go_back = state.page() > 0;
        if ui.add_enabled(can_go_back, egui::Button::new("<")).clicked() {
            state.set_page(state.page() - 1);
        }
        let has_next = (state.page() + 1) * state.rows_per_page() < view.filtered_len;
        if ui.add_enabled(has_next, egui::Button::new(">")).clicked() {
            state.set_page(state.page() + 1);
        }
    });
}
