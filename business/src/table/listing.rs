use crate::table::Column;

/// Page sizes offered by the pagination control.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [10, 25, 100];

/// The identity category: every spec's category set starts with it.
pub const CATEGORY_ALL: &str = "All";

/// Static description of one listing domain: its columns, its category set
/// (with [`CATEGORY_ALL`] first), and how to read a row's category field.
pub struct ListingSpec<R: 'static> {
    pub title: &'static str,
    pub columns: &'static [Column<R>],
    pub categories: &'static [&'static str],
    pub category_of: fn(&R) -> &'static str,
}

/// Filter selection plus pagination for one listing instance.
///
/// All mutators that can shrink the visible set reset the page to 0, so a
/// stale page offset is unreachable through the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    category: &'static str,
    page: usize,
    rows_per_page: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            category: CATEGORY_ALL,
            page: 0,
            rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
        }
    }
}

impl ListingState {
    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Switch the category tab. Selecting a different tab resets the page,
    /// so the new (possibly smaller) filtered set starts from its beginning.
    pub fn select_category(&mut self, category: &'static str) {
        if self.category != category {
            self.category = category;
            self.page = 0;
        }
    }

    /// Change the page size and reset to the first page, so the offset can
    /// never point past the new slice.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page;
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}

/// One visible page of a filtered listing.
pub struct PageView<'r, R> {
    /// The visible slice, in seed order.
    pub rows: Vec<&'r R>,
    /// Length of the filtered set (the count the pagination label reports).
    pub filtered_len: usize,
    /// 0-based index of the first visible row within the filtered set.
    pub start: usize,
}

impl<R> PageView<'_, R> {
    /// 1-based inclusive display range for the `start–end of n` label;
    /// `(0, 0)` when the page is empty.
    pub fn display_range(&self) -> (usize, usize) {
        if self.rows.is_empty() {
            (0, 0)
        } else {
            (self.start + 1, self.start + self.rows.len())
        }
    }
}

/// Filter `rows` by the selected category, then slice out the current page.
///
/// `CATEGORY_ALL` keeps every row; any other selection keeps exactly the
/// rows whose category field equals it. An out-of-range page yields an empty
/// slice rather than an error.
pub fn page_view<'r, R>(
    spec: &ListingSpec<R>,
    rows: &'r [R],
    state: &ListingState,
) -> PageView<'r, R> {
    let filtered: Vec<&R> = if state.category == CATEGORY_ALL {
        rows.iter().collect()
    } else {
        rows.iter()
            .filter(|row| (spec.category_of)(row) == state.category)
            .collect()
    };

    let filtered_len = filtered.len();
    let start = state.page * state.rows_per_page;
    let page = if start >= filtered_len {
        Vec::new()
    } else {
        filtered[start..(start + state.rows_per_page).min(filtered_len)].to_vec()
    };

    PageView {
        rows: page,
        filtered_len,
        start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellAlign, CellValue};

    struct Item {
        name: &'static str,
        group: &'static str,
    }

    static ITEM_COLUMNS: [Column<Item>; 2] = [
        Column {
            id: "name",
            label: "Name",
            align: CellAlign::Left,
            min_width: None,
            format: None,
            value: |row: &Item| CellValue::Text(row.name),
        },
        Column {
            id: "group",
            label: "Group",
            align: CellAlign::Left,
            min_width: None,
            format: None,
            value: |row: &Item| CellValue::Text(row.group),
        },
    ];

    static ITEMS_SPEC: ListingSpec<Item> = ListingSpec {
        title: "Items",
        columns: &ITEM_COLUMNS,
        categories: &[CATEGORY_ALL, "red", "blue"],
        category_of: |row: &Item| row.group,
    };

    fn items() -> Vec<Item> {
        // 13 red, 12 blue
        (0..25)
            .map(|i| Item {
                name: if i % 2 == 0 { "even" } else { "odd" },
                group: if i % 2 == 0 { "red" } else { "blue" },
            })
            .collect()
    }

    #[test]
    fn test_all_category_is_identity() {
        let rows = items();
        let mut state = ListingState::default();
        state.set_rows_per_page(100);

        let view = page_view(&ITEMS_SPEC, &rows, &state);
        assert_eq!(view.filtered_len, rows.len());
        assert_eq!(view.rows.len(), rows.len());
    }

    #[test]
    fn test_filter_keeps_exactly_matching_rows() {
        let rows = items();
        let mut state = ListingState::default();
        state.set_rows_per_page(100);
        state.select_category("red");

        let view = page_view(&ITEMS_SPEC, &rows, &state);
        assert_eq!(view.filtered_len, 13);
        assert!(view.rows.iter().all(|row| row.group == "red"));
    }

    #[test]
    fn test_slice_matches_page_and_rows_per_page() {
        let rows = items();
        let mut state = ListingState::default();

        // Page 0 and 1 of 25 rows at 10 per page.
        let view = page_view(&ITEMS_SPEC, &rows, &state);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.display_range(), (1, 10));

        state.set_page(2);
        let view = page_view(&ITEMS_SPEC, &rows, &state);
        assert_eq!(view.rows.len(), 5, "last page holds the remainder");
        assert_eq!(view.display_range(), (21, 25));
        assert!(view.rows.len() <= state.rows_per_page());
    }

    #[test]
    fn test_out_of_range_page_yields_empty_slice() {
        let rows = items();
        let mut state = ListingState::default();
        state.set_page(9);

        let view = page_view(&ITEMS_SPEC, &rows, &state);
        assert!(view.rows.is_empty());
        assert_eq!(view.filtered_len, 25);
        assert_eq!(view.display_range(), (0, 0));
    }

    #[test]
    fn test_rows_per_page_change_resets_page() {
        let mut state = ListingState::default();
        state.set_page(2);

        state.set_rows_per_page(25);
        assert_eq!(state.page(), 0);
        assert_eq!(state.rows_per_page(), 25);
    }

    #[test]
    fn test_category_change_resets_page() {
        let mut state = ListingState::default();
        state.set_page(2);

        state.select_category("blue");
        assert_eq!(state.page(), 0);

        // Re-selecting the active tab is a no-op and keeps the page.
        state.set_page(1);
        state.select_category("blue");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_filtered_rows_keep_seed_order() {
        let rows = [
            Item {
                name: "a",
                group: "red",
            },
            Item {
                name: "b",
                group: "blue",
            },
            Item {
                name: "c",
                group: "red",
            },
        ];
        let mut state = ListingState::default();
        state.select_category("red");

        let view = page_view(&ITEMS_SPEC, &rows, &state);
        let names: Vec<&str> = view.rows.iter().map(|row| row.name).collect();
        assert_eq!(names, ["a", "c"]);
    }
}
