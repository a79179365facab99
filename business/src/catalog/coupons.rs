use crate::table::{CATEGORY_ALL, CellAlign, CellValue, Column, ListingSpec, group_thousands};

/// One seller coupon. `kind` is the category field (the storefront calls it
/// the coupon's "type").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponRow {
    pub couponname: &'static str,
    pub code: i64,
    pub kind: &'static str,
    pub period: &'static str,
    pub discountrate: i64,
    pub description: &'static str,
}

pub static COUPON_CATEGORIES: [&str; 4] = [CATEGORY_ALL, "Ongoing", "Upcoming", "Expired"];

pub static COUPON_COLUMNS: [Column<CouponRow>; 6] = [
    Column {
        id: "couponname",
        label: "Coupon Name",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: None,
        value: |row: &CouponRow| CellValue::Text(row.couponname),
    },
    Column {
        id: "code",
        label: "Code",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: Some(group_thousands),
        value: |row: &CouponRow| CellValue::Number(row.code),
    },
    Column {
        id: "type",
        label: "Type",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: None,
        value: |row: &CouponRow| CellValue::Text(row.kind),
    },
    Column {
        id: "period",
        label: "Period",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: None,
        value: |row: &CouponRow| CellValue::Text(row.period),
    },
    Column {
        id: "discountrate",
        label: "Discountrate",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: Some(group_thousands),
        value: |row: &CouponRow| CellValue::Number(row.discountrate),
    },
    Column {
        id: "description",
        label: "Description",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: None,
        value: |row: &CouponRow| CellValue::Text(row.description),
    },
];

pub static COUPONS: ListingSpec<CouponRow> = ListingSpec {
    title: "Coupons",
    columns: &COUPON_COLUMNS,
    categories: &COUPON_CATEGORIES,
    category_of: |row: &CouponRow| row.kind,
};

pub static COUPON_ROWS: [CouponRow; 15] = [
    CouponRow { couponname: "India", code: 100, kind: "All", period: "3287263", discountrate: 0, description: "Description 1" },
    CouponRow { couponname: "China", code: 1403500365, kind: "Ongoing", period: "9596961", discountrate: 0, description: "Description 2" },
    CouponRow { couponname: "Italy", code: 60483973, kind: "Upcoming", period: "301340", discountrate: 0, description: "Description 3" },
    CouponRow { couponname: "United States", code: 327167434, kind: "Expired", period: "9833520", discountrate: 0, description: "Description 4" },
    CouponRow { couponname: "Canada", code: 37602103, kind: "All", period: "9984670", discountrate: 0, description: "Description 5" },
    CouponRow { couponname: "Australia", code: 25475400, kind: "Ongoing", period: "7692024", discountrate: 0, description: "Description 6" },
    CouponRow { couponname: "Germany", code: 83019200, kind: "Upcoming", period: "357578", discountrate: 0, description: "Description 7" },
    CouponRow { couponname: "Ireland", code: 4857000, kind: "Expired", period: "70273", discountrate: 0, description: "Description 8" },
    CouponRow { couponname: "Mexico", code: 126577691, kind: "All", period: "1972550", discountrate: 0, description: "Description 9" },
    CouponRow { couponname: "Japan", code: 126317000, kind: "Ongoing", period: "377973", discountrate: 0, description: "Description 10" },
    CouponRow { couponname: "France", code: 67022000, kind: "Upcoming", period: "640679", discountrate: 0, description: "Description 11" },
    CouponRow { couponname: "United Kingdom", code: 67545757, kind: "Expired", period: "242495", discountrate: 0, description: "Description 12" },
    CouponRow { couponname: "Russia", code: 146793744, kind: "All", period: "17098246", discountrate: 0, description: "Description 13" },
    CouponRow { couponname: "Nigeria", code: 200962417, kind: "Ongoing", period: "923768", discountrate: 0, description: "Description 14" },
    CouponRow { couponname: "Brazil", code: 210147125, kind: "Upcoming", period: "8515767", discountrate: 0, description: "Description 15" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ListingState, page_view};

    #[test]
    fn test_coupon_filter_matches_kind_field() {
        let mut state = ListingState::default();
        state.set_rows_per_page(100);
        state.select_category("Ongoing");

        let view = page_view(&COUPONS, &COUPON_ROWS, &state);
        let names: Vec<&str> = view.rows.iter().map(|row| row.couponname).collect();
        assert_eq!(names, ["China", "Australia", "Japan", "Nigeria"]);
    }

    #[test]
    fn test_coupon_code_column_groups_thousands() {
        let code = COUPON_COLUMNS
            .iter()
            .find(|column| column.id == "code")
            .expect("coupons must have a code column");
        assert_eq!(code.display(&COUPON_ROWS[1]), "1,403,500,365");
        assert_eq!(code.display(&COUPON_ROWS[0]), "100");
    }

    #[test]
    fn test_period_column_is_text_and_unformatted() {
        // Periods look numeric but are text fields; no grouping may apply.
        let period = COUPON_COLUMNS
            .iter()
            .find(|column| column.id == "period")
            .expect("coupons must have a period column");
        assert_eq!(period.display(&COUPON_ROWS[12]), "17098246");
    }
}
