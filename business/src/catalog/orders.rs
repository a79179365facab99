use crate::table::{CATEGORY_ALL, CellAlign, CellValue, Column, ListingSpec, group_thousands};

/// One order as listed in the seller dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub book: &'static str,
    pub order_total: i64,
    pub status: &'static str,
    pub all_channels: &'static str,
}

pub static ORDER_CATEGORIES: [&str; 5] = [
    CATEGORY_ALL,
    "To ship",
    "Shipping",
    "Completed",
    "Cancellation",
];

pub static ORDER_COLUMNS: [Column<OrderRow>; 4] = [
    Column {
        id: "book",
        label: "Book(s)",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: None,
        value: |row: &OrderRow| CellValue::Text(row.book),
    },
    Column {
        id: "order_total",
        label: "Order Total",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: Some(group_thousands),
        value: |row: &OrderRow| CellValue::Number(row.order_total),
    },
    Column {
        id: "status",
        label: "Status",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: None,
        value: |row: &OrderRow| CellValue::Text(row.status),
    },
    Column {
        id: "all_channels",
        label: "All Channels",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: None,
        value: |row: &OrderRow| CellValue::Text(row.all_channels),
    },
];

pub static ORDERS: ListingSpec<OrderRow> = ListingSpec {
    title: "Orders",
    columns: &ORDER_COLUMNS,
    categories: &ORDER_CATEGORIES,
    category_of: |row: &OrderRow| row.status,
};

pub static ORDER_ROWS: [OrderRow; 15] = [
    OrderRow { book: "India", order_total: 100, status: "To ship", all_channels: "IE" },
    OrderRow { book: "China", order_total: 1403500365, status: "Shipping", all_channels: "CN" },
    OrderRow { book: "Italy", order_total: 60483973, status: "Completed", all_channels: "IT" },
    OrderRow { book: "United States", order_total: 327167434, status: "Cancellation", all_channels: "US" },
    OrderRow { book: "Canada", order_total: 37602103, status: "To ship", all_channels: "CA" },
    OrderRow { book: "Australia", order_total: 25475400, status: "Shipping", all_channels: "AU" },
    OrderRow { book: "Germany", order_total: 83019200, status: "Completed", all_channels: "DE" },
    OrderRow { book: "Ireland", order_total: 4857000, status: "Cancellation", all_channels: "IE" },
    OrderRow { book: "Mexico", order_total: 126577691, status: "To ship", all_channels: "MX" },
    OrderRow { book: "Japan", order_total: 126317000, status: "Shipping", all_channels: "JP" },
    OrderRow { book: "France", order_total: 67022000, status: "Completed", all_channels: "FR" },
    OrderRow { book: "United Kingdom", order_total: 67545757, status: "Cancellation", all_channels: "GB" },
    OrderRow { book: "Russia", order_total: 146793744, status: "To ship", all_channels: "RU" },
    OrderRow { book: "Nigeria", order_total: 200962417, status: "Shipping", all_channels: "NG" },
    OrderRow { book: "Brazil", order_total: 210147125, status: "Completed", all_channels: "BR" },
];
