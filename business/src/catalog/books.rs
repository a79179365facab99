use crate::table::{CATEGORY_ALL, CellAlign, CellValue, Column, ListingSpec, group_thousands};

/// One book offer as listed in the seller dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub book: &'static str,
    pub description: &'static str,
    pub price: i64,
    pub status: &'static str,
}

pub static BOOK_CATEGORIES: [&str; 5] =
    [CATEGORY_ALL, "On sale", "Sold", "Ordered", "No picture"];

pub static BOOK_COLUMNS: [Column<BookRow>; 4] = [
    Column {
        id: "book",
        label: "Book(s)",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: None,
        value: |row: &BookRow| CellValue::Text(row.book),
    },
    Column {
        id: "description",
        label: "Description",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: None,
        value: |row: &BookRow| CellValue::Text(row.description),
    },
    Column {
        id: "price",
        label: "Price",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: Some(group_thousands),
        value: |row: &BookRow| CellValue::Number(row.price),
    },
    Column {
        id: "status",
        label: "Status",
        align: CellAlign::Right,
        min_width: Some(170.0),
        format: None,
        value: |row: &BookRow| CellValue::Text(row.status),
    },
];

pub static BOOKS: ListingSpec<BookRow> = ListingSpec {
    title: "Books",
    columns: &BOOK_COLUMNS,
    categories: &BOOK_CATEGORIES,
    category_of: |row: &BookRow| row.status,
};

pub static BOOK_ROWS: [BookRow; 15] = [
    BookRow { book: "India", description: "IN", price: 1324171354, status: "All" },
    BookRow { book: "China", description: "CN", price: 1403500365, status: "Ordered" },
    BookRow { book: "Italy", description: "IT", price: 60483973, status: "On sale" },
    BookRow { book: "United States", description: "US", price: 327167434, status: "Sold" },
    BookRow { book: "Canada", description: "CA", price: 37602103, status: "No picture" },
    BookRow { book: "Australia", description: "AU", price: 25475400, status: "All" },
    BookRow { book: "Germany", description: "DE", price: 83019200, status: "Ordered" },
    BookRow { book: "Ireland", description: "IE", price: 4857000, status: "On sale" },
    BookRow { book: "Mexico", description: "MX", price: 126577691, status: "Sold" },
    BookRow { book: "Japan", description: "JP", price: 126317000, status: "No picture" },
    BookRow { book: "France", description: "FR", price: 67022000, status: "All" },
    BookRow { book: "United Kingdom", description: "GB", price: 67545757, status: "Ordered" },
    BookRow { book: "Russia", description: "RU", price: 146793744, status: "On sale" },
    BookRow { book: "Nigeria", description: "NG", price: 200962417, status: "Sold" },
    BookRow { book: "Brazil", description: "BR", price: 210147125, status: "No picture" },
];
