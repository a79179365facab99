//! Domain logic for the Bookstall seller dashboard.
//!
//! UI code stays "dumb": it reads states and computes from the context,
//! renders, and dispatches commands. Everything with behavior lives here:
//! - the listing engine (category filter + pagination + cell formatting) and
//!   the three catalog instantiations (books, coupons, orders),
//! - the session compute and logout command behind the navigation bar,
//! - search submission with its minimum-length rule,
//! - transient notices, routing, and configuration.

mod catalog;
mod config;
mod credential;
mod notice;
mod route;
mod search;
mod session;
mod table;

pub use catalog::{
    BOOK_CATEGORIES, BOOK_COLUMNS, BOOK_ROWS, BOOKS, BookRow, BooksListing, COUPON_CATEGORIES,
    COUPON_COLUMNS, COUPON_ROWS, COUPONS, CouponRow, CouponsListing, ORDER_CATEGORIES,
    ORDER_COLUMNS, ORDER_ROWS, ORDERS, OrderRow, OrdersListing,
};
pub use config::BusinessConfig;
pub use credential::CredentialStore;
pub use notice::{NOTICE_TTL_SECONDS, Notice, NoticeKind, Notices};
pub use route::{Route, Section};
pub use search::{MIN_QUERY_CHARS, SearchInput, SubmitSearchCommand, search_path};
pub use session::{
    LogoutCommand, LogoutResponse, SESSION_RECHECK_MINUTES, SessionCompute, StatusResponse,
};
pub use table::{
    CATEGORY_ALL, CellAlign, CellValue, Column, ListingSpec, ListingState, PageView,
    ROWS_PER_PAGE_OPTIONS, group_thousands, page_view,
};
