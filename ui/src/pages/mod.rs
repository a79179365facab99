//! Pages of the application, selected by the current `Route`:
//! - `dashboard_page`: the seller dashboard with its section listings
//! - `search_page`: results for a submitted storefront search
//! - `login_signup_page`: placeholder for the storefront's auth flow

mod dashboard_page;
mod login_signup_page;
mod search_page;

pub use dashboard_page::dashboard_page;
pub use login_signup_page::login_signup_page;
pub use search_page::search_page;
