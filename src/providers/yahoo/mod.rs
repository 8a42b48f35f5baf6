pub mod api;
pub mod models;

pub use api::YahooApi;
pub use models::*;
