pub mod aggregate;
pub mod enrich;
pub mod filter;
pub mod sort;
pub mod table;

pub use aggregate::aggregate_puts;
pub use enrich::enrich;
pub use filter::filter_relevant;
pub use sort::sort_by_expiry;
pub use table::{PutContract, PutRow};
