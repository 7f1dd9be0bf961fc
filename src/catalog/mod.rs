//! The product catalog and the filter engine over it.
//!
//! The catalog is supplied by an external collaborator (static data or a
//! one-shot load at startup) and is read-only to the core: filtering
//! borrows from it and never mutates it.

mod container;
mod filter;
mod load;

pub use container::Catalog;
pub use filter::{filter_products, CategoryFilter, FilterCriteria, PriceRange};
pub use load::from_json_str;
