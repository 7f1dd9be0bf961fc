//! Cart store and derived cart state.
//!
//! The cart owns its line items exclusively. It is handed by reference to
//! whichever collaborator needs it rather than living in ambient shared
//! state; [`SharedCart`] wraps it in a lock for callers that hand the
//! same cart to multiple owners while keeping the single-writer
//! discipline (line mutations are not commutative, so interleaved
//! add/remove on the same product must serialize).

mod line;
mod store;
mod summary;

pub use line::{CartLine, ProductSnapshot};
pub use store::{CartState, CartStore, SharedCart};
pub use summary::OrderSummary;
