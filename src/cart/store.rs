//! The cart store: owns all cart lines and derives totals from them.

use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{Price, Product, ProductId, Quantity};

use super::line::CartLine;

/// Derived cart aggregates, recomputed from the lines on every read.
///
/// `item_count` is the sum of quantities and `subtotal` the sum of
/// snapshot price times quantity over all lines. The snapshot is never
/// stored, so it cannot drift from the lines it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    items: Vec<CartLine>,
    item_count: u64,
    subtotal: Price,
}

impl CartState {
    fn from_lines(lines: &[CartLine]) -> Self {
        let item_count = lines.iter().map(|l| u64::from(l.quantity())).sum();
        let subtotal = lines
            .iter()
            .map(CartLine::line_total)
            .fold(Decimal::ZERO, |acc, total| acc + total);

        Self {
            items: lines.to_vec(),
            item_count,
            subtotal,
        }
    }

    /// Get the cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Get the total number of items (sum of quantities).
    #[must_use]
    pub const fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Get the subtotal over all lines.
    #[must_use]
    pub const fn subtotal(&self) -> Price {
        self.subtotal
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// In-memory cart store.
///
/// Holds at most one [`CartLine`] per product id; adding a product that
/// is already present merges into the existing line. Lines keep their
/// insertion order. All operations are total over their input domains:
/// unknown product ids are silent no-ops so a benign race (a double
/// click removing the same item twice) never surfaces as an error.
///
/// The store has exactly one logical writer. Hand it out behind
/// [`SharedCart`] if several owners need the same cart.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented; otherwise a new line is appended with a snapshot of
    /// the product's current title, price, category and image. A zero
    /// quantity is clamped to 1 at this boundary.
    pub fn add_item(&mut self, product: &Product, quantity: Quantity) {
        let quantity = quantity.max(1);

        if let Some(line) = self.find_mut(product.id()) {
            line.increment(quantity);
            debug!(
                product_id = %product.id(),
                quantity = line.quantity(),
                "merged into existing cart line"
            );
            return;
        }

        self.lines.push(CartLine::new(product, quantity));
        debug!(product_id = %product.id(), quantity, "added cart line");
    }

    /// Set the quantity on an existing line.
    ///
    /// A quantity of zero removes the line: decrementing past 1 and
    /// removal are the same operation here, even though a view may
    /// choose to disable its minus control at quantity 1. Unknown
    /// product ids are a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, new_quantity: Quantity) {
        if new_quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self.find_mut(product_id) {
            line.set_quantity(new_quantity);
            debug!(product_id = %product_id, quantity = new_quantity, "updated cart line");
        }
    }

    /// Remove a line unconditionally. No-op if absent.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id() != product_id);

        if self.lines.len() != before {
            debug!(product_id = %product_id, "removed cart line");
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            debug!(lines = self.lines.len(), "cleared cart");
        }
        self.lines.clear();
    }

    /// Get a derived snapshot of the cart.
    ///
    /// Full recompute over the lines; cart sizes are tens to low
    /// hundreds of distinct lines, so O(n) per read is fine.
    #[must_use]
    pub fn state(&self) -> CartState {
        CartState::from_lines(&self.lines)
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn find_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id() == product_id)
    }
}

/// Clonable handle to a cart shared by several owners.
///
/// Wraps the store in a mutex so every mutation still goes through a
/// single writer at a time; lock scope is one operation, never held
/// across calls.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<Mutex<CartStore>>,
}

impl SharedCart {
    /// Create a handle around an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(CartStore::new())),
        }
    }

    /// Add `quantity` units of a product. See [`CartStore::add_item`].
    pub fn add_item(&self, product: &Product, quantity: Quantity) {
        self.inner.lock().add_item(product, quantity);
    }

    /// Set the quantity on an existing line. See
    /// [`CartStore::update_quantity`].
    pub fn update_quantity(&self, product_id: &ProductId, new_quantity: Quantity) {
        self.inner.lock().update_quantity(product_id, new_quantity);
    }

    /// Remove a line unconditionally. See [`CartStore::remove_item`].
    pub fn remove_item(&self, product_id: &ProductId) {
        self.inner.lock().remove_item(product_id);
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Get a derived snapshot of the cart.
    #[must_use]
    pub fn state(&self) -> CartState {
        self.inner.lock().state()
    }
}
