//! Cart aggregation.
//!
//! A [`Cart`] is a plain owned value scoped to one shopping session. It is
//! handed to whatever needs it rather than living in a global, and it never
//! touches the document store: orders snapshot it at checkout.

use common::ProductId;

use crate::money::Money;
use crate::product::Product;

/// One line in a cart: a product snapshot plus a quantity.
///
/// The product fields are copied at add time. Later catalog edits do not
/// reach lines already in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    /// Returns the product id this line is keyed by.
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Returns the price for this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.product.price().multiply(self.quantity)
    }
}

/// The running cart for one session.
///
/// Holds at most one line per product id, in first-add order. Quantity
/// updates keep a line's position; only removal and re-add move it to the
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of a product.
    ///
    /// If the product is already in the cart its quantity grows by
    /// `quantity` and the original snapshot is kept; otherwise a new line
    /// is appended. A zero quantity is a silent no-op: the cart never
    /// holds a zero or negative line.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.line_mut(&product.id) {
            Some(line) => line.quantity += quantity,
            None => self.items.push(CartLineItem {
                product: product.clone(),
                quantity,
            }),
        }
    }

    /// Adds a single unit of a product.
    pub fn add_one(&mut self, product: &Product) {
        self.add(product, 1);
    }

    /// Removes the line for a product. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|line| line.product_id() != product_id);
    }

    /// Sets a line's quantity exactly.
    ///
    /// Zero removes the line; an unknown product id is a no-op.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the cart subtotal: the sum of `price * quantity` over all
    /// lines. Recomputed on every call; shipping and tax are a checkout
    /// concern, not a cart one.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Returns the lines in first-add order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Returns the line for a product, if present.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items
            .iter()
            .find(|line| line.product_id() == product_id)
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLineItem> {
        self.items
            .iter_mut()
            .find(|line| line.product_id() == product_id)
    }
}
