//! # Orders and Products
//!
//! Catalog products, customer orders and their lines.
//!
//! Orders own their lines; lines reference products by ID. The data store
//! hands the core a [`ResolvedOrder`] whose lines already carry their product,
//! so metric calculation never goes back to storage.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{DeliveryType, OrderId, ProductId, Region};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog item with its physical characteristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    id: ProductId,
    code: String,
    name: String,
    weight_kg: Decimal,
    volume_m3: Decimal,
}

#[derive(Deserialize)]
struct RawProduct {
    id: ProductId,
    code: String,
    name: String,
    weight_kg: Decimal,
    volume_m3: Decimal,
}

impl TryFrom<RawProduct> for Product {
    type Error = DomainError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.code, raw.name, raw.weight_kg, raw.volume_m3)
    }
}

impl Product {
    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMeasure` if weight or volume is negative.
    pub fn new(
        id: ProductId,
        code: impl Into<String>,
        name: impl Into<String>,
        weight_kg: Decimal,
        volume_m3: Decimal,
    ) -> DomainResult<Self> {
        if weight_kg.is_sign_negative() && !weight_kg.is_zero() {
            return Err(DomainError::invalid_measure(format!(
                "unit weight must not be negative, got {weight_kg} kg"
            )));
        }
        if volume_m3.is_sign_negative() && !volume_m3.is_zero() {
            return Err(DomainError::invalid_measure(format!(
                "unit volume must not be negative, got {volume_m3} m³"
            )));
        }
        Ok(Self {
            id,
            code: code.into(),
            name: name.into(),
            weight_kg,
            volume_m3,
        })
    }

    /// Returns the product ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the unique catalog code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit weight in kilograms.
    #[inline]
    #[must_use]
    pub fn weight_kg(&self) -> Decimal {
        self.weight_kg
    }

    /// Returns the unit volume in cubic metres.
    #[inline]
    #[must_use]
    pub fn volume_m3(&self) -> Decimal {
        self.volume_m3
    }
}

/// One line of an order: a product reference and a positive quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOrderLine")]
pub struct OrderLine {
    product_id: ProductId,
    quantity: u32,
}

#[derive(Deserialize)]
struct RawOrderLine {
    product_id: ProductId,
    quantity: u32,
}

impl TryFrom<RawOrderLine> for OrderLine {
    type Error = DomainError;

    fn try_from(raw: RawOrderLine) -> Result<Self, Self::Error> {
        Self::new(raw.product_id, raw.quantity)
    }
}

impl OrderLine {
    /// Creates an order line.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `quantity` is zero.
    pub fn new(product_id: ProductId, quantity: u32) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::invalid_quantity(format!(
                "line for product {product_id} must have a positive quantity"
            )));
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }

    /// Returns the referenced product.
    #[inline]
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the quantity.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    number: String,
    region: Region,
    delivery_type: DeliveryType,
    lines: Vec<OrderLine>,
}

impl Order {
    /// Creates an order without lines.
    #[must_use]
    pub fn new(
        id: OrderId,
        number: impl Into<String>,
        region: Region,
        delivery_type: DeliveryType,
    ) -> Self {
        Self {
            id,
            number: number.into(),
            region,
            delivery_type,
            lines: Vec::new(),
        }
    }

    /// Appends a line.
    #[must_use]
    pub fn with_line(mut self, line: OrderLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Returns the order ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the unique order number.
    #[inline]
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the destination region.
    #[inline]
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the requested delivery type.
    #[inline]
    #[must_use]
    pub fn delivery_type(&self) -> DeliveryType {
        self.delivery_type
    }

    /// Returns the lines in entry order.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order({} '{}' region={} delivery={})",
            self.id, self.number, self.region, self.delivery_type
        )
    }
}

/// An order line together with the product it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResolvedLine")]
pub struct ResolvedLine {
    product: Product,
    quantity: u32,
}

#[derive(Deserialize)]
struct RawResolvedLine {
    product: Product,
    quantity: u32,
}

impl TryFrom<RawResolvedLine> for ResolvedLine {
    type Error = DomainError;

    fn try_from(raw: RawResolvedLine) -> Result<Self, Self::Error> {
        Self::new(raw.product, raw.quantity)
    }
}

impl ResolvedLine {
    /// Pairs a line with its product.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `quantity` is zero.
    pub fn new(product: Product, quantity: u32) -> DomainResult<Self> {
        OrderLine::new(product.id(), quantity)?;
        Ok(Self { product, quantity })
    }

    /// Returns the product.
    #[inline]
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the quantity.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// An order whose lines carry their products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOrder {
    order: Order,
    lines: Vec<ResolvedLine>,
}

impl ResolvedOrder {
    /// Creates a resolved order.
    ///
    /// `lines` are expected in the same order as `order.lines()`.
    #[must_use]
    pub fn new(order: Order, lines: Vec<ResolvedLine>) -> Self {
        Self { order, lines }
    }

    /// Returns the order.
    #[inline]
    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Returns the resolved lines.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[ResolvedLine] {
        &self.lines
    }
}
