// ABOUTME: Pantry product models with perishability and stock data
// ABOUTME: Product and StockItem definitions with derived frozen quantity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single physical stock unit of a product in the pantry or freezer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StockItem {
    /// Quantity held by this stock item, in the product's tracking unit
    pub quantity: f64,
    /// Whether this stock item is currently in the freezer
    pub frozen: bool,
}

impl StockItem {
    /// Create a stock item
    #[must_use]
    pub const fn new(quantity: f64, frozen: bool) -> Self {
        Self { quantity, frozen }
    }
}

/// A tracked pantry product with its perishability profile and current stock
///
/// The planner treats a product as immutable for the duration of one planning
/// run; callers must resolve stock items before invoking it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: Uuid,
    /// Display title (e.g. "Chicken Breast")
    pub title: String,
    /// How many whole days an unfrozen unit stays food-safe in the
    /// refrigerator. `None` means the product is not shelf-tracked and is
    /// excluded from freeze/thaw planning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refrigerator_lifespan_days: Option<u32>,
    /// Resolved stock items for this product
    #[serde(default)]
    pub stock_items: Vec<StockItem>,
}

impl Product {
    /// Create a product with no stock
    #[must_use]
    pub fn new(title: impl Into<String>, refrigerator_lifespan_days: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            refrigerator_lifespan_days,
            stock_items: Vec::new(),
        }
    }

    /// Total quantity currently held frozen, summed over stock items
    ///
    /// Derived on demand, never stored. Quantities are in the product's own
    /// tracking unit (weight or count); no unit reconciliation is performed.
    #[must_use]
    pub fn frozen_stock_quantity(&self) -> f64 {
        self.stock_items
            .iter()
            .filter(|item| item.frozen)
            .map(|item| item.quantity)
            .sum()
    }
}
