// ABOUTME: Frozen-stock pool with first-encounter initialization and greedy draw-down
// ABOUTME: Per-call owned state; one depleting counter per distinct product
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

use std::collections::HashMap;

use uuid::Uuid;

use pantry_core::models::ScheduledMeal;

/// Simulated frozen stock remaining per product during one planning run
///
/// Owned exclusively by a single planner invocation and discarded on return.
/// Each counter is initialized exactly once, the first time its product is
/// encountered, and only ever decremented afterwards. Multiple ingredient
/// references to the same product therefore share one counter instead of
/// re-summing the same physical stock per reference.
///
/// Quantities are compared in the product's own tracking unit; weight- and
/// count-tracked products are never reconciled against each other.
#[derive(Debug)]
pub(crate) struct FrozenStockPool {
    /// Remaining frozen quantity per product id
    remaining: HashMap<Uuid, f64>,
}

impl FrozenStockPool {
    /// Scan every ingredient-product link across all meals and record each
    /// product's currently-frozen quantity, first encounter wins
    pub(crate) fn build(meals: &[&ScheduledMeal]) -> Self {
        let mut remaining = HashMap::new();
        for meal in meals {
            for ingredient in &meal.recipe.ingredients {
                if let Some(product) = &ingredient.product {
                    remaining
                        .entry(product.id)
                        .or_insert_with(|| product.frozen_stock_quantity());
                }
            }
        }
        Self { remaining }
    }

    /// Greedily claim up to `needed` units of the product's remaining frozen
    /// stock, decrementing the pool by the amount claimed
    ///
    /// Returns the claimed quantity, `min(needed, remaining)`. Unknown
    /// products claim nothing.
    pub(crate) fn allocate(&mut self, product_id: Uuid, needed: f64) -> f64 {
        let Some(remaining) = self.remaining.get_mut(&product_id) else {
            return 0.0;
        };
        let claimed = needed.min(*remaining).max(0.0);
        *remaining -= claimed;
        claimed
    }
}
