// ABOUTME: Logistics planning service validating meal-plan snapshots before planning
// ABOUTME: Rejects structurally unusable snapshots; data gaps remain engine-skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::info_span;
use uuid::Uuid;

use pantry_core::errors::SnapshotError;
use pantry_core::models::{LogisticsPlan, ScheduledMeal};
use pantry_intelligence::{generate_logistics_plan_with, AllocationOrder};

/// Validate that a meal-plan snapshot is structurally usable
///
/// The engine assumes, but does not verify, a consistent snapshot; this is
/// the caller-side check. Incomplete data (missing product links, missing
/// lifespans, zero amounts) is a normal state and passes validation — the
/// engine skips those ingredients. Only structural defects are rejected:
/// duplicate meal ids and non-finite numeric fields.
pub fn validate_snapshot(meals: &[ScheduledMeal]) -> Result<(), SnapshotError> {
    let mut seen_ids: HashSet<Uuid> = HashSet::with_capacity(meals.len());
    for meal in meals {
        if !seen_ids.insert(meal.id) {
            return Err(SnapshotError::DuplicateMealId { meal_id: meal.id });
        }
        for ingredient in &meal.recipe.ingredients {
            if !ingredient.needed_amount.is_finite() {
                return Err(SnapshotError::NonFiniteAmount {
                    ingredient: ingredient.name.clone(),
                    recipe: meal.recipe.title.clone(),
                });
            }
            if let Some(product) = &ingredient.product {
                if product
                    .stock_items
                    .iter()
                    .any(|item| !item.quantity.is_finite())
                {
                    return Err(SnapshotError::NonFiniteStockQuantity {
                        product: product.title.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Validate a snapshot, then generate its logistics plan in input order
pub fn plan_meal_logistics(
    meals: &[ScheduledMeal],
    shopping_date: DateTime<Utc>,
) -> Result<LogisticsPlan, SnapshotError> {
    plan_meal_logistics_with(meals, shopping_date, AllocationOrder::InputOrder)
}

/// Validate a snapshot, then generate its logistics plan with an explicit
/// frozen-stock allocation ordering
pub fn plan_meal_logistics_with(
    meals: &[ScheduledMeal],
    shopping_date: DateTime<Utc>,
    order: AllocationOrder,
) -> Result<LogisticsPlan, SnapshotError> {
    validate_snapshot(meals)?;
    let span = info_span!("plan_meal_logistics", meal_count = meals.len());
    let _guard = span.enter();
    Ok(generate_logistics_plan_with(meals, shopping_date, order))
}
