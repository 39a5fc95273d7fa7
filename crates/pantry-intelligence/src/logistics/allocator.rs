// ABOUTME: Per-ingredient need evaluation with greedy frozen-stock allocation
// ABOUTME: Emits raw freeze/thaw events later consolidated by the aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

use pantry_core::constants::scheduling::THAW_LEAD_DAYS;
use pantry_core::models::{ScheduledMeal, TaskType};

use super::pool::FrozenStockPool;

/// One raw freeze or thaw event for a single (meal, ingredient) pair
///
/// Raw events are an intermediate form: several events sharing a task type,
/// calendar day, and product are merged into one user-facing task by the
/// aggregator.
#[derive(Debug)]
pub(crate) struct RawStockEvent {
    /// Freeze or Thaw
    pub task_type: TaskType,
    /// Calendar day the action is performed
    pub day: NaiveDate,
    /// Product identity, the aggregation key alongside type and day
    pub product_id: Uuid,
    /// Product display title
    pub product_title: String,
    /// Quantity of the product this event covers
    pub quantity: f64,
    /// Title of the recipe that triggered the event
    pub recipe_title: String,
    /// Meal occurrence that triggered the event
    pub meal_id: Uuid,
    /// Cook day of that meal, for display labels
    pub meal_cook_day: NaiveDate,
}

/// Evaluate every (meal, ingredient) pair against shelf life and frozen stock
///
/// Meals are processed in the order supplied; earlier meals claim existing
/// frozen stock first. Ingredients missing a product link, a positive needed
/// amount, or a known refrigerator lifespan are skipped silently. No step in
/// this evaluation can fail; data gaps reduce output, never abort the run.
pub(crate) fn evaluate_meals(
    meals: &[&ScheduledMeal],
    shopping_day: NaiveDate,
    pool: &mut FrozenStockPool,
) -> Vec<RawStockEvent> {
    let mut events = Vec::new();

    for meal in meals {
        let cook_day = meal.cook_date.date_naive();
        for ingredient in &meal.recipe.ingredients {
            let Some(product) = &ingredient.product else {
                debug!(
                    ingredient = %ingredient.name,
                    recipe = %meal.recipe.title,
                    "Ingredient has no linked product, skipping"
                );
                continue;
            };
            if ingredient.needed_amount <= 0.0 {
                if ingredient.needed_amount < 0.0 {
                    warn!(
                        ingredient = %ingredient.name,
                        recipe = %meal.recipe.title,
                        amount = ingredient.needed_amount,
                        "Negative needed amount, skipping"
                    );
                }
                continue;
            }
            let Some(lifespan_days) = product.refrigerator_lifespan_days else {
                debug!(
                    product = %product.title,
                    "Product has no refrigerator lifespan, skipping"
                );
                continue;
            };

            // Calendar-day normalization happens before subtraction, so the
            // difference is already whole days and the strict ceiling is exact.
            let lead_days = (cook_day - shopping_day).num_days();
            if lead_days < 0 {
                warn!(
                    meal_id = %meal.id,
                    %cook_day,
                    %shopping_day,
                    "Meal cooks before the shopping day; snapshot may be stale"
                );
            }

            let thaw_day = cook_day - chrono::Duration::days(THAW_LEAD_DAYS);

            // Claim existing frozen stock first.
            let thawed_from_stock = pool.allocate(product.id, ingredient.needed_amount);
            if thawed_from_stock > 0.0 {
                debug!(
                    product = %product.title,
                    quantity = thawed_from_stock,
                    "Allocated from frozen stock"
                );
                events.push(stock_event(
                    TaskType::Thaw,
                    thaw_day,
                    product.id,
                    &product.title,
                    thawed_from_stock,
                    meal,
                    cook_day,
                ));
            }

            // Whatever frozen stock did not cover must be bought fresh. It
            // only needs a freeze/thaw cycle when it would spoil before the
            // cook date; lead time equal to the lifespan is still safe.
            let remainder = ingredient.needed_amount - thawed_from_stock;
            if remainder > 0.0 && lead_days > i64::from(lifespan_days) {
                events.push(stock_event(
                    TaskType::Freeze,
                    shopping_day,
                    product.id,
                    &product.title,
                    remainder,
                    meal,
                    cook_day,
                ));
                events.push(stock_event(
                    TaskType::Thaw,
                    thaw_day,
                    product.id,
                    &product.title,
                    remainder,
                    meal,
                    cook_day,
                ));
            }
        }
    }

    events
}

/// Build one raw event tagged with its triggering meal
fn stock_event(
    task_type: TaskType,
    day: NaiveDate,
    product_id: Uuid,
    product_title: &str,
    quantity: f64,
    meal: &ScheduledMeal,
    meal_cook_day: NaiveDate,
) -> RawStockEvent {
    RawStockEvent {
        task_type,
        day,
        product_id,
        product_title: product_title.to_owned(),
        quantity,
        recipe_title: meal.recipe.title.clone(),
        meal_id: meal.id,
        meal_cook_day,
    }
}
