// ABOUTME: Sous Chef logistics pipeline assembling freeze/thaw/prep schedules
// ABOUTME: Public entry points, allocation ordering policy, and plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

//! # Logistics planning pipeline
//!
//! Given scheduled meals and a shopping date, the pipeline runs leaves-first:
//!
//! 1. Build the frozen-stock pool (one depleting counter per product).
//! 2. Evaluate every (meal, ingredient) pair, greedily claiming frozen stock
//!    and emitting raw freeze/thaw events for whatever remains.
//! 3. Aggregate raw events by (task type, calendar day, product) so the same
//!    physical action surfaces to the user exactly once.
//! 4. Expand recipe-declared prep tasks (never aggregated).
//! 5. Concatenate with the shopping-day task, sort by date, return the plan.
//!
//! ## Allocation ordering
//!
//! Existing frozen stock is claimed greedily in the order meals are
//! processed. [`generate_logistics_plan`] processes meals in input order, so
//! callers wanting "earliest meal gets priority" must pre-sort
//! chronologically, or use [`generate_logistics_plan_with`] with
//! [`AllocationOrder::EarliestCookDateFirst`].

mod aggregator;
mod allocator;
mod pool;
mod prep;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pantry_core::constants::display;
use pantry_core::models::{LogisticsPlan, LogisticsTask, ScheduledMeal, TaskType};

use aggregator::aggregate_stock_events;
use allocator::evaluate_meals;
use pool::FrozenStockPool;
use prep::expand_prep_tasks;

/// Order in which meals claim existing frozen stock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationOrder {
    /// Process meals exactly as supplied by the caller
    #[default]
    InputOrder,
    /// Process meals by ascending cook date, so earlier meals claim existing
    /// frozen stock first regardless of input order
    EarliestCookDateFirst,
}

/// Generate the logistics plan for a set of scheduled meals
///
/// Meals are processed in input order; see [`AllocationOrder`] for the
/// effect on frozen-stock allocation. The time-of-day component of all dates
/// is ignored.
///
/// Pure and side-effect free: the input snapshot is never mutated, and the
/// returned plan is the only output. Ingredients with missing product links,
/// no positive needed amount, or no known refrigerator lifespan are skipped,
/// never an error.
#[must_use]
pub fn generate_logistics_plan(
    meals: &[ScheduledMeal],
    shopping_date: DateTime<Utc>,
) -> LogisticsPlan {
    generate_logistics_plan_with(meals, shopping_date, AllocationOrder::InputOrder)
}

/// Generate the logistics plan with an explicit allocation ordering policy
#[must_use]
pub fn generate_logistics_plan_with(
    meals: &[ScheduledMeal],
    shopping_date: DateTime<Utc>,
    order: AllocationOrder,
) -> LogisticsPlan {
    let shopping_day = shopping_date.date_naive();
    debug!(
        meal_count = meals.len(),
        %shopping_day,
        ?order,
        "Generating logistics plan"
    );

    let ordered = order_meals(meals, order);

    let mut pool = FrozenStockPool::build(&ordered);
    let events = evaluate_meals(&ordered, shopping_day, &mut pool);

    let mut tasks = Vec::with_capacity(events.len() + 1);
    tasks.push(shopping_day_task(shopping_day));
    tasks.extend(aggregate_stock_events(events));
    tasks.extend(expand_prep_tasks(&ordered));

    // Stable sort keeps insertion order for same-day ties.
    tasks.sort_by_key(|task| task.date);

    LogisticsPlan {
        shopping_list: Vec::new(),
        tasks,
    }
}

/// Resolve the allocation ordering policy into a processing sequence
fn order_meals(meals: &[ScheduledMeal], order: AllocationOrder) -> Vec<&ScheduledMeal> {
    let mut ordered: Vec<&ScheduledMeal> = meals.iter().collect();
    if order == AllocationOrder::EarliestCookDateFirst {
        ordered.sort_by_key(|meal| meal.cook_date.date_naive());
    }
    ordered
}

/// The single SHOP task anchoring the plan at the shopping date
fn shopping_day_task(shopping_day: NaiveDate) -> LogisticsTask {
    LogisticsTask {
        date: day_start_utc(shopping_day),
        task_type: TaskType::Shop,
        description: display::SHOPPING_DAY_DESCRIPTION.to_owned(),
        contributing_recipes: String::new(),
        related_meal_ids: Vec::new(),
        related_meal_date_labels: Vec::new(),
        icon: TaskType::Shop.icon().to_owned(),
    }
}

/// Midnight-normalized UTC timestamp for a calendar day
pub(crate) fn day_start_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Short display label for a contributing meal's cook day (e.g. "Feb 3")
pub(crate) fn meal_date_label(day: NaiveDate) -> String {
    day.format(display::MEAL_DATE_LABEL_FORMAT).to_string()
}
