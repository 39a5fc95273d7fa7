// ABOUTME: Consolidates raw freeze/thaw events into one task per (type, day, product)
// ABOUTME: Accumulates quantities, recipe names, meal ids, and display date labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use pantry_core::models::{LogisticsTask, TaskType};

use super::allocator::RawStockEvent;
use super::{day_start_utc, meal_date_label};

/// Accumulator for all raw events sharing (task type, day, product)
///
/// Exists only for the duration of one planning run. The invariant: the
/// finalized task's quantity equals the sum of every per-ingredient quantity
/// folded into the bucket, no quantity invented or dropped.
#[derive(Debug)]
struct TaskAggregation {
    task_type: TaskType,
    day: NaiveDate,
    product_title: String,
    quantity: f64,
    /// First-seen order, de-duplicated
    recipe_titles: Vec<String>,
    /// Cook days of contributing meals, de-duplicated
    meal_cook_days: Vec<NaiveDate>,
    /// Every contributing meal occurrence
    meal_ids: Vec<Uuid>,
}

/// Merge raw freeze/thaw events into consolidated user-facing tasks
///
/// The same physical action triggered independently by several meals (same
/// product, same calendar day) surfaces exactly once, with the combined
/// quantity. Output preserves first-encounter bucket order so the final
/// stable date sort keeps deterministic tie-breaking.
pub(crate) fn aggregate_stock_events(events: Vec<RawStockEvent>) -> Vec<LogisticsTask> {
    let mut index: HashMap<(TaskType, NaiveDate, Uuid), usize> = HashMap::new();
    let mut buckets: Vec<TaskAggregation> = Vec::new();

    for event in events {
        let key = (event.task_type, event.day, event.product_id);
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(TaskAggregation {
                task_type: event.task_type,
                day: event.day,
                product_title: event.product_title.clone(),
                quantity: 0.0,
                recipe_titles: Vec::new(),
                meal_cook_days: Vec::new(),
                meal_ids: Vec::new(),
            });
            buckets.len() - 1
        });

        let bucket = &mut buckets[slot];
        bucket.quantity += event.quantity;
        if !bucket.recipe_titles.contains(&event.recipe_title) {
            bucket.recipe_titles.push(event.recipe_title);
        }
        if !bucket.meal_cook_days.contains(&event.meal_cook_day) {
            bucket.meal_cook_days.push(event.meal_cook_day);
        }
        bucket.meal_ids.push(event.meal_id);
    }

    buckets.into_iter().map(finalize_bucket).collect()
}

/// Turn one finished bucket into its user-facing task
fn finalize_bucket(bucket: TaskAggregation) -> LogisticsTask {
    let description = format!(
        "{} {} {}",
        bucket.task_type.description_verb(),
        format_quantity(bucket.quantity),
        bucket.product_title
    );
    LogisticsTask {
        date: day_start_utc(bucket.day),
        task_type: bucket.task_type,
        description,
        contributing_recipes: bucket.recipe_titles.join(", "),
        related_meal_ids: bucket.meal_ids,
        related_meal_date_labels: bucket
            .meal_cook_days
            .into_iter()
            .map(meal_date_label)
            .collect(),
        icon: bucket.task_type.icon().to_owned(),
    }
}

/// Format a quantity for task descriptions, dropping ".0" on whole numbers
fn format_quantity(quantity: f64) -> String {
    if quantity.fract().abs() < f64::EPSILON {
        format!("{quantity:.0}")
    } else {
        format!("{quantity}")
    }
}
