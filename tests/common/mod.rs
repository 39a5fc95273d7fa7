// ABOUTME: Shared fixtures for logistics planner integration tests
// ABOUTME: Builders for products, recipes, and scheduled meals on fixed dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

#![allow(dead_code)] // Each integration test binary uses a subset of these helpers

use chrono::{DateTime, TimeZone, Utc};
use pantry_sous_chef::models::{
    Product, Recipe, RecipeIngredient, ScheduledMeal, StockItem, TaskType,
};

/// Fixed planning baseline: "day 0" of every test scenario
pub fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap() + chrono::Duration::days(offset)
}

/// A shelf-tracked product with the given frozen stock already in the freezer
pub fn product(title: &str, lifespan_days: u32, frozen_quantity: f64) -> Product {
    let mut product = Product::new(title, Some(lifespan_days));
    if frozen_quantity > 0.0 {
        product.stock_items.push(StockItem::new(frozen_quantity, true));
    }
    product
}

/// A recipe with a single product-linked ingredient
pub fn recipe_with_ingredient(title: &str, amount: f64, product: Product) -> Recipe {
    let mut recipe = Recipe::new(title);
    recipe
        .ingredients
        .push(RecipeIngredient::new(product.title.clone(), amount, Some(product)));
    recipe
}

/// A meal scheduled `cook_day_offset` days after day 0
pub fn meal_on(cook_day_offset: i64, recipe: Recipe) -> ScheduledMeal {
    ScheduledMeal::new(day(cook_day_offset), recipe)
}

/// All tasks of the given type, in plan order
pub fn tasks_of_type(
    plan: &pantry_sous_chef::models::LogisticsPlan,
    task_type: TaskType,
) -> Vec<&pantry_sous_chef::models::LogisticsTask> {
    plan.tasks
        .iter()
        .filter(|task| task.task_type == task_type)
        .collect()
}
