// ABOUTME: Integration tests for the Sous Chef logistics planner
// ABOUTME: Covers freeze/thaw scheduling, shelf-life boundaries, and plan assembly
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

//! Tests for the logistics planning pipeline including:
//! - Freeze/thaw scheduling against shelf life and lead time
//! - Shopping-day task emission and plan ordering
//! - Aggregation of same-day, same-product needs
//! - Idempotence of repeated planning runs

mod common;

use common::{day, meal_on, product, recipe_with_ingredient, tasks_of_type};
use pantry_sous_chef::generate_logistics_plan;
use pantry_sous_chef::models::{Recipe, RecipeIngredient, TaskType};

// ============================================================================
// Scenario A: fresh purchase outliving its shelf life
// ============================================================================

#[test]
fn test_freeze_and_thaw_when_lead_time_exceeds_lifespan() {
    // Cook day 10, shopping day 0, lifespan 5, no frozen stock:
    // the 2 units bought on day 0 would spoil by day 10.
    let chicken = product("Chicken", 5, 0.0);
    let meal = meal_on(10, recipe_with_ingredient("Roast Chicken", 2.0, chicken));

    let plan = generate_logistics_plan(&[meal], day(0));

    let freezes = tasks_of_type(&plan, TaskType::Freeze);
    assert_eq!(freezes.len(), 1);
    assert_eq!(freezes[0].date, day(0).date_naive().and_time(chrono::NaiveTime::MIN).and_utc());
    assert_eq!(freezes[0].description, "Freeze 2 Chicken");

    let thaws = tasks_of_type(&plan, TaskType::Thaw);
    assert_eq!(thaws.len(), 1);
    assert_eq!(thaws[0].date.date_naive(), day(9).date_naive());
    assert_eq!(thaws[0].description, "Thaw 2 Chicken");
    assert_eq!(thaws[0].contributing_recipes, "Roast Chicken");
}

// ============================================================================
// Shelf-life boundary
// ============================================================================

#[test]
fn test_lead_time_equal_to_lifespan_is_safe() {
    let milk = product("Milk", 10, 0.0);
    let meal = meal_on(10, recipe_with_ingredient("Pancakes", 1.0, milk));

    let plan = generate_logistics_plan(&[meal], day(0));

    assert!(tasks_of_type(&plan, TaskType::Freeze).is_empty());
    assert!(tasks_of_type(&plan, TaskType::Thaw).is_empty());
}

#[test]
fn test_lead_time_one_past_lifespan_triggers_freeze() {
    let milk = product("Milk", 9, 0.0);
    let meal = meal_on(10, recipe_with_ingredient("Pancakes", 1.0, milk));

    let plan = generate_logistics_plan(&[meal], day(0));

    assert_eq!(tasks_of_type(&plan, TaskType::Freeze).len(), 1);
    assert_eq!(tasks_of_type(&plan, TaskType::Thaw).len(), 1);
}

// ============================================================================
// Skip rules: no task for covered or untracked needs
// ============================================================================

#[test]
fn test_no_tasks_for_zero_amount_unlinked_or_unlifespanned_ingredients() {
    let mut recipe = Recipe::new("Mystery Stew");
    // Zero needed amount
    recipe
        .ingredients
        .push(RecipeIngredient::new("salt", 0.0, Some(product("Salt", 365, 0.0))));
    // No product link
    recipe
        .ingredients
        .push(RecipeIngredient::new("love", 1.0, None));
    // No refrigerator lifespan
    let mut untracked = product("Honey", 1, 0.0);
    untracked.refrigerator_lifespan_days = None;
    recipe
        .ingredients
        .push(RecipeIngredient::new("honey", 1.0, Some(untracked)));

    let plan = generate_logistics_plan(&[meal_on(30, recipe)], day(0));

    assert!(tasks_of_type(&plan, TaskType::Freeze).is_empty());
    assert!(tasks_of_type(&plan, TaskType::Thaw).is_empty());
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_same_day_same_product_needs_aggregate_into_one_task() {
    // Two meals, same cook day, same product: one freeze and one thaw task,
    // each carrying the combined quantity and both meal ids.
    let meal_a = meal_on(8, recipe_with_ingredient("Beef Stew", 1.5, product("Beef", 2, 0.0)));
    let meal_b = meal_on(8, recipe_with_ingredient("Beef Tacos", 2.5, product("Beef", 2, 0.0)));

    let plan = generate_logistics_plan(&[meal_a.clone(), meal_b.clone()], day(0));

    let freezes = tasks_of_type(&plan, TaskType::Freeze);
    assert_eq!(freezes.len(), 2, "distinct product ids do not aggregate");

    // Rebuild with a shared product identity
    let beef = product("Beef", 2, 0.0);
    let mut recipe_a = Recipe::new("Beef Stew");
    recipe_a
        .ingredients
        .push(RecipeIngredient::new("beef", 1.5, Some(beef.clone())));
    let mut recipe_b = Recipe::new("Beef Tacos");
    recipe_b
        .ingredients
        .push(RecipeIngredient::new("beef", 2.5, Some(beef)));
    let meal_a = meal_on(8, recipe_a);
    let meal_b = meal_on(8, recipe_b);

    let plan = generate_logistics_plan(&[meal_a.clone(), meal_b.clone()], day(0));

    let freezes = tasks_of_type(&plan, TaskType::Freeze);
    assert_eq!(freezes.len(), 1);
    assert_eq!(freezes[0].description, "Freeze 4 Beef");
    assert_eq!(freezes[0].contributing_recipes, "Beef Stew, Beef Tacos");
    assert_eq!(freezes[0].related_meal_ids, vec![meal_a.id, meal_b.id]);
    assert_eq!(freezes[0].related_meal_date_labels.len(), 1, "same cook day deduplicates");

    let thaws = tasks_of_type(&plan, TaskType::Thaw);
    assert_eq!(thaws.len(), 1);
    assert_eq!(thaws[0].description, "Thaw 4 Beef");
}

#[test]
fn test_fractional_quantities_keep_their_decimals() {
    let cream = product("Cream", 1, 0.0);
    let meal = meal_on(5, recipe_with_ingredient("Panna Cotta", 1.5, cream));

    let plan = generate_logistics_plan(&[meal], day(0));

    let freezes = tasks_of_type(&plan, TaskType::Freeze);
    assert_eq!(freezes[0].description, "Freeze 1.5 Cream");
}

// ============================================================================
// Plan assembly
// ============================================================================

#[test]
fn test_shopping_day_task_is_emitted() {
    let plan = generate_logistics_plan(&[], day(0));

    let shops = tasks_of_type(&plan, TaskType::Shop);
    assert_eq!(shops.len(), 1);
    assert_eq!(shops[0].description, "Grocery Shopping Day");
    assert_eq!(shops[0].icon, "shopping_cart");
    assert_eq!(shops[0].date.date_naive(), day(0).date_naive());
    assert_eq!(plan.tasks_on(day(0).date_naive()).count(), 1);
}

#[test]
fn test_tasks_are_sorted_ascending_by_date() {
    let chicken = product("Chicken", 2, 0.0);
    let fish = product("Fish", 2, 0.0);
    let meal_late = meal_on(12, recipe_with_ingredient("Chicken Soup", 1.0, chicken));
    let meal_early = meal_on(6, recipe_with_ingredient("Fish Pie", 1.0, fish));

    // Later meal supplied first; the plan must still come out date-ordered.
    let plan = generate_logistics_plan(&[meal_late, meal_early], day(0));

    let dates: Vec<_> = plan.tasks.iter().map(|task| task.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn test_shopping_list_is_reserved_and_empty() {
    let chicken = product("Chicken", 2, 0.0);
    let meal = meal_on(10, recipe_with_ingredient("Roast Chicken", 2.0, chicken));

    let plan = generate_logistics_plan(&[meal], day(0));

    assert!(plan.shopping_list.is_empty());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_planning_is_idempotent() {
    let beef = product("Beef", 3, 5.0);
    let mut recipe_a = Recipe::new("Beef Stew");
    recipe_a
        .ingredients
        .push(RecipeIngredient::new("beef", 3.0, Some(beef.clone())));
    let mut recipe_b = Recipe::new("Beef Tacos");
    recipe_b
        .ingredients
        .push(RecipeIngredient::new("beef", 3.0, Some(beef)));
    let meals = vec![meal_on(10, recipe_a), meal_on(12, recipe_b)];

    let first = generate_logistics_plan(&meals, day(0));
    let second = generate_logistics_plan(&meals, day(0));

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

// ============================================================================
// Wire format
// ============================================================================

#[test]
fn test_task_type_serializes_to_legacy_wire_names() {
    assert_eq!(serde_json::to_value(TaskType::Shop).unwrap(), "SHOP");
    assert_eq!(serde_json::to_value(TaskType::Freeze).unwrap(), "FREEZE");
    assert_eq!(serde_json::to_value(TaskType::Thaw).unwrap(), "THAW");
    assert_eq!(serde_json::to_value(TaskType::Prep).unwrap(), "PREP");
}

#[test]
fn test_task_icons_match_ui_names() {
    assert_eq!(TaskType::Shop.icon(), "shopping_cart");
    assert_eq!(TaskType::Freeze.icon(), "ac_unit");
    assert_eq!(TaskType::Thaw.icon(), "water_drop");
    assert_eq!(TaskType::Prep.icon(), "content_cut");
}
