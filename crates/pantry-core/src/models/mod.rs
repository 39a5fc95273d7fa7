// ABOUTME: Core data models for the Pantry kitchen logistics platform
// ABOUTME: Declares product, recipe, meal, and logistics output submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

//! Domain models shared across the Pantry platform.
//!
//! Input models (`Product`, `Recipe`, `ScheduledMeal`) describe the resolved
//! meal-plan snapshot a caller hands to the planner; output models
//! (`LogisticsTask`, `LogisticsPlan`) describe what the planner returns.
//! All models are plain serde-serializable data with no behavior beyond
//! derived quantities.

/// Logistics planner output models (`LogisticsTask`, `LogisticsPlan`, `TaskType`)
pub mod logistics;
/// Scheduled meal instances (`ScheduledMeal`)
pub mod meal;
/// Pantry products and their stock items
pub mod product;
/// Recipes, ingredients, and advance-prep declarations
pub mod recipe;

pub use logistics::{LogisticsPlan, LogisticsTask, TaskType};
pub use meal::ScheduledMeal;
pub use product::{Product, StockItem};
pub use recipe::{PrepTask, PrepTaskKind, Recipe, RecipeIngredient};
