// ABOUTME: Pantry Sous Chef library facade re-exporting core and intelligence crates
// ABOUTME: Hosts the services layer validating meal-plan snapshots before planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

#![deny(unsafe_code)]

//! # Pantry Sous Chef
//!
//! Kitchen logistics planning for the Pantry platform: given scheduled meals
//! (recipes whose ingredients reference pantry products with known shelf
//! life and frozen-stock levels) and a shopping date, produce a day-by-day
//! task schedule saying when to freeze newly bought stock, when to thaw
//! frozen stock, and when to perform recipe-declared advance prep.
//!
//! The planning engine lives in [`pantry_intelligence`] and is pure: no I/O,
//! no mutation of its input, no state across calls. Persistence of the
//! produced tasks and all transport belong to the surrounding application.
//!
//! ## Quick start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pantry_sous_chef::models::{Product, Recipe, RecipeIngredient, ScheduledMeal, StockItem};
//! use pantry_sous_chef::services::logistics::plan_meal_logistics;
//!
//! let mut chicken = Product::new("Chicken Breast", Some(3));
//! chicken.stock_items.push(StockItem::new(2.0, true));
//!
//! let mut recipe = Recipe::new("Chicken Curry");
//! recipe
//!     .ingredients
//!     .push(RecipeIngredient::new("chicken", 2.0, Some(chicken)));
//!
//! let cook_date = Utc.with_ymd_and_hms(2025, 2, 10, 18, 0, 0).unwrap();
//! let shopping_date = Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap();
//! let meals = vec![ScheduledMeal::new(cook_date, recipe)];
//!
//! let plan = plan_meal_logistics(&meals, shopping_date).unwrap();
//! assert!(!plan.tasks.is_empty());
//! ```

/// Snapshot validation and planning entry points
pub mod services;

pub use pantry_core::constants;
pub use pantry_core::errors;
pub use pantry_core::models;
pub use pantry_intelligence::logistics;
pub use pantry_intelligence::{
    generate_logistics_plan, generate_logistics_plan_with, AllocationOrder,
};
