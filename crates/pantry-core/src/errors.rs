// ABOUTME: Snapshot validation errors for the meal-plan planning seam
// ABOUTME: Defines SnapshotError with structured per-entity context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

//! Error types for meal-plan snapshot validation.
//!
//! The planner itself has no fatal error paths: incomplete product data is a
//! normal state and affected ingredients are skipped, never raised. These
//! errors exist only at the seam where a caller hands the planner a snapshot
//! that is structurally unusable rather than merely incomplete.

use uuid::Uuid;

/// Errors raised when a meal-plan snapshot fails structural validation
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The same meal id appears more than once in the snapshot
    #[error("Duplicate meal id {meal_id} in snapshot")]
    DuplicateMealId {
        /// Meal id that occurred more than once
        meal_id: Uuid,
    },

    /// An ingredient carries a NaN or infinite needed amount
    #[error("Non-finite needed amount for ingredient '{ingredient}' in recipe '{recipe}'")]
    NonFiniteAmount {
        /// Name of the offending ingredient
        ingredient: String,
        /// Title of the recipe declaring it
        recipe: String,
    },

    /// A stock item carries a NaN or infinite quantity
    #[error("Non-finite stock quantity on product '{product}'")]
    NonFiniteStockQuantity {
        /// Title of the product owning the stock item
        product: String,
    },
}
