// ABOUTME: Scheduled meal model tying a recipe to a cook date
// ABOUTME: ScheduledMeal definition consumed by the logistics planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recipe::Recipe;

/// A scheduled instance of a recipe on the meal-plan calendar
///
/// Multiple meals may reference the same recipe, and the same product through
/// different ingredient instances. The time-of-day component of `cook_date`
/// is ignored by the planner; only the calendar day matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledMeal {
    /// Unique meal occurrence identifier
    pub id: Uuid,
    /// Calendar date the meal is cooked
    pub cook_date: DateTime<Utc>,
    /// Resolved recipe for this meal, including ingredients and products
    pub recipe: Recipe,
}

impl ScheduledMeal {
    /// Create a scheduled meal
    #[must_use]
    pub fn new(cook_date: DateTime<Utc>, recipe: Recipe) -> Self {
        Self {
            id: Uuid::new_v4(),
            cook_date,
            recipe,
        }
    }
}
