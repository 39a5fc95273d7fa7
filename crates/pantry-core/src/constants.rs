// ABOUTME: Planning constants organized by domain for the Pantry platform
// ABOUTME: Thaw lead times, display icons, and prep-task suppression keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

//! Constants module
//!
//! Pure data constants used by the Sous Chef logistics planner, grouped by
//! domain rather than collected in one flat list.

/// Scheduling offsets used by the planner
pub mod scheduling {
    /// Calendar days before the cook date on which frozen stock is thawed
    pub const THAW_LEAD_DAYS: i64 = 1;
}

/// Material icon names rendered by the Pantry UI for each task type
pub mod icons {
    /// Shopping-day task icon
    pub const SHOP: &str = "shopping_cart";
    /// Freeze task icon
    pub const FREEZE: &str = "ac_unit";
    /// Thaw task icon
    pub const THAW: &str = "water_drop";
    /// Advance-prep task icon
    pub const PREP: &str = "content_cut";
}

/// Display formatting used for user-facing task fields
pub mod display {
    /// Short date label format for contributing meal dates (e.g. "Feb 3")
    pub const MEAL_DATE_LABEL_FORMAT: &str = "%b %-d";

    /// Description of the shopping-day task
    pub const SHOPPING_DAY_DESCRIPTION: &str = "Grocery Shopping Day";
}

/// Prep-task text heuristics for legacy recipe data without a structural kind
pub mod prep_keywords {
    /// Lowercase substrings identifying a prep task as thaw-related.
    /// Matching tasks are suppressed because the planner emits thaw tasks
    /// dynamically from stock allocation.
    pub const THAW_RELATED: [&str; 2] = ["thaw", "defrost"];
}
