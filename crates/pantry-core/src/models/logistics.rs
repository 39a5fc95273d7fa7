// ABOUTME: Logistics planner output models rendered by the Pantry UI
// ABOUTME: TaskType, LogisticsTask, and LogisticsPlan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::icons;

/// Category of a logistics task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    /// The grocery shopping day itself
    Shop,
    /// Move newly bought stock into the freezer
    Freeze,
    /// Move frozen stock out of the freezer ahead of cooking
    Thaw,
    /// Recipe-declared advance preparation
    Prep,
}

impl TaskType {
    /// Material icon name the Pantry UI renders for this task type
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Shop => icons::SHOP,
            Self::Freeze => icons::FREEZE,
            Self::Thaw => icons::THAW,
            Self::Prep => icons::PREP,
        }
    }

    /// Verb used in generated task descriptions ("Freeze 2 Chicken Breast")
    #[must_use]
    pub const fn description_verb(self) -> &'static str {
        match self {
            Self::Shop => "Shop",
            Self::Freeze => "Freeze",
            Self::Thaw => "Thaw",
            Self::Prep => "Prep",
        }
    }
}

/// One dated task in the logistics plan
///
/// Freeze/thaw tasks are aggregated: one task may represent the needs of
/// several meals sharing a product and a calendar day. Prep tasks are always
/// per meal occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticsTask {
    /// Calendar date the task is performed (midnight-normalized UTC)
    pub date: DateTime<Utc>,
    /// Task category
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// Human-readable description (generated)
    pub description: String,
    /// De-duplicated, comma-joined titles of contributing recipes
    pub contributing_recipes: String,
    /// Every meal occurrence that produced this task. The UI highlights
    /// tasks by these ids when the user interacts with a specific meal.
    pub related_meal_ids: Vec<Uuid>,
    /// De-duplicated short date labels of contributing meals (e.g. "Feb 3")
    pub related_meal_date_labels: Vec<String>,
    /// Material icon name, derived from the task type
    pub icon: String,
}

/// The complete output of one planning run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogisticsPlan {
    /// Specific items to buy. Reserved: the planner does not decide
    /// shopping-list line items today and always leaves this empty.
    pub shopping_list: Vec<String>,
    /// All tasks, ordered ascending by date
    pub tasks: Vec<LogisticsTask>,
}

impl LogisticsPlan {
    /// Tasks falling on the given calendar day, in plan order
    pub fn tasks_on(&self, day: chrono::NaiveDate) -> impl Iterator<Item = &LogisticsTask> {
        self.tasks
            .iter()
            .filter(move |task| task.date.date_naive() == day)
    }
}
