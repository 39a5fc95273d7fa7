// ABOUTME: Expands recipe-declared advance-prep instructions into dated tasks
// ABOUTME: Suppresses thaw-related prep to avoid double-reporting planner thaw tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

use tracing::debug;

use pantry_core::constants::prep_keywords;
use pantry_core::models::{LogisticsTask, PrepTask, PrepTaskKind, ScheduledMeal, TaskType};

use super::{day_start_utc, meal_date_label};

/// Expand every meal's recipe prep declarations into dated PREP tasks
///
/// Unlike freeze/thaw, prep tasks are never aggregated across meals: one
/// recipe occurrence yields one task, even when several meals share a recipe
/// and land on the same prep date. Thaw-related declarations are suppressed
/// because the allocator derives thaw tasks from stock state dynamically;
/// emitting both would report the same physical action twice.
pub(crate) fn expand_prep_tasks(meals: &[&ScheduledMeal]) -> Vec<LogisticsTask> {
    let mut tasks = Vec::new();

    for meal in meals {
        let cook_day = meal.cook_date.date_naive();
        for prep in &meal.recipe.prep_tasks {
            if is_thaw_related(prep) {
                debug!(
                    recipe = %meal.recipe.title,
                    description = %prep.description,
                    "Suppressing thaw-related prep task"
                );
                continue;
            }

            let prep_day = cook_day - chrono::Duration::days(i64::from(prep.days_in_advance));
            tasks.push(LogisticsTask {
                date: day_start_utc(prep_day),
                task_type: TaskType::Prep,
                description: prep.description.clone(),
                contributing_recipes: meal.recipe.title.clone(),
                related_meal_ids: vec![meal.id],
                related_meal_date_labels: vec![meal_date_label(cook_day)],
                icon: TaskType::Prep.icon().to_owned(),
            });
        }
    }

    tasks
}

/// Whether a prep declaration describes thawing or defrosting
///
/// The structural kind wins when present. Untagged legacy data falls back to
/// case-insensitive substring matching, which is a heuristic: a task whose
/// wording merely mentions thawing is suppressed too.
fn is_thaw_related(prep: &PrepTask) -> bool {
    match prep.kind {
        Some(PrepTaskKind::ThawRelated) => true,
        Some(PrepTaskKind::General) => false,
        None => {
            let text = prep.description.to_lowercase();
            prep_keywords::THAW_RELATED
                .iter()
                .any(|keyword| text.contains(keyword))
        }
    }
}
