// ABOUTME: Recipe models with ingredients and advance-prep declarations
// ABOUTME: Recipe, RecipeIngredient, PrepTask, and PrepTaskKind definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::product::Product;

/// Structural category of an advance-prep declaration
///
/// Recipes historically carried thaw instructions as free text, which the
/// planner suppressed by substring matching on "thaw"/"defrost". Tagging a
/// prep task with an explicit kind replaces that heuristic: the planner
/// skips `ThawRelated` tasks structurally because it derives thaw tasks from
/// stock allocation instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepTaskKind {
    /// General advance preparation (marinate, soak, pre-chop, ...)
    General,
    /// Thawing or defrosting; superseded by planner-generated thaw tasks
    ThawRelated,
}

/// A recipe-declared advance-preparation instruction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepTask {
    /// Free-text instruction shown to the user (e.g. "Marinate the chicken")
    pub description: String,
    /// Whole calendar days before the cook date this step is performed
    pub days_in_advance: u32,
    /// Structural category. `None` for legacy recipe data, in which case the
    /// planner falls back to text matching to detect thaw instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PrepTaskKind>,
}

impl PrepTask {
    /// Create an untagged prep task (legacy text-heuristic behavior)
    #[must_use]
    pub fn new(description: impl Into<String>, days_in_advance: u32) -> Self {
        Self {
            description: description.into(),
            days_in_advance,
            kind: None,
        }
    }

    /// Create a prep task with an explicit structural kind
    #[must_use]
    pub fn with_kind(
        description: impl Into<String>,
        days_in_advance: u32,
        kind: PrepTaskKind,
    ) -> Self {
        Self {
            description: description.into(),
            days_in_advance,
            kind: Some(kind),
        }
    }
}

/// One ingredient line of a recipe, optionally linked to a pantry product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name as written in the recipe
    pub name: String,
    /// Amount required by the recipe, in the linked product's tracking unit.
    ///
    /// Unit-less from the planner's point of view: weight-tracked and
    /// count-tracked products are compared against stock quantities directly,
    /// with no conversion between the two. This mirrors how the pantry tracks
    /// stock and is a known limitation rather than an oversight.
    pub needed_amount: f64,
    /// Linked pantry product, when the ingredient is tracked. `None` excludes
    /// the ingredient from freeze/thaw planning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl RecipeIngredient {
    /// Create an ingredient line
    #[must_use]
    pub fn new(name: impl Into<String>, needed_amount: f64, product: Option<Product>) -> Self {
        Self {
            name: name.into(),
            needed_amount,
            product,
        }
    }
}

/// A recipe: ordered ingredients plus independent prep-task declarations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Ingredient lines in recipe order
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    /// Advance-prep declarations, independent of the ingredient list
    #[serde(default)]
    pub prep_tasks: Vec<PrepTask>,
}

impl Recipe {
    /// Create an empty recipe
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            ingredients: Vec::new(),
            prep_tasks: Vec::new(),
        }
    }
}
