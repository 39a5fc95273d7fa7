// ABOUTME: Service layer wrapping the planning engine with snapshot validation
// ABOUTME: Declares the logistics planning service module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

//! Business-logic services sitting between callers and the pure engine.

/// Meal-plan snapshot validation and logistics planning
pub mod logistics;
