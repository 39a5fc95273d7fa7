// ABOUTME: Sous Chef kitchen logistics planning engine for the Pantry platform
// ABOUTME: Pure freeze/thaw/prep scheduling over a resolved meal-plan snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

#![deny(unsafe_code)]

//! # Pantry Intelligence
//!
//! The Sous Chef engine: a deterministic, pure planner that turns a resolved
//! meal-plan snapshot and a single shopping date into a consolidated,
//! day-by-day logistics schedule (when to freeze newly bought stock, when to
//! thaw frozen stock, when to perform recipe-declared advance prep).
//!
//! The engine performs no I/O, never mutates its input, and holds no state
//! across invocations; repeated calls with identical input produce identical
//! output.

/// The Sous Chef logistics planning pipeline
pub mod logistics;

pub use logistics::{generate_logistics_plan, generate_logistics_plan_with, AllocationOrder};
