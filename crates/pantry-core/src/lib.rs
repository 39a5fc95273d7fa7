// ABOUTME: Core domain types and constants for the Pantry kitchen platform
// ABOUTME: Foundation crate with product, recipe, meal, and logistics task models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Platform

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types and constants for the Pantry
//! kitchen logistics platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Domain models (`Product`, `Recipe`, `ScheduledMeal`) and
//!   planner output models (`LogisticsTask`, `LogisticsPlan`)
//! - **errors**: Snapshot validation errors for the planning seam
//! - **constants**: Planning constants organized by domain

/// Planning constants and display values organized by domain
pub mod constants;

/// Snapshot validation errors for the planning seam
pub mod errors;

/// Core data models (`Product`, `Recipe`, `ScheduledMeal`, `LogisticsTask`, etc.)
pub mod models;
