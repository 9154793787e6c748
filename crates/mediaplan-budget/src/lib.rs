// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Campaign cost model and goal-seek solver.
//!
//! This crate provides:
//! - **Budget model**: total campaign cost from line-item budgets plus agency
//!   fee, third-party tool fee, and a fixed cost
//! - **Budget solver**: bounded iterative search for the one unknown line item
//!   that makes the total hit a target within a tolerance
//! - **Damped step**: the default search rule used by the solver

pub mod model;
pub mod solver;
pub mod strategy;

pub use model::{evaluate_total, BudgetModel};
pub use solver::{solve_unknown, BudgetSolver};
pub use strategy::DampedStep;
