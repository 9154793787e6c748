// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits at the seams between the solver, its search rule, and
//! the orchestrator that feeds it.

pub mod input;
pub mod strategy;

pub use input::InputProvider;
pub use strategy::SearchStrategy;
