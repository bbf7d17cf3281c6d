// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`compare`] - The before/after comparison surface: gesture lifecycle,
//!   position tracking, reveal geometry and the canvas renderer
//! - [`toolbar`] - Top bar with open/navigation/reset actions
//! - [`components`] - Reusable UI components (error display)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod compare;
pub mod components;
pub mod design_tokens;
pub mod theming;
pub mod toolbar;
