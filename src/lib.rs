// SPDX-License-Identifier: MPL-2.0
//! Before/after image comparison viewer built with Iced.
//!
//! Opens pairs of photographs that follow a `*_before` / `*_after` naming
//! convention and renders them on a single surface split by a draggable
//! divider: the before image fills the surface, the after image is revealed
//! left of the divider. Directories of pairs can be browsed with the
//! toolbar or the keyboard.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod pair_navigator;
pub mod ui;

#[cfg(test)]
mod test_utils;
