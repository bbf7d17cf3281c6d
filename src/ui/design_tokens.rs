// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, opacity, spacing, sizing and radii.
//!
//! Tokens are designed to stay consistent; maintain the ratios (e.g. `MD =
//! XS * 2`) when adjusting the scales.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand
    pub const PRIMARY_400: Color = Color::from_rgb(0.45, 0.65, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.55, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.45, 0.85);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.9, 0.25, 0.25);
    pub const WARNING_500: Color = Color::from_rgb(0.95, 0.6, 0.1);
    pub const INFO_500: Color = Color::from_rgb(0.25, 0.55, 0.9);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Strong overlays (badges over photos).
    pub const OVERLAY_STRONG: f32 = 0.75;
    /// Subtle overlays (corner labels).
    pub const OVERLAY_SOFT: f32 = 0.5;
    /// Divider glow behind the handle line.
    pub const DIVIDER_GLOW: f32 = 0.35;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Radius of the circular drag handle.
    pub const HANDLE_RADIUS: f32 = 18.0;
    /// Radius of the filled dot inside the handle.
    pub const HANDLE_DOT_RADIUS: f32 = 10.0;
    /// Width of the divider line between layers.
    pub const DIVIDER_WIDTH: f32 = 2.0;
    /// Width of the soft glow stroked behind the divider.
    pub const DIVIDER_GLOW_WIDTH: f32 = 6.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const LABEL: f32 = 13.0;
    pub const BADGE: f32 = 15.0;
    pub const BODY: f32 = 14.0;
    pub const HEADING: f32 = 20.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const PILL: f32 = 999.0;
}
