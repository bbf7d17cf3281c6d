// SPDX-License-Identifier: MPL-2.0
//! Derivation of the layer clipping geometry from the slider position.

/// Widths of the two stacked layers for a given slider position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGeometry {
    /// Width of the clipping window showing the "after" layer, as a percent
    /// of the surface width. Equal to the slider position.
    pub reveal_width_percent: f32,
    /// Compensation factor for layouts that size the inner image relative to
    /// its clipped parent: scaling the inner layer by this percentage makes
    /// it span the full surface again. The renderer here clips a full-width
    /// image directly instead, which avoids the fragile division near zero.
    pub inner_scale_percent: f32,
}

/// Computes the layer geometry for a position in `[0, 100]`.
///
/// `position == 0` is special-cased: the reveal window is empty and the
/// scale factor stays finite (the after layer is fully hidden, so no
/// compensation is meaningful and none is computed).
#[must_use]
pub fn layer_geometry(position: f32) -> RevealGeometry {
    let position = if position.is_finite() {
        position.clamp(0.0, 100.0)
    } else {
        0.0
    };

    if position <= 0.0 {
        return RevealGeometry {
            reveal_width_percent: 0.0,
            inner_scale_percent: 100.0,
        };
    }

    RevealGeometry {
        reveal_width_percent: position,
        inner_scale_percent: 100.0 / (position / 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn hidden_after_layer_has_empty_reveal_window() {
        let geometry = layer_geometry(0.0);
        assert_eq!(geometry.reveal_width_percent, 0.0);
        assert!(geometry.inner_scale_percent.is_finite());
    }

    #[test]
    fn midpoint_doubles_the_inner_scale() {
        let geometry = layer_geometry(50.0);
        assert_abs_diff_eq!(geometry.reveal_width_percent, 50.0);
        assert_abs_diff_eq!(geometry.inner_scale_percent, 200.0);
    }

    #[test]
    fn fully_revealed_needs_no_compensation() {
        let geometry = layer_geometry(100.0);
        assert_abs_diff_eq!(geometry.reveal_width_percent, 100.0);
        assert_abs_diff_eq!(geometry.inner_scale_percent, 100.0);
    }

    #[test]
    fn near_zero_positions_stay_finite() {
        for position in [0.0001, 0.01, 0.5, 1.0] {
            let geometry = layer_geometry(position);
            assert!(geometry.inner_scale_percent.is_finite());
            assert!(!geometry.reveal_width_percent.is_nan());
        }
    }

    #[test]
    fn out_of_range_positions_are_clamped() {
        assert_eq!(layer_geometry(150.0).reveal_width_percent, 100.0);
        assert_eq!(layer_geometry(-10.0).reveal_width_percent, 0.0);
        assert_eq!(layer_geometry(f32::NAN).reveal_width_percent, 0.0);
    }

    #[test]
    fn scale_always_compensates_the_clip_exactly() {
        // reveal% * scale% == 100% of the surface, for any visible position.
        for position in [1.0, 12.5, 33.3, 50.0, 80.0, 100.0] {
            let geometry = layer_geometry(position);
            let spanned = geometry.reveal_width_percent * geometry.inner_scale_percent / 100.0;
            assert_abs_diff_eq!(spanned, 100.0, epsilon = 1e-3);
        }
    }
}
