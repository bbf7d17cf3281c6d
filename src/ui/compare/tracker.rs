// SPDX-License-Identifier: MPL-2.0
//! Conversion of raw pointer coordinates into a normalized slider position.

use iced::Rectangle;

/// Converts an absolute horizontal coordinate into a position relative to
/// the surface rectangle, as a percentage of its width clamped to `[0, 100]`.
///
/// Returns `None` when the surface has no usable width (not laid out yet,
/// hidden) or the math would produce a non-finite value; the caller keeps the
/// previous position in that case. The surface rectangle must be read fresh
/// from the current layout for every event, never cached, since layout can
/// change between drags.
#[must_use]
pub fn normalized_position(event_x: f32, surface: Rectangle) -> Option<f32> {
    if surface.width <= 0.0 {
        return None;
    }

    let position = ((event_x - surface.x) / surface.width) * 100.0;
    if !position.is_finite() {
        return None;
    }

    Some(position.clamp(0.0, 100.0))
}
