// SPDX-License-Identifier: MPL-2.0
//! Canvas program for the comparison surface.
//!
//! Draws the before layer contain-fitted into the widget bounds, the after
//! layer clipped to the reveal window, the divider with its drag handle and
//! the overlay labels. Raw mouse and touch events are translated into
//! component messages carrying the absolute event x and the surface
//! rectangle taken fresh from the current layout.

use super::gesture::PointerSource;
use super::reveal;
use super::Message;
use crate::media::LoadedPair;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas;
use iced::widget::Action;
use iced::{mouse, touch, Color, Point, Rectangle, Size, Theme};

/// Rough advance width per glyph, as a fraction of the font size. Canvas
/// text is not measured before drawing; badges are sized from this estimate.
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Canvas program rendering one loaded pair at a given slider position.
pub struct Surface<'a> {
    pair: &'a LoadedPair,
    position: f32,
    dragging: bool,
    before_label: String,
    after_label: String,
    colors: ColorScheme,
}

impl<'a> Surface<'a> {
    pub fn new(
        pair: &'a LoadedPair,
        position: f32,
        dragging: bool,
        before_label: String,
        after_label: String,
        colors: ColorScheme,
    ) -> Self {
        Self {
            pair,
            position,
            dragging,
            before_label,
            after_label,
            colors,
        }
    }

    /// Contain-fits the before image into the widget, in local coordinates.
    /// Both layers share this rectangle; the after image is expected to have
    /// the same framing as the before shot.
    fn fitted_local(&self, size: Size) -> Rectangle {
        let aspect = self.pair.before.aspect_ratio();
        if size.width <= 0.0 || size.height <= 0.0 {
            return Rectangle::new(Point::ORIGIN, Size::ZERO);
        }

        let bounds_aspect = size.width / size.height;
        if aspect > bounds_aspect {
            // Image is wider - fit to width
            let height = size.width / aspect;
            Rectangle::new(
                Point::new(0.0, (size.height - height) / 2.0),
                Size::new(size.width, height),
            )
        } else {
            // Image is taller - fit to height
            let width = size.height * aspect;
            Rectangle::new(
                Point::new((size.width - width) / 2.0, 0.0),
                Size::new(width, size.height),
            )
        }
    }

    /// The surface rectangle in window coordinates, used for hit-testing and
    /// as the reference rect for position normalization.
    fn fitted_absolute(&self, bounds: Rectangle) -> Rectangle {
        let local = self.fitted_local(bounds.size());
        Rectangle::new(
            Point::new(bounds.x + local.x, bounds.y + local.y),
            local.size(),
        )
    }

    fn draw_badge(&self, frame: &mut canvas::Frame, content: &str, top_left: Point, size: f32) {
        let padding = f32::from(spacing::SM);
        let text_width = content.chars().count() as f32 * size * GLYPH_WIDTH_RATIO;
        let badge = canvas::Path::rounded_rectangle(
            top_left,
            Size::new(text_width + padding * 2.0, size + padding * 2.0),
            radius::MD.into(),
        );
        frame.fill(&badge, self.colors.overlay_background);
        frame.fill_text(canvas::Text {
            content: content.to_string(),
            position: Point::new(top_left.x + padding, top_left.y + padding),
            color: self.colors.overlay_text,
            size: size.into(),
            ..canvas::Text::default()
        });
    }

    fn draw_divider(&self, frame: &mut canvas::Frame, rect: Rectangle) {
        let handle_x = rect.x + rect.width * self.position / 100.0;
        let top = Point::new(handle_x, rect.y);
        let bottom = Point::new(handle_x, rect.y + rect.height);

        // Soft glow behind the divider line
        let line = canvas::Path::line(top, bottom);
        frame.stroke(
            &line,
            canvas::Stroke::default()
                .with_width(sizing::DIVIDER_GLOW_WIDTH)
                .with_color(Color {
                    a: opacity::DIVIDER_GLOW,
                    ..self.colors.brand_primary
                }),
        );
        frame.stroke(
            &line,
            canvas::Stroke::default()
                .with_width(sizing::DIVIDER_WIDTH)
                .with_color(self.colors.overlay_text),
        );

        // Circular handle centered on the divider
        let center = Point::new(handle_x, rect.y + rect.height / 2.0);
        let ring = canvas::Path::circle(center, sizing::HANDLE_RADIUS);
        frame.fill(
            &ring,
            Color {
                a: opacity::OVERLAY_SOFT,
                ..self.colors.surface_primary
            },
        );
        frame.stroke(
            &ring,
            canvas::Stroke::default()
                .with_width(sizing::DIVIDER_WIDTH)
                .with_color(self.colors.brand_primary),
        );

        let dot_radius = if self.dragging {
            sizing::HANDLE_DOT_RADIUS * 1.15
        } else {
            sizing::HANDLE_DOT_RADIUS
        };
        let dot = canvas::Path::circle(center, dot_radius);
        frame.fill(&dot, self.colors.brand_primary);
    }
}

impl canvas::Program<Message> for Surface<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let surface = self.fitted_absolute(bounds);

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position()?;
                if surface.contains(position) {
                    return Some(
                        Action::publish(Message::SurfacePressed {
                            x: position.x,
                            surface,
                            source: PointerSource::Mouse,
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                // Forward moves even outside the bounds: a drag follows the
                // pointer wherever it goes until release.
                if self.dragging {
                    return Some(
                        Action::publish(Message::SurfaceMoved {
                            x: position.x,
                            surface,
                            source: PointerSource::Mouse,
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.dragging {
                    return Some(
                        Action::publish(Message::SurfaceReleased {
                            source: PointerSource::Mouse,
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if surface.contains(*position) {
                    return Some(
                        Action::publish(Message::SurfacePressed {
                            x: position.x,
                            surface,
                            source: PointerSource::Finger(*id),
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if self.dragging {
                    return Some(
                        Action::publish(Message::SurfaceMoved {
                            x: position.x,
                            surface,
                            source: PointerSource::Finger(*id),
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => {
                if self.dragging {
                    return Some(
                        Action::publish(Message::SurfaceReleased {
                            source: PointerSource::Finger(*id),
                        })
                        .and_capture(),
                    );
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Letterbox backdrop behind the contain-fitted layers.
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.colors.surface_secondary);

        let rect = self.fitted_local(bounds.size());
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return vec![frame.into_geometry()];
        }

        // Base layer: the before image across the whole fitted rect.
        frame.draw_image(rect, canvas::Image::new(self.pair.before.handle.clone()));

        // After layer: a full-width image clipped to the reveal window. The
        // clip replaces the width-compensation rescale of parent-relative
        // layouts, which RevealGeometry::inner_scale_percent still describes.
        let geometry = reveal::layer_geometry(self.position);
        if geometry.reveal_width_percent > 0.0 {
            let reveal_window = Rectangle {
                width: rect.width * geometry.reveal_width_percent / 100.0,
                ..rect
            };
            let full_size = rect.size();
            let after_handle = self.pair.after.handle.clone();
            frame.with_clip(reveal_window, |clipped| {
                clipped.draw_image(
                    Rectangle::new(Point::ORIGIN, full_size),
                    canvas::Image::new(after_handle),
                );
            });
        }

        self.draw_divider(&mut frame, rect);

        // Corner labels: the revealed after layer sits on the left.
        let label_y = rect.y + rect.height
            - typography::LABEL
            - f32::from(spacing::SM) * 2.0
            - f32::from(spacing::MD);
        self.draw_badge(
            &mut frame,
            &self.after_label,
            Point::new(rect.x + f32::from(spacing::MD), label_y),
            typography::LABEL,
        );
        let before_width = self.before_label.chars().count() as f32
            * typography::LABEL
            * GLYPH_WIDTH_RATIO
            + f32::from(spacing::SM) * 2.0;
        self.draw_badge(
            &mut frame,
            &self.before_label,
            Point::new(
                rect.x + rect.width - before_width - f32::from(spacing::MD),
                label_y,
            ),
            typography::LABEL,
        );

        // Optional title badge, top-left as in the gallery design.
        if let Some(title) = self.pair.title.as_deref() {
            self.draw_badge(
                &mut frame,
                title,
                Point::new(
                    rect.x + f32::from(spacing::MD),
                    rect.y + f32::from(spacing::MD),
                ),
                typography::BADGE,
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let over_surface = cursor
            .position()
            .is_some_and(|p| self.fitted_absolute(bounds).contains(p));
        if self.dragging || over_surface {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}
