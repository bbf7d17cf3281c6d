// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison component.
//!
//! Owns the slider position and the drag gesture state, following the
//! "state down, messages up" pattern: the canvas surface reports raw pointer
//! events, the component runs them through the gesture machine and the
//! position tracker, and the renderer derives the layer geometry from the
//! resulting position on every draw.

pub mod gesture;
pub mod reveal;
pub mod surface;
pub mod tracker;

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::LoadedPair;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::theming::ColorScheme;
use gesture::{GestureState, PointerSource};
use iced::widget::canvas::Canvas;
use iced::widget::{container, text, Text};
use iced::{event, mouse, touch, Element, Length, Rectangle, Subscription, Theme};
use surface::Surface;

/// Slider step for one keyboard arrow press, in percent.
pub const KEYBOARD_NUDGE_PERCENT: f32 = 5.0;

/// Comparison component state.
///
/// `position` persists across drags: the last value stays on screen at rest
/// and seeds the next gesture.
#[derive(Debug, Clone)]
pub struct State {
    position: f32,
    gesture: GestureState,
    pair: Option<LoadedPair>,
    is_loading: bool,
    load_error: Option<Error>,
    show_error_details: bool,
}

/// Messages for the comparison component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer went down on the slider surface.
    SurfacePressed {
        x: f32,
        surface: Rectangle,
        source: PointerSource,
    },
    /// Pointer moved; `surface` is read fresh from the current layout.
    SurfaceMoved {
        x: f32,
        surface: Rectangle,
        source: PointerSource,
    },
    /// Pointer released, anywhere in the window.
    SurfaceReleased { source: PointerSource },
    /// Relative keyboard adjustment.
    Nudge(f32),
    /// Absolute jump (Home/End).
    JumpTo(f32),
    /// Asynchronous pair decoding finished.
    PairLoaded(Result<LoadedPair, Error>),
    /// Toggle the technical details of a load error.
    ToggleErrorDetails,
}

/// Effects produced by the comparison component.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// A gesture or keyboard change finished at this position; the
    /// orchestrator may persist it as the preferred start position.
    PositionSettled(f32),
}

impl State {
    /// Creates the component resting at the given start position.
    #[must_use]
    pub fn new(start_position: f32) -> Self {
        Self {
            position: crate::config::clamp_start_position(start_position),
            gesture: GestureState::default(),
            pair: None,
            is_loading: false,
            load_error: None,
            show_error_details: false,
        }
    }

    /// Marks the component as waiting for an asynchronous pair load.
    /// The previous pair stays visible until the new one arrives.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.load_error = None;
        // The surface may be replaced mid-drag; force the gesture out.
        self.gesture.cancel();
    }

    /// Handle a component message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::SurfacePressed { source, .. } => {
                // Position is untouched until the first move; a click without
                // a drag leaves the slider where it was.
                self.gesture.begin(source);
                Effect::None
            }
            Message::SurfaceMoved { x, surface, source } => {
                // Moves while idle, or from a pointer that did not begin the
                // gesture, never mutate the position.
                if self.gesture.accepts(source) {
                    if let Some(position) = tracker::normalized_position(x, surface) {
                        self.position = position;
                    }
                }
                Effect::None
            }
            Message::SurfaceReleased { source } => {
                if self.gesture.end(source) {
                    Effect::PositionSettled(self.position)
                } else {
                    Effect::None
                }
            }
            Message::Nudge(delta) => {
                self.position = (self.position + delta).clamp(0.0, 100.0);
                Effect::PositionSettled(self.position)
            }
            Message::JumpTo(position) => {
                self.position = position.clamp(0.0, 100.0);
                Effect::PositionSettled(self.position)
            }
            Message::PairLoaded(result) => {
                self.is_loading = false;
                self.gesture.cancel();
                match result {
                    Ok(pair) => {
                        self.pair = Some(pair);
                        self.load_error = None;
                    }
                    Err(err) => {
                        self.load_error = Some(err);
                        self.show_error_details = false;
                    }
                }
                Effect::None
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                Effect::None
            }
        }
    }

    /// Current slider position in `[0, 100]`.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub fn has_pair(&self) -> bool {
        self.pair.is_some()
    }

    #[must_use]
    pub fn pair_title(&self) -> Option<&str> {
        self.pair.as_ref().and_then(|p| p.title.as_deref())
    }

    /// Release listener scoped to the gesture: subscribed while dragging,
    /// dropped declaratively the moment the machine returns to idle (or the
    /// component is torn down). Catches releases the surface never sees.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.gesture.is_dragging() {
            event::listen_with(|event, _status, _window| match event {
                event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                    Some(Message::SurfaceReleased {
                        source: PointerSource::Mouse,
                    })
                }
                event::Event::Touch(
                    touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
                ) => Some(Message::SurfaceReleased {
                    source: PointerSource::Finger(id),
                }),
                _ => None,
            })
        } else {
            Subscription::none()
        }
    }

    /// Renders the comparison surface, or the loading/error/empty state.
    pub fn view<'a>(&'a self, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
        if let Some(error) = &self.load_error {
            let message_key = match error {
                Error::Pair(pair_error) => pair_error.i18n_key(),
                _ => "error-load-image",
            };
            let display = ErrorDisplay::new(ErrorSeverity::Error)
                .title(i18n.tr("error-load-title"))
                .message(i18n.tr(message_key))
                .details(error.to_string())
                .details_visible(self.show_error_details)
                .on_toggle_details(Message::ToggleErrorDetails)
                .details_labels(
                    i18n.tr("error-details-show"),
                    i18n.tr("error-details-hide"),
                    i18n.tr("error-details-heading"),
                );
            return centered_error_view(display);
        }

        if let Some(pair) = &self.pair {
            return Canvas::new(Surface::new(
                pair,
                self.position,
                self.gesture.is_dragging(),
                i18n.tr("compare-before-label"),
                i18n.tr("compare-after-label"),
                colors.clone(),
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
        }

        // Loading keeps the reader's attention; the idle hint recedes.
        let (key, color) = if self.is_loading {
            ("compare-loading", colors.text_primary)
        } else {
            ("compare-empty-hint", colors.text_secondary)
        };
        container(
            Text::new(i18n.tr(key))
                .size(16)
                .style(move |_theme: &Theme| text::Style { color: Some(color) }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_START_POSITION)
    }
}
