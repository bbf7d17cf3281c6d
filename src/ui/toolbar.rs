// SPDX-License-Identifier: MPL-2.0
//! Top toolbar for app-level actions.
//!
//! Provides the open-folder action, pair navigation and the slider reset,
//! plus the pair counter when a directory is loaded.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// One-based index and total, when a directory of pairs is loaded.
    pub pair_counter: Option<(usize, usize)>,
    /// Whether previous/next make sense (more than one pair).
    pub can_navigate: bool,
    /// Whether a pair is on screen (enables reset).
    pub has_pair: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenFolder,
    Previous,
    Next,
    ResetPosition,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenFolder,
    Previous,
    Next,
    ResetPosition,
}

/// Process a toolbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenFolder => Event::OpenFolder,
        Message::Previous => Event::Previous,
        Message::Next => Event::Next,
        Message::ResetPosition => Event::ResetPosition,
    }
}

/// Render the toolbar.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open_button = button(Text::new(ctx.i18n.tr("toolbar-open-folder")))
        .on_press(Message::OpenFolder)
        .padding(spacing::SM);

    let mut previous_button =
        button(Text::new(ctx.i18n.tr("toolbar-previous"))).padding(spacing::SM);
    let mut next_button = button(Text::new(ctx.i18n.tr("toolbar-next"))).padding(spacing::SM);
    if ctx.can_navigate {
        previous_button = previous_button.on_press(Message::Previous);
        next_button = next_button.on_press(Message::Next);
    }

    let mut reset_button = button(Text::new(ctx.i18n.tr("toolbar-reset"))).padding(spacing::SM);
    if ctx.has_pair {
        reset_button = reset_button.on_press(Message::ResetPosition);
    }

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(open_button)
        .push(previous_button)
        .push(next_button)
        .push(reset_button);

    if let Some((index, total)) = ctx.pair_counter {
        row = row.push(
            container(Text::new(format!("{index} / {total}")).size(typography::BODY))
                .padding(spacing::SM),
        );
    }

    container(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_one_to_one_onto_events() {
        assert!(matches!(update(Message::OpenFolder), Event::OpenFolder));
        assert!(matches!(update(Message::Previous), Event::Previous));
        assert!(matches!(update(Message::Next), Event::Next));
        assert!(matches!(
            update(Message::ResetPosition),
            Event::ResetPosition
        ));
    }
}
