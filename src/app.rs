// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the comparison component, pair
//! navigation, localization and persisted preferences, and translates
//! messages into side effects like config persistence or asynchronous pair
//! loading. Policy decisions (window sizing, persistence, keyboard map)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::pair_navigator::{self, ComparisonPair, PairNavigator};
use crate::ui::compare::{self, KEYBOARD_NUDGE_PERCENT};
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::toolbar::{self, Event as ToolbarEvent};
use iced::widget::Column;
use iced::{keyboard, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    compare: compare::State,
    navigator: PairNavigator,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("pairs", &self.navigator.len())
            .field("has_pair", &self.compare.has_pair())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Compare(compare::Message),
    Toolbar(toolbar::Message),
    OpenFolderDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Positional paths: a directory of pairs, a single half of a pair, or
    /// explicit before/after files.
    pub paths: Vec<String>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 500;

/// Maps a key press onto an application message.
///
/// Letter shortcuts work regardless of Shift or Caps Lock.
fn message_for_key(key: keyboard::Key) -> Option<Message> {
    use keyboard::key::Named;
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Some(Message::Compare(
            compare::Message::Nudge(-KEYBOARD_NUDGE_PERCENT),
        )),
        keyboard::Key::Named(Named::ArrowRight) => Some(Message::Compare(
            compare::Message::Nudge(KEYBOARD_NUDGE_PERCENT),
        )),
        keyboard::Key::Named(Named::Home) => Some(Message::Compare(compare::Message::JumpTo(0.0))),
        keyboard::Key::Named(Named::End) => Some(Message::Compare(compare::Message::JumpTo(100.0))),
        keyboard::Key::Character(c) if c.as_str().eq_ignore_ascii_case("n") => {
            Some(Message::Toolbar(toolbar::Message::Next))
        }
        keyboard::Key::Character(c) if c.as_str().eq_ignore_ascii_case("p") => {
            Some(Message::Toolbar(toolbar::Message::Previous))
        }
        _ => None,
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            compare: compare::State::default(),
            navigator: PairNavigator::new(),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// pair loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let start_position = config
            .start_position
            .map(config::clamp_start_position)
            .unwrap_or(config::DEFAULT_START_POSITION);

        let mut app = App {
            i18n,
            compare: compare::State::new(start_position),
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        let task = app.open_from_paths(&flags.paths);
        (app, task)
    }

    /// Resolves CLI paths into an initial pair load.
    fn open_from_paths(&mut self, paths: &[String]) -> Task<Message> {
        match paths {
            [] => Task::none(),
            [single] => {
                let path = PathBuf::from(single);
                if path.is_dir() {
                    self.open_directory(&path)
                } else {
                    match pair_navigator::pair_for_file(&path) {
                        Ok(pair) => {
                            self.navigator = PairNavigator::with_pair(pair);
                            self.load_current_pair()
                        }
                        Err(err) => self.report_load_error(err),
                    }
                }
            }
            [before, after, ..] => {
                let pair =
                    ComparisonPair::from_files(PathBuf::from(before), PathBuf::from(after));
                self.navigator = PairNavigator::with_pair(pair);
                self.load_current_pair()
            }
        }
    }

    /// Scans a directory for pairs and loads the first one.
    fn open_directory(&mut self, dir: &Path) -> Task<Message> {
        match self.navigator.scan_directory(dir) {
            Ok(()) => self.load_current_pair(),
            Err(err) => self.report_load_error(err),
        }
    }

    /// Surfaces a discovery error through the comparison component.
    fn report_load_error(&mut self, err: crate::error::Error) -> Task<Message> {
        let _ = self.compare.handle(compare::Message::PairLoaded(Err(err)));
        Task::none()
    }

    /// Kicks off asynchronous decoding of the navigator's current pair.
    fn load_current_pair(&mut self) -> Task<Message> {
        let Some(pair) = self.navigator.current().cloned() else {
            return Task::none();
        };
        self.compare.begin_loading();
        Task::perform(media::load_pair_async(pair), |result| {
            Message::Compare(compare::Message::PairLoaded(result))
        })
    }

    fn title(&self) -> String {
        match self.compare.pair_title() {
            Some(title) => format!("{} — {}", title, self.i18n.tr("window-title")),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_subscription = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, .. } => message_for_key(key),
            _ => None,
        });

        // The release listener is scoped to the active gesture.
        let gesture_subscription = self.compare.subscription().map(Message::Compare);

        Subscription::batch([keyboard_subscription, gesture_subscription])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Compare(compare_message) => {
                let effect = self.compare.handle(compare_message);
                self.apply_compare_effect(effect);
                Task::none()
            }
            Message::Toolbar(toolbar_message) => match toolbar::update(toolbar_message) {
                ToolbarEvent::OpenFolder => Task::perform(
                    async move {
                        rfd::AsyncFileDialog::new()
                            .pick_folder()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::OpenFolderDialogResult,
                ),
                ToolbarEvent::Previous => {
                    if self.navigator.navigate_previous().is_some() {
                        self.load_current_pair()
                    } else {
                        Task::none()
                    }
                }
                ToolbarEvent::Next => {
                    if self.navigator.navigate_next().is_some() {
                        self.load_current_pair()
                    } else {
                        Task::none()
                    }
                }
                ToolbarEvent::ResetPosition => {
                    let effect = self
                        .compare
                        .handle(compare::Message::JumpTo(config::DEFAULT_START_POSITION));
                    self.apply_compare_effect(effect);
                    Task::none()
                }
            },
            Message::OpenFolderDialogResult(Some(dir)) => self.open_directory(&dir),
            Message::OpenFolderDialogResult(None) => Task::none(),
        }
    }

    /// Applies component effects that reach outside the component.
    fn apply_compare_effect(&mut self, effect: compare::Effect) {
        match effect {
            compare::Effect::None => {}
            compare::Effect::PositionSettled(position) => {
                // Remember where the user left the slider for the next pair.
                let mut config = config::load().unwrap_or_default();
                config.start_position = Some(config::clamp_start_position(position));
                if let Err(err) = config::save(&config) {
                    eprintln!("Failed to persist slider position: {err}");
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let counter = self
            .navigator
            .position()
            .map(|index| (index, self.navigator.len()));
        let toolbar_context = toolbar::ViewContext {
            i18n: &self.i18n,
            pair_counter: counter.filter(|(_, total)| *total > 1),
            can_navigate: self.navigator.len() > 1,
            has_pair: self.compare.has_pair(),
        };

        let colors = ColorScheme::for_mode(self.theme_mode);

        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(toolbar::view(&toolbar_context).map(Message::Toolbar))
            .push(self.compare.view(&self.i18n, &colors).map(Message::Compare))
            .into()
    }
}
