// SPDX-License-Identifier: MPL-2.0
//! Internationalization support backed by Fluent.
//!
//! Locale resolution order: CLI flag, then the config file, then the OS
//! locale, falling back to `en-US`.

pub mod fluent;
