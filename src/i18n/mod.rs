// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Translation files embedded at build time from `assets/i18n/`
//! - Named arguments (`{ $name }`) through [`fluent::I18n::tr_with_args`]
//! - Fallback to `en-US` when the requested locale is not available

pub mod fluent;

pub use fluent::I18n;
