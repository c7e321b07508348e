// SPDX-License-Identifier: MPL-2.0
//! `evolution_i18n` is the localization engine of the Evolution Todo
//! application.
//!
//! It resolves dot-separated lookup keys against nested per-locale message
//! catalogs with a defined fallback chain, derives text direction from the
//! active locale, and persists the user's language choice across sessions.

#![doc(html_root_url = "https://docs.rs/evolution-i18n/0.3.0")]

pub mod config;
pub mod error;
pub mod i18n;
