// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module maps dot-separated lookup keys against nested per-locale
//! message catalogs, with a deterministic fallback chain and RTL-aware
//! direction metadata.
//!
//! # Features
//!
//! - Embedded JSON message catalogs, one per locale
//! - Three-tier resolution: active locale, default locale, literal key echo
//! - Silent degradation: a missing translation never fails, it shows its key
//! - Runtime language switching with persisted choice and document
//!   `lang`/`dir` updates
//! - Locale detection from an explicit override, the persisted choice, or
//!   the system locale

pub mod catalog;
pub mod direction;
pub mod resolver;
pub mod session;

pub use catalog::{Catalogs, MessageTree, Resolution};
pub use direction::Direction;
pub use resolver::{I18n, DEFAULT_LOCALE};
pub use session::{ConfigStore, DocumentTarget, LocaleStore, MemoryStore, PageAttributes};
