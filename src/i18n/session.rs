// SPDX-License-Identifier: MPL-2.0
//! Session-scoped ambient state behind the resolver: the durable locale
//! choice and the surrounding document's `lang`/`dir` attributes. Both are
//! injected so the resolver stays testable without a real config directory
//! or document.

use crate::config;
use crate::i18n::direction::Direction;
use std::cell::RefCell;

/// Durable storage for the last chosen locale.
///
/// `persist` is fire-and-forget: failures are logged and swallowed, a
/// locale switch must never surface a storage error to the UI.
pub trait LocaleStore {
    fn load(&self) -> Option<String>;
    fn persist(&self, locale: &str);
}

/// [`LocaleStore`] backed by the `settings.toml` preference file.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl LocaleStore for ConfigStore {
    fn load(&self) -> Option<String> {
        config::load().ok().and_then(|cfg| cfg.language)
    }

    fn persist(&self, locale: &str) {
        let mut cfg = config::load().unwrap_or_default();
        cfg.language = Some(locale.to_string());
        if let Err(error) = config::save(&cfg) {
            log::warn!("failed to persist locale choice: {error}");
        }
    }
}

/// In-memory [`LocaleStore`] for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_choice(locale: &str) -> Self {
        Self {
            slot: RefCell::new(Some(locale.to_string())),
        }
    }
}

impl LocaleStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn persist(&self, locale: &str) {
        *self.slot.borrow_mut() = Some(locale.to_string());
    }
}

/// Sink for the surrounding document's language metadata.
///
/// A locale switch writes the active locale code and its direction here;
/// nothing is ever read back through this trait.
pub trait DocumentTarget {
    fn apply(&self, lang: &str, direction: Direction);
}

/// Records the last applied `lang`/`dir` pair, for rendering the document
/// element (`<html lang=".." dir="..">`).
#[derive(Debug, Default)]
pub struct PageAttributes {
    state: RefCell<Option<(String, Direction)>>,
}

impl PageAttributes {
    pub fn language(&self) -> Option<String> {
        self.state.borrow().as_ref().map(|(lang, _)| lang.clone())
    }

    pub fn direction(&self) -> Option<Direction> {
        self.state.borrow().as_ref().map(|(_, dir)| *dir)
    }
}

impl DocumentTarget for PageAttributes {
    fn apply(&self, lang: &str, direction: Direction) {
        *self.state.borrow_mut() = Some((lang.to_string(), direction));
    }
}
