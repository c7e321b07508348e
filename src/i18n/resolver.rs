// SPDX-License-Identifier: MPL-2.0
use crate::i18n::catalog::{Catalogs, Resolution};
use crate::i18n::direction::Direction;
use crate::i18n::session::{ConfigStore, DocumentTarget, LocaleStore, PageAttributes};
use std::rc::Rc;
use unic_langid::LanguageIdentifier;

/// The designated fallback locale. Its catalog must always be embedded and
/// non-empty; other catalogs may be partial.
pub const DEFAULT_LOCALE: &str = "en";

pub struct I18n {
    catalogs: Catalogs,
    default_locale: LanguageIdentifier,
    current_locale: LanguageIdentifier,
    store: Rc<dyn LocaleStore>,
    document: Rc<dyn DocumentTarget>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None)
    }
}

impl I18n {
    /// Build a resolver over the embedded catalogs, the `settings.toml`
    /// preference store, and a fresh document record.
    ///
    /// The initial locale is resolved from, in order: the explicit
    /// override, the persisted choice, the system locale, the default.
    pub fn new(cli_lang: Option<String>) -> Self {
        Self::build(
            cli_lang,
            sys_locale::get_locale(),
            Catalogs::from_embedded(),
            Rc::new(ConfigStore),
            Rc::new(PageAttributes::default()),
        )
    }

    /// Build a resolver from injected parts. The initial locale is the
    /// persisted choice when it is recognized, the default otherwise.
    pub fn with_parts(
        cli_lang: Option<String>,
        catalogs: Catalogs,
        store: Rc<dyn LocaleStore>,
        document: Rc<dyn DocumentTarget>,
    ) -> Self {
        Self::build(cli_lang, None, catalogs, store, document)
    }

    fn build(
        cli_lang: Option<String>,
        system_locale: Option<String>,
        catalogs: Catalogs,
        store: Rc<dyn LocaleStore>,
        document: Rc<dyn DocumentTarget>,
    ) -> Self {
        let default_locale: LanguageIdentifier =
            DEFAULT_LOCALE.parse().expect("default locale tag is valid");

        let current_locale = resolve_initial_locale(
            cli_lang,
            store.load(),
            system_locale,
            &catalogs.available_locales,
        )
        .unwrap_or_else(|| default_locale.clone());

        let i18n = Self {
            catalogs,
            default_locale,
            current_locale,
            store,
            document,
        };
        // The document reflects the active locale from the start; only an
        // explicit locale switch persists anything.
        i18n.document
            .apply(&i18n.current_locale.to_string(), i18n.direction());
        i18n
    }

    /// Translate a dot-separated key.
    ///
    /// Tries the active locale's catalog, then the default locale's, and
    /// finally echoes the key itself. Never fails: a returned value equal
    /// to the key is the (implicit) missing-translation signal.
    pub fn tr(&self, key: &str) -> String {
        if let Some(tree) = self.catalogs.get(&self.current_locale) {
            if let Resolution::Found(value) = tree.resolve(key) {
                return value.to_string();
            }
        }
        if self.current_locale != self.default_locale {
            if let Some(tree) = self.catalogs.get(&self.default_locale) {
                if let Resolution::Found(value) = tree.resolve(key) {
                    return value.to_string();
                }
            }
        }
        key.to_string()
    }

    /// Switch the active locale.
    ///
    /// A locale without a loaded catalog is silently ignored: the active
    /// locale, the persisted choice, and the document attributes all stay
    /// untouched. A recognized locale is persisted and the document's
    /// `lang`/`dir` attributes are updated.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if !self.catalogs.contains(&locale) {
            log::debug!("ignoring switch to unknown locale: {locale}");
            return;
        }
        self.current_locale = locale;
        self.store.persist(&self.current_locale.to_string());
        self.document
            .apply(&self.current_locale.to_string(), self.direction());
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.catalogs.available_locales
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn direction(&self) -> Direction {
        Direction::of(&self.current_locale)
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }
}

/// Walk the initial-locale tiers, returning the first recognized locale.
fn resolve_initial_locale(
    cli_lang: Option<String>,
    persisted: Option<String>,
    system_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Explicit override (CLI or caller)
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Persisted choice
    if let Some(lang_str) = persisted {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = system_locale {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog::MessageTree;
    use crate::i18n::session::MemoryStore;

    fn locale(tag: &str) -> LanguageIdentifier {
        tag.parse().expect("valid locale tag")
    }

    fn sample_catalogs() -> Catalogs {
        let mut catalogs = Catalogs::new();
        catalogs.insert(
            locale("en"),
            MessageTree::from_json(r#"{"a": {"b": "Hello"}, "nav": {"settings": "Settings"}}"#)
                .expect("en catalog parses"),
        );
        catalogs.insert(
            locale("ur"),
            MessageTree::from_json(r#"{"a": {}, "nav": {"settings": "ترتیبات"}}"#)
                .expect("ur catalog parses"),
        );
        catalogs
    }

    fn resolver_with(store: Rc<MemoryStore>, page: Rc<PageAttributes>) -> I18n {
        I18n::with_parts(None, sample_catalogs(), store, page)
    }

    #[test]
    fn starts_at_default_locale_when_nothing_persisted() {
        let i18n = resolver_with(Rc::new(MemoryStore::default()), Rc::default());
        assert_eq!(i18n.current_locale(), &locale("en"));
    }

    #[test]
    fn persisted_choice_becomes_active() {
        let i18n = resolver_with(Rc::new(MemoryStore::with_choice("ur")), Rc::default());
        assert_eq!(i18n.current_locale(), &locale("ur"));
    }

    #[test]
    fn unrecognized_persisted_choice_falls_back_to_default() {
        let i18n = resolver_with(Rc::new(MemoryStore::with_choice("fr")), Rc::default());
        assert_eq!(i18n.current_locale(), &locale("en"));
    }

    #[test]
    fn explicit_override_wins_over_persisted_choice() {
        let store = Rc::new(MemoryStore::with_choice("en"));
        let i18n = I18n::with_parts(
            Some("ur".to_string()),
            sample_catalogs(),
            store,
            Rc::<PageAttributes>::default(),
        );
        assert_eq!(i18n.current_locale(), &locale("ur"));
    }

    #[test]
    fn construction_applies_document_attributes() {
        let page = Rc::new(PageAttributes::default());
        let _i18n = resolver_with(Rc::new(MemoryStore::default()), page.clone());
        assert_eq!(page.language(), Some("en".to_string()));
        assert_eq!(page.direction(), Some(Direction::Ltr));
    }

    #[test]
    fn tr_returns_leaf_in_active_locale() {
        let i18n = resolver_with(Rc::new(MemoryStore::default()), Rc::default());
        assert_eq!(i18n.tr("a.b"), "Hello");
    }

    #[test]
    fn tr_falls_back_to_default_locale() {
        // "a.b" exists in en but not in ur, whose "a" subtree is empty.
        let i18n = resolver_with(Rc::new(MemoryStore::with_choice("ur")), Rc::default());
        assert_eq!(i18n.tr("a.b"), "Hello");
        assert_eq!(i18n.tr("nav.settings"), "ترتیبات");
    }

    #[test]
    fn tr_echoes_key_missing_everywhere_and_is_idempotent() {
        let i18n = resolver_with(Rc::new(MemoryStore::default()), Rc::default());
        assert_eq!(i18n.tr("does.not.exist"), "does.not.exist");
        assert_eq!(i18n.tr("does.not.exist"), "does.not.exist");
    }

    #[test]
    fn tr_echoes_key_requested_past_a_leaf() {
        let mut catalogs = Catalogs::new();
        catalogs.insert(
            locale("en"),
            MessageTree::from_json(r#"{"a": "X"}"#).expect("catalog parses"),
        );
        let i18n = I18n::with_parts(
            None,
            catalogs,
            Rc::new(MemoryStore::default()),
            Rc::<PageAttributes>::default(),
        );
        assert_eq!(i18n.tr("a.b"), "a.b");
    }

    #[test]
    fn set_locale_switches_persists_and_updates_document() {
        let store = Rc::new(MemoryStore::default());
        let page = Rc::new(PageAttributes::default());
        let mut i18n = resolver_with(store.clone(), page.clone());

        i18n.set_locale(locale("ur"));

        assert_eq!(i18n.current_locale(), &locale("ur"));
        assert_eq!(store.load(), Some("ur".to_string()));
        assert_eq!(page.language(), Some("ur".to_string()));
        assert_eq!(page.direction(), Some(Direction::Rtl));
        assert!(i18n.is_rtl());
    }

    #[test]
    fn set_locale_unknown_is_a_noop() {
        let store = Rc::new(MemoryStore::default());
        let page = Rc::new(PageAttributes::default());
        let mut i18n = resolver_with(store.clone(), page.clone());

        i18n.set_locale(locale("fr"));

        assert_eq!(i18n.current_locale(), &locale("en"));
        assert!(store.load().is_none());
        assert_eq!(page.language(), Some("en".to_string()));
    }

    #[test]
    fn direction_tracks_active_locale() {
        let mut i18n = resolver_with(Rc::new(MemoryStore::default()), Rc::default());
        assert_eq!(i18n.direction(), Direction::Ltr);

        i18n.set_locale(locale("ur"));
        assert_eq!(i18n.direction(), Direction::Rtl);
    }

    #[test]
    fn initial_locale_prefers_explicit_override() {
        let available = vec![locale("en"), locale("ur")];
        let resolved =
            resolve_initial_locale(Some("ur".to_string()), Some("en".to_string()), None, &available);
        assert_eq!(resolved, Some(locale("ur")));
    }

    #[test]
    fn initial_locale_reads_persisted_choice() {
        let available = vec![locale("en"), locale("ur")];
        let resolved = resolve_initial_locale(None, Some("ur".to_string()), None, &available);
        assert_eq!(resolved, Some(locale("ur")));
    }

    #[test]
    fn initial_locale_consults_system_last() {
        let available = vec![locale("en"), locale("ur")];
        let resolved = resolve_initial_locale(None, None, Some("ur".to_string()), &available);
        assert_eq!(resolved, Some(locale("ur")));

        let resolved = resolve_initial_locale(None, None, Some("fr".to_string()), &available);
        assert_eq!(resolved, None);
    }

    #[test]
    fn initial_locale_ignores_unparseable_tags() {
        let available = vec![locale("en")];
        let resolved = resolve_initial_locale(Some("!!".to_string()), None, None, &available);
        assert_eq!(resolved, None);
    }
}
