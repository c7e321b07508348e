// SPDX-License-Identifier: MPL-2.0
use crate::error::Result;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// A nested message catalog for one locale.
///
/// Leaves are display strings; interior nodes map a key segment to a
/// subtree. The tree is immutable after deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageTree {
    Leaf(String),
    Branch(HashMap<String, MessageTree>),
}

/// Outcome of navigating a [`MessageTree`] with a dot-separated key.
///
/// Lookups never fail with an error. A path that runs past a leaf, names
/// an absent segment, or ends on an interior node is `Missing`; callers
/// decide how to degrade (the public resolver echoes the key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a str),
    Missing,
}

impl MessageTree {
    /// Parse a catalog from a JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Navigate the tree by splitting `key` on `'.'`.
    ///
    /// Returns `Missing` when a segment is absent, when segments remain
    /// but the current node is already a leaf, or when navigation ends on
    /// an interior node.
    pub fn resolve<'a>(&'a self, key: &str) -> Resolution<'a> {
        let mut current = self;
        for segment in key.split('.') {
            match current {
                MessageTree::Leaf(_) => return Resolution::Missing,
                MessageTree::Branch(children) => match children.get(segment) {
                    Some(child) => current = child,
                    None => return Resolution::Missing,
                },
            }
        }
        match current {
            MessageTree::Leaf(value) => Resolution::Found(value),
            MessageTree::Branch(_) => Resolution::Missing,
        }
    }

    /// All dot-joined leaf paths of this tree, sorted.
    pub fn leaf_keys(&self) -> Vec<String> {
        fn collect(node: &MessageTree, prefix: &str, keys: &mut Vec<String>) {
            match node {
                MessageTree::Leaf(_) => keys.push(prefix.to_string()),
                MessageTree::Branch(children) => {
                    for (segment, child) in children {
                        let path = if prefix.is_empty() {
                            segment.clone()
                        } else {
                            format!("{}.{}", prefix, segment)
                        };
                        collect(child, &path, keys);
                    }
                }
            }
        }

        let mut keys = Vec::new();
        collect(self, "", &mut keys);
        keys.sort_unstable();
        keys
    }
}

/// The set of loaded message catalogs, one per locale.
#[derive(Debug, Clone)]
pub struct Catalogs {
    trees: HashMap<LanguageIdentifier, MessageTree>,
    pub available_locales: Vec<LanguageIdentifier>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self {
            trees: HashMap::new(),
            available_locales: Vec::new(),
        }
    }

    /// Load every embedded `assets/i18n/*.json` catalog.
    ///
    /// Files whose stem is not a valid locale identifier are skipped with
    /// a warning. Embedded catalogs are part of the binary, so a malformed
    /// one is a build defect and panics here rather than at lookup time.
    pub fn from_embedded() -> Self {
        let mut catalogs = Self::new();
        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(stem) = filename.strip_suffix(".json") else {
                continue;
            };
            let Ok(locale) = stem.parse::<LanguageIdentifier>() else {
                log::warn!("skipping catalog with unrecognized locale stem: {filename}");
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let text = String::from_utf8_lossy(content.data.as_ref());
                let tree = MessageTree::from_json(&text)
                    .expect("embedded message catalog is malformed JSON");
                catalogs.insert(locale, tree);
            }
        }
        catalogs
    }

    pub fn insert(&mut self, locale: LanguageIdentifier, tree: MessageTree) {
        if !self.trees.contains_key(&locale) {
            self.available_locales.push(locale.clone());
            self.available_locales.sort_by_key(|l| l.to_string());
        }
        self.trees.insert(locale, tree);
    }

    pub fn get(&self, locale: &LanguageIdentifier) -> Option<&MessageTree> {
        self.trees.get(locale)
    }

    pub fn contains(&self, locale: &LanguageIdentifier) -> bool {
        self.trees.contains_key(locale)
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// All unique leaf keys across every catalog, sorted.
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .trees
            .values()
            .flat_map(MessageTree::leaf_keys)
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys from `reference_keys` that `locale`'s own catalog does not
    /// resolve. A locale that is not loaded at all is missing everything.
    pub fn missing_keys(&self, locale: &LanguageIdentifier, reference_keys: &[String]) -> Vec<String> {
        match self.trees.get(locale) {
            Some(tree) => reference_keys
                .iter()
                .filter(|key| tree.resolve(key) == Resolution::Missing)
                .cloned()
                .collect(),
            None => reference_keys.to_vec(),
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::new()
    }
}
