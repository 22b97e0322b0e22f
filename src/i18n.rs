//! Translation lookup.
//!
//! The page supplies localized strings; this crate only reads them. A missing
//! key renders as the key itself so untranslated UI stays legible.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::HashMap;

/// Key used for the clipboard success toast.
pub const COPIED_TO_CLIPBOARD: &str = "ui.copied_to_clipboard";

/// Source of localized UI strings.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

/// Flat key → text catalog for the viewer's language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_else(|| key.to_owned())
    }
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}
