//! Alphabetical lookup over every entry in a catalog.
//!
//! Entries are ordered the way a locale-aware collator orders Latin names:
//! case-insensitive first, lowercase ahead of uppercase when the folded names
//! tie, raw code points last. Groups are keyed by the uppercased first
//! character and come out in ascending key order.
//!
//! This is not a full collator: it carries no locale tables, so names with
//! digits, `_`, punctuation or spaces fall back to code-point order for
//! those characters. The catalog only holds ASCII widget identifiers.

use crate::catalog::{CatalogEntry, Category};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// An entry together with the category that declared it.
#[derive(Clone, Copy, Debug)]
pub struct IndexedEntry<'a> {
    pub category: &'a Category,
    pub entry: &'a CatalogEntry,
}

impl IndexedEntry<'_> {
    /// Link to the entry's page, relative to the output root.
    pub fn href(&self) -> String {
        format!("./{}/{}", self.category.key, self.entry.file_stem())
    }
}

#[derive(Debug)]
pub struct LetterGroup<'a> {
    pub letter: String,
    pub entries: Vec<IndexedEntry<'a>>,
}

pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded
        .then_with(|| case_tiers(a).cmp(case_tiers(b)))
        .then_with(|| a.cmp(b))
}

fn case_tiers(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars().map(|c| u8::from(c.is_uppercase()))
}

/// All entries across `categories`, sorted by name. Equal names keep catalog order.
pub fn sorted_entries(categories: &[Category]) -> Vec<IndexedEntry<'_>> {
    let mut entries: Vec<IndexedEntry<'_>> = categories
        .iter()
        .flat_map(|category| {
            category
                .items
                .iter()
                .map(move |entry| IndexedEntry { category, entry })
        })
        .collect();
    entries.sort_by(|a, b| collate(&a.entry.name, &b.entry.name));
    entries
}

pub fn letter_groups(categories: &[Category]) -> Vec<LetterGroup<'_>> {
    let mut grouped: BTreeMap<String, Vec<IndexedEntry<'_>>> = BTreeMap::new();
    for indexed in sorted_entries(categories) {
        let Some(first) = indexed.entry.name.chars().next() else {
            continue;
        };
        let letter: String = first.to_uppercase().collect();
        grouped.entry(letter).or_default().push(indexed);
    }
    grouped
        .into_iter()
        .map(|(letter, entries)| LetterGroup { letter, entries })
        .collect()
}
