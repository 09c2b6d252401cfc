//! The parsed configuration tree: a [`ConfigFile`] owns its [`Section`]s,
//! each section owns its [`Item`]s.
//!
//! Order matters everywhere. Sections and items are stored in file
//! appearance order, names are **not** required to be unique, and lookup is
//! first-match: the first section whose name matches, then the first item
//! within it. Duplicate `[section]` headers therefore shadow later
//! occurrences for reads, while still being present in
//! [`ConfigFile::sections`] for callers that iterate the raw tree.
//!
//! The tree is immutable once built — only the parser constructs it — so
//! shared references can be handed across threads freely.

use std::path::{Path, PathBuf};

/// One parsed configuration file.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    sections: Vec<Section>,
}

/// One `[name]` block and the items that appeared under it.
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    items: Vec<Item>,
}

/// One `key=value` entry.
#[derive(Debug, Clone)]
pub struct Item {
    name: String,
    value: String,
}

/// Compare two names, optionally ignoring ASCII case.
pub(crate) fn name_matches(a: &str, b: &str, ignore_case: bool) -> bool {
    if ignore_case {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

impl ConfigFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            sections: Vec::new(),
        }
    }

    pub(crate) fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub(crate) fn current_section(&mut self) -> Option<&mut Section> {
        self.sections.last_mut()
    }

    /// The path this file was parsed from (a diagnostic label for
    /// [`parse_str`](ConfigFile::parse_str) input).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All sections in file appearance order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section (in file order) whose name matches.
    pub fn section(&self, name: &str, ignore_case: bool) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| name_matches(&s.name, name, ignore_case))
    }
}

impl Section {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            items: Vec::new(),
        }
    }

    pub(crate) fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// The text between the brackets of the `[name]` header, verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All items in file appearance order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// First item (in file order) whose name matches.
    pub fn item(&self, name: &str, ignore_case: bool) -> Option<&Item> {
        self.items
            .iter()
            .find(|i| name_matches(&i.name, name, ignore_case))
    }
}

impl Item {
    pub(crate) fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// The text before the first `=`, verbatim (not re-trimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text after the first `=`, verbatim (may be empty).
    pub fn value(&self) -> &str {
        &self.value
    }
}
