//! Typed lookups over a built [`ConfigFile`].
//!
//! Everything here is best-effort by contract: a lookup miss or a value that
//! does not coerce is never an error, it resolves to the caller-supplied
//! default. The accessors never mutate the tree and never panic, so repeated
//! calls with the same arguments always agree.
//!
//! # Case sensitivity
//!
//! Matching is exact byte comparison unless the corresponding
//! [`MatchOptions`] axis is enabled. The three axes — section name, item
//! name, boolean keyword value — are independent; enabling one never affects
//! the others.
//!
//! # Coercion
//!
//! [`get_int`](ConfigFile::get_int) uses `strtol`-style base detection on
//! the ASCII-whitespace-trimmed value: `0x`/`0X` prefix → hex, leading `0` →
//! octal, otherwise decimal, with an optional leading sign. The whole
//! trimmed string must be consumed and contain at least one digit, so
//! `"12abc"` falls back to the default.
//!
//! [`get_bool`](ConfigFile::get_bool) recognizes `yes`/`true`/`on` and
//! `no`/`false`/`off` against the **verbatim** value (only the integer
//! fallthrough tolerates surrounding whitespace), then falls through to the
//! integer parse: non-zero → `true`, zero → `false`.

use crate::model::{ConfigFile, name_matches};

/// Per-lookup case-sensitivity toggles. All exact by default.
///
/// ```
/// use flatini::{ConfigFile, MatchOptions};
///
/// let file = ConfigFile::parse_str("demo.ini", "[Net]\nPort=8080\n")?;
/// let opts = MatchOptions::new().ignore_section_case().ignore_item_case();
/// assert_eq!(file.get_int("net", "port", 0, opts), 8080);
/// # Ok::<(), flatini::IniError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Fold ASCII case when matching section names.
    pub section_case_insensitive: bool,
    /// Fold ASCII case when matching item names.
    pub item_case_insensitive: bool,
    /// Fold ASCII case when matching boolean keyword values.
    pub value_case_insensitive: bool,
}

impl MatchOptions {
    /// Exact matching on all three axes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_section_case(mut self) -> Self {
        self.section_case_insensitive = true;
        self
    }

    pub fn ignore_item_case(mut self) -> Self {
        self.item_case_insensitive = true;
        self
    }

    pub fn ignore_value_case(mut self) -> Self {
        self.value_case_insensitive = true;
        self
    }
}

impl ConfigFile {
    /// Value of the first matching item under the first matching section,
    /// or `None` if either lookup misses.
    pub fn get(&self, section: &str, item: &str, opts: MatchOptions) -> Option<&str> {
        self.section(section, opts.section_case_insensitive)?
            .item(item, opts.item_case_insensitive)
            .map(|i| i.value())
    }

    /// Like [`get`](ConfigFile::get), resolving a miss to `default`.
    pub fn get_or<'a>(
        &'a self,
        section: &str,
        item: &str,
        default: &'a str,
        opts: MatchOptions,
    ) -> &'a str {
        self.get(section, item, opts).unwrap_or(default)
    }

    /// Resolve and parse as a signed integer; `default` on miss or if the
    /// value is not a fully-consumed integer in any detected base.
    pub fn get_int(&self, section: &str, item: &str, default: i64, opts: MatchOptions) -> i64 {
        self.get(section, item, opts)
            .and_then(parse_int)
            .unwrap_or(default)
    }

    /// Resolve and interpret as a boolean; `default` on miss or if the value
    /// is neither a recognized keyword nor an integer.
    pub fn get_bool(&self, section: &str, item: &str, default: bool, opts: MatchOptions) -> bool {
        self.get(section, item, opts)
            .and_then(|value| parse_bool(value, opts.value_case_insensitive))
            .unwrap_or(default)
    }
}

/// `strtol(value, _, 0)` with the full-consumption check: optional sign,
/// base from prefix, at least one digit, nothing left over.
fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_ascii();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
    {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };
    // from_str_radix would accept a second sign here; strtol does not.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}

fn parse_bool(raw: &str, ignore_case: bool) -> Option<bool> {
    const TRUE_WORDS: [&str; 3] = ["yes", "true", "on"];
    const FALSE_WORDS: [&str; 3] = ["no", "false", "off"];

    if TRUE_WORDS.iter().any(|w| name_matches(raw, w, ignore_case)) {
        return Some(true);
    }
    if FALSE_WORDS.iter().any(|w| name_matches(raw, w, ignore_case)) {
        return Some(false);
    }
    parse_int(raw).map(|v| v != 0)
}
