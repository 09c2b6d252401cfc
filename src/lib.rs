//! Minimal flat INI-style configuration reader. Parse a file once, then ask
//! typed questions about it.
//!
//! ```no_run
//! use flatini::{ConfigFile, MatchOptions};
//!
//! let file = ConfigFile::parse("/etc/app/app.ini")?;
//! let port = file.get_int("net", "port", 8080, MatchOptions::new());
//! let debug = file.get_bool("core", "debug", false, MatchOptions::new());
//! # Ok::<(), flatini::IniError>(())
//! ```
//!
//! # The format
//!
//! One entry per physical line, leading/trailing whitespace insignificant,
//! blank lines ignored:
//!
//! ```text
//! # comment lines start with '#'
//! [section-name]
//! key = value
//! key2=value2
//! ```
//!
//! A line is a comment, a `[section]` header, or a `key=value` pair —
//! nothing else. A pair before any header, or a pair with no `=`, is a hard
//! parse error carrying the path and 1-based line number. Keys and values
//! are taken literally: nothing is unescaped, and the split at the first `=`
//! does not re-trim, so `key = value` stores key `"key "` and value
//! `" value"`. Empty values (`key=`) are legal.
//!
//! # Lookup semantics
//!
//! Resolution is flat `section → key → value`, first-match in file order:
//! the first section whose name matches, then the first item within it.
//! Duplicate names are allowed and simply shadowed for reads. Matching is
//! exact byte comparison unless loosened per axis through [`MatchOptions`]
//! — section names, item names, and boolean keyword values each have their
//! own independent toggle.
//!
//! Lookups are best-effort by design. A missing section, a missing key, or
//! a value that fails coercion is never an error:
//! [`get_or`](ConfigFile::get_or), [`get_int`](ConfigFile::get_int), and
//! [`get_bool`](ConfigFile::get_bool) fall back to the caller-supplied
//! default, and [`get`](ConfigFile::get) returns `Option`. Only `parse`
//! itself can fail, and it is all-or-nothing: on any structural or I/O
//! error you get an [`IniError`] and no partially parsed file.
//!
//! # Typed coercion
//!
//! Integers use C `strtol`-style base detection — decimal, `0x` hex, and
//! leading-`0` octal — and the whole trimmed value must parse (`"12abc"` is
//! a coercion failure, not `12`). Booleans accept `yes`/`true`/`on` and
//! `no`/`false`/`off`, falling through to the integer rules where non-zero
//! is `true`.
//!
//! The parsed tree is immutable and the accessors take `&self`, so a built
//! [`ConfigFile`] can be shared across threads for concurrent reads.

pub mod error;

mod lookup;
mod model;
mod parse;

pub use error::IniError;
pub use lookup::MatchOptions;
pub use model::{ConfigFile, Item, Section};
