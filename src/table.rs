//! The ordered argument table built from a raw command line, and flag lookup.

use crate::tokenizer;
use std::ops::Range;
use std::str;

/// Ordered sequence of argument tokens parsed from one raw command line.
///
/// The table owns a duplicate of the raw line and a list of byte ranges into
/// it, one per token; tokens are handed out as `&str` views, no per-token copy
/// is made. It is built once during bootstrap and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct ArgumentTable {
    /// Owned duplicate of the raw line; the extract pass compacts token
    /// content in place.
    storage: Box<[u8]>,
    /// Byte range of each token within `storage`, in order of appearance.
    spans: Vec<Range<usize>>,
}

/// A successful flag lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentMatch<'a> {
    /// The token immediately following the matched flag, captured only when it
    /// exists and does not itself look like a flag (begin with `-`).
    pub value: Option<&'a str>,
}

impl ArgumentTable {
    /// Builds the table from the raw command line supplied by the OS.
    ///
    /// The line is duplicated into an owned buffer first, because the
    /// tokenizer mutates its input and the caller's string must stay intact.
    /// A count-only pass then sizes the token list exactly, and the extract
    /// pass fills it; neither allocation grows afterwards.
    ///
    /// # Arguments
    /// * `raw` - The full process command line, excluding the program path.
    ///
    /// # Returns
    /// The populated table. Parsing cannot fail (malformed quoting degrades to
    /// fixed tie-breaks); running out of memory for the two allocations aborts
    /// the process, which is the only acceptable outcome during bootstrap.
    pub fn parse(raw: &str) -> Self {
        let mut storage = raw.as_bytes().to_vec();
        let expected = tokenizer::scan(&mut storage, None);
        let mut spans = Vec::with_capacity(expected);
        let produced = tokenizer::scan(&mut storage, Some(&mut spans));
        debug_assert_eq!(expected, produced);
        Self {
            storage: storage.into_boxed_slice(),
            spans,
        }
    }

    /// Number of tokens in the table.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True when the command line held no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the token at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&str> {
        let span = self.spans.get(index)?.clone();
        str::from_utf8(&self.storage[span]).ok()
    }

    /// Iterates over the tokens in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        (0..self.len()).filter_map(|index| self.get(index))
    }

    /// Looks up `name` in the table.
    ///
    /// Scans in order and stops at the first exact, case-sensitive,
    /// full-string match; later occurrences of the same flag are ignored. On a
    /// match, the immediately following token is captured as the flag's value
    /// unless it begins with `-` (then it is another flag, not a value).
    ///
    /// Pure read over the table: repeated lookups always return the same
    /// result.
    pub fn find_argument(&self, name: &str) -> Option<ArgumentMatch<'_>> {
        for index in 0..self.len() {
            if self.get(index) != Some(name) {
                continue;
            }
            let value = self.get(index + 1).filter(|next| !next.starts_with('-'));
            return Some(ArgumentMatch { value });
        }
        None
    }

    /// True when `name` appears in the table (presence-only lookup).
    pub fn has_flag(&self, name: &str) -> bool {
        self.find_argument(name).is_some()
    }

    /// The value captured for `name`, if the flag is present and followed by
    /// one.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.find_argument(name)?.value
    }
}
