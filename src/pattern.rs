//! Regex-based scanning.
//!
//! Patterns are supplied per call as strings and compiled with the
//! [`PatternOptions`] fixed at cursor construction. Compilation failures
//! propagate as [`ScanError::Pattern`](crate::ScanError); they are the only
//! error path in the crate. Search misses follow the same policy as the
//! literal family: advance to the end of the text, report through the
//! return value.

use bitflags::bitflags;
use regex::{Regex, RegexBuilder};

use crate::cursor::Cursor;
use crate::error::ScanResult;

bitflags! {
    /// Matching options applied to every pattern compiled by a cursor.
    ///
    /// Configured once at construction via
    /// [`Cursor::with_options`](crate::Cursor::with_options) and mapped
    /// onto the engine's flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PatternOptions: u8 {
        /// Letters match regardless of case.
        const CASE_INSENSITIVE = 1;
        /// `^` and `$` match at line boundaries.
        const MULTI_LINE = 1 << 1;
        /// `.` also matches `\n`.
        const DOT_MATCHES_NEW_LINE = 1 << 2;
        /// Whitespace and `#` comments in the pattern are ignored.
        const IGNORE_WHITESPACE = 1 << 3;
    }
}

/// Lazy iterator of regex matches, tied to a mutably borrowed [`Cursor`].
///
/// Each `next` call finds the next match from the current offset and
/// advances the cursor to its end, so the cursor rests at the end of the
/// last match once the iterator is exhausted (or at the end of the text if
/// there was no match at all). Zero-length matches bump the cursor one char
/// so iteration terminates. Single-pass and non-restartable, like
/// [`Tokens`](crate::Tokens).
pub struct Matches<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    regex: Regex,
    yielded_any: bool,
    done: bool,
}

impl<'a> Iterator for Matches<'_, 'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        let text = self.cursor.text;
        let from = self.cursor.byte_at(self.cursor.offset);
        match self.regex.find_at(text, from) {
            Some(m) => {
                let end = self.cursor.char_index_of_byte(m.end());
                if m.is_empty() {
                    // No progress is possible past an empty match at the
                    // end of the text.
                    if end == self.cursor.len() {
                        self.done = true;
                    }
                    self.cursor.offset = (end + 1).min(self.cursor.len());
                } else {
                    self.cursor.offset = end;
                }
                self.yielded_any = true;
                Some(&text[m.start()..m.end()])
            }
            None => {
                self.done = true;
                if !self.yielded_any {
                    self.cursor.offset = self.cursor.len();
                }
                None
            }
        }
    }
}

impl<'a> Cursor<'a> {
    /// Compile `pattern` with this cursor's options.
    fn compile(&self, pattern: &str) -> ScanResult<Regex> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(self.options.contains(PatternOptions::CASE_INSENSITIVE))
            .multi_line(self.options.contains(PatternOptions::MULTI_LINE))
            .dot_matches_new_line(self.options.contains(PatternOptions::DOT_MATCHES_NEW_LINE))
            .ignore_whitespace(self.options.contains(PatternOptions::IGNORE_WHITESPACE))
            .build()?;
        Ok(regex)
    }

    /// Consume a match of `pattern` anchored at the current offset.
    ///
    /// Advances past the match and returns `true` when the pattern matches
    /// starting exactly here; otherwise leaves the cursor in place and
    /// returns `false`, like a failed
    /// [`matches_current`](Self::matches_current).
    pub fn skip_matching(&mut self, pattern: &str) -> ScanResult<bool> {
        let regex = self.compile(pattern)?;
        let from = self.byte_at(self.offset);
        match regex.find_at(self.text, from) {
            Some(m) if m.start() == from => {
                self.offset = self.char_index_of_byte(m.end());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Advance to the next match of `pattern`.
    ///
    /// On success the cursor stops at the start of the match, or just past
    /// it when `include_match` is set. Otherwise the cursor advances to the
    /// end of the text and `false` is returned.
    pub fn skip_to_matching(&mut self, pattern: &str, include_match: bool) -> ScanResult<bool> {
        let regex = self.compile(pattern)?;
        let from = self.byte_at(self.offset);
        match regex.find_at(self.text, from) {
            Some(m) => {
                let at = if include_match { m.end() } else { m.start() };
                self.offset = self.char_index_of_byte(at);
                Ok(true)
            }
            None => {
                self.offset = self.len();
                Ok(false)
            }
        }
    }

    /// Like [`skip_to_matching`](Self::skip_to_matching) without consuming
    /// the match, returning the traversed slice (the full remainder when
    /// nothing matched).
    pub fn parse_to_matching(&mut self, pattern: &str) -> ScanResult<&'a str> {
        let start = self.offset;
        self.skip_to_matching(pattern, false)?;
        Ok(self.extract(start, self.offset))
    }

    /// Parse the next match of `pattern` as a token.
    ///
    /// Advances past the match and returns it. When no match remains the
    /// cursor advances to the end of the text and an empty slice is
    /// returned.
    pub fn parse_token_matching(&mut self, pattern: &str) -> ScanResult<&'a str> {
        let regex = self.compile(pattern)?;
        let text = self.text;
        let from = self.byte_at(self.offset);
        match regex.find_at(text, from) {
            Some(m) => {
                self.offset = self.char_index_of_byte(m.end());
                Ok(&text[m.start()..m.end()])
            }
            None => {
                self.offset = self.len();
                Ok("")
            }
        }
    }

    /// Lazily parse every remaining match of `pattern` in order.
    ///
    /// See [`Matches`] for cursor-advancement semantics.
    pub fn parse_all_matching<'c>(&'c mut self, pattern: &str) -> ScanResult<Matches<'c, 'a>> {
        let regex = self.compile(pattern)?;
        Ok(Matches {
            cursor: self,
            regex,
            yielded_any: false,
            done: false,
        })
    }
}
