//! Token parsing over delimiter sets and predicates.
//!
//! A token is a maximal run of non-delimiter chars. [`Cursor::parse_token`]
//! extracts one; [`Cursor::parse_tokens`] yields them lazily, advancing the
//! owning cursor as a side effect of iteration.

use crate::cursor::Cursor;

/// Lazy iterator of tokens, tied to a mutably borrowed [`Cursor`].
///
/// Each `next` call skips delimiters and parses one token, mutating the
/// owning cursor. The sequence is a single forward pass: it is restartable
/// only by repositioning the cursor and creating a new iterator, and
/// interleaving manual cursor mutation with consumption produces
/// unspecified token boundaries (a usage error, never a crash). Bound the
/// number of tokens with [`Iterator::take`].
pub struct Tokens<'c, 'a, P> {
    cursor: &'c mut Cursor<'a>,
    delimiter: P,
}

impl<'a, P: Fn(char) -> bool> Iterator for Tokens<'_, 'a, P> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.cursor.skip_while(&self.delimiter);
        if self.cursor.at_end() {
            return None;
        }
        Some(self.cursor.parse_while(|c| !(self.delimiter)(c)))
    }
}

impl<'a> Cursor<'a> {
    /// Parse one token delimited by any char in `delimiters`.
    ///
    /// Skips leading delimiters, then parses and returns the run of
    /// non-delimiter chars. Returns an empty slice at the end of the text.
    pub fn parse_token(&mut self, delimiters: &str) -> &'a str {
        self.parse_token_where(|c| delimiters.contains(c))
    }

    /// Parse one token whose delimiters are defined by a predicate.
    pub fn parse_token_where(&mut self, delimiter: impl Fn(char) -> bool) -> &'a str {
        self.skip_while(&delimiter);
        self.parse_while(|c| !delimiter(c))
    }

    /// Lazily parse tokens delimited by any char in `delimiters`.
    ///
    /// The iterator stops at the end of the text; consuming it advances
    /// this cursor. See [`Tokens`] for the single-pass caveats.
    pub fn parse_tokens<'c>(
        &'c mut self,
        delimiters: &str,
    ) -> Tokens<'c, 'a, impl Fn(char) -> bool> {
        let set = delimiters.to_owned();
        Tokens {
            cursor: self,
            delimiter: move |c| set.contains(c),
        }
    }

    /// Lazily parse tokens whose delimiters are defined by a predicate.
    pub fn parse_tokens_where<'c, P: Fn(char) -> bool>(
        &'c mut self,
        delimiter: P,
    ) -> Tokens<'c, 'a, P> {
        Tokens {
            cursor: self,
            delimiter,
        }
    }
}
