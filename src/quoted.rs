//! Quoted-text scanning with configurable escape semantics.
//!
//! The char at the cursor, whatever it is, is consumed as the quote and
//! becomes the terminator for the call. Escapes are resolved while
//! scanning, so the result is an owned `String` rather than a slice.
//!
//! There is no malformed-quote error: an unterminated run consumes to the
//! end of the text and returns everything found.

use crate::cursor::Cursor;

/// How a quote character is escaped inside a quoted run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuoteEscape {
    /// No escaping; the next quote closes the run.
    None,
    /// Two consecutive quotes are one literal quote (`"say ""hi"""`).
    #[default]
    Doubled,
    /// A designated escape char before a quote makes it literal
    /// (`"say \"hi\""` with `Char('\\')`). Before anything else the escape
    /// char is itself literal. An escape char equal to the quote degrades
    /// to [`Doubled`].
    Char(char),
}

/// Options for [`Cursor::parse_quoted_with`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QuoteOptions {
    /// Escape handling; defaults to [`QuoteEscape::Doubled`].
    pub escape: QuoteEscape,
    /// Keep the escape char in front of escaped quotes in the result.
    pub include_escape_char: bool,
    /// Wrap the result in the opening quote and, if the run actually
    /// closed, a closing quote.
    pub include_quotes: bool,
}

impl<'a> Cursor<'a> {
    /// Parse a quoted run with doubled-quote escaping.
    ///
    /// Equivalent to [`parse_quoted_with`](Self::parse_quoted_with) with
    /// default [`QuoteOptions`].
    pub fn parse_quoted(&mut self) -> String {
        self.parse_quoted_with(QuoteOptions::default())
    }

    /// Parse a quoted run starting at the current offset.
    ///
    /// Consumes the char at the cursor as the quote, scans to the matching
    /// close under the configured escape mode, and leaves the cursor just
    /// past the closing quote. An unterminated run consumes to the end of
    /// the text and returns the remainder. On an already-exhausted cursor
    /// this returns an empty string and leaves the offset unchanged.
    pub fn parse_quoted_with(&mut self, options: QuoteOptions) -> String {
        if self.at_end() {
            return String::new();
        }
        let quote = self.parse_char();
        let mut result = String::new();
        let closed = match options.escape {
            QuoteEscape::None => self.scan_unescaped(quote, &mut result),
            QuoteEscape::Doubled => self.scan_doubled(quote, &mut result),
            QuoteEscape::Char(escape) if escape == quote => self.scan_doubled(quote, &mut result),
            QuoteEscape::Char(escape) => {
                self.scan_escaped(quote, escape, options.include_escape_char, &mut result)
            }
        };
        if options.include_quotes {
            result.insert(0, quote);
            if closed {
                result.push(quote);
            }
        }
        result
    }

    /// Scan to the next `quote` with no escape handling.
    fn scan_unescaped(&mut self, quote: char, result: &mut String) -> bool {
        result.push_str(self.parse_while(|c| c != quote));
        if self.at_end() {
            false
        } else {
            self.advance();
            true
        }
    }

    /// Scan with doubled-quote escaping: a quote pair is one literal quote,
    /// a lone quote closes the run.
    fn scan_doubled(&mut self, quote: char, result: &mut String) -> bool {
        loop {
            result.push_str(self.parse_while(|c| c != quote));
            if self.at_end() {
                return false;
            }
            self.advance();
            if self.peek() == quote {
                result.push(quote);
                self.advance();
            } else {
                return true;
            }
        }
    }

    /// Scan with a custom escape char. The escape only escapes a following
    /// quote; before anything else it is literal.
    fn scan_escaped(
        &mut self,
        quote: char,
        escape: char,
        keep_escape: bool,
        result: &mut String,
    ) -> bool {
        loop {
            result.push_str(self.parse_while(|c| c != quote && c != escape));
            if self.at_end() {
                return false;
            }
            if self.parse_char() == escape {
                if self.peek() == quote {
                    if keep_escape {
                        result.push(escape);
                    }
                    result.push(quote);
                    self.advance();
                } else {
                    result.push(escape);
                }
            } else {
                return true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_first_quote(text: &str) -> Cursor<'_> {
        let mut cursor = Cursor::from(text);
        cursor.skip_to_set("\"");
        cursor
    }

    #[test]
    fn simple_quoted_run() {
        let mut cursor = at_first_quote(r#"He said, "Yes.""#);
        assert_eq!(cursor.parse_quoted(), "Yes.");
        assert!(cursor.at_end());
    }

    #[test]
    fn doubled_quote_escaping() {
        let mut cursor = at_first_quote(r#""I said, ""Yes""."#);
        assert_eq!(cursor.parse_quoted(), r#"I said, "Yes"."#);
        assert!(cursor.at_end());
    }

    #[test]
    fn unterminated_run_consumes_to_end() {
        let mut cursor = at_first_quote(r#""abc"#);
        assert_eq!(cursor.parse_quoted(), "abc");
        assert!(cursor.at_end());
    }

    #[test]
    fn cursor_stops_after_closing_quote() {
        let mut cursor = at_first_quote(r#""a" b"#);
        assert_eq!(cursor.parse_quoted(), "a");
        assert_eq!(cursor.peek(), ' ');
    }

    #[test]
    fn exhausted_cursor_is_a_no_op() {
        let mut cursor = Cursor::from("ab");
        cursor.advance_by(2);
        assert_eq!(cursor.parse_quoted(), "");
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn empty_quoted_run() {
        let mut cursor = at_first_quote(r#""" x"#);
        assert_eq!(cursor.parse_quoted(), "");
        assert_eq!(cursor.peek(), ' ');
    }

    #[test]
    fn any_char_acts_as_quote() {
        let mut cursor = Cursor::from("'single' rest");
        assert_eq!(cursor.parse_quoted(), "single");
        assert_eq!(cursor.peek(), ' ');

        let mut cursor = Cursor::from("|pipes|");
        assert_eq!(cursor.parse_quoted(), "pipes");
        assert!(cursor.at_end());
    }

    #[test]
    fn no_escape_mode_closes_on_first_quote() {
        let options = QuoteOptions {
            escape: QuoteEscape::None,
            ..QuoteOptions::default()
        };
        let mut cursor = at_first_quote(r#""a""b""#);
        assert_eq!(cursor.parse_quoted_with(options), "a");
        assert_eq!(cursor.peek(), '"');
    }

    #[test]
    fn custom_escape_char() {
        let options = QuoteOptions {
            escape: QuoteEscape::Char('\\'),
            ..QuoteOptions::default()
        };
        let mut cursor = at_first_quote(r#""say \"hi\" now" rest"#);
        assert_eq!(cursor.parse_quoted_with(options), r#"say "hi" now"#);
        assert_eq!(cursor.peek(), ' ');
    }

    #[test]
    fn custom_escape_keeps_escape_char_when_asked() {
        let options = QuoteOptions {
            escape: QuoteEscape::Char('\\'),
            include_escape_char: true,
            ..QuoteOptions::default()
        };
        let mut cursor = at_first_quote(r#""say \"hi\"""#);
        assert_eq!(cursor.parse_quoted_with(options), r#"say \"hi\""#);
        assert!(cursor.at_end());
    }

    #[test]
    fn custom_escape_before_non_quote_is_literal() {
        let options = QuoteOptions {
            escape: QuoteEscape::Char('\\'),
            ..QuoteOptions::default()
        };
        let mut cursor = at_first_quote(r#""a\nb" rest"#);
        // \ does not escape n, so both stay in the result.
        assert_eq!(cursor.parse_quoted_with(options), r"a\nb");
        assert_eq!(cursor.peek(), ' ');
    }

    #[test]
    fn custom_escape_equal_to_quote_degrades_to_doubled() {
        let options = QuoteOptions {
            escape: QuoteEscape::Char('"'),
            ..QuoteOptions::default()
        };
        let mut cursor = at_first_quote(r#""a""b" rest"#);
        assert_eq!(cursor.parse_quoted_with(options), r#"a"b"#);
        assert_eq!(cursor.peek(), ' ');
    }

    #[test]
    fn include_quotes_wraps_result() {
        let options = QuoteOptions {
            include_quotes: true,
            ..QuoteOptions::default()
        };
        let mut cursor = at_first_quote(r#""abc" rest"#);
        assert_eq!(cursor.parse_quoted_with(options), r#""abc""#);
    }

    #[test]
    fn include_quotes_omits_close_when_unterminated() {
        let options = QuoteOptions {
            include_quotes: true,
            ..QuoteOptions::default()
        };
        let mut cursor = at_first_quote(r#""abc"#);
        assert_eq!(cursor.parse_quoted_with(options), r#""abc"#);
    }

    #[test]
    fn unterminated_after_doubled_pair() {
        let mut cursor = at_first_quote(r#""a""b"#);
        assert_eq!(cursor.parse_quoted(), r#"a"b"#);
        assert!(cursor.at_end());
    }
}
