//! lazy tokenizer for card-image input

/// The character that closes a record early. Everything after it on the
/// same line is commentary.
pub const DELIMITER: char = '/';

/// One field's worth of text, along with the 1-origin line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'i> {
    pub text: &'i str,
    pub line: usize,
}

impl<'i> Token<'i> {
    pub fn is_delimiter(&self) -> bool {
        self.text
            .len()
            == DELIMITER.len_utf8()
            && self
                .text
                .starts_with(DELIMITER)
    }
}

/// Yields whitespace-separated tokens on demand, counting lines as it
/// goes. The delimiter always forms a token of its own, even when
/// written hard up against the preceding field (so "0/" yields "0" and
/// then "/").
#[derive(Debug)]
pub struct TokenSource<'i> {
    source: &'i str,
    scanned: usize,
    line: usize,
    pending: Option<Token<'i>>,
}

impl<'i> TokenSource<'i> {
    pub fn new(content: &'i str) -> TokenSource<'i> {
        TokenSource {
            source: content,
            scanned: 1,
            line: 1,
            pending: None,
        }
    }

    /// The line of the most recently consumed token. Lookahead via
    /// peek() does not move this.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn peek(&mut self) -> Option<&Token<'i>> {
        if self
            .pending
            .is_none()
        {
            self.pending = self.scan();
        }
        self.pending
            .as_ref()
    }

    pub fn next(&mut self) -> Option<Token<'i>> {
        let token = match self
            .pending
            .take()
        {
            Some(token) => Some(token),
            None => self.scan(),
        };
        if let Some(token) = &token {
            self.line = token.line;
        }
        token
    }

    fn scan(&mut self) -> Option<Token<'i>> {
        // skip leading whitespace, counting line breaks crossed
        let mut start = None;
        for (i, c) in self
            .source
            .char_indices()
        {
            if c == '\n' {
                self.scanned += 1;
            } else if !c.is_whitespace() {
                start = Some(i);
                break;
            }
        }

        let start = match start {
            Some(i) => i,
            None => {
                self.source = "";
                return None;
            }
        };

        let rest = &self.source[start..];
        let width = if rest.starts_with(DELIMITER) {
            DELIMITER.len_utf8()
        } else {
            rest.find(|c: char| c.is_whitespace() || c == DELIMITER)
                .unwrap_or(rest.len())
        };

        let token = Token {
            text: &rest[..width],
            line: self.scanned,
        };
        self.source = &rest[width..];
        Some(token)
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn splitting_and_line_numbers() {
        let mut tokens = TokenSource::new(" 20 21 22\n 9228 2\n");

        assert_eq!(
            tokens.next(),
            Some(Token {
                text: "20",
                line: 1
            })
        );
        assert_eq!(
            tokens.next(),
            Some(Token {
                text: "21",
                line: 1
            })
        );
        assert_eq!(
            tokens.next(),
            Some(Token {
                text: "22",
                line: 1
            })
        );
        assert_eq!(
            tokens.next(),
            Some(Token {
                text: "9228",
                line: 2
            })
        );
        assert_eq!(tokens.line(), 2);
        assert_eq!(
            tokens.next(),
            Some(Token {
                text: "2",
                line: 2
            })
        );
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn delimiter_splits_from_adjacent_field() {
        let mut tokens = TokenSource::new(" 0/\n");

        assert_eq!(
            tokens.next(),
            Some(Token {
                text: "0",
                line: 1
            })
        );

        let slash = tokens
            .next()
            .unwrap();
        assert!(slash.is_delimiter());
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn peeking_is_not_consumption() {
        let mut tokens = TokenSource::new("300 1200");

        assert_eq!(
            tokens
                .peek()
                .map(|token| token.text),
            Some("300")
        );
        assert_eq!(tokens.line(), 1);
        assert_eq!(
            tokens
                .next()
                .map(|token| token.text),
            Some("300")
        );
        assert_eq!(
            tokens
                .next()
                .map(|token| token.text),
            Some("1200")
        );
    }

    #[test]
    fn blank_lines_are_counted() {
        let mut tokens = TokenSource::new("\n\n 825\n");

        assert_eq!(
            tokens.next(),
            Some(Token {
                text: "825",
                line: 3
            })
        );
    }
}
