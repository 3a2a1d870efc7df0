/// A forward-only view over the input tokens.
///
/// Tokens may be inspected via `peek` before committing to them; once consumed they are never revisited.
#[derive(Debug)]
pub(crate) struct TokenCursor<'t> {
    tokens: &'t [&'t str],
    position: usize,
}

impl<'t> TokenCursor<'t> {
    pub(crate) fn new(tokens: &'t [&'t str]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub(crate) fn has_more(&self) -> bool {
        self.position < self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'t str> {
        self.tokens.get(self.position).copied()
    }

    pub(crate) fn consume(&mut self) -> Option<&'t str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// The index of the next token.
    pub(crate) fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let mut cursor = TokenCursor::new(&[]);
        assert!(!cursor.has_more());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.consume(), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn consume() {
        let tokens = vec!["a", "--b", "c"];
        let mut cursor = TokenCursor::new(&tokens);

        assert_eq!(cursor.peek(), Some("a"));
        assert_eq!(cursor.peek(), Some("a"));
        assert_eq!(cursor.consume(), Some("a"));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.consume(), Some("--b"));
        assert!(cursor.has_more());
        assert_eq!(cursor.consume(), Some("c"));
        assert!(!cursor.has_more());
        assert_eq!(cursor.consume(), None);
        assert_eq!(cursor.position(), 3);
    }
}
