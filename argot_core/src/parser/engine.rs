#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::error::ParseError;
use crate::model::Kind;
use crate::parser::{LevelResults, TokenCursor};
use crate::schema::{ArgumentEntry, Schema};

/// The qualifying prefix for the names of a parser level (ex: `cmd1 `).
#[derive(Debug, Clone, Default)]
struct LevelPath {
    prefix: String,
}

impl LevelPath {
    fn qualify(&self, name: &str) -> String {
        format!("{}{name}", self.prefix)
    }

    fn descend(&self, command: &str, dictionary: &Dictionary) -> Self {
        Self {
            prefix: format!("{}{command}{}", self.prefix, dictionary.path_separator()),
        }
    }
}

/// The parsing state machine.
///
/// Parsing happens in two phases:
/// 0. The exclusive short-circuit: when the tokens consist of (an optional path of sub-commands followed by) precisely one exclusive argument,
/// that argument is recorded and nothing else is processed.
/// 1. The regular recursive descent, level by level: by-name arguments, then either positionals or the sub-command.
///
/// Every value flows through `append`, which enforces the cardinality, the allowed values, and the value handler before recording.
pub(crate) struct Engine<'p, 's, S> {
    dictionary: &'p Dictionary,
    storage: &'s mut S,
}

impl<'p, 's, S> Engine<'p, 's, S> {
    pub(crate) fn new(dictionary: &'p Dictionary, storage: &'s mut S) -> Self {
        Self {
            dictionary,
            storage,
        }
    }

    pub(crate) fn parse(
        &mut self,
        schema: &Schema<S>,
        tokens: &[&str],
    ) -> Result<LevelResults, ParseError> {
        let root = LevelPath::default();

        if let Some(results) = self.short_circuit(schema, tokens, &root)? {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Exclusive argument short-circuits the parse: {tokens:?}.");
            }

            return Ok(results);
        }

        let mut cursor = TokenCursor::new(tokens);
        let mut results = LevelResults::default();
        self.parse_level(schema, &mut cursor, &mut results, &root)?;
        debug_assert!(!cursor.has_more());
        Ok(results)
    }

    fn short_circuit(
        &mut self,
        schema: &Schema<S>,
        tokens: &[&str],
        path: &LevelPath,
    ) -> Result<Option<LevelResults>, ParseError> {
        let dictionary = self.dictionary;

        match tokens {
            [token] => match schema.lookup(token, dictionary) {
                Some((index, entry)) if entry.kind() == Kind::Exclusive => {
                    let mut level = LevelResults::default();
                    self.append(entry, index, &mut level, dictionary.true_literal(), path)?;
                    Ok(Some(level))
                }
                _ => Ok(None),
            },
            [head, rest @ ..] => match schema.selector().zip(schema.subcommand(head, dictionary)) {
                Some(((selector_index, _), (command, child))) => {
                    let child_path = path.descend(command, dictionary);
                    let child_level = self.short_circuit(child, rest, &child_path)?;
                    Ok(child_level.map(|child_level| {
                        // Record the path, so the caller knows which level the exclusive argument belongs to.
                        let mut level = LevelResults::default();
                        level.push(selector_index, command);
                        level.attach(command, child_level);
                        level
                    }))
                }
                // Silently falls through to the regular parse.
                None => Ok(None),
            },
            [] => Ok(None),
        }
    }

    fn parse_level(
        &mut self,
        schema: &Schema<S>,
        cursor: &mut TokenCursor<'_>,
        level: &mut LevelResults,
        path: &LevelPath,
    ) -> Result<(), ParseError> {
        let dictionary = self.dictionary;

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Parsing level '{}' from token {}.",
                path.prefix,
                cursor.position()
            );
        }

        self.scan_named(schema, cursor, level, path)?;

        match schema.selector() {
            Some((selector_index, selector)) => {
                // All further tokens belong to the sub-command, so this level is complete before descending.
                self.complete_level(schema, level, path, Some(selector_index))?;
                let offset = cursor.position();
                let token = cursor
                    .consume()
                    .ok_or_else(|| ParseError::SubparserNameMissing {
                        name: path.qualify(selector.name()),
                    })?;
                let (command, child) = schema.subcommand(token, dictionary).ok_or_else(|| {
                    ParseError::SubparserNotFound {
                        name: path.qualify(selector.name()),
                        value: token.to_string(),
                        offset,
                    }
                })?;
                self.append(selector, selector_index, level, command, path)?;

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Descending into sub-command '{command}'.");
                }

                let child_path = path.descend(command, dictionary);
                self.parse_level(child, cursor, level.select(command), &child_path)
            }
            None => {
                self.consume_positionals(schema, cursor, level, path)?;
                self.complete_level(schema, level, path, None)
            }
        }
    }

    /// Match the leading by-name arguments, stopping at the first token which isn't one.
    fn scan_named(
        &mut self,
        schema: &Schema<S>,
        cursor: &mut TokenCursor<'_>,
        level: &mut LevelResults,
        path: &LevelPath,
    ) -> Result<(), ParseError> {
        let dictionary = self.dictionary;

        while let Some(token) = cursor.peek() {
            let offset = cursor.position();

            if let Some((name, value)) = dictionary.split_value(token) {
                match schema.lookup(name, dictionary) {
                    Some((index, entry)) if entry.kind() == Kind::Valued => {
                        cursor.consume();
                        self.append(entry, index, level, value, path)?;
                        continue;
                    }
                    Some((_, entry)) if matches!(entry.kind(), Kind::Switch | Kind::Exclusive) => {
                        return Err(ParseError::UnexpectedValue {
                            name: path.qualify(entry.name()),
                            value: value.to_string(),
                        });
                    }
                    // Names never contain the separator, so the whole token cannot match either.
                    _ => break,
                }
            }

            match schema.lookup(token, dictionary) {
                Some((index, entry)) => match entry.kind() {
                    Kind::Switch => {
                        cursor.consume();
                        self.append(entry, index, level, dictionary.true_literal(), path)?;
                    }
                    Kind::Valued => {
                        cursor.consume();
                        let value = cursor.consume().ok_or_else(|| ParseError::ValueMissing {
                            name: path.qualify(entry.name()),
                        })?;
                        self.append(entry, index, level, value, path)?;
                    }
                    // Exclusive arguments only apply alone, via the short-circuit.
                    Kind::Exclusive => {
                        return Err(ParseError::SyntaxError {
                            token: token.to_string(),
                            offset,
                        });
                    }
                    Kind::Positional | Kind::SubcommandSelector => break,
                },
                None => break,
            }
        }

        Ok(())
    }

    /// Feed the remaining tokens to the positionals, in registration order.
    fn consume_positionals(
        &mut self,
        schema: &Schema<S>,
        cursor: &mut TokenCursor<'_>,
        level: &mut LevelResults,
        path: &LevelPath,
    ) -> Result<(), ParseError> {
        let dictionary = self.dictionary;

        for (index, entry) in schema.positionals() {
            while entry.bound().is_open(level.count(index)) {
                let token = match cursor.peek() {
                    Some(token) => token,
                    None => break,
                };

                // Exclusive arguments cannot be combined, wherever they occur.
                match schema.lookup(token, dictionary) {
                    Some((_, named)) if named.kind() == Kind::Exclusive => {
                        return Err(ParseError::SyntaxError {
                            token: token.to_string(),
                            offset: cursor.position(),
                        });
                    }
                    _ => {}
                }

                cursor.consume();
                self.append(entry, index, level, token, path)?;
            }
        }

        match cursor.peek() {
            Some(token) => Err(ParseError::SyntaxError {
                token: token.to_string(),
                offset: cursor.position(),
            }),
            None => Ok(()),
        }
    }

    /// Inject defaults, then check the minimum occurrences, for every entry of the level (except `skip`).
    fn complete_level(
        &mut self,
        schema: &Schema<S>,
        level: &mut LevelResults,
        path: &LevelPath,
        skip: Option<usize>,
    ) -> Result<(), ParseError> {
        for (index, entry) in schema.entries() {
            if Some(index) == skip || level.count(index) > 0 || entry.defaults().is_empty() {
                continue;
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Injecting defaults {:?} for '{}'.",
                    entry.defaults(),
                    path.qualify(entry.name())
                );
            }

            for value in entry.defaults() {
                self.append(entry, index, level, value, path)?;
            }
        }

        for (index, entry) in schema.entries() {
            let provided = level.count(index);
            let expected = entry.bound().min();

            if Some(index) != skip && provided < expected {
                return Err(ParseError::RequiredArgumentMissing {
                    name: path.qualify(entry.name()),
                    provided,
                    expected,
                });
            }
        }

        Ok(())
    }

    fn append(
        &mut self,
        entry: &ArgumentEntry<S>,
        index: usize,
        level: &mut LevelResults,
        value: &str,
        path: &LevelPath,
    ) -> Result<(), ParseError> {
        let provided = level.count(index);

        if !entry.bound().is_open(provided) {
            return Err(ParseError::TooManyOccurrences {
                name: path.qualify(entry.name()),
                max: entry.bound().max().unwrap_or(provided),
            });
        }

        if !entry.is_allowed(value) {
            return Err(ParseError::ValueNotAllowed {
                name: path.qualify(entry.name()),
                value: value.to_string(),
            });
        }

        if let Some(handler) = entry.handler() {
            handler
                .handle(value, self.dictionary, self.storage)
                .map_err(|source| ParseError::ConversionFailed {
                    name: path.qualify(entry.name()),
                    value: value.to_string(),
                    source,
                })?;
        }

        level.push(index, value);
        Ok(())
    }
}
