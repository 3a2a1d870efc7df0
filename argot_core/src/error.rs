use thiserror::Error;

use crate::api::ConversionError;

/// An error in the configuration of the command line parser.
///
/// Configuration errors are raised while registering arguments, never while parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An argument was registered without any names.
    #[error("Config error: an argument requires at least one name.")]
    NoNames,

    /// A name is empty, contains whitespace, or contains one of the dictionary separators.
    #[error("Config error: invalid name '{name}': {reason}.")]
    InvalidName {
        /// The offending name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// The name is already registered at this parser level.
    #[error("Config error: cannot duplicate the name '{0}'.")]
    DuplicateName(String),

    /// A positional argument cannot share a level with a sub-command selector.
    #[error("Config error: cannot add the positional '{0}' alongside sub-commands.")]
    PositionalWithSubcommands(String),

    /// A sub-command selector cannot share a level with positional arguments.
    #[error("Config error: cannot add the sub-command selector '{0}' alongside positionals.")]
    SubcommandsWithPositional(String),

    /// A level may have at most one sub-command selector.
    #[error("Config error: cannot add the sub-command selector '{0}'; one already exists.")]
    DuplicateSelector(String),

    /// The sub-command is already registered on the selector.
    #[error("Config error: cannot duplicate the sub-command '{0}'.")]
    DuplicateSubcommand(String),

    /// The requested cardinality has a minimum above its maximum.
    #[error("Config error: invalid cardinality for '{name}' (min={min}, max={max}).")]
    InvalidCardinality {
        /// The argument being configured.
        name: String,
        /// The requested minimum.
        min: usize,
        /// The requested maximum.
        max: usize,
    },

    /// The dictionary literals cannot be used to parse.
    #[error("Config error: invalid dictionary: {0}.")]
    InvalidDictionary(&'static str),
}

/// The kind of a [`ParseError`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A value handler rejected a value.
    ConversionFailed,
    /// An argument occurred more often than its maximum.
    TooManyOccurrences,
    /// A token could not be matched to any argument.
    SyntaxError,
    /// A valued argument was the final token.
    ValueMissing,
    /// A `name=value` token named an argument which does not take a value.
    UnexpectedValue,
    /// An argument occurred less often than its minimum.
    RequiredArgumentMissing,
    /// The tokens ended before a sub-command was named.
    SubparserNameMissing,
    /// The named sub-command does not exist.
    SubparserNotFound,
    /// A value is not amongst the allowed values of its argument.
    ValueNotAllowed,
}

/// An error in the input tokens, raised while parsing.
///
/// The first error encountered aborts the whole parse.
/// Argument names of nested sub-commands are qualified by their sub-command path (ex: `cmd1 --switch`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A value handler rejected a value.
    #[error("Parse error: cannot accept '{value}' for '{name}': {source}")]
    ConversionFailed {
        /// The argument.
        name: String,
        /// The raw value.
        value: String,
        /// The error raised by the value handler.
        #[source]
        source: ConversionError,
    },

    /// An argument occurred more often than its maximum.
    #[error("Parse error: too many occurrences of '{name}' (maximum={max}).")]
    TooManyOccurrences {
        /// The argument.
        name: String,
        /// The maximum number of occurrences.
        max: usize,
    },

    /// A token could not be matched to any argument.
    #[error("Parse error: unexpected token '{token}' at position {offset}.")]
    SyntaxError {
        /// The unmatched token.
        token: String,
        /// The index of the token in the input.
        offset: usize,
    },

    /// A valued argument was the final token.
    #[error("Parse error: no value provided for '{name}'.")]
    ValueMissing {
        /// The argument.
        name: String,
    },

    /// A `name=value` token named an argument which does not take a value.
    #[error("Parse error: '{name}' does not take a value (provided '{value}').")]
    UnexpectedValue {
        /// The argument.
        name: String,
        /// The value provided after the separator.
        value: String,
    },

    /// An argument occurred less often than its minimum.
    #[error("Parse error: not enough values provided to '{name}' (provided={provided}, expected={expected}).")]
    RequiredArgumentMissing {
        /// The argument.
        name: String,
        /// The number of values matched, including defaults.
        provided: usize,
        /// The minimum number of values.
        expected: usize,
    },

    /// The tokens ended before a sub-command was named.
    #[error("Parse error: no sub-command provided to '{name}'.")]
    SubparserNameMissing {
        /// The sub-command selector.
        name: String,
    },

    /// The named sub-command does not exist.
    #[error("Parse error: unknown sub-command '{value}' for '{name}'.")]
    SubparserNotFound {
        /// The sub-command selector.
        name: String,
        /// The token naming the sub-command.
        value: String,
        /// The index of the token in the input.
        offset: usize,
    },

    /// A value is not amongst the allowed values of its argument.
    #[error("Parse error: '{value}' is not an allowed value for '{name}'.")]
    ValueNotAllowed {
        /// The argument.
        name: String,
        /// The rejected value.
        value: String,
    },
}

impl ParseError {
    /// The kind of this error.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::ConversionFailed { .. } => ParseErrorKind::ConversionFailed,
            ParseError::TooManyOccurrences { .. } => ParseErrorKind::TooManyOccurrences,
            ParseError::SyntaxError { .. } => ParseErrorKind::SyntaxError,
            ParseError::ValueMissing { .. } => ParseErrorKind::ValueMissing,
            ParseError::UnexpectedValue { .. } => ParseErrorKind::UnexpectedValue,
            ParseError::RequiredArgumentMissing { .. } => ParseErrorKind::RequiredArgumentMissing,
            ParseError::SubparserNameMissing { .. } => ParseErrorKind::SubparserNameMissing,
            ParseError::SubparserNotFound { .. } => ParseErrorKind::SubparserNotFound,
            ParseError::ValueNotAllowed { .. } => ParseErrorKind::ValueNotAllowed,
        }
    }

    /// The argument this error applies to, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            ParseError::SyntaxError { .. } => None,
            ParseError::ConversionFailed { name, .. }
            | ParseError::TooManyOccurrences { name, .. }
            | ParseError::ValueMissing { name }
            | ParseError::UnexpectedValue { name, .. }
            | ParseError::RequiredArgumentMissing { name, .. }
            | ParseError::SubparserNameMissing { name }
            | ParseError::SubparserNotFound { name, .. }
            | ParseError::ValueNotAllowed { name, .. } => Some(name),
        }
    }
}

/// An error querying the [`ParseResults`](crate::ParseResults).
///
/// This indicates a mismatch between the caller and the registered arguments, rather than malformed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The name does not resolve to a registered argument.
    #[error("Query error: unknown argument '{0}'.")]
    UnknownArgument(String),

    /// The matched value could not be converted to the requested type.
    #[error("Query error: cannot convert the value of '{name}': {source}")]
    Conversion {
        /// The argument.
        name: String,
        /// The conversion failure.
        #[source]
        source: ConversionError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use std::error::Error;

    #[test]
    fn conversion_failed_source() {
        let error = ParseError::ConversionFailed {
            name: "--count".to_string(),
            value: "abc".to_string(),
            source: ConversionError::InvalidConversion {
                token: "abc".to_string(),
                type_name: "u32",
            },
        };

        assert_eq!(error.kind(), ParseErrorKind::ConversionFailed);
        assert_eq!(error.name(), Some("--count"));
        assert_contains!(error.to_string(), "'abc'");
        assert_contains!(error.source().unwrap().to_string(), "u32");
    }

    #[test]
    fn syntax_error_unnamed() {
        let error = ParseError::SyntaxError {
            token: "extra".to_string(),
            offset: 3,
        };

        assert_eq!(error.kind(), ParseErrorKind::SyntaxError);
        assert_eq!(error.name(), None);
        assert_contains!(error.to_string(), "position 3");
    }
}
