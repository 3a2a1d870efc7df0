use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;

use crate::dictionary::Dictionary;

/// The failure of a [`ValueHandler`] to accept a value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The value does not convert to the target type.
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        /// The raw value.
        token: String,
        /// The target type.
        type_name: &'static str,
    },

    /// The value converts, but is rejected by a validation.
    #[error("'{token}' is rejected: {message}.")]
    Rejected {
        /// The raw value.
        token: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Behaviour invoked by the parser with each raw value matched to an argument.
///
/// A handler converts the value, optionally validates it, and optionally stores it into the caller's storage `S`.
/// Returning an error aborts the parse with [`ParseError::ConversionFailed`](crate::ParseError::ConversionFailed);
/// the raw value is recorded in the results only when the handler succeeds.
///
/// Any `Fn(&str, &Dictionary, &mut S) -> Result<(), ConversionError>` is a handler.
pub trait ValueHandler<S> {
    /// Handle one raw value.
    fn handle(
        &self,
        value: &str,
        dictionary: &Dictionary,
        storage: &mut S,
    ) -> Result<(), ConversionError>;
}

impl<S, F> ValueHandler<S> for F
where
    F: Fn(&str, &Dictionary, &mut S) -> Result<(), ConversionError>,
{
    fn handle(
        &self,
        value: &str,
        dictionary: &Dictionary,
        storage: &mut S,
    ) -> Result<(), ConversionError> {
        self(value, dictionary, storage)
    }
}

/// Convert a raw value via [`FromStr`].
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::{convert, ConversionError};
///
/// assert_eq!(convert::<u32>("10").unwrap(), 10);
/// assert_eq!(
///     convert::<u32>("10kg").unwrap_err(),
///     ConversionError::InvalidConversion {
///         token: "10kg".to_string(),
///         type_name: "u32",
///     }
/// );
/// ```
pub fn convert<T: FromStr>(token: &str) -> Result<T, ConversionError> {
    T::from_str(token).map_err(|_| ConversionError::InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}

/// Convert a raw value to `bool` via the dictionary's true/false literals.
pub fn convert_bool(token: &str, dictionary: &Dictionary) -> Result<bool, ConversionError> {
    dictionary
        .parse_bool(token)
        .ok_or_else(|| ConversionError::InvalidConversion {
            token: token.to_string(),
            type_name: std::any::type_name::<bool>(),
        })
}

/// A handler which only checks the value converts to `T`, discarding the converted value.
pub struct Validate<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Validate<T> {
    /// Create a validating handler.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Validate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T: FromStr> ValueHandler<S> for Validate<T> {
    fn handle(
        &self,
        value: &str,
        _dictionary: &Dictionary,
        _storage: &mut S,
    ) -> Result<(), ConversionError> {
        convert::<T>(value).map(|_| ())
    }
}

/// A handler which converts the value to `T` and passes it to a store function.
/// Built via [`store`].
pub struct Store<F, T> {
    store_fn: F,
    _phantom: PhantomData<fn(T)>,
}

/// Build a handler which converts the value via [`FromStr`] and stores it into the caller's storage.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::prelude::*;
/// use argot::{store, CommandLineParser};
///
/// #[derive(Default)]
/// struct Settings {
///     port: u16,
/// }
///
/// let mut parser: CommandLineParser<Settings> = CommandLineParser::with_storage("program");
/// parser
///     .valued("--port")
///     .unwrap()
///     .handler(store(|settings: &mut Settings, port: u16| settings.port = port));
///
/// let mut settings = Settings::default();
/// parser.parse_tokens_into(&["--port", "8080"], &mut settings).unwrap();
/// assert_eq!(settings.port, 8080);
/// ```
pub fn store<S, T, F>(store_fn: F) -> Store<F, T>
where
    T: FromStr,
    F: Fn(&mut S, T),
{
    Store {
        store_fn,
        _phantom: PhantomData,
    }
}

impl<S, T, F> ValueHandler<S> for Store<F, T>
where
    T: FromStr,
    F: Fn(&mut S, T),
{
    fn handle(
        &self,
        value: &str,
        _dictionary: &Dictionary,
        storage: &mut S,
    ) -> Result<(), ConversionError> {
        let converted = convert::<T>(value)?;
        (self.store_fn)(storage, converted);
        Ok(())
    }
}

/// A handler which converts the value via the dictionary's boolean literals and passes it to a store function.
/// Built via [`store_bool`].
pub struct StoreBool<F> {
    store_fn: F,
}

/// Build a handler which stores the dictionary-converted boolean into the caller's storage.
/// Typically used with switches, which record the dictionary's true literal.
pub fn store_bool<S, F>(store_fn: F) -> StoreBool<F>
where
    F: Fn(&mut S, bool),
{
    StoreBool { store_fn }
}

impl<S, F> ValueHandler<S> for StoreBool<F>
where
    F: Fn(&mut S, bool),
{
    fn handle(
        &self,
        value: &str,
        dictionary: &Dictionary,
        storage: &mut S,
    ) -> Result<(), ConversionError> {
        let converted = convert_bool(value, dictionary)?;
        (self.store_fn)(storage, converted);
        Ok(())
    }
}

/// A handler which rejects the values failing a predicate.
/// Built via [`check`].
pub struct Check<P> {
    message: String,
    predicate: P,
}

/// Build a handler which rejects values for which the `predicate` is false.
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::prelude::*;
/// use argot::{check, CommandLineParser, ParseErrorKind};
///
/// let mut parser = CommandLineParser::new("program");
/// parser
///     .valued("--name")
///     .unwrap()
///     .handler(check("must be lowercase", |v: &str| v == v.to_lowercase()));
///
/// let error = parser.parse_tokens(&["--name", "Abc"]).unwrap_err();
/// assert_eq!(error.kind(), ParseErrorKind::ConversionFailed);
/// ```
pub fn check<P>(message: impl Into<String>, predicate: P) -> Check<P>
where
    P: Fn(&str) -> bool,
{
    Check {
        message: message.into(),
        predicate,
    }
}

impl<S, P> ValueHandler<S> for Check<P>
where
    P: Fn(&str) -> bool,
{
    fn handle(
        &self,
        value: &str,
        _dictionary: &Dictionary,
        _storage: &mut S,
    ) -> Result<(), ConversionError> {
        if (self.predicate)(value) {
            Ok(())
        } else {
            Err(ConversionError::Rejected {
                token: value.to_string(),
                message: self.message.clone(),
            })
        }
    }
}
