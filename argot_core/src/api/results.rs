use std::str::FromStr;

use crate::api::{convert, convert_bool, ConversionError};
use crate::dictionary::Dictionary;
use crate::error::QueryError;
use crate::parser::LevelResults;
use crate::schema::Schema;

/// The outcome of a successful parse.
///
/// Arguments are queried by name, using any of their registered aliases.
/// Arguments of a sub-command are qualified by the sub-command path, joined with the dictionary's path separator (ex: `"cmd1 --switch"`).
/// Querying a name which was never registered is a [`QueryError::UnknownArgument`]; a registered argument which did not occur simply has no values.
pub struct ParseResults<'p, S = ()> {
    program: &'p str,
    dictionary: &'p Dictionary,
    schema: &'p Schema<S>,
    root: LevelResults,
}

impl<'p, S> std::fmt::Debug for ParseResults<'p, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseResults")
            .field("program", &self.program)
            .field("root", &self.root)
            .finish()
    }
}

impl<'p, S> ParseResults<'p, S> {
    pub(crate) fn new(
        program: &'p str,
        dictionary: &'p Dictionary,
        schema: &'p Schema<S>,
        root: LevelResults,
    ) -> Self {
        Self {
            program,
            dictionary,
            schema,
            root,
        }
    }

    /// The program name, followed by the selected sub-commands (ex: `"program cmd1"`).
    pub fn program(&self) -> String {
        let mut program = self.program.to_string();

        for command in self.selected() {
            program.push(' ');
            program.push_str(command);
        }

        program
    }

    /// The chain of selected sub-commands, outermost first.
    pub fn selected(&self) -> Vec<&str> {
        let mut selected = Vec::default();
        let mut level = &self.root;

        while let Some((command, child)) = level.selected() {
            selected.push(command);
            level = child;
        }

        selected
    }

    /// Resolve a name to its entry index, and the results of its level (if the level was parsed).
    fn resolve(&self, name: &str) -> Result<(usize, Option<&LevelResults>), QueryError> {
        let unknown = || QueryError::UnknownArgument(name.to_string());
        let mut segments: Vec<&str> = name.split(self.dictionary.path_separator()).collect();
        let argument = segments.pop().ok_or_else(unknown)?;
        let mut schema = self.schema;
        let mut level = Some(&self.root);

        for segment in segments {
            let (command, child) = schema
                .subcommand(segment, self.dictionary)
                .ok_or_else(unknown)?;
            level = level
                .and_then(LevelResults::selected)
                .filter(|(selected, _)| *selected == command)
                .map(|(_, results)| results);
            schema = child;
        }

        let (index, _) = schema
            .lookup(argument, self.dictionary)
            .ok_or_else(unknown)?;
        Ok((index, level))
    }

    /// The number of values matched to the argument, including defaults.
    pub fn count(&self, name: &str) -> Result<usize, QueryError> {
        let (index, level) = self.resolve(name)?;
        Ok(level.map_or(0, |level| level.count(index)))
    }

    /// The raw values matched to the argument, in order.
    pub fn values(&self, name: &str) -> Result<&[String], QueryError> {
        let (index, level) = self.resolve(name)?;
        Ok(level.map(|level| level.values(index)).unwrap_or(&[]))
    }

    /// The first raw value matched to the argument.
    pub fn get(&self, name: &str) -> Result<Option<&str>, QueryError> {
        Ok(self.values(name)?.first().map(String::as_str))
    }

    /// Whether any value was matched to the argument.
    pub fn has_value(&self, name: &str) -> Result<bool, QueryError> {
        Ok(self.count(name)? > 0)
    }

    /// The first value matched to the argument, converted via [`FromStr`].
    ///
    /// ### Example
    /// ```
    /// # use argot_core as argot;
    /// use argot::prelude::*;
    /// use argot::{CommandLineParser, QueryError};
    ///
    /// let mut parser = CommandLineParser::new("program");
    /// parser.valued("--port").unwrap();
    ///
    /// let results = parser.parse_tokens(&["--port=8080"]).unwrap();
    /// assert_eq!(results.value::<u16>("--port").unwrap(), Some(8080));
    /// assert!(matches!(
    ///     results.value::<u16>("--host"),
    ///     Err(QueryError::UnknownArgument(_))
    /// ));
    /// ```
    pub fn value<T: FromStr>(&self, name: &str) -> Result<Option<T>, QueryError> {
        self.value_with(name, |token, _| convert(token))
    }

    /// All the values matched to the argument, converted via [`FromStr`].
    pub fn all<T: FromStr>(&self, name: &str) -> Result<Vec<T>, QueryError> {
        self.all_with(name, |token, _| convert(token))
    }

    /// The first value matched to the argument, converted via the `converter`.
    pub fn value_with<T>(
        &self,
        name: &str,
        converter: impl Fn(&str, &Dictionary) -> Result<T, ConversionError>,
    ) -> Result<Option<T>, QueryError> {
        self.get(name)?
            .map(|token| self.apply(name, token, &converter))
            .transpose()
    }

    /// All the values matched to the argument, converted via the `converter`.
    pub fn all_with<T>(
        &self,
        name: &str,
        converter: impl Fn(&str, &Dictionary) -> Result<T, ConversionError>,
    ) -> Result<Vec<T>, QueryError> {
        self.values(name)?
            .iter()
            .map(|token| self.apply(name, token, &converter))
            .collect()
    }

    /// Whether the argument's first value is the dictionary's true literal (`false` when it did not occur).
    pub fn flag(&self, name: &str) -> Result<bool, QueryError> {
        Ok(self.value_with(name, convert_bool)?.unwrap_or(false))
    }

    fn apply<T>(
        &self,
        name: &str,
        token: &str,
        converter: &impl Fn(&str, &Dictionary) -> Result<T, ConversionError>,
    ) -> Result<T, QueryError> {
        converter(token, self.dictionary).map_err(|source| QueryError::Conversion {
            name: name.to_string(),
            source,
        })
    }
}
