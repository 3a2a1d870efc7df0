#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{Level, ParseResults};
use crate::dictionary::Dictionary;
use crate::error::{ConfigError, ParseError, QueryError};
use crate::parser::{Engine, LevelResults, Printer};
use crate::prelude::Register;
use crate::schema::Schema;

/// The base command line parser.
///
/// Arguments are registered via the [`Register`] trait (`use argot::prelude::*`).
/// The parser may be generic over a storage `S`, into which the value handlers write during [`CommandLineParser::parse_tokens_into`].
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::prelude::*;
/// use argot::CommandLineParser;
///
/// let mut parser = CommandLineParser::new("program");
/// parser.switch(["-v", "--verbose"]).unwrap();
/// parser.positional("item").unwrap();
///
/// let results = parser.parse_tokens(&["-v", "abc"]).unwrap();
/// assert!(results.flag("--verbose").unwrap());
/// assert_eq!(results.get("item").unwrap(), Some("abc"));
/// ```
pub struct CommandLineParser<S = ()> {
    program: String,
    dictionary: Dictionary,
    schema: Schema<S>,
}

impl<S> std::fmt::Debug for CommandLineParser<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("program", &self.program)
            .field("dictionary", &self.dictionary)
            .field("schema", &self.schema)
            .finish()
    }
}

impl CommandLineParser<()> {
    /// Create a command line parser, without storage.
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_storage(program)
    }

    /// Parse the `tokens` (excluding the program name).
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<ParseResults<'_>, ParseError> {
        self.parse_tokens_into(tokens, &mut ())
    }

    /// Parse the tokens of the process' command line (excluding the program name).
    pub fn parse_env(&self) -> Result<ParseResults<'_>, ParseError> {
        self.parse_env_into(&mut ())
    }
}

impl<S> CommandLineParser<S> {
    /// Create a command line parser whose value handlers write into a storage `S`.
    pub fn with_storage(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            dictionary: Dictionary::default(),
            schema: Schema::default(),
        }
    }

    /// Create a command line parser using the literals of the `dictionary`.
    ///
    /// ### Example
    /// ```
    /// # use argot_core as argot;
    /// use argot::prelude::*;
    /// use argot::{CommandLineParser, Dictionary};
    ///
    /// let mut parser: CommandLineParser =
    ///     CommandLineParser::with_dictionary("program", Dictionary::default().with_value_separator(":"))
    ///         .unwrap();
    /// parser.valued("--key").unwrap();
    ///
    /// let results = parser.parse_tokens(&["--key:value"]).unwrap();
    /// assert_eq!(results.get("--key").unwrap(), Some("value"));
    /// ```
    pub fn with_dictionary(
        program: impl Into<String>,
        dictionary: Dictionary,
    ) -> Result<Self, ConfigError> {
        dictionary.validate()?;
        Ok(Self {
            program: program.into(),
            dictionary,
            schema: Schema::default(),
        })
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final message will apply.
    ///
    /// An about message documents the command line parser in full sentence/paragraph format.
    /// We recommend allowing `argot` to format this field (ex: it is not recommended to use line breaks `'\n'`).
    pub fn about(&mut self, description: impl Into<String>) -> &mut Self {
        self.schema.set_about(description.into());
        self
    }

    /// The program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The dictionary used to register and parse.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Parse the `tokens` (excluding the program name), passing every matched value to its handler along with the `storage`.
    ///
    /// The first error aborts the parse.
    /// Handlers may have already written to the `storage` at that point.
    pub fn parse_tokens_into(
        &self,
        tokens: &[&str],
        storage: &mut S,
    ) -> Result<ParseResults<'_, S>, ParseError> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsing '{}' tokens: {tokens:?}.", self.program);
        }

        let root = Engine::new(&self.dictionary, storage).parse(&self.schema, tokens)?;
        Ok(ParseResults::new(
            &self.program,
            &self.dictionary,
            &self.schema,
            root,
        ))
    }

    /// The results view before any parse: every registered argument has no values.
    ///
    /// ### Example
    /// ```
    /// # use argot_core as argot;
    /// use argot::prelude::*;
    /// use argot::{CommandLineParser, QueryError};
    ///
    /// let mut parser = CommandLineParser::new("program");
    /// parser.switch("--verbose").unwrap();
    ///
    /// let results = parser.unparsed();
    /// assert_eq!(results.count("--verbose").unwrap(), 0);
    /// assert_eq!(
    ///     results.count("--quiet").unwrap_err(),
    ///     QueryError::UnknownArgument("--quiet".to_string())
    /// );
    /// ```
    pub fn unparsed(&self) -> ParseResults<'_, S> {
        ParseResults::new(
            &self.program,
            &self.dictionary,
            &self.schema,
            LevelResults::default(),
        )
    }

    /// Parse the tokens of the process' command line (excluding the program name) into the `storage`.
    pub fn parse_env_into(&self, storage: &mut S) -> Result<ParseResults<'_, S>, ParseError> {
        let arguments: Vec<String> = std::env::args().skip(1).collect();
        let tokens: Vec<&str> = arguments.iter().map(String::as_str).collect();
        self.parse_tokens_into(&tokens, storage)
    }

    /// Render the usage message of the root parser.
    pub fn usage(&self) -> String {
        Printer::terminal().render(&self.program, &self.schema)
    }

    /// Render the usage message of the sub-command at the `path` (ex: `"cmd1 cmd2"`).
    ///
    /// ### Example
    /// ```
    /// # use argot_core as argot;
    /// use argot::prelude::*;
    /// use argot::CommandLineParser;
    ///
    /// let mut parser = CommandLineParser::new("program");
    /// parser
    ///     .subcommands("command")
    ///     .unwrap()
    ///     .command("build", |sub| {
    ///         sub.switch("--release")?;
    ///         Ok(())
    ///     })
    ///     .unwrap();
    ///
    /// assert!(parser.usage_for("build").unwrap().starts_with("usage: program build [--release]"));
    /// assert!(parser.usage_for("test").is_err());
    /// ```
    pub fn usage_for(&self, path: &str) -> Result<String, QueryError> {
        let mut program = self.program.clone();
        let mut schema = &self.schema;

        for command in path
            .split(self.dictionary.path_separator())
            .filter(|command| !command.is_empty())
        {
            let (command, child) = schema
                .subcommand(command, &self.dictionary)
                .ok_or_else(|| QueryError::UnknownArgument(path.to_string()))?;
            program.push(' ');
            program.push_str(command);
            schema = child;
        }

        Ok(Printer::terminal().render(&program, schema))
    }
}

impl<S> Register<S> for CommandLineParser<S> {
    fn level(&mut self) -> Level<'_, S> {
        Level::new(&mut self.schema, &self.dictionary)
    }
}

/// A sub-command level under registration.
///
/// Used with [`SubcommandHandle::command`](crate::SubcommandHandle::command).
pub struct SubCommand<'a, S> {
    schema: &'a mut Schema<S>,
    dictionary: &'a Dictionary,
}

impl<'a, S> SubCommand<'a, S> {
    pub(crate) fn new(schema: &'a mut Schema<S>, dictionary: &'a Dictionary) -> Self {
        Self { schema, dictionary }
    }

    /// Document the about message for this sub-command.
    /// If repeated, only the final message will apply.
    pub fn about(&mut self, description: impl Into<String>) -> &mut Self {
        self.schema.set_about(description.into());
        self
    }
}

impl<'a, S> Register<S> for SubCommand<'a, S> {
    fn level(&mut self) -> Level<'_, S> {
        Level::new(self.schema, self.dictionary)
    }
}
