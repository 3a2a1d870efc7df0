use crate::api::{SubCommand, ValueHandler};
use crate::dictionary::Dictionary;
use crate::error::ConfigError;
use crate::model::{Kind, Nargs};
use crate::schema::{ArgumentEntry, Schema};

/// The names under which an argument is registered.
///
/// Implemented for a single name (`"--verbose"`) and for lists of aliases (`["-v", "--verbose"]`).
pub trait IntoNames {
    /// Collect the names, in order.
    fn into_names(self) -> Vec<String>;
}

impl IntoNames for &str {
    fn into_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoNames for String {
    fn into_names(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoNames for &[&str] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|name| name.to_string()).collect()
    }
}

impl<const N: usize> IntoNames for [&str; N] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|name| name.to_string()).collect()
    }
}

impl IntoNames for Vec<&str> {
    fn into_names(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoNames for Vec<String> {
    fn into_names(self) -> Vec<String> {
        self
    }
}

fn strings(values: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    values.into_iter().map(Into::into).collect()
}

/// One parser level under registration: the root [`CommandLineParser`](crate::CommandLineParser), or a [`SubCommand`].
#[doc(hidden)]
pub struct Level<'a, S> {
    schema: &'a mut Schema<S>,
    dictionary: &'a Dictionary,
}

impl<'a, S> Level<'a, S> {
    pub(crate) fn new(schema: &'a mut Schema<S>, dictionary: &'a Dictionary) -> Self {
        Self { schema, dictionary }
    }

    fn register(
        self,
        kind: Kind,
        names: Vec<String>,
    ) -> Result<&'a mut ArgumentEntry<S>, ConfigError> {
        let Level { schema, dictionary } = self;
        let index = schema.register(kind, names, dictionary)?;
        Ok(schema.entry_mut(index))
    }

    pub(crate) fn switch(self, names: impl IntoNames) -> Result<SwitchHandle<'a, S>, ConfigError> {
        let entry = self.register(Kind::Switch, names.into_names())?;
        Ok(SwitchHandle { entry })
    }

    pub(crate) fn valued(self, names: impl IntoNames) -> Result<ValuedHandle<'a, S>, ConfigError> {
        let entry = self.register(Kind::Valued, names.into_names())?;
        Ok(ValuedHandle { entry })
    }

    pub(crate) fn positional(
        self,
        name: impl Into<String>,
    ) -> Result<PositionalHandle<'a, S>, ConfigError> {
        let Level { schema, dictionary } = self;
        let index = schema.register_positional(name.into(), dictionary)?;
        Ok(PositionalHandle {
            entry: schema.entry_mut(index),
        })
    }

    pub(crate) fn exclusive(
        self,
        names: impl IntoNames,
    ) -> Result<ExclusiveHandle<'a, S>, ConfigError> {
        let entry = self.register(Kind::Exclusive, names.into_names())?;
        Ok(ExclusiveHandle { entry })
    }

    pub(crate) fn subcommands(
        self,
        name: impl Into<String>,
    ) -> Result<SubcommandHandle<'a, S>, ConfigError> {
        let Level { schema, dictionary } = self;
        let index = schema.register_selector(name.into(), dictionary)?;
        Ok(SubcommandHandle {
            schema,
            dictionary,
            index,
        })
    }
}

/// A registered switch: a by-name flag which takes no value.
///
/// Each occurrence records the dictionary's true literal.
#[derive(Debug)]
pub struct SwitchHandle<'a, S> {
    entry: &'a mut ArgumentEntry<S>,
}

impl<'a, S> SwitchHandle<'a, S> {
    /// Set how many times the switch may occur (default: at most once).
    pub fn nargs(self, nargs: Nargs) -> Result<Self, ConfigError> {
        self.entry.set_nargs(nargs)?;
        Ok(self)
    }

    /// Document the switch in the usage.
    pub fn help(self, help: impl Into<String>) -> Self {
        self.entry.set_help(help.into());
        self
    }

    /// Invoke the `handler` with the true literal, once per occurrence.
    pub fn handler(self, handler: impl ValueHandler<S> + 'static) -> Self {
        self.entry.set_handler(Box::new(handler));
        self
    }
}

/// A registered by-name argument which takes a value (ex: `--key value` or `--key=value`).
#[derive(Debug)]
pub struct ValuedHandle<'a, S> {
    entry: &'a mut ArgumentEntry<S>,
}

impl<'a, S> ValuedHandle<'a, S> {
    /// Set how many times the argument may occur (default: at most once).
    ///
    /// ### Example
    /// ```
    /// # use argot_core as argot;
    /// use argot::prelude::*;
    /// use argot::{CommandLineParser, Nargs};
    ///
    /// let mut parser = CommandLineParser::new("program");
    /// parser.valued("--include").unwrap().nargs(Nargs::Any).unwrap();
    ///
    /// let results = parser
    ///     .parse_tokens(&["--include", "a", "--include=b"])
    ///     .unwrap();
    /// assert_eq!(results.values("--include").unwrap(), &["a", "b"]);
    /// ```
    pub fn nargs(self, nargs: Nargs) -> Result<Self, ConfigError> {
        self.entry.set_nargs(nargs)?;
        Ok(self)
    }

    /// Set the values used when the argument does not occur.
    pub fn defaults(self, defaults: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.entry.set_defaults(strings(defaults));
        self
    }

    /// Restrict the argument to the `allowed` values (compared exactly).
    pub fn allowed(self, allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.entry.set_allowed(strings(allowed));
        self
    }

    /// Set the name shown for the value in the usage (default: the upper-cased name).
    pub fn display(self, display: impl Into<String>) -> Self {
        self.entry.set_display(display.into());
        self
    }

    /// Document the argument in the usage.
    pub fn help(self, help: impl Into<String>) -> Self {
        self.entry.set_help(help.into());
        self
    }

    /// Invoke the `handler` with each value, including defaults.
    pub fn handler(self, handler: impl ValueHandler<S> + 'static) -> Self {
        self.entry.set_handler(Box::new(handler));
        self
    }
}

/// A registered positional argument.
///
/// Positionals consume the tokens left after the by-name arguments, in registration order.
#[derive(Debug)]
pub struct PositionalHandle<'a, S> {
    entry: &'a mut ArgumentEntry<S>,
}

impl<'a, S> PositionalHandle<'a, S> {
    /// Set how many tokens the positional consumes (default: precisely one).
    pub fn nargs(self, nargs: Nargs) -> Result<Self, ConfigError> {
        self.entry.set_nargs(nargs)?;
        Ok(self)
    }

    /// Set the values used when no token is left for the positional.
    pub fn defaults(self, defaults: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.entry.set_defaults(strings(defaults));
        self
    }

    /// Restrict the positional to the `allowed` values (compared exactly).
    pub fn allowed(self, allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.entry.set_allowed(strings(allowed));
        self
    }

    /// Set the name shown in the usage (default: the upper-cased name).
    pub fn display(self, display: impl Into<String>) -> Self {
        self.entry.set_display(display.into());
        self
    }

    /// Document the positional in the usage.
    pub fn help(self, help: impl Into<String>) -> Self {
        self.entry.set_help(help.into());
        self
    }

    /// Invoke the `handler` with each value, including defaults.
    pub fn handler(self, handler: impl ValueHandler<S> + 'static) -> Self {
        self.entry.set_handler(Box::new(handler));
        self
    }
}

/// A registered exclusive argument (ex: `--help`), which only applies as the sole token of its level.
#[derive(Debug)]
pub struct ExclusiveHandle<'a, S> {
    entry: &'a mut ArgumentEntry<S>,
}

impl<'a, S> ExclusiveHandle<'a, S> {
    /// Document the argument in the usage.
    pub fn help(self, help: impl Into<String>) -> Self {
        self.entry.set_help(help.into());
        self
    }

    /// Invoke the `handler` with the true literal when the argument applies.
    pub fn handler(self, handler: impl ValueHandler<S> + 'static) -> Self {
        self.entry.set_handler(Box::new(handler));
        self
    }
}

/// A registered sub-command selector, to which the sub-commands are added.
#[derive(Debug)]
pub struct SubcommandHandle<'a, S> {
    schema: &'a mut Schema<S>,
    dictionary: &'a Dictionary,
    index: usize,
}

impl<'a, S> SubcommandHandle<'a, S> {
    /// Document the selector in the usage.
    pub fn help(self, help: impl Into<String>) -> Self {
        self.schema.entry_mut(self.index).set_help(help.into());
        self
    }

    /// Set the name shown in the usage (default: the upper-cased name).
    pub fn display(self, display: impl Into<String>) -> Self {
        self.schema.entry_mut(self.index).set_display(display.into());
        self
    }

    /// Invoke the `handler` with the name of the selected sub-command.
    pub fn handler(self, handler: impl ValueHandler<S> + 'static) -> Self {
        self.schema
            .entry_mut(self.index)
            .set_handler(Box::new(handler));
        self
    }

    /// Add a sub-command, whose arguments are registered by `setup`.
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
    ///         sub.about("Build the project.");
    ///         sub.switch("--release")?;
    ///         Ok(())
    ///     })
    ///     .unwrap()
    ///     .command("clean", |_| Ok(()))
    ///     .unwrap();
    ///
    /// let results = parser.parse_tokens(&["build", "--release"]).unwrap();
    /// assert_eq!(results.get("command").unwrap(), Some("build"));
    /// assert!(results.flag("build --release").unwrap());
    /// ```
    pub fn command(
        self,
        name: impl Into<String>,
        setup: impl FnOnce(&mut SubCommand<S>) -> Result<(), ConfigError>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let mut child = Schema::default();
        setup(&mut SubCommand::new(&mut child, self.dictionary))?;
        self.schema
            .register_subcommand(name, child, self.dictionary)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Register;
    use rstest::rstest;

    #[rstest]
    #[case("--verbose".into_names(), vec!["--verbose"])]
    #[case("--verbose".to_string().into_names(), vec!["--verbose"])]
    #[case(["-v", "--verbose"].into_names(), vec!["-v", "--verbose"])]
    #[case((&["-v", "--verbose"][..]).into_names(), vec!["-v", "--verbose"])]
    #[case(vec!["-v"].into_names(), vec!["-v"])]
    #[case(Vec::<String>::default().into_names(), vec![])]
    fn into_names(#[case] names: Vec<String>, #[case] expected: Vec<&str>) {
        assert_eq!(names, expected);
    }

    #[test]
    fn level_register() {
        let dictionary = Dictionary::default();
        let mut schema: Schema<()> = Schema::default();

        Level::new(&mut schema, &dictionary)
            .switch(["-v", "--verbose"])
            .unwrap()
            .nargs(Nargs::Any)
            .unwrap()
            .help("Be verbose.");
        Level::new(&mut schema, &dictionary)
            .valued("--key")
            .unwrap()
            .defaults(["a"])
            .allowed(["a", "b", "a"])
            .display("K");

        let (index, entry) = schema.lookup("--verbose", &dictionary).unwrap();
        assert_eq!(index, 0);
        assert_eq!(entry.kind(), Kind::Switch);
        assert_eq!(entry.help(), Some("Be verbose."));
        assert!(entry.bound().is_repeatable());

        let (index, entry) = schema.lookup("--key", &dictionary).unwrap();
        assert_eq!(index, 1);
        assert_eq!(entry.defaults(), &["a"]);
        assert_eq!(entry.allowed(), &["a", "b"]);
        assert_eq!(entry.display(), "K");
    }

    #[test]
    fn level_register_invalid() {
        let dictionary = Dictionary::default();
        let mut schema: Schema<()> = Schema::default();

        Level::new(&mut schema, &dictionary).switch("--verbose").unwrap();

        assert_matches!(
            Level::new(&mut schema, &dictionary).valued("--verbose"),
            Err(ConfigError::DuplicateName(name)) if name == "--verbose"
        );
        assert_matches!(
            Level::new(&mut schema, &dictionary).switch(Vec::<String>::default()),
            Err(ConfigError::NoNames)
        );
        assert_matches!(
            Level::new(&mut schema, &dictionary)
                .positional("item")
                .unwrap()
                .nargs(Nargs::Between(2, 1)),
            Err(ConfigError::InvalidCardinality { min: 2, max: 1, .. })
        );
    }

    #[test]
    fn subcommand_register() {
        let dictionary = Dictionary::default();
        let mut schema: Schema<()> = Schema::default();

        Level::new(&mut schema, &dictionary)
            .subcommands("command")
            .unwrap()
            .help("The command.")
            .command("a", |sub| {
                sub.positional("item")?;
                Ok(())
            })
            .unwrap()
            .command("b", |_| Ok(()))
            .unwrap();

        let commands: Vec<&str> = schema.subcommands().map(|(command, _)| command).collect();
        assert_eq!(commands, vec!["a", "b"]);
        let (_, child) = schema.subcommand("a", &dictionary).unwrap();
        assert!(child.lookup("item", &dictionary).is_some());
    }

    #[test]
    fn subcommand_register_invalid() {
        let dictionary = Dictionary::default();
        let mut schema: Schema<()> = Schema::default();

        let handle = Level::new(&mut schema, &dictionary)
            .subcommands("command")
            .unwrap()
            .command("a", |_| Ok(()))
            .unwrap();

        assert_matches!(
            handle.command("a", |_| Ok(())),
            Err(ConfigError::DuplicateSubcommand(name)) if name == "a"
        );
        assert_matches!(
            Level::new(&mut schema, &dictionary).subcommands("other"),
            Err(ConfigError::DuplicateSelector(name)) if name == "other"
        );
        assert_matches!(
            Level::new(&mut schema, &dictionary).positional("item"),
            Err(ConfigError::PositionalWithSubcommands(name)) if name == "item"
        );
    }

    #[test]
    fn subcommand_setup_error() {
        let dictionary = Dictionary::default();
        let mut schema: Schema<()> = Schema::default();

        let result = Level::new(&mut schema, &dictionary)
            .subcommands("command")
            .unwrap()
            .command("a", |sub| {
                sub.switch("--flag")?;
                sub.switch("--flag")?;
                Ok(())
            });

        assert_matches!(result, Err(ConfigError::DuplicateName(name)) if name == "--flag");
        assert_eq!(schema.subcommands().count(), 0);
    }
}
