//! Traits which, typically, may be imported without concern: `use argot::prelude::*`.
use crate::api::{
    ExclusiveHandle, IntoNames, Level, PositionalHandle, SubcommandHandle, SwitchHandle,
    ValuedHandle,
};
use crate::error::ConfigError;

/// Behaviour for registering arguments on a parser level.
///
/// Implemented by the root [`CommandLineParser`](crate::CommandLineParser) and by each [`SubCommand`](crate::SubCommand).
/// Names must be unique within the level; registration fails with a [`ConfigError`] otherwise.
// Needs to be imported in order to register arguments.
pub trait Register<S> {
    #[doc(hidden)]
    fn level(&mut self) -> Level<'_, S>;

    /// Register a switch: a by-name flag which takes no value.
    fn switch(&mut self, names: impl IntoNames) -> Result<SwitchHandle<'_, S>, ConfigError> {
        self.level().switch(names)
    }

    /// Register a by-name argument which takes a value.
    fn valued(&mut self, names: impl IntoNames) -> Result<ValuedHandle<'_, S>, ConfigError> {
        self.level().valued(names)
    }

    /// Register a positional argument.
    /// The order of registration is the order in which positionals consume tokens.
    ///
    /// Positionals cannot be registered alongside sub-commands.
    fn positional(
        &mut self,
        name: impl Into<String>,
    ) -> Result<PositionalHandle<'_, S>, ConfigError> {
        self.level().positional(name)
    }

    /// Register an exclusive argument (ex: `--help`, `--version`).
    ///
    /// An exclusive argument applies only when it is the sole token after its sub-command path.
    /// Nothing else is parsed in that case, so required arguments are not enforced.
    fn exclusive(&mut self, names: impl IntoNames) -> Result<ExclusiveHandle<'_, S>, ConfigError> {
        self.level().exclusive(names)
    }

    /// Register the sub-command selector of this level.
    /// The selector consumes the token after the by-name arguments, and the remaining tokens belong to the selected sub-command.
    ///
    /// At most one selector may be registered per level, and not alongside positionals.
    fn subcommands(
        &mut self,
        name: impl Into<String>,
    ) -> Result<SubcommandHandle<'_, S>, ConfigError> {
        self.level().subcommands(name)
    }
}
