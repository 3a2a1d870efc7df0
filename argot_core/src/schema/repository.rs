use std::collections::HashMap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::error::ConfigError;
use crate::model::Kind;
use crate::schema::ArgumentEntry;

/// The registered arguments of one parser level, plus its sub-command levels.
///
/// Entries are kept in an arena; the parse results refer to them by their index.
pub(crate) struct Schema<S> {
    entries: Vec<ArgumentEntry<S>>,
    index: HashMap<String, usize>,
    selector: Option<usize>,
    commands: Vec<(String, Schema<S>)>,
    command_index: HashMap<String, usize>,
    about: Option<String>,
}

impl<S> Default for Schema<S> {
    fn default() -> Self {
        Self {
            entries: Vec::default(),
            index: HashMap::default(),
            selector: None,
            commands: Vec::default(),
            command_index: HashMap::default(),
            about: None,
        }
    }
}

impl<S> std::fmt::Debug for Schema<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("entries", &self.entries)
            .field("commands", &self.commands)
            .finish()
    }
}

impl<S> Schema<S> {
    pub(crate) fn about(&self) -> Option<&str> {
        self.about.as_deref()
    }

    pub(crate) fn set_about(&mut self, about: String) {
        self.about.replace(about);
    }

    /// Register an argument, returning its index in the arena.
    pub(crate) fn register(
        &mut self,
        kind: Kind,
        names: Vec<String>,
        dictionary: &Dictionary,
    ) -> Result<usize, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::NoNames);
        }

        let mut keys = Vec::with_capacity(names.len());

        for name in &names {
            dictionary.check_name(name)?;
            let key = dictionary.name_key(name);

            if self.index.contains_key(&key) || keys.contains(&key) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }

            keys.push(key);
        }

        match kind {
            Kind::Positional if self.selector.is_some() => {
                return Err(ConfigError::PositionalWithSubcommands(names[0].clone()));
            }
            Kind::SubcommandSelector if self.selector.is_some() => {
                return Err(ConfigError::DuplicateSelector(names[0].clone()));
            }
            Kind::SubcommandSelector if self.positionals().next().is_some() => {
                return Err(ConfigError::SubcommandsWithPositional(names[0].clone()));
            }
            _ => {}
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering {kind:?} {names:?}.");
        }

        let position = self.entries.len();

        for key in keys {
            self.index.insert(key, position);
        }

        if kind == Kind::SubcommandSelector {
            self.selector.replace(position);
        }

        self.entries.push(ArgumentEntry::new(kind, names));
        Ok(position)
    }

    pub(crate) fn register_positional(
        &mut self,
        name: String,
        dictionary: &Dictionary,
    ) -> Result<usize, ConfigError> {
        self.register(Kind::Positional, vec![name], dictionary)
    }

    pub(crate) fn register_selector(
        &mut self,
        name: String,
        dictionary: &Dictionary,
    ) -> Result<usize, ConfigError> {
        self.register(Kind::SubcommandSelector, vec![name], dictionary)
    }

    /// Attach a sub-command level to this level's selector.
    pub(crate) fn register_subcommand(
        &mut self,
        name: String,
        child: Schema<S>,
        dictionary: &Dictionary,
    ) -> Result<(), ConfigError> {
        assert!(
            self.selector.is_some(),
            "internal error - sub-commands require a selector"
        );
        dictionary.check_name(&name)?;
        let key = dictionary.name_key(&name);

        if self.command_index.contains_key(&key) {
            return Err(ConfigError::DuplicateSubcommand(name));
        }

        self.command_index.insert(key, self.commands.len());
        self.commands.push((name, child));
        Ok(())
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> &mut ArgumentEntry<S> {
        &mut self.entries[index]
    }

    pub(crate) fn lookup(
        &self,
        name: &str,
        dictionary: &Dictionary,
    ) -> Option<(usize, &ArgumentEntry<S>)> {
        self.index
            .get(&dictionary.name_key(name))
            .map(|index| (*index, &self.entries[*index]))
    }

    /// All entries, in registration order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, &ArgumentEntry<S>)> {
        self.entries.iter().enumerate()
    }

    pub(crate) fn positionals(&self) -> impl Iterator<Item = (usize, &ArgumentEntry<S>)> {
        self.entries()
            .filter(|(_, entry)| entry.kind() == Kind::Positional)
    }

    pub(crate) fn selector(&self) -> Option<(usize, &ArgumentEntry<S>)> {
        self.selector.map(|index| (index, &self.entries[index]))
    }

    /// Resolve a sub-command, returning its registered name and level.
    pub(crate) fn subcommand(
        &self,
        name: &str,
        dictionary: &Dictionary,
    ) -> Option<(&str, &Schema<S>)> {
        self.command_index
            .get(&dictionary.name_key(name))
            .map(|index| {
                let (command, child) = &self.commands[*index];
                (command.as_str(), child)
            })
    }

    /// All sub-commands, in registration order.
    pub(crate) fn subcommands(&self) -> impl Iterator<Item = (&str, &Schema<S>)> {
        self.commands
            .iter()
            .map(|(command, child)| (command.as_str(), child))
    }
}
