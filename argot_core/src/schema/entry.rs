use crate::api::ValueHandler;
use crate::error::ConfigError;
use crate::model::{Bound, InvalidBound, Kind, Nargs};

/// One registered argument.
///
/// The kind and names are fixed at registration; the remaining attributes stay configurable until the first parse borrows the schema.
pub(crate) struct ArgumentEntry<S> {
    names: Vec<String>,
    kind: Kind,
    bound: Bound,
    defaults: Vec<String>,
    allowed: Vec<String>,
    display: Option<String>,
    help: Option<String>,
    // Boxed so that entries of every handler type live in one arena.
    handler: Option<Box<dyn ValueHandler<S>>>,
}

impl<S> std::fmt::Debug for ArgumentEntry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentEntry")
            .field("names", &self.names)
            .field("kind", &self.kind)
            .field("bound", &self.bound)
            .field("defaults", &self.defaults)
            .field("allowed", &self.allowed)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

impl<S> ArgumentEntry<S> {
    pub(crate) fn new(kind: Kind, names: Vec<String>) -> Self {
        assert!(!names.is_empty(), "internal error - names must be checked");
        Self {
            names,
            kind,
            bound: kind.default_bound(),
            defaults: Vec::default(),
            allowed: Vec::default(),
            display: None,
            help: None,
            handler: None,
        }
    }

    /// The primary (first registered) name.
    pub(crate) fn name(&self) -> &str {
        &self.names[0]
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn kind(&self) -> Kind {
        self.kind
    }

    pub(crate) fn bound(&self) -> Bound {
        self.bound
    }

    pub(crate) fn defaults(&self) -> &[String] {
        &self.defaults
    }

    pub(crate) fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub(crate) fn is_allowed(&self, value: &str) -> bool {
        self.allowed.is_empty() || self.allowed.iter().any(|a| a == value)
    }

    /// The name shown for this argument's value in the usage.
    pub(crate) fn display(&self) -> String {
        match &self.display {
            Some(display) => display.clone(),
            None => self
                .name()
                .trim_start_matches('-')
                .to_ascii_uppercase()
                .replace('-', "_"),
        }
    }

    pub(crate) fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(crate) fn handler(&self) -> Option<&dyn ValueHandler<S>> {
        self.handler.as_deref()
    }

    pub(crate) fn set_nargs(&mut self, nargs: Nargs) -> Result<(), ConfigError> {
        self.bound = Bound::try_from(nargs).map_err(|InvalidBound { min, max }| {
            ConfigError::InvalidCardinality {
                name: self.name().to_string(),
                min,
                max,
            }
        })?;
        Ok(())
    }

    pub(crate) fn set_defaults(&mut self, defaults: Vec<String>) {
        self.defaults = defaults;
    }

    pub(crate) fn set_allowed(&mut self, allowed: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(allowed.len());

        for value in allowed {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }

        self.allowed = unique;
    }

    pub(crate) fn set_display(&mut self, display: String) {
        self.display.replace(display);
    }

    pub(crate) fn set_help(&mut self, help: String) {
        self.help.replace(help);
    }

    pub(crate) fn set_handler(&mut self, handler: Box<dyn ValueHandler<S>>) {
        self.handler.replace(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(kind: Kind, name: &str) -> ArgumentEntry<()> {
        ArgumentEntry::new(kind, vec![name.to_string()])
    }

    #[rstest]
    #[case(Kind::Switch, Bound::Range(0, 1))]
    #[case(Kind::Valued, Bound::Range(0, 1))]
    #[case(Kind::Positional, Bound::Range(1, 1))]
    #[case(Kind::Exclusive, Bound::Range(0, 1))]
    #[case(Kind::SubcommandSelector, Bound::Range(1, 1))]
    fn default_bound(#[case] kind: Kind, #[case] expected: Bound) {
        assert_eq!(entry(kind, "x").bound(), expected);
    }

    #[test]
    fn set_nargs_inverted() {
        let mut entry = entry(Kind::Valued, "--key");
        assert_eq!(
            entry.set_nargs(Nargs::Between(2, 1)).unwrap_err(),
            ConfigError::InvalidCardinality {
                name: "--key".to_string(),
                min: 2,
                max: 1,
            }
        );
        assert_eq!(entry.bound(), Bound::Range(0, 1));
    }

    #[test]
    fn allowed() {
        let mut entry = entry(Kind::Valued, "--key");
        assert!(entry.is_allowed("anything"));

        entry.set_allowed(vec!["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(entry.allowed(), ["a".to_string(), "b".to_string()]);
        assert!(entry.is_allowed("a"));
        assert!(!entry.is_allowed("A"));
        assert!(!entry.is_allowed("c"));
    }

    #[rstest]
    #[case("--output-file", None, "OUTPUT_FILE")]
    #[case("-o", None, "O")]
    #[case("item", None, "ITEM")]
    #[case("--output", Some("PATH"), "PATH")]
    fn display_name(#[case] name: &str, #[case] display: Option<&str>, #[case] expected: &str) {
        let mut entry = entry(Kind::Valued, name);

        if let Some(display) = display {
            entry.set_display(display.to_string());
        }

        assert_eq!(entry.display(), expected);
    }
}
