use crate::constant::*;
use crate::error::ConfigError;

/// The literals the parser consults while parsing, along with its name comparison policy.
///
/// A dictionary is configured once and handed to [`CommandLineParser::with_dictionary`](crate::CommandLineParser::with_dictionary).
///
/// ### Example
/// ```
/// # use argot_core as argot;
/// use argot::Dictionary;
///
/// let dictionary = Dictionary::default()
///     .with_value_separator(":")
///     .with_case_sensitive(false);
///
/// assert_eq!(dictionary.true_literal(), "true");
/// assert_eq!(dictionary.value_separator(), ":");
/// assert!(!dictionary.case_sensitive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    true_literal: String,
    false_literal: String,
    value_separator: String,
    path_separator: String,
    case_sensitive: bool,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self {
            true_literal: TRUE_LITERAL.to_string(),
            false_literal: FALSE_LITERAL.to_string(),
            value_separator: VALUE_SEPARATOR.to_string(),
            path_separator: PATH_SEPARATOR.to_string(),
            case_sensitive: true,
        }
    }
}

impl Dictionary {
    /// Set the literal recorded for switches (and exclusive flags).
    pub fn with_true_literal(mut self, literal: impl Into<String>) -> Self {
        self.true_literal = literal.into();
        self
    }

    /// Set the literal understood as `false` by the bool converters.
    pub fn with_false_literal(mut self, literal: impl Into<String>) -> Self {
        self.false_literal = literal.into();
        self
    }

    /// Set the separator of the `name=value` syntax.
    pub fn with_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.value_separator = separator.into();
        self
    }

    /// Set the separator joining sub-command paths when querying results (ex: `cmd1 --switch`).
    pub fn with_path_separator(mut self, separator: impl Into<String>) -> Self {
        self.path_separator = separator.into();
        self
    }

    /// Set whether argument and sub-command names are compared case sensitively.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// The literal recorded for switches.
    pub fn true_literal(&self) -> &str {
        &self.true_literal
    }

    /// The literal understood as `false`.
    pub fn false_literal(&self) -> &str {
        &self.false_literal
    }

    /// The separator of the `name=value` syntax.
    pub fn value_separator(&self) -> &str {
        &self.value_separator
    }

    /// The separator of sub-command paths.
    pub fn path_separator(&self) -> &str {
        &self.path_separator
    }

    /// Whether names are compared case sensitively.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Check that the dictionary can be used to parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.value_separator.is_empty() {
            return Err(ConfigError::InvalidDictionary("empty value separator"));
        }

        if self.path_separator.is_empty() {
            return Err(ConfigError::InvalidDictionary("empty path separator"));
        }

        if self.true_literal.is_empty() || self.false_literal.is_empty() {
            return Err(ConfigError::InvalidDictionary("empty boolean literal"));
        }

        if self.name_key(&self.true_literal) == self.name_key(&self.false_literal) {
            return Err(ConfigError::InvalidDictionary(
                "boolean literals must be distinct",
            ));
        }

        Ok(())
    }

    /// Resolve a boolean literal.
    pub fn parse_bool(&self, token: &str) -> Option<bool> {
        let key = self.name_key(token);

        if key == self.name_key(&self.true_literal) {
            Some(true)
        } else if key == self.name_key(&self.false_literal) {
            Some(false)
        } else {
            None
        }
    }

    /// The lookup key for a name under this dictionary's case sensitivity.
    pub(crate) fn name_key(&self, name: &str) -> String {
        if self.case_sensitive {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }

    pub(crate) fn check_name(&self, name: &str) -> Result<(), ConfigError> {
        let reason = if name.is_empty() {
            Some("names cannot be empty")
        } else if name.chars().any(char::is_whitespace) {
            Some("names cannot contain whitespace")
        } else if name.contains(self.value_separator.as_str()) {
            Some("names cannot contain the value separator")
        } else if name.contains(self.path_separator.as_str()) {
            Some("names cannot contain the path separator")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ConfigError::InvalidName {
                name: name.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Split a `name=value` token at its first separator.
    pub(crate) fn split_value<'t>(&self, token: &'t str) -> Option<(&'t str, &'t str)> {
        token.split_once(self.value_separator.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-v=0", Some(("-v", "0")))]
    #[case("-v==0", Some(("-v", "=0")))]
    #[case("--key=10kg", Some(("--key", "10kg")))]
    #[case("--key=", Some(("--key", "")))]
    #[case("--key", None)]
    fn split_value(#[case] token: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(Dictionary::default().split_value(token), expected);
    }

    #[test]
    fn split_value_custom() {
        let dictionary = Dictionary::default().with_value_separator("::");
        assert_eq!(dictionary.split_value("k::a::b"), Some(("k", "a::b")));
        assert_eq!(dictionary.split_value("k=a"), None);
    }

    #[rstest]
    #[case("--flag", true)]
    #[case("-f", true)]
    #[case("", false)]
    #[case("--my flag", false)]
    #[case("--my\tflag", false)]
    #[case("--key=value", false)]
    fn check_name(#[case] name: &str, #[case] expected_ok: bool) {
        assert_eq!(Dictionary::default().check_name(name).is_ok(), expected_ok);
    }

    #[test]
    fn check_name_path_separator() {
        let dictionary = Dictionary::default().with_path_separator("/");
        assert_matches!(
            dictionary.check_name("a/b"),
            Err(ConfigError::InvalidName { .. })
        );
    }

    #[rstest]
    #[case(true, "true", Some(true))]
    #[case(true, "false", Some(false))]
    #[case(true, "TRUE", None)]
    #[case(false, "TRUE", Some(true))]
    #[case(false, "False", Some(false))]
    #[case(true, "yes", None)]
    fn parse_bool(#[case] case_sensitive: bool, #[case] token: &str, #[case] expected: Option<bool>) {
        let dictionary = Dictionary::default().with_case_sensitive(case_sensitive);
        assert_eq!(dictionary.parse_bool(token), expected);
    }

    #[test]
    fn validate() {
        Dictionary::default().validate().unwrap();
        assert_matches!(
            Dictionary::default().with_value_separator("").validate(),
            Err(ConfigError::InvalidDictionary(_))
        );
        assert_matches!(
            Dictionary::default().with_path_separator("").validate(),
            Err(ConfigError::InvalidDictionary(_))
        );
        assert_matches!(
            Dictionary::default()
                .with_case_sensitive(false)
                .with_false_literal("TRUE")
                .validate(),
            Err(ConfigError::InvalidDictionary(_))
        );
    }
}
