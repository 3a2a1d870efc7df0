#[macro_use]
extern crate assert_matches;

use argot::prelude::*;
use argot::{
    store, CommandLineParser, ConfigError, ConversionError, Dictionary, Nargs, ParseError,
    ParseErrorKind, QueryError,
};
use rstest::rstest;

#[test]
fn switch_occurrences() {
    let mut parser = CommandLineParser::new("program");
    parser.switch(["-v", "--verbose"]).unwrap();

    let results = parser.parse_tokens(&["--verbose"]).unwrap();
    assert_eq!(results.count("-v").unwrap(), 1);
    assert_eq!(results.values("-v").unwrap(), &["true"]);

    assert_eq!(
        parser.parse_tokens(&["-v", "--verbose"]).unwrap_err(),
        ParseError::TooManyOccurrences {
            name: "-v".to_string(),
            max: 1,
        }
    );
}

#[test]
fn switch_dictionary_literal() {
    let mut parser: CommandLineParser = CommandLineParser::with_dictionary(
        "program",
        Dictionary::default()
            .with_true_literal("yes")
            .with_false_literal("no"),
    )
    .unwrap();
    parser.switch("--verbose").unwrap();

    let results = parser.parse_tokens(&["--verbose"]).unwrap();

    assert_eq!(results.get("--verbose").unwrap(), Some("yes"));
    assert!(results.flag("--verbose").unwrap());
}

#[rstest]
#[case("--arg=a", Ok("a"))]
#[case("--arg=b", Ok("b"))]
#[case("--arg=c", Err(ParseErrorKind::ValueNotAllowed))]
#[case("--arg=A", Err(ParseErrorKind::ValueNotAllowed))]
fn allowed_values(#[case] token: &str, #[case] expected: Result<&str, ParseErrorKind>) {
    let mut parser = CommandLineParser::new("program");
    parser.valued("--arg").unwrap().allowed(["a", "b"]);

    let actual = parser
        .parse_tokens(&[token])
        .map(|results| results.get("--arg").unwrap().map(str::to_string))
        .map_err(|error| error.kind());

    assert_eq!(actual, expected.map(|value| Some(value.to_string())));
}

#[test]
fn defaults_injected() {
    let mut parser = CommandLineParser::new("program");
    parser
        .valued("--arg")
        .unwrap()
        .nargs(Nargs::Any)
        .unwrap()
        .allowed(["x", "y", "z"])
        .defaults(["x", "y"]);

    let results = parser.parse_tokens(&[]).unwrap();
    assert_eq!(results.values("--arg").unwrap(), &["x", "y"]);

    let results = parser.parse_tokens(&["--arg", "z"]).unwrap();
    assert_eq!(results.values("--arg").unwrap(), &["z"]);
}

#[test]
fn raw_value_verbatim() {
    let mut parser = CommandLineParser::new("program");
    parser.valued("--k").unwrap();

    let results = parser.parse_tokens(&["--k=10kg"]).unwrap();

    assert_eq!(results.get("--k").unwrap(), Some("10kg"));
    assert_matches!(
        results.value::<u32>("--k"),
        Err(QueryError::Conversion { .. })
    );
}

#[rstest]
#[case(vec!["-v==0"], "=0")]
#[case(vec!["-v=a=b"], "a=b")]
#[case(vec!["-v", "=0"], "=0")]
#[case(vec!["-v="], "")]
fn value_separator_first_only(#[case] tokens: Vec<&str>, #[case] expected: &str) {
    let mut parser = CommandLineParser::new("program");
    parser.valued("-v").unwrap();

    let results = parser.parse_tokens(&tokens).unwrap();

    assert_eq!(results.get("-v").unwrap(), Some(expected));
}

#[test]
fn required_positional() {
    let mut parser = CommandLineParser::new("program");
    parser.positional("item").unwrap();

    assert_eq!(
        parser.parse_tokens(&[]).unwrap_err(),
        ParseError::RequiredArgumentMissing {
            name: "item".to_string(),
            provided: 0,
            expected: 1,
        }
    );

    let results = parser.parse_tokens(&["abc"]).unwrap();
    assert_eq!(results.values("item").unwrap(), &["abc"]);
}

fn version_parser() -> CommandLineParser {
    let mut parser = CommandLineParser::new("program");
    parser.exclusive("--version").unwrap();
    parser.switch("--verbose").unwrap();
    parser
        .positional("files")
        .unwrap()
        .nargs(Nargs::AtLeastOne)
        .unwrap();
    parser
}

#[test]
fn exclusive_short_circuit() {
    let parser = version_parser();

    let results = parser.parse_tokens(&["--version"]).unwrap();

    assert_eq!(results.count("--version").unwrap(), 1);
    assert_eq!(results.count("--verbose").unwrap(), 0);
    assert_eq!(results.count("files").unwrap(), 0);
}

#[rstest]
#[case(vec!["--version", "--verbose"])]
#[case(vec!["--verbose", "--version"])]
#[case(vec!["a.txt", "--version"])]
#[case(vec!["--verbose", "a.txt", "--version"])]
fn exclusive_combined(#[case] tokens: Vec<&str>) {
    let parser = version_parser();

    assert_matches!(
        parser.parse_tokens(&tokens),
        Err(ParseError::SyntaxError { token, .. }) if token == "--version"
    );
}

#[test]
fn exclusive_not_alone() {
    let parser = version_parser();

    assert_eq!(
        parser.parse_tokens(&["--verbose"]).unwrap_err().kind(),
        ParseErrorKind::RequiredArgumentMissing
    );
}

fn subcommand_parser() -> CommandLineParser {
    let mut parser = CommandLineParser::new("program");
    parser.switch("--bool").unwrap();
    parser.exclusive("--help").unwrap();
    parser
        .subcommands("command")
        .unwrap()
        .command("cmd1", |sub| {
            sub.switch("--switch")?;
            sub.exclusive("--help")?;
            sub.positional("item")?.nargs(Nargs::Any)?;
            Ok(())
        })
        .unwrap()
        .command("cmd2", |sub| {
            sub.valued("--key")?;
            Ok(())
        })
        .unwrap();
    parser
}

#[test]
fn subcommand_path() {
    let parser = subcommand_parser();

    let results = parser.parse_tokens(&["--bool", "cmd1", "--switch"]).unwrap();

    assert_eq!(results.count("--bool").unwrap(), 1);
    assert_eq!(results.count("cmd1 --switch").unwrap(), 1);
    assert_eq!(results.get("command").unwrap(), Some("cmd1"));
    assert_eq!(results.count("cmd2 --key").unwrap(), 0);
    assert_eq!(results.program(), "program cmd1");
}

#[test]
fn subcommand_path_separator() {
    let mut parser: CommandLineParser = CommandLineParser::with_dictionary(
        "program",
        Dictionary::default().with_path_separator("."),
    )
    .unwrap();
    parser
        .subcommands("command")
        .unwrap()
        .command("cmd1", |sub| {
            sub.switch("--switch")?;
            Ok(())
        })
        .unwrap();

    let results = parser.parse_tokens(&["cmd1", "--switch"]).unwrap();

    assert_eq!(results.count("cmd1.--switch").unwrap(), 1);
    assert_matches!(
        results.count("cmd1 --switch"),
        Err(QueryError::UnknownArgument(_))
    );
}

#[rstest]
#[case(vec!["--help"], "--help")]
#[case(vec!["cmd1", "--help"], "cmd1 --help")]
fn subcommand_exclusive(#[case] tokens: Vec<&str>, #[case] fired: &str) {
    let parser = subcommand_parser();

    let results = parser.parse_tokens(&tokens).unwrap();

    assert_eq!(results.count(fired).unwrap(), 1);
    assert_eq!(results.count("--bool").unwrap(), 0);
}

#[rstest]
#[case(vec![], ParseError::SubparserNameMissing { name: "command".to_string() })]
#[case(
    vec!["--bool", "cmd3"],
    ParseError::SubparserNotFound { name: "command".to_string(), value: "cmd3".to_string(), offset: 1 }
)]
#[case(
    vec!["cmd2", "--key"],
    ParseError::ValueMissing { name: "cmd2 --key".to_string() }
)]
fn subcommand_errors(#[case] tokens: Vec<&str>, #[case] expected: ParseError) {
    let parser = subcommand_parser();

    assert_eq!(parser.parse_tokens(&tokens).unwrap_err(), expected);
}

#[rstest]
#[case("--unknown")]
#[case("cmd1 --unknown")]
#[case("cmd3 --switch")]
#[case("--switch")]
fn unknown_name(#[case] name: &str) {
    let parser = subcommand_parser();
    let expected = QueryError::UnknownArgument(name.to_string());

    assert_eq!(parser.unparsed().count(name).unwrap_err(), expected);

    let results = parser.parse_tokens(&["cmd2"]).unwrap();
    assert_eq!(results.count(name).unwrap_err(), expected);
    assert_eq!(results.get(name).unwrap_err(), expected);
}

#[derive(Debug, Default)]
struct Settings {
    port: Option<u16>,
    names: Vec<String>,
}

#[test]
fn handlers() {
    let mut parser: CommandLineParser<Settings> = CommandLineParser::with_storage("program");
    parser
        .valued("--port")
        .unwrap()
        .handler(store(|settings: &mut Settings, port: u16| {
            settings.port.replace(port);
        }));
    parser
        .positional("name")
        .unwrap()
        .nargs(Nargs::Any)
        .unwrap()
        .handler(store(|settings: &mut Settings, name: String| {
            settings.names.push(name)
        }));

    let mut settings = Settings::default();
    parser
        .parse_tokens_into(&["--port", "8080", "a", "b"], &mut settings)
        .unwrap();
    assert_eq!(settings.port, Some(8080));
    assert_eq!(settings.names, vec!["a", "b"]);

    let mut settings = Settings::default();
    assert_matches!(
        parser.parse_tokens_into(&["--port", "http"], &mut settings),
        Err(ParseError::ConversionFailed {
            name,
            value,
            source: ConversionError::InvalidConversion { .. },
        }) if name == "--port" && value == "http"
    );
    assert_eq!(settings.port, None);
}

#[rstest]
#[case(Nargs::Precisely(2), vec!["a"], Err(ParseErrorKind::RequiredArgumentMissing))]
#[case(Nargs::Precisely(2), vec!["a", "b"], Ok(2))]
#[case(Nargs::Precisely(2), vec!["a", "b", "c"], Err(ParseErrorKind::SyntaxError))]
#[case(Nargs::AtMost(1), vec![], Ok(0))]
#[case(Nargs::Between(1, 3), vec!["a", "b", "c"], Ok(3))]
fn positional_cardinality(
    #[case] nargs: Nargs,
    #[case] tokens: Vec<&str>,
    #[case] expected: Result<usize, ParseErrorKind>,
) {
    let mut parser = CommandLineParser::new("program");
    parser.positional("item").unwrap().nargs(nargs).unwrap();

    let actual = parser
        .parse_tokens(&tokens)
        .map(|results| results.count("item").unwrap())
        .map_err(|error| error.kind());

    assert_eq!(actual, expected);
}

#[test]
fn config_errors() {
    let mut parser = CommandLineParser::new("program");
    parser.switch(["-v", "--verbose"]).unwrap();
    parser.positional("item").unwrap();

    assert_eq!(
        parser.valued("--verbose").unwrap_err(),
        ConfigError::DuplicateName("--verbose".to_string())
    );
    assert_eq!(
        parser.switch(Vec::<String>::default()).unwrap_err(),
        ConfigError::NoNames
    );
    assert_matches!(
        parser.valued("--key").unwrap().nargs(Nargs::Between(3, 1)),
        Err(ConfigError::InvalidCardinality { min: 3, max: 1, .. })
    );
    assert_eq!(
        parser.subcommands("command").unwrap_err(),
        ConfigError::SubcommandsWithPositional("command".to_string())
    );
    assert_matches!(
        CommandLineParser::<()>::with_dictionary(
            "program",
            Dictionary::default().with_value_separator("")
        ),
        Err(ConfigError::InvalidDictionary(_))
    );
}

#[test]
fn usage() {
    let parser = subcommand_parser();

    let usage = parser.usage_for("cmd1").unwrap();

    assert!(usage.starts_with("usage: program cmd1"), "{usage}");
    assert!(usage.contains("--switch"), "{usage}");
    assert!(parser.usage().contains("cmd1"));
}
