//! `argot` is a schema driven command line parser for Rust.
//!
//! A program registers its arguments once, into a schema, and `argot` parses the command line tokens against it.
//! The design concerns, in order of priority:
//! * *Precise, predictable syntax*:
//! A small set of disambiguation rules (listed in **Cli Semantics** below) decides how every token is matched.
//! There are no heuristics, and no token is ever silently dropped.
//! * *Sub-command paradigm*:
//! Any parser level may branch into named sub-commands, each with its own arguments, to any depth.
//! * *Exclusive flags*:
//! Flags like `--help` and `--version` apply on their own, without tripping over the required arguments of the program.
//! * *Typed, domain sensitive values*:
//! Values are converted, validated, and stored by *value handlers* during the parse, and the parse fails on the first rejected value.
//! The results may also be queried after the parse, raw or typed.
//! * *Structured errors*:
//! Configuration, parse, and query errors are distinct enums, each carrying the offending name and/or value.
//!
//! # Usage
//! This page includes a few demos on using `argot`.
//! More examples are outlined in [the source](https://github.com/argot-rs/argot/tree/main/demos).
//!
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! ```console
//! $ summer -h
//! usage: summer [-h] ITEM [ITEM ...]
//!
//! Sum the items.
//!
//! positional arguments:
//!  ITEM [ITEM ...]   The items to sum.
//!
//! options:
//!  -h, --help        Show this help message and exit.
//!
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer
//! Parse error: not enough values provided to 'item' (provided=0, expected=1).
//!
//! $ summer 1 blah
//! Parse error: cannot accept 'blah' for 'item': cannot convert 'blah' to u32.
//! ```
//!
//! # Builder Api
//! Configure `argot` by starting with a [`CommandLineParser`] and registering arguments via the [`Register`](prelude::Register) trait.
//! There are five kinds of arguments:
//! * *Switch* ([`Register::switch`](prelude::Register::switch)): a by-name flag which takes no value (ex: `--verbose`).
//! Each occurrence records the dictionary's true literal.
//! * *Valued* ([`Register::valued`](prelude::Register::valued)): a by-name argument which takes a value (ex: `--key value` or `--key=value`).
//! * *Positional* ([`Register::positional`](prelude::Register::positional)): an argument matched by position.
//! * *Exclusive* ([`Register::exclusive`](prelude::Register::exclusive)): a flag which only applies as the sole token (ex: `--help`).
//! * *Sub-command selector* ([`Register::subcommands`](prelude::Register::subcommands)): the argument whose value selects a sub-command.
//!
//! Each argument has a cardinality (see [`Nargs`]), which bounds how many times it may occur.
//! By-name arguments default to at most once, and positionals to precisely once.
//! Optionally, an argument may be configured with default values, a set of allowed values, help text, and a value handler.
//!
//! ### Value Handlers
//! A [`ValueHandler`] receives every raw value matched to its argument, along with a caller defined storage `S`.
//! `argot` provides handlers for the common cases: [`store`] (convert via [`std::str::FromStr`], then store), [`store_bool`], [`Validate`], and [`check`].
//! Any closure `Fn(&str, &Dictionary, &mut S) -> Result<(), ConversionError>` is also a handler.
//!
//! A value is only recorded after its handler accepts it.
//! If the handler rejects the value, the parse fails with [`ParseError::ConversionFailed`].
//!
//! ### Sub-commands
//! To setup a sub-command based Cli, register a selector on the parser, then add each sub-command with [`SubcommandHandle::command`].
//! The sub-command's arguments are registered inside the setup function, in exactly the same way as on the root parser.
//!
//! ```no_run
#![doc = include_str!("../demos/sub_command.rs")]
//! ```
//!
//! ```console
//! $ notes add --help
//! usage: notes add [--help] TEXT [TEXT ...]
//!
//! Add a note.
//!
//! positional arguments:
//!  TEXT [TEXT ...]
//!
//! options:
//!  --help            Show this help message and exit.
//!
//! $ notes -v add buy milk
//! Used sub-command 'add'.
//! Notes { verbose: true, command: "add", text: ["buy", "milk"], limit: None }
//!
//! $ notes remove
//! Parse error: unknown sub-command 'remove' for 'command'.
//! ```
//!
//! ### Results
//! The parse returns [`ParseResults`], queried by any registered alias.
//! Arguments of a sub-command are named by their path (ex: `"add text"`), joined with the dictionary's path separator.
//!
//! ```
//! use argot::prelude::*;
//! use argot::{CommandLineParser, Nargs};
//!
//! let mut parser = CommandLineParser::new("program");
//! parser.switch(["-v", "--verbose"]).unwrap();
//! parser.valued("--size").unwrap().nargs(Nargs::Any).unwrap();
//! parser
//!     .subcommands("command")
//!     .unwrap()
//!     .command("add", |sub| {
//!         sub.positional("text")?.nargs(Nargs::AtLeastOne)?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let results = parser
//!     .parse_tokens(&["-v", "--size=1", "--size", "2", "add", "a", "b"])
//!     .unwrap();
//!
//! assert_eq!(results.program(), "program add");
//! assert!(results.flag("-v").unwrap());
//! assert_eq!(results.all::<u32>("--size").unwrap(), vec![1, 2]);
//! assert_eq!(results.values("add text").unwrap(), &["a", "b"]);
//! ```
//!
//! # Cli Semantics
//! `argot` parses the Cli tokens according to the following set of rules.
//!
//! * When the tokens are precisely one exclusive argument, optionally preceded by the sub-command path leading to its level, that argument applies and nothing else is parsed.
//! For example, `program cmd1 --help` applies `--help` of `cmd1`, even though the program has required arguments.
//! Otherwise, exclusive arguments are a syntax error.
//! * Each level first matches its by-name arguments, stopping at the first token which isn't one.
//! So, by-name arguments must precede the positionals (or the sub-command) of their level.
//! * A valued argument takes the following token as its value, whatever it is.
//! For example, `--key --key` matches the value `--key`.
//! * The key-value pair of a valued argument may be joined with the value separator (default `=`).
//! Only the first separator splits the token.
//! For example, `--key=123=456` is equivalent to `--key 123=456`.
//! * Positionals consume the remaining tokens in registration order, each up to its maximum cardinality.
//! Any token left over is a syntax error.
//! * A sub-command selector consumes the token after the by-name arguments, and all further tokens belong to the selected sub-command.
//! The level is completed (defaults applied, minimums checked) before descending.
//! * Defaults apply to arguments which did not occur at all.
//! Defaults are subject to the same allowed values and value handlers as the Cli input.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events for the parse.
pub use argot_core::*;
