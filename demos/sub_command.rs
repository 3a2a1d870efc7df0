use argot::prelude::*;
use argot::{store, store_bool, CommandLineParser, ConfigError, Nargs, ParseResults};

#[derive(Debug, Default)]
struct Notes {
    verbose: bool,
    command: String,
    text: Vec<String>,
    limit: Option<usize>,
}

fn build() -> Result<CommandLineParser<Notes>, ConfigError> {
    let mut parser = CommandLineParser::with_storage("notes");
    parser.about("Keep short notes.");
    parser.exclusive("--help")?.help("Show this help message and exit.");
    parser
        .switch(["-v", "--verbose"])?
        .help("Explain what is being done.")
        .handler(store_bool(|notes: &mut Notes, verbose| notes.verbose = verbose));
    parser
        .subcommands("command")?
        .help("The action to take.")
        .handler(store(|notes: &mut Notes, command: String| notes.command = command))
        .command("add", |sub| {
            sub.about("Add a note.");
            sub.exclusive("--help")?.help("Show this help message and exit.");
            sub.positional("text")?
                .nargs(Nargs::AtLeastOne)?
                .handler(store(|notes: &mut Notes, word: String| notes.text.push(word)));
            Ok(())
        })?
        .command("list", |sub| {
            sub.about("List the notes.");
            sub.exclusive("--help")?.help("Show this help message and exit.");
            sub.valued(["-n", "--limit"])?
                .help("Show at most this many notes.")
                .handler(store(|notes: &mut Notes, limit: usize| notes.limit = Some(limit)));
            Ok(())
        })?;
    Ok(parser)
}

/// The sub-command path whose `--help` applied, if any.
fn help_path(results: &ParseResults<'_, Notes>) -> Option<String> {
    let path = results.selected().join(" ");
    let name = if path.is_empty() {
        "--help".to_string()
    } else {
        format!("{path} --help")
    };

    match results.flag(&name) {
        Ok(true) => Some(path),
        _ => None,
    }
}

fn main() -> Result<(), ConfigError> {
    let parser = build()?;
    let mut notes = Notes::default();

    match parser.parse_env_into(&mut notes) {
        Ok(results) => match help_path(&results) {
            Some(path) => match parser.usage_for(&path) {
                Ok(usage) => println!("{usage}"),
                Err(error) => eprintln!("{error}"),
            },
            None => {
                println!("Used sub-command '{}'.", notes.command);
                println!("{notes:?}");
            }
        },
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }

    Ok(())
}
