use argot::prelude::*;
use argot::{store, CommandLineParser, ConfigError, Nargs};

#[derive(Debug, Default)]
struct Summer {
    items: Vec<u32>,
}

fn build() -> Result<CommandLineParser<Summer>, ConfigError> {
    let mut parser = CommandLineParser::with_storage("summer");
    parser.about("Sum the items.");
    parser
        .exclusive(["-h", "--help"])?
        .help("Show this help message and exit.");
    parser
        .positional("item")?
        .nargs(Nargs::AtLeastOne)?
        .help("The items to sum.")
        .handler(store(|summer: &mut Summer, item: u32| summer.items.push(item)));
    Ok(parser)
}

fn main() -> Result<(), ConfigError> {
    let parser = build()?;
    let mut summer = Summer::default();

    match parser.parse_env_into(&mut summer) {
        Ok(results) if results.flag("--help").unwrap_or(false) => {
            println!("{}", parser.usage());
        }
        Ok(_) => {
            let sum: u32 = summer.items.iter().sum();
            println!("Sum: {sum}");
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }

    Ok(())
}
