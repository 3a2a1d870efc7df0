use argot::prelude::*;
use argot::{CommandLineParser, ConfigError};

fn build() -> Result<CommandLineParser, ConfigError> {
    let mut parser = CommandLineParser::new("version");
    parser
        .exclusive(["-h", "--help"])?
        .help("Show this help message and exit.");
    parser
        .exclusive(["-V", "--version"])?
        .help("Show the version and exit.");
    parser
        .valued(["-o", "--output"])?
        .defaults(["out.txt"])
        .help("The file to write.");
    // Required, unless an exclusive flag is the only token.
    parser.positional("input")?.help("The file to read.");
    Ok(parser)
}

fn main() -> Result<(), ConfigError> {
    let parser = build()?;

    match parser.parse_env() {
        Ok(results) => {
            if results.flag("--help").unwrap_or(false) {
                println!("{}", parser.usage());
            } else if results.flag("--version").unwrap_or(false) {
                println!("version {}", env!("CARGO_PKG_VERSION"));
            } else {
                let input = results.get("input").ok().flatten().unwrap_or_default();
                let output = results.get("--output").ok().flatten().unwrap_or_default();
                println!("Copying '{input}' to '{output}'.");
            }
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }

    Ok(())
}
