use terminal_size::{terminal_size, Width};

use crate::model::{Bound, Kind};
use crate::parser::columns::{wrap, ColumnRenderer, MINIMUM_TEXT_WIDTH};
use crate::schema::{ArgumentEntry, Schema};

// Without a terminal, we'll wrap the text column here.
const DEFAULT_TEXT_WIDTH: usize = 60;
const DEFAULT_TOTAL_WIDTH: usize = 80;
// Labels wider than this take their own line.
const MAXIMUM_LEFT_WIDTH: usize = 30;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

struct Row {
    left: String,
    text: String,
}

/// Renders the usage message of a single parser level.
#[derive(Debug)]
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn render<S>(&self, program: &str, schema: &Schema<S>) -> String {
        let mut summary = vec![program.to_string()];
        let mut positionals = Vec::default();
        let mut options = Vec::default();
        let mut commands = Vec::default();

        for (_, entry) in schema.entries() {
            match entry.kind() {
                Kind::Switch | Kind::Valued | Kind::Exclusive => {
                    summary.push(option_summary(entry));
                    options.push(Row {
                        left: option_label(entry),
                        text: describe(entry, &[]),
                    });
                }
                Kind::Positional => {
                    let grammar = grammar(&entry.display(), entry.bound());

                    if !grammar.is_empty() {
                        summary.push(grammar.clone());
                    }

                    positionals.push(Row {
                        left: grammar,
                        text: describe(entry, &[]),
                    });
                }
                Kind::SubcommandSelector => {
                    let names: Vec<&str> = schema.subcommands().map(|(command, _)| command).collect();
                    summary.push(format!("{} ...", entry.display()));
                    positionals.push(Row {
                        left: entry.display(),
                        text: describe(entry, &names),
                    });
                }
            }
        }

        for (command, child) in schema.subcommands() {
            commands.push(Row {
                left: command.to_string(),
                text: child.about().unwrap_or_default().to_string(),
            });
        }

        let rows = || positionals.iter().chain(options.iter()).chain(commands.iter());
        let left = std::cmp::min(
            rows().map(|row| row.left.chars().count()).max().unwrap_or(0),
            MAXIMUM_LEFT_WIDTH,
        );
        let text = rows().map(|row| row.text.chars().count()).max().unwrap_or(0);
        let column_renderer = match self.terminal_width {
            Some(total_width) => {
                ColumnRenderer::guided(MAIN_INDENT, left, PADDING_WIDTH, text, total_width)
            }
            None => ColumnRenderer::new(
                MAIN_INDENT,
                left,
                PADDING_WIDTH,
                text.clamp(2, DEFAULT_TEXT_WIDTH),
            ),
        };

        let mut out = vec![format!("usage: {}", summary.join(" "))];

        if let Some(about) = schema.about() {
            out.push(String::default());
            let total_width = self.terminal_width.unwrap_or(DEFAULT_TOTAL_WIDTH);
            out.extend(wrap(about, std::cmp::max(total_width, MINIMUM_TEXT_WIDTH)));
        }

        for (heading, section) in [
            ("positional arguments:", &positionals),
            ("options:", &options),
            ("commands:", &commands),
        ] {
            if section.is_empty() {
                continue;
            }

            out.push(String::default());
            out.push(heading.to_string());

            for row in section {
                out.extend(column_renderer.render(&row.left, &row.text));
            }
        }

        out.join("\n")
    }
}

/// The grammar of a `display` repeated per its `bound` (ex: `ITEM [ITEM ...]`).
fn grammar(display: &str, bound: Bound) -> String {
    let min = bound.min();
    let mut parts = vec![display.to_string(); min];

    match bound.max() {
        Some(max) if max == min => {}
        Some(max) if max == min + 1 => parts.push(format!("[{display}]")),
        _ => parts.push(format!("[{display} ...]")),
    }

    parts.join(" ")
}

fn option_summary<S>(entry: &ArgumentEntry<S>) -> String {
    let mut grammar = entry.name().to_string();

    if entry.kind() == Kind::Valued {
        grammar.push(' ');
        grammar.push_str(&entry.display());
    }

    if entry.bound().is_repeatable() {
        grammar.push_str(" ...");
    }

    if entry.bound().min() > 0 {
        grammar
    } else {
        format!("[{grammar}]")
    }
}

fn option_label<S>(entry: &ArgumentEntry<S>) -> String {
    match entry.kind() {
        Kind::Valued => {
            let display = entry.display();
            entry
                .names()
                .iter()
                .map(|name| format!("{name} {display}"))
                .collect::<Vec<String>>()
                .join(", ")
        }
        _ => entry.names().join(", "),
    }
}

/// The text column: allowed values, then help, then defaults.
fn describe<S>(entry: &ArgumentEntry<S>, choices: &[&str]) -> String {
    let mut parts = Vec::default();

    if !choices.is_empty() {
        parts.push(format!("{{{}}}", choices.join(", ")));
    } else if !entry.allowed().is_empty() {
        parts.push(format!("{{{}}}", entry.allowed().join(", ")));
    }

    if let Some(help) = entry.help() {
        parts.push(help.to_string());
    }

    if !entry.defaults().is_empty() {
        parts.push(format!("(default: {})", entry.defaults().join(" ")));
    }

    parts.join(" ")
}
