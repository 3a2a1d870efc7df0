#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_TEXT_WIDTH: usize = 17;

/// Renders rows of `left` labels beside wrapped `text`.
///
/// A label wider than the left column takes a line of its own, with the text starting on the next line.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    left: usize,
    padding: usize,
    text: usize,
}

impl ColumnRenderer {
    /// Produce a renderer based off the provided widths.
    pub(crate) fn new(indent: usize, left: usize, padding: usize, text: usize) -> Self {
        // padding must be at least 1, and text at least 2 (so we can hyphenate)
        assert!(padding >= 1, "internal error - padding must be at least 1");
        assert!(text >= 2, "internal error - text must be at least 2");

        Self {
            indent,
            left,
            padding,
            text,
        }
    }

    /// Produce a renderer based off the provided widths and the total width available.
    /// This renderer will use a heuristic to chose the text width.
    pub(crate) fn guided(
        indent: usize,
        left: usize,
        padding: usize,
        text: usize,
        total_width: usize,
    ) -> Self {
        let non_text = indent + left + padding;
        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_text = std::cmp::max(text, MINIMUM_TEXT_WIDTH);

        if guided_text + non_text <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_text} and text fit within the target total {target_total_width}.  Selecting text: {guided_text}.");
            }

            Self::new(indent, left, padding, guided_text)
        } else if non_text < total_width {
            let calculated_text = std::cmp::max(total_width - non_text, MINIMUM_TEXT_WIDTH);

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_text} fit within the total {total_width}.  Selecting text: {calculated_text}.");
            }

            Self::new(indent, left, padding, calculated_text)
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_text} do not fit within the total {total_width}.  Selecting text: {MINIMUM_TEXT_WIDTH}.");
            }

            Self::new(indent, left, padding, MINIMUM_TEXT_WIDTH)
        }
    }

    pub(crate) fn render(&self, left: &str, text: &str) -> Vec<String> {
        let indent = self.indent;
        let left_width = self.left;
        let padding = format!("{:width$}", "", width = self.padding);
        let parts = wrap(text, self.text);
        let mut out = Vec::default();

        if parts.is_empty() {
            out.push(format!("{:indent$}{left}", ""));
            return out;
        }

        let mut parts = parts.into_iter();

        if left.chars().count() > left_width {
            out.push(format!("{:indent$}{left}", ""));
        } else if let Some(first) = parts.next() {
            out.push(format!("{:indent$}{left:left_width$}{padding}{first}", ""));
        }

        for part in parts {
            out.push(format!("{:indent$}{:left_width$}{padding}{part}", "", ""));
        }

        out
    }
}

/// Wrap a paragraph at the `width`, hyphenating words which are too long for a line of their own.
pub(crate) fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}
