//! Call-marker highlighting for echoed source lines.
//!
//! Everything from a `$` up to the following `(` is the name of a call;
//! the echo renders that run in bright cyan so call structure stands out
//! in plain terminals.

const CYAN: &str = "\x1b[36;1m";
const RESET: &str = "\x1b[0m";

/// Render a source line with ANSI call-marker highlighting.
pub fn highlight_line(line: &str) -> String {
    let mut highlighted = String::with_capacity(line.len());
    let mut in_marker = false;

    for ch in line.chars() {
        if ch == '$' && !in_marker {
            highlighted.push_str(CYAN);
            in_marker = true;
        } else if ch == '(' && in_marker {
            highlighted.push_str(RESET);
            in_marker = false;
        }
        highlighted.push(ch);
    }

    if in_marker {
        highlighted.push_str(RESET);
    }

    highlighted
}
