//! Indented tree formatter for parsed expressions.
//!
//! Rides the parser's diagnostic `walk` visitor; evaluation never comes
//! through here.

use krill_parser::{Expr, walk};

/// Format an expression as an indented `[Kind: value]` tree, one node per
/// line, children indented under their call.
pub fn format_expr_tree(expr: &Expr) -> String {
    let mut lines = Vec::new();

    walk(expr, &mut |node, depth| {
        let indent = "  ".repeat(depth);
        let line = match node {
            Expr::Call { name, .. } => format!("{indent}[Function: {name}]"),
            Expr::Identifier { name, .. } => format!("{indent}[Identifier: {name}]"),
            Expr::Literal { value, .. } => format!("{indent}[{}: {}]", value.kind, value.text),
        };
        lines.push(line);
    });

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use krill_parser::parse_line;

    #[test]
    fn test_leaf_formats_on_one_line() {
        let expr = parse_line("42").unwrap();
        assert_eq!(format_expr_tree(&expr), "[Number: 42]");
    }

    #[test]
    fn test_nested_call_tree() {
        let expr = parse_line("$f($g(a, 1), \"x\")").unwrap();
        assert_eq!(
            format_expr_tree(&expr),
            "[Function: f]\n  [Function: g]\n    [Identifier: a]\n    [Number: 1]\n  [String: x]"
        );
    }
}
