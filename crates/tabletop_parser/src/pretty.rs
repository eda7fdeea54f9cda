//! Pretty-printer for parse trees.
//!
//! Renders one node per line, children indented beneath their parent:
//!
//! ```
//! use tabletop_parser::{grammars, pretty::pretty_print};
//!
//! let tree = grammars().roll.parse("d6");
//! let text = pretty_print(&tree);
//! assert!(text.starts_with("Roll [2]"));
//! ```

use crate::result::{Child, ParseResult};

/// Configuration for pretty-printing.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
    /// Whether to print nodes that consumed no input, such as absent optionals.
    pub show_empty: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_empty: true,
        }
    }
}

/// Pretty-print a parse tree to a string.
#[must_use]
pub fn pretty_print(tree: &ParseResult) -> String {
    pretty_print_with_config(tree, &PrettyConfig::default())
}

/// Pretty-print a parse tree with custom configuration.
#[must_use]
pub fn pretty_print_with_config(tree: &ParseResult, config: &PrettyConfig) -> String {
    let mut output = String::new();
    print_node(tree, config, 0, &mut output);
    // Drop the final newline.
    output.pop();
    output
}

fn print_node(node: &ParseResult, config: &PrettyConfig, depth: usize, out: &mut String) {
    let indent = " ".repeat(depth * config.indent_width);
    match node.failure_reason() {
        Some(failure) => {
            out.push_str(&format!("{indent}{} FAILED: {failure}\n", node.producer()));
        }
        None => {
            out.push_str(&format!("{indent}{} [{}]\n", node.producer(), node.length()));
        }
    }

    let child_indent = " ".repeat((depth + 1) * config.indent_width);
    for child in node.children() {
        match child {
            Child::Text(text) => {
                out.push_str(&format!("{child_indent}{text:?}\n"));
            }
            Child::Node(child) if child.length() == 0 && child.is_ok() && !config.show_empty => {}
            Child::Node(child) => print_node(child, config, depth + 1, out),
        }
    }
}
