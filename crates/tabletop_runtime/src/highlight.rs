//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::command::Command;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?P<dice>\b[0-9]*d[0-9]+\b)
        | (?P<number>\b[0-9]+\b)
        | (?P<event>\b(?:click|dblclick|auxclick|contextmenu)\b)
        | (?P<key>\b(?:alt|ctrl|shift)\b)
        | (?P<punct>[\[\](),:])
        | (?P<sign>[+-])
        ",
    )
    .expect("token regex init failed")
});

/// Highlighter for Tabletop commands, dice and event syntax.
#[derive(Debug, Default)]
pub struct TabletopHighlighter;

impl TabletopHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);

        // The command word, bold green when known
        let body_start = line.find(|c: char| !c.is_whitespace()).unwrap_or(line.len());
        let word_end = line[body_start..]
            .find(char::is_whitespace)
            .map_or(line.len(), |i| body_start + i);
        let word = &line[body_start..word_end];
        result.push_str(&line[..body_start]);
        if Command::WORDS.contains(&word) {
            result.push_str("\x1b[1;32m");
            result.push_str(word);
            result.push_str("\x1b[0m");
        } else {
            result.push_str(word);
        }

        let rest = &line[word_end..];
        let mut last = 0;
        for caps in TOKEN_RE.captures_iter(rest) {
            let Some(m) = caps.get(0) else { continue };
            let color = if caps.name("dice").is_some() {
                "\x1b[35m" // magenta
            } else if caps.name("number").is_some() {
                "\x1b[33m" // yellow
            } else if caps.name("event").is_some() {
                "\x1b[36m" // cyan
            } else if caps.name("key").is_some() {
                "\x1b[34m" // blue
            } else if caps.name("sign").is_some() {
                "\x1b[1;35m" // bold magenta
            } else {
                "\x1b[1m" // bold
            };
            result.push_str(&rest[last..m.start()]);
            result.push_str(color);
            result.push_str(m.as_str());
            result.push_str("\x1b[0m");
            last = m.end();
        }
        result.push_str(&rest[last..]);

        Cow::Owned(result)
    }
}
