//! Commands shared by the CLI and the REPL.

use std::str::FromStr;

use tabletop_engine::{EventBindings, RollResolver, ValueReference};
use tabletop_parser::pretty::pretty_print;
use tabletop_parser::{Failure, grammars};

use crate::config::RuntimeConfig;
use crate::error::{CommandError, Result};

/// Element id that references without an id resolve against.
pub const SELF_ID: &str = "self";

/// A grammar that `tree` can show.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GrammarName {
    /// `Roll`
    Roll,
    /// `IdAttr`
    IdAttr,
    /// `IdAttrs`
    IdAttrs,
    /// `EventWithKeys`
    Event,
    /// `EventsWithKeys`
    Events,
    /// `EventAction`
    Action,
    /// `EventActions`
    Actions,
}

impl GrammarName {
    /// Every grammar name as typed on the command line.
    pub const NAMES: [&'static str; 7] = [
        "roll", "idattr", "idattrs", "event", "events", "action", "actions",
    ];

    /// Parses `input` with this grammar and renders the tree.
    ///
    /// Trailing input a successful parse left behind is reported after the tree.
    #[must_use]
    pub fn tree(self, input: &str) -> String {
        let g = grammars();
        let result = match self {
            Self::Roll => g.roll.parse(input),
            Self::IdAttr => g.id_attr.parse(input),
            Self::IdAttrs => g.id_attrs.parse(input),
            Self::Event => g.event_with_keys.parse(input),
            Self::Events => g.events_with_keys.parse(input),
            Self::Action => g.event_action.parse(input),
            Self::Actions => g.event_actions.parse(input),
        };
        let mut out = pretty_print(&result);
        if result.is_ok() && result.length() < input.len() {
            let unconsumed = Failure::Unconsumed {
                consumed: result.length(),
                total: input.len(),
            };
            out.push_str(&format!("\n{unconsumed}: {:?}", &input[result.length()..]));
        }
        out
    }
}

impl FromStr for GrammarName {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "roll" => Ok(Self::Roll),
            "idattr" => Ok(Self::IdAttr),
            "idattrs" => Ok(Self::IdAttrs),
            "event" => Ok(Self::Event),
            "events" => Ok(Self::Events),
            "action" => Ok(Self::Action),
            "actions" => Ok(Self::Actions),
            _ => Err(CommandError::UnknownGrammar(s.to_string())),
        }
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Roll dice; `None` rolls the default `d20`.
    Roll(Option<String>),
    /// Show the parse tree of `input` under a grammar.
    Tree {
        /// Which grammar to use.
        grammar: GrammarName,
        /// The text to parse.
        input: String,
    },
    /// Show references with defaults filled in.
    Ref(String),
    /// Show parsed event key specs.
    Keys(String),
    /// Validate and show event actions.
    Action(String),
    /// List the commands.
    Help,
    /// Leave the REPL.
    Quit,
}

impl Command {
    /// Command words, for completion.
    pub const WORDS: [&'static str; 8] =
        ["roll", "tree", "ref", "keys", "action", "help", "quit", "exit"];

    /// Parses a command from its words.
    ///
    /// Everything after the command word (and the grammar name, for `tree`)
    /// is taken as one argument, so list values keep their spaces.
    ///
    /// # Errors
    /// Returns an error for an unknown command or a missing argument.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = split_word(line);
        let required = |argument: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument {
                    command: Self::static_word(word),
                    argument,
                })
            } else {
                Ok(rest.to_string())
            }
        };

        match word {
            "roll" => Ok(Self::Roll((!rest.is_empty()).then(|| rest.to_string()))),
            "tree" => {
                let (grammar, input) = split_word(rest);
                if grammar.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "tree",
                        argument: "a grammar name",
                    });
                }
                Ok(Self::Tree {
                    grammar: grammar.parse()?,
                    input: input.to_string(),
                })
            }
            "ref" => required("a reference such as 'hero:hp'").map(Self::Ref),
            "keys" => required("an event list such as 'click[ctrl]'").map(Self::Keys),
            "action" => required("an action list such as 'click:roll(str)'").map(Self::Action),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    fn static_word(word: &str) -> &'static str {
        Self::WORDS
            .into_iter()
            .find(|w| *w == word)
            .unwrap_or("command")
    }
}

fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}

/// Runs commands against a roll resolver.
#[derive(Debug)]
pub struct Session {
    resolver: RollResolver,
}

impl Session {
    /// Creates a session from runtime configuration.
    #[must_use]
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            resolver: RollResolver::from_config(&config.engine),
        }
    }

    /// Runs a command and returns what to print.
    ///
    /// `Quit` prints nothing; leaving the loop is up to the caller.
    ///
    /// # Errors
    /// Returns parse and resolution errors.
    pub fn execute(&mut self, command: &Command) -> Result<String> {
        match command {
            Command::Roll(None) => Ok(self.resolver.resolve_check()?.to_string()),
            Command::Roll(Some(expr)) => Ok(self.resolver.resolve_str(expr)?.to_string()),
            Command::Tree { grammar, input } => Ok(grammar.tree(input)),
            Command::Ref(config) => Ok(ValueReference::all_from_config(config, SELF_ID)?
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            Command::Keys(config) => Ok(tabletop_parser::parse_events_with_keys(config)?
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            Command::Action(config) => {
                let bindings = EventBindings::bind(config)?;
                let lines: Vec<String> = bindings
                    .bindings()
                    .iter()
                    .map(|binding| {
                        if binding.key_spec.event.prevents_default() {
                            format!("{binding} (prevents default)")
                        } else {
                            binding.to_string()
                        }
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            Command::Help => Ok(help_text()),
            Command::Quit => Ok(String::new()),
        }
    }

    /// Parses and runs one command line.
    ///
    /// # Errors
    /// Returns command, parse and resolution errors.
    pub fn run_line(&mut self, line: &str) -> Result<String> {
        self.execute(&Command::parse(line)?)
    }
}

/// Command reference shown by `help`.
#[must_use]
pub fn help_text() -> String {
    format!(
        "\
roll [EXPR]             Roll dice, e.g. 'roll 2d6+1d4-3' (default d20)
tree GRAMMAR INPUT      Show the parse tree ({})
ref IDATTRS             Show references with defaults, e.g. 'ref :hp goblin:'
keys EVENTS             Show event key specs, e.g. 'keys click[ctrl,shift]'
action ACTIONS          Validate event actions, e.g. 'action click:roll(str,2d6)'
help                    Show this help
quit                    Leave the REPL",
        GrammarName::NAMES.join(", ")
    )
}
