//! Integration tests for REPL/CLI commands
//!
//! Tests command parsing and execution through a session.

use tabletop_engine::{EngineConfig, RollMode};
use tabletop_runtime::{Command, CommandError, GrammarName, RuntimeConfig, Session};

fn session(mode: RollMode) -> Session {
    Session::new(&RuntimeConfig::default().with_engine(EngineConfig::default().with_roll_mode(mode)))
}

#[test]
fn seeded_sessions_agree() {
    let config = RuntimeConfig::default().with_engine(EngineConfig::seeded(99));
    let a = Session::new(&config).run_line("roll 8d20").unwrap();
    let b = Session::new(&config).run_line("roll 8d20").unwrap();
    assert_eq!(a, b);
}

#[test]
fn max_roll_output() {
    assert_eq!(
        session(RollMode::Max).run_line("roll 2d6+1d4-3").unwrap(),
        "2d6[6,6]+d4[4]-3 = 13"
    );
}

#[test]
fn tree_shows_named_rules() {
    let out = session(RollMode::Min).run_line("tree event click[alt]").unwrap();
    let first_lines: Vec<&str> = out.lines().take(2).collect();
    assert_eq!(first_lines, vec!["EventWithKeys [10]", "  EventName [5]"]);
    assert!(out.contains("KeyList [5]"));
}

#[test]
fn keys_lists_each_spec() {
    assert_eq!(
        session(RollMode::Min)
            .run_line("keys click[shift,ctrl] auxclick")
            .unwrap(),
        "click[ctrl,shift]\nauxclick"
    );
}

#[test]
fn errors_surface_as_command_errors() {
    let mut session = session(RollMode::Min);
    assert!(matches!(
        session.run_line("roll 2d6+"),
        Err(CommandError::Engine(_))
    ));
    assert!(matches!(
        session.run_line("dance"),
        Err(CommandError::UnknownCommand(_))
    ));
}

#[test]
fn grammar_names_parse() {
    for name in GrammarName::NAMES {
        assert!(name.parse::<GrammarName>().is_ok());
    }
    assert_eq!(
        Command::parse("tree ACTIONS click:reset(hp)").unwrap(),
        Command::Tree {
            grammar: GrammarName::Actions,
            input: "click:reset(hp)".to_string()
        }
    );
}
