//! The main REPL implementation.

use std::io::{self, Write};

use tracing::debug;

use crate::command::{Command, Session};
use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor, brackets_open};
use crate::error::{CommandError, Result};

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Command state (roll resolver).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for unclosed brackets).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, config: &RuntimeConfig) -> Self {
        Self {
            editor,
            session: Session::new(config),
            show_banner: config.show_banner,
            prompt: config.prompt.clone(),
            continuation_prompt: ".. ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while let Some(output) = self.read_eval()? {
            if !output.is_empty() {
                println!("{output}");
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Reads and runs one command.
    ///
    /// Returns `Ok(None)` to exit. Command errors are printed, not returned.
    fn read_eval(&mut self) -> Result<Option<String>> {
        let Some(input) = self.read_input()? else {
            return Ok(None);
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Some(String::new()));
        }

        self.editor.add_history(&input);

        match Command::parse(trimmed) {
            Ok(Command::Quit) => Ok(None),
            Ok(command) => match self.session.execute(&command) {
                Ok(output) => Ok(Some(output)),
                Err(e) => {
                    self.print_error(&e);
                    Ok(Some(String::new()))
                }
            },
            Err(e) => {
                self.print_error(&e);
                Ok(Some(String::new()))
            }
        }
    }

    /// Reads a line, continuing while brackets are unclosed. Continuation
    /// lines are appended without a separator.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    input.push_str(&line);
                    if !brackets_open(&input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    debug!(input = %input, "end of input inside brackets");
                    return Err(CommandError::Editor(
                        "unexpected EOF inside brackets".to_string(),
                    ));
                }
            }
        }
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &CommandError) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mTabletop\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' for commands. Use Ctrl+D to exit.\n");

        if let Err(err) = io::stdout().flush() {
            debug!(error = %err, "banner flush failed");
        }
    }
}
