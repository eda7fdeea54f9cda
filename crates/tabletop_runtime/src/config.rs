//! Configuration for the REPL and CLI.

use tabletop_engine::EngineConfig;

/// Configuration for an interactive or one-shot run.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Primary REPL prompt.
    pub prompt: String,

    /// Whether the REPL prints its welcome banner.
    pub show_banner: bool,

    /// Install a tracing subscriber even when `RUST_LOG` is unset.
    pub trace: bool,

    /// Roll mode, seed and limits.
    pub engine: EngineConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            prompt: "🎲> ".to_string(),
            show_banner: true,
            trace: false,
            engine: EngineConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to enable tracing output.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Builder method to set the engine configuration.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}
