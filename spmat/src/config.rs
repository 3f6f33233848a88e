//! Configuration for reading matrix files

/// Options controlling how matrix files are read
#[derive(Debug, Clone, Default)]
pub struct ReadConfig {
    /// Print each accepted entry to stderr while parsing
    pub echo_entries: bool,
}

impl ReadConfig {
    /// Create a config that reads silently
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable per-entry tracing on stderr
    pub fn with_echo_entries(mut self, echo_entries: bool) -> Self {
        self.echo_entries = echo_entries;
        self
    }

    /// Whether per-entry tracing is enabled
    pub fn echo_entries(&self) -> bool {
        self.echo_entries
    }
}
