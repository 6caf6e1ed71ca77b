//! Terminal session engine for folio.
//!
//! A session tracks the prompt line, a bounded command history with
//! circular navigation, and an ordered output log. Submitting the prompt
//! echoes it, records it, and dispatches it against a fixed vocabulary
//! (`help`, `clear`, `profile`, `projects`). Bad input never fails: it
//! becomes an error entry in the log.

mod buffer;
mod commands;
mod history;
mod interpreter;
mod output;
mod session;

/// The uncommitted prompt line.
pub use buffer::InputBuffer;
/// Help catalog rows and their plain-text rendering.
pub use commands::{HelpTopic, help_lines, help_topics};
/// Bounded, circularly navigable command history.
pub use history::HistoryRing;
/// Command vocabulary, errors, and the submit processor.
pub use interpreter::{
    CommandError, CommandKind, Environment, ErrorKind, NoopObserver, ProcessObserver, Processor,
    Settled, is_recognized, list_commands, normalize, resolve, vocabulary,
};
/// Output log entries and the log itself.
pub use output::{EntryBody, OutputEntry, OutputLog, Placement, RenderKind};
/// Per-visitor session state and its renderable snapshot.
pub use session::{HistoryItem, INTERRUPT_MARKER, SessionSnapshot, TerminalSession};
