//! Renderer-agnostic terminal input events.
//!
//! Every front end maps its native keyboard handling to these variants. The
//! session engine never sees raw key codes.

use serde::{Deserialize, Serialize};

/// A discrete user input event delivered to a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalEvent {
    /// Character typed into the prompt.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Enter: submit the current input.
    Submit,
    /// Arrow up: recall an older history entry.
    HistoryUp,
    /// Arrow down: recall a newer history entry.
    HistoryDown,
    /// Ctrl-C: abandon the current input.
    Interrupt,
    /// User requested quit. The session ignores it; front ends stop reading.
    Quit,
}
