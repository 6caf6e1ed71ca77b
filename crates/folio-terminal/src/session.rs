//! One terminal session: the state behind a single page load.
//!
//! `TerminalSession` owns the output log, history ring, input buffer, and
//! processor. Front ends feed it [`TerminalEvent`]s and read its state back
//! for rendering. Nothing persists beyond the value's lifetime.

use serde::Serialize;

use folio_types::config::TerminalConfig;
use folio_types::input::TerminalEvent;

use crate::buffer::InputBuffer;
use crate::history::HistoryRing;
use crate::interpreter::{
    Environment, NoopObserver, ProcessObserver, Processor, Settled, is_recognized,
};
use crate::output::{OutputEntry, OutputLog};

/// Echo text logged when the user presses ctrl-C.
pub const INTERRUPT_MARKER: &str = "^C";

/// A row of the on-screen history browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryItem {
    pub command: String,
    /// The entry currently loaded into the input buffer.
    pub selected: bool,
    /// Whether the entry names a recognised command (cosmetic).
    pub recognized: bool,
}

/// Serializable view of everything a renderer needs.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub output: Vec<OutputEntry>,
    pub output_epoch: u64,
    pub input: String,
    pub input_recognized: bool,
    /// Newest first.
    pub history: Vec<String>,
    pub history_cursor: Option<usize>,
    pub busy: bool,
}

/// Session state for one visitor.
#[derive(Debug)]
pub struct TerminalSession {
    output: OutputLog,
    history: HistoryRing,
    input: InputBuffer,
    processor: Processor,
}

impl TerminalSession {
    /// Create a session seeded with the configured welcome lines.
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            output: OutputLog::with_welcome(config.welcome.as_slice()),
            history: HistoryRing::new(config.history_capacity),
            input: InputBuffer::new(),
            processor: Processor::new(),
        }
    }

    /// Apply one input event.
    ///
    /// Returns the submission summary for `Submit`, `None` otherwise.
    pub fn handle_event(&mut self, event: &TerminalEvent) -> Option<Settled> {
        self.handle_event_with(event, &mut NoopObserver)
    }

    /// Like [`handle_event`](Self::handle_event), notifying `observer` of
    /// busy transitions during a submit.
    pub fn handle_event_with(
        &mut self,
        event: &TerminalEvent,
        observer: &mut dyn ProcessObserver,
    ) -> Option<Settled> {
        match event {
            TerminalEvent::TextInput(ch) => self.type_char(*ch),
            TerminalEvent::Backspace => self.backspace(),
            TerminalEvent::Submit => return Some(self.submit_with(observer)),
            TerminalEvent::HistoryUp => {
                self.history_up();
            },
            TerminalEvent::HistoryDown => {
                self.history_down();
            },
            TerminalEvent::Interrupt => self.interrupt(),
            TerminalEvent::Quit => {},
        }
        None
    }

    // -- Input buffer --

    /// Type a character. Direct edits leave history navigation.
    pub fn type_char(&mut self, ch: char) {
        self.input.push(ch);
        self.history.reset_cursor();
    }

    pub fn backspace(&mut self) {
        self.input.backspace();
        self.history.reset_cursor();
    }

    /// Replace the whole input line, as a paste would.
    pub fn set_input(&mut self, value: &str) {
        self.input.set(value);
        self.history.reset_cursor();
    }

    pub fn input(&self) -> &str {
        self.input.value()
    }

    /// Whether the current input names a recognised command.
    pub fn input_recognized(&self) -> bool {
        is_recognized(self.input.value())
    }

    // -- History ring --

    /// Recall an older command into the input buffer.
    pub fn history_up(&mut self) -> &str {
        let recalled = self.history.navigate_up();
        self.input.set(recalled);
        self.input.value()
    }

    /// Recall a newer command into the input buffer.
    pub fn history_down(&mut self) -> &str {
        let recalled = self.history.navigate_down();
        self.input.set(recalled);
        self.input.value()
    }

    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    /// Rows for the history browser, oldest first.
    ///
    /// Empty unless the user is navigating history.
    pub fn history_view(&self) -> Vec<HistoryItem> {
        let Some(cursor) = self.history.cursor() else {
            return Vec::new();
        };
        self.history
            .entries()
            .enumerate()
            .rev()
            .map(|(i, command)| HistoryItem {
                command: command.to_string(),
                selected: i == cursor,
                recognized: is_recognized(command),
            })
            .collect()
    }

    // -- Processor --

    /// Submit the current input.
    pub fn submit(&mut self) -> Settled {
        self.submit_with(&mut NoopObserver)
    }

    pub fn submit_with(&mut self, observer: &mut dyn ProcessObserver) -> Settled {
        let mut env = Environment {
            output: &mut self.output,
            history: &mut self.history,
            input: &mut self.input,
        };
        self.processor.submit(&mut env, observer)
    }

    /// Abandon the current input (ctrl-C).
    pub fn interrupt(&mut self) {
        let abandoned = self.input.take();
        log::debug!("interrupt, discarding {abandoned:?}");
        self.output.append(OutputEntry::echo(INTERRUPT_MARKER, true));
        self.history.reset_cursor();
    }

    pub fn is_busy(&self) -> bool {
        self.processor.is_busy()
    }

    // -- Output log --

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    /// Capture the full renderable state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            output: self.output.entries().to_vec(),
            output_epoch: self.output.epoch(),
            input: self.input.value().to_string(),
            input_recognized: self.input_recognized(),
            history: self.history.entries().map(str::to_string).collect(),
            history_cursor: self.history.cursor(),
            busy: self.is_busy(),
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new(&TerminalConfig::default())
    }
}
