//! Command vocabulary, normalization, and the submit processor.
//!
//! The vocabulary is a closed enum: adding a command means adding a
//! `CommandKind` variant, and every `match` over it must handle the new arm.
//! Nothing here returns a Rust error for bad input. Unknown or empty
//! commands become error entries in the output log.

use serde::Serialize;

use crate::buffer::InputBuffer;
use crate::history::HistoryRing;
use crate::output::{OutputEntry, OutputLog, RenderKind};

/// A recognised command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommandKind {
    Help,
    Clear,
    Profile,
    Projects,
}

impl CommandKind {
    /// Every command, in the order `help` lists them.
    pub const ALL: [CommandKind; 4] = [Self::Help, Self::Clear, Self::Profile, Self::Projects];

    /// The name the user types.
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Profile => "profile",
            Self::Projects => "projects",
        }
    }

    /// One-line description for `help`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "Show all available commands",
            Self::Clear => "Clear the terminal screen",
            Self::Profile => "Display personal information",
            Self::Projects => "List portfolio projects",
        }
    }

    /// Look up an already-normalized command name.
    pub fn from_normalized(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Trim surrounding whitespace and lower-case, for matching only.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolve a raw input line to a command.
pub fn resolve(raw: &str) -> Result<CommandKind, CommandError> {
    let lower = normalize(raw);
    if lower.is_empty() {
        return Err(CommandError::EmptyCommand);
    }
    CommandKind::from_normalized(&lower).ok_or(CommandError::CommandNotFound(lower))
}

/// Whether a raw input line names a recognised command.
///
/// Front ends use this to colour the prompt. It must never gate submission.
pub fn is_recognized(raw: &str) -> bool {
    resolve(raw).is_ok()
}

/// The recognised command names.
pub fn vocabulary() -> [&'static str; 4] {
    CommandKind::ALL.map(CommandKind::name)
}

/// Return a sorted list of (name, description) pairs.
pub fn list_commands() -> Vec<(&'static str, &'static str)> {
    let mut cmds: Vec<(&str, &str)> = CommandKind::ALL
        .iter()
        .map(|c| (c.name(), c.description()))
        .collect();
    cmds.sort_by_key(|(name, _)| *name);
    cmds
}

/// Machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    EmptyCommand,
    CommandNotFound,
    InvalidArgument,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyCommand => "EMPTY_COMMAND",
            Self::CommandNotFound => "COMMAND_NOT_FOUND",
            Self::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

/// A failed submission, reported to the user as an output entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum CommandError {
    #[error("No command entered. Type 'help' to see available commands.")]
    EmptyCommand,

    /// Carries the normalized text that matched nothing.
    #[error("Command '{0}' not found. Type 'help' to see available commands.")]
    CommandNotFound(String),

    /// Reserved for commands that take arguments.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCommand => ErrorKind::EmptyCommand,
            Self::CommandNotFound(_) => ErrorKind::CommandNotFound,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// The offending input, if the error carries one.
    pub fn invalid_part(&self) -> Option<&str> {
        match self {
            Self::EmptyCommand => None,
            Self::CommandNotFound(s) | Self::InvalidArgument(s) => Some(s),
        }
    }
}

/// Mutable session state a submission operates on.
pub struct Environment<'a> {
    pub output: &'a mut OutputLog,
    pub history: &'a mut HistoryRing,
    pub input: &'a mut InputBuffer,
}

/// Notified around every dispatch.
///
/// Renderers hook scroll-to-bottom and focus here: `busy_changed(false)`
/// fires exactly once per submission, after the log has settled.
pub trait ProcessObserver {
    fn busy_changed(&mut self, busy: bool);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProcessObserver for NoopObserver {
    fn busy_changed(&mut self, _busy: bool) {}
}

/// Summary of one completed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settled {
    /// The command that ran, or `None` if the input was rejected.
    pub command: Option<CommandKind>,
    /// Whether the raw input was added to history.
    pub recorded: bool,
    /// Whether the output log was wiped.
    pub cleared: bool,
}

/// Turns the input buffer into output, history, and a fresh prompt.
#[derive(Debug, Default)]
pub struct Processor {
    busy: bool,
}

impl Processor {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only while a submission is being dispatched.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Submit the current input buffer.
    pub fn submit(
        &mut self,
        env: &mut Environment<'_>,
        observer: &mut dyn ProcessObserver,
    ) -> Settled {
        self.set_busy(true, observer);

        let command = env.input.value().to_string();
        let resolved = resolve(&command);

        env.output
            .append(OutputEntry::echo(command.as_str(), resolved.is_err()));
        let recorded = env.history.record(&command);

        let settled = match resolved {
            Ok(kind) => {
                log::debug!("dispatch {} (raw {command:?})", kind.name());
                dispatch(kind, env.output);
                Settled {
                    command: Some(kind),
                    recorded,
                    cleared: kind == CommandKind::Clear,
                }
            },
            Err(err) => {
                log::debug!("rejected {command:?}: {}", err.kind().as_str());
                env.output.append(OutputEntry::error(err));
                Settled {
                    command: None,
                    recorded,
                    cleared: false,
                }
            },
        };

        env.input.clear();
        env.history.reset_cursor();

        self.set_busy(false, observer);
        settled
    }

    fn set_busy(&mut self, busy: bool, observer: &mut dyn ProcessObserver) {
        self.busy = busy;
        observer.busy_changed(busy);
    }
}

/// Apply a recognised command to the output log.
fn dispatch(kind: CommandKind, output: &mut OutputLog) {
    match kind {
        CommandKind::Help => output.append(OutputEntry::rendered(RenderKind::Help)),
        CommandKind::Clear => output.clear(),
        CommandKind::Profile => output.append(OutputEntry::rendered(RenderKind::Profile)),
        CommandKind::Projects => output.append(OutputEntry::rendered(RenderKind::Projects)),
    }
}
