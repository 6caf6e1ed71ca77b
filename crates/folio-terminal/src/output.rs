//! Output log: the ordered list of lines and blocks shown above the prompt.

use serde::Serialize;

use crate::interpreter::CommandError;

/// Content block produced by the renderer rather than the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RenderKind {
    Help,
    Profile,
    Projects,
}

/// Vertical order of a [`EntryBody::Mixed`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Placement {
    /// Rendered block above the text.
    RenderedFirst,
    /// Text above the rendered block.
    TextFirst,
}

/// What an output entry displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EntryBody {
    Text(String),
    Rendered(RenderKind),
    Mixed {
        text: String,
        kind: RenderKind,
        order: Placement,
    },
}

/// One line or block of terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputEntry {
    pub body: EntryBody,
    /// Echo of a submitted command line (drawn behind the prompt glyph).
    pub is_command_echo: bool,
    /// Drawn in the error style.
    pub is_error: bool,
    /// Structured payload for error lines.
    pub error: Option<CommandError>,
}

impl OutputEntry {
    /// Plain system text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            body: EntryBody::Text(text.into()),
            is_command_echo: false,
            is_error: false,
            error: None,
        }
    }

    /// A rendered content block.
    pub fn rendered(kind: RenderKind) -> Self {
        Self {
            body: EntryBody::Rendered(kind),
            is_command_echo: false,
            is_error: false,
            error: None,
        }
    }

    /// Text combined with a rendered block.
    pub fn mixed(text: impl Into<String>, kind: RenderKind, order: Placement) -> Self {
        Self {
            body: EntryBody::Mixed {
                text: text.into(),
                kind,
                order,
            },
            is_command_echo: false,
            is_error: false,
            error: None,
        }
    }

    /// Echo of a submitted command, verbatim.
    pub fn echo(command: impl Into<String>, is_error: bool) -> Self {
        Self {
            body: EntryBody::Text(command.into()),
            is_command_echo: true,
            is_error,
            error: None,
        }
    }

    /// Descriptive error line.
    pub fn error(err: CommandError) -> Self {
        Self {
            body: EntryBody::Text(err.to_string()),
            is_command_echo: false,
            is_error: true,
            error: Some(err),
        }
    }

    /// The literal text of this entry, if any.
    pub fn text_content(&self) -> Option<&str> {
        match &self.body {
            EntryBody::Text(text) | EntryBody::Mixed { text, .. } => Some(text),
            EntryBody::Rendered(_) => None,
        }
    }

    /// The rendered block of this entry, if any.
    pub fn render_kind(&self) -> Option<RenderKind> {
        match self.body {
            EntryBody::Rendered(kind) | EntryBody::Mixed { kind, .. } => Some(kind),
            EntryBody::Text(_) => None,
        }
    }
}

/// Append-only (until cleared) sequence of output entries.
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    entries: Vec<OutputEntry>,
    epoch: u64,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a log with text-only system messages.
    pub fn with_welcome<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut log = Self::new();
        for line in lines {
            log.append(OutputEntry::text(line.as_ref()));
        }
        log
    }

    pub fn append(&mut self, entry: OutputEntry) {
        self.entries.push(entry);
    }

    /// Drop every entry and start a new epoch.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.epoch += 1;
    }

    /// Number of times the log has been cleared.
    ///
    /// Incremental renderers compare this against the value they last saw
    /// to notice a wipe even when new entries followed it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn entries(&self) -> &[OutputEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&OutputEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a OutputLog {
    type Item = &'a OutputEntry;
    type IntoIter = std::slice::Iter<'a, OutputEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
