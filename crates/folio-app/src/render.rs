use std::io::Write;

use folio_terminal::{
    EntryBody, HistoryItem, OutputEntry, OutputLog, Placement, RenderKind, TerminalSession,
    help_lines,
};
use folio_types::config::{FolioConfig, PortfolioConfig};
use folio_types::error::Result;

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const REVERSE: &str = "\x1b[7m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Incremental text renderer for a terminal session.
///
/// Tracks how much of the output log has been written so each call to
/// [`present`](Self::present) only emits new entries.
pub struct Renderer {
    portfolio: PortfolioConfig,
    prompt: String,
    color: bool,
    written: usize,
    epoch: u64,
}

impl Renderer {
    pub fn new(config: &FolioConfig) -> Self {
        Self {
            portfolio: config.portfolio.clone(),
            prompt: config.terminal.prompt.clone(),
            color: config.terminal.color,
            written: 0,
            epoch: 0,
        }
    }

    /// Write new output, the history browser, and the prompt.
    pub fn present(&mut self, session: &TerminalSession, out: &mut impl Write) -> Result<()> {
        let log = session.output();
        if log.epoch() != self.epoch {
            write!(out, "{CLEAR_SCREEN}")?;
            self.epoch = log.epoch();
            self.written = 0;
        }
        for line in self.new_lines(log) {
            writeln!(out, "{line}")?;
        }
        self.written = log.len();

        for line in self.history_lines(&session.history_view()) {
            writeln!(out, "{line}")?;
        }
        write!(
            out,
            "{}",
            self.prompt_line(session.input(), session.input_recognized())
        )?;

        out.flush()?;
        Ok(())
    }

    /// Lines for log entries not yet written.
    fn new_lines(&self, log: &OutputLog) -> Vec<String> {
        log.entries()
            .get(self.written..)
            .unwrap_or_default()
            .iter()
            .flat_map(|entry| self.entry_lines(entry))
            .collect()
    }

    pub fn entry_lines(&self, entry: &OutputEntry) -> Vec<String> {
        let style = if entry.is_error { RED } else { "" };
        let text_line = |text: &str| {
            if entry.is_command_echo {
                format!("{} {}", self.paint(&self.prompt, CYAN), self.paint(text, style))
            } else {
                self.paint(text, style)
            }
        };
        match &entry.body {
            EntryBody::Text(text) => vec![text_line(text.as_str())],
            EntryBody::Rendered(kind) => self.block_lines(*kind),
            EntryBody::Mixed { text, kind, order } => {
                let block = self.block_lines(*kind);
                match order {
                    Placement::RenderedFirst => {
                        block.into_iter().chain([text_line(text.as_str())]).collect()
                    },
                    Placement::TextFirst => {
                        std::iter::once(text_line(text.as_str())).chain(block).collect()
                    },
                }
            },
        }
    }

    /// Content producer for a rendered block.
    pub fn block_lines(&self, kind: RenderKind) -> Vec<String> {
        match kind {
            RenderKind::Help => help_lines(),
            RenderKind::Profile => self.profile_lines(),
            RenderKind::Projects => self.project_lines(),
        }
    }

    fn profile_lines(&self) -> Vec<String> {
        let p = &self.portfolio;
        let mut out = vec![self.paint(&p.name, GREEN)];
        if !p.role.is_empty() {
            out.push(p.role.clone());
        }
        if !p.summary.is_empty() {
            out.push(String::new());
            out.extend(p.summary.lines().map(str::to_string));
        }
        if !p.links.is_empty() {
            out.push(String::new());
            for link in &p.links {
                out.push(format!("{:<10} {}", link.label, self.paint(&link.url, DIM)));
            }
        }
        out
    }

    fn project_lines(&self) -> Vec<String> {
        if self.portfolio.projects.is_empty() {
            return vec!["(no projects listed)".to_string()];
        }
        let mut out = vec![format!("Projects ({}):", self.portfolio.projects.len())];
        for project in &self.portfolio.projects {
            out.push(format!("  {}", self.paint(&project.name, GREEN)));
            if !project.description.is_empty() {
                out.push(format!("    {}", project.description));
            }
            if let Some(url) = &project.url {
                out.push(format!("    {}", self.paint(url, DIM)));
            }
        }
        out
    }

    /// History browser rows, oldest first, selected row highlighted.
    pub fn history_lines(&self, items: &[HistoryItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| {
                let style = if item.recognized { GREEN } else { RED };
                let line = self.paint(&format!("  {}", item.command), style);
                if item.selected {
                    self.paint(&line, REVERSE)
                } else {
                    line
                }
            })
            .collect()
    }

    /// The prompt with the pending input coloured by validity.
    pub fn prompt_line(&self, input: &str, recognized: bool) -> String {
        let style = match (input.is_empty(), recognized) {
            (true, _) => "",
            (false, true) => GREEN,
            (false, false) => RED,
        };
        format!("{} {}", self.paint(&self.prompt, CYAN), self.paint(input, style))
    }

    fn paint(&self, text: &str, style: &str) -> String {
        if self.color && !style.is_empty() {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
