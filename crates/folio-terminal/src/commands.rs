//! Help catalog: commands plus the key bindings a visitor can use.

use crate::interpreter::CommandKind;

/// One row of the help listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTopic {
    /// What to type or press.
    pub keys: &'static str,
    pub description: &'static str,
}

/// Key bindings handled by the session rather than by a command.
const KEY_TOPICS: [HelpTopic; 2] = [
    HelpTopic {
        keys: "\u{2191}\u{2193}",
        description: "Navigate through the command history",
    },
    HelpTopic {
        keys: "ctrl + c",
        description: "Terminate the current command",
    },
];

/// Every help row: commands first, then key bindings.
pub fn help_topics() -> Vec<HelpTopic> {
    CommandKind::ALL
        .iter()
        .map(|cmd| HelpTopic {
            keys: cmd.name(),
            description: cmd.description(),
        })
        .chain(KEY_TOPICS)
        .collect()
}

/// Plain-text rendering of the help block.
pub fn help_lines() -> Vec<String> {
    let mut out = vec!["All Commands:".to_string()];
    for topic in help_topics() {
        out.push(format!("{:<10} - {}", topic.keys, topic.description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_cover_every_command() {
        let topics = help_topics();
        for cmd in CommandKind::ALL {
            assert!(topics.iter().any(|t| t.keys == cmd.name()), "{cmd:?} missing");
        }
        assert_eq!(topics.len(), CommandKind::ALL.len() + 2);
    }

    #[test]
    fn help_lines_are_padded() {
        let lines = help_lines();
        assert_eq!(lines[0], "All Commands:");
        assert_eq!(lines[1], "help       - Show all available commands");
        assert!(lines.last().unwrap().starts_with("ctrl + c   - "));
    }
}
