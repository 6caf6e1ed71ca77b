use folio_types::input::TerminalEvent;

/// Escape sequence a cooked-mode terminal sends for the up arrow.
const ARROW_UP: &str = "\x1b[A";
/// Escape sequence a cooked-mode terminal sends for the down arrow.
const ARROW_DOWN: &str = "\x1b[B";
/// Ctrl-C as a raw byte (only reaches us when piped).
const INTERRUPT: char = '\u{3}';

/// Translate one line of stdin into session events.
///
/// - a line made only of arrow sequences navigates history
/// - an empty line submits whatever the buffer holds (e.g. a recalled command)
/// - a line ending in ctrl-C types its prefix, then interrupts
/// - anything else replaces the buffer and is submitted
///
/// `buffered_chars` is the length of the session's current input, erased
/// before a typed line so it does not append to recalled text.
pub fn events_for_line(line: &str, buffered_chars: usize) -> Vec<TerminalEvent> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if let Some(nav) = parse_arrows(line) {
        return nav;
    }
    if line.is_empty() {
        return vec![TerminalEvent::Submit];
    }

    let mut events: Vec<TerminalEvent> =
        std::iter::repeat_n(TerminalEvent::Backspace, buffered_chars).collect();
    match line.strip_suffix(INTERRUPT) {
        Some(prefix) => {
            events.extend(prefix.chars().map(TerminalEvent::TextInput));
            events.push(TerminalEvent::Interrupt);
        },
        None => {
            events.extend(line.chars().map(TerminalEvent::TextInput));
            events.push(TerminalEvent::Submit);
        },
    }
    events
}

/// Parse a line consisting solely of arrow-key escape sequences.
fn parse_arrows(mut line: &str) -> Option<Vec<TerminalEvent>> {
    if line.is_empty() {
        return None;
    }
    let mut events = Vec::new();
    while !line.is_empty() {
        if let Some(rest) = line.strip_prefix(ARROW_UP) {
            events.push(TerminalEvent::HistoryUp);
            line = rest;
        } else if let Some(rest) = line.strip_prefix(ARROW_DOWN) {
            events.push(TerminalEvent::HistoryDown);
            line = rest;
        } else {
            return None;
        }
    }
    Some(events)
}
