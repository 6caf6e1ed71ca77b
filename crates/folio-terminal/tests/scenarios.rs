//! End-to-end session scenarios driven through input events.

use folio_terminal::{
    CommandError, CommandKind, EntryBody, ProcessObserver, RenderKind, TerminalSession,
};
use folio_types::input::TerminalEvent;
use proptest::prelude::*;

fn submit_line(session: &mut TerminalSession, line: &str) {
    for ch in line.chars() {
        session.handle_event(&TerminalEvent::TextInput(ch));
    }
    session.handle_event(&TerminalEvent::Submit);
}

fn history(session: &TerminalSession) -> Vec<String> {
    session.history().entries().map(str::to_string).collect()
}

#[test]
fn profile_on_fresh_session() {
    let mut session = TerminalSession::default();
    let before = session.output().len();
    submit_line(&mut session, "profile");
    assert_eq!(session.output().len(), before + 2);
    assert_eq!(session.input(), "");
    assert_eq!(history(&session), vec!["profile"]);
    assert_eq!(session.history().cursor(), None);
    assert_eq!(
        session.output().last().map(|e| &e.body),
        Some(&EntryBody::Rendered(RenderKind::Profile))
    );
}

#[test]
fn help_then_history_up_twice() {
    let mut session = TerminalSession::default();
    submit_line(&mut session, "help");
    session.handle_event(&TerminalEvent::HistoryUp);
    assert_eq!(session.input(), "help");
    assert_eq!(session.history().cursor(), Some(0));
    session.handle_event(&TerminalEvent::HistoryUp);
    assert_eq!(session.input(), "help");
    assert_eq!(session.history().cursor(), Some(0));
}

#[test]
fn recalled_command_can_be_resubmitted() {
    let mut session = TerminalSession::default();
    submit_line(&mut session, "projects");
    session.handle_event(&TerminalEvent::HistoryUp);
    let settled = session.handle_event(&TerminalEvent::Submit).unwrap();
    assert_eq!(settled.command, Some(CommandKind::Projects));
    assert!(!settled.recorded);
    assert_eq!(history(&session), vec!["projects"]);
}

#[test]
fn case_and_padding_variants_dispatch_identically() {
    let mut session = TerminalSession::default();
    for raw in ["help", "HELP", " help "] {
        submit_line(&mut session, raw);
        let entries = session.output().entries();
        let n = entries.len();
        assert_eq!(entries[n - 2].text_content(), Some(raw));
        assert!(!entries[n - 2].is_error);
        assert_eq!(entries[n - 1].body, EntryBody::Rendered(RenderKind::Help));
    }
    assert_eq!(history(&session), vec![" help ", "HELP", "help"]);
}

#[test]
fn repeated_submission_is_recorded_once() {
    let mut session = TerminalSession::default();
    submit_line(&mut session, "profile");
    submit_line(&mut session, "profile");
    assert_eq!(history(&session), vec!["profile"]);
    let echoes = session
        .output()
        .iter()
        .filter(|e| e.is_command_echo)
        .count();
    assert_eq!(echoes, 2);
}

#[test]
fn clear_empties_any_log() {
    let mut session = TerminalSession::default();
    for _ in 0..5 {
        submit_line(&mut session, "help");
        submit_line(&mut session, "bogus");
    }
    submit_line(&mut session, "  Clear");
    assert!(session.output().is_empty());
    assert_eq!(session.output().epoch(), 1);
    assert_eq!(session.history().newest(), Some("  Clear"));
}

#[test]
fn blank_submissions_report_empty_command() {
    for raw in ["", "   "] {
        let mut session = TerminalSession::default();
        submit_line(&mut session, raw);
        let errors: Vec<&CommandError> = session
            .output()
            .iter()
            .filter_map(|e| e.error.as_ref())
            .collect();
        assert_eq!(errors, vec![&CommandError::EmptyCommand]);
        assert!(session.history().is_empty());
    }
}

#[test]
fn unknown_command_reports_normalized_text() {
    let mut session = TerminalSession::default();
    submit_line(&mut session, "frobnicate");
    let entries = session.output().entries();
    let echo = &entries[entries.len() - 2];
    let error = &entries[entries.len() - 1];
    assert!(echo.is_command_echo);
    assert!(echo.is_error);
    assert_eq!(
        error.error,
        Some(CommandError::CommandNotFound("frobnicate".to_string()))
    );
}

#[test]
fn session_stays_usable_after_errors() {
    let mut session = TerminalSession::default();
    submit_line(&mut session, "");
    submit_line(&mut session, "nope");
    submit_line(&mut session, "help");
    assert_eq!(
        session.output().last().map(|e| &e.body),
        Some(&EntryBody::Rendered(RenderKind::Help))
    );
}

#[test]
fn ctrl_c_abandons_partial_input() {
    let mut session = TerminalSession::default();
    for ch in "prof".chars() {
        session.handle_event(&TerminalEvent::TextInput(ch));
    }
    session.handle_event(&TerminalEvent::Interrupt);
    let last = session.output().last().unwrap();
    assert!(last.is_command_echo);
    assert!(last.is_error);
    assert_eq!(last.text_content(), Some(folio_terminal::INTERRUPT_MARKER));
    assert_eq!(session.input(), "");
    assert!(history(&session).is_empty());

    submit_line(&mut session, "help");
    assert_eq!(history(&session), vec!["help"]);
}

#[test]
fn observer_fires_once_per_submit() {
    struct Settles(usize);
    impl ProcessObserver for Settles {
        fn busy_changed(&mut self, busy: bool) {
            if !busy {
                self.0 += 1;
            }
        }
    }

    let mut session = TerminalSession::default();
    let mut observer = Settles(0);
    for ch in "help".chars() {
        session.handle_event_with(&TerminalEvent::TextInput(ch), &mut observer);
    }
    session.handle_event_with(&TerminalEvent::HistoryUp, &mut observer);
    assert_eq!(observer.0, 0);
    session.handle_event_with(&TerminalEvent::Submit, &mut observer);
    session.handle_event_with(&TerminalEvent::Submit, &mut observer);
    assert_eq!(observer.0, 2);
    assert!(!session.is_busy());
}

proptest! {
    #[test]
    fn every_submit_leaves_idle_prompt(lines in proptest::collection::vec("[ a-zA-Z]{0,10}", 1..30)) {
        let mut session = TerminalSession::default();
        for line in &lines {
            session.set_input(line);
            let settled = session.submit();
            prop_assert_eq!(session.input(), "");
            prop_assert_eq!(session.history().cursor(), None);
            prop_assert!(!session.is_busy());
            prop_assert!(session.history().len() <= 10);
            if settled.recorded {
                prop_assert_eq!(session.history().newest(), Some(line.as_str()));
            }
            if settled.cleared {
                prop_assert!(session.output().is_empty());
            }
        }
    }

    #[test]
    fn non_clear_submit_adds_two_entries(line in "[a-z]{1,10}") {
        prop_assume!(line != "clear");
        let mut session = TerminalSession::default();
        let before = session.output().len();
        session.set_input(&line);
        session.submit();
        prop_assert_eq!(session.output().len(), before + 2);
    }
}
