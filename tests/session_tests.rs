//! Session lifecycle tests: toggles, wins, locking, resets and draws.

use proptest::prelude::*;

use classroom_bingo::content::{QUESTIONS, VOCABULARY};
use classroom_bingo::core::{BingoConfig, BingoError, GroupId};
use classroom_bingo::rules::{check_win, MarkMatrix, WinLine};
use classroom_bingo::session::{Drawn, GroupStatus, Mode, Session};

fn g(n: u8) -> GroupId {
    GroupId::new(n).unwrap()
}

fn session() -> Session {
    Session::new(BingoConfig::default()).unwrap()
}

/// Mark a full column for a group, returning whether the last toggle won.
fn mark_column(session: &mut Session, group: GroupId, col: usize) -> bool {
    (0..4)
        .map(|row| session.toggle_mark(group, row, col).unwrap().was_new_win)
        .last()
        .unwrap_or(false)
}

// =============================================================================
// Toggling and winning
// =============================================================================

#[test]
fn test_toggle_twice_restores_marks() {
    let mut s = session();
    s.toggle_mark(g(2), 3, 1).unwrap();
    s.toggle_mark(g(2), 3, 1).unwrap();
    assert_eq!(*s.marks(g(2)), MarkMatrix::new());
}

#[test]
fn test_toggles_only_touch_their_group() {
    let mut s = session();
    s.toggle_mark(g(1), 0, 0).unwrap();
    s.toggle_mark(g(1), 2, 3).unwrap();

    for group in [g(2), g(3), g(4)] {
        assert_eq!(*s.marks(group), MarkMatrix::new());
    }
    assert_eq!(s.marks(g(1)).marked_count(), 2);
}

#[test]
fn test_new_win_reported_once() {
    let mut s = session();

    assert!(mark_column(&mut s, g(2), 0));
    assert_eq!(s.winners().len(), 1);

    // Every later toggle on the winner is a locked no-op.
    for row in 0..4 {
        for col in 0..4 {
            let outcome = s.toggle_mark(g(2), row, col).unwrap();
            assert!(outcome.locked);
            assert!(!outcome.was_new_win);
        }
    }
    assert_eq!(s.winners().len(), 1);
}

#[test]
fn test_locked_group_marks_frozen() {
    let mut s = session();
    mark_column(&mut s, g(1), 2);
    let frozen = *s.marks(g(1));
    let winners = s.winners().clone();

    s.toggle_mark(g(1), 0, 0).unwrap();
    s.toggle_mark(g(1), 0, 2).unwrap();

    assert_eq!(*s.marks(g(1)), frozen);
    assert_eq!(*s.winners(), winners);
}

#[test]
fn test_several_groups_can_win() {
    let mut s = session();
    mark_column(&mut s, g(4), 3);
    mark_column(&mut s, g(1), 0);

    let winners: Vec<_> = s.winners().iter().copied().collect();
    assert_eq!(winners, vec![g(1), g(4)]);

    // Others keep playing.
    let outcome = s.toggle_mark(g(2), 0, 0).unwrap();
    assert!(!outcome.locked);
}

#[test]
fn test_out_of_range_arguments() {
    let mut s = session();
    assert_eq!(GroupId::new(0), Err(BingoError::InvalidGroup(0)));
    assert_eq!(GroupId::new(5), Err(BingoError::InvalidGroup(5)));
    assert_eq!(
        s.toggle_mark(g(1), 4, 4),
        Err(BingoError::InvalidCell { row: 4, col: 4 })
    );
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_clears_state_keeps_cards() {
    let mut s = session();
    let cards_before = s.cards().clone();

    mark_column(&mut s, g(3), 1);
    s.toggle_mark(g(4), 0, 0).unwrap();
    s.draw_word();

    s.reset();

    assert!(s.winners().is_empty());
    assert!(s.drawn().is_none());
    for group in GroupId::all() {
        assert!(!check_win(s.marks(group)));
        assert_eq!(*s.marks(group), MarkMatrix::new());
    }
    assert_eq!(*s.cards(), cards_before);

    // A former winner plays again after reset.
    assert!(!s.toggle_mark(g(3), 0, 0).unwrap().locked);
}

#[test]
fn test_cards_match_generator() {
    let config = BingoConfig::default();
    let s = Session::new(config.clone()).unwrap();

    for group in GroupId::all() {
        let expected =
            classroom_bingo::generate_card(config.group_seeds[group], &config.vocabulary).unwrap();
        assert_eq!(s.card(group), &expected);
    }
}

// =============================================================================
// Draws
// =============================================================================

#[test]
fn test_draw_question_from_list_clears_word() {
    let mut s = session();
    for _ in 0..50 {
        s.draw_word();
        let question = s.draw_question().to_string();
        assert!(QUESTIONS.contains(&question.as_str()));
        assert_eq!(s.current_word(), None);
        assert_eq!(s.drawn(), Some(&Drawn::Question(question)));
    }
}

#[test]
fn test_draw_word_from_list_clears_question() {
    let mut s = session();
    for _ in 0..50 {
        s.draw_question();
        let word = s.draw_word().to_string();
        assert!(VOCABULARY.contains(&word.as_str()));
        assert_eq!(s.current_question(), None);
    }
}

#[test]
fn test_draws_sample_with_replacement() {
    let mut s = session();
    let draws: Vec<String> = (0..30).map(|_| s.draw_question().to_string()).collect();

    // 30 draws from 10 prompts must repeat.
    let mut unique = draws.clone();
    unique.sort();
    unique.dedup();
    assert!(unique.len() < draws.len());
}

#[test]
fn test_custom_lists() {
    let words: Vec<String> = (0..16).map(|i| format!("termo {i}")).collect();
    let config = BingoConfig::default()
        .with_vocabulary(words.clone())
        .with_questions(["Unica pergunta"]);
    let mut s = Session::new(config).unwrap();
    assert_eq!(s.vocabulary(), words.as_slice());
    assert_eq!(s.questions().len(), 1);

    assert_eq!(s.draw_question(), "Unica pergunta");
    assert!(words.contains(&s.draw_word().to_string()));
}

// =============================================================================
// View and snapshot
// =============================================================================

#[test]
fn test_teacher_panel_statuses() {
    let mut s = session();
    s.show_teacher_panel();
    mark_column(&mut s, g(2), 2);

    let statuses = s.group_statuses();
    assert_eq!(statuses[g(1)], GroupStatus::Playing);
    assert_eq!(statuses[g(2)], GroupStatus::Winner);
    assert_eq!(s.view().mode(), Mode::Teacher);
}

#[test]
fn test_snapshot_serializes() {
    let mut s = session();
    s.open_card(g(1)).unwrap();
    for row in 0..4 {
        s.toggle_mark(g(1), row, 3 - row).unwrap();
    }
    s.draw_word();

    let snapshot = s.snapshot();
    assert_eq!(snapshot.open_card, Some(g(1)));
    assert_eq!(snapshot.groups.len(), 4);

    let first = snapshot.group(g(1)).unwrap();
    assert_eq!(first.status, GroupStatus::Winner);
    assert_eq!(first.winning_lines.as_slice(), &[WinLine::AntiDiagonal]);
    assert_eq!(&first.card, s.card(g(1)));

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: classroom_bingo::SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    /// Winner membership only grows between resets, and a winner's marks
    /// never change after it wins.
    #[test]
    fn prop_winners_monotonic(moves in prop::collection::vec((1u8..=4, 0usize..4, 0usize..4), 0..200)) {
        let mut s = session();
        let mut frozen: Vec<(GroupId, MarkMatrix)> = Vec::new();

        for (group, row, col) in moves {
            let group = GroupId::new(group).unwrap();
            let before = s.winners().clone();
            let outcome = s.toggle_mark(group, row, col).unwrap();

            prop_assert!(before.iter().all(|w| s.winners().contains(w)));
            prop_assert_eq!(outcome.was_new_win, !before.contains(&group) && s.is_winner(group));
            if outcome.was_new_win {
                frozen.push((group, *s.marks(group)));
            }
            for (winner, marks) in &frozen {
                prop_assert_eq!(s.marks(*winner), marks);
            }
        }
    }
}
