//! Session state and its transitions.
//!
//! `Session` owns everything that changes during a class: mark matrices, the
//! winner set, the current draw and the view. Cards are generated once in
//! [`Session::new`] and kept until the session is dropped, resets included.
//!
//! Every transition is a synchronous `&mut self` call. Nothing is shared
//! between threads and there is no global state, so a session built from a
//! fixed [`BingoConfig`] replays exactly.

use im::OrdSet;
use log::{debug, info, trace};

use super::draw::Drawn;
use super::snapshot::{GroupSnapshot, SessionSnapshot};
use super::view::{GroupStatus, Mode, View};
use crate::cards::{generate_card, BingoCard, Cell};
use crate::core::{BingoConfig, BingoError, DrawRng, GroupId, GroupMap};
use crate::rules::{check_win, winning_lines, MarkMatrix};

/// Result of a toggle, for the presentation layer.
///
/// `was_new_win` is set exactly once per winning transition; the caller
/// decides how to announce it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Group that was toggled.
    pub group: GroupId,
    /// Cell that was toggled.
    pub cell: Cell,
    /// The group's marks after the toggle.
    pub marks: MarkMatrix,
    /// Winner set after the toggle.
    pub winners: OrdSet<GroupId>,
    /// The toggle completed a line for a group that had not won yet.
    pub was_new_win: bool,
    /// The group had already won, so nothing changed.
    pub locked: bool,
}

impl ToggleOutcome {
    /// Announcement text for a new win.
    #[must_use]
    pub fn announcement(&self) -> Option<String> {
        self.was_new_win
            .then(|| format!("BINGO! {} venceu!", self.group))
    }
}

/// A classroom bingo session.
#[derive(Clone, Debug)]
pub struct Session {
    vocabulary: Vec<String>,
    questions: Vec<String>,
    cards: GroupMap<BingoCard>,
    marks: GroupMap<MarkMatrix>,
    winners: OrdSet<GroupId>,
    view: View,
    drawn: Option<Drawn>,
    rng: DrawRng,
}

impl Session {
    /// Start a session: validate the config and generate all four cards.
    pub fn new(config: BingoConfig) -> Result<Self, BingoError> {
        config.validate()?;

        let cards = GroupMap::try_new(|group| {
            generate_card(config.group_seeds[group], &config.vocabulary)
        })?;
        info!(
            "session started: {} words, {} questions, draw seed {}",
            config.vocabulary.len(),
            config.questions.len(),
            config.draw_seed
        );

        Ok(Self {
            vocabulary: config.vocabulary,
            questions: config.questions,
            cards,
            marks: GroupMap::with_default(),
            winners: OrdSet::new(),
            view: View::default(),
            drawn: None,
            rng: DrawRng::new(config.draw_seed),
        })
    }

    // === Cards and marks ===

    /// A group's card.
    #[must_use]
    pub fn card(&self, group: GroupId) -> &BingoCard {
        &self.cards[group]
    }

    /// All four cards.
    #[must_use]
    pub fn cards(&self) -> &GroupMap<BingoCard> {
        &self.cards
    }

    /// A group's current marks.
    #[must_use]
    pub fn marks(&self, group: GroupId) -> &MarkMatrix {
        &self.marks[group]
    }

    /// Groups that have won since the last reset.
    #[must_use]
    pub fn winners(&self) -> &OrdSet<GroupId> {
        &self.winners
    }

    /// Check whether a group has won (and is therefore locked).
    #[must_use]
    pub fn is_winner(&self, group: GroupId) -> bool {
        self.winners.contains(&group)
    }

    /// Toggle a cell on a group's card.
    ///
    /// Fails only for coordinates off the grid. A group that already won is
    /// locked: the call succeeds but changes nothing.
    pub fn toggle_mark(&mut self, group: GroupId, row: usize, col: usize) -> Result<ToggleOutcome, BingoError> {
        let cell = Cell::new(row, col)?;
        Ok(self.toggle_cell(group, cell))
    }

    /// Toggle a cell that is already known to be on the grid.
    pub fn toggle_cell(&mut self, group: GroupId, cell: Cell) -> ToggleOutcome {
        if self.is_winner(group) {
            trace!("{group} is locked, ignoring toggle at {cell}");
            return self.outcome(group, cell, false, true);
        }

        let marked = self.marks[group].toggle(cell);
        trace!("{group} toggled {cell} -> {marked}");

        // Toggles are blocked once won, so a true result here is always a
        // fresh transition.
        let was_new_win = check_win(&self.marks[group]);
        if was_new_win {
            self.winners.insert(group);
            info!(
                "{group} completed {:?}",
                winning_lines(&self.marks[group]).as_slice()
            );
        }

        self.outcome(group, cell, was_new_win, false)
    }

    fn outcome(&self, group: GroupId, cell: Cell, was_new_win: bool, locked: bool) -> ToggleOutcome {
        ToggleOutcome {
            group,
            cell,
            marks: self.marks[group],
            winners: self.winners.clone(),
            was_new_win,
            locked,
        }
    }

    /// Clear all marks, winners and the current draw. Cards are kept.
    pub fn reset(&mut self) {
        for (_, marks) in self.marks.iter_mut() {
            marks.clear();
        }
        self.winners = OrdSet::new();
        self.drawn = None;
        info!("session reset");
    }

    // === Teacher draws ===

    /// Draw a random question, replacing any drawn word.
    pub fn draw_question(&mut self) -> &str {
        let index = self.rng.gen_index(self.questions.len());
        let question = self.questions[index].clone();
        debug!("drew question: {question}");
        self.drawn.insert(Drawn::Question(question)).text()
    }

    /// Draw a random vocabulary word, replacing any drawn question.
    pub fn draw_word(&mut self) -> &str {
        let index = self.rng.gen_index(self.vocabulary.len());
        let word = self.vocabulary[index].clone();
        debug!("drew word: {word}");
        self.drawn.insert(Drawn::Word(word)).text()
    }

    /// The current draw, if any.
    #[must_use]
    pub fn drawn(&self) -> Option<&Drawn> {
        self.drawn.as_ref()
    }

    /// The question on display, if the last draw was a question.
    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        self.drawn.as_ref().and_then(Drawn::question)
    }

    /// The word on display, if the last draw was a word.
    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.drawn.as_ref().and_then(Drawn::word)
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    // === View ===

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// Switch to the group list.
    pub fn show_groups(&mut self) {
        self.view.show_groups();
    }

    /// Switch to the teacher panel.
    pub fn show_teacher_panel(&mut self) {
        self.view.show_teacher_panel();
    }

    /// Open a group's card from the group list.
    ///
    /// A group that already won cannot reopen its card until the next reset.
    pub fn open_card(&mut self, group: GroupId) -> Result<&BingoCard, BingoError> {
        if self.view.mode() == Mode::Teacher {
            return Err(BingoError::TeacherModeActive);
        }
        if self.is_winner(group) {
            return Err(BingoError::GroupLocked(group));
        }
        self.view.open(group);
        Ok(&self.cards[group])
    }

    /// Go back to the group list.
    pub fn close_card(&mut self) {
        self.view.close();
    }

    /// Status of one group.
    #[must_use]
    pub fn group_status(&self, group: GroupId) -> GroupStatus {
        if self.is_winner(group) {
            GroupStatus::Winner
        } else {
            GroupStatus::Playing
        }
    }

    /// Status of every group.
    #[must_use]
    pub fn group_statuses(&self) -> GroupMap<GroupStatus> {
        GroupMap::new(|group| self.group_status(group))
    }

    /// Everything a renderer needs, as plain data.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.view.mode(),
            open_card: self.view.open_card(),
            drawn: self.drawn.clone(),
            groups: GroupId::all()
                .map(|group| GroupSnapshot {
                    group,
                    status: self.group_status(group),
                    card: self.cards[group].clone(),
                    marks: self.marks[group],
                    winning_lines: winning_lines(&self.marks[group]),
                })
                .collect(),
        }
    }
}
