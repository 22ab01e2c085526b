//! Pointer-driven swap of the English hero headline for its Korean
//! counterpart.
//!
//! Moving the mouse onto a headline line hides that line's English words
//! in a random stagger and, once they are gone, reveals the matching Korean
//! line. Leaving plays it backwards: Korean glyphs fade out in a random
//! stagger, then the English words come back in the order they left.
pub mod geometry;
pub mod headline;
pub mod stagger;

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use self::{
    geometry::PointerHit,
    headline::HeadlineLayout,
    stagger::{ordered_delays, randomized_delays, stepped_delays},
};
use super::{Sequencer, Timeline};

pub const HERO_WORD_REVEAL_RADIUS: f64 = 70.0;
pub const ENGLISH_PROXIMITY_HIDE_STEP_MS: u32 = 42;
pub const ENGLISH_LINE_EXIT_MAX_DELAY_MS: u32 = 360;
pub const ENGLISH_LINE_HIDE_DURATION_MS: u32 = 460;
pub const ENGLISH_LINE_HIDE_COMPLETE_MS: u32 =
    ENGLISH_LINE_EXIT_MAX_DELAY_MS + ENGLISH_LINE_HIDE_DURATION_MS;
pub const ENGLISH_RETURN_STAGGER_MS: u32 = 80;
pub const ENGLISH_RETURN_FADE_IN_MS: u32 = 640;
pub const KOREAN_LINE_REVEAL_DELAY_MS: u32 = ENGLISH_LINE_HIDE_COMPLETE_MS + 40;
pub const KOREAN_EXIT_FADE_OUT_MS: u32 = 600;
pub const KOREAN_EXIT_CHAR_FADE_MS: u32 = 180;
pub const KOREAN_EXIT_MAX_DELAY_MS: u32 =
    KOREAN_EXIT_FADE_OUT_MS.saturating_sub(KOREAN_EXIT_CHAR_FADE_MS);
pub const KOREAN_EXIT_TO_ENGLISH_BUFFER_MS: u32 = 80;
pub const KOREAN_EXIT_COMPLETE_MS: u32 = KOREAN_EXIT_FADE_OUT_MS + KOREAN_EXIT_TO_ENGLISH_BUFFER_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealSlot {
    /// Korean reveal for one headline line.
    LineReveal(usize),
    KoreanExit,
    EnglishReturn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    /// English words are hidden, Korean not yet shown.
    Hide,
    Reveal,
    Exit,
    Return,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    layout: HeadlineLayout,
    /// Hidden English word -> hide delay.
    hidden_english: BTreeMap<usize, u32>,
    /// Returning English word -> return delay.
    returning_english: BTreeMap<usize, u32>,
    english_returning: bool,
    proximity_korean: BTreeSet<usize>,
    exiting_korean: BTreeSet<usize>,
    /// Korean character -> exit delay. Empty whenever `exiting_korean` is.
    exit_char_delays: BTreeMap<usize, u32>,
    touched_line: Option<usize>,
    revealed_line: Option<usize>,
    /// Line whose hide delays are in `hidden_english`, so they can be kept
    /// while the pointer wanders along the same line.
    hide_order_line: Option<usize>,
    exit_in_progress: bool,
}

impl RevealState {
    pub fn new(layout: HeadlineLayout) -> Self {
        Self {
            layout,
            hidden_english: BTreeMap::new(),
            returning_english: BTreeMap::new(),
            english_returning: false,
            proximity_korean: BTreeSet::new(),
            exiting_korean: BTreeSet::new(),
            exit_char_delays: BTreeMap::new(),
            touched_line: None,
            revealed_line: None,
            hide_order_line: None,
            exit_in_progress: false,
        }
    }

    pub fn layout(&self) -> &HeadlineLayout {
        &self.layout
    }

    pub fn english_return_max_delay_ms(&self) -> u32 {
        self.layout.max_english_line_len().saturating_sub(1) as u32 * ENGLISH_RETURN_STAGGER_MS
    }

    /// Upper bound on the time from a pointer leave until the headline is
    /// idle again.
    pub fn settle_after_leave_ms(&self) -> u32 {
        KOREAN_EXIT_COMPLETE_MS + ENGLISH_RETURN_FADE_IN_MS + self.english_return_max_delay_ms()
    }

    pub fn phase(&self) -> RevealPhase {
        if !self.exiting_korean.is_empty() {
            RevealPhase::Exit
        } else if self.english_returning {
            RevealPhase::Return
        } else if self.revealed_line.is_some() || !self.proximity_korean.is_empty() {
            RevealPhase::Reveal
        } else if !self.hidden_english.is_empty() || self.touched_line.is_some() {
            RevealPhase::Hide
        } else {
            RevealPhase::Idle
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == RevealPhase::Idle
    }

    pub fn touched_line(&self) -> Option<usize> {
        self.touched_line
    }

    pub fn revealed_line(&self) -> Option<usize> {
        self.revealed_line
    }

    pub fn is_english_hidden(&self, word: usize) -> bool {
        self.hidden_english.contains_key(&word)
    }

    pub fn hide_delay(&self, word: usize) -> u32 {
        self.hidden_english.get(&word).copied().unwrap_or(0)
    }

    pub fn english_returning(&self) -> bool {
        self.english_returning
    }

    pub fn return_delay(&self, word: usize) -> u32 {
        self.returning_english.get(&word).copied().unwrap_or(0)
    }

    pub fn hidden_english(&self) -> Vec<usize> {
        self.hidden_english.keys().copied().collect()
    }

    pub fn returning_english(&self) -> Vec<usize> {
        self.returning_english.keys().copied().collect()
    }

    pub fn is_korean_visible(&self, word: usize) -> bool {
        self.proximity_korean.contains(&word)
            || self
                .revealed_line
                .is_some_and(|line| self.layout.korean_line_range(line).contains(&word))
    }

    pub fn visible_korean(&self) -> Vec<usize> {
        (0..self.layout.korean_word_count())
            .filter(|&word| self.is_korean_visible(word))
            .collect()
    }

    pub fn is_korean_exiting(&self, word: usize) -> bool {
        self.exiting_korean.contains(&word)
    }

    pub fn exiting_korean(&self) -> Vec<usize> {
        self.exiting_korean.iter().copied().collect()
    }

    pub fn exit_char_delay(&self, char_index: usize) -> u32 {
        self.exit_char_delays.get(&char_index).copied().unwrap_or(0)
    }

    /// Handle a mouse move over the interactive hero area.
    pub fn pointer_move<R: Rng + ?Sized>(
        &mut self,
        hit: &PointerHit,
        timeline: &mut Timeline<RevealSlot>,
        rng: &mut R,
    ) {
        let touched = hit.touched_line();
        let had_line_interaction = self.touched_line.is_some() || self.revealed_line.is_some();

        if touched.is_none() && (had_line_interaction || self.exit_in_progress) {
            self.pointer_leave(timeline, rng);
            return;
        }

        self.exit_in_progress = false;
        timeline.cancel_each([RevealSlot::KoreanExit, RevealSlot::EnglishReturn]);
        self.exiting_korean.clear();
        self.exit_char_delays.clear();
        self.english_returning = false;
        self.returning_english.clear();

        match touched {
            Some(line) => {
                let line_words: Vec<usize> = self.layout.english_line_range(line).collect();
                let keep_order = self.hide_order_line == Some(line)
                    && self.hidden_english.keys().eq(line_words.iter());
                if !keep_order {
                    self.hide_order_line = Some(line);
                    self.hidden_english =
                        randomized_delays(&line_words, ENGLISH_LINE_EXIT_MAX_DELAY_MS, rng);
                }
                self.proximity_korean.clear();
            }
            None => {
                self.hide_order_line = None;
                self.hidden_english = stepped_delays(
                    hit.by_distance().iter().map(|word| word.index),
                    ENGLISH_PROXIMITY_HIDE_STEP_MS,
                );
                self.proximity_korean = hit
                    .nearby
                    .iter()
                    .map(|word| self.layout.korean_for(word.index))
                    .collect();
            }
        }
        log::trace!("hero pointer move, touched line {touched:?}");
        self.set_touched_line(touched, timeline);
    }

    /// Start the exit sequence. A leave while already exiting, or while
    /// nothing is shown, changes nothing.
    pub fn pointer_leave<R: Rng + ?Sized>(
        &mut self,
        timeline: &mut Timeline<RevealSlot>,
        rng: &mut R,
    ) {
        if self.exit_in_progress || self.is_idle() {
            return;
        }
        self.exit_in_progress = true;
        self.hide_order_line = None;
        timeline.cancel(RevealSlot::KoreanExit);

        let mut visible = std::mem::take(&mut self.proximity_korean);
        if let Some(line) = self.revealed_line {
            visible.extend(self.layout.korean_line_range(line));
        }
        self.set_touched_line(None, timeline);

        if visible.is_empty() {
            self.exiting_korean.clear();
            self.exit_char_delays.clear();
            self.start_english_return(timeline);
            return;
        }

        let chars: Vec<usize> = visible
            .iter()
            .flat_map(|&word| self.layout.korean_char_range(word))
            .collect();
        self.exit_char_delays = randomized_delays(&chars, KOREAN_EXIT_MAX_DELAY_MS, rng);
        self.exiting_korean = visible;
        log::debug!("korean exit for words {:?}", self.exiting_korean);
        timeline.after(RevealSlot::KoreanExit, KOREAN_EXIT_COMPLETE_MS);
    }

    fn set_touched_line(&mut self, touched: Option<usize>, timeline: &mut Timeline<RevealSlot>) {
        if self.touched_line == touched {
            return;
        }
        if let Some(previous) = self.touched_line {
            timeline.cancel(RevealSlot::LineReveal(previous));
        }
        self.revealed_line = None;
        self.touched_line = touched;
        if let Some(line) = touched.filter(|&line| line < self.layout.korean_line_count()) {
            timeline.after(RevealSlot::LineReveal(line), KOREAN_LINE_REVEAL_DELAY_MS);
        }
    }

    fn start_english_return(&mut self, timeline: &mut Timeline<RevealSlot>) {
        self.hide_order_line = None;
        let mut hidden: Vec<(usize, u32)> =
            std::mem::take(&mut self.hidden_english).into_iter().collect();
        // revive in the order the words disappeared
        hidden.sort_by_key(|&(word, delay)| (delay, word));
        let order: Vec<usize> = hidden.into_iter().map(|(word, _)| word).collect();

        let max_delay = self.english_return_max_delay_ms();
        self.returning_english = ordered_delays(&order, max_delay);
        self.english_returning = true;
        timeline.after(RevealSlot::EnglishReturn, ENGLISH_RETURN_FADE_IN_MS + max_delay);
    }
}

impl Sequencer for RevealState {
    type Slot = RevealSlot;

    fn fire(&mut self, slot: RevealSlot, timeline: &mut Timeline<RevealSlot>) {
        match slot {
            RevealSlot::LineReveal(line) => {
                if self.touched_line == Some(line) {
                    self.revealed_line = Some(line);
                }
            }
            RevealSlot::KoreanExit => {
                self.exiting_korean.clear();
                self.exit_char_delays.clear();
                self.start_english_return(timeline);
            }
            RevealSlot::EnglishReturn => {
                self.english_returning = false;
                self.returning_english.clear();
                self.exit_in_progress = false;
            }
        }
    }
}
