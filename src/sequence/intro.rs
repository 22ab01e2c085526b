use super::{Sequencer, Timeline};

pub const INTRO_HOLD_MS: u32 = 2000;
pub const OVERLAY_BLUR_MS: u32 = 800;
pub const OVERLAY_REMOVE_MS: u32 = 800;
pub const INTRO_WORD_STAGGER_MS: u32 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntroSlot {
    Hold,
    Blur,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Holding,
    Blurring,
    Revealed,
    Done,
}

/// Full-screen headline overlay shown once per page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroSequence {
    phase: IntroPhase,
}

impl Default for IntroSequence {
    fn default() -> Self {
        Self {
            phase: IntroPhase::Holding,
        }
    }
}

impl IntroSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn overlay_visible(&self) -> bool {
        self.phase != IntroPhase::Done
    }

    pub fn overlay_blurring(&self) -> bool {
        matches!(self.phase, IntroPhase::Blurring | IntroPhase::Revealed)
    }

    pub fn page_visible(&self) -> bool {
        matches!(self.phase, IntroPhase::Revealed | IntroPhase::Done)
    }

    pub fn word_delay_ms(index: usize) -> u32 {
        index as u32 * INTRO_WORD_STAGGER_MS
    }

    pub fn start(&mut self, timeline: &mut Timeline<IntroSlot>) {
        if self.phase == IntroPhase::Holding {
            timeline.after(IntroSlot::Hold, INTRO_HOLD_MS);
        }
    }

    /// Jump straight to the end state. Returns `false` if the intro had
    /// already finished.
    pub fn skip(&mut self, timeline: &mut Timeline<IntroSlot>) -> bool {
        timeline.cancel_each([IntroSlot::Hold, IntroSlot::Blur, IntroSlot::Remove]);
        if self.phase == IntroPhase::Done {
            return false;
        }
        self.phase = IntroPhase::Done;
        true
    }
}

impl Sequencer for IntroSequence {
    type Slot = IntroSlot;

    fn fire(&mut self, slot: IntroSlot, timeline: &mut Timeline<IntroSlot>) {
        match (slot, self.phase) {
            (IntroSlot::Hold, IntroPhase::Holding) => {
                self.phase = IntroPhase::Blurring;
                timeline.after(IntroSlot::Blur, OVERLAY_BLUR_MS);
            }
            (IntroSlot::Blur, IntroPhase::Blurring) => {
                self.phase = IntroPhase::Revealed;
                timeline.after(IntroSlot::Remove, OVERLAY_REMOVE_MS);
            }
            (IntroSlot::Remove, IntroPhase::Revealed) => {
                self.phase = IntroPhase::Done;
            }
            // stale callback for a phase already left behind
            _ => {}
        }
    }
}
