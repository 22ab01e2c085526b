//! Timer-driven UI choreography, kept free of any DOM access so the same
//! state machines run under the browser driver and under a manual clock.
pub mod intro;
pub mod reveal;
pub mod timeline;

use std::{fmt::Debug, hash::Hash};

pub use timeline::{TimerOp, Timeline};

pub trait Sequencer: Send + Sync + 'static {
    type Slot: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Handle the expiry of a timer previously scheduled in `slot`.
    fn fire(&mut self, slot: Self::Slot, timeline: &mut Timeline<Self::Slot>);
}
