use std::{collections::HashMap, hash::Hash, time::Duration};

use leptos::prelude::*;

use crate::sequence::{Sequencer, TimerOp, Timeline};

/// Live browser timeouts, at most one per slot.
#[derive(Debug)]
pub struct TimerTable<S> {
    handles: HashMap<S, TimeoutHandle>,
}

impl<S> Default for TimerTable<S> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<S: Copy + Eq + Hash> TimerTable<S> {
    pub fn insert(&mut self, slot: S, handle: TimeoutHandle) {
        if let Some(previous) = self.handles.insert(slot, handle) {
            previous.clear();
        }
    }

    pub fn cancel(&mut self, slot: S) {
        if let Some(handle) = self.handles.remove(&slot) {
            handle.clear();
        }
    }

    /// Drop the handle of a timer that has already fired.
    pub fn forget(&mut self, slot: S) {
        self.handles.remove(&slot);
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.clear();
        }
    }
}

/// Runs a [`Sequencer`] against real `setTimeout` timers. The machine lives
/// in a signal so views can track it; every timer still pending when the
/// owning component unmounts is cleared.
pub struct SequenceDriver<M: Sequencer> {
    state: RwSignal<M>,
    timers: StoredValue<TimerTable<M::Slot>>,
}

impl<M: Sequencer> Clone for SequenceDriver<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Sequencer> Copy for SequenceDriver<M> {}

impl<M: Sequencer> SequenceDriver<M> {
    pub fn new(machine: M) -> Self {
        let driver = Self {
            state: RwSignal::new(machine),
            timers: StoredValue::new(TimerTable::default()),
        };
        on_cleanup(move || {
            driver.timers.try_update_value(|timers| timers.cancel_all());
        });
        driver
    }

    /// Read the machine, tracking it.
    pub fn with<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        self.state.with(f)
    }

    /// Run `f` against the machine and start or clear whatever timers it
    /// asked for. Does nothing once the owner is disposed.
    pub fn dispatch(&self, f: impl FnOnce(&mut M, &mut Timeline<M::Slot>)) {
        let mut timeline = Timeline::new();
        if self.state.try_update(|machine| f(machine, &mut timeline)).is_none() {
            return;
        }
        self.apply(timeline);
    }

    fn apply(&self, mut timeline: Timeline<M::Slot>) {
        let driver = *self;
        for op in timeline.drain() {
            match op {
                TimerOp::Cancel(slot) => {
                    self.timers.try_update_value(|timers| timers.cancel(slot));
                }
                TimerOp::Schedule { slot, delay_ms } => {
                    let handle = set_timeout_with_handle(
                        move || driver.fire(slot),
                        Duration::from_millis(delay_ms.into()),
                    );
                    match handle {
                        Ok(handle) => {
                            self.timers
                                .try_update_value(|timers| timers.insert(slot, handle));
                        }
                        Err(err) => log::warn!("couldn't schedule {slot:?}: {err:?}"),
                    }
                }
            }
        }
    }

    fn fire(&self, slot: M::Slot) {
        self.timers.try_update_value(|timers| timers.forget(slot));
        log::trace!("timer fired: {slot:?}");
        self.dispatch(|machine, timeline| machine.fire(slot, timeline));
    }
}
