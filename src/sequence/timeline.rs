/// A single request against a named timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOp<S> {
    Schedule { slot: S, delay_ms: u32 },
    Cancel(S),
}

/// Ordered record of the timer requests made while handling one event.
///
/// The sequencers never touch a real timer: they write into a `Timeline`
/// and whoever owns them (the browser driver, or a manual clock in tests)
/// replays the ops in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<S> {
    ops: Vec<TimerOp<S>>,
}

impl<S> Default for Timeline<S> {
    fn default() -> Self {
        Self { ops: Vec::new() }
    }
}

impl<S: Copy + PartialEq> Timeline<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `slot` to fire after `delay_ms`. Any timer already pending
    /// in the same slot is cancelled first.
    pub fn after(&mut self, slot: S, delay_ms: u32) {
        self.ops.push(TimerOp::Cancel(slot));
        self.ops.push(TimerOp::Schedule { slot, delay_ms });
    }

    pub fn cancel(&mut self, slot: S) {
        self.ops.push(TimerOp::Cancel(slot));
    }

    pub fn cancel_each(&mut self, slots: impl IntoIterator<Item = S>) {
        for slot in slots {
            self.cancel(slot);
        }
    }

    pub fn ops(&self) -> &[TimerOp<S>] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The delay of the last schedule request for `slot`, if it was not
    /// cancelled afterwards.
    pub fn scheduled(&self, slot: S) -> Option<u32> {
        self.ops.iter().fold(None, |pending, op| match *op {
            TimerOp::Schedule { slot: s, delay_ms } if s == slot => Some(delay_ms),
            TimerOp::Cancel(s) if s == slot => None,
            _ => pending,
        })
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, TimerOp<S>> {
        self.ops.drain(..)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualClock;
    use super::*;

    #[test]
    fn test_after_cancels_before_scheduling() {
        let mut timeline = Timeline::new();
        timeline.after('a', 10);
        assert_eq!(
            timeline.ops(),
            &[
                TimerOp::Cancel('a'),
                TimerOp::Schedule {
                    slot: 'a',
                    delay_ms: 10
                }
            ]
        );
        assert_eq!(timeline.scheduled('a'), Some(10));
        timeline.cancel('a');
        assert_eq!(timeline.scheduled('a'), None);
    }

    #[test]
    fn test_manual_clock_keeps_one_timer_per_slot() {
        let mut clock = ManualClock::new();
        let mut timeline = Timeline::new();
        timeline.after('a', 100);
        timeline.after('a', 300);
        timeline.after('b', 200);
        clock.apply(&mut timeline);

        let mut fired = Vec::new();
        clock.advance_to(1_000, |slot, _| fired.push(slot));
        assert_eq!(fired, vec!['b', 'a']);
        assert!(clock.is_idle());
    }

    #[test]
    fn test_manual_clock_chains_callbacks() {
        let mut clock = ManualClock::new();
        let mut timeline = Timeline::new();
        timeline.after(1u8, 50);
        clock.apply(&mut timeline);

        let mut fired_at = Vec::new();
        clock.advance_to(500, |slot, tl| {
            fired_at.push(slot);
            if slot == 1 {
                tl.after(2, 50);
            }
        });
        assert_eq!(fired_at, vec![1, 2]);
        assert_eq!(clock.now(), 500);
    }
}
