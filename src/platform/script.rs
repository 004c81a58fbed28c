//! Pre-recorded input tape
//!
//! Stands in for a live key feed: events are tagged with the tick they
//! should be delivered on and handed out in order.

use super::input::{InputEvent, Key};

#[derive(Debug, Clone, Default)]
pub struct InputScript {
    /// (tick, event), sorted by tick; same-tick events keep insertion order
    steps: Vec<(u64, InputEvent)>,
    cursor: usize,
}

impl InputScript {
    pub fn new(mut steps: Vec<(u64, InputEvent)>) -> Self {
        steps.sort_by_key(|(tick, _)| *tick);
        Self { steps, cursor: 0 }
    }

    /// Attract-mode tape: drift right, warp and fire, dodge down, fire again,
    /// then press back at `exit_at`
    pub fn demo(exit_at: u64) -> Self {
        let mut steps = Vec::new();

        steps.push((10, InputEvent::press(Key::Right)));
        for tick in (12..30).step_by(2) {
            steps.push((tick, InputEvent::repeat(Key::Right)));
        }
        steps.push((30, InputEvent::release(Key::Right)));

        steps.push((40, InputEvent::press(Key::Action)));
        steps.push((55, InputEvent::release(Key::Action)));

        steps.push((70, InputEvent::press(Key::Down)));
        for tick in (72..90).step_by(3) {
            steps.push((tick, InputEvent::repeat(Key::Down)));
        }
        steps.push((90, InputEvent::release(Key::Down)));

        steps.push((100, InputEvent::press(Key::Up)));
        steps.push((120, InputEvent::press(Key::Action)));
        steps.push((124, InputEvent::release(Key::Action)));

        steps.push((exit_at, InputEvent::press(Key::Back)));
        Self::new(steps)
    }

    /// Events due at or before `tick` that have not been handed out yet
    pub fn due(&mut self, tick: u64) -> impl Iterator<Item = InputEvent> + '_ {
        let start = self.cursor;
        let end = start + self.steps[start..].iter().take_while(|(t, _)| *t <= tick).count();
        self.cursor = end;
        self.steps[start..end].iter().map(|(_, event)| *event)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::Phase;

    #[test]
    fn test_due_hands_out_each_event_once() {
        let mut script = InputScript::new(vec![
            (5, InputEvent::press(Key::Back)),
            (1, InputEvent::press(Key::Up)),
            (1, InputEvent::release(Key::Up)),
        ]);

        assert_eq!(script.due(0).count(), 0);
        let first: Vec<_> = script.due(1).collect();
        assert_eq!(
            first,
            vec![InputEvent::press(Key::Up), InputEvent::release(Key::Up)]
        );
        assert_eq!(script.due(3).count(), 0);
        assert!(!script.is_finished());

        // A late poll still delivers what it missed
        let last: Vec<_> = script.due(9).collect();
        assert_eq!(last, vec![InputEvent::press(Key::Back)]);
        assert!(script.is_finished());
    }

    #[test]
    fn test_demo_ends_with_back() {
        let mut script = InputScript::demo(200);
        let all: Vec<_> = script.due(u64::MAX).collect();
        assert_eq!(all.last(), Some(&InputEvent::new(Key::Back, Phase::Press)));
        assert!(all.iter().any(|e| e.key == Key::Action && e.phase == Phase::Press));
    }
}
