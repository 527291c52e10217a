//! Effect cycling
//!
//! A [`Cycler`] owns the cursor into [`Effect::ALL`]. Stepping is a pure
//! function of the cursor so the rotation can be tested without a timer.

use crate::effect::Effect;

/// Index that follows `index` in a cyclic sequence of `len` entries.
///
/// Returns 0 for an empty sequence.
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

/// Effect shown after `ticks` steps from the first entry
pub fn effect_after(ticks: u64) -> Effect {
    let len = Effect::ALL.len() as u64;
    Effect::ALL[(ticks % len) as usize]
}

/// Cursor over the fixed effect list.
///
/// The cursor always lies in `[0, Effect::ALL.len())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cycler {
    cursor: usize,
}

impl Cycler {
    /// Create a cycler positioned at the first effect
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Create a cycler positioned at `effect`
    pub fn starting_at(effect: Effect) -> Self {
        Self { cursor: effect.index() }
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Effect under the cursor
    pub fn current(&self) -> Effect {
        Effect::ALL[self.cursor]
    }

    /// Effect the next [`advance`](Self::advance) will return, without moving
    pub fn peek_next(&self) -> Effect {
        Effect::ALL[next_index(self.cursor, Effect::ALL.len())]
    }

    /// Move the cursor one step, wrapping, and return the new effect
    pub fn advance(&mut self) -> Effect {
        self.cursor = next_index(self.cursor, Effect::ALL.len());
        self.current()
    }

    /// Rewind to the first effect
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn test_next_index_empty_sequence() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(next_index(5, 0), 0);
    }

    #[test]
    fn test_starts_at_jump() {
        let cycler = Cycler::new();
        assert_eq!(cycler.cursor(), 0);
        assert_eq!(cycler.current(), Effect::Jump);
    }

    #[test]
    fn test_advance_has_period_three() {
        let mut cycler = Cycler::new();
        assert_eq!(cycler.advance(), Effect::Pop);
        assert_eq!(cycler.advance(), Effect::Flip);
        assert_eq!(cycler.advance(), Effect::Jump);
        assert_eq!(cycler.cursor(), 0);
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut cycler = Cycler::new();
        for _ in 0..100 {
            cycler.advance();
            assert!(cycler.cursor() < Effect::ALL.len());
        }
    }

    #[test]
    fn test_peek_does_not_move() {
        let cycler = Cycler::starting_at(Effect::Flip);
        assert_eq!(cycler.peek_next(), Effect::Jump);
        assert_eq!(cycler.current(), Effect::Flip);
    }

    #[test]
    fn test_reset() {
        let mut cycler = Cycler::starting_at(Effect::Pop);
        cycler.reset();
        assert_eq!(cycler.current(), Effect::Jump);
    }

    #[test]
    fn test_effect_after_matches_cycler() {
        let mut cycler = Cycler::new();
        assert_eq!(effect_after(0), Effect::Jump);
        for ticks in 1..10 {
            assert_eq!(effect_after(ticks), cycler.advance());
        }
    }
}
