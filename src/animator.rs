//! Heading animation state machine
//!
//! An [`Animator`] owns the heading handle, the effect cursor and the tick
//! interval. Its life has two phases:
//!
//! - **Idle**: after [`Animator::mount`] the heading has been split into
//!   glyphs but carries no animation identifier.
//! - **Running**: after [`Animator::ready`] the heading shows `jump` with the
//!   `animate` class, and every [`TICK_PERIOD`] the next effect is applied and
//!   the animation restarted.
//!
//! Restarts are keyed: every restart bumps [`AnimationState::generation`] and
//! the host decides how to replay the animation for the new key.

use std::time::Duration;

use tracing::{debug, warn};

use crate::cycle::Cycler;
use crate::effect::Effect;
use crate::error::{Error, Result};
use crate::host::{HeadingElement, Page, ANIMATE_CLASS, ANIMATION_PROPERTY, HEADING_SELECTOR};
use crate::interval::Interval;
use crate::split::{glyph_count, split_text};

/// Time between effect changes
pub const TICK_PERIOD: Duration = Duration::from_millis(2000);

/// Lifecycle phase of an [`Animator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted, waiting for the page-ready signal
    Idle,
    /// Cycling effects on every tick
    Running,
}

/// Observable animation state of the heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    /// Identifier in `--animation`, `None` until ready
    pub effect: Option<Effect>,
    /// Whether the `animate` class is present
    pub animating: bool,
    /// Restart key, incremented on every restart
    pub generation: u64,
}

/// Drives a single heading through the effect cycle
#[derive(Debug)]
pub struct Animator<H> {
    heading: H,
    cycler: Cycler,
    interval: Interval,
    state: AnimationState,
    phase: Phase,
    glyphs: usize,
}

impl<H: HeadingElement> Animator<H> {
    /// Locate the heading on `page` and split its text into glyphs.
    ///
    /// Fails with [`Error::HeadingNotFound`] when the page has no heading.
    /// Mounting replaces the heading's children; mounting the same heading
    /// twice is not supported.
    pub fn mount<P: Page<Heading = H>>(page: &P) -> Result<Self> {
        let heading = page.query(HEADING_SELECTOR)?.ok_or_else(|| Error::HeadingNotFound {
            selector: HEADING_SELECTOR.to_string(),
        })?;
        Self::attach(heading)
    }

    /// Split an already-located heading into glyphs
    pub fn attach(mut heading: H) -> Result<Self> {
        let segments = split_text(&heading.text()?);
        heading.replace_content(&segments)?;
        let glyphs = glyph_count(&segments);
        debug!(glyphs, "split heading");

        Ok(Self {
            heading,
            cycler: Cycler::new(),
            interval: Interval::new(TICK_PERIOD),
            state: AnimationState::default(),
            phase: Phase::Idle,
            glyphs,
        })
    }

    /// Handle the page-ready signal: show the first effect and start animating.
    ///
    /// Later calls are ignored.
    pub fn ready(&mut self) -> Result<()> {
        if self.phase == Phase::Running {
            return Ok(());
        }

        self.cycler.reset();
        let effect = self.cycler.current();
        self.heading.set_property(ANIMATION_PROPERTY, effect.name())?;
        self.heading.set_class(ANIMATE_CLASS, true)?;

        self.state.effect = Some(effect);
        self.state.animating = true;
        self.phase = Phase::Running;
        debug!(%effect, "heading ready");
        Ok(())
    }

    /// Advance to the next effect and restart the animation.
    ///
    /// Returns the new effect, or `None` if the animator is still idle.
    pub fn tick(&mut self) -> Result<Option<Effect>> {
        if self.phase == Phase::Idle {
            warn!("tick before page ready ignored");
            return Ok(None);
        }

        let effect = self.cycler.advance();
        self.heading.set_property(ANIMATION_PROPERTY, effect.name())?;
        self.heading.restart(ANIMATE_CLASS)?;

        self.state.effect = Some(effect);
        self.state.generation += 1;
        debug!(%effect, generation = self.state.generation, "tick");
        Ok(Some(effect))
    }

    /// Feed elapsed time, running one tick per completed period.
    ///
    /// Time spent idle does not count toward the first tick. Returns the number
    /// of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> Result<u64> {
        if self.phase == Phase::Idle {
            return Ok(0);
        }

        let ticks = self.interval.advance(elapsed);
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(ticks)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Effect currently shown, `None` while idle
    pub fn effect(&self) -> Option<Effect> {
        self.state.effect
    }

    /// Number of wrapped characters in the heading
    pub fn glyph_count(&self) -> usize {
        self.glyphs
    }

    /// Time until the next tick while running
    pub fn until_next_tick(&self) -> Duration {
        self.interval.until_next()
    }

    pub fn heading(&self) -> &H {
        &self.heading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryPage;

    #[test]
    fn test_mount_splits_heading() {
        let page = MemoryPage::with_heading("Hi there");
        let animator = Animator::mount(&page).unwrap();

        assert_eq!(animator.glyph_count(), 7);
        assert_eq!(animator.phase(), Phase::Idle);
        assert_eq!(animator.effect(), None);

        let node = page.element("h1").unwrap();
        assert!(node.markup.starts_with("<span style=\"--delay: 0s\">H</span>"));
        assert!(!node.has_class(ANIMATE_CLASS));
        assert_eq!(node.property(ANIMATION_PROPERTY), None);
    }

    #[test]
    fn test_mount_without_heading_fails() {
        let mut page = MemoryPage::new();
        page.push("p", "no heading here");

        let err = Animator::mount(&page).unwrap_err();
        assert!(matches!(err, Error::HeadingNotFound { ref selector } if selector == "h1"));
    }

    #[test]
    fn test_ready_applies_jump() {
        let page = MemoryPage::with_heading("Hi");
        let mut animator = Animator::mount(&page).unwrap();
        animator.ready().unwrap();

        let node = page.element("h1").unwrap();
        assert_eq!(node.property(ANIMATION_PROPERTY), Some("jump"));
        assert!(node.has_class(ANIMATE_CLASS));
        assert_eq!(
            animator.state(),
            AnimationState { effect: Some(Effect::Jump), animating: true, generation: 0 }
        );
    }

    #[test]
    fn test_ready_twice_is_ignored() {
        let page = MemoryPage::with_heading("Hi");
        let mut animator = Animator::mount(&page).unwrap();
        animator.ready().unwrap();
        animator.tick().unwrap();
        animator.ready().unwrap();

        assert_eq!(animator.effect(), Some(Effect::Pop));
    }

    #[test]
    fn test_tick_before_ready_is_ignored() {
        let page = MemoryPage::with_heading("Hi");
        let mut animator = Animator::mount(&page).unwrap();

        assert_eq!(animator.tick().unwrap(), None);
        assert_eq!(animator.advance(TICK_PERIOD * 3).unwrap(), 0);
        assert_eq!(page.element("h1").unwrap().property(ANIMATION_PROPERTY), None);
    }

    #[test]
    fn test_ticks_cycle_and_restart() {
        let page = MemoryPage::with_heading("Hi");
        let mut animator = Animator::mount(&page).unwrap();
        animator.ready().unwrap();

        assert_eq!(animator.tick().unwrap(), Some(Effect::Pop));
        assert_eq!(animator.tick().unwrap(), Some(Effect::Flip));
        assert_eq!(animator.tick().unwrap(), Some(Effect::Jump));

        let node = page.element("h1").unwrap();
        assert_eq!(node.property(ANIMATION_PROPERTY), Some("jump"));
        assert!(node.has_class(ANIMATE_CLASS));
        assert_eq!(node.restarts, 3);
        assert_eq!(animator.state().generation, 3);
    }

    #[test]
    fn test_advance_runs_ticks_per_period() {
        let page = MemoryPage::with_heading("Hi");
        let mut animator = Animator::mount(&page).unwrap();
        animator.ready().unwrap();

        assert_eq!(animator.advance(Duration::from_millis(1999)).unwrap(), 0);
        assert_eq!(animator.effect(), Some(Effect::Jump));
        assert_eq!(animator.until_next_tick(), Duration::from_millis(1));

        assert_eq!(animator.advance(Duration::from_millis(4001)).unwrap(), 3);
        assert_eq!(animator.effect(), Some(Effect::Jump));
        assert_eq!(animator.state().generation, 3);
    }

    #[test]
    fn test_tick_after_heading_removed_fails() {
        let mut page = MemoryPage::with_heading("Hi");
        let mut animator = Animator::mount(&page).unwrap();
        animator.ready().unwrap();
        page.remove("h1");

        assert!(matches!(animator.tick(), Err(Error::Detached)));
    }
}
