use crate::constants::{NAV_COOLDOWN_MS, SECTION_TRANSITION_MS};
use crate::section::{SectionError, SectionState, SectionView};
use instant::Instant;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    #[inline]
    pub fn delta(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }

    /// Wheel mapping: positive vertical delta scrolls forward. A zero delta
    /// (pure horizontal scroll) does not navigate.
    #[inline]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Direction::Next)
        } else if delta_y < 0.0 {
            Some(Direction::Previous)
        } else {
            None
        }
    }

    /// Keyboard mapping using DOM `KeyboardEvent.key` names.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "PageDown" => Some(Direction::Next),
            "ArrowUp" | "PageUp" => Some(Direction::Previous),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavigationConfig {
    /// Lock window measured from the last accepted request.
    pub cooldown: Duration,
    /// Duration content collaborators use to animate between sections.
    /// Shorter than `cooldown`; the two are kept independent.
    pub transition: Duration,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_millis(NAV_COOLDOWN_MS),
            transition: Duration::from_millis(SECTION_TRANSITION_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavRejection {
    #[error("navigation locked for another {remaining:?}")]
    Locked { remaining: Duration },
    #[error("already at the first section")]
    BeforeFirst,
    #[error("section {target} is outside 0..{count}")]
    OutOfRange { target: usize, count: usize },
    #[error("section {0} is already current")]
    Unchanged(usize),
    #[error("navigation has been shut down")]
    Closed,
}

pub type NavOutcome = Result<Transition, NavRejection>;

/// Debounced section navigation.
///
/// Owns the only writer to the section state. An accepted request commits the
/// new index immediately and pushes the unlock deadline to `now + cooldown`;
/// requests arriving before that deadline are dropped, not queued.
pub struct NavigationController {
    state: Rc<SectionState>,
    config: NavigationConfig,
    unlock_at: Option<Instant>,
    closed: bool,
}

impl NavigationController {
    pub fn new(section_count: usize, config: NavigationConfig) -> Result<Self, SectionError> {
        Ok(Self {
            state: SectionState::new(section_count)?,
            config,
            unlock_at: None,
            closed: false,
        })
    }

    pub fn view(&self) -> SectionView {
        SectionView::new(self.state.clone())
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.state.current()
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.state.count()
    }

    pub fn is_locked_at(&self, now: Instant) -> bool {
        self.unlock_at.is_some_and(|deadline| now < deadline)
    }

    /// Drop an expired deadline. Returns `true` on the tick that unlocks.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.unlock_at {
            Some(deadline) if now >= deadline => {
                self.unlock_at = None;
                log::debug!("[nav] unlocked at section {}", self.current());
                true
            }
            _ => false,
        }
    }

    pub fn request_step_at(&mut self, direction: Direction, now: Instant) -> NavOutcome {
        self.check_open(now)?;
        let target = self
            .current()
            .checked_add_signed(direction.delta())
            .ok_or(NavRejection::BeforeFirst)?;
        self.accept(target, now)
    }

    pub fn request_index_at(&mut self, target: usize, now: Instant) -> NavOutcome {
        self.check_open(now)?;
        if target == self.current() {
            return Err(NavRejection::Unchanged(target));
        }
        self.accept(target, now)
    }

    pub fn request_step(&mut self, direction: Direction) -> NavOutcome {
        self.request_step_at(direction, Instant::now())
    }

    pub fn request_index(&mut self, target: usize) -> NavOutcome {
        self.request_index_at(target, Instant::now())
    }

    /// Clear the pending unlock and refuse all later requests.
    pub fn shutdown(&mut self) {
        self.unlock_at = None;
        self.closed = true;
    }

    fn check_open(&self, now: Instant) -> Result<(), NavRejection> {
        if self.closed {
            return Err(NavRejection::Closed);
        }
        match self.unlock_at {
            Some(deadline) if now < deadline => Err(NavRejection::Locked {
                remaining: deadline - now,
            }),
            _ => Ok(()),
        }
    }

    fn accept(&mut self, to: usize, now: Instant) -> NavOutcome {
        let count = self.state.count();
        if to >= count {
            return Err(NavRejection::OutOfRange { target: to, count });
        }
        let from = self.current();
        self.state.commit(to);
        // replaces any earlier deadline
        self.unlock_at = Some(now + self.config.cooldown);
        log::info!("[nav] section {} -> {} of {}", from, to, count);
        Ok(Transition { from, to })
    }
}
