//! Current-section state shared between the navigation controller and its
//! readers.
//!
//! The state has a single writer (the [`NavigationController`]) and any number
//! of readers holding a [`SectionView`]. Everything runs on one thread, so the
//! index lives in a [`Cell`] and a write is visible to every view as soon as
//! the controller commits it.
//!
//! [`NavigationController`]: crate::navigation::NavigationController

use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("a section sequence needs at least one section")]
    Empty,
}

#[derive(Debug)]
pub(crate) struct SectionState {
    current: Cell<usize>,
    count: usize,
}

impl SectionState {
    pub(crate) fn new(count: usize) -> Result<Rc<Self>, SectionError> {
        if count == 0 {
            return Err(SectionError::Empty);
        }
        Ok(Rc::new(Self {
            current: Cell::new(0),
            count,
        }))
    }

    pub(crate) fn commit(&self, index: usize) {
        debug_assert!(index < self.count);
        self.current.set(index);
    }

    #[inline]
    pub(crate) fn current(&self) -> usize {
        self.current.get()
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.count
    }
}

/// Read-only handle onto the section state.
#[derive(Clone, Debug)]
pub struct SectionView(Rc<SectionState>);

impl SectionView {
    pub(crate) fn new(state: Rc<SectionState>) -> Self {
        Self(state)
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.0.current()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.0.count()
    }

    #[inline]
    pub fn is_current(&self, index: usize) -> bool {
        self.0.current() == index
    }

    /// Normalized position in the section sequence, in \[0, 1\].
    #[inline]
    pub fn progress(&self) -> f32 {
        section_progress(self.current(), self.count())
    }
}

/// `current / (count - 1)`, or 0 for a single-section sequence.
#[inline]
pub fn section_progress(current: usize, count: usize) -> f32 {
    if count > 1 {
        (current.min(count - 1) as f32) / ((count - 1) as f32)
    } else {
        0.0
    }
}
