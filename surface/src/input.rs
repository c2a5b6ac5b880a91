//! Input model: mouse buttons and the stroke state machine.
//!
//! `StrokeState` is the active gesture being tracked between pointer-down and
//! pointer-up. While drawing it carries the last committed logical point, the
//! start of the next segment. Nothing else about a stroke is retained; each
//! segment is committed to the bitmap as soon as it is drawn.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or pen / single-finger contact).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }

    /// Only the primary button draws.
    #[must_use]
    pub fn draws(self) -> bool {
        self == Self::Primary
    }
}

/// Internal state for the stroke state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    /// No stroke in progress; pointer moves are ignored.
    #[default]
    Idle,
    /// The pen is down.
    Drawing {
        /// Logical position of the last committed point.
        last: Point,
    },
}

impl StrokeState {
    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// The last committed logical point, if drawing.
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Drawing { last } => Some(*last),
        }
    }
}
