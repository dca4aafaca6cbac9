//! Page-turn presentation.
//!
//! Maps gestures to reader actions and describes the outgoing page's
//! geometry while a turn animates. The only state kept here is the transient
//! animation progress; the page cursor lives in the [`Reader`].

use crate::reader::Reader;
use crate::settings::PageTurnStyle;

/// Horizontal travel, as a fraction of the page width, that commits a swipe.
pub const SWIPE_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap { x: f64, width: f64 },
    Swipe { dx: f64, width: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderAction {
    NextPage,
    PreviousPage,
    ToggleChrome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Turned(TurnDirection),
    /// The gesture asked for a page beyond the start or end of the book.
    EdgeReached,
    ChromeToggled,
    Ignored,
}

/// Left third turns back, right third turns forward, middle toggles chrome.
/// A swipe to the left turns forward.
pub fn action_for_gesture(gesture: Gesture) -> Option<ReaderAction> {
    match gesture {
        Gesture::Tap { x, width } => {
            if width <= 0.0 {
                return None;
            }
            let fraction = x / width;
            if fraction < 1.0 / 3.0 {
                Some(ReaderAction::PreviousPage)
            } else if fraction > 2.0 / 3.0 {
                Some(ReaderAction::NextPage)
            } else {
                Some(ReaderAction::ToggleChrome)
            }
        }
        Gesture::Swipe { dx, width } => {
            if width <= 0.0 {
                return None;
            }
            let fraction = dx / width;
            if fraction <= -SWIPE_THRESHOLD {
                Some(ReaderAction::NextPage)
            } else if fraction >= SWIPE_THRESHOLD {
                Some(ReaderAction::PreviousPage)
            } else {
                None
            }
        }
    }
}

/// Geometry of the outgoing page at one point of a turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Horizontal offset as a fraction of page width; negative moves left.
    pub offset: f64,
    pub opacity: f64,
    /// Curl rotation in degrees; negative curls back toward the reader.
    pub curl_angle: f64,
}

impl TransitionFrame {
    pub const RESTING: TransitionFrame = TransitionFrame {
        offset: 0.0,
        opacity: 1.0,
        curl_angle: 0.0,
    };
}

#[derive(Debug, Clone)]
pub struct PageTransition {
    style: PageTurnStyle,
    direction: Option<TurnDirection>,
    progress: f64,
}

impl PageTransition {
    pub fn new(style: PageTurnStyle) -> Self {
        Self {
            style,
            direction: None,
            progress: 0.0,
        }
    }

    pub fn style(&self) -> PageTurnStyle {
        self.style
    }

    pub fn direction(&self) -> Option<TurnDirection> {
        self.direction
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_animating(&self) -> bool {
        self.direction.is_some()
    }

    /// Starts a turn, replacing any turn still in flight.
    pub fn begin(&mut self, style: PageTurnStyle, direction: TurnDirection) {
        self.style = style;
        self.direction = Some(direction);
        self.progress = 0.0;
    }

    /// Advances the animation; returns `true` once the turn has completed.
    pub fn advance(&mut self, delta: f64) -> bool {
        if self.direction.is_none() {
            return false;
        }
        self.progress = (self.progress + delta).clamp(0.0, 1.0);
        if self.progress >= 1.0 {
            self.finish();
            return true;
        }
        false
    }

    pub fn finish(&mut self) {
        self.direction = None;
        self.progress = 0.0;
    }

    pub fn frame(&self) -> TransitionFrame {
        let Some(direction) = self.direction else {
            return TransitionFrame::RESTING;
        };
        let sign = match direction {
            TurnDirection::Forward => -1.0,
            TurnDirection::Backward => 1.0,
        };
        let p = self.progress;
        match self.style {
            PageTurnStyle::Slide => TransitionFrame {
                offset: sign * p,
                ..TransitionFrame::RESTING
            },
            PageTurnStyle::Fade => TransitionFrame {
                opacity: 1.0 - p,
                ..TransitionFrame::RESTING
            },
            PageTurnStyle::Curl => TransitionFrame {
                curl_angle: -sign * 180.0 * p,
                ..TransitionFrame::RESTING
            },
        }
    }
}

/// Applies a gesture to `reader`, starting a turn in the reader's current
/// page-turn style when the page actually changes.
pub fn apply_gesture(
    reader: &mut Reader,
    transition: &mut PageTransition,
    gesture: Gesture,
) -> GestureOutcome {
    let (moved, direction) = match action_for_gesture(gesture) {
        Some(ReaderAction::NextPage) => (reader.next_page(), TurnDirection::Forward),
        Some(ReaderAction::PreviousPage) => (reader.previous_page(), TurnDirection::Backward),
        Some(ReaderAction::ToggleChrome) => return GestureOutcome::ChromeToggled,
        None => return GestureOutcome::Ignored,
    };

    if !moved {
        return GestureOutcome::EdgeReached;
    }
    transition.begin(reader.settings().page_turn_style, direction);
    GestureOutcome::Turned(direction)
}
