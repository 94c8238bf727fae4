//! Month-to-month navigation: floating prev/next controls and swipes.

use super::route::View;
use serde::Serialize;

/// Horizontal travel (px) needed before a touch counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 60.0;
/// Vertical travel (px) above which a touch is a scroll, not a swipe.
pub const SWIPE_RESTRAINT: f64 = 80.0;

pub const FIRST_MONTH: u32 = 1;
pub const LAST_MONTH: u32 = 12;

pub fn prev_month(id: u32) -> Option<u32> {
    (id > FIRST_MONTH).then(|| id - 1)
}

pub fn next_month(id: u32) -> Option<u32> {
    (id < LAST_MONTH).then(|| id + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavControls {
    pub prev: Option<View>,
    pub next: Option<View>,
    pub back: View,
}

impl NavControls {
    pub fn for_month(id: u32) -> Self {
        Self {
            prev: prev_month(id).map(View::Month),
            next: next_month(id).map(View::Month),
            back: View::Year,
        }
    }
}

/// Touch travel between touchstart and touchend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub dx: f64,
    pub dy: f64,
}

impl Swipe {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Swiping right goes to the previous month, left to the next one.
pub fn classify_swipe(swipe: Swipe, month_id: u32) -> Option<View> {
    if swipe.dy.abs() > SWIPE_RESTRAINT {
        return None;
    }

    if swipe.dx > SWIPE_THRESHOLD {
        prev_month(month_id).map(View::Month)
    } else if swipe.dx < -SWIPE_THRESHOLD {
        next_month(month_id).map(View::Month)
    } else {
        None
    }
}
