use crate::nav::NavigationIndex;

/// Per-gesture pointer bookkeeping.
///
/// `final_position` is the committed track offset and only moves on commit or
/// programmatic navigation. `live_position` is what is on screen mid-drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub start_x: f64,
    pub movement: f64,
    pub final_position: f64,
    pub live_position: Option<f64>,
    pub active: bool,
}

impl DragState {
    pub fn begin(&mut self, pointer_x: f64) {
        self.start_x = pointer_x;
        self.movement = 0.0;
        self.live_position = None;
        self.active = true;
    }

    /// Returns the offset to render for this pointer sample.
    pub fn update(&mut self, pointer_x: f64, multiplier: f64) -> f64 {
        self.movement = (self.start_x - pointer_x) * multiplier;
        let live = self.final_position - self.movement;
        self.live_position = Some(live);
        live
    }

    /// Commits the last rendered offset and returns the gesture's movement.
    pub fn end(&mut self) -> f64 {
        if let Some(live) = self.live_position.take() {
            self.final_position = live;
        }
        self.active = false;
        self.movement
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    Advance(usize),
    Retreat(usize),
    SnapBack(usize),
}

impl GestureOutcome {
    #[inline]
    pub fn target(self) -> usize {
        match self {
            GestureOutcome::Advance(i) | GestureOutcome::Retreat(i) | GestureOutcome::SnapBack(i) => i,
        }
    }
}

/// Positive movement means the pointer travelled left, toward `next`.
pub fn classify(movement: f64, threshold: f64, nav: &NavigationIndex) -> GestureOutcome {
    match (nav.prev, nav.next) {
        (_, Some(next)) if movement > threshold => GestureOutcome::Advance(next),
        (Some(prev), _) if movement < -threshold => GestureOutcome::Retreat(prev),
        _ => GestureOutcome::SnapBack(nav.active),
    }
}
