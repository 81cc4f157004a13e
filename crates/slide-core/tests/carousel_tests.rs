// Integration tests for the carousel state machine driven through a
// recording surface instead of the DOM.

use slide_core::*;
use std::cell::RefCell;
use std::rc::Rc;

const SLIDE_WIDTH: f64 = 200.0;
const WRAPPER_WIDTH: f64 = 300.0;

#[derive(Default)]
struct RecordingSurface {
    count: usize,
    wrapper_width: f64,
    offsets: Vec<f64>,
    transitions: Vec<bool>,
    active_marks: Vec<usize>,
}

impl RecordingSurface {
    fn with_slides(count: usize) -> Self {
        Self {
            count,
            wrapper_width: WRAPPER_WIDTH,
            ..Default::default()
        }
    }

    fn last_offset(&self) -> f64 {
        *self.offsets.last().expect("nothing rendered yet")
    }
}

impl TrackSurface for RecordingSurface {
    type Slide = usize;

    fn measure(&self) -> TrackLayout<usize> {
        TrackLayout {
            wrapper_width: self.wrapper_width,
            slides: (0..self.count)
                .map(|i| {
                    (
                        i,
                        SlideGeometry {
                            left: i as f64 * SLIDE_WIDTH,
                            width: SLIDE_WIDTH,
                        },
                    )
                })
                .collect(),
        }
    }

    fn translate(&mut self, offset: f64) {
        self.offsets.push(offset);
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transitions.push(enabled);
    }

    fn mark_active(&mut self, slides: &[SlideEntry<usize>], active: usize) {
        self.active_marks.push(slides[active].element);
    }
}

fn center_of(index: usize) -> f64 {
    -(index as f64 * SLIDE_WIDTH - (WRAPPER_WIDTH - SLIDE_WIDTH) / 2.0)
}

fn make_carousel(count: usize, start: usize) -> Carousel<RecordingSurface> {
    let config = CarouselConfig {
        start_index: start,
        ..CarouselConfig::default()
    };
    let mut c = Carousel::new(RecordingSurface::with_slides(count), config).unwrap();
    c.init().unwrap();
    c
}

/// Drag from x=500 by a pointer delta that yields `movement` at the default multiplier.
fn drag_by_movement(c: &mut Carousel<RecordingSurface>, movement: f64) -> GestureOutcome {
    let start_x = 500.0;
    c.begin_drag(start_x).unwrap();
    c.update_drag(start_x - movement / DRAG_MULTIPLIER).unwrap();
    c.end_drag().unwrap()
}

#[test]
fn init_centres_start_slide_and_enables_transition() {
    let c = make_carousel(5, 0);
    let nav = c.nav().unwrap();
    assert_eq!(nav.active, 0);
    assert_eq!(nav.prev, None);
    assert_eq!(nav.next, Some(1));
    assert_eq!(c.surface().last_offset(), center_of(0));
    assert_eq!(c.surface().transitions, vec![true]);
    assert_eq!(c.surface().active_marks, vec![0]);
    assert_eq!(c.drag().final_position, center_of(0));
}

#[test]
fn init_without_slides_is_an_error() {
    let mut c = Carousel::new(RecordingSurface::with_slides(0), CarouselConfig::default()).unwrap();
    assert_eq!(c.init(), Err(CarouselError::EmptyTrack));
    assert!(c.nav().is_none());
    assert!(c.surface().offsets.is_empty());
}

#[test]
fn live_position_tracks_every_pointer_sample() {
    let mut c = make_carousel(5, 2);
    let final_position = c.drag().final_position;
    c.begin_drag(400.0).unwrap();
    for x in [390.0, 350.0, 420.0, 100.0, 640.5] {
        let live = c.update_drag(x).unwrap();
        let expected = final_position - (400.0 - x) * 1.6;
        assert!((live - expected).abs() < 1e-9, "x={x}: {live} vs {expected}");
        assert_eq!(c.surface().last_offset(), live);
        assert_eq!(c.drag().final_position, final_position);
    }
}

#[test]
fn begin_drag_disables_transition_and_end_restores_it() {
    let mut c = make_carousel(3, 1);
    c.begin_drag(10.0).unwrap();
    assert_eq!(c.surface().transitions.last(), Some(&false));
    c.update_drag(12.0).unwrap();
    c.end_drag().unwrap();
    assert_eq!(c.surface().transitions.last(), Some(&true));
}

#[test]
fn large_left_drag_advances() {
    let mut c = make_carousel(5, 1);
    let outcome = drag_by_movement(&mut c, 121.0);
    assert_eq!(outcome, GestureOutcome::Advance(2));
    assert_eq!(c.nav().unwrap().active, 2);
    assert_eq!(c.surface().last_offset(), center_of(2));
    assert_eq!(c.drag().final_position, center_of(2));
}

#[test]
fn large_right_drag_retreats() {
    let mut c = make_carousel(5, 3);
    let outcome = drag_by_movement(&mut c, -121.0);
    assert_eq!(outcome, GestureOutcome::Retreat(2));
    assert_eq!(c.nav().unwrap().active, 2);
    assert_eq!(c.surface().last_offset(), center_of(2));
}

#[test]
fn movement_at_threshold_snaps_back() {
    let config = CarouselConfig {
        drag_multiplier: 1.0,
        start_index: 2,
        ..CarouselConfig::default()
    };
    let mut c = Carousel::new(RecordingSurface::with_slides(5), config).unwrap();
    c.init().unwrap();

    c.begin_drag(300.0).unwrap();
    c.update_drag(180.0).unwrap();
    assert_eq!(c.drag().movement, 120.0);
    assert_eq!(c.end_drag().unwrap(), GestureOutcome::SnapBack(2));

    c.begin_drag(300.0).unwrap();
    c.update_drag(420.0).unwrap();
    assert_eq!(c.drag().movement, -120.0);
    assert_eq!(c.end_drag().unwrap(), GestureOutcome::SnapBack(2));
    assert_eq!(c.surface().last_offset(), center_of(2));
}

#[test]
fn drag_past_either_end_snaps_back() {
    let mut c = make_carousel(4, 3);
    assert_eq!(drag_by_movement(&mut c, 500.0), GestureOutcome::SnapBack(3));
    assert_eq!(c.nav().unwrap().active, 3);
    assert_eq!(c.surface().last_offset(), center_of(3));

    c.change_slide(0).unwrap();
    assert_eq!(drag_by_movement(&mut c, -500.0), GestureOutcome::SnapBack(0));
    assert_eq!(c.nav().unwrap().active, 0);
    assert_eq!(c.surface().last_offset(), center_of(0));
}

#[test]
fn end_to_end_five_slides() {
    let mut c = make_carousel(5, 2);
    let nav = c.nav().unwrap();
    assert_eq!((nav.prev, nav.active, nav.next), (Some(1), 2, Some(3)));

    assert_eq!(drag_by_movement(&mut c, 150.0), GestureOutcome::Advance(3));
    let nav = c.nav().unwrap();
    assert_eq!((nav.prev, nav.active, nav.next), (Some(2), 3, Some(4)));

    assert_eq!(drag_by_movement(&mut c, -50.0), GestureOutcome::SnapBack(3));
    assert_eq!(c.nav().unwrap().active, 3);
    assert_eq!(c.surface().last_offset(), center_of(3));
    assert_eq!(c.drag().final_position, center_of(3));

    assert_eq!(drag_by_movement(&mut c, -200.0), GestureOutcome::Retreat(2));
    assert_eq!(c.nav().unwrap().active, 2);
}

#[test]
fn release_without_move_keeps_position() {
    let mut c = make_carousel(3, 1);
    c.begin_drag(50.0).unwrap();
    assert_eq!(c.end_drag().unwrap(), GestureOutcome::SnapBack(1));
    assert_eq!(c.drag().final_position, center_of(1));
}

#[test]
fn click_after_drag_does_not_reuse_old_movement() {
    let mut c = make_carousel(5, 1);
    drag_by_movement(&mut c, 300.0);
    assert_eq!(c.nav().unwrap().active, 2);
    c.begin_drag(50.0).unwrap();
    assert_eq!(c.end_drag().unwrap(), GestureOutcome::SnapBack(2));
}

#[test]
fn move_or_release_without_gesture_is_rejected() {
    let mut c = make_carousel(3, 0);
    let rendered = c.surface().offsets.len();
    assert_eq!(c.update_drag(10.0), Err(CarouselError::NoActiveDrag));
    assert_eq!(c.end_drag(), Err(CarouselError::NoActiveDrag));
    assert_eq!(c.surface().offsets.len(), rendered);
    assert_eq!(c.drag().final_position, center_of(0));
}

#[test]
fn begin_drag_before_init_is_rejected() {
    let mut c = Carousel::new(RecordingSurface::with_slides(3), CarouselConfig::default()).unwrap();
    assert_eq!(c.begin_drag(0.0), Err(CarouselError::EmptyTrack));
}

#[test]
fn change_slide_out_of_range_leaves_state_untouched() {
    let mut c = make_carousel(3, 1);
    let rendered = c.surface().offsets.len();
    assert_eq!(
        c.change_slide(3),
        Err(CarouselError::IndexOutOfRange { index: 3, count: 3 })
    );
    assert_eq!(c.nav().unwrap().active, 1);
    assert_eq!(c.surface().offsets.len(), rendered);
}

#[test]
fn change_slide_is_idempotent() {
    let mut c = make_carousel(5, 2);
    c.change_slide(2).unwrap();
    let first = c.surface().last_offset();
    c.change_slide(2).unwrap();
    assert_eq!(c.surface().last_offset(), first);
    assert_eq!(c.nav().unwrap().active, 2);
}

#[test]
fn active_next_and_prev_stop_at_the_ends() {
    let mut c = make_carousel(3, 0);
    assert!(!c.active_prev().unwrap());
    assert!(c.active_next().unwrap());
    assert!(c.active_next().unwrap());
    assert_eq!(c.nav().unwrap().active, 2);
    assert!(!c.active_next().unwrap());
    assert_eq!(c.nav().unwrap().active, 2);
    assert!(c.active_prev().unwrap());
    assert_eq!(c.nav().unwrap().active, 1);
}

#[test]
fn observers_fire_once_per_change_after_state_updates() {
    let mut c = make_carousel(4, 0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let id = c.subscribe(move |nav| sink.borrow_mut().push(nav.active));

    c.active_next().unwrap();
    drag_by_movement(&mut c, 130.0);
    c.active_next().unwrap();
    assert_eq!(*seen.borrow(), vec![1, 2, 3]);

    assert!(c.unsubscribe(id));
    assert!(!c.unsubscribe(id));
    c.active_prev().unwrap();
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn snap_back_also_notifies() {
    let mut c = make_carousel(3, 1);
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();
    c.subscribe(move |_| *sink.borrow_mut() += 1);
    drag_by_movement(&mut c, 10.0);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn relayout_recentres_active_slide_at_new_offsets() {
    let mut c = make_carousel(5, 3);
    c.surface_mut().wrapper_width = 500.0;
    assert!(c.relayout().unwrap());
    assert_eq!(c.nav().unwrap().active, 3);
    // margin (500 - 200) / 2 = 150
    assert_eq!(c.surface().last_offset(), -450.0);
    assert_eq!(c.drag().final_position, -450.0);
    assert_eq!(c.slides()[3].center_offset, -450.0);
}

#[test]
fn relayout_with_no_slides_is_a_noop() {
    let mut c = make_carousel(3, 2);
    let rendered = c.surface().offsets.len();
    c.surface_mut().count = 0;
    assert!(!c.relayout().unwrap());
    assert_eq!(c.slide_count(), 3);
    assert_eq!(c.nav().unwrap().active, 2);
    assert_eq!(c.surface().offsets.len(), rendered);
}

#[test]
fn relayout_clamps_active_when_slides_were_removed() {
    let mut c = make_carousel(5, 4);
    c.surface_mut().count = 2;
    assert!(c.relayout().unwrap());
    let nav = c.nav().unwrap();
    assert_eq!((nav.prev, nav.active, nav.next), (Some(0), 1, None));
}

#[test]
fn invalid_start_index_fails_init() {
    let config = CarouselConfig {
        start_index: 7,
        ..CarouselConfig::default()
    };
    let mut c = Carousel::new(RecordingSurface::with_slides(3), config).unwrap();
    assert_eq!(
        c.init(),
        Err(CarouselError::IndexOutOfRange { index: 7, count: 3 })
    );
}

#[test]
fn latched_change_is_delivered_after_the_borrow_is_released() {
    let mut c = Carousel::new(RecordingSurface::with_slides(3), CarouselConfig::default()).unwrap();
    let latch = ChangeLatch::default();
    latch.attach(&mut c);
    let shared = Rc::new(RefCell::new(c));

    // A listener that reads the carousel back, as the indicators do.
    let read_active = |c: &Rc<RefCell<Carousel<RecordingSurface>>>| {
        c.try_borrow().map(|c| c.nav().map(|n| n.active)).ok().flatten()
    };

    shared.borrow_mut().init().unwrap();
    assert!(latch.take());
    assert_eq!(read_active(&shared), Some(0));
    assert!(!latch.take());

    shared.borrow_mut().active_next().unwrap();
    assert!(latch.take());
    assert_eq!(read_active(&shared), Some(1));

    // No change, nothing latched.
    shared.borrow_mut().active_prev().unwrap();
    shared.borrow_mut().active_prev().unwrap();
    assert!(latch.take());
    assert!(!shared.borrow_mut().active_prev().unwrap());
    assert!(!latch.take());
}
