// Pure helpers for classifying DOM input events by type name.

/// The move event that belongs to a press or release event of the same family.
#[inline]
pub fn move_event_for(event_type: &str) -> Option<&'static str> {
    match event_type {
        "mousedown" | "mousemove" | "mouseup" => Some("mousemove"),
        "touchstart" | "touchmove" | "touchend" | "touchcancel" => Some("touchmove"),
        _ => None,
    }
}

#[inline]
pub fn is_mouse_event(event_type: &str) -> bool {
    event_type.starts_with("mouse")
}

/// A mouse move with no button held: the release happened outside the
/// wrapper and was never seen, so the gesture has to end here.
#[inline]
pub fn released_elsewhere(event_type: &str, buttons: u16) -> bool {
    event_type == "mousemove" && buttons == 0
}

/// Press events that begin a gesture on the wrapper.
pub const START_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Release events that end a gesture on the wrapper.
pub const END_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];
