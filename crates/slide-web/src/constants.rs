// DOM-facing names and styles used by the web frontend.

// Classes
pub const ACTIVE_CLASS: &str = "active"; // marks the active slide and its indicator

// Events
pub const CHANGE_EVENT: &str = "changeEvent"; // dispatched on the wrapper after every slide change

// Track styling
pub const TRACK_TRANSITION: &str = "transform .3s"; // easing while not dragging

// Indicator list
pub const CONTROL_ATTR: &str = "data-control";
pub const CONTROL_ATTR_VALUE: &str = "slide";

// Optional tunable overrides read from the wrapper element
pub const ATTR_DRAG_MULTIPLIER: &str = "data-drag-multiplier";
pub const ATTR_ADVANCE_THRESHOLD: &str = "data-advance-threshold";
pub const ATTR_RESIZE_QUIESCENCE: &str = "data-resize-quiescence";
pub const ATTR_START_INDEX: &str = "data-start-index";
