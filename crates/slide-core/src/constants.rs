// Shared drag and layout tuning constants used by the core and the web frontend.

// Drag
pub const DRAG_MULTIPLIER: f64 = 1.6; // scales raw pointer travel so the track moves faster than the finger
pub const ADVANCE_THRESHOLD: f64 = 120.0; // scaled movement needed to commit to a neighbour (strict >)

// Resize
pub const RESIZE_QUIESCENCE_MS: u64 = 200; // quiet period after the last resize before relayout

// Navigation
pub const DEFAULT_START_INDEX: usize = 0;
