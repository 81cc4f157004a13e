use crate::constants::{
    ATTR_ADVANCE_THRESHOLD, ATTR_DRAG_MULTIPLIER, ATTR_RESIZE_QUIESCENCE, ATTR_START_INDEX,
};
use slide_core::CarouselConfig;
use std::str::FromStr;
use std::time::Duration;

fn parse_attr<T: FromStr>(attr: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = attr(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[slide] ignoring unparsable {name}={raw:?}");
            None
        }
    }
}

/// Apply wrapper `data-*` overrides on top of `base`.
///
/// `attr` looks an attribute up by name; missing or unparsable values leave
/// the base value in place.
pub fn config_from_attributes(
    base: CarouselConfig,
    attr: impl Fn(&str) -> Option<String>,
) -> CarouselConfig {
    let mut config = base;
    if let Some(v) = parse_attr::<f64>(&attr, ATTR_DRAG_MULTIPLIER) {
        config.drag_multiplier = v;
    }
    if let Some(v) = parse_attr::<f64>(&attr, ATTR_ADVANCE_THRESHOLD) {
        config.advance_threshold = v;
    }
    if let Some(ms) = parse_attr::<u64>(&attr, ATTR_RESIZE_QUIESCENCE) {
        config.resize_quiescence = Duration::from_millis(ms);
    }
    if let Some(i) = parse_attr::<usize>(&attr, ATTR_START_INDEX) {
        config.start_index = i;
    }
    config
}
