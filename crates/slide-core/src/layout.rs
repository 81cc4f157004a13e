//! Slide geometry and the centring offsets derived from it.
//!
//! Offsets are in CSS pixels along the track's horizontal axis. A negative
//! offset moves the track left, bringing later slides into view.

/// Measured box of one slide, relative to the track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideGeometry {
    pub left: f64,
    pub width: f64,
}

/// One slide as seen by the core: the UI handle plus where to translate the
/// track so this slide sits in the middle of the wrapper.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideEntry<E> {
    pub element: E,
    pub center_offset: f64,
}

/// Snapshot produced by a surface measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackLayout<E> {
    pub wrapper_width: f64,
    pub slides: Vec<(E, SlideGeometry)>,
}

#[inline]
pub fn center_offset(slide: SlideGeometry, wrapper_width: f64) -> f64 {
    let margin = (wrapper_width - slide.width) / 2.0;
    -(slide.left - margin)
}

pub fn build_entries<E>(layout: TrackLayout<E>) -> Vec<SlideEntry<E>> {
    let wrapper_width = layout.wrapper_width;
    layout
        .slides
        .into_iter()
        .map(|(element, geometry)| SlideEntry {
            element,
            center_offset: center_offset(geometry, wrapper_width),
        })
        .collect()
}
