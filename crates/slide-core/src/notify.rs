use crate::carousel::{Carousel, ObserverId, TrackSurface};
use std::cell::Cell;
use std::rc::Rc;

/// Latches change notifications so they can be delivered after the carousel
/// borrow is released.
///
/// Observers run while the carousel is mutably borrowed. Listeners that read
/// the carousel back (indicators, host callbacks) must instead wait for
/// [`ChangeLatch::take`] once the mutation has returned.
#[derive(Clone, Debug, Default)]
pub struct ChangeLatch(Rc<Cell<bool>>);

impl ChangeLatch {
    pub fn attach<S: TrackSurface>(&self, carousel: &mut Carousel<S>) -> ObserverId {
        let flag = self.0.clone();
        carousel.subscribe(move |_| flag.set(true))
    }

    /// True once per batch of changes since the last call.
    #[inline]
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}
