use crate::error::{CarouselError, Result};

/// Three-way pointer into the ordered slide list. No wraparound: the first
/// slide has no `prev` and the last has no `next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationIndex {
    pub prev: Option<usize>,
    pub active: usize,
    pub next: Option<usize>,
}

impl NavigationIndex {
    pub fn new(index: usize, count: usize) -> Result<Self> {
        if index >= count {
            return Err(CarouselError::IndexOutOfRange { index, count });
        }
        Ok(Self {
            prev: index.checked_sub(1),
            active: index,
            next: (index + 1 < count).then_some(index + 1),
        })
    }
}
