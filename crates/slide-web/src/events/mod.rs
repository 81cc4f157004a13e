pub mod pointer;
pub mod resize;

pub use pointer::DragListeners;
pub use resize::ResizeListener;
