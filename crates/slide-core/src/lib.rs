pub mod carousel;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod drag;
pub mod error;
pub mod layout;
pub mod nav;
pub mod notify;

pub use carousel::*;
pub use config::*;
pub use constants::*;
pub use debounce::*;
pub use drag::*;
pub use error::*;
pub use layout::*;
pub use nav::*;
pub use notify::*;
