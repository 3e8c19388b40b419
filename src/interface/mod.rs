// Interface that the posix layer uses to talk to the host and to foreign memory.
pub mod errnos;
pub mod mem;
mod misc;
pub mod types;
pub use errnos::*;
pub use mem::ForeignAddress;
pub use misc::*;
pub use types::*;
