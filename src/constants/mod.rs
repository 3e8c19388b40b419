pub mod fs_constants;
pub mod sys_constants;

pub use fs_constants::*;
pub use sys_constants::*;
