pub mod fs_calls;
pub mod sys_calls;
pub use fs_calls::*;
pub use sys_calls::*;
