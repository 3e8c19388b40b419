pub mod dirstream;
pub mod filesystem;
pub mod posix;
pub mod syscalls;
