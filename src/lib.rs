// posixshim - POSIX primitives for a managed-language runtime
//
// This library exposes directory streams and a thin set of host syscalls to code
// running on top of a managed runtime. Syscalls hand back the host's raw status and
// leave errno in place; turning that pair into a language-level exception is the job
// of the layer above.

pub mod constants;
pub mod interface;
pub mod safeposix;

#[cfg(test)]
mod tests;

// Re-export the entry points the runtime binds to
pub use interface::{get_errno, init_verbosity, ForeignAddress, FcntlArg, FcntlCommand, MemsetLength};
pub use safeposix::dirstream::{DirError, DirectoryHandle};
pub use safeposix::posix::{posix, PosixContext};
