// Path handling shared by the path-taking syscalls
use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;

use crate::interface;
use crate::interface::{syscall_error, Errno};

/// Turns a runtime path into the C string the host call expects. The bytes are passed
/// through as-is: no normalisation, no resolution against the cached working directory.
///
/// A path holding an interior NUL cannot be expressed to the host; that comes back as
/// `Err` carrying the native failure status, with errno already set to `EINVAL`.
pub fn convpath(path: &interface::RustPath, syscall: &str) -> Result<CString, i32> {
    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| syscall_error(Errno::EINVAL, syscall, "path contains a NUL byte"))
}
