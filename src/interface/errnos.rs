// Errno values and access to the calling thread's native errno slot
#![allow(dead_code)]

use libc::c_int;

use super::misc::verbosity;
use crate::constants::NATIVE_FAILURE;

/// Declares a C-like enum together with a checked conversion back from its
/// integer value and a lookup by variant name.
#[macro_export]
macro_rules! reversible_enum {
    ($(#[$settings:meta])* $visibility:vis enum $enumname:ident : $repr:ty {
        $($valuename:ident = $value:expr,)*
    }) => {
        $(#[$settings])*
        $visibility enum $enumname {
            $($valuename = $value,)*
        }

        impl $enumname {
            $visibility fn from_discriminant(v: $repr) -> Option<Self> {
                $(
                    if v == ($value) as $repr {
                        return Some($enumname::$valuename);
                    }
                )*
                None
            }

            $visibility fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($valuename) => Some($enumname::$valuename),)*
                    _ => None,
                }
            }

            $visibility fn name(&self) -> &'static str {
                match self {
                    $($enumname::$valuename => stringify!($valuename),)*
                }
            }
        }
    }
}

reversible_enum! {
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    #[repr(i32)]
    /// Errno values for OS calls
    pub enum Errno: i32 {
        EPERM = 1,	// Operation not permitted
        ENOENT = 2,	// No such file or directory
        ESRCH = 3,	// No such process
        EINTR = 4,	// Interrupted system call
        EIO = 5,	// I/O error
        ENXIO = 6,	// No such device or address
        EBIG = 7,	// Argument list too long
        ENOEXEC = 8,	// Exec format error
        EBADF = 9,	// Bad file number
        ECHILD = 10,	// No child processes
        EAGAIN = 11,	// Try again
        ENOMEM = 12,	// Out of memory
        EACCES = 13,	// Permission denied
        EFAULT = 14,	// Bad address
        ENOTBLK = 15,	// Block device required
        EBUSY = 16,	// Device or resource busy
        EEXIST = 17,	// File exists
        EXDEV = 18,	// Cross-device link
        ENODEV = 19,	// No such device
        ENOTDIR = 20,	// Not a directory
        EISDIR = 21,	// Is a directory
        EINVAL = 22,	// Invalid argument
        ENFILE = 23,	// File table overflow
        EMFILE = 24,	// Too many open files
        ENOTTY = 25,	// Not a typewriter
        ETXTBSY = 26,	// Text file busy
        EFBIG = 27,	// File too large
        ENOSPC = 28,	// No space left on device
        ESPIPE = 29,	// Illegal seek
        EROFS = 30,	// Read-only file system
        EMLINK = 31,	// Too many links
        EPIPE = 32,	// Broken pipe
        EDOM = 33,	// Math argument out of domain of func
        ERANGE = 34,	// Math result not representable
        EDEADLK = 35,	// Resource deadlock would occur
        ENAMETOOLONG = 36,	// File name too long
        ENOLCK = 37,	// No record locks available
        ENOSYS = 38,	// Function not implemented
        ENOTEMPTY = 39,	// Directory not empty
        ELOOP = 40,	// Too many symbolic links encountered
    }
}

#[cfg(any(target_os = "linux", target_os = "emscripten"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__errno_location()
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__error()
}

#[cfg(any(target_os = "android", target_os = "netbsd", target_os = "openbsd"))]
unsafe fn errno_location() -> *mut c_int {
    libc::__errno()
}

/// Last native error code recorded on the calling thread.
pub fn get_errno() -> i32 {
    (unsafe { *errno_location() }) as i32
}

pub fn set_errno(errno: i32) {
    unsafe { *errno_location() = errno as c_int };
}

/// Rejects a call before it reaches the host, in the same shape the host would:
/// errno is set and the native failure status is returned.
pub fn syscall_error(e: Errno, syscall: &str, message: &str) -> i32 {
    if verbosity() > 0 {
        log::debug!("{}: {} ({:?})", syscall, message, e);
    }
    set_errno(e as i32);
    NATIVE_FAILURE
}

/// Called on the failure path of a native call. Logging may itself touch errno, so
/// the code the host left behind is put back before the status reaches the caller.
pub fn trace_native_failure(syscall: &str, ret: i32) -> i32 {
    let errno = get_errno();
    if verbosity() > 0 {
        match Errno::from_discriminant(errno) {
            Some(e) => log::debug!("{} returned {} with {:?}", syscall, ret, e),
            None => log::debug!("{} returned {} with errno {}", syscall, ret, errno),
        }
    }
    set_errno(errno);
    ret
}
