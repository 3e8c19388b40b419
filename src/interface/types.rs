/*
This file holds the argument shapes the managed runtime can call a primitive with.
Where the runtime dispatches one primitive on the shape of its arguments (fcntl with
or without an integer, memset with an int or a long length), the shape is an explicit
variant here and the caller picks it at the call site.
*/
#![allow(dead_code)]

crate::reversible_enum! {
    #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
    #[repr(i32)]
    #[allow(non_camel_case_types)]
    /// Symbolic fcntl commands with the host's numeric codes
    pub enum FcntlCommand: i32 {
        F_DUPFD = libc::F_DUPFD,
        F_GETFD = libc::F_GETFD,
        F_SETFD = libc::F_SETFD,
        F_GETFL = libc::F_GETFL,
        F_SETFL = libc::F_SETFL,
        F_GETLK = libc::F_GETLK,
        F_SETLK = libc::F_SETLK,
        F_SETLKW = libc::F_SETLKW,
        F_GETOWN = libc::F_GETOWN,
        F_SETOWN = libc::F_SETOWN,
        F_DUPFD_CLOEXEC = libc::F_DUPFD_CLOEXEC,
    }
}

impl FcntlCommand {
    /// The host's numeric code for this command.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Third argument of fcntl. `None` is the two-argument call shape.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FcntlArg {
    None,
    Int(i32),
}

impl From<Option<i32>> for FcntlArg {
    fn from(arg: Option<i32>) -> Self {
        match arg {
            Some(value) => FcntlArg::Int(value),
            None => FcntlArg::None,
        }
    }
}

/// Length argument of memset, as either an int or a long.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MemsetLength {
    Int(i32),
    Long(i64),
}

impl MemsetLength {
    /// Byte count to write. Zero or negative lengths write nothing.
    pub fn byte_count(self) -> usize {
        let wide = match self {
            MemsetLength::Int(length) => length as i64,
            MemsetLength::Long(length) => length,
        };
        if wide <= 0 {
            0
        } else {
            usize::try_from(wide).unwrap_or(usize::MAX)
        }
    }
}

impl From<i32> for MemsetLength {
    fn from(length: i32) -> Self {
        MemsetLength::Int(length)
    }
}

impl From<i64> for MemsetLength {
    fn from(length: i64) -> Self {
        MemsetLength::Long(length)
    }
}
