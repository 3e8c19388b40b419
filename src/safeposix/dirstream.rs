//! Directory streams.
//!
//! `open` takes the whole listing in one go and keeps no OS handle, so the stream
//! never needs releasing and `close` does nothing. The flip side is that the listing
//! can go stale while it is being read; that is accepted.
//!
//! Reads hand out `.` and `..` first, then the host's entries in the order the host
//! listed them, then end-of-stream for every read after that.

use std::error::Error;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;

use crate::constants::{DIR_POS_DOT, DIR_POS_DOTDOT, DIR_POS_START, DOTDOT_ENTRY, DOT_ENTRY};
use crate::interface;
use crate::interface::Errno;

/// Why a directory stream could not be opened.
#[derive(Debug)]
pub enum DirError {
    /// The path does not name a directory (or does not exist at all).
    NotADirectory { path: interface::RustPathBuf },
    /// The path is a directory but its entries could not be listed, e.g. permission
    /// denied, or it vanished between the directory check and the listing.
    ListingUnavailable {
        path: interface::RustPathBuf,
        source: io::Error,
    },
}

impl DirError {
    /// The native error code a caller should raise for this failure.
    pub fn errno(&self) -> i32 {
        match self {
            DirError::NotADirectory { .. } => Errno::ENOTDIR as i32,
            DirError::ListingUnavailable { source, .. } => {
                source.raw_os_error().unwrap_or(Errno::EIO as i32)
            }
        }
    }

    pub fn path(&self) -> &interface::RustPath {
        match self {
            DirError::NotADirectory { path } => path,
            DirError::ListingUnavailable { path, .. } => path,
        }
    }
}

impl fmt::Display for DirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirError::NotADirectory { path } => {
                write!(f, "not a directory: {}", path.display())
            }
            DirError::ListingUnavailable { path, source } => {
                write!(f, "cannot list directory {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for DirError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DirError::NotADirectory { .. } => None,
            DirError::ListingUnavailable { source, .. } => Some(source),
        }
    }
}

/// One open enumeration of a directory.
#[derive(Debug)]
pub struct DirectoryHandle {
    contents: Vec<OsString>,
    // -2 and -1 stand for "." and "..", 0.. index into contents,
    // contents.len() means exhausted
    position: interface::Mutex<isize>,
}

impl DirectoryHandle {
    /// Snapshots the listing of `path`.
    ///
    /// The directory check and the listing are two separate host calls. If the
    /// directory disappears in between, the result is `ListingUnavailable` rather than
    /// `NotADirectory`; both outcomes are possible and callers must handle both.
    pub fn open<P: AsRef<interface::RustPath>>(path: P) -> Result<DirectoryHandle, DirError> {
        let path = path.as_ref();

        if !path.is_dir() {
            log::debug!("dir open: {} is not a directory", path.display());
            return Err(DirError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_dir(path)
            .and_then(|entries| {
                entries
                    .map(|entry| entry.map(|e| e.file_name()))
                    .collect::<io::Result<Vec<OsString>>>()
            })
            .map_err(|source| {
                log::debug!("dir open: listing {} failed: {}", path.display(), source);
                DirError::ListingUnavailable {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        log::debug!(
            "dir open: {} snapshotted with {} entries",
            path.display(),
            contents.len()
        );

        Ok(DirectoryHandle::from_contents(contents))
    }

    /// A stream over an already materialised listing.
    pub fn from_contents(contents: Vec<OsString>) -> DirectoryHandle {
        DirectoryHandle {
            contents,
            position: interface::Mutex::new(DIR_POS_START),
        }
    }

    /// Advances the cursor and returns the entry it was on, or `None` once the
    /// listing is used up. Reads past the end stay at `None`.
    pub fn read(&self) -> Option<OsString> {
        let end = self.contents.len() as isize;
        let mut position = self.position.lock();
        let current = *position;
        if current < end {
            *position = current + 1;
        }
        drop(position);

        match current {
            DIR_POS_DOT => Some(OsString::from(DOT_ENTRY)),
            DIR_POS_DOTDOT => Some(OsString::from(DOTDOT_ENTRY)),
            n if n < end => Some(self.contents[n as usize].clone()),
            _ => None,
        }
    }

    /// Nothing to release, the listing was copied out at open time. Safe to call any
    /// number of times, at any point.
    pub fn close(&self) {}

    pub fn contents(&self) -> &[OsString] {
        &self.contents
    }

    pub fn position(&self) -> isize {
        *self.position.lock()
    }

    pub fn is_exhausted(&self) -> bool {
        self.position() >= self.contents.len() as isize
    }

    /// Drives `read` until end-of-stream.
    pub fn entries(&self) -> Entries<'_> {
        Entries { handle: self }
    }
}

pub struct Entries<'a> {
    handle: &'a DirectoryHandle,
}

impl Iterator for Entries<'_> {
    type Item = OsString;

    fn next(&mut self) -> Option<OsString> {
        self.handle.read()
    }
}
