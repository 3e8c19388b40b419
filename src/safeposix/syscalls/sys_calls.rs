//! System syscalls
//!
//! Identity queries, errno retrieval and the two primitives that write into
//! foreign memory (`getgroups`, `memset`).

use std::ptr;

use crate::interface;
use crate::interface::{get_errno, trace_native_failure, ForeignAddress, MemsetLength};
use crate::safeposix::posix::PosixContext;

impl PosixContext {
    pub fn getegid_syscall(&self) -> i32 {
        unsafe { libc::getegid() as i32 }
    }

    pub fn geteuid_syscall(&self) -> i32 {
        unsafe { libc::geteuid() as i32 }
    }

    pub fn getgid_syscall(&self) -> i32 {
        unsafe { libc::getgid() as i32 }
    }

    pub fn getuid_syscall(&self) -> i32 {
        unsafe { libc::getuid() as i32 }
    }

    /// errno left behind by the most recent failing host call on this thread. Only
    /// meaningful right after the call that failed.
    pub fn errno_syscall(&self) -> i32 {
        get_errno()
    }

    //------------------------------------GETGROUPS SYSCALL------------------------------------
    /*
     *   getgroups() writes at most `max` supplementary group ids into `list`, one per
     *   8-byte slot, each truncated to a 32-bit int. It returns how many groups the
     *   host reports in total, which can be more than `max`: a caller that sees a
     *   bigger number than it asked for knows the list was cut short.
     *   -1 when the host query itself fails.
     *
     *   Safety: `list` must have room for `max` slots of GROUP_SLOT_STRIDE bytes.
     */
    pub unsafe fn getgroups_syscall(&self, max: i32, list: ForeignAddress) -> i32 {
        let count = libc::getgroups(0, ptr::null_mut());
        if count < 0 {
            return trace_native_failure("getgroups", count);
        }

        let mut groups: Vec<libc::gid_t> = vec![0; count as usize];
        let total = libc::getgroups(count, groups.as_mut_ptr());
        if total < 0 {
            return trace_native_failure("getgroups", total);
        }

        groups.truncate(total as usize);
        store_group_list(&groups, max, list)
    }

    //------------------------------------MEMSET SYSCALL------------------------------------
    /*
     *   memset() fills `length` bytes at `address` with the low byte of `c` and hands
     *   `address` back. Zero or negative lengths write nothing.
     *
     *   Safety: `[address, address + length)` must be valid for writes. Nothing is
     *   checked; a bad range corrupts memory.
     */
    pub unsafe fn memset_syscall(
        &self,
        address: ForeignAddress,
        c: i32,
        length: MemsetLength,
    ) -> ForeignAddress {
        interface::mem::set_memory(address, length.byte_count(), c as u8);
        address
    }
}

/// Pokes up to `max` of `groups` into `list`, one per GROUP_SLOT_STRIDE slot, and
/// returns the full group count.
///
/// # Safety
/// `list` must have room for `min(max, groups.len())` slots.
pub unsafe fn store_group_list(groups: &[libc::gid_t], max: i32, list: ForeignAddress) -> i32 {
    let limit = (max.max(0) as usize).min(groups.len());
    for (index, gid) in groups.iter().take(limit).enumerate() {
        interface::mem::write_int(list, index, *gid as i32);
    }
    groups.len() as i32
}
