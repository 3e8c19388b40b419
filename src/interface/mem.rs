//! Unchecked access to foreign memory.
//!
//! Everything in this module writes through an integer address handed over by the
//! managed runtime. Nothing here checks that the address is mapped, owned, aligned or
//! large enough; the native primitives these stand in for make no such promise
//! either. Misuse corrupts memory, it is not reported.
//!
//! Every function is `unsafe`, and this is the only module in the crate that
//! dereferences a `ForeignAddress`.

use std::fmt;
use std::ptr;

use crate::constants::GROUP_SLOT_STRIDE;

/// Base address of a byte region outside Rust's ownership. Its length is known
/// only to the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct ForeignAddress(u64);

impl ForeignAddress {
    pub const NULL: ForeignAddress = ForeignAddress(0);

    pub const fn new(addr: u64) -> Self {
        ForeignAddress(addr)
    }

    pub fn from_ptr<T>(ptr: *const T) -> Self {
        ForeignAddress(ptr as usize as u64)
    }

    pub fn from_mut_ptr<T>(ptr: *mut T) -> Self {
        ForeignAddress(ptr as usize as u64)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    fn byte_ptr(self, offset: usize) -> *mut u8 {
        (self.0 as usize).wrapping_add(offset) as *mut u8
    }
}

impl fmt::Debug for ForeignAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ForeignAddress({:#x})", self.0)
    }
}

impl From<u64> for ForeignAddress {
    fn from(addr: u64) -> Self {
        ForeignAddress(addr)
    }
}

/// Writes one byte at `address + offset`.
///
/// # Safety
/// The byte at `address + offset` must be valid for writes.
pub unsafe fn write_byte(address: ForeignAddress, offset: usize, value: u8) {
    ptr::write(address.byte_ptr(offset), value);
}

/// Writes a 32-bit value into slot `index` of a buffer laid out with
/// `GROUP_SLOT_STRIDE` bytes per slot. Only the first four bytes of the slot are
/// touched, the rest keep whatever the caller left there.
///
/// # Safety
/// `[address + index * GROUP_SLOT_STRIDE, +4)` must be valid for writes. No
/// alignment is required.
pub unsafe fn write_int(address: ForeignAddress, index: usize, value: i32) {
    let slot = address.byte_ptr(index.wrapping_mul(GROUP_SLOT_STRIDE));
    ptr::write_unaligned(slot as *mut i32, value);
}

/// Fills `length` bytes starting at `address` with `value`.
///
/// # Safety
/// `[address, address + length)` must be valid for writes.
pub unsafe fn set_memory(address: ForeignAddress, length: usize, value: u8) {
    if length == 0 {
        return;
    }
    ptr::write_bytes(address.byte_ptr(0), value, length);
}
