#![allow(dead_code)]

use std::mem::size_of;

// ===== Group List Layout =====
// getgroups writes each group id into a slot as wide as a 64-bit long, even though
// only a 32-bit int is stored in it. Readers of the buffer index it with this stride.
pub const GROUP_SLOT_STRIDE: usize = size_of::<i64>();
// Width of the value actually stored in each slot.
pub const GROUP_VALUE_WIDTH: usize = size_of::<i32>();

// ===== Working Directory =====
// Used when the host cannot tell us where the process started.
pub const FALLBACK_CWD: &str = "/";

// ===== Native status =====
pub const NATIVE_FAILURE: i32 = -1; // Returned with errno set
