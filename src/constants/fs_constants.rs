#![allow(dead_code)]

// ===== Standard File Descriptors =====
pub const STDIN_FILENO: i32 = 0; // File descriptor for standard input
pub const STDOUT_FILENO: i32 = 1; // File descriptor for standard output
pub const STDERR_FILENO: i32 = 2; // File descriptor for standard error

// ===== Directory Stream Cursor =====
// A freshly opened stream starts two slots before the real listing so that
// the synthetic entries come out first.
pub const DIR_POS_DOT: isize = -2; // Cursor value that yields "."
pub const DIR_POS_DOTDOT: isize = -1; // Cursor value that yields ".."
pub const DIR_POS_START: isize = DIR_POS_DOT; // Cursor value right after open

pub const DOT_ENTRY: &str = "."; // Synthetic entry for the directory itself
pub const DOTDOT_ENTRY: &str = ".."; // Synthetic entry for the parent directory

// ===== File Permissions =====
// Source: include/uapi/linux/stat.h
pub const S_IRWXA: u32 = 0o777; // All permissions for all users
pub const DEFAULT_DIR_MODE: u32 = 0o755; // rwxr-xr-x, what Dir.mkdir asks for without a mode

// ===== Descriptor Flags =====
// Source: include/uapi/asm-generic/fcntl.h
pub const FD_CLOEXEC: i32 = 1; // Close on exec, the only F_GETFD/F_SETFD flag
