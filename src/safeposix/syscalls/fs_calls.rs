//! Filesystem syscalls
//!
//! Each call goes straight to the host and hands back whatever status the host
//! returned. On failure errno is left as the host set it; the caller reads it with
//! `errno_syscall` before making any other call.

use std::os::unix::ffi::OsStrExt;

use crate::interface;
use crate::interface::{trace_native_failure, FcntlArg, FcntlCommand};
use crate::safeposix::filesystem::convpath;
use crate::safeposix::posix::PosixContext;

impl PosixContext {
    //------------------------------------UNLINK SYSCALL------------------------------------
    /*
     *   unlink() will return 0 when success and -1 when fail
     */
    pub fn unlink_syscall<P: AsRef<interface::RustPath>>(&self, path: P) -> i32 {
        let c_path = match convpath(path.as_ref(), "unlink") {
            Ok(c_path) => c_path,
            Err(ret) => return ret,
        };

        let ret = unsafe { libc::unlink(c_path.as_ptr()) };
        if ret < 0 {
            return trace_native_failure("unlink", ret);
        }
        ret
    }

    //------------------MKDIR SYSCALL------------------
    /*
     *   mkdir() will return 0 when success and -1 when fail
     */
    pub fn mkdir_syscall<P: AsRef<interface::RustPath>>(&self, path: P, mode: u32) -> i32 {
        let c_path = match convpath(path.as_ref(), "mkdir") {
            Ok(c_path) => c_path,
            Err(ret) => return ret,
        };

        let ret = unsafe { libc::mkdir(c_path.as_ptr(), mode as libc::mode_t) };
        if ret < 0 {
            return trace_native_failure("mkdir", ret);
        }
        ret
    }

    //------------------RMDIR SYSCALL------------------
    /*
     *   rmdir() will return 0 when sucess, -1 when fail
     */
    pub fn rmdir_syscall<P: AsRef<interface::RustPath>>(&self, path: P) -> i32 {
        let c_path = match convpath(path.as_ref(), "rmdir") {
            Ok(c_path) => c_path,
            Err(ret) => return ret,
        };

        let ret = unsafe { libc::rmdir(c_path.as_ptr()) };
        if ret < 0 {
            return trace_native_failure("rmdir", ret);
        }
        ret
    }

    //------------------SYMLINK SYSCALL------------------
    /*
     *   symlink() creates `linkpath` pointing at `target`; `target` is stored as
     *   written and need not exist. Returns 0 when success and -1 when fail
     */
    pub fn symlink_syscall<P, Q>(&self, target: P, linkpath: Q) -> i32
    where
        P: AsRef<interface::RustPath>,
        Q: AsRef<interface::RustPath>,
    {
        let c_target = match convpath(target.as_ref(), "symlink") {
            Ok(c_path) => c_path,
            Err(ret) => return ret,
        };
        let c_linkpath = match convpath(linkpath.as_ref(), "symlink") {
            Ok(c_path) => c_path,
            Err(ret) => return ret,
        };

        let ret = unsafe { libc::symlink(c_target.as_ptr(), c_linkpath.as_ptr()) };
        if ret < 0 {
            return trace_native_failure("symlink", ret);
        }
        ret
    }

    //------------------------------------CHDIR SYSCALL------------------------------------
    /*
     *   chdir() will return 0 when sucess, -1 when fail
     *   Only a 0 status replaces the cached working directory, and it is replaced
     *   with `path` exactly as passed in
     */
    pub fn chdir_syscall<P: AsRef<interface::RustPath>>(&self, path: P) -> i32 {
        let path = path.as_ref();
        let c_path = match convpath(path, "chdir") {
            Ok(c_path) => c_path,
            Err(ret) => return ret,
        };

        let ret = unsafe { libc::chdir(c_path.as_ptr()) };
        if ret == 0 {
            self.changedir(path);
        } else if ret < 0 {
            return trace_native_failure("chdir", ret);
        }
        ret
    }

    //------------------------------------GETCWD SYSCALL------------------------------------
    /*
     *   getcwd() replaces the contents of `buf` with the cached working directory and
     *   returns the same buffer. The buffer grows as needed, so `_maxsize` is not
     *   consulted. The OS is never asked
     */
    pub fn getcwd_syscall<'a>(&self, buf: &'a mut Vec<u8>, _maxsize: i32) -> &'a mut Vec<u8> {
        let cwd = self.current_dir();
        buf.clear();
        buf.extend_from_slice(cwd.as_os_str().as_bytes());
        buf
    }

    //------------------------------------FCNTL SYSCALL------------------------------------
    /*
     *   fcntl() passes `cmd` through with or without the integer argument, depending
     *   on the call shape. The return value depends on the command; -1 on failure
     */
    pub fn fcntl_syscall(&self, fd: i32, cmd: FcntlCommand, arg: FcntlArg) -> i32 {
        let ret = match arg {
            FcntlArg::None => unsafe { libc::fcntl(fd, cmd.code()) },
            FcntlArg::Int(value) => unsafe { libc::fcntl(fd, cmd.code(), value) },
        };
        if ret < 0 {
            return trace_native_failure("fcntl", ret);
        }
        ret
    }

    //------------------------------------ISATTY SYSCALL------------------------------------
    /*
     *   isatty() returns 1 if `fd` refers to a terminal and 0 otherwise, including
     *   for descriptors that are not open. Never reported as a failure here
     */
    pub fn isatty_syscall(&self, fd: i32) -> i32 {
        unsafe { libc::isatty(fd) }
    }
}
