#[cfg(test)]
pub mod dir_tests {
    use crate::constants::{DIR_POS_START, DOTDOT_ENTRY, DOT_ENTRY};
    use crate::interface::Errno;
    use crate::safeposix::dirstream::{DirError, DirectoryHandle};

    use std::collections::HashSet;
    use std::ffi::OsString;
    use std::fs;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn dir_with(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        dir
    }

    #[test]
    pub fn ut_posix_dir_open_starts_before_dot() {
        let dir = dir_with(&["a", "b"]);
        let handle = DirectoryHandle::open(dir.path()).unwrap();

        assert_eq!(handle.position(), DIR_POS_START);
        assert_eq!(handle.position(), -2);

        let mut names: Vec<OsString> = handle.contents().to_vec();
        names.sort();
        assert_eq!(names, vec![OsString::from("a"), OsString::from("b")]);
    }

    #[test]
    pub fn ut_posix_dir_read_sequence() {
        let dir = dir_with(&["a", "b"]);
        let handle = DirectoryHandle::open(dir.path()).unwrap();
        // the order of the real entries is whatever the host listed
        let listed = handle.contents().to_vec();

        assert_eq!(handle.read(), Some(OsString::from(DOT_ENTRY)));
        assert_eq!(handle.read(), Some(OsString::from(DOTDOT_ENTRY)));
        assert_eq!(handle.read(), Some(listed[0].clone()));
        assert_eq!(handle.read(), Some(listed[1].clone()));
        assert_eq!(handle.read(), None);
        assert_eq!(handle.read(), None);
        assert!(handle.is_exhausted());

        // stays at end-of-stream no matter how often it is asked
        for _ in 0..16 {
            assert_eq!(handle.read(), None);
        }
        assert_eq!(handle.position(), 2);
    }

    #[test]
    pub fn ut_posix_dir_empty() {
        let dir = TempDir::new().unwrap();
        let handle = DirectoryHandle::open(dir.path()).unwrap();

        assert!(handle.contents().is_empty());
        let all: Vec<OsString> = handle.entries().collect();
        assert_eq!(all, vec![OsString::from("."), OsString::from("..")]);
        assert_eq!(handle.read(), None);
    }

    #[test]
    pub fn ut_posix_dir_listing_matches_host_order() {
        let dir = dir_with(&["one", "two", "three", "four", "five"]);
        fs::create_dir(dir.path().join("sub")).unwrap();

        let handle = DirectoryHandle::open(dir.path()).unwrap();
        let expected: Vec<OsString> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();

        let read: Vec<OsString> = handle.entries().skip(2).collect();
        assert_eq!(read.len(), 6);
        // same set as the host, in the snapshot's order, no sorting
        assert_eq!(read, handle.contents().to_vec());
        let read_set: HashSet<OsString> = read.into_iter().collect();
        let expected_set: HashSet<OsString> = expected.into_iter().collect();
        assert_eq!(read_set, expected_set);
    }

    #[test]
    pub fn ut_posix_dir_snapshot_is_not_refreshed() {
        let dir = dir_with(&["before"]);
        let handle = DirectoryHandle::open(dir.path()).unwrap();

        fs::write(dir.path().join("after"), b"").unwrap();
        fs::remove_file(dir.path().join("before")).unwrap();

        let all: Vec<OsString> = handle.entries().collect();
        assert_eq!(
            all,
            vec![
                OsString::from("."),
                OsString::from(".."),
                OsString::from("before")
            ]
        );
    }

    #[test]
    pub fn ut_posix_dir_open_regular_file() {
        let dir = dir_with(&["plain"]);
        let file = dir.path().join("plain");

        match DirectoryHandle::open(&file) {
            Err(e @ DirError::NotADirectory { .. }) => {
                assert_eq!(e.errno(), Errno::ENOTDIR as i32);
                assert_eq!(e.path(), file.as_path());
            }
            other => panic!("expected NotADirectory, got {:?}", other),
        }
    }

    #[test]
    pub fn ut_posix_dir_open_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = DirectoryHandle::open(&missing).unwrap_err();
        assert!(matches!(err, DirError::NotADirectory { .. }));
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    pub fn ut_posix_dir_open_unreadable() {
        use std::os::unix::fs::PermissionsExt;

        // root can list anything, so there is nothing to observe
        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = DirectoryHandle::open(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(e @ DirError::ListingUnavailable { .. }) => {
                assert_eq!(e.errno(), Errno::EACCES as i32);
                assert!(std::error::Error::source(&e).is_some());
            }
            other => panic!("expected ListingUnavailable, got {:?}", other),
        }
    }

    #[test]
    pub fn ut_posix_dir_close_is_always_safe() {
        let dir = dir_with(&["x"]);
        let handle = DirectoryHandle::open(dir.path()).unwrap();

        handle.close();
        handle.close();
        assert_eq!(handle.read(), Some(OsString::from(".")));
        handle.close();
        while handle.read().is_some() {}
        handle.close();
        handle.close();
        assert_eq!(handle.read(), None);
    }

    #[test]
    pub fn ut_posix_dir_from_contents() {
        let handle = DirectoryHandle::from_contents(vec![OsString::from("a"), OsString::from("b")]);
        let all: Vec<OsString> = handle.entries().collect();
        assert_eq!(
            all,
            vec![
                OsString::from("."),
                OsString::from(".."),
                OsString::from("a"),
                OsString::from("b")
            ]
        );
    }

    #[test]
    pub fn ut_posix_dir_concurrent_reads_hand_out_each_entry_once() {
        let names: Vec<OsString> = (0..200).map(|i| OsString::from(format!("e{}", i))).collect();
        let handle = Arc::new(DirectoryHandle::from_contents(names.clone()));

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                thread::spawn(move || {
                    let mut seen = Vec::new();
                    while let Some(name) = handle.read() {
                        seen.push(name);
                    }
                    seen
                })
            })
            .collect();

        let mut all: Vec<OsString> = Vec::new();
        for worker in workers {
            all.extend(worker.join().unwrap());
        }

        assert_eq!(all.len(), names.len() + 2);
        let unique: HashSet<OsString> = all.into_iter().collect();
        assert_eq!(unique.len(), names.len() + 2);
        assert!(unique.contains(&OsString::from(".")));
        assert!(unique.contains(&OsString::from("..")));
        assert!(handle.is_exhausted());
    }
}
