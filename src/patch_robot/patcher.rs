//! Per-file patching: read, decode, insert, write back.

use crate::error::Result;
use crate::lines::{insert_after_anchor, join_lines, split_lines};
use std::fs;
use std::path::Path;

/// Rewrite `path` so that the robots meta line appears immediately after
/// the first `<head>` line.
///
/// The read phase (open, decode, anchor lookup) completes before any write,
/// so a failing file is left unmodified. The write truncates and replaces
/// the original content in place; there is no temp-file-and-rename step and
/// no backup, so interruption mid-write can leave the file partial.
pub fn patch_file(path: &Path) -> Result<()> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)?;

    let mut lines = split_lines(&content);
    insert_after_anchor(&mut lines)?;

    fs::write(path, join_lines(&lines))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use crate::lines::ROBOTS_META;

    #[test]
    fn patches_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<html>\n<head>\n<title>t</title>\n</head>\n").unwrap();

        patch_file(&path).unwrap();

        let patched = fs::read_to_string(&path).unwrap();
        assert_eq!(
            patched,
            "<html>\n<head>\n<meta name=\"robots\" content=\"noindex, nofollow\"/>\n<title>t</title>\n</head>\n"
        );
    }

    #[test]
    fn missing_anchor_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        let original = "<html>\n<head class=\"a\">\n</head>\n";
        fs::write(&path, original).unwrap();

        let err = patch_file(&path).unwrap_err();
        assert!(matches!(err, PatchError::AnchorNotFound));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn missing_file_is_an_io_error_and_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.html");

        let err = patch_file(&path).unwrap_err();
        assert!(matches!(err, PatchError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn invalid_utf8_is_a_decode_error_and_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.html");
        let original = b"<head>\n\xff\xfe\n".to_vec();
        fs::write(&path, &original).unwrap();

        let err = patch_file(&path).unwrap_err();
        assert!(matches!(err, PatchError::Decode(_)));
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn patching_twice_inserts_two_meta_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<head>\n</head>\n").unwrap();

        patch_file(&path).unwrap();
        patch_file(&path).unwrap();

        let patched = fs::read_to_string(&path).unwrap();
        assert_eq!(
            patched.matches(ROBOTS_META.trim_end()).count(),
            2,
            "double application is not guarded against"
        );
    }
}
