//! Terminator-preserving line operations.
//!
//! Files are handled as ordered sequences of lines, each line keeping the
//! `\n` it was read with. The anchor search is exact string equality on the
//! whole line: `<head class="x">`, `<HEAD>` and CRLF-terminated `<head>`
//! lines do not match, and neither does a final `<head>` with no
//! terminator.

use crate::error::{PatchError, Result};

/// The line that marks the insertion point.
pub const HEAD_ANCHOR: &str = "<head>\n";

/// The line inserted immediately after the anchor.
pub const ROBOTS_META: &str = "<meta name=\"robots\" content=\"noindex, nofollow\"/>\n";

/// Split content into lines, each retaining its trailing terminator.
/// A final line without a terminator is kept as-is.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Insert [`ROBOTS_META`] immediately after the first line exactly equal
/// to [`HEAD_ANCHOR`], shifting all later lines down by one.
pub fn insert_after_anchor(lines: &mut Vec<String>) -> Result<()> {
    let at = lines
        .iter()
        .position(|line| line.as_str() == HEAD_ANCHOR)
        .ok_or(PatchError::AnchorNotFound)?;
    lines.insert(at + 1, ROBOTS_META.to_string());
    Ok(())
}

/// Concatenate lines back into file content.
pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}
