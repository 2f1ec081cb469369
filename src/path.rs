//! Canonicalization of user supplied paths into the form the inference
//! service understands.
//!
//! Windows drive paths such as `D:\videos\clip.mp4` are rewritten to their
//! WSL mount location (`/mnt/d/videos/clip.mp4`). Everything else is passed
//! through untouched, which makes [`normalize`] idempotent.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Length of a drive prefix like `C:\`.
const DRIVE_PREFIX_LEN: usize = 3;

/// Convert a Windows drive path into its `/mnt/<drive>/` equivalent.
///
/// Inputs that do not start with `<letter>:\` are returned unchanged.
pub fn normalize(input: &str) -> Cow<'_, str> {
    let Some(drive) = drive_letter(input) else {
        return Cow::Borrowed(input);
    };
    let rest = input[DRIVE_PREFIX_LEN..].replace('\\', "/");
    Cow::Owned(format!("/mnt/{}/{}", drive.to_ascii_lowercase(), rest))
}

/// Returns the drive letter if `input` starts with `<letter>:\`.
fn drive_letter(input: &str) -> Option<char> {
    match input.as_bytes() {
        [letter, b':', b'\\', ..] if letter.is_ascii_alphabetic() => Some(*letter as char),
        _ => None,
    }
}

/// A path string in the canonical form accepted by the inference service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_path_is_rewritten() {
        assert_eq!(
            normalize(r"D:\raffay_fyp\video_input\00002.mp4"),
            "/mnt/d/raffay_fyp/video_input/00002.mp4"
        );
    }

    #[test]
    fn test_lowercase_drive_letter() {
        assert_eq!(normalize(r"c:\Users\me"), "/mnt/c/Users/me");
    }

    #[test]
    fn test_linux_path_is_borrowed() {
        let out = normalize("/mnt/d/already/linux/path.mp4");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "/mnt/d/already/linux/path.mp4");
    }

    #[test]
    fn test_drive_without_backslash_untouched() {
        assert_eq!(normalize("D:/forward/slashes"), "D:/forward/slashes");
        assert_eq!(normalize("D:"), "D:");
        assert_eq!(normalize(r"1:\not\a\drive"), r"1:\not\a\drive");
    }

    #[test]
    fn test_only_prefix() {
        assert_eq!(normalize(r"E:\"), "/mnt/e/");
    }

    #[test]
    fn test_non_ascii_input_untouched() {
        assert_eq!(normalize("é:\\x"), "é:\\x");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            r"D:\a\b\c.mp4",
            r"z:\",
            "/tmp/x",
            "hello world",
            "",
            r"relative\windows\path",
        ] {
            let once = normalize(input).into_owned();
            assert_eq!(normalize(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_canonical_path_serializes_as_string() {
        let path = CanonicalPath::new(r"D:\clip.mp4");
        assert_eq!(serde_json::to_string(&path).unwrap(), r#""/mnt/d/clip.mp4""#);
        assert_eq!(path.to_string(), "/mnt/d/clip.mp4");
    }
}
