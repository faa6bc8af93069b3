//! Slug generation for file and folder names.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Anything that is not a letter, digit, underscore, whitespace or hyphen.
/// Combining marks and connector punctuation other than `_` are dropped.
static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\s-]").expect("disallowed-chars regex should compile")
});

/// Runs of hyphens and whitespace, collapsed to a single hyphen.
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("separator regex should compile"));

/// Turn any displayable value into a lowercase, hyphen-separated slug that is
/// safe to use as a path component or URL segment.
///
/// With `allow_unicode` unset the value is NFKD-decomposed and every non-ASCII
/// character is dropped, so accented letters keep their base letter. With it
/// set the value is only NFKC-normalized and Unicode letters survive.
///
/// Underscores are kept inside the slug, but leading
/// and trailing hyphens and underscores are stripped. The result may be empty.
///
/// ```
/// use face2face_utils::fs::encode_path_safe;
///
/// assert_eq!(encode_path_safe("Hello World!!", false), "hello-world");
/// assert_eq!(encode_path_safe("Crème Brûlée", false), "creme-brulee");
/// ```
pub fn encode_path_safe(value: impl fmt::Display, allow_unicode: bool) -> String {
    let value = value.to_string();

    let normalized: String = if allow_unicode {
        value.nfkc().collect()
    } else {
        value.nfkd().filter(char::is_ascii).collect()
    };

    let lowered = normalized.to_lowercase();
    let cleaned = DISALLOWED_CHARS.replace_all(&lowered, "");
    let collapsed = SEPARATOR_RUNS.replace_all(&cleaned, "-");

    collapsed.trim_matches(|c: char| c == '-' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_basic() {
        assert_eq!(encode_path_safe("Hello World!!", false), "hello-world");
        assert_eq!(encode_path_safe("Face Swap v2.onnx", false), "face-swap-v2onnx");
    }

    #[test]
    fn test_encode_collapses_and_strips_separators() {
        assert_eq!(encode_path_safe("  --a--b--  ", false), "a-b");
        assert_eq!(encode_path_safe("a \t\n b", false), "a-b");
        assert_eq!(encode_path_safe("__init__", false), "init");
        assert_eq!(encode_path_safe("_-_x_-_", false), "x");
    }

    #[test]
    fn test_encode_keeps_inner_underscores() {
        assert_eq!(encode_path_safe("inswapper_128", false), "inswapper_128");
    }

    #[test]
    fn test_encode_transliterates_to_ascii() {
        assert_eq!(encode_path_safe("Crème Brûlée", false), "creme-brulee");
        // Compatibility decomposition splits the ligature.
        assert_eq!(encode_path_safe("ﬁle", false), "file");
        assert_eq!(encode_path_safe("日本語", false), "");
    }

    #[test]
    fn test_encode_allow_unicode() {
        assert_eq!(encode_path_safe("Crème Brûlée", true), "crème-brûlée");
        assert_eq!(encode_path_safe("日本 語!", true), "日本-語");
        assert_eq!(encode_path_safe("ﬁle", true), "file");
    }

    #[test]
    fn test_encode_allow_unicode_drops_marks_and_connectors() {
        // Combining double low line has no precomposed form.
        assert_eq!(encode_path_safe("a\u{0333}b", true), "ab");
        // Undertie is connector punctuation but not an underscore.
        assert_eq!(encode_path_safe("a\u{203F}b", true), "ab");
        assert_eq!(encode_path_safe("a_b", true), "a_b");
    }

    #[test]
    fn test_encode_non_string_values() {
        assert_eq!(encode_path_safe(42, false), "42");
        assert_eq!(encode_path_safe(-3.5, false), "35");
    }

    #[test]
    fn test_encode_only_symbols_is_empty() {
        assert_eq!(encode_path_safe("!!!???", false), "");
        assert_eq!(encode_path_safe("", false), "");
    }
}
