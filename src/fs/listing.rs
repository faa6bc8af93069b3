//! Directory listing filtered by extension.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// One or more extension suffixes used to filter a directory listing.
///
/// Each entry is matched like the glob `*<extension>`, so both `"png"` and
/// `".png"` are accepted. A single string is always one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter(Vec<String>);

impl ExtensionFilter {
    /// The extensions in the order they will be matched.
    pub fn extensions(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for ExtensionFilter {
    fn from(ext: &str) -> Self {
        Self(vec![ext.to_string()])
    }
}

impl From<String> for ExtensionFilter {
    fn from(ext: String) -> Self {
        Self(vec![ext])
    }
}

impl From<Vec<String>> for ExtensionFilter {
    fn from(exts: Vec<String>) -> Self {
        Self(exts)
    }
}

impl From<Vec<&str>> for ExtensionFilter {
    fn from(exts: Vec<&str>) -> Self {
        Self(exts.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ExtensionFilter {
    fn from(exts: &[&str]) -> Self {
        Self(exts.iter().map(|e| e.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ExtensionFilter {
    fn from(exts: [&str; N]) -> Self {
        Self(exts.iter().map(|e| e.to_string()).collect())
    }
}

/// List entries directly inside `path`.
///
/// Without a filter every plain file is returned. With a filter, each
/// extension is matched in turn and the results are concatenated; overlapping
/// extensions yield the same entry more than once. Within one extension the
/// entries are sorted by name.
///
/// A path that is not a directory is not an error: a warning is logged and
/// the list is empty.
pub fn get_files_in_dir<P: AsRef<Path>>(
    path: P,
    extensions: Option<ExtensionFilter>,
) -> Vec<PathBuf> {
    let path = path.as_ref();

    if !path.is_dir() {
        tracing::warn!("{} is not a directory. Returning empty list", path.display());
        return Vec::new();
    }

    let names = match sorted_entry_names(path) {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!("Failed to read directory {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match extensions {
        None => names
            .iter()
            .map(|name| path.join(name))
            .filter(|p| p.is_file())
            .collect(),
        Some(filter) => {
            let names = &names;
            filter
                .extensions()
                .iter()
                .flat_map(move |ext| {
                    names
                        .iter()
                        .filter(move |name| matches_suffix_glob(name, ext))
                        .map(move |name| path.join(name))
                })
                .collect()
        }
    }
}

/// Entry names of a directory, sorted.
fn sorted_entry_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

/// Whether `name` matches the glob `*<ext>`. A leading wildcard never
/// matches hidden entries.
fn matches_suffix_glob(name: &OsString, ext: &str) -> bool {
    match name.to_str() {
        Some(name) if !name.starts_with('.') => {
            let pattern: Vec<char> = std::iter::once('*').chain(ext.chars()).collect();
            let name: Vec<char> = name.chars().collect();
            glob_match(&pattern, &name)
        }
        _ => false,
    }
}

/// Match `name` against a shell glob supporting `*`, `?` and `[...]` classes
/// (`[!...]` negates, `a-z` ranges). An unclosed `[` is a literal.
fn glob_match(pattern: &[char], name: &[char]) -> bool {
    match pattern.split_first() {
        None => name.is_empty(),
        Some(('*', rest)) => (0..=name.len()).any(|skip| glob_match(rest, &name[skip..])),
        Some(('?', rest)) => !name.is_empty() && glob_match(rest, &name[1..]),
        Some(('[', rest)) => match (parse_class(rest), name.split_first()) {
            (Some((class, after)), Some((&c, name_rest))) => {
                class.matches(c) && glob_match(after, name_rest)
            }
            (Some(_), None) => false,
            (None, Some(('[', name_rest))) => glob_match(rest, name_rest),
            (None, _) => false,
        },
        Some((&p, rest)) => match name.split_first() {
            Some((&c, name_rest)) => p == c && glob_match(rest, name_rest),
            None => false,
        },
    }
}

/// A bracketed character class such as `[pj]`, `[a-z]` or `[!0-9]`.
#[derive(Debug)]
struct CharClass {
    negated: bool,
    members: Vec<char>,
}

impl CharClass {
    fn matches(&self, c: char) -> bool {
        let mut found = false;
        let mut i = 0;
        while i < self.members.len() {
            if i + 2 < self.members.len() && self.members[i + 1] == '-' {
                found |= self.members[i] <= c && c <= self.members[i + 2];
                i += 3;
            } else {
                found |= self.members[i] == c;
                i += 1;
            }
        }
        found != self.negated
    }
}

/// Parse the class body following `[`, returning it with the rest of the
/// pattern after the closing `]`.
fn parse_class(pattern: &[char]) -> Option<(CharClass, &[char])> {
    let (negated, body) = match pattern.first() {
        Some('!') => (true, &pattern[1..]),
        _ => (false, pattern),
    };

    // A `]` right after the opening bracket is a member, not the end.
    let close = body.iter().skip(1).position(|&c| c == ']')? + 1;

    let class = CharClass {
        negated,
        members: body[..close].to_vec(),
    };
    Some((class, &body[close + 1..]))
}
