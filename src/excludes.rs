use crate::result::Result;
use crate::utils;
use globset::{GlobBuilder, GlobMatcher};
use std::path::Path;

/// Fallback exclusion patterns bundled with the tool, one glob per line.
const DEFAULT_EXCLUDES: &str = include_str!("../resources/default_exclude.txt");

/// A compiled, ordered set of exclusion globs.
///
/// A pattern containing a separator matches the full relative path
/// (`Library/**`); a bare pattern matches the file name alone, so `*.meta`
/// excludes meta files at any depth. A path is excluded as soon as any
/// pattern matches.
pub struct ExcludeList {
    patterns: Vec<Pattern>,
}

struct Pattern {
    matcher: GlobMatcher,
    name_only: bool,
}

impl ExcludeList {
    /// Resolve the effective pattern set: explicit patterns if any were
    /// given, otherwise the bundled defaults.
    pub fn resolve(explicit: &[String]) -> Result<Self> {
        if explicit.is_empty() {
            Self::compile(&default_patterns())
        } else {
            Self::compile(explicit)
        }
    }

    pub fn compile(patterns: &[String]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()?;
            compiled.push(Pattern {
                matcher: glob.compile_matcher(),
                name_only: !pattern.contains('/'),
            });
        }

        Ok(Self { patterns: compiled })
    }

    /// Decide whether a project-relative path should be left out of the
    /// archive. First match wins; order carries no other meaning.
    pub fn is_excluded(&self, rel: &Path) -> bool {
        let posix = utils::to_posix_string(rel);

        self.patterns.iter().any(|pattern| {
            if pattern.name_only {
                rel.file_name()
                    .is_some_and(|name| pattern.matcher.is_match(Path::new(name)))
            } else {
                pattern.matcher.is_match(&posix)
            }
        })
    }
}

/// Parse the bundled default exclusion list, skipping blank lines and
/// `#` comments.
pub fn default_patterns() -> Vec<String> {
    DEFAULT_EXCLUDES
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
