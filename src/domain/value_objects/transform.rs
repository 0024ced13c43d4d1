//! Content transform for text assets
//!
//! Text assets reference the install root through a fixed placeholder
//! (`~/.claude/`). On install, every occurrence is rewritten to the expression
//! that reaches the actual destination root for the chosen install mode.

use std::borrow::Cow;
use std::path::Path;

use super::InstallScope;

/// Placeholder written in source assets for "the destination root".
pub const ROOT_PLACEHOLDER: &str = "~/.claude/";

/// Replacement used for project-local installs.
pub const LOCAL_ROOT_EXPR: &str = "./.claude/";

/// Placeholder substitution applied to text assets.
///
/// The transform is idempotent for every replacement this crate produces,
/// which is what lets installed content fingerprint identically to source
/// content when the transform is applied on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTransform {
    placeholder: String,
    replacement: String,
}

impl ContentTransform {
    pub fn new(placeholder: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            replacement: replacement.into(),
        }
    }

    /// Build the transform for an install mode.
    ///
    /// - global with a custom root: absolute root path plus `/`
    /// - global at the default root: `~/.claude/` (the placeholder itself)
    /// - local: `./.claude/`
    pub fn for_install(scope: InstallScope, custom_root: Option<&Path>) -> Self {
        let replacement = match (scope, custom_root) {
            (InstallScope::Local, _) => LOCAL_ROOT_EXPR.to_string(),
            (InstallScope::Global, Some(root)) => {
                let root = root.to_string_lossy().replace('\\', "/");
                format!("{}/", root.trim_end_matches('/'))
            }
            (InstallScope::Global, None) => ROOT_PLACEHOLDER.to_string(),
        };
        Self::new(ROOT_PLACEHOLDER, replacement)
    }

    /// A transform that changes nothing.
    pub fn identity() -> Self {
        Self::new(ROOT_PLACEHOLDER, ROOT_PLACEHOLDER)
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the substitution. Borrows when nothing matches.
    pub fn apply<'a>(&self, content: &'a [u8]) -> Cow<'a, [u8]> {
        let needle = self.placeholder.as_bytes();
        if needle.is_empty() || self.placeholder == self.replacement {
            return Cow::Borrowed(content);
        }
        if !contains(content, needle) {
            return Cow::Borrowed(content);
        }

        let mut out = Vec::with_capacity(content.len());
        let mut rest = content;
        while let Some(pos) = find(rest, needle) {
            out.extend_from_slice(&rest[..pos]);
            out.extend_from_slice(self.replacement.as_bytes());
            rest = &rest[pos + needle.len()..];
        }
        out.extend_from_slice(rest);
        Cow::Owned(out)
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn local_install_rewrites_to_cwd_relative() {
        let t = ContentTransform::for_install(InstallScope::Local, None);
        let out = t.apply(b"see @~/.claude/mindsystem/workflows/plan.md");
        assert_eq!(&*out, b"see @./.claude/mindsystem/workflows/plan.md");
    }

    #[test]
    fn global_default_keeps_home_shorthand() {
        let t = ContentTransform::for_install(InstallScope::Global, None);
        let input = b"@~/.claude/mindsystem/x.md";
        assert!(matches!(t.apply(input), Cow::Borrowed(_)));
        assert_eq!(&*t.apply(input), input);
    }

    #[test]
    fn global_custom_root_uses_absolute_path() {
        let root = PathBuf::from("/home/me/.claude-work");
        let t = ContentTransform::for_install(InstallScope::Global, Some(&root));
        assert_eq!(t.replacement(), "/home/me/.claude-work/");
        let out = t.apply(b"a ~/.claude/b ~/.claude/c");
        assert_eq!(&*out, b"a /home/me/.claude-work/b /home/me/.claude-work/c");
    }

    #[test]
    fn trailing_slash_on_custom_root_is_not_doubled() {
        let root = PathBuf::from("/opt/claude/");
        let t = ContentTransform::for_install(InstallScope::Global, Some(&root));
        assert_eq!(t.replacement(), "/opt/claude/");
    }

    #[test]
    fn no_match_borrows() {
        let t = ContentTransform::for_install(InstallScope::Local, None);
        assert!(matches!(t.apply(b"plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn transform_is_idempotent() {
        let t = ContentTransform::for_install(InstallScope::Local, None);
        let once = t.apply(b"x ~/.claude/y").into_owned();
        let twice = t.apply(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn non_utf8_content_is_handled() {
        let t = ContentTransform::for_install(InstallScope::Local, None);
        let mut input = vec![0xff, 0xfe];
        input.extend_from_slice(b"~/.claude/");
        let out = t.apply(&input);
        assert_eq!(&out[..2], &[0xff, 0xfe]);
        assert_eq!(&out[2..], b"./.claude/");
    }
}
