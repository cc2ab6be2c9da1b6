use regex::Regex;
use std::sync::OnceLock;

const TAG_REF_PREFIX: &str = "refs/tags/";

/// Removes a leading `refs/tags/` so refs taken straight from a push event
/// can be used as tag names.
pub fn strip_ref_prefix(value: &str) -> &str {
    value.strip_prefix(TAG_REF_PREFIX).unwrap_or(value)
}

/// Resolves the prerelease flag. Only the literal inputs `true` and `false`
/// are honored; anything else falls back to inspecting the tag.
pub fn resolve_prerelease(input: Option<&str>, tag_name: &str) -> bool {
    match input {
        Some("true") => true,
        Some("false") => false,
        _ => looks_like_prerelease(tag_name),
    }
}

/// A digit followed by `-` and a lowercase letter anywhere in the tag,
/// e.g. `1.0.0-beta`.
pub fn looks_like_prerelease(tag_name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\d-[a-z]").expect("prerelease pattern is valid"))
        .is_match(tag_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ref_prefix() {
        assert_eq!(strip_ref_prefix("refs/tags/v2.3.1"), "v2.3.1");
    }

    #[test]
    fn leaves_plain_tags_alone() {
        assert_eq!(strip_ref_prefix("v2.3.1"), "v2.3.1");
    }

    #[test]
    fn only_strips_a_leading_prefix() {
        assert_eq!(strip_ref_prefix("release-refs/tags/v1"), "release-refs/tags/v1");
    }

    #[test]
    fn hyphenated_lowercase_suffix_is_prerelease() {
        for tag in ["v1.0.0-alpha", "1.0.0-beta.2", "v2.1-rc1", "app-3-preview"] {
            assert!(looks_like_prerelease(tag), "{tag} should be a prerelease");
        }
    }

    #[test]
    fn other_tags_are_stable() {
        for tag in ["v1.0.0", "v1.0.0-RC1", "v1.0.0-1", "release-v1", "v1.0.0_beta"] {
            assert!(!looks_like_prerelease(tag), "{tag} should not be a prerelease");
        }
    }

    #[test]
    fn explicit_input_overrides_the_tag() {
        assert!(resolve_prerelease(Some("true"), "v1.0.0"));
        assert!(!resolve_prerelease(Some("false"), "v1.0.0-alpha"));
    }

    #[test]
    fn non_literal_input_falls_back_to_the_tag() {
        assert!(resolve_prerelease(None, "v1.0.0-alpha"));
        assert!(!resolve_prerelease(None, "v1.0.0"));
        assert!(resolve_prerelease(Some("True"), "v1.0.0-alpha"));
        assert!(!resolve_prerelease(Some("yes"), "v1.0.0"));
    }
}
