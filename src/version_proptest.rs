//! Property-based tests for version classification.
//!
//! These tests use proptest to generate random version strings and verify
//! that the classification rule holds for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::version::{resolve, VersionSpec};
    use proptest::prelude::*;

    proptest! {
        /// Property: any 40 hex characters, in any case, is a commit hash
        #[test]
        fn forty_hex_chars_is_commit_hash(input in "[0-9a-fA-F]{40}") {
            prop_assert_eq!(resolve(Some(input.as_str())), VersionSpec::CommitHash(input.clone()));
        }

        /// Property: hex strings of any other length are branch or tag names
        #[test]
        fn other_length_hex_is_branch_or_tag(input in "[0-9a-fA-F]{1,39}|[0-9a-fA-F]{41,64}") {
            prop_assert_eq!(resolve(Some(input.as_str())), VersionSpec::BranchOrTag(input.clone()));
        }

        /// Property: a single non-hex character forces a branch or tag
        #[test]
        fn non_hex_char_is_branch_or_tag(
            prefix in "[0-9a-f]{20}",
            bad in "[g-zG-Z./_-]",
            suffix in "[0-9a-f]{19}",
        ) {
            let input = format!("{}{}{}", prefix, bad, suffix);
            prop_assert_eq!(resolve(Some(input.as_str())), VersionSpec::BranchOrTag(input.clone()));
        }

        /// Property: every non-empty string resolves to something other than Default
        #[test]
        fn non_empty_is_never_default(input in ".+") {
            prop_assert_ne!(resolve(Some(input.as_str())), VersionSpec::Default);
        }

        /// Property: the caller's text is preserved unchanged
        #[test]
        fn resolved_name_is_input(input in ".+") {
            let resolved = resolve(Some(input.as_str()));
            prop_assert_eq!(resolved.as_ref_name(), Some(input.as_str()));
        }
    }
}
