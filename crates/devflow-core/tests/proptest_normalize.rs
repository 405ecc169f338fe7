//! Property-based tests for branch-name normalization.

use devflow_core::branch::{compose_branch_name, is_slug, normalize, BranchConfig};
use devflow_core::types::BranchType;
use proptest::prelude::*;

/// Text biased toward the characters normalization cares about.
fn noisy_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[A-Za-z0-9 _.#!&*-]{0,40}",
        "[ _.-]{0,10}[a-zA-Z]{1,8}[ _.-]{0,10}",
    ]
}

fn branch_type() -> impl Strategy<Value = BranchType> {
    prop_oneof![
        Just(BranchType::Feat),
        Just(BranchType::Fix),
        Just(BranchType::Hotfix),
        Just(BranchType::Chore),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: normalizing twice changes nothing.
    #[test]
    fn normalize_is_idempotent(s in noisy_text()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Property: output is empty or a well-formed slug.
    #[test]
    fn output_is_slug_or_empty(s in noisy_text()) {
        let out = normalize(&s);
        prop_assert!(out.is_empty() || is_slug(&out), "not a slug: {:?}", out);
        prop_assert!(!out.contains("--"));
        prop_assert!(!out.starts_with('-') && !out.ends_with('-'));
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    /// Property: ASCII letters and digits in the input all survive, in order.
    #[test]
    fn alphanumerics_survive(s in "[A-Za-z0-9 _.!#]{0,40}") {
        let kept: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let out: String = normalize(&s).chars().filter(|c| *c != '-').collect();
        prop_assert_eq!(out, kept);
    }

    /// Property: composed names always start with the type and a slash, and
    /// carry `!` exactly when breaking.
    #[test]
    fn composed_name_shape(t in branch_type(), s in noisy_text(), breaking in any::<bool>()) {
        let config = BranchConfig::new(t, normalize(&s), breaking);
        let name = compose_branch_name(&config);
        let prefix = format!("{}/", t);
        prop_assert!(name.starts_with(&prefix));
        let rest = &name[prefix.len()..];
        prop_assert_eq!(rest.starts_with('!'), breaking);
    }
}
