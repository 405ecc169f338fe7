/// Environment variables set by common CI providers.
pub const CI_VARS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "TRAVIS", "JENKINS_URL"];

/// True when running under a known CI provider.
pub fn is_ci() -> bool {
    is_ci_with(|key| std::env::var(key).ok())
}

/// Like [`is_ci`], reading variables through `lookup`. Set-but-empty
/// variables do not count.
pub fn is_ci_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    CI_VARS
        .iter()
        .any(|key| lookup(key).is_some_and(|v| !v.is_empty()))
}
