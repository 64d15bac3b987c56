//! Version string shared by `--version` and the report banners.

const SHORT_SHA_LEN: usize = 7;

/// Placeholder vergen writes when it cannot read git metadata.
const VERGEN_PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// Returns `pkg_version (short_sha[-dirty] commit_date)`.
///
/// Missing git metadata (a source tarball, or no `git` on the build host)
/// is reported as `unknown`.
#[must_use]
pub fn build_version() -> String {
    describe(
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA"),
        option_env!("VERGEN_GIT_DIRTY") == Some("true"),
        option_env!("VERGEN_GIT_COMMIT_DATE"),
    )
}

fn describe(pkg_version: &str, sha: Option<&str>, dirty: bool, date: Option<&str>) -> String {
    let Some(sha) = sha.filter(|sha| !sha.is_empty() && *sha != VERGEN_PLACEHOLDER) else {
        return format!("{pkg_version} (unknown)");
    };
    let short = sha.get(..SHORT_SHA_LEN).unwrap_or(sha);
    let dirty = if dirty { "-dirty" } else { "" };
    match date {
        Some(date) => format!("{pkg_version} ({short}{dirty} {date})"),
        None => format!("{pkg_version} ({short}{dirty})"),
    }
}
