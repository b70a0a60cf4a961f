//! Prefix composition for nested scopes and routes.

use crate::error::{BuildError, Result};

/// Join a parent absolute prefix with a locally declared fragment.
///
/// An empty fragment leaves the parent prefix unchanged. Otherwise the two
/// are joined with exactly one `/` between them, regardless of trailing or
/// leading separators on either side: `"/a" + "/b"`, `"/a/" + "b"` and
/// `"/a" + "b"` all compose to `"/a/b"`.
pub fn compose(parent: &str, fragment: &str) -> String {
    if fragment.is_empty() {
        return parent.to_string();
    }
    let parent = parent.trim_end_matches('/');
    let fragment = fragment.trim_start_matches('/');
    format!("{parent}/{fragment}")
}

/// Reject fragments that cannot form a well-formed prefix.
pub(crate) fn validate_fragment(fragment: &str) -> Result<()> {
    if fragment.contains(char::is_whitespace) {
        return Err(BuildError::malformed_prefix(fragment, "contains whitespace"));
    }
    if fragment.contains("//") {
        return Err(BuildError::malformed_prefix(
            fragment,
            "contains an empty segment",
        ));
    }
    Ok(())
}
