use crate::error::{PomVersionError, Result};

/// Suffix marking a development (pre-release) version.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Derives the release form of a version string.
///
/// Strips a trailing `-SNAPSHOT` suffix; any other version is returned
/// unchanged, so the transform is idempotent.
///
/// # Arguments
/// * `version` - Version string to transform
///
/// # Example
/// ```ignore
/// assert_eq!(to_release("1.2.3-SNAPSHOT"), "1.2.3");
/// assert_eq!(to_release("1.2.3"), "1.2.3");
/// ```
pub fn to_release(version: &str) -> String {
    version
        .strip_suffix(SNAPSHOT_SUFFIX)
        .unwrap_or(version)
        .to_string()
}

/// Derives the next development form of a version string.
///
/// A `-SNAPSHOT` version is stripped down to its release form, exactly as
/// [`to_release`] does. Otherwise the last dot-separated component is parsed
/// as a base-10 integer and incremented by one.
///
/// # Arguments
/// * `version` - Version string to transform
///
/// # Returns
/// * `Ok(String)` - The transformed version
/// * `Err` - If the last component of a non-SNAPSHOT version is not an integer
///
/// # Example
/// ```ignore
/// assert_eq!(next_version("1.2.3-SNAPSHOT").unwrap(), "1.2.3");
/// assert_eq!(next_version("1.2.3").unwrap(), "1.2.4");
/// ```
pub fn next_version(version: &str) -> Result<String> {
    if let Some(stripped) = version.strip_suffix(SNAPSHOT_SUFFIX) {
        return Ok(stripped.to_string());
    }

    let (prefix, last) = match version.rsplit_once('.') {
        Some((prefix, last)) => (Some(prefix), last),
        None => (None, version),
    };

    let number: u64 = last.parse().map_err(|_| {
        PomVersionError::format(format!(
            "last component '{}' of version '{}' is not an integer",
            last, version
        ))
    })?;
    let incremented = number.saturating_add(1);

    Ok(match prefix {
        Some(prefix) => format!("{}.{}", prefix, incremented),
        None => incremented.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_release_strips_snapshot_suffix() {
        assert_eq!(to_release("1.2.3-SNAPSHOT"), "1.2.3");
        assert_eq!(to_release("2.0.0-SNAPSHOT"), "2.0.0");
    }

    #[test]
    fn test_to_release_keeps_release_versions() {
        assert_eq!(to_release("1.2.3"), "1.2.3");
        assert_eq!(to_release("10.0"), "10.0");
    }

    #[test]
    fn test_to_release_is_idempotent() {
        for version in ["1.2.3-SNAPSHOT", "1.2.3", "0.5-SNAPSHOT"] {
            let once = to_release(version);
            assert_eq!(to_release(&once), once);
        }
    }

    #[test]
    fn test_next_version_strips_snapshot_suffix() {
        assert_eq!(next_version("1.2.3-SNAPSHOT").unwrap(), "1.2.3");
    }

    #[test]
    fn test_next_version_increments_last_component() {
        assert_eq!(next_version("1.2.3").unwrap(), "1.2.4");
        assert_eq!(next_version("1.2.0").unwrap(), "1.2.1");
        assert_eq!(next_version("1.9").unwrap(), "1.10");
        assert_eq!(next_version("7").unwrap(), "8");
    }

    #[test]
    fn test_next_version_rejects_non_integer_last_component() {
        assert_eq!(
            next_version("1.2.3-rc1").unwrap_err().to_string(),
            "Version format error: last component '3-rc1' of version '1.2.3-rc1' is not an integer",
        );

        assert_eq!(
            next_version("1.2.beta").unwrap_err().to_string(),
            "Version format error: last component 'beta' of version '1.2.beta' is not an integer",
        );
    }
}
