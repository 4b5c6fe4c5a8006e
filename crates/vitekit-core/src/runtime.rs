//! Runtime detection for Node.js, git, and the package managers

use std::process::Command;

use semver::Version;

/// Minimum Node.js major version the generated tooling supports
pub const MIN_NODE_MAJOR: u64 = 18;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if git is available
pub fn is_git_installed() -> bool {
    probe("git", "git").available
}

/// Check if a package manager binary is available
pub fn is_package_manager_installed(binary: &str) -> bool {
    Command::new(binary)
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success())
}

/// Parse a `node --version` string (e.g. `v22.1.0`) into a semver version
pub fn parse_node_version(version: &str) -> Option<Version> {
    Version::parse(version.trim().trim_start_matches('v')).ok()
}

/// Verify the installed Node.js meets the minimum supported major version.
/// Returns the detected version string, or a user-facing message when Node
/// is missing or too old.
pub fn check_node_version() -> Result<String, String> {
    let info = check_node();
    if !info.available {
        return Err(format!(
            "Node.js is not installed. Please install Node.js {}.0.0 or higher (https://nodejs.org).",
            MIN_NODE_MAJOR
        ));
    }

    let raw = info.version.unwrap_or_default();
    match parse_node_version(&raw) {
        Some(version) if version.major >= MIN_NODE_MAJOR => Ok(raw),
        Some(_) => Err(format!(
            "Node.js version {} is not supported. Please upgrade to Node.js {}.0.0 or higher.",
            raw, MIN_NODE_MAJOR
        )),
        // An unparseable version string is not grounds for refusing to run
        None => Ok(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_version_strips_prefix() {
        let version = parse_node_version("v20.11.1").unwrap();
        assert_eq!(version.major, 20);
        assert_eq!(version.minor, 11);

        let bare = parse_node_version("18.0.0").unwrap();
        assert_eq!(bare.major, 18);
    }

    #[test]
    fn test_parse_node_version_rejects_garbage() {
        assert!(parse_node_version("not-a-version").is_none());
        assert!(parse_node_version("").is_none());
    }

    #[test]
    fn test_minimum_major_is_18() {
        assert_eq!(MIN_NODE_MAJOR, 18);
        let old = parse_node_version("v16.20.0").unwrap();
        assert!(old.major < MIN_NODE_MAJOR);
        let supported = parse_node_version("v18.0.0").unwrap();
        assert!(supported.major >= MIN_NODE_MAJOR);
    }
}
