use serde::Serialize;

const SUPPORTED: &[&str] = &["linux", "macos", "windows"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub os: String,
    pub is_windows: bool,
    pub is_mac: bool,
    pub is_linux: bool,
    pub is_supported: bool,
    pub shell: &'static str,
    pub path_separator: char,
}

impl PlatformInfo {
    pub fn current() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// Describe a platform by its `std::env::consts::OS` name.
    pub fn for_os(os: &str) -> Self {
        let is_windows = os == "windows";
        Self {
            os: os.to_string(),
            is_windows,
            is_mac: os == "macos",
            is_linux: os == "linux",
            is_supported: SUPPORTED.contains(&os),
            shell: if is_windows { "cmd.exe" } else { "sh" },
            path_separator: if is_windows { '\\' } else { '/' },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_matches_host() {
        let p = PlatformInfo::current();
        assert_eq!(p.is_linux, cfg!(target_os = "linux"));
        assert_eq!(p.is_mac, cfg!(target_os = "macos"));
        assert_eq!(p.is_windows, cfg!(target_os = "windows"));
        assert_eq!(p.path_separator, std::path::MAIN_SEPARATOR);
    }

    #[test]
    fn windows_uses_cmd() {
        let p = PlatformInfo::for_os("windows");
        assert!(p.is_supported);
        assert_eq!(p.shell, "cmd.exe");
        assert_eq!(p.path_separator, '\\');
    }

    #[test]
    fn unknown_os_is_unsupported() {
        let p = PlatformInfo::for_os("freebsd");
        assert!(!p.is_supported);
        assert!(!p.is_linux && !p.is_mac && !p.is_windows);
        assert_eq!(p.shell, "sh");
    }
}
