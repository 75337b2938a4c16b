//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox `/host` points to the cwd of the last focused terminal, or
//! the folder Zellij was started from. That is usually the user's home
//! directory, so `~` is mapped onto it.

use std::path::PathBuf;

/// File name of the OTLP JSON trace export.
pub const TRACE_FILE_NAME: &str = "projboard-otlp.json";

/// Returns the directory projboard writes its trace export to.
///
/// Resolves to `~/.local/share/zellij/projboard` on the host.
///
/// # Examples
///
/// ```
/// use projboard::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/projboard"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("projboard")
}

/// Full path of the trace export file.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `theme_file` configuration key. Other paths pass through
/// unchanged.
///
/// # Examples
///
/// ```
/// use projboard::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), PathBuf::from("/host/themes/dark.toml"));
/// assert_eq!(expand_tilde("/etc/theme.toml"), PathBuf::from("/etc/theme.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let path = path.trim();
    if let Some(rest) = path.strip_prefix("~/") {
        PathBuf::from("/host").join(rest)
    } else if path == "~" {
        PathBuf::from("/host")
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("~", "/host")]
    #[case("~/a/b.toml", "/host/a/b.toml")]
    #[case("  ~/padded.toml ", "/host/padded.toml")]
    #[case("~user/x", "~user/x")]
    #[case("relative.toml", "relative.toml")]
    fn tilde_maps_to_host_mount(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(expand_tilde(input), PathBuf::from(expected));
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(trace_file_path().parent(), Some(get_data_dir().as_path()));
        assert!(trace_file_path().ends_with(TRACE_FILE_NAME));
    }
}
