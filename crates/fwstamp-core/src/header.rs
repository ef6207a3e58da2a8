//! Rendering and writing of the generated C header.

use std::path::{Path, PathBuf};

use crate::build_info::BuildInfo;

/// Render the header text for `info`.
pub fn render(info: &BuildInfo) -> String {
    format!(
        "// Auto-generated build info\n\
         #pragma once\n\
         #define BUILD_TIME \"{}\"\n\
         #define BUILD_VERSION \"{}\"\n\
         #define BUILD_COMMIT \"{}\"\n",
        c_escape(&info.build_time),
        c_escape(&info.version),
        c_escape(&info.commit),
    )
}

/// Write the header to `dir/name`, replacing any previous file.
pub fn write(dir: &Path, name: &str, info: &BuildInfo) -> crate::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, render(info)).map_err(|source| crate::Error::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

// Keeps the value inside its string literal.
fn c_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(version: &str, commit: &str) -> BuildInfo {
        BuildInfo {
            build_time: "2026-10-19T08:30:00.123456".to_string(),
            version: version.to_string(),
            commit: commit.to_string(),
        }
    }

    #[test]
    fn test_render_exact_layout() {
        let text = render(&info("2.3.0", "abc1234"));
        assert_eq!(
            text,
            "// Auto-generated build info\n\
             #pragma once\n\
             #define BUILD_TIME \"2026-10-19T08:30:00.123456\"\n\
             #define BUILD_VERSION \"2.3.0\"\n\
             #define BUILD_COMMIT \"abc1234\"\n"
        );
    }

    #[test]
    fn test_render_escapes_quotes_and_backslashes() {
        let text = render(&info("1.0 \"beta\"", "c:\\x"));
        assert!(text.contains("#define BUILD_VERSION \"1.0 \\\"beta\\\"\"\n"));
        assert!(text.contains("#define BUILD_COMMIT \"c:\\\\x\"\n"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_write_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let stale = "#define STALE 1\n".repeat(20);
        std::fs::write(dir.path().join("build_info.h"), stale).unwrap();

        let path = write(dir.path(), "build_info.h", &info("2.3.0", "abc1234")).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert_eq!(text, render(&info("2.3.0", "abc1234")));
        assert!(!text.contains("STALE"));
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");

        let err = write(&missing, "build_info.h", &info("2.3.0", "abc1234")).unwrap_err();
        match err {
            crate::Error::Write { path, .. } => {
                assert_eq!(path, missing.join("build_info.h"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
