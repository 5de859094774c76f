//! Multipart payload construction for the sourcemap API.

use crate::types::Result;
use std::fs;
use std::path::Path;

/// Fixed multipart boundary expected by the upload endpoint configuration.
pub const MULTIPART_BOUNDARY: &str = "---abcdefg---";

/// `Content-Type` header value for every upload request.
pub const CONTENT_TYPE: &str = "multipart/form-data; boundary=---abcdefg---";

/// Derive the public bundle URL for a sourcemap path.
///
/// Strips the output-directory prefix and the trailing `.map`, then prefixes
/// the result with the application base URL. `dist/assets/a.b.js.map` with
/// base `http://x` maps to `http://x/assets/a.b.js`.
pub fn bundle_filepath(source_map_path: &Path, dist_dir: &Path, app_url: &str) -> String {
    let relative = source_map_path
        .strip_prefix(dist_dir)
        .unwrap_or(source_map_path);

    // Normalize separators so the URL is stable across platforms.
    let relative: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let relative = relative.join("/");

    let bundle = relative.strip_suffix(".map").unwrap_or(&relative);

    format!("{}/{}", app_url.trim_end_matches('/'), bundle)
}

/// Build the multipart body for one sourcemap upload.
///
/// Reads the sourcemap file at construction time. A read failure propagates:
/// a map that disappeared between discovery and upload means the build output
/// is inconsistent, and the whole publish step should fail.
pub fn build_body(
    source_map_path: &Path,
    bundle_filepath: &str,
    service_name: &str,
    service_version: u32,
) -> Result<String> {
    let sourcemap = fs::read_to_string(source_map_path)?;

    Ok(encode_multipart(&[
        ("service_name", service_name),
        ("service_version", &service_version.to_string()),
        ("bundle_filepath", bundle_filepath),
        ("sourcemap", &sourcemap),
    ]))
}

/// Encode named text fields as a multipart/form-data body with the fixed
/// boundary.
fn encode_multipart(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();

    for (name, value) in fields {
        body.push_str("--");
        body.push_str(MULTIPART_BOUNDARY);
        body.push_str("\r\n");
        body.push_str(&format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name));
        body.push_str(value);
        body.push_str("\r\n");
    }

    body.push_str("--");
    body.push_str(MULTIPART_BOUNDARY);
    body.push_str("--\r\n");

    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_bundle_filepath_top_level() {
        let url = bundle_filepath(
            &PathBuf::from("dist/main.js.map"),
            &PathBuf::from("dist"),
            "http://localhost:4173",
        );
        assert_eq!(url, "http://localhost:4173/main.js");
    }

    #[test]
    fn test_bundle_filepath_nested() {
        let url = bundle_filepath(
            &PathBuf::from("dist/assets/a.b.js.map"),
            &PathBuf::from("dist"),
            "http://x",
        );
        assert_eq!(url, "http://x/assets/a.b.js");
    }

    #[test]
    fn test_bundle_filepath_trailing_slash_base() {
        let url = bundle_filepath(
            &PathBuf::from("dist/app.js.map"),
            &PathBuf::from("dist"),
            "http://x/",
        );
        assert_eq!(url, "http://x/app.js");
    }

    #[test]
    fn test_encode_multipart_fields_and_boundary() {
        let body = encode_multipart(&[("service_name", "frontend"), ("service_version", "1")]);

        assert!(body.starts_with("-----abcdefg---\r\n"));
        assert!(body.ends_with("-----abcdefg-----\r\n"));
        assert!(body.contains("Content-Disposition: form-data; name=\"service_name\"\r\n\r\nfrontend\r\n"));
        assert!(body.contains("Content-Disposition: form-data; name=\"service_version\"\r\n\r\n1\r\n"));
    }

    #[test]
    fn test_build_body_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("main.js.map");
        std::fs::write(&map, r#"{"version":3}"#).unwrap();

        let body = build_body(&map, "http://x/main.js", "frontend", 2).unwrap();

        assert!(body.contains("name=\"bundle_filepath\"\r\n\r\nhttp://x/main.js\r\n"));
        assert!(body.contains("name=\"sourcemap\"\r\n\r\n{\"version\":3}\r\n"));
        assert!(body.contains("name=\"service_version\"\r\n\r\n2\r\n"));
    }

    #[test]
    fn test_build_body_missing_file_is_fatal() {
        let result = build_body(
            &PathBuf::from("/nonexistent/gone.js.map"),
            "http://x/gone.js",
            "frontend",
            1,
        );
        assert!(result.is_err());
    }
}
