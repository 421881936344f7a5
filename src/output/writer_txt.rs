use std::fs;
use std::path::Path;

use crate::errors::ScanError;
use crate::utils::ensure_dir;

/// Write the subdomain list to `path`, one name per line, no trailing
/// newline. The parent directory is created first if it does not exist; a
/// directory created here is not cleaned up when the file write then fails.
pub fn write_subdomains(path: &Path, subdomains: &[String]) -> Result<(), ScanError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, subdomains.join("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("cert_hunter_test_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn writes_newline_joined_without_trailing_newline() {
        let path = scratch_path("joined/out.crt.txt");
        let list = vec!["a.example.com".to_string(), "b.example.com".to_string()];
        write_subdomains(&path, &list).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes, b"a.example.com\nb.example.com");
    }

    #[test]
    fn empty_list_writes_empty_file() {
        let path = scratch_path("empty/out.crt.txt");
        write_subdomains(&path, &[]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let path = scratch_path("nested/deeper/out.crt.txt");
        write_subdomains(&path, &["x.example.com".to_string()]).unwrap();
        assert!(path.exists());
    }
}
