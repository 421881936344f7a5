use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ScanError;

pub fn ensure_dir(path: &Path) -> Result<(), ScanError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Default output location: `<home>/result_directory/<domain>.crt.txt`.
pub fn default_output_path(domain: &str) -> Result<PathBuf, ScanError> {
    let home = dirs::home_dir().ok_or(ScanError::Environment)?;
    Ok(home
        .join("result_directory")
        .join(format!("{domain}.crt.txt")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_home_relative() {
        let path = default_output_path("example.com").unwrap();
        assert!(path.ends_with("result_directory/example.com.crt.txt"));
    }
}
