//! Input document loading.

use std::io::Read as _;
use std::path::Path;

/// Reads a whole document from `path`, or from stdin when `path` is `-`.
pub fn read(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        log::debug!("Reading document from stdin");
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)?;
        return Ok(contents);
    }

    log::debug!("Reading document from {}", path.display());
    std::fs::read_to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_file_contents() {
        let path = std::env::temp_dir().join(format!(
            "region_map_cli_document_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "[[0, 0]]").unwrap();
        assert_eq!(read(&path).unwrap(), "[[0, 0]]");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read(Path::new("/nonexistent/region_map/border.json")).is_err());
    }
}
