use std::path::Path;

use crate::Error;

/// Saves a generated robots.txt to `path`, replacing whatever was there.
pub fn save_robots_txt(path: &Path, content: &str) -> Result<(), Error> {
    std::fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "saved robots.txt");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DOWNLOAD_FILE_NAME, compose};
    use data_model_rtx::GenerationInput;

    #[test]
    fn test_save_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DOWNLOAD_FILE_NAME);
        let content = compose(&GenerationInput::default());

        save_robots_txt(&path, &content).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DOWNLOAD_FILE_NAME);

        let err = save_robots_txt(&path, "User-agent: *").unwrap_err();

        assert!(matches!(err, Error::Write { .. }));
        assert!(err.to_string().starts_with("Cannot write "));
    }
}
