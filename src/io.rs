use crate::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Reads the whole source file; the handle is closed before this returns.
pub fn load(path: &Path) -> Result<Vec<u8>, Error> {
    let bytes = fs::read(path).map_err(|source| Error::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded source image");
    Ok(bytes)
}

/// Creates or truncates `path` and writes `data` to it.
///
/// The parent directory must already exist.
pub fn write(path: &Path, data: &[u8]) -> Result<(), Error> {
    let to_error = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs::File::create(path).map_err(to_error)?;
    file.write_all(data).map_err(to_error)?;
    file.flush().map_err(to_error)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "wrote icon");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.svg");
        match load(&path) {
            Err(Error::SourceNotFound { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon16.png");
        write(&path, b"first, longer contents").unwrap();
        write(&path, b"second").unwrap();
        assert_eq!(load(&path).unwrap(), b"second");
    }

    #[test]
    fn test_write_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon16.png");
        assert!(matches!(write(&path, b"png"), Err(Error::OutputWrite { .. })));
        assert!(!path.parent().unwrap().exists());
    }
}
