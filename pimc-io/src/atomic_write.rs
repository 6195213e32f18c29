use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::EngineError;

/// Writes `contents` to a temporary file beside `path` and renames it into place, so a reader
/// never observes a partially-written file even if the process is interrupted mid-write.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), EngineError> {
    let tmp_path = path.with_extension(match path.extension() {
        Some(ext) => format!("{}.tmp", ext.to_string_lossy()),
        None => "tmp".to_string(),
    });
    {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_and_publishes_the_final_file() {
        let dir = std::env::temp_dir().join(format!("pimc-io-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("atomic.txt");

        write_atomic(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert!(!path.with_extension("txt.tmp").exists());

        fs::remove_dir_all(&dir).ok();
    }
}
