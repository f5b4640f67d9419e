// crates/geofind-core/src/loader/common_io.rs
use crate::error::{FindError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens a file, buffers it and unwraps gzip when the name ends in `.gz`.
///
/// Returns a generic reader so callers don't care about compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        FindError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(FindError::InvalidOption(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Source format guessed from the file name, ignoring a trailing `.gz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Binary,
}

pub fn detect_format(path: &Path) -> SourceFormat {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".bin") {
        SourceFormat::Binary
    } else {
        SourceFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats() {
        assert_eq!(detect_format(Path::new("data/f.json")), SourceFormat::Json);
        assert_eq!(detect_format(Path::new("data/f.json.gz")), SourceFormat::Json);
        assert_eq!(detect_format(Path::new("data/f.bin")), SourceFormat::Binary);
        assert_eq!(detect_format(Path::new("data/F.BIN.gz")), SourceFormat::Binary);
        assert!(is_gzip(Path::new("x.json.GZ")));
    }
}
