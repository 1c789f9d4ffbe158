use crate::enrichment::EnrichedRecord;
use crate::pipeline::error::PipelineError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write all records as one JSON array.
///
/// The array is serialized in full first, then written to a temp file next to
/// `path` and renamed over it, so a failed run never leaves a truncated file.
/// A replaced file keeps its permissions; a new one gets the usual
/// umask-filtered mode.
pub fn write_output(
    path: &Path,
    records: &[EnrichedRecord],
    pretty: bool,
) -> Result<(), PipelineError> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(records)
    } else {
        serde_json::to_vec(records)
    }
    .map_err(|source| PipelineError::Serialize { source })?;
    bytes.push(b'\n');

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = create_temp(dir, path).map_err(|e| PipelineError::write_output(path, e))?;
    tmp.write_all(&bytes)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| PipelineError::write_output(path, e))?;
    tmp.persist(path)
        .map_err(|e| PipelineError::write_output(path, e.error))?;

    Ok(())
}

fn create_temp(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;

    match fs::metadata(target) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    Ok(tmp)
}
