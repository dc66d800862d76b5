//! Atomic artifact writes.
//!
//! Every artifact of a run is staged in a temporary file beside its
//! destination before any of them is renamed into place, so a failed run
//! leaves no outputs behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{instrument, warn};

use super::commands::CliError;

/// An artifact written and synced to a temporary file, awaiting rename.
#[derive(Debug)]
struct StagedArtifact {
    path: PathBuf,
    file: NamedTempFile,
}

fn write_error(path: &Path, source: std::io::Error) -> CliError {
    CliError::Write {
        path: path.to_path_buf(),
        source,
    }
}

#[instrument(name = "cli.stage_artifact", err, skip(contents), fields(path = %path.display(), bytes = contents.len()))]
fn stage(path: &Path, contents: &str) -> Result<StagedArtifact, CliError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(directory).map_err(|err| write_error(path, err))?;
    file.write_all(contents.as_bytes())
        .map_err(|err| write_error(path, err))?;
    file.as_file()
        .sync_all()
        .map_err(|err| write_error(path, err))?;
    Ok(StagedArtifact {
        path: path.to_path_buf(),
        file,
    })
}

/// Writes every `(path, contents)` pair, or none of them.
///
/// All artifacts are staged first. Renames happen only once staging has
/// succeeded for all of them; if a rename fails, destinations already
/// renamed by this call are removed again.
#[instrument(name = "cli.write_artifacts", err, skip(artifacts), fields(count = artifacts.len()))]
pub(super) fn write_all_atomically(artifacts: &[(&Path, &str)]) -> Result<(), CliError> {
    let staged = artifacts
        .iter()
        .map(|&(path, contents)| stage(path, contents))
        .collect::<Result<Vec<_>, _>>()?;

    let mut persisted: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for StagedArtifact { path, file } in staged {
        if let Err(err) = file.persist(&path) {
            roll_back(&persisted);
            return Err(write_error(&path, err.error));
        }
        persisted.push(path);
    }
    Ok(())
}

fn roll_back(persisted: &[PathBuf]) {
    for path in persisted {
        if let Err(err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %err, "failed to remove partially written artifact");
        }
    }
}
