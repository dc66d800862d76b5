//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::{InputArgs, PartitionCommand, SeedOrder};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_inp_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn input(path: PathBuf) -> InputArgs {
    InputArgs {
        path,
        lines: None,
        name: None,
    }
}

/// A `partition` command with default options writing into `out_dir`.
pub(super) fn partition_command(path: PathBuf, out_dir: &Path) -> PartitionCommand {
    PartitionCommand {
        input: input(path),
        selection: SeedOrder::Ascending,
        prefix: "beams_".to_owned(),
        ids_per_line: std::num::NonZeroUsize::MIN.saturating_add(9),
        id_name: "MY_DVCON_SIZING".to_owned(),
        elset_out: out_dir.join("output.inp"),
        dvcon_out: out_dir.join("dvcon.par"),
    }
}
