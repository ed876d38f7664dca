//! All-or-nothing artifact output.
//!
//! Both files are rendered fully in memory before anything touches the
//! filesystem, and each file is written to a `.tmp` sibling and renamed into
//! place. A run that fails validation therefore never leaves a partial header
//! behind for downstream consumers to pick up.

use std::fs;
use std::path::{Path, PathBuf};

use cakevm_isa::InstructionDef;

use crate::emit;
use crate::error::{Error, Result};
use crate::index::OpcodeIndex;

/// Rendered output files, ready to be written.
#[derive(Debug)]
pub struct Artifacts {
    /// Combined header: prologue + enum + name table + arity table + epilogue.
    pub header: String,
    /// Dispatch macro-invocation list, one line per mnemonic.
    pub suffix_list: String,
}

/// Render both output files from the registry and boilerplate fragments.
///
/// Fails with [`Error::OpcodeCollision`] before producing any text if two
/// definitions share a code.
pub fn render(registry: &[InstructionDef], prologue: &str, epilogue: &str) -> Result<Artifacts> {
    let index = OpcodeIndex::build(registry)?;
    Ok(Artifacts {
        header: emit::combined_header(&index, prologue, epilogue),
        suffix_list: emit::suffix_list(registry),
    })
}

impl Artifacts {
    /// Write both files atomically.
    pub fn write(&self, header_path: &Path, suffix_path: &Path) -> Result<()> {
        write_atomic(header_path, &self.header)?;
        write_atomic(suffix_path, &self.suffix_list)?;
        Ok(())
    }
}

/// Read a boilerplate fragment file verbatim.
pub fn read_fragment(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = tmp_path(path);
    fs::write(&tmp, contents).map_err(|e| Error::Io {
        path: tmp.clone(),
        source: e,
    })?;
    fs::rename(&tmp, path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cakevm-opgen-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn write_atomic_leaves_no_tmp_file() {
        let dir = scratch_dir("no-tmp");
        let path = dir.join("opcodes.h");
        write_atomic(&path, "contents\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "contents\n");
        assert!(!tmp_path(&path).exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_atomic_replaces_existing_file() {
        let dir = scratch_dir("replace");
        let path = dir.join("opcodes.h");
        write_atomic(&path, "old\n").unwrap();
        write_atomic(&path, "new\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_atomic_reports_missing_directory() {
        let dir = scratch_dir("missing").join("nonexistent");
        let path = dir.join("opcodes.h");
        let err = write_atomic(&path, "contents\n").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }
}
