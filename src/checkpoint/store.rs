use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::checkpoint::codec::StateCodec;
use crate::error::CheckpointError;

/// Name of the manifest file listing retained checkpoints, most-recent-first.
pub const MANIFEST_NAME: &str = "latest_checkpoint";

/// Name of the independently tracked best snapshot.
pub const BEST_NAME: &str = "best.ckpt";

/// Configuration for the checkpoint store.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CheckpointStoreConfig {
    pub checkpoint_dir: PathBuf,
    pub max_keep: usize,
}

impl Default for CheckpointStoreConfig {
    fn default() -> Self {
        CheckpointStoreConfig {
            checkpoint_dir: PathBuf::from("checkpoints"),
            max_keep: 1,
        }
    }
}

/// Persists state snapshots with bounded retention.
///
/// A directory managed by the store contains the snapshot files, a
/// `latest_checkpoint` manifest naming the retained snapshots
/// most-recent-first, and optionally a `best.ckpt` snapshot that is
/// overwritten whenever a save is flagged best. The best snapshot lives
/// outside the retention window and is never pruned.
///
/// Operations are synchronous and take no locks; concurrent writers to the
/// same directory race on the manifest.
#[derive(Debug)]
pub struct CheckpointStore<C: StateCodec> {
    codec: C,
    config: CheckpointStoreConfig,
}

impl<C: StateCodec> CheckpointStore<C> {
    /// Create a store. Fails if `max_keep` is zero; retaining no
    /// checkpoints at all is treated as invalid input.
    pub fn new(codec: C, config: CheckpointStoreConfig) -> Result<Self, CheckpointError> {
        if config.max_keep == 0 {
            return Err(CheckpointError::InvalidMaxKeep(config.max_keep));
        }
        Ok(CheckpointStore { codec, config })
    }

    pub fn config(&self) -> &CheckpointStoreConfig {
        &self.config
    }

    /// Save `state` to `path`, rotating the manifest in `path`'s parent
    /// directory and pruning snapshots that fall outside the retention
    /// window. If `is_best`, an identical snapshot is written to
    /// `best.ckpt` alongside.
    ///
    /// The parent directory is created if absent. Snapshot and manifest
    /// writes go through a temp file and rename so a crash mid-write cannot
    /// leave a torn file under the final name; the snapshot/manifest pair
    /// is still not updated transactionally.
    pub fn save(
        &self,
        state: &C::State,
        path: &Path,
        is_best: bool,
    ) -> Result<(), CheckpointError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| CheckpointError::InvalidPath(path.to_path_buf()))?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Err(CheckpointError::InvalidPath(path.to_path_buf())),
        };
        fs::create_dir_all(dir)?;

        self.write_snapshot(state, path, &file_name)?;
        if is_best {
            self.write_snapshot(state, &dir.join(BEST_NAME), BEST_NAME)?;
        }

        let mut manifest = read_manifest(dir)?;
        // Membership anywhere, not just first: prepending a name that is
        // already retained would make the prune loop delete the snapshot
        // this save just wrote.
        if !manifest.iter().any(|entry| entry == &file_name) {
            manifest.insert(0, file_name);
        }
        if manifest.len() > self.config.max_keep {
            for stale in &manifest[self.config.max_keep..] {
                let stale_path = dir.join(stale);
                match fs::remove_file(&stale_path) {
                    Ok(()) => {
                        tracing::debug!(file = %stale_path.display(), "pruned checkpoint");
                    }
                    // Already gone: pruning is idempotent.
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(e.into()),
                }
            }
            manifest.truncate(self.config.max_keep);
        }
        write_manifest(dir, &manifest)?;

        tracing::debug!(
            path = %path.display(),
            is_best,
            retained = manifest.len(),
            "saved checkpoint"
        );
        Ok(())
    }

    /// Read the manifest of `directory`, most-recent-first, creating an
    /// empty manifest file if none exists yet.
    pub fn list_checkpoints(&self, directory: &Path) -> Result<Vec<String>, CheckpointError> {
        if !directory.is_dir() {
            return Err(CheckpointError::NotADirectory(directory.to_path_buf()));
        }
        let manifest_path = directory.join(MANIFEST_NAME);
        if !manifest_path.exists() {
            fs::write(&manifest_path, "")?;
        }
        read_manifest(directory)
    }

    /// Load the best snapshot of `directory`, or `None` if no save was
    /// ever flagged best. Does not touch the manifest.
    pub fn load_best(&self, directory: &Path) -> Result<Option<C::State>, CheckpointError> {
        let best_path = directory.join(BEST_NAME);
        if !best_path.is_file() {
            return Ok(None);
        }
        Ok(Some(self.codec.read_state(&best_path)?))
    }

    fn write_snapshot(
        &self,
        state: &C::State,
        dest: &Path,
        name: &str,
    ) -> Result<(), CheckpointError> {
        let tmp = dest.with_file_name(format!("{name}.tmp"));
        self.codec.write_state(state, &tmp)?;
        fs::rename(&tmp, dest)?;
        Ok(())
    }
}

/// Read the manifest in `dir`. A missing manifest is treated as empty.
fn read_manifest(dir: &Path) -> Result<Vec<String>, CheckpointError> {
    let content = match fs::read_to_string(dir.join(MANIFEST_NAME)) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn write_manifest(dir: &Path, entries: &[String]) -> Result<(), CheckpointError> {
    let tmp = dir.join(format!("{MANIFEST_NAME}.tmp"));
    fs::write(&tmp, entries.join("\n"))?;
    fs::rename(tmp, dir.join(MANIFEST_NAME))?;
    Ok(())
}
