use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CheckpointError;

/// Arbitrary key-value state mapping, the default snapshot payload.
pub type StateDict = std::collections::BTreeMap<String, serde_json::Value>;

/// Capability interface for opaque snapshot serialization.
///
/// The store never inspects the bytes a codec produces; swapping the codec
/// swaps the on-disk snapshot format without touching the rotation logic.
pub trait StateCodec {
    type State;

    fn write_state(&self, state: &Self::State, path: &Path) -> Result<(), CheckpointError>;
    fn read_state(&self, path: &Path) -> Result<Self::State, CheckpointError>;
}

/// JSON-backed codec for any serde-serializable state.
#[derive(Debug, Clone)]
pub struct JsonCodec<T> {
    _marker: PhantomData<T>,
}

impl<T> JsonCodec<T> {
    pub fn new() -> Self {
        JsonCodec {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize + DeserializeOwned> StateCodec for JsonCodec<T> {
    type State = T;

    fn write_state(&self, state: &T, path: &Path) -> Result<(), CheckpointError> {
        let json = serde_json::to_string(state)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn read_state(&self, path: &Path) -> Result<T, CheckpointError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> StateDict {
        let mut state = StateDict::new();
        state.insert("epoch".to_string(), serde_json::json!(7));
        state.insert("weights".to_string(), serde_json::json!([0.1, 0.2, 0.3]));
        state
    }

    #[test]
    fn test_json_codec_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.ckpt");
        let codec = JsonCodec::<StateDict>::new();

        codec.write_state(&sample_state(), &path).unwrap();
        let loaded = codec.read_state(&path).unwrap();
        assert_eq!(loaded, sample_state());
    }

    #[test]
    fn test_json_codec_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let codec = JsonCodec::<StateDict>::new();

        let err = codec.read_state(&dir.path().join("absent.ckpt")).unwrap_err();
        assert!(matches!(err, CheckpointError::Io(_)));
    }
}
