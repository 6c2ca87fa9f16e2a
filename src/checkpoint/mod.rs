mod codec;
mod store;

pub use codec::{JsonCodec, StateCodec, StateDict};
pub use store::{CheckpointStore, CheckpointStoreConfig, BEST_NAME, MANIFEST_NAME};
