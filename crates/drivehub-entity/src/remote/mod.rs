//! Remote file listing entities.

pub mod id;
pub mod record;

pub use id::RemoteFileId;
pub use record::RemoteFileRecord;
