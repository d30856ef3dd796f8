//! Bearer credential storage and payload decoding.

pub mod claims;
pub mod store;

pub use claims::{Claims, decode_credential};
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
