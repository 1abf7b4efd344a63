//! Service layer
//!
//! - [`MediaStore`] - uploaded image validation and storage

pub mod media;

pub use media::{ImageUpload, MediaStore, UploadError};
