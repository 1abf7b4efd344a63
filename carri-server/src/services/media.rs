//! Media Store
//!
//! Validates uploaded images and stores them under
//! `{media_dir}/{entity}/{sha256-prefix}_{sanitized-name}`. Records keep the
//! path relative to the media root, which is served under `/media/`.

use axum::body::Bytes;
use sha2::{Digest, Sha256};
use shared::error::{AppError, ErrorCode};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Allowed extensions (lower-case, with dot)
pub const ALLOWED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

/// Allowed declared MIME types
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Subdirectories created at startup, one per entity with images
pub const MEDIA_SUBDIRS: &[&str] = &["empresa", "productos", "trabajadores"];

/// Length of the content-hash prefix in stored filenames
const HASH_PREFIX_LEN: usize = 12;

/// A file field received from a multipart form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ImageUpload {
    /// Browsers send an empty, unnamed part when no file was chosen
    pub fn is_empty_selection(&self) -> bool {
        self.bytes.is_empty() && self.file_name.as_deref().is_none_or(str::is_empty)
    }
}

/// Upload rejection, rendered next to the image field
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("El archivo enviado está vacío.")]
    Empty,
    #[error("La imagen no puede ser mayor a {max_mb}MB.")]
    TooLarge { max_mb: usize },
    #[error("Tipo de archivo no permitido. Tipos permitidos: .jpg, .jpeg, .png, .webp")]
    InvalidExtension,
    #[error("Solo se permiten imágenes en formato JPG, PNG o WebP.")]
    UnsupportedMime,
    #[error("El archivo no es una imagen válida o está corrupto.")]
    Corrupt,
}

impl UploadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UploadError::Empty => ErrorCode::EmptyFile,
            UploadError::TooLarge { .. } => ErrorCode::FileTooLarge,
            UploadError::InvalidExtension => ErrorCode::InvalidFileExtension,
            UploadError::UnsupportedMime => ErrorCode::UnsupportedFileFormat,
            UploadError::Corrupt => ErrorCode::InvalidImageFile,
        }
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

/// Replace path separators and reserved characters so the name is safe to
/// store. Only the basename of the client-supplied path is kept.
pub fn sanitize_filename(file_name: Option<&str>) -> String {
    let Some(name) = file_name.filter(|n| !n.is_empty()) else {
        return "unnamed_file".to_string();
    };

    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let mut cleaned = base.to_string();
    for pattern in ["<", ">", ":", "\"", "|", "?", "*", "..", "/", "\\"] {
        cleaned = cleaned.replace(pattern, "_");
    }

    if cleaned.trim().is_empty() {
        return "sanitized_file".to_string();
    }
    cleaned
}

/// Lower-cased extension including the dot, if any
fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

fn content_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Image storage rooted at the media directory
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    max_bytes: usize,
}

impl MediaStore {
    pub fn new(root: PathBuf, max_bytes: usize) -> Self {
        Self { root, max_bytes }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Create the media root and the per-entity subdirectories
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        for sub in MEDIA_SUBDIRS {
            std::fs::create_dir_all(self.root.join(sub))?;
        }
        Ok(())
    }

    /// Check size, extension, declared type and decodability.
    pub fn validate(&self, upload: &ImageUpload) -> Result<(), UploadError> {
        if upload.bytes.is_empty() {
            return Err(UploadError::Empty);
        }

        if upload.bytes.len() > self.max_bytes {
            return Err(UploadError::TooLarge {
                max_mb: self.max_bytes / (1024 * 1024),
            });
        }

        let ext = upload.file_name.as_deref().and_then(extension_of);
        if !ext.is_some_and(|e| ALLOWED_EXTENSIONS.contains(&e.as_str())) {
            return Err(UploadError::InvalidExtension);
        }

        if let Some(mime) = upload.content_type.as_deref() {
            let mime = mime.to_ascii_lowercase();
            if !ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
                return Err(UploadError::UnsupportedMime);
            }
        }

        if let Err(e) = image::load_from_memory(&upload.bytes) {
            tracing::debug!(error = %e, "Uploaded image failed to decode");
            return Err(UploadError::Corrupt);
        }

        Ok(())
    }

    /// Write a validated upload and return its path relative to the root
    pub async fn save(&self, entity: &str, upload: &ImageUpload) -> Result<String, AppError> {
        let hash = content_hash(&upload.bytes);
        let file_name = format!(
            "{}_{}",
            &hash[..HASH_PREFIX_LEN],
            sanitize_filename(upload.file_name.as_deref())
        );
        let relative = format!("{entity}/{file_name}");

        let dir = self.root.join(entity);
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::with_message(
                ErrorCode::FileStorageFailed,
                format!("Failed to create media dir: {e}"),
            )
        })?;
        tokio::fs::write(dir.join(&file_name), &upload.bytes)
            .await
            .map_err(|e| {
                AppError::with_message(
                    ErrorCode::FileStorageFailed,
                    format!("Failed to write image: {e}"),
                )
            })?;

        tracing::info!(path = %relative, size = upload.bytes.len(), "Image stored");
        Ok(relative)
    }

    /// Delete a stored image. Failures are logged and otherwise ignored.
    pub async fn remove(&self, relative: &str) {
        if relative.is_empty() || relative.split(['/', '\\']).any(|part| part == "..") {
            return;
        }
        let path = self.root.join(relative);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::info!(path = %relative, "Image removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %relative, error = %e, "Failed to remove image"),
        }
    }

    pub fn path_of(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}
