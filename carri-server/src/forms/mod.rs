//! Form handling
//!
//! Each entity module turns a [`RawForm`] into a validated `*Input` in five
//! steps: parse, normalize, declarative rules, dynamic checks and uniqueness
//! lookups. The image part is validated last. Every failure lands in a single
//! [`FormErrors`]; nothing is written unless it stays empty.

pub mod company;
pub mod employee;
pub mod errors;
pub mod product;
pub mod raw;
pub mod supplier;

pub use errors::{CORRECT_ERRORS, FormErrors, REQUIRED};
pub use raw::{IMAGE_FIELD, RawForm};

use crate::services::{ImageUpload, MediaStore};

/// Outcome of cleaning a submission
pub type Cleaned<T> = Result<T, FormErrors>;

/// Validated input plus the accepted image, if one was sent
#[derive(Debug, Clone)]
pub struct WithImage<T> {
    pub input: T,
    pub image: Option<ImageUpload>,
}

/// Validate the image part; an empty file selection counts as no image.
pub(crate) fn clean_image(
    media: &MediaStore,
    raw: &RawForm,
    errors: &mut FormErrors,
) -> Option<ImageUpload> {
    let upload = raw.image().filter(|u| !u.is_empty_selection())?;
    match media.validate(upload) {
        Ok(()) => Some(upload.clone()),
        Err(e) => {
            errors.add(IMAGE_FIELD, e.to_string());
            None
        }
    }
}

pub(crate) fn finish<T>(value: T, errors: FormErrors) -> Cleaned<T> {
    if errors.is_empty() {
        Ok(value)
    } else {
        Err(errors)
    }
}
