//! HTTP clients for the third-party hosts the upload proxy forwards to.
//!
//! - [`image::ImageHostClient`] -- image host (multipart POST, key in query).
//! - [`audio::AudioHostClient`] -- audio blob host (multipart POST, bearer key).
//!
//! Both wrap [`reqwest`] and surface failures as [`error::UploadError`] so
//! the API layer can propagate upstream status codes.

pub mod audio;
pub mod error;
pub mod image;

pub use audio::AudioHostClient;
pub use error::UploadError;
pub use image::ImageHostClient;
