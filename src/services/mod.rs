// Service exports
pub mod face_api;

pub use face_api::{FaceApiClient, FaceApiError};
