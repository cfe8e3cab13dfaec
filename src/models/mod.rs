// Model exports
pub mod domain;
pub mod responses;

pub use domain::{OutputRow, ResultSet, OUTPUT_HEADER};
pub use responses::{DetectionResponse, FaceAttributes, FaceRecord, FaceRectangle};
