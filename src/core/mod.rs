pub mod controller;
pub mod fragment;

pub use crate::domain::model::{
    CardNumberInput, UploadOutcome, UploadedImage, ValidateOutcome, ValidationFragment,
};
pub use crate::domain::ports::{CardApi, ConfigProvider, Page};
pub use crate::utils::error::Result;
