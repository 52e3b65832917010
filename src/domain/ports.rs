use crate::domain::model::{CardNumberInput, UploadResponse, UploadedImage, ValidateReply};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The host page the controller reads from and renders into.
///
/// Methods take `&self` so several operations can share one page; a write simply
/// replaces whatever was there.
pub trait Page: Send + Sync {
    fn card_number(&self) -> String;
    fn set_card_number(&self, value: &str);
    fn set_result(&self, markup: &str);
    fn set_card_type(&self, markup: &str);
    fn selected_image(&self) -> Option<UploadedImage>;
    /// Blocking notice to the user.
    fn alert(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn server_url(&self) -> &str;
    fn validate_path(&self) -> &str;
    fn upload_path(&self) -> &str;
    fn decrypt_path(&self) -> &str;
}

/// The three remote endpoints.
///
/// `upload` fails with `UploadRejected` on a non-OK status and `decrypt` with
/// `DecryptionFailed`; `validate` never looks at the status.
#[async_trait]
pub trait CardApi: Send + Sync {
    async fn validate(&self, card_number: &CardNumberInput) -> Result<ValidateReply>;
    async fn upload(&self, image: Option<UploadedImage>) -> Result<UploadResponse>;
    async fn decrypt(&self, encrypted_card_number: &str) -> Result<String>;
}
