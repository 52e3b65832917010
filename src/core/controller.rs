use crate::core::fragment::parse_validation_fragment;
use crate::domain::model::{CardNumberInput, UploadOutcome, ValidateOutcome};
use crate::domain::ports::{CardApi, Page};
use crate::utils::error::{CardCheckError, Result};

pub const NON_NUMERIC_MESSAGE: &str = "Please enter only numeric characters.";
pub const EXTRACTION_FAILED_MESSAGE: &str = "Failed to extract card information.";
pub const DECRYPTION_FAILED_MESSAGE: &str = "Decryption failed.";

/// Drives the page through the validate, upload and decrypt flows.
pub struct ClientController<P: Page, A: CardApi> {
    page: P,
    api: A,
}

impl<P: Page, A: CardApi> ClientController<P, A> {
    pub fn new(page: P, api: A) -> Self {
        Self { page, api }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Checks the card-number field locally, then renders the server's verdict.
    pub async fn validate_card_number(&self) -> Result<ValidateOutcome> {
        let raw = self.page.card_number();

        let card_number = match CardNumberInput::parse(&raw) {
            Ok(card_number) => card_number,
            Err(CardCheckError::NonNumericInput { .. }) => {
                tracing::debug!("Card number input rejected locally");
                self.page.set_result(NON_NUMERIC_MESSAGE);
                self.page.set_card_type("");
                return Ok(ValidateOutcome::NonNumeric);
            }
            Err(e) => return Err(e),
        };

        tracing::debug!("Validating card number {}", card_number.masked());
        let reply = self.api.validate(&card_number).await?;

        if !(200..300).contains(&reply.status) {
            tracing::warn!(
                "Validate endpoint answered with status {}, rendering body anyway",
                reply.status
            );
        }

        let fragment = parse_validation_fragment(&reply.body)?;
        self.page.set_result(&fragment.result);
        self.page.set_card_type(&fragment.card_type);

        Ok(ValidateOutcome::Rendered(fragment))
    }

    /// Uploads the selected image, decrypts the extracted number and validates it.
    pub async fn upload_image(&self) -> Result<UploadOutcome> {
        let image = self.page.selected_image();
        match &image {
            Some(image) => tracing::debug!(
                "Uploading {} ({}, {} bytes)",
                image.file_name,
                image.content_type,
                image.bytes.len()
            ),
            None => tracing::debug!("No image selected, uploading an empty form"),
        }

        let response = match self.api.upload(image).await {
            Ok(response) => response,
            Err(CardCheckError::UploadRejected { status, message }) => {
                tracing::warn!("Upload rejected with status {}: {}", status, message);
                self.page.alert(&message);
                return Ok(UploadOutcome::Rejected { message });
            }
            Err(e) => return Err(e),
        };

        let Some(encrypted) = response
            .encrypted_card_number
            .filter(|value| !value.is_empty())
        else {
            tracing::info!("Upload succeeded but no card number was extracted");
            self.page.alert(EXTRACTION_FAILED_MESSAGE);
            return Ok(UploadOutcome::NothingExtracted);
        };

        let decrypted = match self.decrypt_card_number(&encrypted).await {
            Ok(decrypted) => decrypted,
            Err(e) => {
                tracing::error!("Abandoning upload after decryption error: {}", e);
                self.page.alert(DECRYPTION_FAILED_MESSAGE);
                return Ok(UploadOutcome::DecryptionFailed);
            }
        };

        let cleaned = decrypted.replace(' ', "");
        self.page.set_card_number(&cleaned);

        let outcome = self.validate_card_number().await?;
        Ok(UploadOutcome::Validated(outcome))
    }

    pub async fn decrypt_card_number(&self, encrypted_card_number: &str) -> Result<String> {
        self.api.decrypt(encrypted_card_number).await
    }
}
