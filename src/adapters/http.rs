use crate::domain::model::{
    CardNumberInput, DecryptRequest, DecryptResponse, UploadErrorResponse, UploadResponse,
    UploadedImage, ValidateReply,
};
use crate::domain::ports::{CardApi, ConfigProvider};
use crate::utils::error::{CardCheckError, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use url::Url;

const CARD_NUMBER_PARAM: &str = "cardNumber";
const IMAGE_FIELD: &str = "image";

/// `CardApi` over HTTP. Endpoint paths are resolved against the server origin.
#[derive(Debug, Clone)]
pub struct HttpCardApi {
    client: Client,
    validate_url: Url,
    upload_url: Url,
    decrypt_url: Url,
}

impl HttpCardApi {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client<C: ConfigProvider>(client: Client, config: &C) -> Result<Self> {
        let base = Url::parse(config.server_url())?;
        Ok(Self {
            client,
            validate_url: base.join(config.validate_path())?,
            upload_url: base.join(config.upload_path())?,
            decrypt_url: base.join(config.decrypt_path())?,
        })
    }
}

#[async_trait]
impl CardApi for HttpCardApi {
    async fn validate(&self, card_number: &CardNumberInput) -> Result<ValidateReply> {
        tracing::debug!("GET {}", self.validate_url);
        let response = self
            .client
            .get(self.validate_url.clone())
            .query(&[(CARD_NUMBER_PARAM, card_number.as_str())])
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!("Validate response status: {}", status);
        let body = response.text().await?;

        Ok(ValidateReply { status, body })
    }

    async fn upload(&self, image: Option<UploadedImage>) -> Result<UploadResponse> {
        let mut form = Form::new();
        if let Some(image) = image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)?;
            form = form.part(IMAGE_FIELD, part);
        }

        tracing::debug!("POST {}", self.upload_url);
        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Upload response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            return Err(CardCheckError::UploadRejected {
                status: status.as_u16(),
                message: rejection_message(status.as_u16(), &body),
            });
        }

        Ok(response.json::<UploadResponse>().await?)
    }

    async fn decrypt(&self, encrypted_card_number: &str) -> Result<String> {
        let request = DecryptRequest {
            encrypted_card_number: encrypted_card_number.to_string(),
        };

        tracing::debug!("POST {}", self.decrypt_url);
        let response = self
            .client
            .post(self.decrypt_url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Decryption failed ({}): {}", status, body);
            return Err(CardCheckError::DecryptionFailed {
                status: status.as_u16(),
                body,
            });
        }

        let decrypted: DecryptResponse = response.json().await?;
        Ok(decrypted.decrypted_card_number)
    }
}

/// The server's `message` field, else the raw body, else a generic line.
fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(error) = serde_json::from_str::<UploadErrorResponse>(body) {
        return error.message;
    }

    let text = body.trim();
    if text.is_empty() {
        format!("Upload failed with status {}", status)
    } else {
        text.to_string()
    }
}
