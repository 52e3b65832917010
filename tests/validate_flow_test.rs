use anyhow::Result;
use card_check::core::{Page, ValidateOutcome};
use card_check::{ClientController, ClientSettings, HttpCardApi, MemoryPage};
use httpmock::prelude::*;

const VALID_BODY: &str = r#"<div class="result"><span>The credit card number is valid.</span></div><div class="card-type">Card Type: Visa</div>"#;

fn controller_for(
    server: &MockServer,
    card_number: &str,
) -> Result<ClientController<MemoryPage, HttpCardApi>> {
    let settings = ClientSettings::with_server_url(server.base_url());
    let api = HttpCardApi::new(&settings)?;
    Ok(ClientController::new(
        MemoryPage::with_card_number(card_number),
        api,
    ))
}

#[tokio::test]
async fn test_digits_are_sent_once_and_rendered() -> Result<()> {
    let server = MockServer::start_async().await;
    let validate_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/validate")
                .query_param("cardNumber", "4111111111111111");
            then.status(200)
                .header("Content-Type", "text/html; charset=UTF-8")
                .body(VALID_BODY);
        })
        .await;

    let controller = controller_for(&server, "4111111111111111")?;
    let outcome = controller.validate_card_number().await?;

    validate_mock.assert_hits_async(1).await;
    assert!(matches!(outcome, ValidateOutcome::Rendered(_)));
    assert_eq!(
        controller.page().result(),
        "<span>The credit card number is valid.</span>"
    );
    assert_eq!(controller.page().card_type(), "Card Type: Visa");
    Ok(())
}

#[tokio::test]
async fn test_empty_input_is_still_validated() -> Result<()> {
    let server = MockServer::start_async().await;
    let validate_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/validate")
                .query_param("cardNumber", "");
            then.status(200).body(
                r#"<div class="result">The credit card number is invalid.</div><div class="card-type">Card Type: Unknown</div>"#,
            );
        })
        .await;

    let controller = controller_for(&server, "")?;
    controller.validate_card_number().await?;

    validate_mock.assert_hits_async(1).await;
    assert_eq!(
        controller.page().result(),
        "The credit card number is invalid."
    );
    Ok(())
}

#[tokio::test]
async fn test_non_numeric_input_never_reaches_server() -> Result<()> {
    let server = MockServer::start_async().await;
    let validate_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/validate");
            then.status(200).body(VALID_BODY);
        })
        .await;

    let controller = controller_for(&server, "12a4")?;
    controller.page().set_card_type("Card Type: Visa");

    let outcome = controller.validate_card_number().await?;

    validate_mock.assert_hits_async(0).await;
    assert_eq!(outcome, ValidateOutcome::NonNumeric);
    assert_eq!(
        controller.page().result(),
        "Please enter only numeric characters."
    );
    assert_eq!(controller.page().card_type(), "");
    Ok(())
}

#[tokio::test]
async fn test_missing_result_element_shows_fallback() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/validate");
            then.status(200).body("<p>maintenance</p>");
        })
        .await;

    let controller = controller_for(&server, "4111")?;
    controller.validate_card_number().await?;

    assert_eq!(controller.page().result(), "No result found.");
    assert_eq!(controller.page().card_type(), "");
    Ok(())
}

#[tokio::test]
async fn test_error_status_body_is_rendered_anyway() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/validate");
            then.status(503)
                .body(r#"<div class="result">Service unavailable</div>"#);
        })
        .await;

    let controller = controller_for(&server, "4111")?;
    controller.validate_card_number().await?;

    assert_eq!(controller.page().result(), "Service unavailable");
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_an_error() -> Result<()> {
    // Nothing listens on port 9 on test machines.
    let settings = ClientSettings::with_server_url("http://127.0.0.1:9");
    let controller = ClientController::new(
        MemoryPage::with_card_number("4111"),
        HttpCardApi::new(&settings)?,
    );

    let result = controller.validate_card_number().await;

    assert!(result.is_err());
    assert_eq!(controller.page().result(), "");
    Ok(())
}

#[tokio::test]
async fn test_concurrent_validations_share_the_page() -> Result<()> {
    let server = MockServer::start_async().await;
    let validate_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/validate")
                .query_param("cardNumber", "4111");
            then.status(200).body(VALID_BODY);
        })
        .await;

    let controller = std::sync::Arc::new(controller_for(&server, "4111")?);
    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.validate_card_number().await }
    });
    let second = controller.validate_card_number();

    let (first, second) = tokio::join!(first, second);
    first??;
    second?;

    validate_mock.assert_hits_async(2).await;
    assert_eq!(controller.page().card_type(), "Card Type: Visa");
    Ok(())
}
