use crate::domain::model::ValidationFragment;
use crate::utils::error::{CardCheckError, Result};
use scraper::{Html, Selector};

pub const RESULT_SELECTOR: &str = ".result";
pub const CARD_TYPE_SELECTOR: &str = ".card-type";
pub const NO_RESULT: &str = "No result found.";

/// Pulls the `.result` and `.card-type` markup out of a `/validate` body.
///
/// A missing or empty `.result` becomes "No result found."; a missing `.card-type`
/// becomes the empty string.
pub fn parse_validation_fragment(body: &str) -> Result<ValidationFragment> {
    let document = Html::parse_fragment(body);

    let result = inner_html(&document, RESULT_SELECTOR)?
        .filter(|markup| !markup.is_empty())
        .unwrap_or_else(|| NO_RESULT.to_string());
    let card_type = inner_html(&document, CARD_TYPE_SELECTOR)?.unwrap_or_default();

    Ok(ValidationFragment { result, card_type })
}

fn inner_html(document: &Html, selector: &str) -> Result<Option<String>> {
    let parsed = Selector::parse(selector).map_err(|e| CardCheckError::FragmentError {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;

    Ok(document
        .select(&parsed)
        .next()
        .map(|element| element.inner_html()))
}

/// Text content of a markup snippet, for hosts that cannot render HTML.
pub fn plain_text(markup: &str) -> String {
    let document = Html::parse_fragment(markup);
    document.root_element().text().collect::<String>()
}
