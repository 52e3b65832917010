use crate::core::fragment::plain_text;
use crate::domain::model::UploadedImage;
use crate::domain::ports::Page;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct PageState {
    card_number: String,
    result: String,
    card_type: String,
    image: Option<UploadedImage>,
    alerts: Vec<String>,
}

/// Headless page that keeps every field in memory and records alerts.
#[derive(Debug, Default, Clone)]
pub struct MemoryPage {
    state: Arc<Mutex<PageState>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_card_number(card_number: &str) -> Self {
        let page = Self::new();
        page.state().card_number = card_number.to_string();
        page
    }

    pub fn select_image(&self, image: Option<UploadedImage>) {
        self.state().image = image;
    }

    pub fn result(&self) -> String {
        self.state().result.clone()
    }

    pub fn card_type(&self) -> String {
        self.state().card_type.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state().alerts.clone()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Page for MemoryPage {
    fn card_number(&self) -> String {
        self.state().card_number.clone()
    }

    fn set_card_number(&self, value: &str) {
        self.state().card_number = value.to_string();
    }

    fn set_result(&self, markup: &str) {
        self.state().result = markup.to_string();
    }

    fn set_card_type(&self, markup: &str) {
        self.state().card_type = markup.to_string();
    }

    fn selected_image(&self) -> Option<UploadedImage> {
        self.state().image.clone()
    }

    fn alert(&self, message: &str) {
        self.state().alerts.push(message.to_string());
    }
}

/// Prints results to stdout and alerts to stderr, as plain text.
#[derive(Debug, Default, Clone)]
pub struct TerminalPage {
    inner: MemoryPage,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_card_number(card_number: &str) -> Self {
        Self {
            inner: MemoryPage::with_card_number(card_number),
        }
    }

    pub fn with_image(image: UploadedImage) -> Self {
        let inner = MemoryPage::new();
        inner.select_image(Some(image));
        Self { inner }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.inner.alerts()
    }
}

impl Page for TerminalPage {
    fn card_number(&self) -> String {
        self.inner.card_number()
    }

    fn set_card_number(&self, value: &str) {
        self.inner.set_card_number(value);
        println!("💳 Card number: {}", value);
    }

    fn set_result(&self, markup: &str) {
        self.inner.set_result(markup);
        println!("{}", plain_text(markup));
    }

    fn set_card_type(&self, markup: &str) {
        self.inner.set_card_type(markup);
        let text = plain_text(markup);
        if !text.is_empty() {
            println!("{}", text);
        }
    }

    fn selected_image(&self) -> Option<UploadedImage> {
        self.inner.selected_image()
    }

    fn alert(&self, message: &str) {
        self.inner.alert(message);
        eprintln!("⚠️  {}", message);
    }
}
