//! Score display
//!
//! Formats the localized score label and writes it into the `#score` element.

use crate::settings::Locale;

/// DOM id of the score text element
pub const SCORE_ELEMENT_ID: &str = "score";

/// Localized score label
pub fn score_text(locale: Locale, score: u32) -> String {
    match locale {
        Locale::Chinese => format!("积分：{}", score),
        Locale::English => format!("Points: {}", score),
    }
}

/// Score text sink backed by a DOM element
#[cfg(target_arch = "wasm32")]
pub struct Hud {
    element: Option<web_sys::Element>,
    locale: Locale,
}

#[cfg(target_arch = "wasm32")]
impl Hud {
    pub fn new(document: &web_sys::Document, locale: Locale) -> Self {
        let element = document.get_element_by_id(SCORE_ELEMENT_ID);
        if element.is_none() {
            log::warn!("No #{} element, score will not be displayed", SCORE_ELEMENT_ID);
        }
        Self { element, locale }
    }

    pub fn set_score(&self, score: u32) {
        if let Some(el) = &self.element {
            el.set_text_content(Some(&score_text(self.locale, score)));
        }
    }
}
