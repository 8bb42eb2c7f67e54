//! Logo fast path
//!
//! A logo swap needs one URL. When the edit text or an upload supplies it,
//! the router writes `business.logoUrl` directly instead of asking the
//! mutator.

use crate::types::UploadedAsset;
use once_cell::sync::Lazy;
use regex::Regex;
use sitegen_ir::WebsiteConfig;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s"'<>()\[\]{}]+"#).expect("valid pattern"));

/// First `http(s)` URL in `text`, without trailing punctuation
#[must_use]
pub fn url_in_text(text: &str) -> Option<String> {
    URL_RE
        .find(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?']))
        .filter(|url| url.len() > "https://".len())
        .map(str::to_string)
}

/// Logo URL from the edit text, else from the first image upload
#[must_use]
pub fn extract_logo_url(edit_text: &str, assets: &[UploadedAsset]) -> Option<String> {
    url_in_text(edit_text).or_else(|| {
        assets
            .iter()
            .find(|a| a.is_image() && !a.url.trim().is_empty())
            .map(|a| a.url.clone())
    })
}

/// Copy of `config` with the logo replaced
#[must_use]
pub fn apply_logo(config: &WebsiteConfig, url: &str) -> WebsiteConfig {
    let mut next = config.clone();
    next.business.logo_url = Some(url.to_string());
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_trimmed_of_sentence_punctuation() {
        assert_eq!(
            url_in_text("Use https://cdn.test/logo.png.").as_deref(),
            Some("https://cdn.test/logo.png")
        );
        assert_eq!(
            url_in_text("logo (http://x.test/a.svg)").as_deref(),
            Some("http://x.test/a.svg")
        );
        assert_eq!(url_in_text("change the logo"), None);
    }

    #[test]
    fn text_url_beats_upload() {
        let assets = vec![UploadedAsset::new("logo.png", "https://uploads.test/1")];
        assert_eq!(
            extract_logo_url("use https://cdn.test/l.svg", &assets).as_deref(),
            Some("https://cdn.test/l.svg")
        );
        assert_eq!(
            extract_logo_url("use my upload", &assets).as_deref(),
            Some("https://uploads.test/1")
        );
    }

    #[test]
    fn non_image_uploads_are_ignored() {
        let assets = vec![UploadedAsset::new("menu.pdf", "https://uploads.test/2")];
        assert_eq!(extract_logo_url("new logo attached", &assets), None);
    }
}
