//! Placeholder minting and description harvesting
//!
//! Renderers ask for an image and get either a numbered token (`IMG_1`,
//! `IMG_2`, ...) to use as the `src`, or `None` once the per-compile cap is
//! reached. The orchestrator then harvests `alt` text of each rendered
//! `<img>` as that token's description.
//!
//! Only tokens this compile minted count. Text that merely looks like a
//! token (user copy, custom code) is never harvested or substituted.

use crate::escape;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Prefix of every minted token
pub const TOKEN_PREFIX: &str = "IMG_";

static IMG_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<img\b[^>]*>").expect("valid pattern"));

/// Matches a token used as a `src` attribute; group 1 is the token
pub(crate) static SRC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bsrc="(IMG_(\d+))""#).expect("valid pattern"));

static ALT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\balt="([^"]*)""#).expect("valid pattern"));

/// Compile-scoped placeholder state
///
/// Created fresh for every compile, so token numbering restarts at 1 and
/// concurrent compiles never share a counter.
#[derive(Debug, Clone)]
pub struct Placeholders {
    minted: usize,
    cap: usize,
    fallbacks: usize,
    descriptions: BTreeMap<String, String>,
}

impl Placeholders {
    /// Create with a token cap
    #[inline]
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self {
            minted: 0,
            cap,
            fallbacks: 0,
            descriptions: BTreeMap::new(),
        }
    }

    /// Mint the next token, or `None` when the cap is reached
    ///
    /// A `None` is counted as a fallback render.
    pub fn mint(&mut self) -> Option<String> {
        if self.minted >= self.cap {
            self.fallbacks += 1;
            return None;
        }
        self.minted += 1;
        Some(format!("{TOKEN_PREFIX}{}", self.minted))
    }

    /// Record descriptions from every `<img src="IMG_n" alt="...">` in `markup`
    ///
    /// The first non-empty description recorded for a token wins. Tokens not
    /// minted yet are skipped, so markup cannot claim a later image's slot.
    pub fn harvest(&mut self, markup: &str) {
        for tag in IMG_TAG_RE.find_iter(markup) {
            let tag = tag.as_str();
            let Some(src) = SRC_RE.captures(tag) else {
                continue;
            };
            if !src[2].parse().is_ok_and(|n| self.is_minted(n)) {
                continue;
            }
            let token = &src[1];
            let Some(alt) = ALT_RE.captures(tag).and_then(|c| c.get(1)) else {
                continue;
            };
            let description = escape::unescape_attr(alt.as_str());
            if description.trim().is_empty() {
                continue;
            }
            self.descriptions
                .entry(token.to_string())
                .or_insert(description);
        }
    }

    /// Tokens minted so far
    #[inline]
    #[must_use]
    pub const fn minted(&self) -> usize {
        self.minted
    }

    /// Every token minted so far, in minting order
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        (1..=self.minted).map(|n| format!("{TOKEN_PREFIX}{n}")).collect()
    }

    #[inline]
    fn is_minted(&self, n: usize) -> bool {
        (1..=self.minted).contains(&n)
    }

    /// Image requests that fell back because of the cap
    #[inline]
    #[must_use]
    pub const fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// Harvested token → description map
    #[inline]
    #[must_use]
    pub fn descriptions(&self) -> &BTreeMap<String, String> {
        &self.descriptions
    }

    /// Consume into the harvested map
    #[inline]
    #[must_use]
    pub fn into_descriptions(self) -> BTreeMap<String, String> {
        self.descriptions
    }
}

/// Every distinct token used as a `src` in `text`, in order of first appearance
#[must_use]
pub fn find_tokens(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for caps in SRC_RE.captures_iter(text) {
        let token = &caps[1];
        if !seen.iter().any(|t: &String| t == token) {
            seen.push(token.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mints_until_cap_then_falls_back() {
        let mut p = Placeholders::new(6);
        let tokens: Vec<_> = (0..8).map(|_| p.mint()).collect();

        assert_eq!(tokens.iter().flatten().count(), 6);
        assert_eq!(tokens[0].as_deref(), Some("IMG_1"));
        assert_eq!(tokens[5].as_deref(), Some("IMG_6"));
        assert!(tokens[6].is_none() && tokens[7].is_none());
        assert_eq!(p.minted(), 6);
        assert_eq!(p.fallbacks(), 2);
    }

    #[test]
    fn harvest_reads_alt_and_unescapes() {
        let mut p = Placeholders::new(6);
        p.mint();
        p.harvest(r#"<img src="IMG_1" alt="Chef &amp; crew at &quot;the pass&quot;" className="x" />"#);
        assert_eq!(
            p.descriptions().get("IMG_1").map(String::as_str),
            Some(r#"Chef & crew at "the pass""#)
        );
    }

    #[test]
    fn harvest_first_description_wins() {
        let mut p = Placeholders::new(6);
        p.mint();
        p.mint();
        p.harvest(r#"<img src="IMG_2" alt="first" />"#);
        p.harvest(r#"<img alt="second" src="IMG_2" />"#);
        assert_eq!(p.descriptions()["IMG_2"], "first");
    }

    #[test]
    fn harvest_ignores_resolved_and_empty() {
        let mut p = Placeholders::new(6);
        for _ in 0..3 {
            p.mint();
        }
        p.harvest(r#"<img src="https://x/y.png" alt="photo" /><img src="IMG_3" alt="  " />"#);
        assert!(p.descriptions().is_empty());
    }

    #[test]
    fn harvest_skips_tokens_not_yet_minted() {
        let mut p = Placeholders::new(6);
        p.mint();
        p.harvest(r#"<img src="IMG_2" alt="claimed early" /><img src="IMG_1" alt="real" />"#);
        assert_eq!(p.descriptions().len(), 1);
        assert_eq!(p.descriptions()["IMG_1"], "real");

        p.mint();
        p.harvest(r#"<img src="IMG_2" alt="second" />"#);
        assert_eq!(p.descriptions()["IMG_2"], "second");
        assert_eq!(p.tokens(), vec!["IMG_1", "IMG_2"]);
    }

    #[test]
    fn find_tokens_reads_src_attributes_in_order() {
        let text = r#"src="IMG_2" ... src="IMG_10" ... src="IMG_2" ... IMG_3 ... xsrc="IMG_4""#;
        assert_eq!(find_tokens(text), vec!["IMG_2", "IMG_10"]);
    }
}
