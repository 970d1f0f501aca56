//! Match-page fetching and embedded-payload extraction.
//!
//! The shots payload sits inside a `JSON.parse('...')` call in one of the
//! page's script tags, with the JSON itself `\xNN`/`\uNNNN`-escaped. The
//! tag position and the quoting are unversioned details of the remote
//! markup; every extraction step therefore degrades to "no data" instead
//! of failing the caller.

use std::future::Future;

use reqwest::Client;
use scraper::{Html, Selector};

use crate::core::{config::ScraperConfig, http::build_client};
use crate::understat::types::MatchShots;
use crate::Result;


/// The fetch seam: anything that can resolve a match id to shot data.
///
/// Returns `None` for ids with no match behind them and for every
/// transient failure (network, markup drift, malformed payload); a single
/// id must never abort a sweep or an update batch.
pub trait ShotSource: Send + Sync {
    fn fetch_match_shots(&self, match_id: u32) -> impl Future<Output = Option<MatchShots>> + Send;
}

/// HTTP client for understat match pages.
#[derive(Debug, Clone)]
pub struct UnderstatClient {
    client: Client,
    config: ScraperConfig,
}

impl UnderstatClient {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            config: config.clone(),
        })
    }
}

impl ShotSource for UnderstatClient {
    async fn fetch_match_shots(&self, match_id: u32) -> Option<MatchShots> {
        let url = self.config.match_url(match_id);
        let html = self
            .client
            .get(&url)
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?
            .text()
            .await
            .ok()?;
        parse_match_page(&html, self.config.script_index)
    }
}

/// Decode one match page into shot data.
///
/// `script_index` selects which `<script>` tag holds the payload.
pub fn parse_match_page(html: &str, script_index: usize) -> Option<MatchShots> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script").ok()?;
    let script = document.select(&selector).nth(script_index)?;
    let text: String = script.text().collect();

    let payload = extract_quoted_payload(&text)?;
    let json = unescape_js_string(payload)?;
    serde_json::from_str(&json).ok()
}

/// Slice the substring between the opening `('` and closing `')` delimiters.
pub fn extract_quoted_payload(script: &str) -> Option<&str> {
    let start = script.find("('")? + 2;
    let end = start + script[start..].find("')")?;
    Some(&script[start..end])
}

/// Decode a JavaScript single-quoted string body into plain text.
///
/// Handles `\xNN`, `\uNNNN` (including surrogate pairs), and the common
/// single-character escapes. Returns `None` on truncated or invalid hex
/// escapes rather than guessing.
pub fn unescape_js_string(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'x' => {
                let code = take_hex(&mut chars, 2)?;
                out.push(char::from_u32(code)?);
            }
            'u' => {
                let code = take_hex(&mut chars, 4)?;
                // High surrogate: must pair with a following \uDC00..\uDFFF.
                if (0xD800..0xDC00).contains(&code) {
                    if chars.next()? != '\\' || chars.next()? != 'u' {
                        return None;
                    }
                    let low = take_hex(&mut chars, 4)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return None;
                    }
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(combined)?);
                } else {
                    out.push(char::from_u32(code)?);
                }
            }
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '0' => out.push('\0'),
            other => out.push(other),
        }
    }

    Some(out)
}

fn take_hex(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}
