//! Link source backed by a live MediaWiki site.

use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::error::Result;
use crate::link_source::LinkSource;

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

static HREF_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"<a\s[^>]*?href="([^"]*)""#).ok());

/// Markers of the regions whose links count: article body, then references.
const CONTENT_MARKERS: [&str; 2] = [r#"id="mw-content-text""#, r#"class="reflist"#];

/// Whatever follows the first of these is page chrome, not article content.
const FOOTER_MARKERS: [&str; 3] = [r#"class="printfooter"#, r#"id="catlinks""#, r#"id="footer""#];

/// True for article links: `/wiki/Title`, no namespace prefix like `File:`.
pub fn is_article_link(href: &str) -> bool {
    let Some(title) = href.strip_prefix("/wiki/") else {
        return false;
    };
    let title = title.split('#').next().unwrap_or_default();
    !title.contains(':')
}

/// Drops the query and fragment so equal pages compare equal.
pub fn canonicalize(url: &str) -> String {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    url[..end].to_string()
}

/// Resolves every article link in the content region of `html` against
/// `base_url`, de-duplicated in first-seen order.
pub fn extract_links(base_url: &str, html: &str) -> Vec<String> {
    let Some(href_re) = HREF_RE.as_ref() else {
        return Vec::new();
    };
    let Some(start) = CONTENT_MARKERS.iter().find_map(|marker| html.find(marker)) else {
        return Vec::new(); // nothing that looks like an article body
    };
    let content = &html[start..];
    let end = FOOTER_MARKERS
        .iter()
        .filter_map(|marker| content.find(marker))
        .min()
        .unwrap_or(content.len());
    let base = base_url.trim_end_matches('/');

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for caps in href_re.captures_iter(&content[..end]) {
        let href = &caps[1];
        if !is_article_link(href) {
            continue;
        }
        let link = canonicalize(&format!("{}{}", base, href));
        if seen.insert(link.clone()) {
            links.push(link);
        }
    }
    links
}

pub struct WikiClient {
    client: Client,
    base_url: String,
}

impl WikiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(concat!("wikipath/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(WikiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Follows `Special:Random` and returns where it lands.
    pub fn random_page(&self) -> Option<String> {
        let url = format!("{}/wiki/Special:Random", self.base_url);
        match self.client.get(&url).send().and_then(|r| r.error_for_status()) {
            Ok(resp) => Some(canonicalize(resp.url().as_str())),
            Err(err) => {
                warn!(error = %err, "random page request failed");
                None
            }
        }
    }

    fn get_page(&self, url: &str) -> reqwest::Result<String> {
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

impl LinkSource for WikiClient {
    fn fetch_neighbors(&mut self, node: &str) -> Vec<String> {
        match self.get_page(node) {
            Ok(body) => {
                let links = extract_links(&self.base_url, &body);
                debug!(page = node, links = links.len(), "fetched page");
                links
            }
            Err(err) => {
                warn!(page = node, error = %err, "fetch failed, treating page as a dead end");
                Vec::new()
            }
        }
    }
}
