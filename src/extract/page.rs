use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;
use url::Url;

static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h1, h2, h3, h4, h5, h6"));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));
static CURRENCY_OPTION: LazyLock<Selector> =
    LazyLock::new(|| selector("#js-currency-sort-footer .select-ul li"));
static CURRENCY_SYMBOL: LazyLock<Selector> = LazyLock::new(|| selector("p"));
static PRICE: LazyLock<Selector> = LazyLock::new(|| selector(".js-price-value"));
static SCRIPT: LazyLock<Selector> = LazyLock::new(|| selector("script"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("literal selector is valid")
}

static SITE_DATA: LazyLock<Regex> = LazyLock::new(|| regex(r"var ScriptData = \{(?s)(.*?)\};"));
static PAGE_DATA: LazyLock<Regex> =
    LazyLock::new(|| regex(r"ScriptData\.pageData = \{(?s)(.*?)\};"));
static CAMPAIGN_ID: LazyLock<Regex> = LazyLock::new(|| regex(r#"CampaignId: "(.*?)""#));

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal pattern is valid")
}

fn quoted_field(body: &str, key: &str) -> Option<String> {
    let pattern = format!(r#""{}":"(.*?)""#, regex::escape(key));
    Regex::new(&pattern)
        .expect("escaped pattern is valid")
        .captures(body)
        .map(|captures| captures[1].to_string())
}

/// An `<img>` element as found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    /// The `src` attribute, if any.
    pub src: Option<String>,
    /// The `alt` attribute, if any. `Some("")` means present but empty.
    pub alt: Option<String>,
}

impl ImageElement {
    /// Whether the image carries a non-empty `alt` attribute.
    #[must_use]
    pub fn has_alt_text(&self) -> bool {
        self.alt.as_ref().is_some_and(|alt| !alt.trim().is_empty())
    }
}

/// One entry of the currency dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyOption {
    /// The `data-currency-country` code, if any.
    pub code: Option<String>,
    /// The currency symbol shown next to the code.
    pub symbol: String,
}

/// Fields extracted from the inline `ScriptData` blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptData {
    /// `ScriptData.config.SiteUrl`.
    pub site_url: Option<String>,
    /// `ScriptData.config.SiteName`.
    pub site_name: Option<String>,
    /// `ScriptData.userInfo.Browser`.
    pub browser: Option<String>,
    /// `ScriptData.userInfo.CountryCode`.
    pub country_code: Option<String>,
    /// `ScriptData.userInfo.IP`.
    pub ip: Option<String>,
    /// `ScriptData.pageData.CampaignId`.
    pub campaign_id: Option<String>,
}

impl ScriptData {
    /// Whether no field at all could be extracted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.site_url.is_none()
            && self.site_name.is_none()
            && self.browser.is_none()
            && self.country_code.is_none()
            && self.ip.is_none()
            && self.campaign_id.is_none()
    }
}

/// A fetched page, parsed and ready for element extraction.
///
/// All extraction is offline: the document is parsed once and queried with
/// CSS selectors, in document order.
pub struct Page {
    url: Url,
    document: Html,
}

impl Page {
    /// Parses a page from its raw HTML body.
    #[must_use]
    pub fn parse(url: Url, html: &str) -> Self {
        Self {
            url,
            document: Html::parse_document(html),
        }
    }

    /// The URL the page was fetched from.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Tag names of all heading elements (`h1`–`h6`), in document order.
    #[must_use]
    pub fn heading_tags(&self) -> Vec<String> {
        self.document
            .select(&HEADING)
            .map(|element| element.value().name().to_string())
            .collect()
    }

    /// Number of `<h1>` elements on the page.
    #[must_use]
    pub fn h1_count(&self) -> usize {
        self.document
            .select(&HEADING)
            .filter(|element| element.value().name().eq_ignore_ascii_case("h1"))
            .count()
    }

    /// Every `<img>` element with its `src` and `alt` attributes.
    #[must_use]
    pub fn images(&self) -> Vec<ImageElement> {
        self.document
            .select(&IMAGE)
            .map(|element| ImageElement {
                src: element.value().attr("src").map(ToString::to_string),
                alt: element.value().attr("alt").map(ToString::to_string),
            })
            .collect()
    }

    /// Absolute http(s) link targets, resolved against the page URL and
    /// deduplicated preserving first-seen order.
    #[must_use]
    pub fn links(&self) -> Vec<Url> {
        let mut seen = HashSet::new();
        self.document
            .select(&ANCHOR)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| self.url.join(href).ok())
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .filter(|url| seen.insert(url.clone()))
            .collect()
    }

    /// Entries of the currency dropdown in the page footer.
    #[must_use]
    pub fn currency_options(&self) -> Vec<CurrencyOption> {
        self.document
            .select(&CURRENCY_OPTION)
            .map(|element| {
                let symbol = element
                    .select(&CURRENCY_SYMBOL)
                    .next()
                    .map(|p| p.text().collect::<String>().trim().to_string())
                    .unwrap_or_default();
                CurrencyOption {
                    code: element
                        .value()
                        .attr("data-currency-country")
                        .map(ToString::to_string),
                    symbol,
                }
            })
            .collect()
    }

    /// Text of the displayed property price, if present.
    #[must_use]
    pub fn displayed_price(&self) -> Option<String> {
        self.document
            .select(&PRICE)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
    }

    /// Extracts the inline `ScriptData` blocks from the page's scripts.
    ///
    /// The site emits `var ScriptData = {...};` with config and user info,
    /// and a separate `ScriptData.pageData = {...};` with the campaign id.
    #[must_use]
    pub fn script_data(&self) -> ScriptData {
        let mut data = ScriptData::default();

        for script in self.document.select(&SCRIPT) {
            let body = script.text().collect::<String>();

            if let Some(captures) = SITE_DATA.captures(&body) {
                let site = &captures[1];
                data.site_url = data.site_url.or_else(|| quoted_field(site, "SiteUrl"));
                data.site_name = data.site_name.or_else(|| quoted_field(site, "SiteName"));
                data.browser = data.browser.or_else(|| quoted_field(site, "Browser"));
                data.country_code = data
                    .country_code
                    .or_else(|| quoted_field(site, "CountryCode"));
                data.ip = data.ip.or_else(|| quoted_field(site, "IP"));
            }

            if let Some(captures) = PAGE_DATA.captures(&body) {
                data.campaign_id = data.campaign_id.or_else(|| {
                    CAMPAIGN_ID
                        .captures(&captures[1])
                        .map(|c| c[1].to_string())
                });
            }
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> Page {
        Page::parse(Url::parse("https://example.com/base/").unwrap(), html)
    }

    #[test]
    fn heading_tags_in_document_order() {
        let page = page("<h2>a</h2><div><h1>b</h1></div><h3>c</h3>");
        assert_eq!(page.heading_tags(), ["h2", "h1", "h3"]);
    }

    #[test]
    fn h1_count_counts_only_h1() {
        let page = page("<h1>a</h1><h2>b</h2><h1>c</h1>");
        assert_eq!(page.h1_count(), 2);
    }

    #[test]
    fn images_capture_src_and_alt() {
        let page = page(r#"<img src="a.png" alt="A"><img src="b.png" alt=""><img src="c.png">"#);
        let images = page.images();
        assert_eq!(images.len(), 3);
        assert!(images[0].has_alt_text());
        assert!(!images[1].has_alt_text());
        assert!(!images[2].has_alt_text());
        assert_eq!(images[2].src.as_deref(), Some("c.png"));
        assert_eq!(images[2].alt, None);
    }

    #[test]
    fn links_are_absolute_deduplicated_and_http_only() {
        let page = page(concat!(
            r#"<a href="https://example.com/x">x</a>"#,
            r#"<a href="/y">y</a>"#,
            r#"<a href="https://example.com/x">x again</a>"#,
            r#"<a href="mailto:hi@example.com">mail</a>"#,
            r#"<a href="tel:+123">tel</a>"#,
        ));
        let links: Vec<String> = page.links().iter().map(Url::to_string).collect();
        assert_eq!(links, ["https://example.com/x", "https://example.com/y"]);
    }

    #[test]
    fn currency_widget_extraction() {
        let page = page(concat!(
            r#"<div id="js-currency-sort-footer"><ul class="select-ul">"#,
            r#"<li data-currency-country="US"><p>$</p></li>"#,
            r#"<li data-currency-country="GB"><p> £ </p></li>"#,
            r#"<li><p></p></li>"#,
            "</ul></div>",
            r#"<span class="js-price-value"> $120 </span>"#,
        ));

        let options = page.currency_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].code.as_deref(), Some("US"));
        assert_eq!(options[0].symbol, "$");
        assert_eq!(options[1].symbol, "£");
        assert_eq!(options[2].code, None);
        assert_eq!(options[2].symbol, "");

        assert_eq!(page.displayed_price().as_deref(), Some("$120"));
    }

    #[test]
    fn missing_widget_yields_nothing() {
        let page = page("<p>no widget here</p>");
        assert!(page.currency_options().is_empty());
        assert_eq!(page.displayed_price(), None);
    }

    #[test]
    fn script_data_extraction() {
        let page = page(concat!(
            "<script>\n",
            "var ScriptData = {\n",
            r#"  "config": {"SiteUrl":"www.example.io","SiteName":"Example"},"#,
            "\n",
            r#"  "userInfo": {"Browser":"Chrome","CountryCode":"BD","IP":"10.0.0.1"}"#,
            "\n};\n",
            "</script>",
            "<script>ScriptData.pageData = {\n  CampaignId: \"ABC123\"\n};</script>",
        ));

        let data = page.script_data();
        assert_eq!(data.site_url.as_deref(), Some("www.example.io"));
        assert_eq!(data.site_name.as_deref(), Some("Example"));
        assert_eq!(data.browser.as_deref(), Some("Chrome"));
        assert_eq!(data.country_code.as_deref(), Some("BD"));
        assert_eq!(data.ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(data.campaign_id.as_deref(), Some("ABC123"));
        assert!(!data.is_empty());
    }

    #[test]
    fn script_data_absent() {
        let page = page("<script>var other = 1;</script>");
        assert!(page.script_data().is_empty());
    }
}
