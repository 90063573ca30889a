use scraper::{Html, Selector};

/// One extracted headline record. Either field may be empty when the
/// markup lacks the corresponding piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
    pub link: String,
}

/// Extract headline records from homepage markup.
///
/// Selects every `h2` nested in an `article` container and takes the first
/// anchor inside it: the anchor's text becomes `title`, its `href` becomes
/// `link`. A heading with no anchor, or an anchor with no `href`, yields
/// empty strings rather than an error — extraction never fails on missing
/// optional content.
pub fn extract_headlines(html: &str) -> Vec<Headline> {
    let document = Html::parse_document(html);
    let heading_selector = Selector::parse("article h2").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    document
        .select(&heading_selector)
        .map(|heading| match heading.select(&anchor_selector).next() {
            Some(anchor) => Headline {
                title: anchor.text().collect::<String>(),
                link: anchor.value().attr("href").unwrap_or_default().to_string(),
            },
            None => Headline {
                title: String::new(),
                link: String::new(),
            },
        })
        .collect()
}
