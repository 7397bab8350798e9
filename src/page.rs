use std::sync::LazyLock;

use regex::Regex;
use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

static BG_DECL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"background(?:-color)?\s*:\s*([^;]+)").unwrap());

/// A parsed results page. Every lookup tolerates "no matching node" by
/// returning an empty or absent value, never an error; all real failure
/// handling stays at the page-load and image-fetch boundaries.
pub struct PageDoc {
    doc: Html,
}

impl PageDoc {
    pub fn parse(html: &str) -> Self {
        PageDoc {
            doc: Html::parse_document(html),
        }
    }

    /// Text of the first element matching `selector`, or empty.
    pub fn text(&self, selector: &Selector) -> String {
        self.doc
            .select(selector)
            .next()
            .map(element_text)
            .unwrap_or_default()
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.doc.select(selector)
    }

    /// Background color declared inline on the first matching element.
    /// Stands in for a computed style over a static document: an element
    /// without an inline background declaration yields `None`.
    pub fn background_color(&self, selector: &Selector) -> Option<String> {
        let element = self.doc.select(selector).next()?;
        let style = element.value().attr("style")?;
        BG_DECL_RE
            .captures(style)
            .map(|caps| caps[1].trim().to_string())
    }
}

pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first descendant matching `selector`, or empty.
pub fn child_text(element: ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Attribute of the first descendant matching `selector`, or empty.
pub fn child_attr(element: ElementRef, selector: &Selector, name: &str) -> String {
    element
        .select(selector)
        .next()
        .and_then(|e| e.value().attr(name))
        .unwrap_or_default()
        .to_string()
}

/// Serialized markup of the first descendant matching `selector`, or empty.
pub fn child_markup(element: ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|e| e.html())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(s: &str) -> Selector {
        Selector::parse(s).unwrap()
    }

    #[test]
    fn text_of_missing_node_is_empty() {
        let doc = PageDoc::parse("<html><body><p>hi</p></body></html>");
        assert_eq!(doc.text(&selector(".nope")), "");
        assert_eq!(doc.text(&selector("p")), "hi");
    }

    #[test]
    fn background_color_from_inline_style() {
        let doc = PageDoc::parse(
            r#"<div class="card__bg" style="width: 10px; background-color: rgb(66, 152, 180);"></div>"#,
        );
        assert_eq!(
            doc.background_color(&selector(".card__bg")).as_deref(),
            Some("rgb(66, 152, 180)")
        );
    }

    #[test]
    fn background_shorthand_also_matches() {
        let doc = PageDoc::parse(r#"<div class="card__bg" style="background: #88619a"></div>"#);
        assert_eq!(
            doc.background_color(&selector(".card__bg")).as_deref(),
            Some("#88619a")
        );
    }

    #[test]
    fn background_color_absent() {
        let doc = PageDoc::parse(r#"<div class="card__bg" style="width: 10px"></div>"#);
        assert_eq!(doc.background_color(&selector(".card__bg")), None);
        assert_eq!(doc.background_color(&selector(".missing")), None);
    }

    #[test]
    fn child_helpers_default_to_empty() {
        let doc = PageDoc::parse(
            r#"<div class="card"><img src="a.png"><span class="t">Role</span></div>"#,
        );
        let card = doc.select(&selector(".card")).next().unwrap();
        assert_eq!(child_text(card, &selector(".t")), "Role");
        assert_eq!(child_text(card, &selector(".missing")), "");
        assert_eq!(child_attr(card, &selector("img"), "src"), "a.png");
        assert_eq!(child_attr(card, &selector("img"), "alt"), "");
        assert_eq!(child_markup(card, &selector("svg")), "");
    }
}
