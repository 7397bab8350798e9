use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::page::{child_attr, child_markup, child_text, PageDoc};

static CARD_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".slider__slides > div").unwrap());
static IMAGE_HOLDER_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".card__image").unwrap());
static IMG_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());
static SVG_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("svg").unwrap());
static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".card__title").unwrap());
static SUBTITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".card__subtitle").unwrap());
static BODY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".prevent--drag.card__p").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    None,
    Raster,
    Vector,
}

/// One personality card (role, strategy, ...) as it appears on the page.
#[derive(Debug, Clone)]
pub struct RawCard {
    pub category: String,
    pub value: String,
    pub image_source: String,
    pub image_kind: ImageKind,
    pub body_text: String,
}

pub fn extract(doc: &PageDoc) -> Vec<RawCard> {
    doc.select(&CARD_SEL)
        .map(|card| {
            let category = child_text(card, &TITLE_SEL);
            let (image_kind, image_source) = extract_image(card);
            debug!("Card {:?}: image {:?}", category, image_kind);

            RawCard {
                category,
                value: child_text(card, &SUBTITLE_SEL),
                image_source,
                image_kind,
                body_text: child_text(card, &BODY_SEL),
            }
        })
        .collect()
}

/// A raster tag wins over a vector tag when a card somehow carries both.
fn extract_image(card: ElementRef) -> (ImageKind, String) {
    let Some(holder) = card.select(&IMAGE_HOLDER_SEL).next() else {
        return (ImageKind::None, String::new());
    };

    if holder.select(&IMG_SEL).next().is_some() {
        return (ImageKind::Raster, child_attr(holder, &IMG_SEL, "src"));
    }

    if holder.select(&SVG_SEL).next().is_some() {
        return (ImageKind::Vector, child_markup(holder, &SVG_SEL));
    }

    (ImageKind::None, String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_card() {
        let doc = PageDoc::parse(
            r#"<div class="slider__slides"><div>
                 <div class="card__image"><img src="https://cdn.example/role.png"></div>
                 <div class="card__title">His role</div>
                 <div class="card__subtitle">Sentinel</div>
                 <p class="prevent--drag card__p">Keeps things organized.</p>
               </div></div>"#,
        );
        let cards = extract(&doc);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].image_kind, ImageKind::Raster);
        assert_eq!(cards[0].image_source, "https://cdn.example/role.png");
        assert_eq!(cards[0].category, "His role");
        assert_eq!(cards[0].value, "Sentinel");
        assert_eq!(cards[0].body_text, "Keeps things organized.");
    }

    #[test]
    fn vector_card_captures_markup() {
        let doc = PageDoc::parse(
            r#"<div class="slider__slides"><div>
                 <div class="card__image"><svg viewBox="0 0 24 24"><circle r="7"></circle></svg></div>
                 <div class="card__title">His personality</div>
               </div></div>"#,
        );
        let cards = extract(&doc);
        assert_eq!(cards[0].image_kind, ImageKind::Vector);
        assert!(cards[0].image_source.starts_with("<svg"));
        assert!(cards[0].image_source.contains("circle"));
    }

    #[test]
    fn raster_beats_vector() {
        let doc = PageDoc::parse(
            r#"<div class="slider__slides"><div>
                 <div class="card__image"><img src="x.png"><svg></svg></div>
               </div></div>"#,
        );
        let cards = extract(&doc);
        assert_eq!(cards[0].image_kind, ImageKind::Raster);
        assert_eq!(cards[0].image_source, "x.png");
    }

    #[test]
    fn bare_card_is_all_empty() {
        let doc = PageDoc::parse(r#"<div class="slider__slides"><div></div></div>"#);
        let cards = extract(&doc);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].image_kind, ImageKind::None);
        assert_eq!(cards[0].category, "");
        assert_eq!(cards[0].value, "");
        assert_eq!(cards[0].body_text, "");
    }

    #[test]
    fn cards_keep_document_order() {
        let doc = PageDoc::parse(
            r#"<div class="slider__slides">
                 <div><div class="card__title">First</div></div>
                 <div><div class="card__title">Second</div></div>
                 <div><div class="card__title">Third</div></div>
               </div>"#,
        );
        let titles: Vec<_> = extract(&doc).into_iter().map(|c| c.category).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }
}
