use std::sync::LazyLock;

use scraper::Selector;

use crate::page::{child_text, PageDoc};

static TRAIT_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".traits__boxes > div").unwrap());
static LABEL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".traitbox__label").unwrap());
static VALUE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".traitbox__value").unwrap());
static BODY_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// One scored dimension (energy, mind, ...) as it appears on the page.
/// `score_text` is the combined "75% Extraverted" string; splitting it is
/// the normalizer's job.
#[derive(Debug, Clone)]
pub struct RawTrait {
    pub category: String,
    pub score_text: String,
    pub body_text: String,
}

pub fn extract(doc: &PageDoc) -> Vec<RawTrait> {
    doc.select(&TRAIT_SEL)
        .map(|traitbox| RawTrait {
            category: child_text(traitbox, &LABEL_SEL),
            score_text: child_text(traitbox, &VALUE_SEL),
            body_text: child_text(traitbox, &BODY_SEL),
        })
        .collect()
}
