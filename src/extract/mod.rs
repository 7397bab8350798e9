pub mod cards;
pub mod traits;

use std::sync::LazyLock;

use scraper::Selector;
use tracing::debug;

use crate::classify;
use crate::page::PageDoc;

static TYPE_LABEL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".link--inline").unwrap());
static TYPE_CODE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".type__code").unwrap());
static THEME_BG_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".card__bg").unwrap());

/// Raw, unnormalized capture of the page's structural regions, in document
/// order. Missing regions degrade to empty strings and empty sequences.
#[derive(Debug)]
pub struct RawBundle {
    pub type_code: String,
    pub cards: Vec<cards::RawCard>,
    pub traits: Vec<traits::RawTrait>,
    pub color: String,
}

/// Walk the fixed regions of a results page. The theme element's background
/// wins over the temperament fallback when both are available.
pub fn extract(doc: &PageDoc) -> RawBundle {
    let label = doc.text(&TYPE_LABEL_SEL);
    let temperament = classify::classify(&label);
    debug!(
        "Personality type: {:?} -> {}",
        label,
        temperament.name()
    );

    let color = doc
        .background_color(&THEME_BG_SEL)
        .unwrap_or_else(|| temperament.accent_color().to_string());

    RawBundle {
        type_code: doc.text(&TYPE_CODE_SEL),
        cards: cards::extract(doc),
        traits: traits::extract(doc),
        color,
    }
}

// ── Tests ──
