use std::sync::Arc;

use serde::Serialize;

use crate::config::{Options, Section};
use crate::error::PipelineError;
use crate::extract::cards::{ImageKind, RawCard};
use crate::extract::traits::RawTrait;
use crate::extract::RawBundle;
use crate::fetch::ImageEncoder;

/// The finished profile, ready to serialize. `score` uses NaN as the
/// "not computed" sentinel, which serde_json emits as `null`, keeping it
/// distinct from a genuine zero.
#[derive(Debug, Serialize)]
pub struct PersonalityRecord {
    pub sections: Vec<Section>,
    pub color: String,
    #[serde(rename = "type")]
    pub type_code: String,
    pub personality: Vec<PersonalityCard>,
    pub traits: Vec<TraitScore>,
}

#[derive(Debug, Serialize)]
pub struct PersonalityCard {
    pub category: String,
    pub value: String,
    pub image: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TraitScore {
    pub category: String,
    pub value: String,
    pub score: f64,
    pub text: String,
}

/// Turn a raw bundle into the final record. Per-card image embedding runs
/// concurrently; joining in spawn order keeps the output aligned with
/// document order no matter which embed finishes first.
pub async fn normalize(
    bundle: RawBundle,
    options: &Options,
    encoder: Arc<dyn ImageEncoder>,
) -> Result<PersonalityRecord, PipelineError> {
    let type_code = strip_type(&bundle.type_code);

    let mut tasks = Vec::with_capacity(bundle.cards.len());
    for card in bundle.cards {
        let encoder = Arc::clone(&encoder);
        let type_code = type_code.clone();
        tasks.push(tokio::spawn(normalize_card(card, type_code, encoder)));
    }
    let mut personality = Vec::with_capacity(tasks.len());
    for task in tasks {
        personality.push(task.await??);
    }

    let traits = bundle
        .traits
        .into_iter()
        .map(|raw| normalize_trait(raw, options.scores))
        .collect();

    Ok(PersonalityRecord {
        sections: options.sections.clone(),
        color: bundle.color,
        type_code,
        personality,
        traits,
    })
}

async fn normalize_card(
    card: RawCard,
    type_code: String,
    encoder: Arc<dyn ImageEncoder>,
) -> Result<PersonalityCard, PipelineError> {
    let image = match card.image_kind {
        ImageKind::None => String::new(),
        ImageKind::Vector => svg_data_uri(&card.image_source),
        ImageKind::Raster => encoder.embed(&card.image_source).await?,
    };

    let value = card
        .value
        .replacen(&format!("({})", type_code), "", 1)
        .trim()
        .to_string();

    // Headings are often echoed at the start of the body; removal is a
    // no-op when the echo is absent. The pattern uses the raw subtitle.
    let echo = format!("{}\n{}\n", card.category, card.value);
    let text = card.body_text.replacen(&echo, "", 1).trim().to_string();

    Ok(PersonalityCard {
        category: card.category,
        value,
        image,
        text,
    })
}

fn normalize_trait(raw: RawTrait, emit_scores: bool) -> TraitScore {
    // "75% Extraverted" → percentage token + label phrase
    let mut parts = raw.score_text.split_whitespace();
    let percent = parts.next().unwrap_or_default();
    let label = parts.collect::<Vec<_>>().join(" ");

    let score = if emit_scores {
        percent
            .strip_suffix('%')
            .unwrap_or(percent)
            .parse::<f64>()
            .map(|n| n / 100.0)
            .unwrap_or(f64::NAN)
    } else {
        f64::NAN
    };

    let category = raw
        .category
        .strip_suffix(':')
        .unwrap_or(&raw.category)
        .trim()
        .to_string();

    TraitScore {
        category,
        value: recase(&label),
        score,
        text: raw.body_text.trim().to_string(),
    }
}

fn strip_type(raw: &str) -> String {
    raw.replace(['(', ')'], "").trim().to_string()
}

/// First character upper-cased, remainder lower-cased ("EXTRAVERTED" →
/// "Extraverted"). Empty in, empty out.
fn recase(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

fn svg_data_uri(markup: &str) -> String {
    format!("data:image/svg+xml,{}", urlencoding::encode(markup))
}

// ── Tests ──
