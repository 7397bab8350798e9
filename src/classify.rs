/// The four coarse personality clusters of the source material, used to pick
/// a fallback accent color when the page carries no theme element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperament {
    Explorers,
    Sentinels,
    Diplomats,
    Analysts,
    Unknown,
}

const EXPLORER_ROLES: &[&str] = &["Virtuoso", "Adventurer", "Entrepreneur", "Entertainer"];
const SENTINEL_ROLES: &[&str] = &["Logistician", "Defender", "Executive", "Consul"];
const DIPLOMAT_ROLES: &[&str] = &["Advocate", "Mediator", "Protagonist", "Campaigner"];
const ANALYST_ROLES: &[&str] = &["Architect", "Logician", "Commander", "Debater"];

impl Temperament {
    pub fn name(self) -> &'static str {
        match self {
            Temperament::Explorers => "explorers",
            Temperament::Sentinels => "sentinels",
            Temperament::Diplomats => "diplomats",
            Temperament::Analysts => "analysts",
            Temperament::Unknown => "unknown",
        }
    }

    pub fn accent_color(self) -> &'static str {
        match self {
            Temperament::Explorers => "rgb(228, 174, 58)",
            Temperament::Sentinels => "rgb(66, 152, 180)",
            Temperament::Diplomats => "rgb(51, 164, 116)",
            Temperament::Analysts => "rgb(136, 97, 154)",
            Temperament::Unknown => "rgb(0, 0, 0)",
        }
    }
}

/// Bucket a free-text type label (e.g. "Logician (INTP-A)") into its
/// temperament group. The role vocabularies are mutually exclusive; match
/// order is fixed anyway so the result is deterministic. No match is a
/// normal outcome, not an error.
pub fn classify(label: &str) -> Temperament {
    let groups: [(Temperament, &[&str]); 4] = [
        (Temperament::Explorers, EXPLORER_ROLES),
        (Temperament::Sentinels, SENTINEL_ROLES),
        (Temperament::Diplomats, DIPLOMAT_ROLES),
        (Temperament::Analysts, ANALYST_ROLES),
    ];

    for (group, roles) in groups {
        if roles.iter().any(|role| label.contains(role)) {
            return group;
        }
    }
    Temperament::Unknown
}
