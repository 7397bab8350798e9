use clap::ValueEnum;
use serde::Serialize;

use crate::error::PipelineError;

/// Optional result sections the host can request. Unrequested sections come
/// back as empty sequences and cost no extraction work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Personality,
    Traits,
}

/// Host-supplied inputs for one extraction call.
#[derive(Debug, Clone)]
pub struct Options {
    pub url: Option<String>,
    pub scores: bool,
    pub sections: Vec<Section>,
}

impl Options {
    /// Precondition check: the target URL must be set before anything runs.
    pub fn validated_url(&self) -> Result<&str, PipelineError> {
        self.url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(PipelineError::MissingUrl)
    }

    pub fn wants(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            url: None,
            scores: false,
            sections: vec![Section::Personality, Section::Traits],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_is_a_precondition_failure() {
        let options = Options::default();
        assert!(matches!(
            options.validated_url(),
            Err(PipelineError::MissingUrl)
        ));

        let options = Options {
            url: Some(String::new()),
            ..Options::default()
        };
        assert!(matches!(
            options.validated_url(),
            Err(PipelineError::MissingUrl)
        ));
    }

    #[test]
    fn set_url_passes() {
        let options = Options {
            url: Some("https://www.16personalities.com/profiles/abc".into()),
            ..Options::default()
        };
        assert_eq!(
            options.validated_url().unwrap(),
            "https://www.16personalities.com/profiles/abc"
        );
    }

    #[test]
    fn default_requests_all_sections() {
        let options = Options::default();
        assert!(options.wants(Section::Personality));
        assert!(options.wants(Section::Traits));
    }
}
