//! The slide-deck generation call, currently a fixed-delay stand-in.

use std::fmt;

use crate::timer;

/// Wall-clock delay of the stand-in call.
const SIMULATED_DELAY_MS: i32 = 2500;

/// Reference to a produced deck. A real backend would return a URL or
/// blob handle the page can offer for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckArtifact {
    pub file_name: String,
}

/// Failure surfaced by the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    Service(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service(message) => write!(f, "{}", message),
        }
    }
}

/// Produces a presentation from the validated content.
///
/// TODO: replace the sleep with a request to the generation endpoint
/// once it is deployed; the caller already handles the `Err` branch.
pub async fn generate_deck(content: &str) -> Result<DeckArtifact, GenerateError> {
    let _ = content;
    timer::sleep(SIMULATED_DELAY_MS).await;
    Ok(DeckArtifact {
        file_name: "presentation.pptx".to_string(),
    })
}
