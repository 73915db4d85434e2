use serde::{Deserialize, Serialize};

use crate::Profile;
use crate::prelude::*;

/// Preferred language for the generated narrative. An opaque tag: it is
/// forwarded to the narrative backend untouched, never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[display(fmt = "th")]
    Th,
    #[display(fmt = "en")]
    En,
}

/// One analysis request: two dates of birth, one per calendar system.
/// The inner-world date drives the thought profile, the outer-world date the
/// action profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub inner_dob: String,
    pub outer_dob: String,
    #[serde(default)]
    pub language: Language,
}

/// The assembled result of one request: both profiles plus the narrative the
/// backend generated from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub inner_world: Profile,
    pub outer_world: Profile,
    pub narrative: String,
}

/// Error type for reading generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadingError {
    /// The narrative backend reported a failure.
    #[error("Narrative generation failed: {0}")]
    Narrative(String),
}

/// Capability for turning a rendered prompt into narrative text.
///
/// Implementations own the external text-generation call (and with it all
/// blocking, credentials and transport concerns); the engine stays pure and
/// testable without network access.
pub trait NarrativeGenerator {
    /// Generates narrative text for a prompt.
    ///
    /// # Errors
    /// Returns `ReadingError::Narrative` when the backend cannot produce text.
    fn narrate(&self, prompt: &str, language: Language) -> Result<String, ReadingError>;
}

impl Reading {
    /// Analyzes both dates of a request and asks the generator for the
    /// narrative comparing them.
    ///
    /// # Errors
    /// Propagates the generator's `ReadingError` unchanged.
    pub fn generate(
        request: &ReadingRequest,
        generator: &dyn NarrativeGenerator,
    ) -> Result<Self, ReadingError> {
        let inner_world = Profile::analyze(&request.inner_dob);
        let outer_world = Profile::analyze(&request.outer_dob);
        let prompt = narrative_prompt(&inner_world, &outer_world);
        let narrative = generator.narrate(&prompt, request.language)?;
        Ok(Self {
            inner_world,
            outer_world,
            narrative,
        })
    }
}

/// Renders the prompt handed to the narrative backend: both profiles'
/// numbers, then the analysis instruction. Deterministic text, no clock, no
/// randomness.
pub fn narrative_prompt(inner: &Profile, outer: &Profile) -> String {
    format!(
        "You are a life-code reader. The inner-world calendar describes thought, \
         the outer-world calendar describes action.\n\n\
         {}\n{}\n\
         Describe this person's character and talents, point out conflicts between \
         thought and action, and offer guidance for daily life.",
        profile_section("Inner world (thought)", inner),
        profile_section("Outer world (action)", outer),
    )
}

fn profile_section(title: &str, profile: &Profile) -> String {
    let scores: Vec<String> = profile
        .weights
        .iter()
        .filter(|&(_, weight)| weight > 0)
        .map(|(digit, weight)| format!("{digit}={weight}"))
        .collect();
    let scores = if scores.is_empty() {
        "none".to_owned()
    } else {
        scores.join(", ")
    };

    let combos = if profile.combos.is_empty() {
        "none".to_owned()
    } else {
        let labels: Vec<String> = profile.combos.iter().map(ToString::to_string).collect();
        labels.join(", ")
    };

    format!(
        "{title}:\n- gift number {}, life code {}\n- digit scores: {scores}\n- combos: {combos}\n",
        profile.gift_number, profile.life_code,
    )
}
