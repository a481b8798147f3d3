//! The Composer: four prompt-driven generation steps against a chat model.
//!
//! Melody comes first; harmony and rhythm both depend only on the melody
//! and run concurrently; the style summary joins all three. Each prompt
//! asks for a strict output grammar, but the model is free to ignore it —
//! downstream resolution tolerates malformed tokens.

use anyhow::Result;

use crate::model::ChatModel;

fn melody_prompt(idea: &str) -> String {
    format!(
        "Generate a melody based on this input: {idea}.\n\
         \n\
         STRICT FORMAT:\n\
         - Output ONLY space-separated musical notes.\n\
         - Valid examples: C4 D4 E4 G4 A4\n\
         - NO explanations, NO sentences, NO punctuation, NO text.\n\
         \n\
         Your final output must contain ONLY notes like:\n\
         C4 D4 E4 F4 G4 A4 G4"
    )
}

fn harmony_prompt(melody: &str) -> String {
    format!(
        "Create harmony chords for this melody: {melody}.\n\
         \n\
         STRICT FORMAT:\n\
         - Output ONLY space-separated chords.\n\
         - Each chord must look like: C4-E4-G4\n\
         - Multiple chords example: C4-E4-G4 F4-A4-C5 G4-B4-D5\n\
         - NO explanations, NO sentences, NO extra text.\n\
         \n\
         Your final output must contain ONLY chords."
    )
}

fn rhythm_prompt(melody: &str) -> String {
    format!(
        "Suggest rhythm durations (in beats) for this melody: {melody}.\n\
         \n\
         STRICT FORMAT:\n\
         - Output ONLY numbers separated by spaces.\n\
         - Example: 1.0 0.5 0.5 2.0 1.0\n\
         - Match the count of melody notes if possible.\n\
         - NO words, NO explanations, NO symbols except digits and dots.\n\
         \n\
         Your final output must contain ONLY numbers."
    )
}

fn style_prompt(style: &str, melody: &str, harmony: &str, rhythm: &str) -> String {
    format!(
        "Adapt the composition to {style} style using the following:\n\
         Melody: {melody}\n\
         Harmony: {harmony}\n\
         Rhythm: {rhythm}\n\
         \n\
         STRICT FORMAT:\n\
         - Output ONLY a short final composition description (2-3 lines max).\n\
         - No markdown, no lists, no bullet points.\n\
         - Plain English text ONLY.\n\
         \n\
         Example:\n\
         A bright upbeat melody with smooth harmony and steady rhythm."
    )
}

/// The Composer's raw text outputs for one idea.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    pub melody: String,
    pub harmony: String,
    pub rhythm: String,
    pub summary: String,
}

/// Orchestrates the four generation calls against a chat model.
pub struct Composer<M> {
    model: M,
}

impl<M: ChatModel> Composer<M> {
    pub fn new(model: M) -> Self {
        Composer { model }
    }

    /// Generate a space-separated note sequence from a free-text idea.
    pub async fn generate_melody(&self, idea: &str) -> Result<String> {
        self.model.complete(&melody_prompt(idea)).await
    }

    /// Create supporting harmony chords for a melody string.
    pub async fn generate_harmony(&self, melody: &str) -> Result<String> {
        self.model.complete(&harmony_prompt(melody)).await
    }

    /// Suggest per-note beat durations for a melody string.
    pub async fn generate_rhythm(&self, melody: &str) -> Result<String> {
        self.model.complete(&rhythm_prompt(melody)).await
    }

    /// Summarize the composition in the target style.
    pub async fn adapt_style(
        &self,
        style: &str,
        melody: &str,
        harmony: &str,
        rhythm: &str,
    ) -> Result<String> {
        self.model
            .complete(&style_prompt(style, melody, harmony, rhythm))
            .await
    }

    /// Run the full composition flow for one idea.
    ///
    /// Provider failures abort the whole request; there is no retry here.
    pub async fn compose(&self, idea: &str, style: &str) -> Result<Composition> {
        tracing::info!(idea = %idea, "generating melody");
        let melody = self.generate_melody(idea).await?;
        tracing::debug!(melody = %melody, "melody generated");

        tracing::info!("generating harmony and rhythm");
        let (harmony, rhythm) = tokio::try_join!(
            self.generate_harmony(&melody),
            self.generate_rhythm(&melody),
        )?;
        tracing::debug!(harmony = %harmony, rhythm = %rhythm, "harmony and rhythm generated");

        tracing::info!(style = %style, "adapting style");
        let summary = self.adapt_style(style, &melody, &harmony, &rhythm).await?;

        Ok(Composition {
            melody,
            harmony,
            rhythm,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_their_inputs() {
        assert!(melody_prompt("sad waltz").contains("sad waltz"));
        assert!(harmony_prompt("C4 D4").contains("C4 D4"));
        assert!(rhythm_prompt("C4 D4").contains("C4 D4"));

        let style = style_prompt("Jazz", "C4", "C4-E4-G4", "1.0");
        assert!(style.contains("Jazz"));
        assert!(style.contains("C4-E4-G4"));
        assert!(style.contains("1.0"));
    }

    #[test]
    fn test_prompts_demand_bare_output() {
        assert!(melody_prompt("x").contains("ONLY space-separated musical notes"));
        assert!(harmony_prompt("x").contains("ONLY space-separated chords"));
        assert!(rhythm_prompt("x").contains("ONLY numbers"));
    }
}
