//! Interactive prompt helpers built on dialoguer

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Completion, Input};
use miette::{IntoDiagnostic, Result};

/// Tab-completion over a suggestion list (case-insensitive prefix match)
pub struct SuggestCompletion {
    options: Vec<String>,
}

impl SuggestCompletion {
    pub fn new(options: &[String]) -> Self {
        Self {
            options: options.to_vec(),
        }
    }
}

impl Completion for SuggestCompletion {
    fn get(&self, input: &str) -> Option<String> {
        let needle = input.to_lowercase();
        let matches: Vec<&String> = self
            .options
            .iter()
            .filter(|opt| opt.to_lowercase().starts_with(&needle))
            .collect();
        if matches.len() == 1 {
            Some(matches[0].clone())
        } else {
            None
        }
    }
}

/// Prompt for a required field; re-prompts while the input is empty
pub fn input_required(prompt: &str, initial: Option<&str>) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial.unwrap_or_default())
        .interact_text()
        .into_diagnostic()
}

/// Prompt for an optional field with tab-completion over suggestions
///
/// The options are listed dimmed above the prompt; empty input is allowed.
pub fn input_suggested(prompt: &str, options: &[String], initial: Option<&str>) -> Result<String> {
    if !options.is_empty() {
        println!(
            "  {}",
            style(format!("options: {}", options.join(", "))).dim()
        );
    }
    let completion = SuggestCompletion::new(options);
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial.unwrap_or_default())
        .completion_with(&completion)
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()
}
