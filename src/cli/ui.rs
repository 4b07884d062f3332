//! Shared prompt helpers.

use anyhow::Result;
use inquire::{ui::RenderConfig, Confirm, Select, Text};

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Prompt for text input with optional default value. Esc skips.
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<Option<String>> {
    let mut builder = Text::new(prompt).with_render_config(minimal_render_config());

    if let Some(d) = default {
        if !d.is_empty() {
            builder = builder.with_default(d);
        }
    }

    let result = builder.prompt_skippable()?;
    Ok(result)
}

/// Display a selection menu and return the chosen index. Esc skips.
///
/// Uses the raw prompt so the index comes straight from the cursor;
/// duplicate display strings stay distinguishable.
pub fn select<T: ToString + Clone>(prompt: &str, options: &[T]) -> Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = options.iter().map(|o| o.to_string()).collect();

    let result = Select::new(prompt, items)
        .with_render_config(minimal_render_config())
        .with_vim_mode(true)
        .raw_prompt_skippable()?;

    Ok(result.map(|selected| selected.index))
}

/// Prompt for yes/no confirmation
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(default)
        .prompt()?;
    Ok(result)
}

/// Truncate a string to a display width, appending an ellipsis.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let cut: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("Acme", 10), "Acme");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("Acme Corporation", 8), "Acme Co…");
    }
}
