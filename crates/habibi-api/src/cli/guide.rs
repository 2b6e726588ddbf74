//! One-shot translator and explore commands.

use anyhow::Result;
use console::style;

use habibi_types::error::GuideError;
use habibi_types::guide::Category;

use super::chat::renderer::GuideRenderer;
use super::spinner;
use crate::state::AppState;

/// `habibi translate <TEXT>`
pub async fn translate(state: &AppState, text: &str, json: bool, quiet: bool) -> Result<()> {
    let spinner = spinner("Translating...", quiet || json);
    let result = state.guide_service.translate(text).await;
    spinner.finish_and_clear();

    let translation = match result {
        Ok(t) => t,
        Err(e) => return report(e, "AI Error"),
    };

    if json {
        let out = serde_json::json!({ "text": translation });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("{}", GuideRenderer::new().render(&translation).trim_end());
    println!();
    Ok(())
}

/// `habibi recommend <CATEGORY>`
pub async fn recommend(state: &AppState, category: &str, json: bool, quiet: bool) -> Result<()> {
    let category: Category = category.parse().map_err(anyhow::Error::msg)?;

    let spinner = spinner(&format!("Searching {category}..."), quiet || json);
    let result = state.guide_service.recommend(category).await;
    spinner.finish_and_clear();

    let text = match result {
        Ok(t) => t,
        Err(e) => return report(e, "AI Error"),
    };

    if json {
        let out = serde_json::json!({ "category": category, "text": text });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(category.label()).cyan().bold());
    println!("{}", GuideRenderer::new().render(&text).trim_end());
    println!();
    Ok(())
}

/// Blank input is a warning; a dispatch failure fails the command.
pub(crate) fn report(e: GuideError, prefix: &str) -> Result<()> {
    match e {
        GuideError::EmptyInput => {
            eprintln!("  {} {}", style("!").yellow().bold(), GuideError::EmptyInput);
            Ok(())
        }
        GuideError::Dispatch(d) => Err(anyhow::anyhow!("{prefix}: {d}")),
    }
}
