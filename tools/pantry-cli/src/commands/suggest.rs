//! Replay keystrokes through the suggestion dropdown.

use std::time::Duration;

use anyhow::Result;
use console::style;
use pantry_commerce::search::{SuggestionPipeline, SuggestionState};

use super::SuggestArgs;
use crate::context::Context;
use crate::output::price_label;

/// Run the suggest command.
pub async fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let pipeline = SuggestionPipeline::new(ctx.catalog()?, ctx.config.suggestion_config()?);
    let pause = Duration::from_millis(args.pause_ms);

    for (i, keystroke) in args.keystrokes.iter().enumerate() {
        ctx.output.debug(&format!("input: {:?}", keystroke));
        pipeline.input(keystroke);
        if i + 1 < args.keystrokes.len() {
            tokio::time::sleep(pause).await;
        }
    }

    let state = pipeline.settled().await;
    render(&state, ctx);
    Ok(())
}

fn render(state: &SuggestionState, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(state);
        return;
    }

    if state.query.is_empty() {
        ctx.output.info("Keep typing to see suggestions");
        return;
    }

    ctx.output.header(&format!("Suggestions for \"{}\"", state.query));
    if !state.is_open() {
        ctx.output.info("No matching products");
        return;
    }

    for product in &state.suggestions {
        ctx.output.list_item(&format!("{}  {}", product.name, price_label(product)));
    }

    if let Some(route) = state.see_all() {
        let label = if state.hidden_matches() > 0 {
            format!("See all {} results", state.total_matches)
        } else {
            "See all results".to_string()
        };
        ctx.output.info(&format!("{} {}", label, style(route.path()).dim()));
    }
}
