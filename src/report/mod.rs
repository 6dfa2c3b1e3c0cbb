pub mod json;
pub mod md;
pub mod text;

use crate::error::Result;
use crate::types::config::PolicyEntry;
use crate::types::report::{CommunityImpact, PolicyReport, ScoreResult};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render_score(result: &ScoreResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::score_text(result)),
        OutputFormat::Json => json::to_json(result),
        OutputFormat::Md => Ok(md::score_markdown(result)),
    }
}

pub fn render_policy(report: &PolicyReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::policy_text(report)),
        OutputFormat::Json => json::to_json(report),
        OutputFormat::Md => Ok(md::policy_markdown(report)),
    }
}

pub fn render_community(impact: &CommunityImpact, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::community_text(impact)),
        OutputFormat::Json => json::to_json(impact),
        OutputFormat::Md => Ok(md::community_markdown(impact)),
    }
}

pub fn render_catalog(catalog: &[PolicyEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::catalog_text(catalog)),
        OutputFormat::Json => json::to_json(&catalog),
        OutputFormat::Md => Ok(md::catalog_markdown(catalog)),
    }
}
