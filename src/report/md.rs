use crate::types::config::PolicyEntry;
use crate::types::report::{CommunityImpact, PolicyReport, ScoreResult};

pub fn score_markdown(result: &ScoreResult) -> String {
    let mut output = String::new();
    output.push_str("# Sustainability Report\n\n");
    output.push_str(&format!("Score: {}/100\n\n", result.score));
    output.push_str(&format!(
        "Estimated carbon: {:.2} kg CO2e\n\n",
        result.estimated_carbon_kg
    ));
    output.push_str("## Suggestions\n\n");
    if result.suggestions.is_empty() {
        output.push_str("- none\n");
    } else {
        for suggestion in &result.suggestions {
            output.push_str(&format!("- {suggestion}\n"));
        }
    }
    output
}

pub fn policy_markdown(report: &PolicyReport) -> String {
    let mut output = String::new();
    output.push_str("# Policy Simulation Report\n\n");
    if report.selected.is_empty() {
        output.push_str("Selected policies: none\n\n");
    } else {
        output.push_str(&format!(
            "Selected policies: {}\n\n",
            report.selected.join(", ")
        ));
    }
    output.push_str(&format!(
        "Combined impact: **-{}%**\n\n",
        report.total_impact_percent
    ));
    output.push_str("## Projection\n\n");
    output.push_str("| metric | baseline | projected | reduction |\n");
    output.push_str("| --- | --- | --- | --- |\n");
    output.push_str(&format!(
        "| energy | {:.0} | {} | {:.1}% |\n",
        report.baseline.energy, report.projected.energy, report.relative.energy
    ));
    output.push_str(&format!(
        "| water | {:.0} | {} | {:.1}% |\n",
        report.baseline.water, report.projected.water, report.relative.water
    ));
    output.push_str(&format!(
        "| cost | {:.0} | {} | {:.1}% |\n",
        report.baseline.cost, report.projected.cost, report.relative.cost
    ));
    output.push_str(&format!(
        "| emissions | {:.0} | {} | {:.1}% |\n",
        report.baseline.emissions, report.projected.emissions, report.relative.emissions
    ));
    output
}

pub fn community_markdown(impact: &CommunityImpact) -> String {
    let mut output = String::new();
    output.push_str("# Community Simulation\n\n");
    output.push_str(&format!("- households: {}\n", impact.households));
    output.push_str(&format!(
        "- total electricity: {}\n",
        impact.total_electricity
    ));
    output.push_str(&format!("- savings: {}\n", impact.savings));
    output
}

pub fn catalog_markdown(catalog: &[PolicyEntry]) -> String {
    let mut output = String::new();
    output.push_str("# Policy Catalog\n\n");
    output.push_str("| id | name | impact |\n");
    output.push_str("| --- | --- | --- |\n");
    for policy in catalog {
        output.push_str(&format!(
            "| {} | {} | -{}% |\n",
            policy.id, policy.name, policy.impact
        ));
    }
    output
}
