use crate::types::config::PolicyEntry;
use crate::types::report::{CommunityImpact, PolicyReport, ScoreResult};

pub fn score_text(result: &ScoreResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("Sustainability score: {}/100\n", result.score));
    output.push_str(&format!(
        "Estimated carbon: {:.2} kg CO2e\n",
        result.estimated_carbon_kg
    ));
    output.push_str("Suggestions:\n");
    if result.suggestions.is_empty() {
        output.push_str("  - none\n");
    } else {
        for suggestion in &result.suggestions {
            output.push_str(&format!("  - {suggestion}\n"));
        }
    }
    output
}

pub fn policy_text(report: &PolicyReport) -> String {
    let mut output = String::new();
    if report.selected.is_empty() {
        output.push_str("Selected policies: none\n");
    } else {
        output.push_str(&format!(
            "Selected policies: {} ({})\n",
            report.selected.join(", "),
            report.selected.len()
        ));
    }
    output.push_str(&format!(
        "Combined impact: -{}%\n",
        report.total_impact_percent
    ));
    output.push_str(&format!(
        "Relative reductions: energy -{:.1}%, water -{:.1}%, cost -{:.1}%, emissions -{:.1}%\n",
        report.relative.energy, report.relative.water, report.relative.cost, report.relative.emissions
    ));
    output.push_str("Projected monthly figures:\n");
    output.push_str(&format!(
        "  energy: {} (baseline {:.0})\n",
        report.projected.energy, report.baseline.energy
    ));
    output.push_str(&format!(
        "  water: {} (baseline {:.0})\n",
        report.projected.water, report.baseline.water
    ));
    output.push_str(&format!(
        "  cost: {} (baseline {:.0})\n",
        report.projected.cost, report.baseline.cost
    ));
    output.push_str(&format!(
        "  emissions: {} (baseline {:.0})\n",
        report.projected.emissions, report.baseline.emissions
    ));
    output
}

pub fn community_text(impact: &CommunityImpact) -> String {
    format!(
        "Households: {}\nTotal electricity: {}\nSavings: {}\n",
        impact.households, impact.total_electricity, impact.savings
    )
}

pub fn catalog_text(catalog: &[PolicyEntry]) -> String {
    let mut output = String::new();
    for policy in catalog {
        output.push_str(&format!(
            "{}  {} (est. impact -{}%)\n",
            policy.id, policy.name, policy.impact
        ));
    }
    output
}
