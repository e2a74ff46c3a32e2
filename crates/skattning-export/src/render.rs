use skattning_core::models::recommendation::Recommendation;
use skattning_instruments::instruments::cats2::ScreeningResult;

/// Clipboard text for the recommendation view: the diagnosis narrative
/// block (if any), a blank line, then one dash-prefixed line per
/// recommendation. Empty input renders to an empty string.
pub fn render_recommendations(
    narrative: Option<&str>,
    recommendations: &[&Recommendation],
) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(text) = narrative {
        parts.push(text.to_string());
    }
    if !recommendations.is_empty() {
        let lines: Vec<String> = recommendations
            .iter()
            .map(|rec| format!("- {}", rec.text))
            .collect();
        parts.push(lines.join("\n"));
    }
    parts.join("\n\n")
}

/// Clipboard text for the trauma-screen view: event list, dimensional
/// scores with interpretation, then the yes/no criteria determinations.
pub fn render_screening(result: &ScreeningResult) -> String {
    let mut text = String::from("CATS-2 RESULTAT\n\n");

    if !result.events_yes.is_empty() {
        text.push_str("TRAUMATISKA HÄNDELSER (JA-SVAR):\n\n");
        for event in &result.events_yes {
            text.push_str(&format!("• {event}\n"));
        }
        text.push('\n');
    }

    text.push_str("DIMENSIONELL POÄNGSÄTTNING:\n\n");
    for scale in &result.scales {
        text.push_str(&format!(
            "{}: {} poäng - {}\n",
            scale.name, scale.total, scale.interpretation
        ));
    }
    text.push('\n');

    text.push_str("KATEGORISK BEDÖMNING:\n\n");
    for outcome in &result.criteria {
        let verdict = if outcome.meets_criteria { "JA" } else { "NEJ" };
        text.push_str(&format!(
            "{}: {} - Uppfyller kriterierna\n",
            outcome.name, verdict
        ));
    }

    text
}
