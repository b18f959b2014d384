use std::fmt;

use crate::physics::{RoundTo, POWER_GENERATION};
use crate::types::SwingReport;

/// Tekstvisning av en rapport for terminal/logg.
pub struct TextReport<'a>(pub &'a SwingReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let s = &report.scores;
        let p = &report.physics;
        let d = &report.durations;

        writeln!(f, "--- Swing Report ---")?;
        writeln!(f, "Grade: {} ({:.1}%)", s.grade, s.overall_score)?;
        writeln!(f, "{}", s.feedback)?;
        writeln!(f)?;
        writeln!(f, "Sub-scores:")?;
        for (name, score) in s.scores.named() {
            writeln!(f, "  {:<12} {:>5.1}", name, score)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Club speed: {} mph ({} m/s), ball speed: {} mph{}",
            p.club_head_speed_mph.round_to(1),
            p.club_head_speed_ms.round_to(2),
            p.ball_speed_mph.round_to(1),
            if p.ball_speed_estimated { " (estimated)" } else { "" }
        )?;
        writeln!(
            f,
            "Smash factor: {}, carry: {} yd, X-factor: {} deg",
            p.smash_factor.round_to(2),
            p.carry_distance_yards.round_to(1),
            p.x_factor_deg.round_to(1)
        )?;
        writeln!(
            f,
            "Energy transfer: {}% ({} J lost)",
            report.energy.transfer_efficiency_pct.round_to(1),
            report.energy.energy_loss_j.round_to(1)
        )?;
        let tempo = d
            .tempo_ratio
            .map(|r| format!("{}:1", r.round_to(1)))
            .unwrap_or_else(|| "n/a".into());
        writeln!(
            f,
            "Backswing {}s, downswing {}s, tempo {}",
            d.backswing_s.round_to(2),
            d.downswing_s.round_to(2),
            tempo
        )?;
        writeln!(
            f,
            "Tracking quality: {} ({}%)",
            report.tracking.label.as_str(),
            (report.tracking.overall_score * 100.0).round_to(0)
        )?;
        if !report.tracking.limiting_factors.is_empty() {
            writeln!(f, "Limiting factors: {}", report.tracking.limiting_factors.join(", "))?;
        }
        writeln!(
            f,
            "Classification: {} ({}% confidence)",
            report.classification.label,
            (report.classification.confidence * 100.0).round_to(0)
        )?;

        if !report.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "Improvements:")?;
            for (i, sug) in report.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}: {}", i + 1, sug.area, sug.issue)?;
                writeln!(f, "     Drill: {} ({:?}, {})", sug.drill, sug.difficulty, sug.expected_improvement)?;
            }
        }
        for rec in &report.classification.recommendations {
            writeln!(f, "  * {rec}")?;
        }
        Ok(())
    }
}

pub fn render_text_report(report: &SwingReport) -> String {
    TextReport(report).to_string()
}

pub fn print_swing_report(report: &SwingReport) {
    print!("{}", render_text_report(report));
}

/// Referansetabellen for kraftproduksjon.
pub fn render_power_generation() -> String {
    POWER_GENERATION
        .iter()
        .map(|p| format!("{}: {}%", p.segment, p.share_pct))
        .collect::<Vec<_>>()
        .join(", ")
}
