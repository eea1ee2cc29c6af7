use crate::model::{Assignment, BreakRequirement, ClosingLineup, GenerationOutput, Lineup};
use crate::time::format_hhmm;

/// Permet de customiser le rendu des lineups (texte, chat, etc.).
pub trait LineupRenderer {
    fn render_lineup(&self, lineup: &Lineup) -> String;
    fn render_closing(&self, closing: &ClosingLineup) -> String;
}

/// Rendu texte brut, une ligne par affectation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextLineup;

impl LineupRenderer for TextLineup {
    fn render_lineup(&self, lineup: &Lineup) -> String {
        let mut out = format!(
            "{}-{} {}\n",
            format_hhmm(lineup.start),
            format_hhmm(lineup.end),
            lineup.period
        );
        for assignment in &lineup.assignments {
            out.push_str(&render_line(assignment));
        }
        if lineup.extra > 0 {
            out.push_str(&format!("  + {} extra\n", lineup.extra));
        }
        out
    }

    fn render_closing(&self, closing: &ClosingLineup) -> String {
        let mut out = format!(
            "closing {}-{}\n",
            format_hhmm(closing.start),
            format_hhmm(closing.end)
        );
        for assignment in &closing.assignments {
            out.push_str(&render_line(assignment));
        }
        out
    }
}

fn render_line(a: &Assignment) -> String {
    let flag = match a.break_rule {
        BreakRequirement::None => "",
        BreakRequirement::Optional => " [break optional]",
        BreakRequirement::Required => " [break required]",
    };
    format!("  {}: {} ({}){}\n", a.position, a.worker_name, a.quality, flag)
}

/// Rendu complet : lineups dans l'ordre, fermeture en dernier.
pub fn render_generation(output: &GenerationOutput, renderer: &dyn LineupRenderer) -> String {
    let mut blocks: Vec<String> = output
        .lineups
        .iter()
        .map(|lineup| renderer.render_lineup(lineup))
        .collect();
    if let Some(closing) = &output.closing {
        blocks.push(renderer.render_closing(closing));
    }
    blocks.join("\n")
}
