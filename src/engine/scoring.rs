use super::EngineOptions;
use crate::model::{Slot, Worker};

pub const BEST_SCORE: u32 = 10;
pub const CAPABLE_SCORE: u32 = 5;
pub const CONTINUITY_BONUS: u32 = 20;

/// Score de compétence seul : meilleure alternative du poste.
pub(super) fn base_score(worker: &Worker, slot: &Slot) -> u32 {
    slot.alternatives
        .iter()
        .map(|alt| {
            if worker.best_positions.contains(alt) {
                BEST_SCORE
            } else if worker.positions.contains(alt) {
                CAPABLE_SCORE
            } else {
                0
            }
        })
        .max()
        .unwrap_or(0)
}

pub(super) fn score(
    worker: &Worker,
    slot: &Slot,
    boost_checklist: bool,
    previous: Option<&str>,
    opts: &EngineOptions,
) -> u32 {
    let mut total = base_score(worker, slot);

    if boost_checklist && worker.holds(&opts.checklist_skill) {
        if let Some(bonus) = slot.first().and_then(|first| opts.checklist_boosts.get(first)) {
            total = total.saturating_add(*bonus);
        }
    }

    if let Some(prev) = previous {
        if slot.contains(base_position(prev)) {
            total = total.saturating_add(CONTINUITY_BONUS);
        }
    }

    total
}

/// Poste de base d'un libellé : sans suffixe " (lead)"/" (floating)", première alternative.
pub(crate) fn base_position(label: &str) -> &str {
    let trimmed = label
        .strip_suffix(" (lead)")
        .or_else(|| label.strip_suffix(" (floating)"))
        .unwrap_or(label);
    trimmed.split('/').next().unwrap_or(trimmed).trim()
}
