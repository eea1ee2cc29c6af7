use super::{EngineOptions, ResolvedSlot};
use crate::model::{PositionSlot, ShiftPeriod, Slot};

pub(super) fn resolve_positions(
    catalog: &[PositionSlot],
    period: ShiftPeriod,
    opts: &EngineOptions,
) -> Vec<ResolvedSlot> {
    let mut resolved: Vec<ResolvedSlot> = catalog
        .iter()
        .filter(|position| position.applies_to(period))
        .filter_map(|position| {
            let slot = position.slot();
            let priority = effective_priority(catalog, &slot, position.priority);
            let working: Vec<String> = slot
                .alternatives
                .into_iter()
                .filter(|alt| !is_marker(alt, opts))
                .collect();
            if working.is_empty() {
                return None;
            }
            Some(ResolvedSlot {
                slot: Slot::new(working),
                priority,
            })
        })
        .collect();

    // tri stable : à priorité égale, l'ordre du catalogue départage
    resolved.sort_by_key(|r| r.priority);
    resolved
}

/// Priorité la plus forte entre le poste et les postes nommés d'après ses alternatives.
fn effective_priority(catalog: &[PositionSlot], slot: &Slot, own: u32) -> u32 {
    if slot.alternatives.len() < 2 {
        return own;
    }
    slot.alternatives
        .iter()
        .filter_map(|alt| catalog.iter().find(|p| p.name == *alt).map(|p| p.priority))
        .fold(own, u32::min)
}

fn is_marker(alternative: &str, opts: &EngineOptions) -> bool {
    opts.non_working_markers
        .iter()
        .any(|marker| marker.eq_ignore_ascii_case(alternative))
}
