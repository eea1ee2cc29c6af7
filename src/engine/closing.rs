use super::{breaks, scoring};
use crate::model::{
    closing_positions, Assignment, ClosingLineup, Lineup, MatchQuality, PositionSlot, ShiftWindow,
    Worker, WorkerId, AVAILABLE_LABEL,
};
use std::collections::HashMap;

const HELD_BONUS: u32 = 50;

pub(super) fn build_closing(
    lineups: &[Lineup],
    windows: &[ShiftWindow],
    workers: &[Worker],
    catalog: &[PositionSlot],
) -> Option<ClosingLineup> {
    let last = lineups.last()?;

    let positions = closing_positions(catalog);
    if positions.is_empty() {
        return None;
    }

    let held: HashMap<&WorkerId, String> = last
        .assignments
        .iter()
        .map(|a| (&a.worker, scoring::base_position(&a.position).to_lowercase()))
        .collect();

    let mut pool: Vec<(&ShiftWindow, &Worker)> = windows
        .iter()
        .filter(|w| w.end == last.end)
        .filter_map(|w| workers.iter().find(|x| x.id == w.worker).map(|x| (w, x)))
        .collect();

    let mut assignments = Vec::with_capacity(pool.len());

    for position in positions {
        if pool.is_empty() {
            break;
        }
        let slot = position.slot();
        let name = position.name.to_lowercase();

        let mut best: Option<(usize, u32)> = None;
        for (idx, (_, worker)) in pool.iter().enumerate() {
            let mut s = scoring::base_score(worker, &slot);
            if held
                .get(&worker.id)
                .map_or(false, |prev| same_position(prev, &name))
            {
                s += HELD_BONUS;
            }
            if best.map_or(true, |(_, top)| s > top) {
                best = Some((idx, s));
            }
        }
        let Some((idx, s)) = best else {
            break;
        };

        let (window, worker) = pool.remove(idx);
        let quality = if s >= HELD_BONUS {
            MatchQuality::Best
        } else if s >= scoring::CAPABLE_SCORE {
            MatchQuality::Capable
        } else {
            MatchQuality::Fallback
        };
        let mut assignment = Assignment::new(worker, position.name.clone(), quality);
        assignment.break_rule = breaks::break_requirement(window, worker.is_minor);
        assignments.push(assignment);
    }

    for (window, worker) in pool {
        let mut assignment = Assignment::new(worker, AVAILABLE_LABEL, MatchQuality::Extra);
        assignment.break_rule = breaks::break_requirement(window, worker.is_minor);
        assignments.push(assignment);
    }

    Some(ClosingLineup {
        start: last.start,
        end: last.end,
        assignments,
    })
}

fn same_position(held: &str, name: &str) -> bool {
    !held.is_empty() && (held.contains(name) || name.contains(held))
}
