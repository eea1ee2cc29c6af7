use super::{scoring, types::find_member, EngineOptions, Member};
use crate::model::{Assignment, MatchQuality, Slot};
use tracing::{debug, warn};

/// Applique les deux passes de réparation, chacune jusqu'au point fixe ou au plafond.
pub(super) fn optimize(
    assignments: Vec<Assignment>,
    members: &[Member<'_>],
    opts: &EngineOptions,
) -> Vec<Assignment> {
    let cap = opts.max_swap_iterations;
    let current = run_to_fixpoint("pairwise", assignments, cap, |list| {
        pairwise_pass(list, members)
    });
    run_to_fixpoint("extraction", current, cap, |list| {
        extraction_pass(list, members)
    })
}

fn run_to_fixpoint<F>(pass: &str, mut current: Vec<Assignment>, cap: usize, step: F) -> Vec<Assignment>
where
    F: Fn(&[Assignment]) -> (Vec<Assignment>, usize),
{
    let mut total = 0usize;
    for iteration in 0..cap {
        let (next, swaps) = step(&current);
        current = next;
        total += swaps;
        if swaps == 0 {
            debug!(pass, iterations = iteration + 1, swaps = total, "optimizer pass converged");
            return current;
        }
    }
    warn!(pass, cap, swaps = total, "optimizer pass hit its iteration cap");
    current
}

/// Échange deux à deux les affectations ordinaires quand la paire y gagne
/// en nombre de `best`, ou à égalité en score cumulé.
pub(super) fn pairwise_pass(
    assignments: &[Assignment],
    members: &[Member<'_>],
) -> (Vec<Assignment>, usize) {
    let mut next = assignments.to_vec();
    let ordinary: Vec<usize> = next
        .iter()
        .enumerate()
        .filter(|(_, a)| a.is_ordinary())
        .map(|(idx, _)| idx)
        .collect();
    let mut swaps = 0usize;

    for (n, &i) in ordinary.iter().enumerate() {
        for &j in ordinary.iter().skip(n + 1) {
            let (Some(mi), Some(mj)) = (
                find_member(members, &next[i].worker),
                find_member(members, &next[j].worker),
            ) else {
                continue;
            };
            let slot_i = Slot::parse(&next[i].position);
            let slot_j = Slot::parse(&next[j].position);

            let stay_i = scoring::base_score(mi.worker, &slot_i);
            let stay_j = scoring::base_score(mj.worker, &slot_j);
            let moved_i = scoring::base_score(mi.worker, &slot_j);
            let moved_j = scoring::base_score(mj.worker, &slot_i);

            let before = best_count(stay_i, stay_j);
            let after = best_count(moved_i, moved_j);
            let improves =
                after > before || (after == before && moved_i + moved_j > stay_i + stay_j);
            if !improves {
                continue;
            }

            exchange_workers(&mut next, i, j);
            next[i].quality = MatchQuality::from_base_score(moved_j);
            next[j].quality = MatchQuality::from_base_score(moved_i);
            swaps += 1;
        }
    }

    (next, swaps)
}

/// Remplace un titulaire non-`best` par un extra qui serait `best` au poste.
pub(super) fn extraction_pass(
    assignments: &[Assignment],
    members: &[Member<'_>],
) -> (Vec<Assignment>, usize) {
    let mut next = assignments.to_vec();
    let mut swaps = 0usize;

    for i in 0..next.len() {
        if !next[i].is_ordinary() || next[i].quality == MatchQuality::Best {
            continue;
        }
        let slot = Slot::parse(&next[i].position);
        let candidate = (0..next.len()).find(|&k| {
            next[k].quality == MatchQuality::Extra
                && find_member(members, &next[k].worker)
                    .map_or(false, |m| scoring::base_score(m.worker, &slot) >= scoring::BEST_SCORE)
        });
        let Some(k) = candidate else {
            continue;
        };

        exchange_workers(&mut next, i, k);
        next[i].quality = MatchQuality::Best;
        next[k].quality = MatchQuality::Extra;
        swaps += 1;
    }

    (next, swaps)
}

fn best_count(a: u32, b: u32) -> u8 {
    u8::from(a >= scoring::BEST_SCORE) + u8::from(b >= scoring::BEST_SCORE)
}

/// Échange les équipiers de deux affectations ; les postes restent en place.
fn exchange_workers(list: &mut [Assignment], i: usize, j: usize) {
    if i == j {
        return;
    }
    let (lo, hi) = (i.min(j), i.max(j));
    let (left, right) = list.split_at_mut(hi);
    let (a, b) = (&mut left[lo], &mut right[0]);
    std::mem::swap(&mut a.worker, &mut b.worker);
    std::mem::swap(&mut a.worker_name, &mut b.worker_name);
    std::mem::swap(&mut a.break_rule, &mut b.break_rule);
}
