use super::{scoring, EngineOptions, Member, ResolvedSlot};
use crate::model::{
    Assignment, MatchQuality, PreviousPositions, ShiftRole, EXTRA_LABEL,
};

/// Remplissage glouton d'un intervalle.
///
/// Ordre produit : leads, boosters, formations, postes par priorité, puis extras.
pub(super) fn assign_interval(
    members: &[Member<'_>],
    slots: &[ResolvedSlot],
    previous: &PreviousPositions,
    opts: &EngineOptions,
) -> Vec<Assignment> {
    let mut out = Vec::with_capacity(members.len());

    for role in ShiftRole::ORDER {
        out.extend(
            members
                .iter()
                .filter(|m| m.window.role == Some(role))
                .map(|m| Assignment::new(m.worker, role.label(), role.quality())),
        );
    }

    let mut pool: Vec<Member<'_>> = members
        .iter()
        .filter(|m| m.window.role.is_none())
        .copied()
        .collect();

    for resolved in slots {
        if pool.is_empty() {
            break;
        }

        // premier rencontré gagne en cas d'égalité
        let mut best: Option<(usize, u32)> = None;
        for (idx, member) in pool.iter().enumerate() {
            let prev = previous.get(&member.worker.id).map(String::as_str);
            let s = scoring::score(member.worker, &resolved.slot, true, prev, opts);
            if best.map_or(true, |(_, top)| s > top) {
                best = Some((idx, s));
            }
        }

        let (idx, quality) = match best {
            Some((idx, s)) if s > 0 => {
                let base = scoring::base_score(pool[idx].worker, &resolved.slot);
                (idx, MatchQuality::from_base_score(base))
            }
            // personne ne convient : on prend le premier du pool
            _ => (0, MatchQuality::Fallback),
        };

        let member = pool.remove(idx);
        out.push(Assignment::new(member.worker, resolved.slot.name(), quality));
    }

    out.extend(
        pool.iter()
            .map(|m| Assignment::new(m.worker, EXTRA_LABEL, MatchQuality::Extra)),
    );
    out
}
