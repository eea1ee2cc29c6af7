use super::{types::find_member, Member};
use crate::model::{Assignment, BreakRequirement, ShiftWindow};

// seuils en minutes : (obligatoire, optionnelle)
const MINOR_THRESHOLDS: (u32, u32) = (270, 240);
const ADULT_THRESHOLDS: (u32, u32) = (450, 420);

/// Pause due sur la fenêtre complète de l'équipier (pas sur l'intervalle).
pub(super) fn break_requirement(window: &ShiftWindow, is_minor: bool) -> BreakRequirement {
    let worked = window.duration_minutes();
    let (required, optional) = if is_minor {
        MINOR_THRESHOLDS
    } else {
        ADULT_THRESHOLDS
    };
    if worked >= required {
        BreakRequirement::Required
    } else if worked >= optional {
        BreakRequirement::Optional
    } else {
        BreakRequirement::None
    }
}

pub(super) fn evaluate_breaks(
    assignments: Vec<Assignment>,
    members: &[Member<'_>],
) -> Vec<Assignment> {
    assignments
        .into_iter()
        .map(|mut a| {
            if let Some(member) = find_member(members, &a.worker) {
                a.break_rule = break_requirement(member.window, member.worker.is_minor);
            }
            a
        })
        .collect()
}
