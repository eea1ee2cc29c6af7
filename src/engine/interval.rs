use super::{period, Interval};
use crate::model::{Minute, ShiftWindow};
use crate::time::format_hhmm;
use std::collections::BTreeSet;
use tracing::debug;

/// Découpe la journée aux points de changement (débuts et fins de fenêtres).
pub(super) fn partition(windows: &[ShiftWindow]) -> Vec<Interval> {
    let marks: Vec<Minute> = windows
        .iter()
        .flat_map(|w| [w.start, w.end])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    marks
        .windows(2)
        .filter_map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let working: Vec<ShiftWindow> = windows
                .iter()
                .filter(|w| w.start <= start && start < w.end)
                .cloned()
                .collect();

            if working.is_empty() {
                debug!(start = %format_hhmm(start), end = %format_hhmm(end), "skipping interval: nobody working");
                return None;
            }

            let Some(period) = period::classify(start) else {
                debug!(start = %format_hhmm(start), end = %format_hhmm(end), "skipping interval: outside shift periods");
                return None;
            };

            Some(Interval {
                start,
                end,
                period,
                working,
            })
        })
        .collect()
}
