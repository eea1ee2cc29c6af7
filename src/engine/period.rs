use crate::model::{Minute, ShiftPeriod};

// [start, end) en minutes
const PERIOD_RANGES: [(ShiftPeriod, Minute, Minute); 5] = [
    (ShiftPeriod::Morning, 360, 630),
    (ShiftPeriod::Lunch, 630, 840),
    (ShiftPeriod::Midday, 840, 1020),
    (ShiftPeriod::Dinner, 1020, 1200),
    (ShiftPeriod::LateNight, 1200, 1320),
];

pub(super) fn classify(minute: Minute) -> Option<ShiftPeriod> {
    PERIOD_RANGES
        .iter()
        .find(|(_, start, end)| *start <= minute && minute < *end)
        .map(|(period, _, _)| *period)
}
