#![forbid(unsafe_code)]
use lineup::{
    engine::LineupEngine,
    model::{BreakRequirement, ShiftWindow, WorkerId},
};

fn shift_of(minutes: u16) -> ShiftWindow {
    ShiftWindow::new(WorkerId::new("w"), 600, 600 + minutes, None).unwrap()
}

#[test]
fn adult_thresholds() {
    let engine = LineupEngine::default();
    // 7.4h, 7.6h, 7h pile, 6h
    assert_eq!(engine.break_requirement(&shift_of(444), false), BreakRequirement::Optional);
    assert_eq!(engine.break_requirement(&shift_of(456), false), BreakRequirement::Required);
    assert_eq!(engine.break_requirement(&shift_of(420), false), BreakRequirement::Optional);
    assert_eq!(engine.break_requirement(&shift_of(360), false), BreakRequirement::None);
}

#[test]
fn minor_thresholds() {
    let engine = LineupEngine::default();
    // 4.6h, 3.9h, 4h pile
    assert_eq!(engine.break_requirement(&shift_of(276), true), BreakRequirement::Required);
    assert_eq!(engine.break_requirement(&shift_of(234), true), BreakRequirement::None);
    assert_eq!(engine.break_requirement(&shift_of(240), true), BreakRequirement::Optional);
}
