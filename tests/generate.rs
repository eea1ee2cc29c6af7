#![forbid(unsafe_code)]
use lineup::{
    engine::{EngineError, LineupEngine},
    model::{
        BreakRequirement, DayPlan, MatchQuality, PositionSlot, ShiftPeriod, ShiftRole, ShiftWindow,
        Slot, Worker, WorkerId,
    },
    time::parse_hhmm,
};
use std::collections::HashSet;

const POSITIONS: [&str; 6] = ["primary", "secondary", "breading", "machines", "fries", "buns"];

fn at(hhmm: &str) -> u16 {
    parse_hhmm(hhmm).unwrap()
}

fn window(id: &str, start: &str, end: &str) -> ShiftWindow {
    ShiftWindow::new(WorkerId::new(id), at(start), at(end), None).unwrap()
}

fn catalog() -> Vec<PositionSlot> {
    POSITIONS
        .iter()
        .enumerate()
        .map(|(idx, name)| PositionSlot::new(*name, idx as u32 + 1))
        .collect()
}

/// Six adultes 10:00–18:00, chacun meilleur sur un poste différent.
fn six_worker_plan() -> DayPlan {
    let workers: Vec<Worker> = POSITIONS
        .iter()
        .enumerate()
        .map(|(idx, best)| {
            let next = POSITIONS[(idx + 1) % POSITIONS.len()];
            Worker::with_id(WorkerId::new(format!("w{}", idx + 1)), format!("Worker {}", idx + 1))
                .best_at([*best])
                .capable_at([next])
        })
        .collect();
    let shifts = workers
        .iter()
        .map(|w| window(w.id.as_str(), "10:00", "18:00"))
        .collect();
    DayPlan {
        workers,
        shifts,
        positions: Some(catalog()),
    }
}

fn staggered_plan() -> DayPlan {
    let workers = vec![
        Worker::with_id(WorkerId::new("ana"), "Ana").best_at(["primary"]).capable_at(["fries"]),
        Worker::with_id(WorkerId::new("ben"), "Ben").best_at(["secondary"]),
        Worker::with_id(WorkerId::new("cam"), "Cam").capable_at(["primary", "breading"]),
        Worker::with_id(WorkerId::new("dee"), "Dee").best_at(["fries", "buns"]).minor(),
        Worker::with_id(WorkerId::new("eli"), "Eli"),
        Worker::with_id(WorkerId::new("fay"), "Fay").best_at(["machines"]),
    ];
    let mut lead = window("fay", "11:00", "19:00");
    lead.role = Some(ShiftRole::Lead);
    let shifts = vec![
        window("ana", "07:00", "15:00"),
        window("ben", "09:00", "13:30"),
        window("cam", "10:30", "18:00"),
        window("dee", "16:00", "20:00"),
        window("eli", "12:00", "21:00"),
        lead,
    ];
    DayPlan {
        workers,
        shifts,
        positions: Some(catalog()),
    }
}

#[test]
fn six_workers_fill_six_positions() {
    let engine = LineupEngine::default();
    let output = engine.generate(&six_worker_plan()).unwrap();

    assert_eq!(output.lineups.len(), 1);
    let lineup = &output.lineups[0];
    assert_eq!(lineup.start, at("10:00"));
    assert_eq!(lineup.end, at("18:00"));
    assert_eq!(lineup.period, ShiftPeriod::Morning);
    assert_eq!(lineup.assignments.len(), 6);
    assert_eq!(lineup.extra, 0);

    let positions: Vec<&str> = lineup.assignments.iter().map(|a| a.position.as_str()).collect();
    assert_eq!(positions, POSITIONS.to_vec());
    for (idx, assignment) in lineup.assignments.iter().enumerate() {
        assert_eq!(assignment.worker.as_str(), format!("w{}", idx + 1));
        assert_eq!(assignment.quality, MatchQuality::Best);
        assert_eq!(assignment.break_rule, BreakRequirement::Required);
    }
    assert!(output.closing.is_none());
}

#[test]
fn every_present_worker_is_assigned_exactly_once() {
    let plan = staggered_plan();
    let output = LineupEngine::default().generate(&plan).unwrap();
    assert!(output.lineups.len() > 3);

    for lineup in &output.lineups {
        let present = plan
            .shifts
            .iter()
            .filter(|w| w.start <= lineup.start && lineup.start < w.end)
            .count();
        assert_eq!(lineup.assignments.len(), present);

        let unique: HashSet<&WorkerId> = lineup.assignments.iter().map(|a| &a.worker).collect();
        assert_eq!(unique.len(), lineup.assignments.len());

        let extras = lineup
            .assignments
            .iter()
            .filter(|a| a.quality == MatchQuality::Extra)
            .count();
        assert_eq!(lineup.extra, extras);
    }
}

#[test]
fn intervals_are_contiguous_across_the_day() {
    let output = LineupEngine::default().generate(&staggered_plan()).unwrap();

    assert_eq!(output.lineups[0].start, at("07:00"));
    for pair in output.lineups.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    let last = output.lineups.last().unwrap();
    assert_eq!(last.end, at("21:00"));
    assert_eq!(last.period, ShiftPeriod::LateNight);
}

#[test]
fn quality_follows_unboosted_base_score() {
    let plan = staggered_plan();
    let engine = LineupEngine::default();
    let output = engine.generate(&plan).unwrap();

    for assignment in output.lineups.iter().flat_map(|l| l.assignments.iter()) {
        if !assignment.is_ordinary() {
            continue;
        }
        let worker = plan.find_worker_by_id(&assignment.worker).unwrap();
        let base = engine.score(worker, &Slot::parse(&assignment.position), false, None);
        assert_eq!(assignment.quality, MatchQuality::from_base_score(base));
    }
}

#[test]
fn lead_is_floating_and_listed_first() {
    let output = LineupEngine::default().generate(&staggered_plan()).unwrap();
    let lineup = output
        .lineups
        .iter()
        .find(|l| l.start == at("12:00"))
        .unwrap();
    let first = &lineup.assignments[0];
    assert_eq!(first.worker.as_str(), "fay");
    assert_eq!(first.position, "lead (floating)");
    assert_eq!(first.quality, MatchQuality::Best);
}

#[test]
fn generation_is_deterministic() {
    let plan = staggered_plan();
    let engine = LineupEngine::default();
    let first = engine.generate(&plan).unwrap();
    let second = engine.generate(&plan).unwrap();
    assert_eq!(first, second);
}

#[test]
fn break_flags_use_the_whole_shift_window() {
    let output = LineupEngine::default().generate(&staggered_plan()).unwrap();
    let lineup = output
        .lineups
        .iter()
        .find(|l| l.start == at("16:00"))
        .unwrap();
    let rule_of = |id: &str| {
        lineup
            .assignments
            .iter()
            .find(|a| a.worker.as_str() == id)
            .map(|a| a.break_rule)
            .unwrap()
    };
    // mineure 4h -> optionnelle ; adulte 9h -> obligatoire ; adulte 7h30 -> obligatoire
    assert_eq!(rule_of("dee"), BreakRequirement::Optional);
    assert_eq!(rule_of("eli"), BreakRequirement::Required);
    assert_eq!(rule_of("cam"), BreakRequirement::Required);
}

#[test]
fn missing_catalog_is_signaled() {
    let mut plan = six_worker_plan();
    plan.positions = None;
    let err = LineupEngine::default().generate(&plan).unwrap_err();
    assert!(matches!(err, EngineError::MissingCatalog));
}

#[test]
fn empty_catalog_is_signaled() {
    let mut plan = six_worker_plan();
    plan.positions = Some(Vec::new());
    let err = LineupEngine::default().generate(&plan).unwrap_err();
    assert!(matches!(err, EngineError::EmptyCatalog));
}

#[test]
fn unknown_and_duplicate_workers_are_rejected() {
    let mut plan = six_worker_plan();
    plan.shifts.push(window("ghost", "10:00", "12:00"));
    let err = LineupEngine::default().generate(&plan).unwrap_err();
    assert!(matches!(err, EngineError::UnknownWorker(id) if id == "ghost"));

    let mut plan = six_worker_plan();
    plan.shifts.push(window("w1", "18:00", "20:00"));
    let err = LineupEngine::default().generate(&plan).unwrap_err();
    assert!(matches!(err, EngineError::DuplicateWindow(id) if id == "w1"));
}

#[test]
fn shifts_outside_shift_periods_produce_nothing() {
    let mut plan = six_worker_plan();
    plan.shifts = vec![window("w1", "04:00", "06:00")];
    let output = LineupEngine::default().generate(&plan).unwrap();
    assert!(output.lineups.is_empty());
    assert!(output.closing.is_none());
}

#[test]
fn surplus_workers_become_extras() {
    let mut plan = six_worker_plan();
    plan.positions = Some(vec![
        PositionSlot::new("primary", 1),
        PositionSlot::new("secondary", 2),
    ]);
    let output = LineupEngine::default().generate(&plan).unwrap();
    let lineup = &output.lineups[0];
    assert_eq!(lineup.assignments.len(), 6);
    assert_eq!(lineup.extra, 4);
    assert!(lineup.assignments[2..]
        .iter()
        .all(|a| a.position == "extra/support" && a.quality == MatchQuality::Extra));
}

#[test]
fn generate_from_returns_carried_positions() {
    let plan = six_worker_plan();
    let (_, carried) = LineupEngine::default()
        .generate_from(&plan, Default::default())
        .unwrap();
    assert_eq!(carried.get(&WorkerId::new("w3")).map(String::as_str), Some("breading"));
    assert_eq!(carried.len(), 6);
}
