mod breaks;
mod closing;
mod greedy;
mod interval;
mod optimize;
mod period;
mod resolver;
mod scoring;
mod types;

pub use scoring::{BEST_SCORE, CAPABLE_SCORE, CONTINUITY_BONUS};
pub use types::{EngineError, EngineOptions, Interval, Member, ResolvedSlot};

use crate::model::{
    Assignment, BreakRequirement, ClosingLineup, DayPlan, GenerationOutput, Lineup, MatchQuality,
    Minute, PositionSlot, PreviousPositions, ShiftPeriod, ShiftWindow, Slot, Worker,
};
use crate::time::format_hhmm;
use std::collections::HashSet;
use tracing::debug;

/// Moteur de lineups : fonction pure des entrées et de l'état reporté.
#[derive(Debug, Clone, Default)]
pub struct LineupEngine {
    options: EngineOptions,
}

impl LineupEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn partition(&self, windows: &[ShiftWindow]) -> Vec<Interval> {
        interval::partition(windows)
    }

    pub fn classify(&self, minute: Minute) -> Option<ShiftPeriod> {
        period::classify(minute)
    }

    /// Postes applicables à la période, triés par priorité effective.
    pub fn resolve_positions(
        &self,
        catalog: &[PositionSlot],
        period: ShiftPeriod,
    ) -> Result<Vec<ResolvedSlot>, EngineError> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        Ok(resolver::resolve_positions(catalog, period, &self.options))
    }

    pub fn score(
        &self,
        worker: &Worker,
        slot: &Slot,
        boost_checklist: bool,
        previous: Option<&str>,
    ) -> u32 {
        scoring::score(worker, slot, boost_checklist, previous, &self.options)
    }

    pub fn assign_interval(
        &self,
        members: &[Member<'_>],
        slots: &[ResolvedSlot],
        previous: &PreviousPositions,
    ) -> Vec<Assignment> {
        greedy::assign_interval(members, slots, previous, &self.options)
    }

    pub fn pairwise_pass(
        &self,
        assignments: &[Assignment],
        members: &[Member<'_>],
    ) -> (Vec<Assignment>, usize) {
        optimize::pairwise_pass(assignments, members)
    }

    pub fn extraction_pass(
        &self,
        assignments: &[Assignment],
        members: &[Member<'_>],
    ) -> (Vec<Assignment>, usize) {
        optimize::extraction_pass(assignments, members)
    }

    pub fn optimize(&self, assignments: Vec<Assignment>, members: &[Member<'_>]) -> Vec<Assignment> {
        optimize::optimize(assignments, members, &self.options)
    }

    pub fn break_requirement(&self, window: &ShiftWindow, is_minor: bool) -> BreakRequirement {
        breaks::break_requirement(window, is_minor)
    }

    pub fn evaluate_breaks(
        &self,
        assignments: Vec<Assignment>,
        members: &[Member<'_>],
    ) -> Vec<Assignment> {
        breaks::evaluate_breaks(assignments, members)
    }

    /// Roster de fermeture ; `None` sans lineup ou sans poste de fermeture.
    pub fn build_closing(&self, lineups: &[Lineup], plan: &DayPlan) -> Option<ClosingLineup> {
        let catalog = plan.positions.as_deref()?;
        closing::build_closing(lineups, &plan.shifts, &plan.workers, catalog)
    }

    pub fn generate(&self, plan: &DayPlan) -> Result<GenerationOutput, EngineError> {
        self.generate_from(plan, PreviousPositions::new())
            .map(|(output, _)| output)
    }

    /// Génère la journée en partant d'un état de continuité existant,
    /// et renvoie l'état mis à jour.
    pub fn generate_from(
        &self,
        plan: &DayPlan,
        previous: PreviousPositions,
    ) -> Result<(GenerationOutput, PreviousPositions), EngineError> {
        let catalog = plan
            .positions
            .as_deref()
            .ok_or(EngineError::MissingCatalog)?;
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        validate_windows(plan)?;

        let mut previous = previous;
        let mut lineups = Vec::new();

        for interval in interval::partition(&plan.shifts) {
            let slots = resolver::resolve_positions(catalog, interval.period, &self.options);
            if slots.is_empty() {
                debug!(
                    start = %format_hhmm(interval.start),
                    period = %interval.period,
                    "skipping interval: no positions resolved"
                );
                continue;
            }

            let members = members_of(plan, &interval.working)?;
            debug!(
                start = %format_hhmm(interval.start),
                end = %format_hhmm(interval.end),
                period = %interval.period,
                workers = members.len(),
                slots = slots.len(),
                "filling interval"
            );

            let assignments = greedy::assign_interval(&members, &slots, &previous, &self.options);
            let assignments = optimize::optimize(assignments, &members, &self.options);
            let assignments = breaks::evaluate_breaks(assignments, &members);
            previous = carry_forward(previous, &assignments);

            let extra = assignments
                .iter()
                .filter(|a| a.quality == MatchQuality::Extra)
                .count();
            lineups.push(Lineup {
                start: interval.start,
                end: interval.end,
                period: interval.period,
                assignments,
                extra,
            });
        }

        let closing = closing::build_closing(&lineups, &plan.shifts, &plan.workers, catalog);
        Ok((GenerationOutput { lineups, closing }, previous))
    }
}

/// Associe chaque fenêtre présente à la fiche de l'équipier.
pub fn members_of<'a>(
    plan: &'a DayPlan,
    working: &'a [ShiftWindow],
) -> Result<Vec<Member<'a>>, EngineError> {
    working
        .iter()
        .map(|window| {
            plan.find_worker_by_id(&window.worker)
                .map(|worker| Member::new(window, worker))
                .ok_or_else(|| EngineError::UnknownWorker(window.worker.to_string()))
        })
        .collect()
}

fn validate_windows(plan: &DayPlan) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for window in &plan.shifts {
        if window.end <= window.start {
            return Err(EngineError::InvalidTimeRange(window.worker.to_string()));
        }
        if plan.find_worker_by_id(&window.worker).is_none() {
            return Err(EngineError::UnknownWorker(window.worker.to_string()));
        }
        if !seen.insert(&window.worker) {
            return Err(EngineError::DuplicateWindow(window.worker.to_string()));
        }
    }
    Ok(())
}

fn carry_forward(mut previous: PreviousPositions, assignments: &[Assignment]) -> PreviousPositions {
    for a in assignments {
        previous.insert(a.worker.clone(), a.position.clone());
    }
    previous
}

