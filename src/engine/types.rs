use crate::model::{Minute, ShiftPeriod, ShiftWindow, Slot, Worker, WorkerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Options du moteur
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Plafond d'itérations de chaque passe de recherche locale.
    pub max_swap_iterations: usize,
    pub checklist_skill: String,
    /// Bonus d'attraction des équipiers "checklist" vers certains postes.
    pub checklist_boosts: BTreeMap<String, u32>,
    /// Alternatives qui ne sont pas de vrais postes de travail.
    pub non_working_markers: Vec<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_swap_iterations: 100,
            checklist_skill: "checklist".to_string(),
            checklist_boosts: BTreeMap::from([
                ("primary".to_string(), 15),
                ("secondary".to_string(), 15),
                ("breading".to_string(), 12),
            ]),
            non_working_markers: vec!["checklist".to_string(), "pre-close".to_string()],
        }
    }
}

/// Intervalle à effectif stable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub start: Minute,
    pub end: Minute,
    pub period: ShiftPeriod,
    pub working: Vec<ShiftWindow>,
}

/// Poste retenu pour un intervalle, avec sa priorité effective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlot {
    pub slot: Slot,
    pub priority: u32,
}

/// Équipier présent : sa fenêtre et sa fiche
#[derive(Debug, Clone, Copy)]
pub struct Member<'a> {
    pub window: &'a ShiftWindow,
    pub worker: &'a Worker,
}

impl<'a> Member<'a> {
    pub fn new(window: &'a ShiftWindow, worker: &'a Worker) -> Self {
        Self { window, worker }
    }
}

pub(super) fn find_member<'a, 'm>(members: &'m [Member<'a>], id: &WorkerId) -> Option<&'m Member<'a>> {
    members.iter().find(|m| &m.worker.id == id)
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("no position catalog configured: add positions before generating lineups")]
    MissingCatalog,
    #[error("position catalog is empty: no positions resolvable")]
    EmptyCatalog,
    #[error("invalid time range for worker {0}: end must be after start")]
    InvalidTimeRange(String),
    #[error("unknown worker: {0}")]
    UnknownWorker(String),
    #[error("duplicate shift window for worker {0}")]
    DuplicateWindow(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
