#![forbid(unsafe_code)]
//! Lineup — moteur d'affectation des équipiers aux postes sur une journée.
//!
//! - Découpage de la journée en intervalles à effectif stable.
//! - Remplissage glouton par priorité, puis réparation par échanges bornés.
//! - Pauses obligatoires/optionnelles et roster de fermeture.
//! - Heures en minutes de la journée ; entrées/sorties `HH:MM` (JSON/CSV).

pub mod catalog;
pub mod engine;
pub mod io;
pub mod model;
pub mod report;
pub mod time;

pub use catalog::{export_catalog_json, load_catalog_from_file, PositionCatalog};
pub use engine::{EngineError, EngineOptions, Interval, LineupEngine, Member, ResolvedSlot};
pub use model::{
    Assignment, BreakRequirement, ClosingLineup, DayPlan, GenerationOutput, Lineup, MatchQuality,
    PeriodFilter, PositionSlot, PreviousPositions, ShiftPeriod, ShiftRole, ShiftWindow, Slot,
    Worker, WorkerId,
};
pub use report::{render_generation, LineupRenderer, TextLineup};
