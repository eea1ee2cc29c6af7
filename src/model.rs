use crate::time::hhmm;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Minute de la journée (0..1440)
pub type Minute = u16;

pub const LEAD_LABEL: &str = "lead (floating)";
pub const BOOSTER_LABEL: &str = "booster (floating)";
pub const TRAINEE_LABEL: &str = "in training";
pub const EXTRA_LABEL: &str = "extra/support";
pub const AVAILABLE_LABEL: &str = "available";

/// Priorité appliquée aux postes sans priorité explicite
pub const DEFAULT_PRIORITY: u32 = 99;

/// Identifiant fort pour Worker
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Équipier et ses compétences permanentes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    #[serde(default)]
    pub positions: BTreeSet<String>,
    #[serde(default)]
    pub best_positions: BTreeSet<String>,
    #[serde(default)]
    pub is_minor: bool,
}

impl Worker {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self::with_id(WorkerId::random(), name)
    }

    pub fn with_id<N: Into<String>>(id: WorkerId, name: N) -> Self {
        Self {
            id,
            name: name.into(),
            positions: BTreeSet::new(),
            best_positions: BTreeSet::new(),
            is_minor: false,
        }
    }

    pub fn capable_at<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positions.extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn best_at<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.best_positions.extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn minor(mut self) -> Self {
        self.is_minor = true;
        self
    }

    /// Vrai si la compétence est tenue (best ou capable).
    pub fn holds(&self, skill: &str) -> bool {
        self.best_positions.contains(skill) || self.positions.contains(skill)
    }
}

/// Rôle propre à un shift (pas une compétence permanente)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftRole {
    Lead,
    Booster,
    Trainee,
}

impl ShiftRole {
    /// Ordre d'extraction du pool, et d'affichage.
    pub const ORDER: [ShiftRole; 3] = [ShiftRole::Lead, ShiftRole::Booster, ShiftRole::Trainee];

    pub fn label(self) -> &'static str {
        match self {
            ShiftRole::Lead => LEAD_LABEL,
            ShiftRole::Booster => BOOSTER_LABEL,
            ShiftRole::Trainee => TRAINEE_LABEL,
        }
    }

    pub fn quality(self) -> MatchQuality {
        match self {
            ShiftRole::Lead | ShiftRole::Booster => MatchQuality::Best,
            ShiftRole::Trainee => MatchQuality::Training,
        }
    }
}

impl FromStr for ShiftRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lead" | "shift-lead" | "shift_lead" => Ok(ShiftRole::Lead),
            "booster" => Ok(ShiftRole::Booster),
            "trainee" | "training" | "in-training" => Ok(ShiftRole::Trainee),
            other => Err(format!("unknown shift role: {other}")),
        }
    }
}

/// Fenêtre de présence d'un équipier sur la journée (minutes, [start, end))
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    pub worker: WorkerId,
    #[serde(with = "hhmm")]
    pub start: Minute,
    #[serde(with = "hhmm")]
    pub end: Minute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ShiftRole>,
}

impl ShiftWindow {
    /// Crée une fenêtre en validant que `end > start`.
    pub fn new(
        worker: WorkerId,
        start: Minute,
        end: Minute,
        role: Option<ShiftRole>,
    ) -> Result<Self, String> {
        if end <= start {
            return Err("end must be strictly after start".to_string());
        }
        Ok(Self {
            worker,
            start,
            end,
            role,
        })
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.end.saturating_sub(self.start))
    }
}

/// Segment fixe de la journée
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShiftPeriod {
    Morning,
    Lunch,
    Midday,
    Dinner,
    LateNight,
}

impl ShiftPeriod {
    pub const ALL: [ShiftPeriod; 5] = [
        ShiftPeriod::Morning,
        ShiftPeriod::Lunch,
        ShiftPeriod::Midday,
        ShiftPeriod::Dinner,
        ShiftPeriod::LateNight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftPeriod::Morning => "morning",
            ShiftPeriod::Lunch => "lunch",
            ShiftPeriod::Midday => "midday",
            ShiftPeriod::Dinner => "dinner",
            ShiftPeriod::LateNight => "lateNight",
        }
    }
}

impl fmt::Display for ShiftPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Périodes couvertes par un poste ; `All` est la sentinelle "toute la journée".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeriodFilter {
    All,
    Morning,
    Lunch,
    Midday,
    Dinner,
    LateNight,
}

impl PeriodFilter {
    pub fn matches(self, period: ShiftPeriod) -> bool {
        match self {
            PeriodFilter::All => true,
            PeriodFilter::Morning => period == ShiftPeriod::Morning,
            PeriodFilter::Lunch => period == ShiftPeriod::Lunch,
            PeriodFilter::Midday => period == ShiftPeriod::Midday,
            PeriodFilter::Dinner => period == ShiftPeriod::Dinner,
            PeriodFilter::LateNight => period == ShiftPeriod::LateNight,
        }
    }
}

impl FromStr for PeriodFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PeriodFilter::All),
            "morning" => Ok(PeriodFilter::Morning),
            "lunch" => Ok(PeriodFilter::Lunch),
            "midday" => Ok(PeriodFilter::Midday),
            "dinner" => Ok(PeriodFilter::Dinner),
            "latenight" | "late_night" | "late-night" => Ok(PeriodFilter::LateNight),
            other => Err(format!("unknown shift period: {other}")),
        }
    }
}

/// Poste exprimé comme un ensemble d'alternatives (`"a/b"` = a ou b).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    pub alternatives: Vec<String>,
}

impl Slot {
    pub fn new(alternatives: Vec<String>) -> Self {
        Self { alternatives }
    }

    pub fn parse(name: &str) -> Self {
        Self {
            alternatives: name
                .split('/')
                .map(str::trim)
                .filter(|alt| !alt.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.alternatives.first().map(String::as_str)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.alternatives.iter().any(|alt| alt == skill)
    }

    pub fn name(&self) -> String {
        self.alternatives.join("/")
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

fn all_periods() -> Vec<PeriodFilter> {
    vec![PeriodFilter::All]
}

/// Entrée du catalogue de postes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSlot {
    pub name: String,
    #[serde(default = "default_priority")]
    pub priority: u32,
    #[serde(default = "all_periods")]
    pub periods: Vec<PeriodFilter>,
    #[serde(default)]
    pub requires_closing: bool,
}

impl PositionSlot {
    pub fn new<N: Into<String>>(name: N, priority: u32) -> Self {
        Self {
            name: name.into(),
            priority,
            periods: all_periods(),
            requires_closing: false,
        }
    }

    pub fn during(mut self, periods: Vec<PeriodFilter>) -> Self {
        self.periods = periods;
        self
    }

    pub fn closing(mut self) -> Self {
        self.requires_closing = true;
        self
    }

    pub fn slot(&self) -> Slot {
        Slot::parse(&self.name)
    }

    pub fn applies_to(&self, period: ShiftPeriod) -> bool {
        self.periods.iter().any(|filter| filter.matches(period))
    }
}

/// Postes à tenir à la fermeture, triés par priorité (tri stable).
pub fn closing_positions(positions: &[PositionSlot]) -> Vec<&PositionSlot> {
    let mut out: Vec<&PositionSlot> = positions.iter().filter(|p| p.requires_closing).collect();
    out.sort_by_key(|p| p.priority);
    out
}

/// Qualité de l'adéquation équipier/poste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    Best,
    Capable,
    Fallback,
    Extra,
    Training,
}

impl MatchQuality {
    /// Classement à partir du score de base (sans bonus).
    pub fn from_base_score(score: u32) -> Self {
        if score >= 10 {
            MatchQuality::Best
        } else if score >= 5 {
            MatchQuality::Capable
        } else {
            MatchQuality::Fallback
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchQuality::Best => "best",
            MatchQuality::Capable => "capable",
            MatchQuality::Fallback => "fallback",
            MatchQuality::Extra => "extra",
            MatchQuality::Training => "training",
        }
    }
}

impl fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pause due selon les heures travaillées
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakRequirement {
    #[default]
    None,
    Optional,
    Required,
}

impl fmt::Display for BreakRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BreakRequirement::None => "none",
            BreakRequirement::Optional => "optional",
            BreakRequirement::Required => "required",
        })
    }
}

/// Affectation d'un équipier à un poste sur un intervalle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub worker: WorkerId,
    pub worker_name: String,
    pub position: String,
    pub quality: MatchQuality,
    #[serde(default)]
    pub break_rule: BreakRequirement,
}

impl Assignment {
    pub fn new<P: Into<String>>(worker: &Worker, position: P, quality: MatchQuality) -> Self {
        Self {
            worker: worker.id.clone(),
            worker_name: worker.name.clone(),
            position: position.into(),
            quality,
            break_rule: BreakRequirement::None,
        }
    }

    /// Affectation en compétition normale (ni flottant, ni formation, ni extra).
    pub fn is_ordinary(&self) -> bool {
        !matches!(self.quality, MatchQuality::Extra | MatchQuality::Training)
            && !self.position.ends_with("(floating)")
    }
}

/// Intervalle de staffing stable et ses affectations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    #[serde(with = "hhmm")]
    pub start: Minute,
    #[serde(with = "hhmm")]
    pub end: Minute,
    pub period: ShiftPeriod,
    pub assignments: Vec<Assignment>,
    pub extra: usize,
}

/// Roster de fermeture, dérivé du dernier intervalle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingLineup {
    #[serde(with = "hhmm")]
    pub start: Minute,
    #[serde(with = "hhmm")]
    pub end: Minute,
    pub assignments: Vec<Assignment>,
}

/// Résultat complet d'une génération
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerationOutput {
    pub lineups: Vec<Lineup>,
    pub closing: Option<ClosingLineup>,
}

/// Dernier poste de base par équipier, reporté d'un intervalle au suivant
pub type PreviousPositions = BTreeMap<WorkerId, String>;

/// Entrées d'une journée
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DayPlan {
    pub workers: Vec<Worker>,
    pub shifts: Vec<ShiftWindow>,
    #[serde(default)]
    pub positions: Option<Vec<PositionSlot>>,
}

impl DayPlan {
    pub fn find_worker_by_id<'a>(&'a self, id: &WorkerId) -> Option<&'a Worker> {
        self.workers.iter().find(|w| &w.id == id)
    }
}
