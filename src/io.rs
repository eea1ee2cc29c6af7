use crate::engine::EngineOptions;
use crate::model::{
    DayPlan, GenerationOutput, PeriodFilter, PositionSlot, PreviousPositions, ShiftRole,
    ShiftWindow, Worker, WorkerId, DEFAULT_PRIORITY,
};
use crate::time::parse_hhmm;
use anyhow::{bail, Context};
use csv::ReaderBuilder;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Import d'équipiers depuis CSV: header `id,name,positions,best_positions[,is_minor]`
/// (compétences séparées par `;`, id vide = id aléatoire)
pub fn import_workers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Worker>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid worker row (empty name)");
        }
        let id = if id.is_empty() {
            WorkerId::random()
        } else {
            WorkerId::new(id)
        };
        let mut worker = Worker::with_id(id, name)
            .capable_at(parse_list(rec.get(2).unwrap_or("")))
            .best_at(parse_list(rec.get(3).unwrap_or("")));
        if let Some(flag) = rec.get(4) {
            let flag = flag.trim();
            if !flag.is_empty() {
                worker.is_minor = parse_bool(flag)
                    .with_context(|| format!("invalid is_minor value for worker {name}"))?;
            }
        }
        out.push(worker);
    }
    Ok(out)
}

/// Import des fenêtres de shift: header `worker_id,start,end[,role]` (heures `HH:MM`)
pub fn import_shifts_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ShiftWindow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let worker = rec.get(0).context("missing worker_id")?.trim();
        let start = rec.get(1).context("missing start")?.trim();
        let end = rec.get(2).context("missing end")?.trim();
        let start = parse_hhmm(start).with_context(|| format!("start HH:MM for {worker}"))?;
        let end = parse_hhmm(end).with_context(|| format!("end HH:MM for {worker}"))?;
        let role = match rec.get(3).map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                Some(raw.parse::<ShiftRole>().map_err(anyhow::Error::msg)?)
            }
            _ => None,
        };
        let window =
            ShiftWindow::new(WorkerId::new(worker), start, end, role).map_err(anyhow::Error::msg)?;
        out.push(window);
    }
    Ok(out)
}

/// Import du catalogue de postes: header `name,priority[,periods][,requires_closing]`
pub fn import_positions_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<PositionSlot>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid position row (empty name)");
        }
        let priority = match rec.get(1).map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<u32>()
                .with_context(|| format!("invalid priority for position {name}"))?,
            _ => DEFAULT_PRIORITY,
        };
        let mut position = PositionSlot::new(name, priority);
        let periods = parse_list(rec.get(2).unwrap_or(""));
        if !periods.is_empty() {
            position.periods = periods
                .iter()
                .map(|p| p.parse::<PeriodFilter>().map_err(anyhow::Error::msg))
                .collect::<anyhow::Result<_>>()
                .with_context(|| format!("invalid periods for position {name}"))?;
        }
        if let Some(flag) = rec.get(3) {
            let flag = flag.trim();
            if !flag.is_empty() {
                position.requires_closing = parse_bool(flag)
                    .with_context(|| format!("invalid requires_closing for position {name}"))?;
            }
        }
        out.push(position);
    }
    Ok(out)
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "oui" => Ok(true),
        "false" | "0" | "no" | "n" | "non" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// Charge une journée complète (équipiers, fenêtres, catalogue optionnel)
pub fn load_plan_json<P: AsRef<Path>>(path: P) -> anyhow::Result<DayPlan> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let plan: DayPlan = serde_json::from_slice(&data)
        .with_context(|| format!("parsing day plan {}", path.display()))?;
    Ok(plan)
}

pub fn load_options_json<P: AsRef<Path>>(path: P) -> anyhow::Result<EngineOptions> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing options {}", path.display()))
}

pub fn load_previous_json<P: AsRef<Path>>(path: P) -> anyhow::Result<PreviousPositions> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data)
        .with_context(|| format!("parsing previous positions {}", path.display()))
}

/// Export JSON du résultat (écriture atomique)
pub fn export_output_json<P: AsRef<Path>>(path: P, output: &GenerationOutput) -> anyhow::Result<()> {
    write_json_atomic(path.as_ref(), output)
}

pub fn export_previous_json<P: AsRef<Path>>(
    path: P,
    previous: &PreviousPositions,
) -> anyhow::Result<()> {
    write_json_atomic(path.as_ref(), previous)
}

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(value)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
