use crate::model::{closing_positions, PositionSlot};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Catalogue de postes d'un restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionCatalog {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub positions: Vec<PositionSlot>,
}

impl PositionCatalog {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            bail!("catalog id cannot be empty");
        }
        if self.name.trim().is_empty() {
            bail!("catalog name cannot be empty");
        }
        if self.positions.is_empty() {
            bail!("catalog must contain at least one position");
        }
        let mut seen = HashSet::new();
        for position in &self.positions {
            validate_position(position)?;
            if !seen.insert(position.name.as_str()) {
                bail!("catalog contains duplicate position {}", position.name);
            }
        }
        Ok(())
    }

    /// Postes de fermeture, par priorité.
    pub fn closing_positions(&self) -> Vec<&PositionSlot> {
        closing_positions(&self.positions)
    }
}

fn validate_position(position: &PositionSlot) -> Result<()> {
    if position.name.trim().is_empty() {
        bail!("position name cannot be empty");
    }
    if position.name.split('/').any(|alt| alt.trim().is_empty()) {
        bail!("position {} has an empty alternative", position.name);
    }
    if position.periods.is_empty() {
        bail!("position {} must apply to at least one period", position.name);
    }
    Ok(())
}

pub fn export_catalog_json<P: AsRef<Path>>(path: P, catalog: &PositionCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_catalog_from_file<P: AsRef<Path>>(path: P) -> Result<PositionCatalog> {
    let data = fs::read(&path)?;
    let catalog: PositionCatalog = serde_json::from_slice(&data)?;
    catalog.validate()?;
    Ok(catalog)
}
