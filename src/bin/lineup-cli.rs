#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lineup::{
    catalog::load_catalog_from_file,
    engine::{EngineOptions, LineupEngine},
    io,
    model::{DayPlan, PreviousPositions, ShiftPeriod},
    report::{render_generation, TextLineup},
    time::format_hhmm,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de génération de lineups (postes par intervalle)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Options du moteur (JSON)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer les lineups de la journée
    Generate {
        /// Journée complète en JSON (équipiers, fenêtres, postes)
        #[arg(long)]
        plan: Option<String>,
        #[arg(long)]
        workers: Option<String>,
        #[arg(long)]
        shifts: Option<String>,
        /// Catalogue de postes (JSON)
        #[arg(long)]
        catalog: Option<String>,
        /// Catalogue de postes (CSV)
        #[arg(long)]
        positions: Option<String>,
        /// Postes précédents par équipier (JSON)
        #[arg(long)]
        previous: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        save_previous: Option<String>,
    },

    /// Afficher les pauses dues par équipier
    Breaks {
        #[arg(long)]
        workers: String,
        #[arg(long)]
        shifts: String,
    },

    /// Valider un catalogue et afficher l'ordre de remplissage par période
    CheckCatalog {
        #[arg(long)]
        catalog: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let options = match &cli.config {
        Some(path) => io::load_options_json(path)?,
        None => EngineOptions::default(),
    };
    let engine = LineupEngine::new(options);

    match cli.cmd {
        Commands::Generate {
            plan,
            workers,
            shifts,
            catalog,
            positions,
            previous,
            out_json,
            save_previous,
        } => {
            let mut day = match plan {
                Some(path) => io::load_plan_json(path)?,
                None => {
                    let (Some(workers), Some(shifts)) = (workers, shifts) else {
                        bail!("--plan ou --workers et --shifts sont requis");
                    };
                    DayPlan {
                        workers: io::import_workers_csv(workers)?,
                        shifts: io::import_shifts_csv(shifts)?,
                        positions: None,
                    }
                }
            };
            if let Some(path) = catalog {
                day.positions = Some(load_catalog_from_file(path)?.positions);
            } else if let Some(path) = positions {
                day.positions = Some(io::import_positions_csv(path)?);
            }

            let previous = match previous {
                Some(path) => io::load_previous_json(path)?,
                None => PreviousPositions::new(),
            };
            let (output, carried) = engine
                .generate_from(&day, previous)
                .context("génération impossible")?;

            if let Some(path) = out_json {
                io::export_output_json(path, &output)?;
            }
            if let Some(path) = save_previous {
                io::export_previous_json(path, &carried)?;
            }
            print!("{}", render_generation(&output, &TextLineup));
        }
        Commands::Breaks { workers, shifts } => {
            let day = DayPlan {
                workers: io::import_workers_csv(workers)?,
                shifts: io::import_shifts_csv(shifts)?,
                positions: None,
            };
            for window in &day.shifts {
                let worker = day
                    .find_worker_by_id(&window.worker)
                    .ok_or_else(|| anyhow::anyhow!("unknown worker: {}", window.worker))?;
                println!(
                    "{} | {} → {} | {}",
                    worker.name,
                    format_hhmm(window.start),
                    format_hhmm(window.end),
                    engine.break_requirement(window, worker.is_minor)
                );
            }
        }
        Commands::CheckCatalog { catalog } => {
            let catalog = load_catalog_from_file(catalog)?;
            for period in ShiftPeriod::ALL {
                let order: Vec<String> = engine
                    .resolve_positions(&catalog.positions, period)?
                    .into_iter()
                    .map(|r| r.slot.name())
                    .collect();
                println!("{period}: {}", order.join(", "));
            }
            let closing: Vec<&str> = catalog
                .closing_positions()
                .into_iter()
                .map(|p| p.name.as_str())
                .collect();
            println!("closing: {}", closing.join(", "));
        }
    }

    Ok(())
}
