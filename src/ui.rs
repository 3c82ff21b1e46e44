// UI layer: banner, main menu loop and table rendering.
// The functions are small and synchronous to make the flow easy to follow;
// all terminal I/O goes through a `Prompter`.

use anyhow::{Context, Result};
use tracing::info;

use crate::codec;
use crate::config::Config;
use crate::controller;
use crate::input::{self, Prompter};
use crate::record::{LocationRecord, Record, TransportRecord};
use crate::simulation;
use crate::store::Store;

pub const WELCOME_MSG: &str = "-----------------------------------------\n Welcome to Personal Travel Assistance !\n-----------------------------------------";
pub const MAIN_MENU: &str = "1: start simulation   2: location    3: transport    4: exit";
pub const NO_DATA_MSG: &str = "No Data to Display :(";

const INDEX_NAME: &str = "no.";
const PILLAR: &str = "|+|";

/// Both record stores and where they are persisted.
#[derive(Debug)]
pub struct Planner {
    config: Config,
    pub locations: Store<LocationRecord>,
    pub transports: Store<TransportRecord>,
}

impl Planner {
    /// Load both data files. A missing file starts an empty store; a corrupt
    /// one is an error.
    pub fn load(config: Config) -> Result<Self> {
        let locations = load_store(&config.location_path())?;
        let transports = load_store(&config.transport_path())?;
        info!(
            locations = locations.len(),
            transports = transports.len(),
            data_dir = %config.data_dir().display(),
            "planner ready"
        );
        Ok(Self {
            config,
            locations,
            transports,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn load_store<R: Record>(path: &std::path::Path) -> Result<Store<R>> {
    let records = codec::load::<R>(path)
        .with_context(|| format!("Failed to load {} data", R::KIND))?;
    Store::from_records(records)
        .with_context(|| format!("Invalid {} data in {}", R::KIND, path.display()))
}

/// Main interactive menu. Runs until the user chooses "exit".
pub fn main_menu(io: &mut dyn Prompter, planner: &mut Planner) -> Result<()> {
    loop {
        io.say(WELCOME_MSG);
        match input::menu(io, MAIN_MENU, 4)? {
            1 => simulation::run_simulation(io, &planner.locations, &planner.transports)?,
            2 => {
                let path = planner.config.location_path();
                controller::manage(io, &mut planner.locations, &path)?;
            }
            3 => {
                let path = planner.config.transport_path();
                controller::manage(io, &mut planner.transports, &path)?;
            }
            _ => break,
        }
    }
    Ok(())
}

/// Print a store as a numbered table, or a placeholder when it is empty.
pub fn render_store<R: Record>(io: &mut dyn Prompter, store: &Store<R>) {
    if store.is_empty() {
        io.say(NO_DATA_MSG);
        return;
    }
    let rows: Vec<Vec<String>> = store.list().iter().map(Record::table_row).collect();
    for line in render_table(R::HEADERS, &rows) {
        io.say(&line);
    }
}

/// Lay out `rows` under `headers` with a leading 1-based index column.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = std::iter::once(INDEX_NAME.len().max(rows.len().to_string().len()))
        .chain(headers.iter().map(|h| h.chars().count()))
        .collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(col + 1) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<String>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!(" {cell:<width$} "))
            .collect();
        format!("{PILLAR}{}{PILLAR}", padded.join(PILLAR))
    };

    let header = line(
        std::iter::once(INDEX_NAME.to_string())
            .chain(headers.iter().map(|h| h.to_string()))
            .collect(),
    );
    let rule = "-".repeat(header.chars().count());

    let mut out = vec![rule.clone(), header, rule.clone()];
    for (i, row) in rows.iter().enumerate() {
        out.push(line(
            std::iter::once((i + 1).to_string())
                .chain(row.iter().cloned())
                .collect(),
        ));
    }
    out.push(rule);
    out
}
