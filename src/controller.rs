// CRUD controller: the add / edit / delete / exit loop for one record kind.
// Each pass lists the store, takes one command, and rewrites the data file
// only when that command actually changed the store.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::codec;
use crate::input::{self, Prompter};
use crate::record::Record;
use crate::store::Store;
use crate::ui;

pub const CRUD_MENU: &str = "1: add    2: edit    3: delete    4: exit";

/// A command from the CRUD menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Edit,
    Delete,
    Exit,
}

impl Command {
    /// Map a menu number (1..=4) to its command.
    pub fn from_choice(choice: usize) -> Self {
        match choice {
            1 => Command::Add,
            2 => Command::Edit,
            3 => Command::Delete,
            _ => Command::Exit,
        }
    }
}

/// What one command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Mutated,
    Unchanged,
    Exit,
}

/// Run the CRUD loop for `store` until the user exits. The file at `path` is
/// rewritten after every mutation.
pub fn manage<R: Record>(io: &mut dyn Prompter, store: &mut Store<R>, path: &Path) -> Result<()> {
    loop {
        ui::render_store(io, store);
        let command = Command::from_choice(input::menu(io, CRUD_MENU, 4)?);
        debug!(kind = R::KIND, ?command, "crud command");

        match run_command(io, store, command)? {
            Turn::Exit => return Ok(()),
            Turn::Mutated => codec::save(path, store.list())
                .with_context(|| format!("Failed to save {} data", R::KIND))?,
            Turn::Unchanged => {}
        }
    }
}

/// Apply one command to the in-memory store.
pub fn run_command<R: Record>(
    io: &mut dyn Prompter,
    store: &mut Store<R>,
    command: Command,
) -> Result<Turn> {
    match command {
        Command::Add => add(io, store),
        Command::Edit => edit(io, store),
        Command::Delete => delete(io, store),
        Command::Exit => Ok(Turn::Exit),
    }
}

fn add<R: Record>(io: &mut dyn Prompter, store: &mut Store<R>) -> Result<Turn> {
    loop {
        let candidate = R::prompt(io, &|name| store.name_available(name, None), None)?;
        match store.create(candidate) {
            Ok(()) => return Ok(Turn::Mutated),
            Err(err) => io.warn(&err.to_string()),
        }
    }
}

fn edit<R: Record>(io: &mut dyn Prompter, store: &mut Store<R>) -> Result<Turn> {
    if store.is_empty() {
        io.say("nothing to edit");
        return Ok(Turn::Unchanged);
    }

    let index = input::select_index(io, "element to edit", store.len())?;
    let old = store.get_by_index(index)?.clone();
    if !input::confirm(io, &format!("Confirm to edit '{}'?", old.name()))? {
        return Ok(Turn::Unchanged);
    }

    loop {
        let updated = R::prompt(
            io,
            &|name| store.name_available(name, Some(old.name())),
            Some(&old),
        )?;
        if updated == old {
            io.say("nothing changed");
            return Ok(Turn::Unchanged);
        }
        match store.replace(&old, updated) {
            Ok(()) => return Ok(Turn::Mutated),
            Err(err) => io.warn(&err.to_string()),
        }
    }
}

fn delete<R: Record>(io: &mut dyn Prompter, store: &mut Store<R>) -> Result<Turn> {
    if store.is_empty() {
        io.say("nothing to delete");
        return Ok(Turn::Unchanged);
    }

    let index = input::select_index(io, "data to delete", store.len())?;
    let target = store.get_by_index(index)?.clone();
    if !input::confirm(io, &format!("Confirm to delete '{}'?", target.name()))? {
        return Ok(Turn::Unchanged);
    }

    store.delete(&target)?;
    Ok(Turn::Mutated)
}
