// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::{Path, PathBuf};

use crate::errors::CatalogError;
use crate::logic::catalog::Catalog;
use crate::logic::storage;
use crate::models::record::Record;
use crate::ui::components::filter_bar::{self, FilterBarModel, FilterMsg};
use crate::ui::components::record_form::{self, FormAction, FormMsg, RecordFormModel};
use crate::ui::components::record_table::{RecordTableModel, TableMsg};

const BUSY_MESSAGE: &str = "Wait for the file operation to finish.";

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Full record set and the file it belongs to.
    pub catalog: Catalog,
    /// Filter text inputs.
    pub filter: FilterBarModel,
    /// Filtered rows and the selected record id.
    pub table: RecordTableModel,
    /// Add/edit form inputs.
    pub form: RecordFormModel,
    /// Whether the about window is shown.
    pub about_open: bool,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
pub enum Msg {
    OpenRequested(PathBuf),
    OpenCancelled,
    FileLoaded {
        path: PathBuf,
        result: Result<Vec<Record>, String>,
    },
    SaveRequested,
    SaveAsRequested(PathBuf),
    SaveCancelled,
    SaveCompleted(Result<(PathBuf, usize), String>),
    SetAboutOpen(bool),
    DismissError,
    Filter(FilterMsg),
    Table(TableMsg),
    Form(FormMsg),
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    LoadFile(PathBuf),
    SaveFile { path: PathBuf, records: Vec<Record> },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::OpenRequested(path) => cmds.push(Command::LoadFile(path)),
        Msg::OpenCancelled => surface_event(model, "Open cancelled.".to_string(), false),
        Msg::FileLoaded { path, result } => match result {
            Ok(records) => {
                let count = model.catalog.install(path.clone(), records);
                model.table.select(None);
                model.form.clear();
                refresh_view(model);
                surface_event(
                    model,
                    format!("Loaded {count} event(s) from {}", path.display()),
                    false,
                );
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "open failed");
                surface_event(model, format!("Failed to open file:\n\n{err}"), true);
            }
        },
        Msg::SaveRequested => match model.catalog.save_snapshot() {
            Ok((path, records)) => cmds.push(Command::SaveFile { path, records }),
            Err(err) => surface_catalog_error(model, err),
        },
        Msg::SaveAsRequested(path) => {
            let records = model.catalog.store().records().to_vec();
            cmds.push(Command::SaveFile { path, records });
        }
        Msg::SaveCancelled => surface_event(model, "Save cancelled.".to_string(), false),
        Msg::SaveCompleted(result) => match result {
            Ok((path, count)) => {
                let message = format!("Saved {count} event(s) to {}", path.display());
                model.catalog.set_path(path);
                surface_event(model, message, false);
            }
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                surface_event(model, format!("Failed to save file:\n\n{err}"), true);
            }
        },
        Msg::SetAboutOpen(open) => model.about_open = open,
        Msg::DismissError => model.error = None,
        Msg::Filter(m) => {
            if filter_bar::update(&mut model.filter, m) {
                refresh_view(model);
            }
        }
        Msg::Table(TableMsg::Select(id)) => {
            if let Some(record) = model.catalog.store().get(id) {
                model.form.load(record.fields());
                model.table.select(Some(id));
            }
        }
        Msg::Form(m) => {
            let has_selection = model.table.selected().is_some();
            if let Some(action) = record_form::update(&mut model.form, m, has_selection) {
                if model.pending_commands > 0 && action != FormAction::Cleared {
                    tracing::debug!(?action, "form action ignored while file I/O is pending");
                    surface_event(model, BUSY_MESSAGE.to_string(), false);
                } else {
                    run_form_action(model, action);
                }
            }
        }
    }
}

/// Open `path` on the calling thread, e.g. for a file passed on the command line.
pub fn open_now(model: &mut AppModel, path: &Path) {
    match model.catalog.open_file(path) {
        Ok(count) => {
            refresh_view(model);
            surface_event(
                model,
                format!("Loaded {count} event(s) from {}", path.display()),
                false,
            );
        }
        Err(err) => surface_catalog_error(model, err),
    }
}

/// Execute a command synchronously and return a resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::LoadFile(path) => {
            let result = storage::load(&path).map_err(|err| err.to_string());
            Msg::FileLoaded { path, result }
        }
        Command::SaveFile { path, records } => {
            let result = storage::save(&path, &records)
                .map(|_| (path, records.len()))
                .map_err(|err| err.to_string());
            Msg::SaveCompleted(result)
        }
    }
}

/// Apply an add/edit/delete request from the form to the catalogue.
fn run_form_action(model: &mut AppModel, action: FormAction) {
    let selected = model.table.selected();
    match action {
        FormAction::Cleared => model.table.select(None),
        FormAction::Add => match model.catalog.add(model.form.fields()) {
            Ok(_) => {
                model.form.clear();
                model.table.select(None);
                refresh_view(model);
                surface_event(model, "New event added.".to_string(), false);
            }
            Err(err) => surface_catalog_error(model, err),
        },
        FormAction::Edit => match model.catalog.edit(selected, model.form.fields()) {
            Ok(_) => {
                refresh_view(model);
                surface_event(model, "Event updated.".to_string(), false);
            }
            Err(err) => surface_catalog_error(model, err),
        },
        FormAction::Delete => match model.catalog.delete(selected) {
            Ok(_) => {
                model.form.clear();
                model.table.select(None);
                refresh_view(model);
                surface_event(model, "Event deleted.".to_string(), false);
            }
            Err(err) => surface_catalog_error(model, err),
        },
    }
}

/// Recompute the visible rows from the full set and the current filter.
///
/// A selection whose row is no longer visible is dropped.
fn refresh_view(model: &mut AppModel) {
    let rows = model.catalog.apply_filter(model.filter.filter());
    model.table.set_rows(rows);
    if let Some(id) = model.table.selected()
        && !model.table.rows().iter().any(|r| r.id == id)
    {
        model.table.select(None);
    }
}

fn surface_catalog_error(model: &mut AppModel, err: CatalogError) {
    tracing::warn!(error = %err, "action rejected");
    surface_event(model, err.to_string(), true);
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
