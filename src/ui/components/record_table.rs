// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Table of the filtered records with single-row selection.

use eframe::egui;
use uuid::Uuid;

use crate::models::record::{Record, RecordField};

/// Rows currently shown plus the selected record id.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct RecordTableModel {
    rows: Vec<Record>,
    selected: Option<Uuid>,
}

/// Messages emitted by the table view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableMsg {
    Select(Uuid),
}

impl RecordTableModel {
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    /// Replace the visible rows with a freshly filtered snapshot.
    pub fn set_rows(&mut self, rows: Vec<Record>) {
        self.rows = rows;
    }

    pub fn select(&mut self, id: Option<Uuid>) {
        self.selected = id;
    }
}

/// Render the table and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &RecordTableModel) -> Vec<TableMsg> {
    let mut msgs = Vec::new();

    if model.rows.is_empty() {
        ui.label(
            egui::RichText::new("No events to show. Open a JSON file or add an event.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    egui::ScrollArea::both()
        .id_salt("events_table")
        .max_height(320.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("events_grid")
                .num_columns(RecordField::ALL.len())
                .striped(true)
                .spacing(egui::vec2(12.0, 6.0))
                .show(ui, |ui| {
                    for field in RecordField::ALL {
                        ui.label(egui::RichText::new(field.label()).strong());
                    }
                    ui.end_row();

                    for record in &model.rows {
                        render_row(ui, record, model.selected == Some(record.id), &mut msgs);
                        ui.end_row();
                    }
                });
        });

    msgs
}

/// One row: the name cell is the selection handle, other cells are plain labels.
fn render_row(ui: &mut egui::Ui, record: &Record, selected: bool, msgs: &mut Vec<TableMsg>) {
    let name = if record.full_name.is_empty() {
        "(unnamed)"
    } else {
        record.full_name.as_str()
    };
    if ui
        .add(egui::Button::new(name).selected(selected))
        .on_hover_text("Select to edit")
        .clicked()
    {
        msgs.push(TableMsg::Select(record.id));
    }

    for field in &RecordField::ALL[1..] {
        let text = record.field(*field);
        let label = ui.add(egui::Label::new(text).truncate());
        if text.chars().count() > 40 {
            label.on_hover_text(text);
        }
    }
}
