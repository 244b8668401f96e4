// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Add/edit/delete form for a single event.

use eframe::egui;

use crate::models::record::{RecordField, RecordFields};

/// Form inputs and the delete-confirmation flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct RecordFormModel {
    fields: RecordFields,
    confirm_delete: bool,
}

/// Messages emitted by the form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMsg {
    FieldChanged(RecordField, String),
    Clear,
    Add,
    Edit,
    DeleteRequested,
    DeleteConfirmed,
    DeleteCancelled,
}

/// Requests the form cannot satisfy on its own; the caller runs them against the catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Add,
    Edit,
    Delete,
    Cleared,
}

impl RecordFormModel {
    pub fn fields(&self) -> &RecordFields {
        &self.fields
    }

    /// Populate the inputs, e.g. from the selected record.
    pub fn load(&mut self, fields: RecordFields) {
        self.fields = fields;
        self.confirm_delete = false;
    }

    pub fn clear(&mut self) {
        self.load(RecordFields::default());
    }

    pub fn confirm_delete_open(&self) -> bool {
        self.confirm_delete
    }
}

/// Apply a message; `has_selection` decides whether delete asks for confirmation first.
pub fn update(model: &mut RecordFormModel, msg: FormMsg, has_selection: bool) -> Option<FormAction> {
    match msg {
        FormMsg::FieldChanged(field, text) => {
            model.fields.set(field, text);
            None
        }
        FormMsg::Clear => {
            model.clear();
            Some(FormAction::Cleared)
        }
        FormMsg::Add => Some(FormAction::Add),
        FormMsg::Edit => Some(FormAction::Edit),
        // Without a selection the catalogue reports the problem.
        FormMsg::DeleteRequested if !has_selection => Some(FormAction::Delete),
        FormMsg::DeleteRequested => {
            model.confirm_delete = true;
            None
        }
        FormMsg::DeleteConfirmed => {
            model.confirm_delete = false;
            Some(FormAction::Delete)
        }
        FormMsg::DeleteCancelled => {
            model.confirm_delete = false;
            None
        }
    }
}

/// Render the form and return any messages triggered by user interaction.
///
/// `busy` disables the add/edit/delete buttons while a file is being read or written.
pub fn view(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    model: &RecordFormModel,
    busy: bool,
) -> Vec<FormMsg> {
    let mut msgs = Vec::new();

    egui::CollapsingHeader::new("Event details")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("record_form_grid")
                .num_columns(2)
                .spacing(egui::vec2(8.0, 8.0))
                .min_col_width(120.0)
                .show(ui, |ui| {
                    for field in RecordField::ALL {
                        render_input(ui, model, field, &mut msgs);
                        ui.end_row();
                    }
                });

            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Fields marked * are required.")
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
            ui.add_space(8.0);
            render_buttons(ui, busy, &mut msgs);
        });

    if model.confirm_delete_open() {
        render_confirm_modal(ctx, &mut msgs);
    }

    msgs
}

fn render_input(
    ui: &mut egui::Ui,
    model: &RecordFormModel,
    field: RecordField,
    msgs: &mut Vec<FormMsg>,
) {
    if RecordField::REQUIRED.contains(&field) {
        ui.label(format!("{} *", field.label()));
    } else {
        ui.label(field.label());
    }

    let mut text = model.fields.get(field).to_string();
    let edit = match field {
        RecordField::Description => egui::TextEdit::multiline(&mut text).desired_rows(3),
        RecordField::TimeFrame => {
            egui::TextEdit::singleline(&mut text).hint_text("e.g., 2024-05-01 – 2024-05-03")
        }
        _ => egui::TextEdit::singleline(&mut text),
    };
    if ui
        .add(edit.desired_width(f32::INFINITY))
        .changed()
    {
        msgs.push(FormMsg::FieldChanged(field, text));
    }
}

fn render_buttons(ui: &mut egui::Ui, busy: bool, msgs: &mut Vec<FormMsg>) {
    let idle = !busy;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(
                idle,
                egui::Button::new(format!("{} Add", egui_phosphor::regular::PLUS)),
            )
            .on_hover_text("Append a new event built from the form")
            .clicked()
        {
            msgs.push(FormMsg::Add);
        }
        if ui
            .add_enabled(
                idle,
                egui::Button::new(format!(
                    "{} Save changes",
                    egui_phosphor::regular::PENCIL_SIMPLE
                )),
            )
            .on_hover_text("Overwrite the selected event with the form values")
            .clicked()
        {
            msgs.push(FormMsg::Edit);
        }
        if ui
            .add_enabled(
                idle,
                egui::Button::new(format!("{} Delete", egui_phosphor::regular::TRASH_SIMPLE)),
            )
            .on_hover_text("Delete the selected event")
            .clicked()
        {
            msgs.push(FormMsg::DeleteRequested);
        }
        ui.separator();
        if ui
            .button(format!("{} Clear form", egui_phosphor::regular::ERASER))
            .clicked()
        {
            msgs.push(FormMsg::Clear);
        }
    });
}

fn render_confirm_modal(ctx: &egui::Context, msgs: &mut Vec<FormMsg>) {
    egui::Window::new("Confirm deletion")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Delete the selected event?");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    msgs.push(FormMsg::DeleteConfirmed);
                }
                if ui.button("Cancel").clicked() {
                    msgs.push(FormMsg::DeleteCancelled);
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_changes_update_inputs_only() {
        let mut model = RecordFormModel::default();

        let action = update(
            &mut model,
            FormMsg::FieldChanged(RecordField::Faculty, "Law".into()),
            false,
        );

        assert_eq!(action, None);
        assert_eq!(model.fields().faculty, "Law");
    }

    #[test]
    fn delete_with_selection_asks_first() {
        let mut model = RecordFormModel::default();

        assert_eq!(update(&mut model, FormMsg::DeleteRequested, true), None);
        assert!(model.confirm_delete_open());

        assert_eq!(
            update(&mut model, FormMsg::DeleteConfirmed, true),
            Some(FormAction::Delete)
        );
        assert!(!model.confirm_delete_open());
    }

    #[test]
    fn delete_without_selection_skips_confirmation() {
        let mut model = RecordFormModel::default();

        assert_eq!(
            update(&mut model, FormMsg::DeleteRequested, false),
            Some(FormAction::Delete)
        );
        assert!(!model.confirm_delete_open());
    }

    #[test]
    fn cancel_closes_confirmation() {
        let mut model = RecordFormModel::default();
        update(&mut model, FormMsg::DeleteRequested, true);

        assert_eq!(update(&mut model, FormMsg::DeleteCancelled, true), None);
        assert!(!model.confirm_delete_open());
    }

    #[test]
    fn clear_empties_inputs() {
        let mut model = RecordFormModel::default();
        update(
            &mut model,
            FormMsg::FieldChanged(RecordField::FullName, "Jane".into()),
            false,
        );

        assert_eq!(
            update(&mut model, FormMsg::Clear, false),
            Some(FormAction::Cleared)
        );
        assert_eq!(model.fields(), &RecordFields::default());
    }
}
