// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Filter inputs for faculty, speciality and event type.

use eframe::egui;

use crate::models::filter::RecordFilter;
use crate::models::record::RecordField;

/// UI model for the filter bar.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct FilterBarModel {
    filter: RecordFilter,
}

/// Messages emitted by the filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterMsg {
    Changed(RecordField, String),
    Clear,
}

impl FilterBarModel {
    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }
}

/// Apply a message. Returns `true` when the predicates changed and the view needs refreshing.
pub fn update(model: &mut FilterBarModel, msg: FilterMsg) -> bool {
    let before = model.filter.clone();
    match msg {
        FilterMsg::Changed(field, text) => model.filter.set(field, text),
        FilterMsg::Clear => model.filter = RecordFilter::default(),
    }
    model.filter != before
}

/// Render the filter inputs and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &FilterBarModel) -> Vec<FilterMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(egui_phosphor::regular::MAGNIFYING_GLASS);
            for field in RecordFilter::FIELDS {
                let mut text = model.filter.get(field).unwrap_or_default().to_string();
                ui.label(field.label());
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut text)
                            .hint_text("contains…")
                            .desired_width(150.0),
                    )
                    .changed()
                {
                    msgs.push(FilterMsg::Changed(field, text));
                }
                ui.add_space(6.0);
            }

            let clear = egui::Button::new(format!("{} Clear filter", egui_phosphor::regular::X));
            if ui
                .add_enabled(!model.filter.is_empty(), clear)
                .clicked()
            {
                msgs.push(FilterMsg::Clear);
            }
        });
    });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_reports_refresh() {
        let mut model = FilterBarModel::default();

        assert!(update(
            &mut model,
            FilterMsg::Changed(RecordField::Faculty, "law".into())
        ));
        assert_eq!(model.filter().faculty, "law");
        assert!(!update(
            &mut model,
            FilterMsg::Changed(RecordField::Faculty, "law".into())
        ));
    }

    #[test]
    fn unfilterable_field_is_ignored() {
        let mut model = FilterBarModel::default();

        assert!(!update(
            &mut model,
            FilterMsg::Changed(RecordField::Description, "x".into())
        ));
        assert!(model.filter().is_empty());
    }

    #[test]
    fn clear_resets_all_predicates() {
        let mut model = FilterBarModel::default();
        update(&mut model, FilterMsg::Changed(RecordField::Speciality, "sys".into()));
        update(&mut model, FilterMsg::Changed(RecordField::EventType, "sem".into()));

        assert!(update(&mut model, FilterMsg::Clear));
        assert_eq!(model.filter(), &RecordFilter::default());
    }
}
