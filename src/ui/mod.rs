// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for browsing and editing the event catalogue.
//! Handles layout, file dialogs, and wiring to the MVU kernel.

pub mod components;

use std::path::PathBuf;

use eframe::egui;

use crate::logic::storage::ensure_json_extension;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::{filter_bar, record_form, record_table};

/// Stateful egui application for the parliament events catalogue.
pub struct EventsApp {
    model: AppModel,
    inbox: Vec<Msg>,
    start_dir: Option<PathBuf>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl EventsApp {
    /// Spawn the I/O workers around an initial model.
    pub fn new(model: AppModel, start_dir: Option<PathBuf>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        for _ in 0..2 {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model,
            inbox: Vec::new(),
            start_dir,
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for EventsApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which eframe
    /// still calls right before this method each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: drains worker replies, applies queued messages,
    /// then renders the top bar, status bar, and the filter/table/form column.
    /// Views return messages that are handled on the next frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });

        // Pull messages produced by the command worker.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Apply queued messages in arrival order.
        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        if self.model.pending_commands > 0 {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Parliament Events");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(2.0);
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    self.render_about_button(ui);
                    ui.separator();
                    self.render_file_buttons(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);
        self.render_about_window(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let filter_msgs = filter_bar::view(ui, &self.model.filter);
                self.inbox.extend(filter_msgs.into_iter().map(Msg::Filter));
                ui.add_space(8.0);

                let table_msgs = record_table::view(ui, &self.model.table);
                self.inbox.extend(table_msgs.into_iter().map(Msg::Table));
                ui.add_space(12.0);

                let form_msgs = record_form::view(
                    ui,
                    ctx,
                    &self.model.form,
                    self.model.pending_commands > 0,
                );
                self.inbox.extend(form_msgs.into_iter().map(Msg::Form));
                ui.add_space(8.0);
            });
        });
    }
}

impl EventsApp {
    /// Open / Save / Save as buttons. Disabled while a file command is in flight.
    fn render_file_buttons(&mut self, ui: &mut egui::Ui) {
        let idle = self.model.pending_commands == 0;

        let save_as = egui::Button::new(format!("{} Save as…", egui_phosphor::regular::FLOPPY_DISK));
        if ui.add_enabled(idle, save_as).clicked() {
            match self.file_dialog("Save events as").set_file_name("events.json").save_file() {
                Some(path) => self.inbox.push(Msg::SaveAsRequested(ensure_json_extension(path))),
                None => self.inbox.push(Msg::SaveCancelled),
            }
        }

        let save = egui::Button::new(format!("{} Save", egui_phosphor::regular::FLOPPY_DISK));
        if ui
            .add_enabled(idle, save)
            .on_hover_text("Write all events back to the opened file")
            .clicked()
        {
            self.inbox.push(Msg::SaveRequested);
        }

        let open = egui::Button::new(format!("{} Open JSON", egui_phosphor::regular::FOLDER_OPEN));
        if ui.add_enabled(idle, open).clicked() {
            match self.file_dialog("Select a JSON file with events").pick_file() {
                Some(path) => self.inbox.push(Msg::OpenRequested(path)),
                None => self.inbox.push(Msg::OpenCancelled),
            }
        }
    }

    fn file_dialog(&self, title: &str) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new()
            .set_title(title)
            .add_filter("JSON", &["json"]);
        match &self.start_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    fn render_about_button(&mut self, ui: &mut egui::Ui) {
        if ui
            .button(format!("{} About", egui_phosphor::regular::INFO))
            .clicked()
        {
            self.inbox.push(Msg::SetAboutOpen(true));
        }
    }

    fn render_about_window(&mut self, ctx: &egui::Context) {
        if !self.model.about_open {
            return;
        }
        egui::Window::new("About")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.heading(format!("Parliament Events {}", env!("CARGO_PKG_VERSION")));
                ui.label("Catalogue of student parliament events.");
                ui.label("Open a JSON file, filter by faculty, speciality or event type, edit entries in the form, and save them back.");
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    self.inbox.push(Msg::SetAboutOpen(false));
                }
            });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render record counts, the latest status message, and a spinner while I/O is pending.
    fn render_status(&self, ui: &mut egui::Ui) {
        let shown = self.model.table.rows().len();
        let total = self.model.catalog.store().len();
        let file = self
            .model
            .catalog
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "no file".to_string());

        let counts = if self.model.catalog.store().is_empty() {
            format!("No events · {file}")
        } else {
            format!("Showing {shown} of {total} · {file}")
        };

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(counts).color(egui::Color32::from_gray(68)));
            if let Some(text) = &self.model.status {
                ui.separator();
                ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
            }
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} file operation(s) running",
                    self.model.pending_commands
                ));
            }
        });
    }
}
