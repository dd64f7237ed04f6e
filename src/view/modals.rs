// Modal rendering functions (Help, blocking Notice)

use crate::app::DegreeNavigator;
use crate::io::DocumentOpener;
use crate::message::Message;
use crate::state::AppMode;
use crate::style;
use eframe::egui;
use std::cell::RefCell;

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("j / Down", "Next Item"),
    ("k / Up", "Previous Item"),
    ("Enter / l / Right", "Open Item"),
    ("1 - 9", "Open Nth Item"),
    ("Backspace / Esc / h / Left", "Back"),
    ("t", "Toggle Theme"),
    ("?", "Toggle Help"),
];

impl<O: DocumentOpener> DegreeNavigator<O> {
    pub(crate) fn render_help_modal(&self, ctx: &egui::Context, next_message: &RefCell<Option<Message>>) {
        if self.mode != AppMode::Help {
            return;
        }
        egui::Window::new("Help")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.set_max_height(style::modal_max_height(ctx));
                ui.heading("Key Bindings");
                ui.separator();
                egui::Grid::new("help_grid").striped(true).show(ui, |ui| {
                    for (keys, action) in KEY_BINDINGS {
                        ui.label(*keys);
                        ui.label(*action);
                        ui.end_row();
                    }
                });
                ui.add_space(10.0);
                if ui.button("Close").clicked() {
                    *next_message.borrow_mut() = Some(Message::ToggleHelp);
                }
            });
    }

    pub(crate) fn render_notice_modal(&self, ctx: &egui::Context, next_message: &RefCell<Option<Message>>) {
        let AppMode::Notice(text) = &self.mode else {
            return;
        };
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label(text.as_str());
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    *next_message.borrow_mut() = Some(Message::DismissNotice);
                }
            });
    }
}
