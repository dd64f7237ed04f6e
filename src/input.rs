// Keyboard input for the navigator
use crate::app::DegreeNavigator;
use crate::io::DocumentOpener;
use crate::message::Message;
use crate::state::AppMode;
use eframe::egui;

const DIGIT_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

impl<O: DocumentOpener> DegreeNavigator<O> {
    /// Map this frame's key presses to at most one message.
    pub fn handle_input(&self, ctx: &egui::Context) -> Option<Message> {
        match self.mode {
            AppMode::Notice(_) => {
                if ctx.input(|i| {
                    i.key_pressed(egui::Key::Enter)
                        || i.key_pressed(egui::Key::Escape)
                        || i.key_pressed(egui::Key::Space)
                }) {
                    return Some(Message::DismissNotice);
                }
                return None;
            }
            AppMode::Help => {
                if ctx.input(|i| {
                    i.key_pressed(egui::Key::Escape)
                        || i.key_pressed(egui::Key::Q)
                        || i.key_pressed(egui::Key::Questionmark)
                }) {
                    return Some(Message::ToggleHelp);
                }
                return None;
            }
            AppMode::Normal => {}
        }

        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::J)) {
            return Some(Message::SelectDelta(1));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::K)) {
            return Some(Message::SelectDelta(-1));
        }
        if ctx.input(|i| {
            i.key_pressed(egui::Key::Enter)
                || i.key_pressed(egui::Key::L)
                || i.key_pressed(egui::Key::ArrowRight)
        }) {
            return Some(Message::ActivateSelected);
        }
        if ctx.input(|i| {
            i.key_pressed(egui::Key::Backspace)
                || i.key_pressed(egui::Key::Escape)
                || i.key_pressed(egui::Key::H)
                || i.key_pressed(egui::Key::ArrowLeft)
        }) {
            return Some(Message::GoBack);
        }
        if let Some(row) = ctx.input(|i| DIGIT_KEYS.iter().position(|k| i.key_pressed(*k))) {
            return Some(Message::Activate(row));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Questionmark)) {
            return Some(Message::ToggleHelp);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::T)) {
            return Some(Message::ToggleTheme);
        }

        None
    }
}
