use crate::error::NavError;
use crate::io::{DocumentOpener, SystemOpener};
use crate::message::Message;
use crate::model::{Catalog, DocumentRef};
use crate::state::{AppMode, Level, Navigator, SelectionState, UIState};
use crate::view::listing::{self, Listing};
use eframe::egui;
use std::cell::RefCell;
use std::time::Duration;

pub struct DegreeNavigator<O: DocumentOpener = SystemOpener> {
    pub catalog: Catalog,
    pub navigator: Navigator,
    pub listing: Listing,
    pub selection: SelectionState,
    pub mode: AppMode,
    pub ui: UIState,
    pub opener: O,
    shown_title: String,
}

impl<O: DocumentOpener> DegreeNavigator<O> {
    pub fn new(catalog: Catalog, opener: O, ui: UIState) -> Self {
        let navigator = Navigator::new();
        let listing = listing::build(navigator.state(), &catalog);
        let mut selection = SelectionState::new();
        selection.reset(listing.len());

        Self {
            catalog,
            navigator,
            listing,
            selection,
            mode: AppMode::default(),
            ui,
            opener,
            shown_title: String::new(),
        }
    }

    pub fn title(&self) -> String {
        let crumb = self.navigator.breadcrumb(&self.catalog);
        if crumb.is_empty() {
            "Design Your Degree".to_string()
        } else {
            format!("Design Your Degree - {crumb}")
        }
    }

    pub fn handle_message(&mut self, message: Message) {
        // A blocking notice swallows everything until dismissed
        if matches!(self.mode, AppMode::Notice(_))
            && !matches!(message, Message::DismissNotice | Message::ToggleTheme)
        {
            tracing::debug!(?message, "ignored while notice is shown");
            return;
        }

        match message {
            Message::SelectBatch(id) => self.select_batch(&id),
            Message::SelectTerm(index) => self.select_term(index),
            Message::SelectOption(ordinal) => self.select_option(ordinal),
            Message::GoBack => self.go_back(),
            Message::OpenDocument(document) => self.open_document(&document),
            Message::SelectDelta(delta) => {
                self.selection.move_delta(delta, self.listing.len());
            }
            Message::Activate(row) => self.activate(row),
            Message::ActivateSelected => {
                if let Some(row) = self.selection.selected_index {
                    self.activate(row);
                }
            }
            Message::ToggleHelp => {
                self.mode = match self.mode {
                    AppMode::Help => AppMode::Normal,
                    _ => AppMode::Help,
                };
            }
            Message::ToggleTheme => self.ui.theme = self.ui.theme.toggle(),
            Message::DismissNotice => self.mode = AppMode::Normal,
        }
    }

    fn select_batch(&mut self, id: &str) {
        let from = self.navigator.level();
        let result = self.navigator.select_batch(&self.catalog, id);
        self.after_transition(from, result);
    }

    fn select_term(&mut self, index: usize) {
        let from = self.navigator.level();
        let result = self.navigator.select_term(&self.catalog, index);
        self.after_transition(from, result);
    }

    fn select_option(&mut self, ordinal: u32) {
        let from = self.navigator.level();
        let result = self.navigator.select_option(ordinal);
        self.after_transition(from, result);
    }

    fn go_back(&mut self) {
        if self.navigator.go_back() {
            self.refresh_listing();
            self.selection
                .restore_selection(self.navigator.level(), self.listing.len());
        }
    }

    fn after_transition(&mut self, from: Level, result: Result<(), NavError>) {
        match result {
            Ok(()) => {
                self.selection.save_selection(from);
                self.refresh_listing();
                self.selection.reset(self.listing.len());
            }
            Err(err @ NavError::InvalidTransition { .. }) => {
                tracing::debug!(error = %err, "transition ignored");
            }
            Err(err) if err.is_blocking() => {
                tracing::info!(error = %err, "transition rejected");
                self.mode = AppMode::Notice(err.to_string());
            }
            Err(err) => {
                tracing::info!(error = %err, "transition rejected");
                self.ui.set_error(err.to_string());
            }
        }
    }

    fn refresh_listing(&mut self) {
        self.listing = listing::build(self.navigator.state(), &self.catalog);
    }

    fn activate(&mut self, row: usize) {
        let message = match &self.listing {
            Listing::Batches(items) => items.get(row).map(|b| Message::SelectBatch(b.id.clone())),
            Listing::Terms(items) => items.get(row).map(|t| Message::SelectTerm(t.index)),
            Listing::Options(items) => items.get(row).map(|o| Message::SelectOption(o.ordinal)),
            Listing::Documents(items) => items
                .get(row)
                .map(|d| Message::OpenDocument(d.document.clone())),
        };
        match message {
            Some(message) => {
                self.selection.selected_index = Some(row);
                self.handle_message(message);
            }
            None => tracing::debug!(row, "no item at row"),
        }
    }

    fn open_document(&mut self, document: &DocumentRef) {
        match self.opener.open(document) {
            Ok(target) => {
                tracing::debug!(target = %target, "document opened");
                self.ui.set_info(format!("Opened {}", document.display_name()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "document open failed");
                self.ui.set_error(e.to_string());
            }
        }
    }
}

impl<O: DocumentOpener + 'static> eframe::App for DegreeNavigator<O> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.ui.theme.visuals());
        self.ui.clear_expired_messages();

        let key_message = self.handle_input(ctx);

        // Deferred so drawing borrows stay immutable
        let next_message = RefCell::new(None);

        self.render_top_bar(ctx, &next_message);
        self.render_bottom_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_listing(ui, &next_message);
        });
        self.render_help_modal(ctx, &next_message);
        self.render_notice_modal(ctx, &next_message);

        for message in key_message.into_iter().chain(next_message.into_inner()) {
            self.handle_message(message);
        }

        let title = self.title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
        if self.ui.error_message.is_some() || self.ui.info_message.is_some() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}

#[cfg(test)]
pub(crate) fn test_ui() -> UIState {
    UIState::new(crate::style::Theme::Dark, crate::style::MESSAGE_TIMEOUT_SECS)
}
