// Panel rendering for the navigator
// Header with back button, footer with notices, central item table

use crate::app::DegreeNavigator;
use crate::io::DocumentOpener;
use crate::message::Message;
use crate::state::Level;
use crate::style::{self, Theme};
use crate::view::listing::Listing;
use eframe::egui;
use std::cell::RefCell;

/// One drawable row, whatever the level.
struct Row<'a> {
    icon: &'a str,
    label: String,
    detail: Option<String>,
    color: Option<egui::Color32>,
    enabled: bool,
}

fn table_rows(listing: &Listing, theme: Theme) -> Vec<Row<'_>> {
    match listing {
        Listing::Batches(items) => items
            .iter()
            .map(|b| Row {
                icon: "🎓",
                label: format!("Batch {}", b.id),
                detail: Some(b.summary.clone()),
                color: None,
                enabled: true,
            })
            .collect(),
        Listing::Terms(items) => items
            .iter()
            .map(|t| Row {
                icon: "📅",
                label: t.label(),
                detail: None,
                color: None,
                enabled: t.available,
            })
            .collect(),
        Listing::Options(items) => items
            .iter()
            .map(|o| Row {
                icon: "📖",
                label: o.name.clone(),
                detail: None,
                color: Some(style::tag_color(&o.tag, theme)),
                enabled: true,
            })
            .collect(),
        Listing::Documents(items) => items
            .iter()
            .map(|d| Row {
                icon: d.document.get_icon(),
                label: d.name.clone(),
                detail: None,
                color: Some(style::tag_color(&d.tag, theme)),
                enabled: true,
            })
            .collect(),
    }
}

impl<O: DocumentOpener> DegreeNavigator<O> {
    pub(crate) fn render_top_bar(&self, ctx: &egui::Context, next_message: &RefCell<Option<Message>>) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let at_root = self.navigator.level() == Level::BatchSelect;
                if ui
                    .add_enabled(!at_root, egui::Button::new("⬅ Back"))
                    .on_hover_text("Backspace")
                    .clicked()
                {
                    *next_message.borrow_mut() = Some(Message::GoBack);
                }

                ui.heading("Design Your Degree");

                let crumb = self.navigator.breadcrumb(&self.catalog);
                if !crumb.is_empty() {
                    ui.label(egui::RichText::new(crumb).color(style::MUTED));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = match self.ui.theme {
                        Theme::Dark => "☀",
                        Theme::Light => "🌙",
                    };
                    if ui.button(icon).on_hover_text("Toggle theme (t)").clicked() {
                        *next_message.borrow_mut() = Some(Message::ToggleTheme);
                    }
                    if ui.button("?").on_hover_text("Help").clicked() {
                        *next_message.borrow_mut() = Some(Message::ToggleHelp);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_bottom_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} items", self.listing.len()));
                if let Some((err, _)) = &self.ui.error_message {
                    ui.colored_label(egui::Color32::RED, format!(" | {}", err));
                } else if let Some((info, _)) = &self.ui.info_message {
                    ui.colored_label(style::ACCENT, format!(" | {}", info));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("Design Your Degree - University of Jammu")
                            .small()
                            .color(style::MUTED),
                    );
                });
            });
        });
    }

    pub(crate) fn render_listing(&self, ui: &mut egui::Ui, next_message: &RefCell<Option<Message>>) {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.heading(self.listing.title());
        });
        ui.separator();

        if self.listing.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(self.listing.empty_text()).color(style::MUTED));
            });
            return;
        }

        let rows = table_rows(&self.listing, self.ui.theme);
        let default_color = ui.visuals().text_color();

        egui::ScrollArea::vertical()
            .id_salt("listing_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_max_width(style::CONTENT_MAX_WIDTH.min(ui.available_width()));
                use egui_extras::{Column, TableBuilder};
                let mut table = TableBuilder::new(ui)
                    .striped(true)
                    .resizable(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::initial(style::ICON_COL_WIDTH))
                    .column(Column::remainder().clip(true))
                    .column(Column::auto());

                if let Some(idx) = self.selection.selected_index {
                    table = table.scroll_to_row(idx, None);
                }

                table
                    .header(style::HEADER_HEIGHT, |mut header| {
                        header.col(|ui| {
                            ui.label("");
                        });
                        header.col(|ui| {
                            ui.label("Name");
                        });
                        header.col(|ui| {
                            ui.label("#");
                        });
                    })
                    .body(|body| {
                        body.rows(style::ROW_HEIGHT, rows.len(), |mut row| {
                            let row_index = row.index();
                            let item = &rows[row_index];
                            row.set_selected(self.selection.selected_index == Some(row_index));

                            let mut color = item.color.unwrap_or(default_color);
                            if !item.enabled {
                                color = style::MUTED;
                            }

                            row.col(|ui| {
                                ui.label(
                                    egui::RichText::new(item.icon)
                                        .size(style::ICON_SIZE)
                                        .color(color),
                                );
                            });

                            row.col(|ui| {
                                let mut text = egui::RichText::new(&item.label).color(color);
                                if !item.enabled {
                                    text = text.italics();
                                }
                                let response = style::truncated_label_with_sense(
                                    ui,
                                    text,
                                    egui::Sense::click(),
                                );
                                let response = match &item.detail {
                                    Some(detail) => response.on_hover_text(detail.as_str()),
                                    None => response,
                                };
                                if response.clicked() {
                                    *next_message.borrow_mut() = Some(Message::Activate(row_index));
                                }
                                if let Some(detail) = &item.detail {
                                    ui.label(egui::RichText::new(detail).small().color(style::MUTED));
                                }
                            });

                            row.col(|ui| {
                                if row_index < 9 {
                                    ui.label(
                                        egui::RichText::new(format!("{}", row_index + 1))
                                            .color(style::MUTED),
                                    );
                                }
                            });
                        });
                    });
            });
    }
}
