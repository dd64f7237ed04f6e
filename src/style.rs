use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse the config value; anything but "light" is dark.
    pub fn from_config(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

// --- Sizing ---
pub const ICON_SIZE: f32 = 14.0;
pub const ICON_COL_WIDTH: f32 = 30.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const CONTENT_MAX_WIDTH: f32 = 640.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 500.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;
pub const MODAL_HEIGHT_RATIO: f32 = 0.8;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Window ---
pub const WINDOW_WIDTH: f32 = 900.0;
pub const WINDOW_HEIGHT: f32 = 640.0;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const MUTED: egui::Color32 = egui::Color32::from_gray(120);

/// Colour for a catalog display tag. Unknown tags use the accent colour.
pub fn tag_color(tag: &str, theme: Theme) -> egui::Color32 {
    match tag.to_ascii_lowercase().as_str() {
        "green" => egui::Color32::from_rgb(74, 222, 128),
        "red" => egui::Color32::from_rgb(220, 38, 38),
        "violet" => egui::Color32::from_rgb(167, 139, 250),
        "blue" => egui::Color32::from_rgb(96, 165, 250),
        "gray" | "grey" => egui::Color32::from_rgb(156, 163, 175),
        "yellow" => egui::Color32::from_rgb(250, 204, 21),
        // Black text vanishes on the dark theme
        "black" => match theme {
            Theme::Light => egui::Color32::BLACK,
            Theme::Dark => egui::Color32::from_gray(210),
        },
        _ => ACCENT,
    }
}

// --- Helper functions ---

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(WINDOW_WIDTH)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn modal_max_height(ctx: &egui::Context) -> f32 {
    let height = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.height())
            .unwrap_or(WINDOW_HEIGHT)
    });
    height * MODAL_HEIGHT_RATIO
}

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
