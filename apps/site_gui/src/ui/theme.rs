use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemePreset {
    #[default]
    Light,
    Dark,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Light => "Light",
            ThemePreset::Dark => "Dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreset::Light => ThemePreset::Dark,
            ThemePreset::Dark => ThemePreset::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitePalette {
    pub background: egui::Color32,
    pub foreground: egui::Color32,
    pub muted_text: egui::Color32,
    pub card_fill: egui::Color32,
    pub card_stroke: egui::Color32,
    pub subtle_fill: egui::Color32,
    pub nav_hover: egui::Color32,
}

impl SitePalette {
    /// Active nav entries invert the page colors.
    pub fn nav_active_fill(&self) -> egui::Color32 {
        self.foreground
    }

    pub fn nav_active_text(&self) -> egui::Color32 {
        self.background
    }
}

pub fn palette(preset: ThemePreset) -> SitePalette {
    match preset {
        ThemePreset::Light => SitePalette {
            background: egui::Color32::from_rgb(255, 255, 255),
            foreground: egui::Color32::from_rgb(15, 23, 42),
            muted_text: egui::Color32::from_rgb(100, 116, 139),
            card_fill: egui::Color32::from_rgb(255, 255, 255),
            card_stroke: egui::Color32::from_rgb(226, 232, 240),
            subtle_fill: egui::Color32::from_rgb(241, 245, 249),
            nav_hover: egui::Color32::from_rgb(241, 245, 249),
        },
        ThemePreset::Dark => SitePalette {
            background: egui::Color32::from_rgb(2, 8, 23),
            foreground: egui::Color32::from_rgb(248, 250, 252),
            muted_text: egui::Color32::from_rgb(148, 163, 184),
            card_fill: egui::Color32::from_rgb(15, 23, 42),
            card_stroke: egui::Color32::from_rgb(30, 41, 59),
            subtle_fill: egui::Color32::from_rgb(30, 41, 59),
            nav_hover: egui::Color32::from_rgb(30, 41, 59),
        },
    }
}

pub fn apply(ctx: &egui::Context, preset: ThemePreset) {
    let colors = palette(preset);
    let mut visuals = match preset {
        ThemePreset::Light => egui::Visuals::light(),
        ThemePreset::Dark => egui::Visuals::dark(),
    };
    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.background;
    visuals.override_text_color = Some(colors.foreground);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, colors.card_stroke);
    ctx.set_visuals(visuals);
}
