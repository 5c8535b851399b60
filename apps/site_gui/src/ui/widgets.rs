use eframe::egui;

use crate::ui::{content, theme::SitePalette};

pub const NAV_ENTRY_HEIGHT: f32 = 32.0;

/// Pill-shaped nav button; highlighted when `selected`.
pub fn nav_entry(
    ui: &mut egui::Ui,
    label: &str,
    selected: bool,
    palette: &SitePalette,
) -> egui::Response {
    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        egui::FontId::proportional(14.0),
        egui::Color32::PLACEHOLDER,
    );
    let desired = egui::vec2(galley.size().x + 24.0, NAV_ENTRY_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());

    let hovered = response.hovered();
    let fill = if selected {
        palette.nav_active_fill()
    } else if hovered {
        palette.nav_hover
    } else {
        egui::Color32::TRANSPARENT
    };
    let text_color = if selected {
        palette.nav_active_text()
    } else if hovered {
        palette.foreground
    } else {
        palette.muted_text
    };

    if fill != egui::Color32::TRANSPARENT {
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(10), fill);
    }
    ui.painter().galley(
        rect.center() - galley.size() / 2.0,
        galley,
        text_color,
    );

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

pub fn primary_button(ui: &mut egui::Ui, text: &str, palette: &SitePalette) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(text).color(palette.background))
            .fill(palette.foreground)
            .corner_radius(egui::CornerRadius::same(14))
            .min_size(egui::vec2(0.0, 36.0)),
    )
}

pub fn secondary_button(ui: &mut egui::Ui, text: &str, palette: &SitePalette) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(text).color(palette.foreground))
            .fill(palette.subtle_fill)
            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
            .corner_radius(egui::CornerRadius::same(14))
            .min_size(egui::vec2(0.0, 36.0)),
    )
}

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(28.0).strong());
}

pub fn muted(ui: &mut egui::Ui, text: &str, palette: &SitePalette) {
    ui.label(egui::RichText::new(text).color(palette.muted_text));
}

pub fn card<R>(
    ui: &mut egui::Ui,
    palette: &SitePalette,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::new()
        .fill(palette.card_fill)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::same(16))
        .show(ui, add_contents)
}

pub fn callout(ui: &mut egui::Ui, title: &str, body: &str, palette: &SitePalette) {
    egui::Frame::new()
        .fill(palette.subtle_fill)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).size(13.0).strong());
            muted(ui, body, palette);
        });
}

pub fn bullet_list(ui: &mut egui::Ui, items: &[&str], palette: &SitePalette) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("•").color(palette.muted_text));
            ui.label(*item);
        });
    }
}

pub fn chips(ui: &mut egui::Ui, items: &[&str], palette: &SitePalette) {
    ui.horizontal_wrapped(|ui| {
        for item in items {
            egui::Frame::new()
                .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::symmetric(10, 4))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(*item).size(12.0));
                });
        }
    });
}

pub fn stat(ui: &mut egui::Ui, stat: &content::Stat, palette: &SitePalette) {
    card(ui, palette, |ui| {
        ui.label(
            egui::RichText::new(stat.label)
                .size(11.0)
                .color(palette.muted_text),
        );
        ui.label(egui::RichText::new(stat.value).size(18.0).strong());
        ui.label(
            egui::RichText::new(stat.note)
                .size(11.0)
                .color(palette.muted_text),
        );
    });
}

pub fn titled_list_card(ui: &mut egui::Ui, list: &content::TitledList, caption: &str, palette: &SitePalette) {
    card(ui, palette, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(list.title).strong());
        muted(ui, caption, palette);
        ui.add_space(8.0);
        bullet_list(ui, list.items, palette);
    });
}
