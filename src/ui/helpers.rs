// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Tarjeta con un título pequeño arriba y un valor grande debajo.
pub fn stat_card(ui: &mut Ui, caption: &str, value: String, footer: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(caption).small().strong());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(footer).small().weak());
            });
        });
}

pub fn points_chip(ui: &mut Ui, points: u32) {
    ui.label(
        RichText::new(format!("⚡ {points} pts"))
            .color(Color32::from_rgb(234, 179, 8))
            .strong(),
    );
}
