use crate::EduvaApp;
use crate::ui::helpers::stat_card;
use crate::ui::layout::simple_panel;
use crate::view_models::{BadgeCard, HistoryRow, StatsOverview};
use egui::{Context, Grid, ProgressBar, RichText};

pub fn ui_history(app: &mut EduvaApp, ctx: &Context) {
    let overview = StatsOverview::from_stats(app.tracker.stats(), app.tracker.level_progress());
    let cards: Vec<BadgeCard> = app.tracker.stats().badges.iter().map(BadgeCard::from_badge).collect();
    let rows: Vec<HistoryRow> = app.tracker.history().iter().map(HistoryRow::from_record).collect();

    simple_panel(ctx, 700.0, |ui| {
        // Resumen
        ui.horizontal(|ui| {
            stat_card(ui, "STUDY LEVEL", format!("Lvl {}", overview.level), "progress to next level");
            stat_card(ui, "ACHIEVEMENTS", overview.unlocked_badges.to_string(), "unlocked badges");
            stat_card(ui, "TOTAL POINTS", overview.points.to_string(), "lifetime knowledge points");
        });
        ui.add(ProgressBar::new(overview.level_progress).show_percentage());
        ui.add_space(20.0);

        ui.heading("Your Achievements");
        ui.label(overview.achievements_label());
        ui.add_space(8.0);
        Grid::new("badges_grid")
            .num_columns(2)
            .spacing([16.0, 12.0])
            .show(ui, |ui| {
                for (i, card) in cards.iter().enumerate() {
                    ui.add_enabled_ui(card.unlocked, |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&card.title).strong());
                            ui.label(RichText::new(card.status()).small());
                            ui.label(RichText::new(&card.description).italics().small());
                        });
                    });
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(20.0);

        ui.heading("Your Learning History");
        ui.label(RichText::new("Re-visiting doubts strengthens memory.").italics());
        ui.add_space(8.0);

        if rows.is_empty() {
            ui.label("Clean Slate! Ask your first doubt to start your journey.");
            return;
        }

        for row in &rows {
            let expanded = app.is_record_expanded(&row.id);
            let arrow = if expanded { "⏷" } else { "⏵" };
            let header = ui.selectable_label(expanded, format!("{arrow} {}", row.header));
            ui.horizontal(|ui| {
                ui.label(RichText::new(&row.subject).small().strong());
                ui.label(RichText::new(format!("🕒 {}", row.date)).small().weak());
            });
            if header.clicked() {
                app.toggle_record(&row.id);
            }
            if expanded {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(&row.answer);
                });
            }
            ui.separator();
        }
    });
}
