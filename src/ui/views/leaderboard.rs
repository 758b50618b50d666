use crate::EduvaApp;
use crate::leaderboard::leaderboard;
use crate::rewards::Activity;
use crate::ui::layout::simple_panel;
use egui::{Color32, Context, Grid, RichText};

pub fn ui_leaderboard(app: &mut EduvaApp, ctx: &Context) {
    let entries = leaderboard(app.tracker.stats());

    simple_panel(ctx, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("🏆 Study Leaderboard").size(28.0).strong());
            ui.label("Track your growth compared to top EDUVA learners.");
        });
        ui.add_space(16.0);

        Grid::new("leaderboard_grid")
            .striped(true)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for entry in &entries {
                    let rank = RichText::new(entry.rank.to_string()).heading();
                    let rank = match entry.rank {
                        1 => rank.color(Color32::from_rgb(234, 179, 8)),
                        3 => rank.color(Color32::from_rgb(249, 115, 22)),
                        _ => rank,
                    };
                    ui.label(rank);
                    ui.label(RichText::new(entry.avatar.to_string()).strong());

                    let name = RichText::new(&entry.name).strong();
                    ui.label(if entry.is_me { name.underline() } else { name });
                    ui.label(format!("Level {} Tutor", entry.level));
                    ui.label(RichText::new(format!("⭐ {}", entry.points)).strong());
                    ui.end_row();
                }
            });

        ui.add_space(24.0);
        ui.heading("Earn points & climb the ranks");
        ui.add_space(8.0);
        Grid::new("points_grid").spacing([24.0, 6.0]).show(ui, |ui| {
            for (label, activity) in [
                ("💬 Doubt queries", Activity::Chat),
                ("✅ Practice sets", Activity::Practice),
                ("💻 Code debug", Activity::CodeDebug),
            ] {
                ui.label(label);
                ui.label(RichText::new(format!("+{} pts", activity.points())).strong());
                ui.end_row();
            }
        });
    });
}
