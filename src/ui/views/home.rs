use crate::EduvaApp;
use crate::leaderboard::my_rank;
use crate::model::{Page, Subject};
use crate::rewards::Activity;
use crate::ui::helpers::{big_list_button, stat_card};
use crate::ui::layout::simple_panel;
use egui::{ComboBox, Context, ProgressBar, RichText, TextEdit};
use web_time::Instant;

pub fn ui_home(app: &mut EduvaApp, ctx: &Context) {
    let stats = app.tracker.stats().clone();
    let progress = app.tracker.level_progress();
    let to_next = app.tracker.points_to_next_level();
    let rank = my_rank(&stats);

    simple_panel(ctx, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("EDUVA").size(36.0).strong());
            ui.label("Simple. Smart. Student-Centric.");
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                stat_card(ui, "STUDY LEVEL", format!("Lvl {}", stats.level), "");
                stat_card(ui, "TOTAL POINTS", stats.points.to_string(), "lifetime knowledge points");
                stat_card(ui, "RANK", format!("#{rank}"), "among classmates");
            });
            ui.add_space(10.0);
            ui.add(
                ProgressBar::new(progress)
                    .text(format!("{to_next} pts to Level {}", stats.level + 1)),
            );
            ui.add_space(20.0);

            ui.label(format!(
                "💬 {} doubts   ✅ {} practice sets   💻 {} code sessions",
                stats.doubt_count, stats.practice_count, stats.code_count
            ));
            ui.add_space(20.0);

            activity_form(app, ui);
            ui.add_space(20.0);

            let btn_w = (ui.available_width() * 0.8).clamp(120.0, 400.0);
            if big_list_button(ui, "🕘 Achievements & history", btn_w, 40.0) {
                app.open_page(Page::History);
            }
            ui.add_space(5.0);
            if big_list_button(ui, "🏆 Leaderboard", btn_w, 40.0) {
                app.open_page(Page::Leaderboard);
            }
        });
    });
}

/// Registrar a mano una actividad terminada.
fn activity_form(app: &mut EduvaApp, ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.label(RichText::new("Log a completed activity").strong());
        ui.horizontal(|ui| {
            ComboBox::from_id_salt("activity_kind")
                .selected_text(app.form.activity.label())
                .show_ui(ui, |ui| {
                    for activity in Activity::ALL {
                        ui.selectable_value(&mut app.form.activity, activity, activity.label());
                    }
                });
            ui.add_enabled_ui(app.form.activity.counts_subject(), |ui| {
                ComboBox::from_id_salt("activity_subject")
                    .selected_text(app.form.subject.name())
                    .show_ui(ui, |ui| {
                        for subject in Subject::ALL {
                            ui.selectable_value(&mut app.form.subject, subject, subject.name());
                        }
                    });
            });
        });
        ui.add(TextEdit::singleline(&mut app.form.question).hint_text("Question or topic"));
        ui.add(
            TextEdit::multiline(&mut app.form.answer)
                .hint_text("Answer")
                .desired_rows(3),
        );
        let label = format!("Save (+{} pts)", app.form.activity.points());
        if ui.button(label).clicked() {
            app.submit_activity_form(Instant::now());
        }
    });
}
