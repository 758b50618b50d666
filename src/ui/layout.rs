use crate::EduvaApp;
use crate::model::{Page, Theme};
use crate::ui::helpers::points_chip;
use egui::{Align, Align2, ComboBox, Context, Frame, RichText, Ui};
use web_time::Instant;

const NAV_ITEMS: [(Page, &str); 3] = [
    (Page::Home, "🏠 Home"),
    (Page::Leaderboard, "🏆 Leaderboard"),
    (Page::History, "🕘 History"),
];

pub fn top_panel(app: &mut EduvaApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("EDUVA").heading().strong());
            ui.separator();
            points_chip(ui, app.tracker.stats().points);

            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                // right_to_left invierte el orden
                for (page, label) in NAV_ITEMS.iter().rev() {
                    if ui.selectable_label(app.ui_state.page == *page, *label).clicked() {
                        app.open_page(*page);
                    }
                }
            });
        });
    });
}

pub fn bottom_panel(app: &mut EduvaApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
            theme_selector(app, ui);
            if ui.button("🔄 Reset progress").clicked() {
                app.confirm_reset = true;
            }
            if !app.message.is_empty() {
                ui.label(&app.message);
            }
        });
    });
}

fn theme_selector(app: &mut EduvaApp, ui: &mut Ui) {
    let mut selected = app.theme;
    ComboBox::from_id_salt("theme_selector")
        .selected_text(format!("🎨 {}", selected.label()))
        .show_ui(ui, |ui| {
            for theme in Theme::ALL {
                ui.selectable_value(&mut selected, theme, theme.label());
            }
        });
    app.set_theme(selected);
}

/// Aviso flotante "Level Up!"; se repinta al caducar para que desaparezca solo.
pub fn level_up_toast(app: &mut EduvaApp, ctx: &Context, now: Instant) {
    let Some(level) = app.notice.current(now) else {
        return;
    };
    if let Some(remaining) = app.notice.remaining(now) {
        ctx.request_repaint_after(remaining);
    }

    egui::Area::new(egui::Id::new("level_up_toast"))
        .anchor(Align2::CENTER_TOP, [0.0, 72.0])
        .show(ctx, |ui| {
            Frame::popup(ui.style())
                .inner_margin(egui::Margin::symmetric(24, 12))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("⬆").size(28.0));
                        ui.vertical(|ui| {
                            ui.label(RichText::new("Level Up!").heading().strong());
                            ui.label(format!("You've reached Level {level}"));
                        });
                        if ui.small_button("✖").clicked() {
                            app.notice.dismiss();
                        }
                    });
                });
        });
}

pub fn confirm_reset(app: &mut EduvaApp, ctx: &Context) {
    egui::Window::new("Confirm reset")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Delete all points, badges and history? This cannot be undone.");
            ui.horizontal(|ui| {
                if ui.button("Yes, delete").clicked() {
                    app.reset_progress();
                }
                if ui.button("No").clicked() {
                    app.confirm_reset = false;
                }
            });
        });
}

/// Panel central con un ancho máximo, como el resto de vistas.
pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                ui.set_max_width(w);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        inner(ui);
                    });
            });
        });
    });
}
