mod helpers;
pub mod layout;
pub mod views;

use crate::app::EduvaApp;
use crate::model::Page;
use crate::theme::apply_theme;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, level_up_toast, top_panel};
use web_time::Instant;

impl App for EduvaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if !self.theme_applied {
            apply_theme(ctx, self.theme);
            self.theme_applied = true;
        }

        let now = Instant::now();
        self.poll_events(now);

        // BARRA SUPERIOR: marca, puntos y navegación
        top_panel(self, ctx);

        // PANEL INFERIOR: selector de tema y borrar progreso
        bottom_panel(self, ctx);

        match self.ui_state.page {
            Page::Home => views::home::ui_home(self, ctx),
            Page::History => views::history::ui_history(self, ctx),
            Page::Leaderboard => views::leaderboard::ui_leaderboard(self, ctx),
        }

        level_up_toast(self, ctx, now);

        if self.confirm_reset {
            layout::confirm_reset(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.ui_state);
        self.tracker.save();
    }
}
