use crate::model::Theme;
use crate::store::{KeyValueStore, THEME_KEY};
use egui::{Color32, Context, Visuals};

/// Preferencia guardada; si falta o no se reconoce, `Light`.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|id| Theme::from_id(&id))
        .unwrap_or_default()
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) {
    if let Err(e) = store.set(THEME_KEY, theme.id()) {
        log::warn!("No se pudo guardar el tema: {e}");
    }
}

pub fn visuals_for(theme: Theme) -> Visuals {
    let mut visuals = if theme.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    let fill = match theme {
        Theme::Light => None,
        Theme::Midnight => Some(Color32::from_rgb(24, 24, 27)),
        Theme::Sepia => Some(Color32::from_rgb(253, 246, 227)),
        Theme::Ocean => Some(Color32::from_rgb(15, 23, 42)),
        Theme::Forest => Some(Color32::from_rgb(2, 44, 34)),
    };
    if let Some(fill) = fill {
        visuals.panel_fill = fill;
        visuals.window_fill = fill;
    }
    visuals
}

pub fn apply_theme(ctx: &Context, theme: Theme) {
    ctx.set_visuals(visuals_for(theme));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn unknown_or_missing_theme_is_light() {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Light);
        store.set(THEME_KEY, "neon").unwrap();
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn saved_theme_is_restored() {
        let mut store = MemoryStore::new();
        save_theme(&mut store, Theme::Forest);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("forest"));
        assert_eq!(load_theme(&store), Theme::Forest);
    }

    #[test]
    fn dark_themes_use_dark_visuals() {
        assert!(visuals_for(Theme::Midnight).dark_mode);
        assert!(!visuals_for(Theme::Sepia).dark_mode);
    }
}
