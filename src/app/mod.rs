use crate::model::{Page, Subject, Theme};
use crate::notice::LevelUpNotice;
use crate::progress::ProgressTracker;
use crate::rewards::Activity;
use crate::store::KeyValueStore;
use crate::theme::load_theme;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod navigation;

pub type Tracker = ProgressTracker<Box<dyn KeyValueStore>>;

/// Estado de la interfaz que guarda eframe entre sesiones. El progreso va
/// aparte, en el `KeyValueStore`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct UiState {
    pub page: Page,
    pub expanded_record: Option<String>,
}

/// Registro manual de una actividad ya terminada (sin proveedor).
#[derive(Clone, Debug, Default)]
pub struct ActivityForm {
    pub activity: Activity,
    pub subject: Subject,
    pub question: String,
    pub answer: String,
}

pub struct EduvaApp {
    pub ui_state: UiState,
    pub form: ActivityForm,
    pub tracker: Tracker,
    pub theme: Theme,
    pub notice: LevelUpNotice,
    pub message: String,
    pub confirm_reset: bool,
    pub theme_applied: bool,
}

impl EduvaApp {
    pub fn new(store: Box<dyn KeyValueStore>, ui_state: UiState) -> Self {
        let theme = load_theme(&store);
        Self {
            ui_state,
            form: ActivityForm::default(),
            tracker: ProgressTracker::load(store),
            theme,
            notice: LevelUpNotice::default(),
            message: String::new(),
            confirm_reset: false,
            theme_applied: false,
        }
    }

    /// Recupera la página abierta de la sesión anterior (si eframe la guardó).
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>, store: Box<dyn KeyValueStore>) -> Self {
        let ui_state = cc
            .storage
            .and_then(|storage| eframe::get_value::<UiState>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::new(store, ui_state)
    }
}
