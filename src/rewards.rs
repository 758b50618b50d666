use crate::model::{Category, RecordKind, Subject};

/// Actividades que dan puntos, con el valor que muestra el leaderboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Activity {
    #[default]
    Chat,
    ChatWithImage,
    Explanation,
    Practice,
    CodeDebug,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Activity::Chat,
        Activity::ChatWithImage,
        Activity::Explanation,
        Activity::Practice,
        Activity::CodeDebug,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Activity::Chat => "💬 Doubt answered",
            Activity::ChatWithImage => "📷 Photo doubt answered",
            Activity::Explanation => "📄 Topic explanation",
            Activity::Practice => "✅ Practice set",
            Activity::CodeDebug => "💻 Code debug",
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Activity::Chat => 10,
            Activity::ChatWithImage => 25,
            Activity::Explanation => 20,
            Activity::Practice => 50,
            Activity::CodeDebug => 30,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Activity::Chat | Activity::ChatWithImage | Activity::Explanation => Category::Doubt,
            Activity::Practice => Category::Practice,
            Activity::CodeDebug => Category::Code,
        }
    }

    pub fn record_kind(self) -> RecordKind {
        match self {
            Activity::Chat | Activity::ChatWithImage => RecordKind::Chat,
            Activity::Explanation => RecordKind::Explanation,
            Activity::Practice => RecordKind::Practice,
            Activity::CodeDebug => RecordKind::Code,
        }
    }

    /// Asignatura con la que se guarda en el historial si no se indica otra.
    pub fn default_subject(self) -> &'static str {
        match self {
            Activity::CodeDebug => "Coding",
            _ => Subject::General.name(),
        }
    }

    /// Sólo las explicaciones cuentan por asignatura.
    pub fn counts_subject(self) -> bool {
        matches!(self, Activity::Explanation)
    }
}
