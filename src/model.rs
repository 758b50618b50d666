use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Puntos necesarios para subir un nivel.
pub const POINTS_PER_LEVEL: u32 = 500;

/// Nivel derivado de los puntos: nunca se guarda por separado.
pub fn level_for_points(points: u32) -> u32 {
    points / POINTS_PER_LEVEL + 1
}

/// Categoría de un evento de puntos; decide qué contador se incrementa.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Doubt,
    Practice,
    Code,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Chat,
    Explanation,
    Practice,
    Code,
}

impl RecordKind {
    pub fn icon(self) -> &'static str {
        match self {
            RecordKind::Chat => "💬",
            RecordKind::Explanation => "📄",
            RecordKind::Practice => "✅",
            RecordKind::Code => "💻",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Subject {
    C,
    Java,
    Dbms,
    Os,
    Mathematics,
    DataStructures,
    Algorithms,
    #[default]
    General,
}

impl Subject {
    pub const ALL: [Subject; 8] = [
        Subject::C,
        Subject::Java,
        Subject::Dbms,
        Subject::Os,
        Subject::Mathematics,
        Subject::DataStructures,
        Subject::Algorithms,
        Subject::General,
    ];

    /// Nombre visible; es también la clave en `subject_counts`.
    pub fn name(self) -> &'static str {
        match self {
            Subject::C => "C",
            Subject::Java => "Java",
            Subject::Dbms => "DBMS",
            Subject::Os => "OS",
            Subject::Mathematics => "Mathematics",
            Subject::DataStructures => "Data Structures",
            Subject::Algorithms => "Algorithms",
            Subject::General => "General",
        }
    }

    pub fn from_name(name: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.name() == name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub unlocked: bool,
    pub criteria: String,
}

/// Foto completa del progreso del usuario. Los nombres JSON son los que
/// guardaba la versión web, para poder leer datos ya existentes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub points: u32,
    pub level: u32,
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub doubt_count: u32,
    #[serde(default)]
    pub practice_count: u32,
    #[serde(default)]
    pub code_count: u32,
    #[serde(default)]
    pub subject_counts: HashMap<String, u32>,
}

impl Stats {
    pub fn with_badges(badges: Vec<Badge>) -> Self {
        Self {
            points: 0,
            level: 1,
            badges,
            doubt_count: 0,
            practice_count: 0,
            code_count: 0,
            subject_counts: HashMap::new(),
        }
    }

    pub fn subject_count(&self, subject: &str) -> u32 {
        self.subject_counts.get(subject).copied().unwrap_or(0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DoubtRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub subject: String,
    /// Milisegundos desde epoch (igual que `Date.now()` en la web).
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: RecordKind,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Midnight,
    Sepia,
    Ocean,
    Forest,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Light,
        Theme::Midnight,
        Theme::Sepia,
        Theme::Ocean,
        Theme::Forest,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Midnight => "midnight",
            Theme::Sepia => "sepia",
            Theme::Ocean => "ocean",
            Theme::Forest => "forest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Midnight => "Midnight",
            Theme::Sepia => "Sepia",
            Theme::Ocean => "Ocean",
            Theme::Forest => "Forest",
        }
    }

    pub fn from_id(id: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.id() == id.trim())
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Midnight | Theme::Ocean | Theme::Forest)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    History,
    Leaderboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(499), 1);
        assert_eq!(level_for_points(500), 2);
        assert_eq!(level_for_points(1499), 3);
    }

    #[test]
    fn doubt_record_uses_web_field_names() {
        let record = DoubtRecord {
            id: "abc".into(),
            question: "q".into(),
            answer: "a".into(),
            subject: "OS".into(),
            timestamp: 42,
            kind: RecordKind::Explanation,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "explanation");
        assert_eq!(json["timestamp"], 42);
    }

    #[test]
    fn stats_reads_camel_case_payload() {
        let raw = r#"{"points":120,"level":1,"badges":[],"doubtCount":4,
            "practiceCount":1,"codeCount":0,"subjectCounts":{"Mathematics":2}}"#;
        let stats: Stats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.doubt_count, 4);
        assert_eq!(stats.subject_count("Mathematics"), 2);
        assert_eq!(stats.subject_count("OS"), 0);
    }

    #[test]
    fn theme_ids_round_trip_and_dark_set() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_id(theme.id()), Some(theme));
        }
        assert_eq!(Theme::from_id("neon"), None);
        assert!(Theme::Ocean.is_dark());
        assert!(!Theme::Sepia.is_dark());
    }

    #[test]
    fn subject_names_resolve() {
        assert_eq!(Subject::from_name("Data Structures"), Some(Subject::DataStructures));
        assert_eq!(Subject::from_name("Physics"), None);
    }
}
