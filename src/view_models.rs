// src/view_models.rs

use crate::model::{Badge, DoubtRecord, Stats};

/// Resumen que muestra la cabecera de la página de historial.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsOverview {
    pub level: u32,
    pub points: u32,
    pub unlocked_badges: usize,
    pub total_badges: usize,
    pub level_progress: f32, // 0.0..1.0 dentro del nivel actual
}

impl StatsOverview {
    pub fn from_stats(stats: &Stats, level_progress: f32) -> Self {
        Self {
            level: stats.level,
            points: stats.points,
            unlocked_badges: stats.badges.iter().filter(|b| b.unlocked).count(),
            total_badges: stats.badges.len(),
            level_progress,
        }
    }

    pub fn achievements_label(&self) -> String {
        format!("{}/{} badges", self.unlocked_badges, self.total_badges)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeCard {
    pub title: String,
    pub description: String,
    pub unlocked: bool,
}

impl BadgeCard {
    pub fn from_badge(badge: &Badge) -> Self {
        Self {
            title: format!("{} {}", badge.icon, badge.name),
            description: badge.description.clone(),
            unlocked: badge.unlocked,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.unlocked {
            "Unlocked achievement ✨"
        } else {
            "Locked achievement 🔒"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: String,
    pub header: String,
    pub subject: String,
    pub date: String,
    pub answer: String,
}

impl HistoryRow {
    pub fn from_record(record: &DoubtRecord) -> Self {
        let date = chrono::DateTime::from_timestamp_millis(record.timestamp)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        Self {
            id: record.id.clone(),
            header: format!("{} {}", record.kind.icon(), record.question),
            subject: record.subject.clone(),
            date,
            answer: record.answer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_stats;
    use crate::model::RecordKind;

    #[test]
    fn overview_counts_unlocked() {
        let mut stats = default_stats();
        stats.badges[1].unlocked = true;
        let overview = StatsOverview::from_stats(&stats, 0.2);
        assert_eq!(overview.achievements_label(), "1/4 badges");
    }

    #[test]
    fn history_row_formats_date_and_icon() {
        let record = DoubtRecord {
            id: "x".into(),
            question: "Explain: Recursion (Algorithms)".into(),
            answer: "...".into(),
            subject: "Algorithms".into(),
            timestamp: 1_700_000_000_000,
            kind: RecordKind::Explanation,
        };
        let row = HistoryRow::from_record(&record);
        assert_eq!(row.date, "2023-11-14");
        assert!(row.header.starts_with("📄 "));
    }

    #[test]
    fn badge_card_status() {
        let stats = default_stats();
        let card = BadgeCard::from_badge(&stats.badges[0]);
        assert_eq!(card.title, "🧠 Curious Mind");
        assert!(!card.unlocked);
        assert!(card.status().starts_with("Locked"));
    }
}
