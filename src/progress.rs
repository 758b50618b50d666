//! Motor de progresión: puntos, nivel, contadores, insignias e historial.
//!
//! Todo cambio pasa por [`ProgressTracker::award`] o
//! [`ProgressTracker::record_history`], y cada uno persiste en el
//! [`KeyValueStore`] antes de volver.

use crate::data::{badge_catalog, default_stats};
use crate::history::HistoryLog;
use crate::model::{
    Badge, Category, DoubtRecord, POINTS_PER_LEVEL, RecordKind, Stats, Subject, level_for_points,
};
use crate::rewards::Activity;
use crate::store::{HISTORY_KEY, KeyValueStore, STATS_KEY};

/// Avisos para la capa de presentación. No se persisten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    LevelUp { level: u32 },
    BadgeUnlocked { id: String, name: String },
}

/// ¿Cumple `stats` la regla de desbloqueo `criteria`? Las etiquetas
/// desconocidas nunca desbloquean.
pub fn criteria_met(criteria: &str, stats: &Stats) -> bool {
    match criteria {
        "doubt_5" => stats.doubt_count >= 5,
        "math_3" => stats.subject_count(Subject::Mathematics.name()) >= 3,
        "code_3" => stats.code_count >= 3,
        "practice_5" => stats.practice_count >= 5,
        _ => false,
    }
}

pub struct ProgressTracker<S: KeyValueStore> {
    stats: Stats,
    history: HistoryLog,
    events: Vec<ProgressEvent>,
    store: S,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    /// Estado inicial sin leer nada del almacén.
    pub fn new(store: S) -> Self {
        Self {
            stats: default_stats(),
            history: HistoryLog::new(),
            events: Vec::new(),
            store,
        }
    }

    /// Restaura el estado guardado. Si falta o no parsea se arranca de cero.
    pub fn load(store: S) -> Self {
        let stats = match store.get(STATS_KEY) {
            Some(raw) => match serde_json::from_str::<Stats>(&raw) {
                Ok(saved) => normalize_stats(saved),
                Err(e) => {
                    log::warn!("Progreso guardado ilegible, se empieza de cero: {e}");
                    default_stats()
                }
            },
            None => default_stats(),
        };

        let history = match store.get(HISTORY_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<DoubtRecord>>(&raw) {
                Ok(records) => HistoryLog::from_records(records),
                Err(e) => {
                    log::warn!("Historial guardado ilegible, se descarta: {e}");
                    HistoryLog::new()
                }
            },
            None => HistoryLog::new(),
        };

        log::info!(
            "Progreso cargado: {} puntos, nivel {}, {} entradas de historial",
            stats.points,
            stats.level,
            history.len()
        );

        Self {
            stats,
            history,
            events: Vec::new(),
            store,
        }
    }

    /// Suma puntos y cuenta la actividad. Nunca falla.
    pub fn award(&mut self, amount: u32, category: Category, subject: Option<&str>) {
        let previous_level = self.stats.level;
        let stats = &mut self.stats;

        stats.points = stats.points.saturating_add(amount);
        stats.level = level_for_points(stats.points);
        if stats.level > previous_level {
            log::info!("¡Subida a nivel {}!", stats.level);
            self.events.push(ProgressEvent::LevelUp { level: stats.level });
        }

        match category {
            Category::Doubt => {
                stats.doubt_count += 1;
                if let Some(subject) = subject {
                    *stats.subject_counts.entry(subject.to_string()).or_insert(0) += 1;
                }
            }
            Category::Practice => stats.practice_count += 1,
            Category::Code => stats.code_count += 1,
        }

        // Se evalúa con los contadores ya incrementados
        let snapshot = stats.clone();
        for badge in stats.badges.iter_mut().filter(|b| !b.unlocked) {
            if criteria_met(&badge.criteria, &snapshot) {
                badge.unlocked = true;
                self.events.push(ProgressEvent::BadgeUnlocked {
                    id: badge.id.clone(),
                    name: badge.name.clone(),
                });
            }
        }

        log::debug!(
            "+{amount} ({category:?}) → {} puntos, nivel {}",
            stats.points,
            stats.level
        );
        self.save_stats();
    }

    /// `award` con el valor de puntos documentado para la actividad.
    pub fn award_activity(&mut self, activity: Activity, subject: Option<&str>) {
        let subject = if activity.counts_subject() {
            Some(subject.unwrap_or(Subject::General.name()))
        } else {
            None
        };
        self.award(activity.points(), activity.category(), subject);
    }

    pub fn record_history(
        &mut self,
        question: &str,
        answer: &str,
        subject: &str,
        kind: RecordKind,
    ) -> DoubtRecord {
        let record = DoubtRecord::new(question, answer, subject, kind);
        log::debug!("Historial: nueva entrada {} ({:?})", record.id, kind);
        self.history.push(record.clone());
        self.save_history();
        record
    }

    /// Guarda estadísticas e historial.
    pub fn save(&mut self) {
        self.save_stats();
        self.save_history();
    }

    /// Vuelve al estado inicial y lo persiste.
    pub fn reset(&mut self) {
        self.stats = default_stats();
        self.history.clear();
        self.events.clear();
        self.save();
    }

    /// Vacía la cola de avisos en el orden en que se emitieron.
    pub fn take_events(&mut self) -> Vec<ProgressEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn history(&self) -> &[DoubtRecord] {
        self.history.records()
    }

    pub fn unlocked_badges(&self) -> impl Iterator<Item = &Badge> {
        self.stats.badges.iter().filter(|b| b.unlocked)
    }

    /// Fracción (0.0..1.0) recorrida dentro del nivel actual.
    pub fn level_progress(&self) -> f32 {
        (self.stats.points % POINTS_PER_LEVEL) as f32 / POINTS_PER_LEVEL as f32
    }

    pub fn points_to_next_level(&self) -> u32 {
        POINTS_PER_LEVEL - self.stats.points % POINTS_PER_LEVEL
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn save_stats(&mut self) {
        match serde_json::to_string(&self.stats) {
            Ok(json) => {
                if let Err(e) = self.store.set(STATS_KEY, &json) {
                    log::warn!("No se pudo guardar el progreso: {e}");
                }
            }
            Err(e) => log::warn!("No se pudo serializar el progreso: {e}"),
        }
    }

    fn save_history(&mut self) {
        match serde_json::to_string(self.history.records()) {
            Ok(json) => {
                if let Err(e) = self.store.set(HISTORY_KEY, &json) {
                    log::warn!("No se pudo guardar el historial: {e}");
                }
            }
            Err(e) => log::warn!("No se pudo serializar el historial: {e}"),
        }
    }
}

/// Ajusta un `Stats` leído del almacén: el nivel se recalcula desde los
/// puntos y las insignias siguen el catálogo actual (orden y metadatos),
/// conservando sólo el flag `unlocked` de las que ya existían.
fn normalize_stats(mut saved: Stats) -> Stats {
    saved.level = level_for_points(saved.points);
    saved.badges = badge_catalog()
        .into_iter()
        .map(|mut badge| {
            badge.unlocked = saved
                .badges
                .iter()
                .any(|old| old.id == badge.id && old.unlocked);
            badge
        })
        .collect();
    saved
}
