use super::*;
use crate::model::DoubtRecord;
use crate::progress::ProgressEvent;
use crate::rewards::Activity;
use crate::session::{ProviderError, complete};
use crate::theme::save_theme;
use web_time::Instant;

impl EduvaApp {
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        self.theme_applied = false;
        save_theme(self.tracker.store_mut(), theme);
    }

    /// Aplica al resultado de una petición terminada y refresca los avisos.
    pub fn complete_activity(
        &mut self,
        activity: Activity,
        question: &str,
        subject: Option<&str>,
        result: Result<String, ProviderError>,
        now: Instant,
    ) -> Option<DoubtRecord> {
        match complete(&mut self.tracker, activity, question, subject, result) {
            Ok(record) => {
                self.message.clear();
                self.poll_events(now);
                Some(record)
            }
            Err(e) => {
                self.message = format!("❌ {e}");
                None
            }
        }
    }

    /// Envía el formulario de la portada. La materia solo cuenta en las
    /// explicaciones; el resto usa la materia por defecto de la actividad.
    pub fn submit_activity_form(&mut self, now: Instant) -> Option<DoubtRecord> {
        let activity = self.form.activity;
        let subject = activity.counts_subject().then(|| self.form.subject.name());
        let question = self.form.question.trim().to_string();
        let answer = self.form.answer.clone();
        let record = self.complete_activity(activity, &question, subject, Ok(answer), now)?;
        self.form.question.clear();
        self.form.answer.clear();
        Some(record)
    }

    /// Vacía la cola del tracker: el nivel va al aviso, las insignias al mensaje.
    pub fn poll_events(&mut self, now: Instant) {
        for event in self.tracker.take_events() {
            match event {
                ProgressEvent::LevelUp { level } => self.notice.show(level, now),
                ProgressEvent::BadgeUnlocked { name, .. } => {
                    self.message = format!("🏅 Badge unlocked: {name}");
                }
            }
        }
    }

    pub fn reset_progress(&mut self) {
        self.tracker.reset();
        self.notice.dismiss();
        self.confirm_reset = false;
        self.ui_state.expanded_record = None;
        self.message = "Progress cleared.".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Subject;
    use crate::store::MemoryStore;
    use std::time::Duration;

    fn app() -> EduvaApp {
        EduvaApp::new(Box::new(MemoryStore::new()), UiState::default())
    }

    #[test]
    fn level_up_reaches_notice() {
        let mut app = app();
        let now = Instant::now();
        for _ in 0..5 {
            app.complete_activity(Activity::Practice, "Revision: Graphs", None, Ok("Q1..".into()), now);
        }
        assert_eq!(app.message, "🏅 Badge unlocked: Dedicated");
        assert_eq!(app.notice.current(now), None);

        for _ in 0..5 {
            app.complete_activity(Activity::Practice, "Revision: Graphs", None, Ok("Q1..".into()), now);
        }
        assert_eq!(app.tracker.stats().points, 500);
        assert_eq!(app.notice.current(now + Duration::from_secs(1)), Some(2));
    }

    #[test]
    fn provider_error_sets_message_only() {
        let mut app = app();
        let out = app.complete_activity(
            Activity::Chat,
            "hi",
            None,
            Err(ProviderError::Request("offline".into())),
            Instant::now(),
        );
        assert!(out.is_none());
        assert_eq!(app.tracker.stats().points, 0);
        assert!(app.message.contains("offline"));
    }

    #[test]
    fn activity_form_unlocks_subject_badge() {
        let mut app = app();
        let now = Instant::now();
        for topic in ["Limits", "Derivatives", "Integrals"] {
            app.form.activity = Activity::Explanation;
            app.form.subject = Subject::Mathematics;
            app.form.question = format!("  {topic} ");
            app.form.answer = "Notes...".into();
            let record = app.submit_activity_form(now).unwrap();
            assert_eq!(record.question, topic);
            assert_eq!(record.subject, "Mathematics");
            assert!(app.form.question.is_empty() && app.form.answer.is_empty());
        }
        let stats = app.tracker.stats();
        assert_eq!(stats.points, 60);
        assert_eq!(stats.subject_count("Mathematics"), 3);
        assert!(app.tracker.unlocked_badges().any(|b| b.criteria == "math_3"));
        assert_eq!(app.tracker.history().len(), 3);
    }

    #[test]
    fn activity_form_ignores_subject_outside_explanations() {
        let mut app = app();
        app.form.activity = Activity::CodeDebug;
        app.form.subject = Subject::Java;
        app.form.question = "segfault".into();
        app.form.answer = "check bounds".into();
        let record = app.submit_activity_form(Instant::now()).unwrap();
        assert_eq!(record.subject, "Coding");
        assert_eq!(app.tracker.stats().code_count, 1);
        assert!(app.tracker.stats().subject_counts.is_empty());
    }

    #[test]
    fn activity_form_rejects_blank_answer() {
        let mut app = app();
        app.form.activity = Activity::Practice;
        app.form.question = "Revision: Trees".into();
        app.form.answer = "   ".into();
        assert!(app.submit_activity_form(Instant::now()).is_none());
        assert_eq!(app.tracker.stats().points, 0);
        assert!(app.tracker.history().is_empty());
        assert!(!app.message.is_empty());
        assert_eq!(app.form.question, "Revision: Trees");
    }

    #[test]
    fn theme_is_persisted_through_tracker_store() {
        let mut app = app();
        app.set_theme(Theme::Ocean);
        let store = app.tracker.into_store();
        let reopened = EduvaApp::new(store, UiState::default());
        assert_eq!(reopened.theme, Theme::Ocean);
    }

    #[test]
    fn reset_clears_progress_and_notice() {
        let mut app = app();
        let now = Instant::now();
        app.complete_activity(Activity::CodeDebug, "loop", None, Ok("fix".into()), now);
        app.tracker.award(500, crate::model::Category::Code, None);
        app.poll_events(now);
        app.reset_progress();
        assert_eq!(app.tracker.stats().points, 0);
        assert_eq!(app.notice.current(now), None);
        assert!(app.tracker.history().is_empty());
    }
}
