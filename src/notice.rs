use std::time::Duration;
use web_time::Instant;

/// Tiempo que permanece visible el aviso de subida de nivel.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Aviso "Level Up!" propiedad de la UI. Un segundo aviso pisa al anterior.
#[derive(Debug, Clone, Default)]
pub struct LevelUpNotice {
    current: Option<(u32, Instant)>,
}

impl LevelUpNotice {
    pub fn show(&mut self, level: u32, now: Instant) {
        self.current = Some((level, now));
    }

    /// Nivel a mostrar, o `None` si no hay aviso o ya caducó.
    pub fn current(&mut self, now: Instant) -> Option<u32> {
        match self.current {
            Some((level, shown_at)) if now.saturating_duration_since(shown_at) < NOTICE_DURATION => {
                Some(level)
            }
            Some(_) => {
                self.current = None;
                None
            }
            None => None,
        }
    }

    /// Tiempo restante hasta que caduque (para pedir el repintado).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current
            .map(|(_, shown_at)| NOTICE_DURATION.saturating_sub(now.saturating_duration_since(shown_at)))
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_until_five_seconds() {
        let start = Instant::now();
        let mut notice = LevelUpNotice::default();
        notice.show(2, start);
        assert_eq!(notice.current(start + Duration::from_millis(4999)), Some(2));
        assert_eq!(notice.current(start + NOTICE_DURATION), None);
        assert_eq!(notice.current(start), None);
    }

    #[test]
    fn newer_notice_replaces_older() {
        let start = Instant::now();
        let mut notice = LevelUpNotice::default();
        notice.show(2, start);
        notice.show(3, start + Duration::from_secs(4));
        assert_eq!(notice.current(start + Duration::from_secs(6)), Some(3));
    }

    #[test]
    fn dismiss_and_remaining() {
        let start = Instant::now();
        let mut notice = LevelUpNotice::default();
        assert_eq!(notice.remaining(start), None);
        notice.show(4, start);
        assert_eq!(notice.remaining(start + Duration::from_secs(2)), Some(Duration::from_secs(3)));
        notice.dismiss();
        assert_eq!(notice.current(start), None);
    }
}
