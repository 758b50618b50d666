use crate::model::{DoubtRecord, RecordKind};

/// Máximo de entradas que se conservan en el historial.
pub const MAX_HISTORY: usize = 50;

impl DoubtRecord {
    /// Crea un registro con id único y la hora actual.
    pub fn new(question: &str, answer: &str, subject: &str, kind: RecordKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            subject: subject.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            kind,
        }
    }
}

/// Historial ordenado del más nuevo al más antiguo, acotado a `MAX_HISTORY`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    records: Vec<DoubtRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acepta una lista ya persistida; si viene más larga se recorta.
    pub fn from_records(mut records: Vec<DoubtRecord>) -> Self {
        records.truncate(MAX_HISTORY);
        Self { records }
    }

    pub fn push(&mut self, record: DoubtRecord) {
        self.records.insert(0, record);
        self.records.truncate(MAX_HISTORY);
    }

    pub fn records(&self) -> &[DoubtRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: usize) -> DoubtRecord {
        DoubtRecord::new(&format!("q{n}"), "a", "General", RecordKind::Chat)
    }

    #[test]
    fn newest_first() {
        let mut log = HistoryLog::new();
        log.push(record(1));
        log.push(record(2));
        assert_eq!(log.records()[0].question, "q2");
        assert_eq!(log.records()[1].question, "q1");
    }

    #[test]
    fn evicts_oldest_past_the_cap() {
        let mut log = HistoryLog::new();
        for n in 1..=MAX_HISTORY + 1 {
            log.push(record(n));
        }
        assert_eq!(log.len(), MAX_HISTORY);
        assert_eq!(log.records()[0].question, format!("q{}", MAX_HISTORY + 1));
        assert!(log.records().iter().all(|r| r.question != "q1"));
        assert_eq!(log.records().last().unwrap().question, "q2");
    }

    #[test]
    fn ids_are_distinct() {
        let a = record(1);
        let b = record(1);
        assert_ne!(a.id, b.id);
        assert!(a.timestamp > 0);
    }

    #[test]
    fn from_records_truncates() {
        let records: Vec<_> = (0..60).map(record).collect();
        assert_eq!(HistoryLog::from_records(records).len(), MAX_HISTORY);
    }
}
