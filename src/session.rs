//! Contrato con el proveedor de respuestas externo y el paso que convierte
//! una respuesta completada en puntos + historial.

use crate::model::DoubtRecord;
use crate::progress::ProgressTracker;
use crate::rewards::Activity;
use crate::store::KeyValueStore;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Empty answer")]
    EmptyAnswer,
}

/// Cualquier servicio que responda a un prompt (opcionalmente con una
/// instrucción de sistema).
pub trait AnswerProvider {
    fn answer(&self, prompt: &str, system_instruction: Option<&str>) -> Result<String, ProviderError>;
}

/// Aplica el resultado de una petición ya terminada. Sólo un `Ok` toca el
/// estado; un error se devuelve sin cambios para que la UI lo muestre.
pub fn complete<S: KeyValueStore>(
    tracker: &mut ProgressTracker<S>,
    activity: Activity,
    question: &str,
    subject: Option<&str>,
    result: Result<String, ProviderError>,
) -> Result<DoubtRecord, ProviderError> {
    let answer = result?;
    if answer.trim().is_empty() {
        return Err(ProviderError::EmptyAnswer);
    }
    let subject = subject.unwrap_or(activity.default_subject());
    tracker.award_activity(activity, Some(subject));
    Ok(tracker.record_history(question, &answer, subject, activity.record_kind()))
}

/// Pide la respuesta al proveedor y la aplica con [`complete`].
pub fn ask<S: KeyValueStore, P: AnswerProvider + ?Sized>(
    provider: &P,
    tracker: &mut ProgressTracker<S>,
    activity: Activity,
    question: &str,
    subject: Option<&str>,
    system_instruction: Option<&str>,
) -> Result<DoubtRecord, ProviderError> {
    let result = provider.answer(question, system_instruction);
    complete(tracker, activity, question, subject, result)
}
