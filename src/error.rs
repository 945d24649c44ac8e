//! Errores del crate.
//!
//! Las secuencias nunca fallan en tiempo de ejecución: una fuente ausente o un
//! timeout solo terminan la secuencia sin disparar su callback. Los errores de
//! este módulo aparecen únicamente al **construir** desde configuración o al
//! usar mal el [`TimerScheduler`](crate::TimerScheduler).

use thiserror::Error;

use crate::timers::TimerId;

/// Error producido al construir secuencias o al operar el scheduler de timers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    /// El umbral de distancia de un [`CursorMove`](crate::CursorMove) es negativo o no finito.
    #[error("umbral de distancia inválido: {0}")]
    InvalidThreshold(f32),

    /// Una ventana de tiempo (por tap o entre taps) es negativa o no finita.
    #[error("ventana de tiempo inválida para `{field}`: {value} s")]
    InvalidWindow { field: &'static str, value: f32 },

    /// Una duración genérica (por ejemplo, de un [`DiminishingWeight`](crate::DiminishingWeight))
    /// no puede representarse como `Duration`.
    #[error("duración inválida: {0} s")]
    InvalidDuration(f32),

    /// Un timer repetitivo con intervalo cero dispararía infinitamente.
    #[error("un timer repetitivo requiere un intervalo mayor que cero")]
    ZeroInterval,

    /// El identificador no corresponde a ningún timer pendiente.
    #[error("timer desconocido: {0:?}")]
    UnknownTimer(TimerId),
}

/// Alias de `Result` con [`SequenceError`].
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Convierte segundos (`f32`) a `Duration`, rechazando valores negativos o no finitos.
pub(crate) fn secs_to_duration(field: &'static str, value: f32) -> Result<std::time::Duration> {
    std::time::Duration::try_from_secs_f32(value)
        .map_err(|_| SequenceError::InvalidWindow { field, value })
}
