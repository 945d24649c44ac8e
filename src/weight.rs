//! Peso que disminuye con el tiempo.
//!
//! Útil para atenuar la influencia de un input reciente (por ejemplo, el
//! empuje de un gesto de arrastre) durante unos cuantos frames.

use std::time::Duration;

use crate::error::{Result, SequenceError};

/// Curva de caída de un [`DiminishingWeight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Falloff {
    /// `1 - t`
    #[default]
    Linear,
    /// `(1 - t)²`: cae rápido al principio.
    Quadratic,
    /// `1` hasta el final de la duración, luego `0`.
    Instant,
}

/// Peso en `[0, 1]` que empieza en `1` y llega a `0` tras `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiminishingWeight {
    duration: Duration,
    elapsed: Duration,
    falloff: Falloff,
}

impl DiminishingWeight {
    pub fn new(duration: Duration, falloff: Falloff) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            falloff,
        }
    }

    /// Igual que [`new`](Self::new) con la duración en segundos.
    pub fn from_secs(secs: f32, falloff: Falloff) -> Result<Self> {
        let duration =
            Duration::try_from_secs_f32(secs).map_err(|_| SequenceError::InvalidDuration(secs))?;
        Ok(Self::new(duration, falloff))
    }

    /// Vuelve a peso completo.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
    }

    pub fn is_spent(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn weight(&self) -> f32 {
        if self.is_spent() {
            return 0.0;
        }
        let t = (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        match self.falloff {
            Falloff::Linear => 1.0 - t,
            Falloff::Quadratic => (1.0 - t) * (1.0 - t),
            Falloff::Instant => 1.0,
        }
    }

    /// `value * weight()`.
    pub fn apply(&self, value: f32) -> f32 {
        value * self.weight()
    }
}
