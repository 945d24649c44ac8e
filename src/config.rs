//! Bloques de parámetros declarativos para las secuencias primitivas.
//!
//! Con el feature `serde` estos tipos se pueden cargar desde cualquier formato
//! soportado por serde (JSON, RON, TOML...). Los campos omitidos toman el
//! valor de [`Default`].

use std::time::Duration;

use crate::error::{Result, SequenceError, secs_to_duration};

/// Parámetros de un [`CursorMove`](crate::CursorMove).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CursorMoveConfig {
    /// Distancia mínima (en unidades del cursor) desde el origen.
    pub threshold: f32,
}

impl Default for CursorMoveConfig {
    fn default() -> Self {
        Self { threshold: 1.0 }
    }
}

impl CursorMoveConfig {
    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_finite() && self.threshold >= 0.0 {
            Ok(())
        } else {
            Err(SequenceError::InvalidThreshold(self.threshold))
        }
    }
}

/// Parámetros de un [`ButtonTap`](crate::ButtonTap).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonTapConfig {
    /// Ventana por tap, en segundos.
    pub window_secs: f32,
    /// Taps requeridos. `0` se normaliza a `1`.
    pub tap_count: u32,
    /// Ventana máxima entre la liberación de un tap y la siguiente pulsación, en segundos.
    pub gap_secs: f32,
}

impl Default for ButtonTapConfig {
    fn default() -> Self {
        Self {
            window_secs: 1.0,
            tap_count: 1,
            gap_secs: 0.0,
        }
    }
}

impl ButtonTapConfig {
    pub fn validate(&self) -> Result<()> {
        self.windows().map(|_| ())
    }

    /// `(window, gap)` como `Duration`.
    pub(crate) fn windows(&self) -> Result<(Duration, Duration)> {
        let window = secs_to_duration("window_secs", self.window_secs)?;
        let gap = secs_to_duration("gap_secs", self.gap_secs)?;
        Ok((window, gap))
    }
}
