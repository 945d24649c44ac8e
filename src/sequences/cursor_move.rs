use log::debug;

use crate::config::CursorMoveConfig;
use crate::error::Result;
use crate::sync::{self, Shared};
use crate::traits::sequence::{Callback, Sequence, Tick};
use crate::traits::source::{CursorSource, Vec2};

/// Termina cuando el cursor se aleja al menos `threshold` de la posición que
/// tenía en [`on_start`](Sequence::on_start).
///
/// La comparación es `distancia² >= threshold²`, así que un umbral de `0`
/// termina en el primer `update`. Nunca expira por tiempo.
///
/// Sin fuente de cursor (`None`), el primer `update` termina **sin** disparar
/// el callback. Una vez terminada, `update` retorna `true` sin efectos hasta el
/// siguiente `on_start`.
pub struct CursorMove<C> {
    cursor: Option<Shared<C>>,
    threshold: f32,
    origin: Vec2,
    on_complete: Option<Callback>,
    done: bool,
}

impl<C: CursorSource> CursorMove<C> {
    pub fn new(cursor: Option<Shared<C>>, threshold: f32, on_complete: Option<Callback>) -> Self {
        Self {
            cursor,
            threshold,
            origin: Vec2::ZERO,
            on_complete,
            done: false,
        }
    }

    /// Construye desde un [`CursorMoveConfig`] validado.
    pub fn from_config(
        cursor: Option<Shared<C>>,
        config: &CursorMoveConfig,
        on_complete: Option<Callback>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(cursor, config.threshold, on_complete))
    }

    /// Posición capturada en el último `on_start`.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl<C: CursorSource> Sequence for CursorMove<C> {
    fn on_start(&mut self) {
        self.done = false;
        if let Some(cursor) = &self.cursor {
            self.origin = sync::read(cursor).position();
        }
    }

    fn update(&mut self, tick: &Tick) -> bool {
        if self.done {
            return true;
        }

        let Some(cursor) = &self.cursor else {
            debug!("CursorMove sin fuente de cursor; terminando en frame {}", tick.frame);
            self.done = true;
            return true;
        };

        let position = sync::read(cursor).position();
        if self.origin.sqr_distance(position) < self.threshold * self.threshold {
            return false;
        }

        debug!(
            "CursorMove completado en frame {}: {:?} -> {:?}",
            tick.frame, self.origin, position
        );
        self.done = true;
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        true
    }
}
