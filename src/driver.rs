//! Implementación de referencia de [`DriverExt`].

use std::time::Duration;

use log::{debug, trace};

use crate::traits::runtime::DriverExt;
use crate::traits::sequence::{Sequence, Tick};

/// Driver de ticks que posee un conjunto de secuencias vivas.
///
/// Pensado para el game loop: una llamada a [`advance`](Self::advance) (o a
/// [`DriverExt::tick`]) por frame.
#[derive(Default)]
pub struct SequenceDriver {
    live: Vec<Box<dyn Sequence>>,
    completed: u64,
    last_tick: Option<Tick>,
}

impl SequenceDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construye el siguiente [`Tick`] con `delta` y avanza.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let tick = match self.last_tick {
            Some(last) => last.next(delta),
            None => Tick::new(delta),
        };
        self.tick(&tick)
    }

    /// Último tick procesado.
    pub fn last_tick(&self) -> Option<Tick> {
        self.last_tick
    }
}

impl DriverExt for SequenceDriver {
    fn start(&mut self, mut sequence: Box<dyn Sequence>) {
        sequence.on_start();
        self.live.push(sequence);
        trace!("SequenceDriver: {} secuencias activas", self.live.len());
    }

    fn clear(&mut self) {
        if !self.live.is_empty() {
            debug!("SequenceDriver: descartando {} secuencias activas", self.live.len());
        }
        self.live.clear();
    }

    fn tick(&mut self, tick: &Tick) -> usize {
        let before = self.live.len();
        self.live.retain_mut(|sequence| !sequence.update(tick));
        let finished = before - self.live.len();

        self.completed += finished as u64;
        self.last_tick = Some(*tick);
        if finished > 0 {
            debug!(
                "SequenceDriver: {finished} secuencias terminaron en frame {} ({} activas)",
                tick.frame,
                self.live.len()
            );
        }
        finished
    }

    fn active(&self) -> usize {
        self.live.len()
    }

    fn completed_total(&self) -> u64 {
        self.completed
    }
}
