use log::debug;

use crate::traits::sequence::{Sequence, Tick};

/// Carrera entre secuencias: termina en cuanto **una** de sus hijas termina.
///
/// - `on_start` arranca a todas las hijas en orden, sin cortocircuito.
/// - `update` las avanza en orden de registro y se detiene en la primera que
///   retorna `true`; las siguientes no reciben `update` en ese tick.
/// - Sin hijas, el primer `update` termina de inmediato.
///
/// Las perdedoras quedan en el estado de su último tick: no se resetean ni se
/// cancelan. Tras terminar, `update` retorna `true` sin tocar a ninguna hija
/// hasta el siguiente `on_start`.
///
/// ```rust
/// use std::time::Duration;
/// use orbit_input_sequence::{
///     share, ButtonState, ButtonTap, CursorMove, FirstSuccessfulSequence, Sequence, Tick, Vec2,
/// };
///
/// let cursor = share(Vec2::ZERO);
/// let button = share(ButtonState::None);
///
/// let mut either = FirstSuccessfulSequence::new()
///     .with(Box::new(CursorMove::new(Some(cursor), 10.0, None)))
///     .with(Box::new(ButtonTap::new(Some(button), Duration::from_secs(1), None)));
///
/// either.on_start();
/// assert!(!either.update(&Tick::new(Duration::from_millis(16))));
/// ```
#[derive(Default)]
pub struct FirstSuccessfulSequence {
    sequences: Vec<Box<dyn Sequence>>,
    winner: Option<usize>,
    done: bool,
}

impl FirstSuccessfulSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega una hija y retorna `self` (estilo builder).
    pub fn with(mut self, sequence: Box<dyn Sequence>) -> Self {
        self.push(sequence);
        self
    }

    pub fn push(&mut self, sequence: Box<dyn Sequence>) {
        self.sequences.push(sequence);
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Sequence> {
        self.sequences.iter().map(|sequence| sequence.as_ref())
    }

    /// Índice de la hija que ganó la última carrera, si la hubo.
    ///
    /// Una carrera sin hijas termina sin ganadora.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }
}

impl FromIterator<Box<dyn Sequence>> for FirstSuccessfulSequence {
    fn from_iter<I: IntoIterator<Item = Box<dyn Sequence>>>(iter: I) -> Self {
        Self {
            sequences: iter.into_iter().collect(),
            winner: None,
            done: false,
        }
    }
}

impl Sequence for FirstSuccessfulSequence {
    fn on_start(&mut self) {
        self.winner = None;
        self.done = false;
        for sequence in &mut self.sequences {
            sequence.on_start();
        }
    }

    fn update(&mut self, tick: &Tick) -> bool {
        if self.done || self.sequences.is_empty() {
            self.done = true;
            return true;
        }

        let Some(index) = self
            .sequences
            .iter_mut()
            .position(|sequence| sequence.update(tick))
        else {
            return false;
        };

        debug!("FirstSuccessfulSequence: hija {index} ganó en frame {}", tick.frame);
        self.winner = Some(index);
        self.done = true;
        true
    }
}
