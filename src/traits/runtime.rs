use crate::traits::sequence::{Sequence, Tick};

/// # Trait `DriverExt`
///
/// Define el **contrato del driver de ticks** que posee las secuencias vivas.
///
/// El driver pertenece al host (el game loop del motor). Este trait fija lo
/// que las secuencias esperan de él, de modo que cualquier motor pueda
/// implementarlo con su propio almacenamiento. [`SequenceDriver`](crate::SequenceDriver)
/// es la implementación de referencia.
///
/// ## Responsabilidades
///
/// - ✅ Llamar a `on_start` al registrar una secuencia
/// - ✅ Llamar a `update` **una vez por tick** por secuencia activa, en orden de registro
/// - ✅ Retirar una secuencia en el mismo tick en que `update` retorna `true`
/// - ❌ **NO** cancela ni resetea secuencias abandonadas (no existe hook de cancelación)
/// - ❌ **NO** muestrea input (eso es responsabilidad del runtime de input)
///
/// ## Diagrama conceptual
///
/// ```text
/// ┌──────────────────────────────────────────────────────────────┐
/// │                        Game Loop                             │
/// │                                                              │
/// │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐      │
/// │  │ Input Runtime│ → │ Shared<...>  │ ← │  Sequences   │      │
/// │  │ (escribe)    │   │ (muestra)    │   │  (leen)      │      │
/// │  └──────────────┘   └──────────────┘   └──────▲───────┘      │
/// │                                               │              │
/// │  loop {                                       │              │
/// │      runtime.poll();                          │              │
/// │      driver.tick(&tick);  ────────────────────┘              │
/// │  }                                                           │
/// └──────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Modelo de concurrencia
///
/// Cooperativo y de un solo hilo: todas las transiciones ocurren dentro de
/// `tick`. No hay hilos en segundo plano ni puntos de suspensión.
///
/// ## Ejemplo de uso
///
/// ```rust
/// use std::time::Duration;
/// use orbit_input_sequence::{share, CursorMove, DriverExt, SequenceDriver, Tick, Vec2, sync};
///
/// let cursor = share(Vec2::ZERO);
/// let mut driver = SequenceDriver::new();
/// driver.start(Box::new(CursorMove::new(Some(cursor.clone()), 5.0, None)));
///
/// let tick = Tick::new(Duration::from_millis(16));
/// assert_eq!(driver.tick(&tick), 0);
///
/// *sync::write(&cursor) = Vec2::new(5.0, 0.0);
/// assert_eq!(driver.tick(&tick.next(Duration::from_millis(16))), 1);
/// assert_eq!(driver.active(), 0);
/// ```
pub trait DriverExt {
    // ==================== REGISTRO ====================

    /// Llama a `on_start` sobre la secuencia y la agrega al conjunto activo.
    ///
    /// La secuencia no recibe `update` hasta el siguiente [`tick`](Self::tick).
    fn start(&mut self, sequence: Box<dyn Sequence>);

    /// Descarta todas las secuencias activas **sin** notificarlas.
    fn clear(&mut self);

    // ==================== AVANCE ====================

    /// Avanza un tick: actualiza cada secuencia activa una vez, en orden de
    /// registro, y retira las que terminaron.
    ///
    /// Retorna cuántas secuencias terminaron en este tick.
    fn tick(&mut self, tick: &Tick) -> usize;

    // ==================== MONITOREO ====================

    /// Cantidad de secuencias activas.
    fn active(&self) -> usize;

    /// Total de secuencias terminadas desde que se creó el driver.
    fn completed_total(&self) -> u64;

    /// Retorna `true` si no hay secuencias activas.
    fn is_idle(&self) -> bool {
        self.active() == 0
    }
}
