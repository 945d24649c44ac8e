use std::time::Duration;

/// Contexto de un tick del host.
///
/// `delta` es el tiempo **sin escalar** transcurrido desde el tick anterior
/// (no se ve afectado por pausas o cámara lenta del juego). `frame` es un
/// contador monotónico útil para logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick {
    pub delta: Duration,
    pub frame: u64,
}

impl Tick {
    /// Primer tick (`frame == 0`).
    pub fn new(delta: Duration) -> Self {
        Self { delta, frame: 0 }
    }

    /// Tick siguiente a `self`, con un nuevo `delta`.
    pub fn next(self, delta: Duration) -> Self {
        Self {
            delta,
            frame: self.frame.wrapping_add(1),
        }
    }
}

/// Callback de finalización exitosa de una secuencia.
pub type Callback = Box<dyn FnMut()>;

/// # Trait `Sequence`
///
/// Un **detector de gestos con estado** que se consulta una vez por tick.
///
/// Es la unidad básica del motor de secuencias: encapsula temporizadores y
/// contadores internos, y un callback opcional que se dispara cuando el gesto
/// se satisface.
///
/// ## Ciclo de vida
///
/// ```text
///   construir ──► on_start() ──► update() ─┬─► false ──► update() ...
///                     ▲                    │
///                     │                    └─► true  ──► descartar
///                     └──────── (reutilizar) ◄───────────────┘
/// ```
///
/// 1. Se construye con sus parámetros de detección y su callback.
/// 2. [`on_start`](Self::on_start) reinicia temporizadores y contadores.
/// 3. [`update`](Self::update) se llama **a lo sumo una vez por tick**.
/// 4. Cuando `update` retorna `true`, el dueño deja de llamarla. Solo un
///    nuevo `on_start` la habilita otra vez.
///
/// ## Éxito vs. fallo
///
/// `true` significa "terminé", no "tuve éxito". Una secuencia que expira o
/// cuya fuente de input está ausente también retorna `true`, pero **sin**
/// disparar su callback. Quien necesite distinguir ambos casos debe observar
/// el callback.
///
/// ## Cancelación
///
/// No existe un método de cancelación: el dueño simplemente deja de llamar a
/// `update` y suelta el objeto. No hay limpieza garantizada más allá de `Drop`.
///
/// ## Ejemplo de implementación
///
/// ```rust
/// use orbit_input_sequence::{Sequence, Tick};
///
/// /// Termina después de `n` ticks.
/// struct CountDown { n: u32, left: u32 }
///
/// impl Sequence for CountDown {
///     fn on_start(&mut self) {
///         self.left = self.n;
///     }
///
///     fn update(&mut self, _tick: &Tick) -> bool {
///         self.left = self.left.saturating_sub(1);
///         self.left == 0
///     }
/// }
/// ```
pub trait Sequence {
    /// Reinicia el estado interno de la secuencia.
    fn on_start(&mut self);

    /// Avanza un tick. Retorna `true` cuando la secuencia terminó.
    fn update(&mut self, tick: &Tick) -> bool;
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    fn on_start(&mut self) {
        (**self).on_start();
    }

    fn update(&mut self, tick: &Tick) -> bool {
        (**self).update(tick)
    }
}
