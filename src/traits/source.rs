//! Este módulo define las **fuentes de capacidad** que consultan las secuencias:
//! una posición 2D de cursor y un estado de botón ordenado.
//!
//! Las fuentes son de **solo lectura** desde el punto de vista de las secuencias.
//! Quien las escribe es el runtime de input del host, una vez por frame.
//!
//! # Convenciones de tipos genéricos
//!
//! - **`ButtonStateExt<I>`**: Conversión de estados de botón
//!   - `I` = **I**nput (estado externo/nativo, ej: `bool`, `f32` analógico)
//!
//! # Ejemplos
//!
//! ## Fuentes triviales
//! ```rust
//! use orbit_input_sequence::{ButtonSource, ButtonState, CursorSource, Vec2};
//!
//! // Un `Vec2` ya es una fuente de cursor y un `ButtonState` una fuente de botón.
//! assert_eq!(Vec2::new(1.0, 2.0).position(), Vec2::new(1.0, 2.0));
//! assert!(ButtonState::Held.is_pressed());
//! ```
//!
//! ## Fuente personalizada
//! ```rust
//! use orbit_input_sequence::{ButtonSource, ButtonState, ButtonStateExt};
//!
//! struct GamepadTrigger { raw: f32 }
//!
//! impl ButtonSource for GamepadTrigger {
//!     fn state(&self) -> ButtonState {
//!         ButtonState::from_native(self.raw)
//!     }
//! }
//!
//! assert!(GamepadTrigger { raw: 0.4 }.is_pressed());
//! assert_eq!(GamepadTrigger { raw: 0.0 }.state(), ButtonState::None);
//! ```

/// Vector 2D usado para posiciones de cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Origen `(0, 0)`.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Distancia euclidiana **al cuadrado** entre `self` y `other`.
    ///
    /// Se usa en lugar de la distancia real para evitar la raíz cuadrada en
    /// cada tick; basta con comparar contra el umbral al cuadrado.
    pub fn sqr_distance(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Estado **ordenado** de un botón en un tick.
///
/// El orden es `None < Down < Held`, de modo que `state > ButtonState::None`
/// significa "presionado con al menos esta intensidad".
///
/// - `None`: el botón está suelto.
/// - `Down`: flanco de bajada, el botón se presionó en este tick.
/// - `Held`: el botón sigue presionado desde un tick anterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ButtonState {
    #[default]
    None,
    Down,
    Held,
}

impl ButtonState {
    /// Retorna `true` si el estado está por encima del piso `None`.
    pub fn is_pressed(self) -> bool {
        self > ButtonState::None
    }
}

/// # Trait `CursorSource`
///
/// Capacidad de **muestreo de posición 2D**, consultada una vez por tick.
///
/// Una secuencia nunca escribe en la fuente: la posición la actualiza el
/// runtime de input del host. Las secuencias guardan la fuente como
/// `Option<Shared<C>>`; `None` modela una capacidad ausente.
pub trait CursorSource {
    /// Posición actual del cursor.
    fn position(&self) -> Vec2;
}

impl CursorSource for Vec2 {
    fn position(&self) -> Vec2 {
        *self
    }
}

/// # Trait `ButtonSource`
///
/// Capacidad de **muestreo de estado de botón**, consultada una vez por tick.
///
/// ## Ejemplo
/// ```rust
/// use orbit_input_sequence::{ButtonSource, ButtonState};
///
/// struct Mouse { left: bool }
///
/// impl ButtonSource for Mouse {
///     fn state(&self) -> ButtonState {
///         if self.left { ButtonState::Held } else { ButtonState::None }
///     }
/// }
///
/// assert!(Mouse { left: true }.is_pressed());
/// ```
pub trait ButtonSource {
    /// Estado actual del botón.
    fn state(&self) -> ButtonState;

    /// Retorna `true` si el estado actual está por encima de [`ButtonState::None`].
    fn is_pressed(&self) -> bool {
        self.state().is_pressed()
    }
}

impl ButtonSource for ButtonState {
    fn state(&self) -> ButtonState {
        *self
    }
}

/// El trait [`ButtonStateExt`] define la interfaz para **traducir estados de botón nativos**
/// de un backend al [`ButtonState`] ordenado que consumen las secuencias.
///
/// # Propósito
/// Mantiene el desacoplamiento entre los backends (teclado digital, gatillos
/// analógicos, pantallas táctiles) y la lógica de detección de gestos, del
/// mismo modo que `KeyStateExt` en `orbit_input_core`.
///
/// # Parámetros genéricos
/// - `I`: Tipo de estado **externo o nativo (Input)**.
///
/// # Reglas de implementación
/// - Las conversiones deben ser **deterministas**.
/// - Un valor nativo "suelto" debe mapear a [`ButtonState::None`].
/// - `to_native` puede perder información (por ejemplo, `Down` y `Held`
///   colapsan en el mismo valor nativo).
///
/// # Ejemplo
/// ```rust
/// use orbit_input_sequence::{ButtonState, ButtonStateExt};
///
/// assert_eq!(ButtonState::from_native(true), ButtonState::Held);
/// assert_eq!(ButtonState::from_native(0.0_f32), ButtonState::None);
/// assert!(!<ButtonState as ButtonStateExt<bool>>::to_native(ButtonState::None));
/// ```
pub trait ButtonStateExt<I>
where
    I: Copy + PartialEq,
{
    /// Convierte un estado nativo del backend (`I`) a [`ButtonState`].
    fn from_native(state: I) -> ButtonState;

    /// Convierte un [`ButtonState`] a su equivalente nativo (`I`).
    fn to_native(state: ButtonState) -> I;
}

impl ButtonStateExt<bool> for ButtonState {
    fn from_native(state: bool) -> ButtonState {
        if state { ButtonState::Held } else { ButtonState::None }
    }

    fn to_native(state: ButtonState) -> bool {
        state.is_pressed()
    }
}

/// Gatillos analógicos: cualquier valor positivo cuenta como presionado.
impl ButtonStateExt<f32> for ButtonState {
    fn from_native(state: f32) -> ButtonState {
        if state > 0.0 { ButtonState::Held } else { ButtonState::None }
    }

    fn to_native(state: ButtonState) -> f32 {
        if state.is_pressed() { 1.0 } else { 0.0 }
    }
}
