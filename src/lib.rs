//! # Crate `orbit_input_sequence`
//!
//! **Motor de secuencias de input** para **Orbit Engine**: detectores de gestos
//! con estado que se consultan una vez por tick.
//!
//! Donde `orbit_input_core` responde "¿qué está presionado **ahora**?", este
//! crate responde "¿ocurrió **este gesto** a lo largo de varios frames?":
//! mover el cursor cierta distancia, hacer doble tap en un botón, o lo que
//! ocurra primero entre varios gestos.
//!
//! ---
//!
//! ## Modelo
//!
//! - Una [`Sequence`] expone dos operaciones: [`on_start`](Sequence::on_start)
//!   y [`update`](Sequence::update) → `¿terminé?`.
//! - Las secuencias leen **fuentes de capacidad** ([`CursorSource`],
//!   [`ButtonSource`]) compartidas con el runtime de input vía [`Shared`].
//! - Un **driver** ([`DriverExt`], [`SequenceDriver`]) llama a `update` una vez
//!   por tick y descarta las secuencias que terminaron.
//!
//! ```text
//!  Input Runtime ──escribe──► Shared<Vec2> / Shared<ButtonState>
//!                                     │ lee
//!                                     ▼
//!  Game Loop ──tick──► SequenceDriver ──update──► CursorMove / ButtonTap / FirstSuccessfulSequence
//! ```
//!
//! ---
//!
//! ## Contenido del crate
//!
//! ### Traits
//! - [`Sequence`]: detector de gestos por tick
//! - [`CursorSource`], [`ButtonSource`]: fuentes de input de solo lectura
//! - [`ButtonStateExt<I>`]: convierte estados nativos a [`ButtonState`]
//! - [`DriverExt`]: contrato del driver de ticks del host
//!
//! ### Secuencias
//! - [`CursorMove`]: el cursor se alejó al menos un umbral del origen
//! - [`ButtonTap`]: `n` taps, cada uno dentro de una ventana, separados por un gap máximo
//! - [`FirstSuccessfulSequence`]: carrera, gana la primera hija que termina
//!
//! ### Utilidades
//! - [`SequenceDriver`]: driver de referencia
//! - [`TimerScheduler`]: timers de una vez y repetitivos, sin estado global
//! - [`DiminishingWeight`]: peso que cae a cero con el tiempo
//!
//! ---
//!
//! ## Ejemplo: doble tap o arrastre, lo que ocurra primero
//!
//! ```rust
//! use std::time::Duration;
//! use orbit_input_sequence::{
//!     share, sync, ButtonState, ButtonTap, CursorMove, DriverExt, FirstSuccessfulSequence,
//!     SequenceDriver, Vec2,
//! };
//!
//! let cursor = share(Vec2::ZERO);
//! let button = share(ButtonState::None);
//!
//! let gesture = FirstSuccessfulSequence::new()
//!     .with(Box::new(CursorMove::new(
//!         Some(cursor.clone()),
//!         25.0,
//!         Some(Box::new(|| println!("arrastre"))),
//!     )))
//!     .with(Box::new(ButtonTap::with_taps(
//!         Some(button.clone()),
//!         Duration::from_millis(300),
//!         2,
//!         Duration::from_millis(250),
//!         Some(Box::new(|| println!("doble tap"))),
//!     )));
//!
//! let mut driver = SequenceDriver::new();
//! driver.start(Box::new(gesture));
//!
//! let frame = Duration::from_millis(16);
//! for state in [ButtonState::Down, ButtonState::None, ButtonState::Down, ButtonState::None] {
//!     *sync::write(&button) = state;
//!     driver.advance(frame);
//! }
//! assert!(driver.is_idle());
//! ```
//!
//! ---
//!
//! ## Semántica de terminación
//!
//! `update` retorna `true` tanto si el gesto se cumplió como si expiró o si la
//! fuente de input está ausente. **Solo el callback distingue el éxito.**
//! Ningún fallo es fatal: en el peor caso una secuencia termina sin disparar
//! su callback.
//!
//! ---
//!
//! ## Features
//!
//! - `std_lock` (default): [`Shared`] usa `std::sync::RwLock`
//! - `parking_lot`: [`Shared`] usa `parking_lot::RwLock`
//! - `serde`: `Serialize`/`Deserialize` para [`CursorMoveConfig`], [`ButtonTapConfig`] y [`Falloff`]
//!
//! ---
//!
//! ## Módulos
//!
//! - [`traits`]: el protocolo
//! - [`sequences`]: secuencias concretas
//! - [`sync`]: contenedor compartido de fuentes

pub mod config;
pub mod driver;
pub mod error;
pub mod sequences;
pub mod sync;
pub mod timers;
pub mod traits;
pub mod weight;

pub use config::{ButtonTapConfig, CursorMoveConfig};
pub use driver::SequenceDriver;
pub use error::{Result, SequenceError};
pub use sequences::{ButtonTap, CursorMove, FirstSuccessfulSequence, TapState};
pub use sync::{Shared, share};
pub use timers::{TimerId, TimerScheduler};
pub use traits::runtime::DriverExt;
pub use traits::sequence::{Callback, Sequence, Tick};
pub use traits::source::{ButtonSource, ButtonState, ButtonStateExt, CursorSource, Vec2};
pub use weight::{DiminishingWeight, Falloff};
