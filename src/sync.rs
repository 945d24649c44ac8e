//! Fuentes compartidas entre el runtime de input y las secuencias.
//!
//! El runtime de input (normalmente en un task o hilo propio, ver
//! `orbit_input_core::RuntimeExt`) **escribe** la muestra del frame; las
//! secuencias la **leen** una vez por tick. El mecanismo de bloqueo se elige
//! con features, igual que en `orbit_input_core`:
//!
//! - `std_lock` (default): `std::sync::RwLock`
//! - `parking_lot`: `parking_lot::RwLock`
//!
//! Con `std`, un lock envenenado se sigue leyendo: un panic en el escritor no
//! debe tumbar la detección de gestos.

use std::sync::Arc;

#[cfg(feature = "parking_lot")]
pub use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(not(feature = "parking_lot"))]
pub use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Contenedor compartido de una fuente de input.
pub type Shared<T> = Arc<RwLock<T>>;

/// Envuelve un valor en un [`Shared`].
///
/// ```rust
/// use orbit_input_sequence::{share, sync, Vec2};
///
/// let cursor = share(Vec2::ZERO);
/// *sync::write(&cursor) = Vec2::new(3.0, 4.0);
/// assert_eq!(*sync::read(&cursor), Vec2::new(3.0, 4.0));
/// ```
pub fn share<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}

/// Adquiere el lock de lectura.
#[cfg(feature = "parking_lot")]
pub fn read<T: ?Sized>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read()
}

/// Adquiere el lock de lectura.
#[cfg(not(feature = "parking_lot"))]
pub fn read<T: ?Sized>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Adquiere el lock de escritura.
#[cfg(feature = "parking_lot")]
pub fn write<T: ?Sized>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write()
}

/// Adquiere el lock de escritura.
#[cfg(not(feature = "parking_lot"))]
pub fn write<T: ?Sized>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(std::sync::PoisonError::into_inner)
}
