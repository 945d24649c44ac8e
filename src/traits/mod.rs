//! Protocolo de traits del motor de secuencias.
//!
//! - [`sequence`]: el trait [`Sequence`](sequence::Sequence) y el contexto [`Tick`](sequence::Tick)
//! - [`source`]: fuentes de capacidad (cursor, botón) y conversión de estados nativos
//! - [`runtime`]: el contrato del driver de ticks del host

pub mod runtime;
pub mod sequence;
pub mod source;
