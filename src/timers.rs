//! Scheduler de timers explícito, avanzado por el host.
//!
//! No hay estado global ni callbacks de plataforma: el dueño del
//! [`TimerScheduler`] decide cuándo avanza el reloj (normalmente con el mismo
//! `delta` que recibe el [`SequenceDriver`](crate::SequenceDriver)).
//!
//! ```rust
//! use std::time::Duration;
//! use orbit_input_sequence::TimerScheduler;
//!
//! let mut timers = TimerScheduler::new();
//! timers.schedule(Duration::from_millis(250), Box::new(|| println!("¡listo!")));
//!
//! assert_eq!(timers.advance(Duration::from_millis(200)), 0);
//! assert_eq!(timers.advance(Duration::from_millis(50)), 1);
//! assert_eq!(timers.pending(), 0);
//! ```

use std::fmt;
use std::time::Duration;

use log::trace;

use crate::error::{Result, SequenceError};
use crate::traits::sequence::Callback;

/// Identificador de un timer programado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

struct Timer {
    id: TimerId,
    due: Duration,
    interval: Option<Duration>,
    callback: Callback,
}

/// Colección de timers de una sola vez y repetitivos sobre un reloj propio.
#[derive(Default)]
pub struct TimerScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiempo acumulado por [`advance`](Self::advance).
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Cantidad de timers pendientes.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.iter().any(|timer| timer.id == id)
    }

    /// Programa `callback` para dentro de `delay`. Un `delay` cero dispara en
    /// el próximo `advance`.
    pub fn schedule(&mut self, delay: Duration, callback: Callback) -> TimerId {
        self.insert(delay, None, callback)
    }

    /// Programa `callback` cada `interval`, empezando dentro de `interval`.
    pub fn schedule_repeating(&mut self, interval: Duration, callback: Callback) -> Result<TimerId> {
        if interval.is_zero() {
            return Err(SequenceError::ZeroInterval);
        }
        Ok(self.insert(interval, Some(interval), callback))
    }

    /// Cancela un timer pendiente.
    pub fn cancel(&mut self, id: TimerId) -> Result<()> {
        let index = self
            .timers
            .iter()
            .position(|timer| timer.id == id)
            .ok_or(SequenceError::UnknownTimer(id))?;
        self.timers.remove(index);
        trace!("TimerScheduler: {id} cancelado");
        Ok(())
    }

    /// Descarta todos los timers sin dispararlos.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Avanza el reloj y dispara los timers vencidos, ordenados por
    /// vencimiento y luego por orden de inserción.
    ///
    /// Un timer repetitivo dispara a lo sumo una vez por llamada; se
    /// reprograma desde su vencimiento anterior, no desde `now`.
    ///
    /// El reloj y los vencimientos se saturan en `Duration::MAX`: un timer a
    /// `Duration::MAX` nunca vence antes de que el reloj llegue a ese tope.
    ///
    /// Retorna cuántos callbacks se ejecutaron.
    pub fn advance(&mut self, delta: Duration) -> usize {
        self.now = self.now.saturating_add(delta);
        let now = self.now;

        let (mut due, pending): (Vec<Timer>, Vec<Timer>) =
            std::mem::take(&mut self.timers).into_iter().partition(|timer| timer.due <= now);
        self.timers = pending;
        due.sort_by_key(|timer| (timer.due, timer.id));

        let fired = due.len();
        for mut timer in due {
            trace!("TimerScheduler: {} disparado en {:?}", timer.id, now);
            (timer.callback)();
            if let Some(interval) = timer.interval {
                timer.due = timer.due.saturating_add(interval);
                self.timers.push(timer);
            }
        }
        fired
    }

    fn insert(&mut self, delay: Duration, interval: Option<Duration>, callback: Callback) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(delay);
        self.timers.push(Timer {
            id,
            due,
            interval,
            callback,
        });
        trace!("TimerScheduler: {id} programado para {due:?}");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Callback) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |name: &'static str| -> Callback {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.borrow_mut().push(name))
        };
        (log, make)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn one_shot_fires_once_when_due() {
        let (log, make) = recorder();
        let mut timers = TimerScheduler::new();
        let id = timers.schedule(ms(100), make("a"));
        assert!(timers.is_scheduled(id));

        assert_eq!(timers.advance(ms(99)), 0);
        assert_eq!(timers.advance(ms(1)), 1);
        assert_eq!(timers.advance(ms(500)), 0);
        assert_eq!(*log.borrow(), ["a"]);
        assert!(!timers.is_scheduled(id));
        assert_eq!(timers.now(), ms(600));
    }

    #[test]
    fn due_timers_fire_by_due_time_then_insertion() {
        let (log, make) = recorder();
        let mut timers = TimerScheduler::new();
        timers.schedule(ms(30), make("late"));
        timers.schedule(ms(10), make("early"));
        timers.schedule(ms(30), make("late-2"));

        assert_eq!(timers.advance(ms(50)), 3);
        assert_eq!(*log.borrow(), ["early", "late", "late-2"]);
    }

    #[test]
    fn repeating_timer_fires_once_per_advance() {
        let (log, make) = recorder();
        let mut timers = TimerScheduler::new();
        let id = timers.schedule_repeating(ms(100), make("tick")).unwrap();

        assert_eq!(timers.advance(ms(250)), 1);
        // Reprogramado a 200 ms, que ya venció.
        assert_eq!(timers.advance(Duration::ZERO), 1);
        assert_eq!(timers.advance(Duration::ZERO), 0);
        assert_eq!(log.borrow().len(), 2);

        timers.cancel(id).unwrap();
        assert_eq!(timers.advance(ms(1000)), 0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let (_, make) = recorder();
        let mut timers = TimerScheduler::new();
        assert_eq!(
            timers.schedule_repeating(Duration::ZERO, make("x")).err(),
            Some(SequenceError::ZeroInterval)
        );
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn cancelling_unknown_timer_fails() {
        let (_, make) = recorder();
        let mut timers = TimerScheduler::new();
        let id = timers.schedule(Duration::ZERO, make("now"));
        assert_eq!(timers.advance(Duration::ZERO), 1);
        assert_eq!(timers.cancel(id), Err(SequenceError::UnknownTimer(id)));
    }

    #[test]
    fn far_future_timers_saturate_instead_of_overflowing() {
        let (log, make) = recorder();
        let mut timers = TimerScheduler::new();
        timers.advance(ms(1));
        let never = timers.schedule(Duration::MAX, make("never"));
        let slow = timers
            .schedule_repeating(Duration::MAX, make("slow"))
            .unwrap();

        assert_eq!(timers.advance(ms(1000)), 0);
        assert!(timers.is_scheduled(never));
        assert!(timers.is_scheduled(slow));

        // El reloj se satura en el tope y ambos vencen ahí una vez.
        assert_eq!(timers.advance(Duration::MAX), 2);
        assert_eq!(timers.now(), Duration::MAX);
        assert_eq!(*log.borrow(), ["never", "slow"]);

        // El repetitivo queda reprogramado en el tope, sin desbordar.
        assert!(timers.is_scheduled(slow));
        assert_eq!(timers.advance(ms(1)), 1);
    }

    #[test]
    fn clear_drops_pending_timers() {
        let (log, make) = recorder();
        let mut timers = TimerScheduler::new();
        timers.schedule(ms(10), make("a"));
        timers.schedule(ms(20), make("b"));
        timers.clear();
        assert_eq!(timers.advance(ms(100)), 0);
        assert!(log.borrow().is_empty());
    }
}
