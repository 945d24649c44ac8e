use std::time::Duration;

use log::{debug, trace};

use crate::config::ButtonTapConfig;
use crate::error::Result;
use crate::sync::{self, Shared};
use crate::traits::sequence::{Callback, Sequence, Tick};
use crate::traits::source::ButtonSource;

/// Fase de un [`ButtonTap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapState {
    /// Esperando la primera pulsación (o la de un tap dentro de la ventana).
    WaitingForPress,
    /// El botón está abajo; el tap cuenta al soltarlo.
    WaitingForRelease,
    /// Tap contado, esperando la siguiente pulsación dentro de `gap`.
    WaitingForNextTap,
    /// Terminada, con o sin éxito.
    Done,
}

/// Detecta `tap_count` pulsaciones completas (bajar + soltar) de un botón.
///
/// El tiempo se acumula en un único contador, con límite `window` mientras se
/// espera un tap y `gap` entre taps. Orden dentro de cada `update`:
///
/// 1. timeout (`elapsed > límite`) → termina sin callback
/// 2. muestreo del botón y transición de estado
/// 3. `elapsed += tick.delta`, siempre, incluso si hubo transición
///
/// El paso 3 se aplica también en el tick del flanco de subida, después de
/// poner `elapsed` a cero, así que la ventana entre taps empieza a contar con
/// el `delta` de ese mismo tick.
pub struct ButtonTap<B> {
    button: Option<Shared<B>>,
    window: Duration,
    gap: Duration,
    tap_count: u32,
    on_complete: Option<Callback>,
    state: TapState,
    taps: u32,
    elapsed: Duration,
    last_was_down: bool,
}

impl<B: ButtonSource> ButtonTap<B> {
    /// Un solo tap dentro de `window`.
    pub fn new(button: Option<Shared<B>>, window: Duration, on_complete: Option<Callback>) -> Self {
        Self::with_taps(button, window, 1, Duration::ZERO, on_complete)
    }

    /// `tap_count` taps, cada uno dentro de `window`, separados por a lo sumo `gap`.
    ///
    /// Un `tap_count` de `0` se trata como `1`.
    pub fn with_taps(
        button: Option<Shared<B>>,
        window: Duration,
        tap_count: u32,
        gap: Duration,
        on_complete: Option<Callback>,
    ) -> Self {
        Self {
            button,
            window,
            gap,
            tap_count: tap_count.max(1),
            on_complete,
            state: TapState::WaitingForPress,
            taps: 0,
            elapsed: Duration::ZERO,
            last_was_down: false,
        }
    }

    /// Construye desde un [`ButtonTapConfig`] validado.
    pub fn from_config(
        button: Option<Shared<B>>,
        config: &ButtonTapConfig,
        on_complete: Option<Callback>,
    ) -> Result<Self> {
        let (window, gap) = config.windows()?;
        Ok(Self::with_taps(button, window, config.tap_count, gap, on_complete))
    }

    pub fn state(&self) -> TapState {
        self.state
    }

    /// Taps contados desde el último `on_start`.
    pub fn taps(&self) -> u32 {
        self.taps
    }

    pub fn tap_count(&self) -> u32 {
        self.tap_count
    }

    fn limit(&self) -> Duration {
        match self.state {
            TapState::WaitingForNextTap => self.gap,
            _ => self.window,
        }
    }

    fn finish(&mut self, success: bool, tick: &Tick) {
        self.state = TapState::Done;
        if success {
            debug!("ButtonTap completado en frame {} ({} taps)", tick.frame, self.taps);
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
        } else {
            debug!(
                "ButtonTap expiró en frame {} tras {:?} ({}/{} taps)",
                tick.frame, self.elapsed, self.taps, self.tap_count
            );
        }
    }
}

impl<B: ButtonSource> Sequence for ButtonTap<B> {
    fn on_start(&mut self) {
        self.last_was_down = self
            .button
            .as_ref()
            .is_some_and(|button| sync::read(button).is_pressed());
        self.elapsed = Duration::ZERO;
        self.taps = 0;
        self.state = if self.last_was_down {
            TapState::WaitingForRelease
        } else {
            TapState::WaitingForPress
        };
    }

    fn update(&mut self, tick: &Tick) -> bool {
        if self.state == TapState::Done {
            return true;
        }

        let Some(button) = &self.button else {
            debug!("ButtonTap sin fuente de botón; terminando en frame {}", tick.frame);
            self.state = TapState::Done;
            return true;
        };

        if self.elapsed > self.limit() {
            self.finish(false, tick);
            return true;
        }

        let down = sync::read(button).is_pressed();
        let mut completed = false;
        match (self.last_was_down, down) {
            (false, true) => {
                if self.state == TapState::WaitingForNextTap {
                    self.elapsed = Duration::ZERO;
                }
                trace!("ButtonTap: pulsación en frame {}", tick.frame);
                self.state = TapState::WaitingForRelease;
            }
            (true, false) => {
                self.taps += 1;
                trace!("ButtonTap: tap {}/{} en frame {}", self.taps, self.tap_count, tick.frame);
                if self.taps >= self.tap_count {
                    self.finish(true, tick);
                    completed = true;
                } else {
                    self.elapsed = Duration::ZERO;
                    self.state = TapState::WaitingForNextTap;
                }
            }
            _ => {}
        }

        self.last_was_down = down;
        self.elapsed += tick.delta;
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use proptest::prelude::*;

    use crate::sync::share;
    use crate::traits::source::ButtonState;

    const STEP: Duration = Duration::from_millis(100);

    fn counter() -> (Rc<Cell<u32>>, Callback) {
        let fired = Rc::new(Cell::new(0));
        let hook = Rc::clone(&fired);
        (fired, Box::new(move || hook.set(hook.get() + 1)))
    }

    /// Fija el estado del botón y avanza un tick de 100 ms.
    fn step<B: ButtonSource>(
        seq: &mut ButtonTap<B>,
        button: &Shared<ButtonState>,
        state: ButtonState,
    ) -> bool {
        *sync::write(button) = state;
        seq.update(&Tick::new(STEP))
    }

    #[test]
    fn single_tap_within_window_fires_once() {
        let button = share(ButtonState::None);
        let (fired, callback) = counter();
        let mut seq = ButtonTap::new(Some(button.clone()), Duration::from_secs(1), Some(callback));
        seq.on_start();

        assert!(!step(&mut seq, &button, ButtonState::Down));
        assert_eq!(seq.state(), TapState::WaitingForRelease);
        assert!(!step(&mut seq, &button, ButtonState::Held));
        assert!(step(&mut seq, &button, ButtonState::None));
        assert_eq!(fired.get(), 1);
        assert_eq!(seq.state(), TapState::Done);

        // Ya terminada: no vuelve a disparar.
        assert!(step(&mut seq, &button, ButtonState::None));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn idle_button_times_out_without_callback() {
        let button = share(ButtonState::None);
        let (fired, callback) = counter();
        let mut seq = ButtonTap::new(Some(button.clone()), Duration::from_secs(1), Some(callback));
        seq.on_start();

        // elapsed llega a exactamente 1.0 s tras 10 ticks, y 1.0 no excede la ventana.
        for _ in 0..11 {
            assert!(!step(&mut seq, &button, ButtonState::None));
        }
        assert!(step(&mut seq, &button, ButtonState::None));
        assert_eq!(fired.get(), 0);
        assert_eq!(seq.taps(), 0);
    }

    #[test]
    fn holding_past_window_times_out() {
        let button = share(ButtonState::None);
        let (fired, callback) = counter();
        let mut seq = ButtonTap::new(Some(button.clone()), Duration::from_millis(300), Some(callback));
        seq.on_start();

        assert!(!step(&mut seq, &button, ButtonState::Down));
        for _ in 0..3 {
            assert!(!step(&mut seq, &button, ButtonState::Held));
        }
        assert!(step(&mut seq, &button, ButtonState::None));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn double_tap_within_gap_succeeds() {
        let button = share(ButtonState::None);
        let (fired, callback) = counter();
        let mut seq = ButtonTap::with_taps(
            Some(button.clone()),
            Duration::from_secs(1),
            2,
            Duration::from_millis(500),
            Some(callback),
        );
        seq.on_start();

        assert!(!step(&mut seq, &button, ButtonState::Down));
        assert!(!step(&mut seq, &button, ButtonState::None));
        assert_eq!(seq.state(), TapState::WaitingForNextTap);
        assert_eq!(seq.taps(), 1);

        // Espera de 4 ticks: elapsed = 0.5 s al inicio del tick de la segunda pulsación.
        for _ in 0..4 {
            assert!(!step(&mut seq, &button, ButtonState::None));
        }
        assert!(!step(&mut seq, &button, ButtonState::Down));
        assert_eq!(seq.state(), TapState::WaitingForRelease);
        assert!(step(&mut seq, &button, ButtonState::None));
        assert_eq!(fired.get(), 1);
        assert_eq!(seq.taps(), 2);
    }

    #[test]
    fn exceeding_gap_fails_without_callback() {
        let button = share(ButtonState::None);
        let (fired, callback) = counter();
        let mut seq = ButtonTap::with_taps(
            Some(button.clone()),
            Duration::from_secs(1),
            2,
            Duration::from_millis(500),
            Some(callback),
        );
        seq.on_start();

        assert!(!step(&mut seq, &button, ButtonState::Down));
        assert!(!step(&mut seq, &button, ButtonState::None));
        for _ in 0..5 {
            assert!(!step(&mut seq, &button, ButtonState::None));
        }
        // elapsed = 0.6 s > gap: la pulsación llega tarde.
        assert!(step(&mut seq, &button, ButtonState::Down));
        assert_eq!(fired.get(), 0);
        assert_eq!(seq.state(), TapState::Done);
    }

    #[test]
    fn zero_gap_rejects_any_multi_tap() {
        let button = share(ButtonState::None);
        let (fired, callback) = counter();
        let mut seq = ButtonTap::with_taps(
            Some(button.clone()),
            Duration::from_secs(1),
            2,
            Duration::ZERO,
            Some(callback),
        );
        seq.on_start();

        assert!(!step(&mut seq, &button, ButtonState::Down));
        assert!(!step(&mut seq, &button, ButtonState::None));
        assert!(step(&mut seq, &button, ButtonState::Down));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn held_at_start_counts_release_as_tap() {
        let button = share(ButtonState::Held);
        let (fired, callback) = counter();
        let mut seq = ButtonTap::new(Some(button.clone()), Duration::from_secs(1), Some(callback));
        seq.on_start();
        assert_eq!(seq.state(), TapState::WaitingForRelease);

        assert!(step(&mut seq, &button, ButtonState::None));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn missing_button_fails_immediately() {
        let (fired, callback) = counter();
        let mut seq = ButtonTap::<ButtonState>::new(None, Duration::from_secs(1), Some(callback));
        seq.on_start();
        assert!(seq.update(&Tick::new(STEP)));
        assert_eq!(fired.get(), 0);
        assert_eq!(seq.state(), TapState::Done);
    }

    #[test]
    fn on_start_resets_after_completion() {
        let button = share(ButtonState::None);
        let (fired, callback) = counter();
        let mut seq = ButtonTap::new(Some(button.clone()), Duration::from_secs(1), Some(callback));

        for round in 1..=2 {
            seq.on_start();
            assert_eq!(seq.taps(), 0);
            assert!(!step(&mut seq, &button, ButtonState::Down));
            assert!(step(&mut seq, &button, ButtonState::None));
            assert_eq!(fired.get(), round);
        }
    }

    #[test]
    fn zero_tap_count_is_normalized() {
        let seq = ButtonTap::<ButtonState>::with_taps(None, Duration::from_secs(1), 0, Duration::ZERO, None);
        assert_eq!(seq.tap_count(), 1);
    }

    #[test]
    fn from_config_builds_double_tap() {
        let config = ButtonTapConfig {
            window_secs: 0.5,
            tap_count: 2,
            gap_secs: 0.25,
        };
        let seq = ButtonTap::<ButtonState>::from_config(None, &config, None).unwrap();
        assert_eq!(seq.tap_count(), 2);
        assert_eq!(seq.window, Duration::from_millis(500));
        assert_eq!(seq.gap, Duration::from_millis(250));

        let bad = ButtonTapConfig {
            window_secs: f32::NAN,
            ..config
        };
        assert!(ButtonTap::<ButtonState>::from_config(None, &bad, None).is_err());
    }

    proptest! {
        #[test]
        fn second_tap_counts_only_within_gap(gap_ms in 0u64..1_000, idle in 0u32..12) {
            let button = share(ButtonState::None);
            let (fired, callback) = counter();
            let gap = Duration::from_millis(gap_ms);
            let mut seq = ButtonTap::with_taps(
                Some(button.clone()),
                Duration::from_secs(10),
                2,
                gap,
                Some(callback),
            );
            seq.on_start();

            let script = [ButtonState::Down, ButtonState::None]
                .into_iter()
                .chain(std::iter::repeat_n(ButtonState::None, idle as usize))
                .chain([ButtonState::Down, ButtonState::None]);
            let finished_at = script
                .enumerate()
                .find_map(|(i, state)| step(&mut seq, &button, state).then_some(i));

            // Al inicio del tick de la segunda pulsación, elapsed = (idle + 1) * STEP.
            let within_gap = STEP * (idle + 1) <= gap;
            prop_assert!(finished_at.is_some());
            prop_assert_eq!(fired.get(), u32::from(within_gap));
            if within_gap {
                prop_assert_eq!(finished_at, Some(idle as usize + 3));
            }
        }
    }
}
