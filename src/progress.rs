//! Cosmetic progress presenter.
//!
//! The bar is decoupled from actual request completion: a background task
//! advances it by random increments on a fixed tick, capped below 100.
//! The owning flow stops it when the real response arrives; the cap
//! guarantees the bar never claims completion on its own.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time;

use crate::i18n::{Locale, t};

/// Tick interval of the driver task.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Ceiling the bar may reach before the caller stops it.
pub const MAX_BEFORE_COMPLETE: f64 = 95.0;

/// Ordered phase labels, selected by `floor(value / 100 * len)`.
pub const PHASE_KEYS: &[&str] = &[
    "uploading",
    "parsing",
    "connecting",
    "translating_doc",
    "generating",
];

/// Pure progress state, separated from the timer and terminal so the
/// advance/cap/phase math is testable.
#[derive(Debug, Clone, Default)]
pub struct ProgressModel {
    value: f64,
    phase_index: Option<usize>,
}

impl ProgressModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `step`, clamping to the ceiling. Returns the new phase
    /// index only when it changed, so the label is rewritten exactly when
    /// the computed index moves.
    pub fn advance(&mut self, step: f64) -> Option<usize> {
        if step > 0.0 {
            self.value = (self.value + step).min(MAX_BEFORE_COMPLETE);
        }
        let index = ((self.value / 100.0) * PHASE_KEYS.len() as f64).floor() as usize;
        let index = index.min(PHASE_KEYS.len() - 1);
        if self.phase_index != Some(index) {
            self.phase_index = Some(index);
            Some(index)
        } else {
            None
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
        self.phase_index = None;
    }
}

/// Terminal progress bar driven by a cancellable background task.
pub struct ProgressPresenter {
    locale: Locale,
    model: Arc<Mutex<ProgressModel>>,
    bar: Option<ProgressBar>,
    driver: Option<JoinHandle<()>>,
}

impl ProgressPresenter {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            model: Arc::new(Mutex::new(ProgressModel::new())),
            bar: None,
            driver: None,
        }
    }

    /// Start the driver task. A second start without an intervening stop
    /// is a no-op.
    pub fn start(&mut self) {
        if self.driver.is_some() {
            return;
        }

        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message(t(self.locale, "processing").to_string());

        let locale = self.locale;
        let model = Arc::clone(&self.model);
        let task_bar = bar.clone();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(TICK_INTERVAL);
            // The first tick resolves immediately; consume it so the bar
            // advances on the interval like the view it models.
            interval.tick().await;
            loop {
                interval.tick().await;
                let step = rand::thread_rng().gen_range(5.0..20.0);
                let (value, changed) = {
                    let Ok(mut model) = model.lock() else { break };
                    let changed = model.advance(step);
                    (model.value(), changed)
                };
                task_bar.set_position(value as u64);
                if let Some(index) = changed {
                    task_bar.set_message(t(locale, PHASE_KEYS[index]).to_string());
                }
            }
        });

        self.bar = Some(bar);
        self.driver = Some(handle);
    }

    /// Cancel the driver and clear the bar. Safe to call any number of
    /// times; cancellation happens at most once per start.
    pub fn stop(&mut self) {
        if let Some(handle) = self.driver.take() {
            handle.abort();
        }
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    /// Stop and return the value to zero.
    pub fn reset(&mut self) {
        self.stop();
        if let Ok(mut model) = self.model.lock() {
            model.reset();
        }
    }

    pub fn value(&self) -> f64 {
        self.model.lock().map(|m| m.value()).unwrap_or(0.0)
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_some()
    }
}

impl Drop for ProgressPresenter {
    fn drop(&mut self) {
        self.stop();
    }
}
