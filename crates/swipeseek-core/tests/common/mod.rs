//! Shared test doubles for swipeseek-core integration tests.
//!
//! Provides a scripted [`ElementProbe`] whose element appears after a fixed
//! number of probes, a [`PointerActionExecutor`] that records every gesture it
//! is handed, and a fixed-geometry [`ScreenQuery`].

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use swipeseek_core::driver::{
    DriverError, ElementHandle, ElementProbe, Locator, PointerActionExecutor, ScreenQuery,
};
use swipeseek_core::geometry::Rect;
use swipeseek_core::gesture::GestureSequence;

/// Installs a test subscriber so `RUST_LOG=debug cargo test` shows search
/// tracing. Safe to call from every test; only the first call wins.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An [`ElementProbe`] whose element becomes locatable only after a scripted
/// number of `wait_for` probes.
///
/// Probe number `visible_after` (zero-based) and all later probes report the
/// element at `bounds`, displayed. Earlier probes time out, which the search
/// folds into "not yet visible".
pub struct ScriptedProbe {
    bounds: Rect,
    visible_after: u32,
    probes: AtomicU32,
}

impl ScriptedProbe {
    /// Element at `bounds` appears once `visible_after` probes have missed.
    pub fn appears_after(visible_after: u32, bounds: Rect) -> Self {
        Self {
            bounds,
            visible_after,
            probes: AtomicU32::new(0),
        }
    }

    /// Element at `bounds` is visible from the first probe.
    #[allow(dead_code)]
    pub fn always_visible(bounds: Rect) -> Self {
        Self::appears_after(0, bounds)
    }

    /// Element that never becomes locatable.
    #[allow(dead_code)]
    pub fn never_visible() -> Self {
        Self::appears_after(u32::MAX, Rect::new(0, 0, 0, 0))
    }

    /// The number of `wait_for` probes performed so far.
    pub fn probe_count(&self) -> u32 {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ElementProbe for ScriptedProbe {
    async fn exists(&self, _locator: &Locator) -> Result<bool, DriverError> {
        Ok(self.probes.load(Ordering::SeqCst) >= self.visible_after)
    }

    async fn bounds_of(&self, locator: &Locator) -> Result<Rect, DriverError> {
        if self.probes.load(Ordering::SeqCst) >= self.visible_after {
            Ok(self.bounds)
        } else {
            Err(DriverError::ElementNotFound(locator.to_string()))
        }
    }

    async fn is_displayed(&self, _locator: &Locator) -> Result<bool, DriverError> {
        Ok(self.probes.load(Ordering::SeqCst) >= self.visible_after)
    }

    async fn wait_for(
        &self,
        _locator: &Locator,
        _timeout: Duration,
    ) -> Result<ElementHandle, DriverError> {
        let probe = self.probes.fetch_add(1, Ordering::SeqCst);
        if probe >= self.visible_after {
            Ok(ElementHandle {
                bounds: self.bounds,
                displayed: true,
            })
        } else {
            Err(DriverError::Timeout)
        }
    }
}

/// A [`PointerActionExecutor`] that records every sequence instead of
/// touching hardware.
#[derive(Default)]
pub struct RecordingExecutor {
    performed: Mutex<Vec<GestureSequence>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sequences performed so far, in order.
    pub fn performed(&self) -> Vec<GestureSequence> {
        self.performed.lock().unwrap().clone()
    }

    pub fn performed_count(&self) -> usize {
        self.performed.lock().unwrap().len()
    }
}

#[async_trait]
impl PointerActionExecutor for RecordingExecutor {
    async fn perform(&self, sequence: &GestureSequence) -> Result<(), DriverError> {
        self.performed.lock().unwrap().push(sequence.clone());
        Ok(())
    }
}

/// A [`ScreenQuery`] reporting fixed window bounds.
pub struct FixedScreen {
    bounds: Rect,
}

impl FixedScreen {
    #[allow(dead_code)]
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }
}

#[async_trait]
impl ScreenQuery for FixedScreen {
    async fn window_bounds(&self) -> Result<Rect, DriverError> {
        Ok(self.bounds)
    }
}
