//! Observable analysis results with stale-load protection.
//!
//! Each watch owns one derived value (a glow color or a tone) and re-runs
//! its analysis whenever the caller supplies a new image source. Loading and
//! scanning happen on a background thread; the watch only ever reflects the
//! most recently submitted source. If a newer source finishes first, the
//! older in-flight result is discarded rather than clobbering it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use crate::analysis::{classify_tone, dominant_color, Tone, DEFAULT_GLOW};
use crate::image::load_rgba;

/// Shared state between a watch handle and its in-flight analysis tasks.
struct Shared<T> {
    /// Bumped on every submission; a task may only store its result while
    /// its token is still the latest.
    generation: AtomicU64,
    value: Mutex<T>,
}

/// A single observable value fed by single-shot background analyses.
struct Watch<T> {
    shared: Arc<Shared<T>>,
}

impl<T: Clone + Send + 'static> Watch<T> {
    fn with_default(default: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                generation: AtomicU64::new(0),
                value: Mutex::new(default),
            }),
        }
    }

    /// Read the current value.
    fn get(&self) -> T {
        self.shared
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run `job` on a background thread and store its result, unless a newer
    /// submission supersedes this one first or the job yields nothing.
    fn submit<F>(&self, job: F) -> JoinHandle<()>
    where
        F: FnOnce() -> Option<T> + Send + 'static,
    {
        let token = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let shared = Arc::clone(&self.shared);

        thread::spawn(move || {
            let Some(result) = job() else {
                return;
            };

            // Token check and store under the same lock, so a superseded
            // task cannot slip its result in after the newer one.
            let mut value = shared.value.lock().unwrap_or_else(PoisonError::into_inner);
            if shared.generation.load(Ordering::SeqCst) == token {
                *value = result;
            } else {
                tracing::debug!("discarding superseded analysis result");
            }
        })
    }
}

/// Observable dominant-color glow for an image source.
///
/// Starts at the neutral [`DEFAULT_GLOW`] and keeps it whenever a source
/// fails to load or contains no qualifying pixels.
pub struct DominantColorWatch {
    watch: Watch<String>,
}

impl DominantColorWatch {
    #[must_use]
    pub fn new() -> Self {
        Self {
            watch: Watch::with_default(DEFAULT_GLOW.to_string()),
        }
    }

    /// Begin analyzing a new image source.
    ///
    /// Returns the background task's handle; dropping it detaches the task.
    /// Any earlier in-flight analysis is superseded and its result ignored.
    pub fn set_source(&self, source: impl Into<String>) -> JoinHandle<()> {
        let source = source.into();
        self.watch.submit(move || match load_rgba(&source) {
            Ok(img) => dominant_color(&img),
            Err(err) => {
                tracing::debug!("glow analysis skipped for {source}: {err}");
                None
            }
        })
    }

    /// The current glow color as an `rgba(...)` string.
    #[must_use]
    pub fn color(&self) -> String {
        self.watch.get()
    }
}

impl Default for DominantColorWatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Observable dark/light tone for a logo source.
///
/// Starts at [`Tone::Dark`] and keeps it whenever a source fails to load or
/// has no opaque pixels.
pub struct LogoToneWatch {
    watch: Watch<Tone>,
}

impl LogoToneWatch {
    #[must_use]
    pub fn new() -> Self {
        Self {
            watch: Watch::with_default(Tone::default()),
        }
    }

    /// Begin analyzing a new logo source.
    ///
    /// Returns the background task's handle; dropping it detaches the task.
    /// Any earlier in-flight analysis is superseded and its result ignored.
    pub fn set_source(&self, source: impl Into<String>) -> JoinHandle<()> {
        let source = source.into();
        self.watch.submit(move || match load_rgba(&source) {
            Ok(img) => classify_tone(&img),
            Err(err) => {
                tracing::debug!("tone analysis skipped for {source}: {err}");
                None
            }
        })
    }

    /// The current tone classification.
    #[must_use]
    pub fn tone(&self) -> Tone {
        self.watch.get()
    }
}

impl Default for LogoToneWatch {
    fn default() -> Self {
        Self::new()
    }
}
