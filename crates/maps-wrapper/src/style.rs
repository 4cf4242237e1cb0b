//! Best-effort map style loading
//!
//! A style is built once per backend from the same source. Each backend's
//! attempt is independent: a failure leaves that backend's member of the
//! [`StyleHandle`] empty and is logged, but loading itself never fails.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::backend::Backends;
use crate::vendor::{BackendId, Native, NativeError, NativeResult, Vendor};
use crate::{BackendFailure, join_failures};

/// Where a style definition comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSource {
    /// Packaged raw resource holding the style JSON
    RawResource(u32),
    /// Style JSON given inline
    Json(String),
}

impl fmt::Display for StyleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSource::RawResource(id) => write!(f, "raw resource {id:#x}"),
            StyleSource::Json(json) => write!(f, "inline json ({} bytes)", json.len()),
        }
    }
}

/// A vendor's style factory
pub trait NativeStyleLoader<V: Vendor> {
    fn load_raw_resource_style(&self, resource_id: u32) -> NativeResult<V::MapStyleOptions>;
    fn style_from_json(&self, json: &str) -> NativeResult<V::MapStyleOptions>;
}

/// Vendor-independent style factory; the style comes back type-erased
pub trait StyleBackend {
    fn load(&self, source: &StyleSource) -> NativeResult<Rc<dyn Any>>;
}

impl<V: Vendor, T: NativeStyleLoader<V>> StyleBackend for Native<V, T> {
    fn load(&self, source: &StyleSource) -> NativeResult<Rc<dyn Any>> {
        let style = match source {
            StyleSource::RawResource(id) => self.get_ref().load_raw_resource_style(*id)?,
            StyleSource::Json(json) => self.get_ref().style_from_json(json)?,
        };
        Ok(Rc::new(style))
    }
}

/// Result of one backend's load attempt
#[derive(Clone)]
pub enum StyleOutcome {
    /// Holds the backend's `MapStyleOptions`
    Loaded(Rc<dyn Any>),
    Failed(NativeError),
    /// No loader was registered for the backend
    Unavailable,
}

impl StyleOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, StyleOutcome::Loaded(_))
    }
}

impl fmt::Debug for StyleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleOutcome::Loaded(_) => f.write_str("Loaded"),
            StyleOutcome::Failed(error) => f.debug_tuple("Failed").field(error).finish(),
            StyleOutcome::Unavailable => f.write_str("Unavailable"),
        }
    }
}

/// One or more backends failed to build a style
///
/// Only a diagnostic: the handle it came from is still usable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("style from {source_ref} degraded: {}", join_failures(.failures))]
pub struct StyleLoadDegraded {
    pub source_ref: StyleSource,
    pub failures: Vec<BackendFailure>,
}

/// Per-backend native styles built from one source; immutable once loaded
#[derive(Debug, Clone)]
pub struct StyleHandle {
    source: StyleSource,
    attempts: SmallVec<[(BackendId, StyleOutcome); 2]>,
}

impl StyleHandle {
    pub fn source(&self) -> &StyleSource {
        &self.source
    }

    /// Vendor `V`'s native style, if it loaded
    pub fn native<V: Vendor>(&self) -> Option<&V::MapStyleOptions> {
        self.attempts
            .iter()
            .find(|(id, _)| *id == V::ID)
            .and_then(|(_, outcome)| match outcome {
                StyleOutcome::Loaded(style) => style.downcast_ref::<V::MapStyleOptions>(),
                _ => None,
            })
    }

    pub fn is_present(&self, backend: BackendId) -> bool {
        self.outcome(backend).is_some_and(StyleOutcome::is_loaded)
    }

    /// True when no backend could load this style
    pub fn is_empty(&self) -> bool {
        !self.attempts.iter().any(|(_, outcome)| outcome.is_loaded())
    }

    pub fn outcome(&self, backend: BackendId) -> Option<&StyleOutcome> {
        self.attempts
            .iter()
            .find(|(id, _)| *id == backend)
            .map(|(_, outcome)| outcome)
    }

    /// Every attempt in backend precedence order
    pub fn attempts(&self) -> impl Iterator<Item = (BackendId, &StyleOutcome)> + '_ {
        self.attempts.iter().map(|(id, outcome)| (*id, outcome))
    }

    /// The failed attempts, if there were any
    pub fn degraded(&self) -> Option<StyleLoadDegraded> {
        let failures: Vec<_> = self
            .attempts
            .iter()
            .filter_map(|(id, outcome)| match outcome {
                StyleOutcome::Failed(error) => Some(BackendFailure::new(*id, error.clone())),
                _ => None,
            })
            .collect();

        (!failures.is_empty()).then(|| StyleLoadDegraded {
            source_ref: self.source.clone(),
            failures,
        })
    }
}

/// Builds a [`StyleHandle`] on every registered backend
#[derive(Debug, Default)]
pub struct StyleLoader {
    backends: Backends<Box<dyn StyleBackend>>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl StyleLoader {
    pub fn new(backends: Backends<Box<dyn StyleBackend>>) -> Self {
        Self { backends }
    }

    /// Load `source` on each backend; never fails
    pub fn load(&self, source: &StyleSource) -> StyleHandle {
        #[cfg(feature = "profiling")]
        profiling::scope!("style::load");
        let attempts = self
            .backends
            .iter()
            .map(|(id, loader)| {
                let outcome = match loader.map(|loader| loader.load(source)) {
                    Some(Ok(style)) => StyleOutcome::Loaded(style),
                    Some(Err(error)) => {
                        tracing::warn!(backend = %id, %source, %error, "style could not be loaded");
                        StyleOutcome::Failed(error)
                    }
                    None => StyleOutcome::Unavailable,
                };
                tracing::debug!(backend = %id, %source, ?outcome, "style load attempt");
                (id, outcome)
            })
            .collect();

        StyleHandle {
            source: source.clone(),
            attempts,
        }
    }

    pub fn load_raw_resource_style(&self, resource_id: u32) -> StyleHandle {
        self.load(&StyleSource::RawResource(resource_id))
    }

    pub fn load_json(&self, json: impl Into<String>) -> StyleHandle {
        self.load(&StyleSource::Json(json.into()))
    }
}
