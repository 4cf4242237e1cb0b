//! Backend presence list and the dispatch policy every facade uses
//!
//! A facade entity owns one [`Backends`] value: an ordered list of slots, one
//! per registered backend, each holding that backend's native counterpart or
//! nothing. Absence is a normal state. The policy is implemented once here:
//!
//! - **mutating calls** go to every present backend in slot order; a failing
//!   backend does not stop the others, and all failures are reported together
//!   once every backend has been called;
//! - **value-returning calls** are answered by the first present backend in
//!   slot order (registration order is the precedence order); with no backend
//!   present they fail with [`MapsError::NoBackendAvailable`] unless the caller
//!   declared a sentinel.

use std::fmt;

use smallvec::SmallVec;

use crate::vendor::{BackendId, NativeError, NativeResult};
use crate::{BackendFailure, MapsError, Result};

/// One backend's place in a [`Backends`] list
struct Slot<B> {
    id: BackendId,
    backend: Option<B>,
}

/// Ordered, possibly partial set of backend-native counterparts
pub struct Backends<B> {
    slots: SmallVec<[Slot<B>; 2]>,
}

impl<B> Default for Backends<B> {
    fn default() -> Self {
        Self {
            slots: SmallVec::new(),
        }
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl<B> Backends<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slot for `id`; `None` records the backend as absent
    ///
    /// Slots answer value-returning calls in registration order. Registering
    /// the same id again replaces that slot's content and keeps its position.
    pub fn with(mut self, id: BackendId, backend: Option<B>) -> Self {
        match self.slots.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => slot.backend = backend,
            None => self.slots.push(Slot { id, backend }),
        }
        self
    }

    /// True when no slot holds a backend
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.backend.is_none())
    }

    /// Number of backends present
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.backend.is_some()).count()
    }

    pub fn contains(&self, id: BackendId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: BackendId) -> Option<&B> {
        self.slots
            .iter()
            .find(|slot| slot.id == id)
            .and_then(|slot| slot.backend.as_ref())
    }

    /// Every registered slot in precedence order, present or not
    pub fn iter(&self) -> impl Iterator<Item = (BackendId, Option<&B>)> + '_ {
        self.slots.iter().map(|slot| (slot.id, slot.backend.as_ref()))
    }

    /// Ids of the present backends in precedence order
    pub fn present_ids(&self) -> impl Iterator<Item = BackendId> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.backend.is_some())
            .map(|slot| slot.id)
    }

    /// Apply a mutating call to every present backend
    ///
    /// Every present backend is called even when an earlier one fails. With
    /// no backend present this is a successful no-op.
    pub fn for_each_present<F>(&mut self, operation: &'static str, mut call: F) -> Result<()>
    where
        F: FnMut(&mut B) -> NativeResult<()>,
    {
        let mut failures = Vec::new();
        for slot in &mut self.slots {
            let Some(backend) = slot.backend.as_mut() else {
                continue;
            };
            tracing::trace!(backend = %slot.id, operation, "dispatch");
            if let Err(error) = call(backend) {
                tracing::warn!(backend = %slot.id, operation, %error, "backend call failed");
                failures.push(BackendFailure::new(slot.id, error));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(MapsError::BackendOperationFailed {
                operation,
                failures,
            })
        }
    }

    /// Answer a value-returning call from the first present backend
    pub fn first_present<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: FnOnce(&B) -> NativeResult<T>,
    {
        match self.first() {
            Some((id, backend)) => call(backend).map_err(|error| failed(operation, id, error)),
            None => Err(MapsError::NoBackendAvailable { operation }),
        }
    }

    /// Like [`Backends::first_present`], but `sentinel` answers when no backend is present
    pub fn first_present_or<T, F>(&self, operation: &'static str, sentinel: T, call: F) -> Result<T>
    where
        F: FnOnce(&B) -> NativeResult<T>,
    {
        match self.first() {
            Some((id, backend)) => call(backend).map_err(|error| failed(operation, id, error)),
            None => Ok(sentinel),
        }
    }

    /// Build a counterpart per present backend
    ///
    /// The result has the same slots in the same order. A backend whose call
    /// fails leaves its slot absent and is reported in the returned failures.
    pub fn map_present<C, F>(
        &mut self,
        operation: &'static str,
        mut call: F,
    ) -> (Backends<C>, Vec<BackendFailure>)
    where
        F: FnMut(&mut B) -> NativeResult<C>,
    {
        let mut mapped = Backends::new();
        let mut failures = Vec::new();
        for slot in &mut self.slots {
            let counterpart = match slot.backend.as_mut().map(&mut call) {
                Some(Ok(counterpart)) => Some(counterpart),
                Some(Err(error)) => {
                    tracing::warn!(backend = %slot.id, operation, %error, "backend call failed");
                    failures.push(BackendFailure::new(slot.id, error));
                    None
                }
                None => None,
            };
            mapped = mapped.with(slot.id, counterpart);
        }
        (mapped, failures)
    }

    /// Drop every native counterpart, keeping the slots
    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.backend = None;
        }
    }

    fn first(&self) -> Option<(BackendId, &B)> {
        self.slots
            .iter()
            .find_map(|slot| slot.backend.as_ref().map(|backend| (slot.id, backend)))
    }
}

fn failed(operation: &'static str, backend: BackendId, error: NativeError) -> MapsError {
    tracing::warn!(%backend, operation, %error, "backend call failed");
    MapsError::BackendOperationFailed {
        operation,
        failures: vec![BackendFailure::new(backend, error)],
    }
}

impl<B> fmt::Debug for Backends<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.slots
                    .iter()
                    .map(|slot| (slot.id, if slot.backend.is_some() { "present" } else { "absent" })),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: BackendId = BackendId::new("a");
    const B: BackendId = BackendId::new("b");

    /// A backend that records calls into a shared log and can be told to fail
    struct Recorder {
        name: &'static str,
        value: i32,
        fail: bool,
        log: std::rc::Rc<std::cell::RefCell<Vec<&'static str>>>,
    }

    impl Recorder {
        fn touch(&mut self) -> NativeResult<()> {
            self.log.borrow_mut().push(self.name);
            if self.fail {
                Err(NativeError::new(format!("{} exploded", self.name)))
            } else {
                Ok(())
            }
        }

        fn read(&self) -> NativeResult<i32> {
            if self.fail {
                Err(NativeError::new("unreadable"))
            } else {
                Ok(self.value)
            }
        }
    }

    fn pair(
        a: Option<(i32, bool)>,
        b: Option<(i32, bool)>,
    ) -> (
        Backends<Recorder>,
        std::rc::Rc<std::cell::RefCell<Vec<&'static str>>>,
    ) {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let recorder = |name, (value, fail)| Recorder {
            name,
            value,
            fail,
            log: log.clone(),
        };
        let backends = Backends::new()
            .with(A, a.map(|setup| recorder("a", setup)))
            .with(B, b.map(|setup| recorder("b", setup)));
        (backends, log)
    }

    #[test]
    fn test_mutation_reaches_backends_in_order() {
        let (mut backends, log) = pair(Some((1, false)), Some((2, false)));
        backends.for_each_present("touch", Recorder::touch).unwrap();
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_mutation_skips_absent_backend() {
        let (mut backends, log) = pair(Some((1, false)), None);
        backends.for_each_present("touch", Recorder::touch).unwrap();
        assert_eq!(*log.borrow(), vec!["a"]);
    }

    #[test]
    fn test_mutation_with_no_backends_is_noop() {
        let (mut backends, log) = pair(None, None);
        backends.for_each_present("touch", Recorder::touch).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_first_failure_does_not_stop_second_backend() {
        let (mut backends, log) = pair(Some((1, true)), Some((2, false)));
        let error = backends.for_each_present("touch", Recorder::touch).unwrap_err();

        assert_eq!(*log.borrow(), vec!["a", "b"]);
        match error {
            MapsError::BackendOperationFailed {
                operation,
                failures,
            } => {
                assert_eq!(operation, "touch");
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].backend, A);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_both_failures_are_reported() {
        let (mut backends, _log) = pair(Some((1, true)), Some((2, true)));
        let error = backends.for_each_present("touch", Recorder::touch).unwrap_err();
        assert_eq!(error.failures().len(), 2);
        assert_eq!(error.failures()[1].backend, B);
    }

    #[test]
    fn test_first_present_prefers_registration_order() {
        let (backends, _) = pair(Some((1, false)), Some((2, false)));
        assert_eq!(backends.first_present("read", Recorder::read).unwrap(), 1);

        let (backends, _) = pair(None, Some((2, false)));
        assert_eq!(backends.first_present("read", Recorder::read).unwrap(), 2);
    }

    #[test]
    fn test_first_present_without_backends() {
        let (backends, _) = pair(None, None);
        let error = backends.first_present("read", Recorder::read).unwrap_err();
        assert!(matches!(
            error,
            MapsError::NoBackendAvailable { operation: "read" }
        ));
    }

    #[test]
    fn test_first_present_surfaces_failure_without_fallback() {
        let (backends, _) = pair(Some((1, true)), Some((2, false)));
        let error = backends.first_present("read", Recorder::read).unwrap_err();
        assert_eq!(error.failures()[0].backend, A);
    }

    #[test]
    fn test_sentinel_only_when_nothing_present() {
        let (backends, _) = pair(None, None);
        assert_eq!(backends.first_present_or("read", -1, Recorder::read).unwrap(), -1);

        let (backends, _) = pair(None, Some((7, false)));
        assert_eq!(backends.first_present_or("read", -1, Recorder::read).unwrap(), 7);
    }

    #[test]
    fn test_map_present_keeps_slots() {
        let (mut backends, _) = pair(Some((1, false)), Some((2, true)));
        let (mapped, failures) = backends.map_present("double", |backend| {
            backend.touch()?;
            Ok(backend.value * 2)
        });

        assert_eq!(mapped.get(A), Some(&2));
        assert!(!mapped.contains(B));
        assert_eq!(mapped.iter().count(), 2);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].backend, B);
    }

    #[test]
    fn test_with_replaces_in_place() {
        let backends = Backends::new()
            .with(A, Some(1))
            .with(B, Some(2))
            .with(A, None);
        assert_eq!(backends.len(), 1);
        assert_eq!(backends.present_ids().collect::<Vec<_>>(), vec![B]);
        assert_eq!(backends.iter().next().map(|(id, _)| id), Some(A));
    }

    #[test]
    fn test_clear_keeps_slots_but_drops_backends() {
        let mut backends = Backends::new().with(A, Some(1)).with(B, None);
        backends.clear();
        assert!(backends.is_empty());
        assert_eq!(format!("{backends:?}"), r#"{BackendId("a"): "absent", BackendId("b"): "absent"}"#);
    }
}
