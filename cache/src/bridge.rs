//! Host-facing entry points.
//!
//! A host runtime owns many objects, each of which may carry one FFT session
//! in a field. [`Bridge`] keeps those fields in a table keyed by
//! [`ObjectId`] and exposes the entry points the host calls on behalf of an
//! object. Nothing fails loudly here: every error is logged and turned into
//! `None`, which the host sees as "no result".

use std::fmt::{Display, Formatter};

use backend::{Backend, Complex64, Direction, RustFft};
use tracing::{debug, error};
use utils::Map;

use crate::{
    config::TransformConfig,
    error::{LookupError, TransformError, TransformResult},
    ops::TransformOps,
    session::SessionState,
    store::{self, SessionSlot, SessionStore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The session field of one host object.
struct Field<'a, B: Backend> {
    fields: &'a mut Map<ObjectId, SessionSlot<B>>,
    id: ObjectId,
}

impl<B: Backend> Field<'_, B> {
    fn slot(&mut self) -> Result<&mut SessionSlot<B>, LookupError> {
        self.fields.get_mut(&self.id).ok_or(LookupError::UnknownObject(self.id.0))
    }
}

impl<B: Backend> SessionStore<B> for Field<'_, B> {
    fn fetch(&mut self) -> Result<Option<&mut SessionState<B>>, LookupError> {
        self.slot()?.fetch()
    }

    fn store(&mut self, state: Option<SessionState<B>>) -> Result<Option<SessionState<B>>, LookupError> {
        self.slot()?.store(state)
    }
}

pub struct Bridge<B: Backend = RustFft> {
    backend: B,
    config: TransformConfig,
    fields: Map<ObjectId, SessionSlot<B>>,
    next_id: u64,
}

impl Bridge<RustFft> {
    pub fn new() -> Self {
        Self::with_backend(RustFft)
    }
}

impl Default for Bridge<RustFft> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Bridge<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            config: TransformConfig::default(),
            fields: Map::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Registers a host object with an empty session field.
    pub fn attach(&mut self) -> ObjectId {
        let id: ObjectId = ObjectId(self.next_id);
        self.next_id += 1;
        self.fields.insert(id, SessionSlot::new());
        debug!(%id, "host object attached");
        id
    }

    /// Forgets a host object, dropping its session if it has one.
    pub fn detach(&mut self, id: ObjectId) -> bool {
        let known: bool = self.fields.remove(&id).is_some();
        debug!(%id, known, "host object detached");
        known
    }

    pub fn is_attached(&self, id: ObjectId) -> bool {
        self.fields.contains_key(&id)
    }

    pub fn has_session(&self, id: ObjectId) -> bool {
        self.fields.get(&id).is_some_and(SessionSlot::is_open)
    }

    pub fn plan_count(&self, id: ObjectId) -> usize {
        self.fields
            .get(&id)
            .and_then(SessionSlot::state)
            .map_or(0, SessionState::plan_count)
    }

    /// Interleaved complex transform; any non-zero `is_inverse` selects the inverse.
    pub fn complex_transform(&mut self, id: ObjectId, input: Option<&[f64]>, is_inverse: i32) -> Option<Vec<f64>> {
        self.call("complex_transform", id, |ops, field| {
            let input: &[f64] = input.ok_or(TransformError::MissingInput)?;
            ops.complex_interleaved(field, input, Direction::from_flag(is_inverse))
        })
    }

    pub fn complex_transform_boxed(
        &mut self,
        id: ObjectId,
        input: Option<&[Complex64]>,
        is_inverse: i32,
    ) -> Option<Vec<Complex64>> {
        self.call("complex_transform_boxed", id, |ops, field| {
            let input: &[Complex64] = input.ok_or(TransformError::MissingInput)?;
            ops.complex(field, input, Direction::from_flag(is_inverse))
        })
    }

    pub fn complex_transform_real(
        &mut self,
        id: ObjectId,
        input: Option<&[f64]>,
        is_inverse: i32,
    ) -> Option<Vec<Complex64>> {
        self.call("complex_transform_real", id, |ops, field| {
            let input: &[f64] = input.ok_or(TransformError::MissingInput)?;
            ops.complex_from_real(field, input, Direction::from_flag(is_inverse))
        })
    }

    pub fn real_forward(&mut self, id: ObjectId, input: Option<&[f64]>) -> Option<Vec<Complex64>> {
        self.call("real_forward", id, |ops, field| {
            let input: &[f64] = input.ok_or(TransformError::MissingInput)?;
            ops.real_forward(field, input)
        })
    }

    /// Inverse real transform of boxed bins; a null bin reads as zero.
    pub fn real_inverse(&mut self, id: ObjectId, input: Option<&[Option<Complex64>]>) -> Option<Vec<f64>> {
        self.call("real_inverse", id, |ops, field| {
            let input: &[Option<Complex64>] = input.ok_or(TransformError::MissingInput)?;
            let bins: Vec<Complex64> = input.iter().map(|x| x.unwrap_or_default()).collect();
            ops.real_inverse(field, &bins)
        })
    }

    /// Drops the object's session, if any. Calling it again is a no-op.
    pub fn release_session(&mut self, id: ObjectId) {
        let mut field: Field<'_, B> = Field {
            fields: &mut self.fields,
            id,
        };
        if let Err(err) = store::release(&mut field) {
            error!(%id, %err, "release_session failed");
        }
    }

    fn call<T, F>(&mut self, op: &'static str, id: ObjectId, f: F) -> Option<T>
    where
        F: FnOnce(&TransformOps<'_, B>, &mut Field<'_, B>) -> TransformResult<T>,
    {
        let ops: TransformOps<'_, B> = TransformOps::new(&self.backend, &self.config);
        let mut field: Field<'_, B> = Field {
            fields: &mut self.fields,
            id,
        };
        match f(&ops, &mut field) {
            Ok(output) => Some(output),
            Err(err) => {
                error!(op, %id, kind = ?err.kind(), %err, "transform failed, returning no result");
                None
            }
        }
    }
}
