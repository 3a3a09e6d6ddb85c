use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{Backend, BackendResult, Complex64, Direction, PlanFamily};

/// Shared build/release tallies of a [`Counting`] engine.
#[derive(Debug, Clone, Default)]
pub struct Counters {
    built: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl Counters {
    pub fn built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Handles built and not yet released.
    pub fn live(&self) -> usize {
        self.built() - self.released()
    }
}

/// Decorator engine counting every plan build and release of `B`.
pub struct Counting<B: Backend> {
    inner: B,
    counters: Counters,
}

pub struct CountedHandle<H> {
    inner: H,
    released: Arc<AtomicUsize>,
}

impl<B: Backend> Counting<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            counters: Counters::default(),
        }
    }

    pub fn counters(&self) -> Counters {
        self.counters.clone()
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Backend + Default> Default for Counting<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: Backend> Backend for Counting<B> {
    type Handle = CountedHandle<B::Handle>;

    fn name() -> &'static str {
        B::name()
    }

    fn build(&self, n: usize, direction: Direction, family: PlanFamily) -> BackendResult<Self::Handle> {
        let inner: B::Handle = self.inner.build(n, direction, family)?;
        self.counters.built.fetch_add(1, Ordering::SeqCst);
        Ok(CountedHandle {
            inner,
            released: self.counters.released.clone(),
        })
    }

    fn complex(handle: &Self::Handle, data: &mut [Complex64]) -> BackendResult<()> {
        B::complex(&handle.inner, data)
    }

    fn real_forward(handle: &Self::Handle, input: &mut [f64], output: &mut [Complex64]) -> BackendResult<()> {
        B::real_forward(&handle.inner, input, output)
    }

    fn real_inverse(handle: &Self::Handle, input: &mut [Complex64], output: &mut [f64]) -> BackendResult<()> {
        B::real_inverse(&handle.inner, input, output)
    }

    fn release(handle: Self::Handle) {
        handle.released.fetch_add(1, Ordering::SeqCst);
        B::release(handle.inner)
    }
}
