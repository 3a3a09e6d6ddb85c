use backend::{Backend, PlanFamily};
use tracing::debug;

use crate::plan_cache::PlanCache;

/// Every plan one session has built: one cache per plan family.
pub struct SessionState<B: Backend> {
    complex: PlanCache<B>,
    real: PlanCache<B>,
}

impl<B: Backend> SessionState<B> {
    pub fn new() -> Self {
        debug!(engine = B::name(), "creating session state");
        Self {
            complex: PlanCache::new(PlanFamily::Complex),
            real: PlanCache::new(PlanFamily::Real),
        }
    }

    pub fn complex_cache(&self) -> &PlanCache<B> {
        &self.complex
    }

    pub fn real_cache(&self) -> &PlanCache<B> {
        &self.real
    }

    pub fn cache(&self, family: PlanFamily) -> &PlanCache<B> {
        match family {
            PlanFamily::Complex => &self.complex,
            PlanFamily::Real => &self.real,
        }
    }

    pub fn cache_mut(&mut self, family: PlanFamily) -> &mut PlanCache<B> {
        match family {
            PlanFamily::Complex => &mut self.complex,
            PlanFamily::Real => &mut self.real,
        }
    }

    pub fn plan_count(&self) -> usize {
        self.complex.plan_count() + self.real.plan_count()
    }
}

impl<B: Backend> Default for SessionState<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Drop for SessionState<B> {
    fn drop(&mut self) {
        debug!(
            complex_plans = self.complex.plan_count(),
            real_plans = self.real.plan_count(),
            "releasing session state"
        );
    }
}
