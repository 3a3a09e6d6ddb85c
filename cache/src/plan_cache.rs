use backend::{Backend, Direction, Plan, PlanFamily};
use tracing::{debug, trace};
use utils::Map;

use crate::slot::PlanSlot;

/// Plans of one [`PlanFamily`], indexed by transform length.
///
/// No eviction: the cache grows with the number of distinct lengths seen and
/// is emptied only when dropped.
pub struct PlanCache<B: Backend> {
    family: PlanFamily,
    slots: Map<usize, PlanSlot<B>>,
}

impl<B: Backend> PlanCache<B> {
    pub fn new(family: PlanFamily) -> Self {
        Self {
            family,
            slots: Map::new(),
        }
    }

    pub fn family(&self) -> PlanFamily {
        self.family
    }

    /// Returns the plan for `(n, direction)`, calling `factory` to build it on a miss.
    ///
    /// `factory` runs at most once per `(n, direction)` over the life of the
    /// cache. If it fails, nothing is stored and the next call tries again.
    pub fn obtain<E, F>(&mut self, n: usize, direction: Direction, factory: F) -> Result<&Plan<B>, E>
    where
        F: FnOnce(usize, Direction) -> Result<Plan<B>, E>,
    {
        let family: PlanFamily = self.family;
        let cell: &mut Option<Plan<B>> = self.slots.get_or_insert_with(n, PlanSlot::new).cell_mut(direction);
        let plan: Plan<B> = match cell.take() {
            Some(plan) => {
                trace!(%family, n, %direction, "plan cache hit");
                plan
            }
            None => {
                debug!(%family, n, %direction, "plan cache miss, building plan");
                factory(n, direction)?
            }
        };
        let plan: &Plan<B> = cell.insert(plan);
        Ok(plan)
    }

    pub fn get(&self, n: usize, direction: Direction) -> Option<&Plan<B>> {
        self.slots.get(&n).and_then(|slot| slot.get(direction))
    }

    /// Total number of live plans across all lengths.
    pub fn plan_count(&self) -> usize {
        self.slots.values().map(PlanSlot::len).sum()
    }

    /// Lengths with at least one plan, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .slots
            .0
            .iter()
            .filter(|(_, slot)| !slot.is_empty())
            .map(|(n, _)| *n)
            .collect();
        lengths.sort_unstable();
        lengths
    }

    pub fn is_empty(&self) -> bool {
        self.plan_count() == 0
    }
}
