use backend::{Backend, Direction, Plan};

/// The forward and inverse plans of one `(family, length)` pair.
///
/// Each direction is an owned `Option<Plan<B>>`, so dropping the slot releases
/// whichever plans it holds.
pub struct PlanSlot<B: Backend> {
    forward: Option<Plan<B>>,
    inverse: Option<Plan<B>>,
}

impl<B: Backend> PlanSlot<B> {
    pub fn new() -> Self {
        Self {
            forward: None,
            inverse: None,
        }
    }

    pub fn get(&self, direction: Direction) -> Option<&Plan<B>> {
        match direction {
            Direction::Forward => self.forward.as_ref(),
            Direction::Inverse => self.inverse.as_ref(),
        }
    }

    /// Stores `plan` for `direction`. The cache only calls this on a miss;
    /// replacing a live plan is a caller bug.
    pub fn set(&mut self, direction: Direction, plan: Plan<B>) {
        debug_assert_eq!(plan.direction(), direction);
        let cell: &mut Option<Plan<B>> = self.cell_mut(direction);
        debug_assert!(cell.is_none(), "plan slot already holds a {direction} plan");
        *cell = Some(plan);
    }

    pub(crate) fn cell_mut(&mut self, direction: Direction) -> &mut Option<Plan<B>> {
        match direction {
            Direction::Forward => &mut self.forward,
            Direction::Inverse => &mut self.inverse,
        }
    }

    /// Number of plans held (0, 1 or 2).
    pub fn len(&self) -> usize {
        self.forward.is_some() as usize + self.inverse.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B: Backend> Default for PlanSlot<B> {
    fn default() -> Self {
        Self::new()
    }
}
