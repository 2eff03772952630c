use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::ResourceKind;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("no {0} uses remaining")]
pub struct ResourceExhausted(pub ResourceKind);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResourceCounter {
    current: u32,
    max: u32,
}

impl ResourceCounter {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

/// Remaining uses of each limited action, as persisted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCounts {
    pub add_cells: u32,
    pub hint: u32,
    pub change: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceLedger {
    add_cells: ResourceCounter,
    hint: ResourceCounter,
    change_value: ResourceCounter,
}

impl ResourceLedger {
    pub fn new(max_uses: u32) -> Self {
        Self {
            add_cells: ResourceCounter::full(max_uses),
            hint: ResourceCounter::full(max_uses),
            change_value: ResourceCounter::full(max_uses),
        }
    }

    fn counter(&self, kind: ResourceKind) -> &ResourceCounter {
        match kind {
            ResourceKind::AddCells => &self.add_cells,
            ResourceKind::Hint => &self.hint,
            ResourceKind::ChangeValue => &self.change_value,
        }
    }

    fn counter_mut(&mut self, kind: ResourceKind) -> &mut ResourceCounter {
        match kind {
            ResourceKind::AddCells => &mut self.add_cells,
            ResourceKind::Hint => &mut self.hint,
            ResourceKind::ChangeValue => &mut self.change_value,
        }
    }

    pub fn current(&self, kind: ResourceKind) -> u32 {
        self.counter(kind).current
    }

    pub fn max(&self, kind: ResourceKind) -> u32 {
        self.counter(kind).max
    }

    pub fn can_use(&self, kind: ResourceKind) -> bool {
        self.counter(kind).current > 0
    }

    /// Consumes one use and returns what is left.
    pub fn try_use(&mut self, kind: ResourceKind) -> Result<u32, ResourceExhausted> {
        let counter = self.counter_mut(kind);
        if counter.current == 0 {
            return Err(ResourceExhausted(kind));
        }
        counter.current -= 1;
        Ok(counter.current)
    }

    pub fn use_one(&mut self, kind: ResourceKind) -> bool {
        self.try_use(kind).is_ok()
    }

    pub fn add(&mut self, kind: ResourceKind, amount: u32) {
        let counter = self.counter_mut(kind);
        counter.current = counter.current.saturating_add(amount).min(counter.max);
    }

    pub fn reset(&mut self, kind: ResourceKind) {
        let counter = self.counter_mut(kind);
        counter.current = counter.max;
    }

    pub fn reset_all(&mut self) {
        for kind in ResourceKind::ALL {
            self.reset(kind);
        }
    }

    /// Sets the remaining uses, clamped to the maximum.
    pub fn set_current(&mut self, kind: ResourceKind, current: u32) {
        let counter = self.counter_mut(kind);
        counter.current = current.min(counter.max);
    }

    pub fn counts(&self) -> ResourceCounts {
        ResourceCounts {
            add_cells: self.add_cells.current,
            hint: self.hint.current,
            change: self.change_value.current,
        }
    }

    pub fn apply_counts(&mut self, counts: ResourceCounts) {
        self.set_current(ResourceKind::AddCells, counts.add_cells);
        self.set_current(ResourceKind::Hint, counts.hint);
        self.set_current(ResourceKind::ChangeValue, counts.change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_is_full() {
        let ledger = ResourceLedger::new(5);

        for kind in ResourceKind::ALL {
            assert_eq!(ledger.current(kind), 5);
            assert_eq!(ledger.max(kind), 5);
            assert!(ledger.can_use(kind));
        }
    }

    #[test]
    fn test_sixth_use_is_exhausted() {
        let mut ledger = ResourceLedger::new(5);

        for expected in (0..5).rev() {
            assert_eq!(ledger.try_use(ResourceKind::Hint), Ok(expected));
        }

        assert!(!ledger.can_use(ResourceKind::Hint));
        assert!(!ledger.use_one(ResourceKind::Hint));
        assert_eq!(
            ledger.try_use(ResourceKind::Hint),
            Err(ResourceExhausted(ResourceKind::Hint))
        );
    }

    #[test]
    fn test_counters_are_independent() {
        let mut ledger = ResourceLedger::new(3);

        ledger.use_one(ResourceKind::AddCells);
        ledger.use_one(ResourceKind::AddCells);

        assert_eq!(ledger.current(ResourceKind::AddCells), 1);
        assert_eq!(ledger.current(ResourceKind::Hint), 3);
        assert_eq!(ledger.current(ResourceKind::ChangeValue), 3);
    }

    #[test]
    fn test_add_is_clamped_to_max() {
        let mut ledger = ResourceLedger::new(5);
        ledger.use_one(ResourceKind::ChangeValue);
        ledger.use_one(ResourceKind::ChangeValue);

        ledger.add(ResourceKind::ChangeValue, 1);
        assert_eq!(ledger.current(ResourceKind::ChangeValue), 4);

        ledger.add(ResourceKind::ChangeValue, 100);
        assert_eq!(ledger.current(ResourceKind::ChangeValue), 5);
    }

    #[test]
    fn test_reset_restores_max() {
        let mut ledger = ResourceLedger::new(2);
        ledger.use_one(ResourceKind::Hint);
        ledger.use_one(ResourceKind::AddCells);

        ledger.reset(ResourceKind::Hint);
        assert_eq!(ledger.current(ResourceKind::Hint), 2);
        assert_eq!(ledger.current(ResourceKind::AddCells), 1);

        ledger.reset_all();
        assert_eq!(ledger.current(ResourceKind::AddCells), 2);
    }

    #[test]
    fn test_apply_counts_clamps() {
        let mut ledger = ResourceLedger::new(5);

        ledger.apply_counts(ResourceCounts {
            add_cells: 2,
            hint: 9,
            change: 0,
        });

        assert_eq!(
            ledger.counts(),
            ResourceCounts {
                add_cells: 2,
                hint: 5,
                change: 0
            }
        );
    }
}
