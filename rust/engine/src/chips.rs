//! Denominated chip ledger.
//!
//! Every balance in the engine has two views: the abstract integer total and a
//! [`ChipStack`] recording how many physical chips of each value make it up.
//! The ledger keeps the second view honest: withdrawals take the largest chips
//! that fit first and break a bigger chip into change when nothing fits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Chip values in play, lowest first.
pub const DENOMINATIONS: [u32; 6] = [1, 5, 25, 100, 500, 1000];

/// Denomination → chip count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChipStack(BTreeMap<u32, u32>);

impl ChipStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Greedy breakdown of `amount` into the fewest chips.
    ///
    /// ```
    /// use railbird_engine::chips::ChipStack;
    ///
    /// let stack = ChipStack::from_amount(1_630);
    /// assert_eq!(stack.count(1000), 1);
    /// assert_eq!(stack.count(500), 1);
    /// assert_eq!(stack.count(100), 1);
    /// assert_eq!(stack.count(25), 1);
    /// assert_eq!(stack.count(5), 1);
    /// assert_eq!(stack.total(), 1_630);
    /// ```
    pub fn from_amount(amount: u32) -> Self {
        Self::greedy(amount, &DENOMINATIONS)
    }

    pub fn from_counts<I: IntoIterator<Item = (u32, u32)>>(counts: I) -> Self {
        let mut stack = Self::new();
        for (denom, count) in counts {
            stack.add(denom, count);
        }
        stack
    }

    fn greedy(mut amount: u32, denoms: &[u32]) -> Self {
        let mut stack = Self::new();
        for &d in denoms.iter().rev() {
            let n = amount / d;
            if n > 0 {
                stack.add(d, n);
                amount -= n * d;
            }
        }
        stack
    }

    pub fn count(&self, denom: u32) -> u32 {
        self.0.get(&denom).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0
            .iter()
            .fold(0u32, |acc, (d, n)| acc.saturating_add(d.saturating_mul(*n)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|&n| n == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().filter(|(_, n)| **n > 0).map(|(d, n)| (*d, *n))
    }

    /// Denominations outside [`DENOMINATIONS`] present in this stack.
    pub fn unknown_denominations(&self) -> Vec<u32> {
        self.iter()
            .map(|(d, _)| d)
            .filter(|d| !DENOMINATIONS.contains(d))
            .collect()
    }

    fn add(&mut self, denom: u32, count: u32) {
        if count > 0 {
            let n = self.0.entry(denom).or_insert(0);
            *n = n.saturating_add(count);
        }
    }

    fn remove(&mut self, denom: u32, count: u32) {
        if let Some(n) = self.0.get_mut(&denom) {
            *n = n.saturating_sub(count);
            if *n == 0 {
                self.0.remove(&denom);
            }
        }
    }

    pub fn deposit(&mut self, other: &ChipStack) {
        for (d, n) in other.iter() {
            self.add(d, n);
        }
    }

    /// Removes chips worth exactly `amount` and returns them.
    ///
    /// Held chips are taken highest denomination first. When every remaining
    /// chip is larger than what is still owed, the smallest of them is broken
    /// into lower denominations and the walk resumes.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientChips`] if the stack is worth less than
    /// `amount`; the stack is left untouched in that case.
    pub fn withdraw(&mut self, amount: u32) -> Result<ChipStack, GameError> {
        let available = self.total();
        if amount > available {
            return Err(GameError::InsufficientChips {
                requested: amount,
                available,
            });
        }
        let mut taken = ChipStack::new();
        let mut remaining = amount;
        while remaining > 0 {
            let fitting = self
                .iter()
                .map(|(d, _)| d)
                .filter(|&d| d <= remaining)
                .max();
            if let Some(d) = fitting {
                let n = self.count(d).min(remaining / d);
                self.remove(d, n);
                taken.add(d, n);
                remaining -= n * d;
                continue;
            }
            // total >= remaining holds on every pass, so a larger chip exists
            let Some(big) = self.iter().map(|(d, _)| d).min() else {
                return Err(GameError::InsufficientChips {
                    requested: amount,
                    available,
                });
            };
            self.remove(big, 1);
            self.deposit(&Self::change_for(big));
        }
        Ok(taken)
    }

    /// Breaks one chip of `denom` into the largest smaller denominations.
    fn change_for(denom: u32) -> ChipStack {
        let smaller: Vec<u32> = DENOMINATIONS
            .iter()
            .copied()
            .filter(|&d| d < denom)
            .collect();
        if smaller.is_empty() {
            // only a 1-chip or an unknown sub-unit lands here; pay it out as 1s
            return ChipStack::from_counts([(1, denom)]);
        }
        Self::greedy(denom, &smaller)
    }
}
