use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rust_decimal::Decimal;

/// Online median of a growing collection of contribution amounts.
///
/// The lower half of the amounts lives in a max-heap and the upper half in a
/// min-heap, so an insert costs O(log n) and the median reads in O(1).
/// Invariants: the heaps never differ in size by more than one, the lower
/// heap never holds fewer elements than the upper one, and every element of
/// the lower heap is <= every element of the upper heap.
#[derive(Debug, Clone, Default)]
pub struct RunningMedian {
    lower: BinaryHeap<Decimal>,
    upper: BinaryHeap<Reverse<Decimal>>,
    sum: Decimal,
}

impl RunningMedian {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of amounts inserted so far
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    /// Exact sum of all amounts inserted so far
    pub fn sum(&self) -> Decimal {
        self.sum
    }

    /// Insert one amount, keeping the two halves balanced
    pub fn push(&mut self, amount: Decimal) {
        self.sum += amount;

        match self.lower.peek() {
            Some(&top) if amount > top => self.upper.push(Reverse(amount)),
            _ => self.lower.push(amount),
        }

        // Rebalance so the lower heap carries the extra element on odd counts
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(top) = self.lower.pop() {
                self.upper.push(Reverse(top));
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(Reverse(top)) = self.upper.pop() {
                self.lower.push(top);
            }
        }
    }

    /// Median of everything inserted so far, or zero when nothing has been.
    ///
    /// An even-sized collection yields the exact average of the two central
    /// elements; rounding is left to the report layer.
    pub fn median(&self) -> Decimal {
        if self.lower.len() == self.upper.len() {
            match (self.lower.peek(), self.upper.peek()) {
                (Some(&lo), Some(&Reverse(hi))) => (lo + hi) / Decimal::TWO,
                _ => Decimal::ZERO,
            }
        } else {
            self.lower.peek().copied().unwrap_or(Decimal::ZERO)
        }
    }
}

/// Median of a finite batch, by sorting in place.
///
/// Sufficient when the whole group is known before any statistic is read;
/// also serves as the reference implementation the running structure is
/// checked against.
pub fn batch_median(amounts: &mut [Decimal]) -> Decimal {
    if amounts.is_empty() {
        return Decimal::ZERO;
    }
    amounts.sort_unstable();
    let mid = amounts.len() / 2;
    if amounts.len() % 2 == 0 {
        (amounts[mid - 1] + amounts[mid]) / Decimal::TWO
    } else {
        amounts[mid]
    }
}
