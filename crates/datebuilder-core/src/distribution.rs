//! Spacing of recurring series.
//!
//! A [`DelayDistribution`] maps the position of an element within a series to
//! an offset in whatever unit the caller adds. It never looks at a calendar.

use std::fmt;
use std::sync::Arc;

type DelayFn = dyn Fn(usize, usize) -> i64 + Send + Sync;

/// Maps `(index, count)` to the offset of the `index`-th element.
#[derive(Clone)]
pub struct DelayDistribution {
    delay: Arc<DelayFn>,
}

impl DelayDistribution {
    pub fn new(delay: impl Fn(usize, usize) -> i64 + Send + Sync + 'static) -> Self {
        Self {
            delay: Arc::new(delay),
        }
    }

    /// One unit between consecutive elements.
    pub fn normal() -> Self {
        Self::new(|index, _| to_offset(index))
    }

    /// Unit spacing for the first half, then gaps growing quadratically.
    ///
    /// With `breakpoint = count / 2`, indices past the breakpoint get
    /// `index + (index - breakpoint)^2`.
    pub fn optimized() -> Self {
        Self::new(|index, count| {
            let breakpoint = count / 2;
            if index <= breakpoint {
                return to_offset(index);
            }
            let excess = to_offset(index - breakpoint);
            to_offset(index).saturating_add(excess.saturating_mul(excess))
        })
    }

    pub fn delay_for_number(&self, index: usize, count: usize) -> i64 {
        (self.delay)(index, count)
    }

    /// `count` values, each `start` moved by the delay for its index.
    pub fn generate<U>(&self, count: usize, start: U, mut add_delay: impl FnMut(&U, i64) -> U) -> Vec<U> {
        (0..count)
            .map(|index| add_delay(&start, self.delay_for_number(index, count)))
            .collect()
    }
}

impl Default for DelayDistribution {
    fn default() -> Self {
        Self::normal()
    }
}

impl fmt::Debug for DelayDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelayDistribution").finish_non_exhaustive()
    }
}

fn to_offset(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Shapes
    // ========================================================================

    #[test]
    fn normal_is_identity() {
        let offsets = DelayDistribution::normal().generate(100, 0i64, |start, delay| start + delay);
        assert_eq!(offsets, (0..100).collect::<Vec<i64>>());
    }

    #[test]
    fn optimized_first_half_is_unchanged() {
        let offsets = DelayDistribution::optimized().generate(100, 0i64, |start, delay| start + delay);
        assert_eq!(offsets.len(), 100);
        assert_eq!(offsets[..=50], (0..=50).collect::<Vec<i64>>()[..]);
        assert_eq!(offsets[51], 52);
        assert_eq!(offsets[99], 2500);
    }

    #[test]
    fn optimized_gaps_grow() {
        let offsets = DelayDistribution::optimized().generate(100, 0i64, |start, delay| start + delay);
        let gaps: Vec<i64> = offsets.windows(2).map(|pair| pair[1] - pair[0]).collect();
        assert!(gaps.iter().all(|gap| *gap > 0));
        assert!(gaps[50..].windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn odd_count_breakpoint_rounds_down() {
        let optimized = DelayDistribution::optimized();
        assert_eq!(optimized.delay_for_number(3, 7), 3);
        assert_eq!(optimized.delay_for_number(4, 7), 5);
    }

    // ========================================================================
    // Generation
    // ========================================================================

    #[test]
    fn zero_count_is_empty() {
        let values = DelayDistribution::default().generate(0, 10i64, |start, delay| start + delay);
        assert!(values.is_empty());
    }

    #[test]
    fn start_is_passed_unchanged_to_every_call() {
        let mut seen = Vec::new();
        DelayDistribution::normal().generate(3, "start", |start, delay| {
            seen.push((*start, delay));
            *start
        });
        assert_eq!(seen, vec![("start", 0), ("start", 1), ("start", 2)]);
    }

    #[test]
    fn custom_distribution() {
        let every_other = DelayDistribution::new(|index, _| 2 * index as i64);
        let values = every_other.generate(4, 1i64, |start, delay| start + delay);
        assert_eq!(values, vec![1, 3, 5, 7]);
    }
}
