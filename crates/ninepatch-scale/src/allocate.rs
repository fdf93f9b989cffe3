//! Destination size allocation
//!
//! Fixed regions keep their source size. Stretch regions split whatever
//! remains of the destination length in proportion to their source sizes,
//! each rounded half-up. The difference between the destination length
//! and the rounded sum is then added to the last region, so the sizes
//! always add up to the destination length exactly.
//!
//! When the destination is shorter than the fixed regions together, the
//! stretch regions get 0 and the correction shrinks the last region below
//! its natural size, possibly below zero. Sizes are signed so that this
//! case is represented as computed.

use crate::partition::{AxisRegion, fixed_total, stretch_total};

/// Result of allocating one axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisAllocation {
    /// Destination size per region, same order as the input regions
    pub sizes: Vec<i64>,
    /// Sum of fixed source sizes
    pub fixed_total: u64,
    /// Sum of stretch source sizes
    pub stretch_total: u64,
    /// Destination pixels shared among stretch regions
    pub stretch_budget: u64,
    /// Amount added to the last region after rounding
    pub correction: i64,
}

impl AxisAllocation {
    /// Sum of all destination sizes.
    pub fn total(&self) -> i64 {
        self.sizes.iter().sum()
    }

    /// Whether any region ends up with a non-positive size.
    pub fn has_empty_region(&self) -> bool {
        self.sizes.iter().any(|&s| s <= 0)
    }
}

/// `round(size * budget / total)` with halves rounded up, in exact integers.
fn proportional_share(size: u32, budget: u64, total: u64) -> i64 {
    let num = 2 * size as u128 * budget as u128 + total as u128;
    (num / (2 * total as u128)) as i64
}

/// Allocate `dest_len` destination pixels across `regions`.
///
/// # Examples
///
/// ```
/// use ninepatch_scale::{AxisRegion, allocate_sizes};
///
/// let regions = [
///     AxisRegion::fixed(0, 40),
///     AxisRegion::stretchable(40, 20),
///     AxisRegion::fixed(60, 40),
/// ];
/// let alloc = allocate_sizes(&regions, 200);
/// assert_eq!(alloc.sizes, vec![40, 120, 40]);
/// ```
pub fn allocate_sizes(regions: &[AxisRegion], dest_len: u32) -> AxisAllocation {
    let fixed = fixed_total(regions);
    let stretch = stretch_total(regions);
    let budget = (dest_len as u64).saturating_sub(fixed);

    let mut sizes: Vec<i64> = regions
        .iter()
        .map(|r| {
            if !r.stretch {
                r.size as i64
            } else if stretch > 0 {
                proportional_share(r.size, budget, stretch)
            } else {
                0
            }
        })
        .collect();

    let sum: i64 = sizes.iter().sum();
    let correction = dest_len as i64 - sum;
    if let Some(last) = sizes.last_mut() {
        *last += correction;
    }

    log::trace!(
        "allocated {} over {} regions: fixed={} stretch={} budget={} correction={}",
        dest_len,
        regions.len(),
        fixed,
        stretch,
        budget,
        correction
    );

    AxisAllocation {
        sizes,
        fixed_total: fixed,
        stretch_total: stretch,
        stretch_budget: budget,
        correction,
    }
}
