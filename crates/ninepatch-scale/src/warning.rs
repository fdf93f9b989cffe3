//! Non-fatal diagnostics raised while planning a scale
//!
//! None of these stop the operation; the output is still produced by the
//! normal allocation rules. Each warning is logged with `log::warn!` and
//! collected into the [`crate::ScaleReport`].

use crate::allocate::AxisAllocation;
use crate::markers::Axis;
use crate::partition::AxisRegion;
use std::fmt;

/// Degenerate stretch situation on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StretchWarning {
    /// The axis has no markers but its size changes; the last (only)
    /// region absorbs the difference.
    NoMarkers {
        axis: Axis,
        source_len: u32,
        target_len: u32,
    },
    /// The axis has markers but the target leaves no room beyond the
    /// fixed regions, so every stretch region collapses to 0.
    ZeroStretchBudget {
        axis: Axis,
        fixed_total: u64,
        target_len: u32,
    },
    /// The last region is fixed and the rounding correction left it
    /// smaller than its source size.
    FixedRegionShrunk {
        axis: Axis,
        region: usize,
        natural: u32,
        allocated: i64,
    },
}

impl fmt::Display for StretchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            StretchWarning::NoMarkers {
                axis,
                source_len,
                target_len,
            } => write!(
                f,
                "{axis} axis has no stretch markers but is resized from {source_len} to {target_len}"
            ),
            StretchWarning::ZeroStretchBudget {
                axis,
                fixed_total,
                target_len,
            } => write!(
                f,
                "{axis} target {target_len} does not exceed fixed content {fixed_total}; stretch regions collapse"
            ),
            StretchWarning::FixedRegionShrunk {
                axis,
                region,
                natural,
                allocated,
            } => write!(
                f,
                "{axis} fixed region {region} shrunk from {natural} to {allocated}"
            ),
        }
    }
}

/// Collect the warnings for one allocated axis.
pub(crate) fn check_axis(
    axis: Axis,
    regions: &[AxisRegion],
    alloc: &AxisAllocation,
    target_len: u32,
) -> Vec<StretchWarning> {
    let mut warnings = Vec::new();
    let source_len = (alloc.fixed_total + alloc.stretch_total) as u32;
    let has_markers = regions.iter().any(|r| r.stretch);

    if !has_markers && target_len != source_len {
        warnings.push(StretchWarning::NoMarkers {
            axis,
            source_len,
            target_len,
        });
    }
    if has_markers && alloc.stretch_budget == 0 {
        warnings.push(StretchWarning::ZeroStretchBudget {
            axis,
            fixed_total: alloc.fixed_total,
            target_len,
        });
    }
    if let (Some(last), Some(&allocated)) = (regions.last(), alloc.sizes.last())
        && !last.stretch
        && allocated < last.size as i64
    {
        warnings.push(StretchWarning::FixedRegionShrunk {
            axis,
            region: regions.len() - 1,
            natural: last.size,
            allocated,
        });
    }

    for w in &warnings {
        log::warn!("{}", w);
    }
    warnings
}
