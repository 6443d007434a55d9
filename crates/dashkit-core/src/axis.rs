//! Y axis generation for the revenue chart

use crate::error::{CoreError, CoreResult};
use crate::types::{AxisResult, RevenuePoint};

/// Distance between two ticks of the axis
pub const AXIS_STEP: i64 = 1000;

/// Most ticks an axis may have: `$0K` up to `$1000K`.
/// Larger revenue is rejected instead of building an unreadable axis.
pub const MAX_TICKS: i64 = 1001;

/// Build the y axis for a revenue chart.
///
/// The top of the axis is the largest value rounded up to a multiple of
/// [`AXIS_STEP`]; labels run from the top down to `$0K`. An empty slice
/// yields a single `$0K` tick. Negative values and axes longer than
/// [`MAX_TICKS`] are a `PreconditionViolation`.
pub fn generate_y_axis(points: &[RevenuePoint]) -> CoreResult<AxisResult> {
    if let Some(bad) = points.iter().find(|p| p.value < 0) {
        return Err(CoreError::precondition(format!(
            "revenue for '{}' is negative ({})",
            bad.label, bad.value
        )));
    }

    let highest = points.iter().map(|p| p.value).max().unwrap_or(0);
    let top_bound = round_up_to_step(highest)?;
    let ticks = top_bound / AXIS_STEP + 1;
    if ticks > MAX_TICKS {
        return Err(CoreError::precondition(format!(
            "revenue {} needs {} ticks, at most {} are supported",
            highest, ticks, MAX_TICKS
        )));
    }

    let tick_labels = (0..=top_bound / AXIS_STEP)
        .rev()
        .map(|thousands| format!("${}K", thousands))
        .collect();

    Ok(AxisResult { tick_labels, top_bound })
}

fn round_up_to_step(value: i64) -> CoreResult<i64> {
    let steps = value / AXIS_STEP + i64::from(value % AXIS_STEP != 0);
    steps
        .checked_mul(AXIS_STEP)
        .ok_or_else(|| CoreError::precondition(format!("revenue {} is too large to chart", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revenue(values: &[i64]) -> Vec<RevenuePoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| RevenuePoint::new(format!("M{}", i + 1), *v))
            .collect()
    }

    #[test]
    fn test_generate_y_axis() {
        let axis = generate_y_axis(&revenue(&[5000, 10000, 15000])).unwrap();

        assert_eq!(axis.top_bound, 15000);
        assert_eq!(axis.tick_labels.len(), 16);
        assert_eq!(axis.tick_labels.first().map(String::as_str), Some("$15K"));
        assert_eq!(axis.tick_labels[1], "$14K");
        assert_eq!(axis.tick_labels.last().map(String::as_str), Some("$0K"));
    }

    #[test]
    fn test_top_bound_rounds_up() {
        let axis = generate_y_axis(&revenue(&[1200, 4001, 300])).unwrap();
        assert_eq!(axis.top_bound, 5000);
        assert_eq!(axis.tick_labels, vec!["$5K", "$4K", "$3K", "$2K", "$1K", "$0K"]);

        let axis = generate_y_axis(&revenue(&[1])).unwrap();
        assert_eq!(axis.top_bound, 1000);
    }

    #[test]
    fn test_empty_and_zero_revenue() {
        let axis = generate_y_axis(&[]).unwrap();
        assert_eq!(axis.top_bound, 0);
        assert_eq!(axis.tick_labels, vec!["$0K"]);

        assert_eq!(generate_y_axis(&revenue(&[0, 0])).unwrap(), axis);
    }

    #[test]
    fn test_negative_revenue_rejected() {
        let err = generate_y_axis(&revenue(&[100, -5])).unwrap_err();
        match err {
            CoreError::PreconditionViolation { message } => assert!(message.contains("M2")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_revenue_rejected() {
        assert!(generate_y_axis(&revenue(&[i64::MAX])).is_err());
    }

    #[test]
    fn test_tick_cap() {
        let largest = (MAX_TICKS - 1) * AXIS_STEP;
        let axis = generate_y_axis(&revenue(&[largest])).unwrap();
        assert_eq!(axis.tick_labels.len() as i64, MAX_TICKS);
        assert_eq!(axis.tick_labels[0], "$1000K");

        assert!(matches!(
            generate_y_axis(&revenue(&[largest + 1])),
            Err(CoreError::PreconditionViolation { .. })
        ));
        assert!(generate_y_axis(&revenue(&[100_000_000_000_000])).is_err());
    }

    #[test]
    fn test_axis_is_repeatable() {
        let points = revenue(&[2500, 8700, 4300]);
        let first = generate_y_axis(&points).unwrap();
        assert_eq!(generate_y_axis(&points).unwrap(), first);
        assert_eq!(first.top_bound, 9000);
    }

    #[test]
    fn test_label_count_matches_bound() {
        for max in [0, 999, 1000, 1001, 23456] {
            let axis = generate_y_axis(&revenue(&[max])).unwrap();
            assert_eq!(axis.tick_labels.len() as i64, axis.top_bound / AXIS_STEP + 1);
            assert!(axis.top_bound >= max);
            assert_eq!(axis.top_bound % AXIS_STEP, 0);
        }
    }
}
