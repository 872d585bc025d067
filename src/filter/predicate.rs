//! Point visibility under the current filters.

use super::flags::BooleanSnapshot;
use super::range::RangeSnapshot;
use crate::point::{PointRecord, ScoreDimension};

/// Whether `point` passes every active constraint.
///
/// All five score ranges must contain the point's value (inclusive on both
/// ends). Each enabled flag then narrows the set further:
///
/// - `no_node`: node id is the `-1` sentinel
/// - `no_boundary`: boundary id is the `-1` sentinel
/// - `no_road`: roads sub-score is zero
/// - `no_building`: buildings sub-score is zero
pub fn is_visible(point: &PointRecord, ranges: &RangeSnapshot, flags: &BooleanSnapshot) -> bool {
    matches_ranges(point, ranges) && matches_flags(point, flags)
}

fn matches_ranges(point: &PointRecord, ranges: &RangeSnapshot) -> bool {
    ScoreDimension::all()
        .iter()
        .all(|&dim| ranges.get(dim).contains(point.score_for(dim)))
}

fn matches_flags(point: &PointRecord, flags: &BooleanSnapshot) -> bool {
    if flags.no_node && point.node_id().is_some() {
        return false;
    }
    if flags.no_boundary && point.boundary_id().is_some() {
        return false;
    }
    if flags.no_road && point.score_2 > 0.0 {
        return false;
    }
    if flags.no_building && point.score_4 > 0.0 {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{BooleanFilterSet, BooleanFlag, RangeFilterSet};
    use crate::point::test_support::sample_point;
    use proptest::prelude::*;

    #[test]
    fn test_default_filters_show_everything() {
        let p = sample_point();
        assert!(is_visible(
            &p,
            &RangeFilterSet::new().snapshot(),
            &BooleanSnapshot::default()
        ));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let p = sample_point();
        let mut ranges = RangeFilterSet::new();
        ranges.set_bounds(ScoreDimension::Total, 55.0, 55.0);
        assert!(is_visible(&p, &ranges.snapshot(), &BooleanSnapshot::default()));
    }

    #[test]
    fn test_sub_score_range_excludes() {
        let p = sample_point();
        let mut ranges = RangeFilterSet::new();
        ranges.set_bounds(ScoreDimension::Facilities, 0.0, 19.5);
        assert!(!is_visible(&p, &ranges.snapshot(), &BooleanSnapshot::default()));
    }

    #[test]
    fn test_flag_scenario() {
        let p = sample_point();
        let ranges = RangeFilterSet::new().snapshot();
        let mut flags = BooleanFilterSet::new();

        flags.set(BooleanFlag::NoNode, true);
        assert!(is_visible(&p, &ranges, &flags.snapshot()));

        flags.set(BooleanFlag::NoBoundary, true);
        assert!(!is_visible(&p, &ranges, &flags.snapshot()));
    }

    #[test]
    fn test_no_road_and_no_building_require_zero_scores() {
        let mut p = sample_point();
        let ranges = RangeFilterSet::new().snapshot();
        let road = BooleanSnapshot {
            no_road: true,
            ..Default::default()
        };
        let building = BooleanSnapshot {
            no_building: true,
            ..Default::default()
        };

        assert!(!is_visible(&p, &ranges, &road));
        assert!(!is_visible(&p, &ranges, &building));

        p.score_2 = 0.0;
        p.score_4 = 0.0;
        assert!(is_visible(&p, &ranges, &road));
        assert!(is_visible(&p, &ranges, &building));
    }

    fn any_flags() -> impl Strategy<Value = BooleanSnapshot> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(no_node, no_boundary, no_road, no_building)| BooleanSnapshot {
                no_node,
                no_boundary,
                no_road,
                no_building,
            },
        )
    }

    proptest! {
        /// Property: widening a range never hides a visible point.
        #[test]
        fn widening_is_monotonic(
            dim_index in 0usize..ScoreDimension::COUNT,
            lo in 0.0f64..=1.0,
            hi in 0.0f64..=1.0,
            widen_lo in 0.0f64..=1.0,
            widen_hi in 0.0f64..=1.0,
            score in 0.0f64..=1.0,
            flags in any_flags(),
        ) {
            let dim = ScoreDimension::all()[dim_index];
            let max = dim.slider_max();
            let mut p = sample_point();
            match dim {
                ScoreDimension::Total => p.score = score * max,
                ScoreDimension::Admin => p.score_1 = score * max,
                ScoreDimension::Roads => p.score_2 = score * max,
                ScoreDimension::Facilities => p.score_3 = score * max,
                ScoreDimension::Buildings => p.score_4 = score * max,
            }

            let (lo, hi) = (lo.min(hi) * max, lo.max(hi) * max);
            let mut narrow = RangeFilterSet::new();
            narrow.set_bounds(dim, lo, hi);
            let mut wide = RangeFilterSet::new();
            wide.set_bounds(dim, lo * (1.0 - widen_lo), hi + (max - hi) * widen_hi);

            if is_visible(&p, &narrow.snapshot(), &flags) {
                prop_assert!(is_visible(&p, &wide.snapshot(), &flags));
            }
        }

        /// Property: enabling a flag never reveals a hidden point.
        #[test]
        fn flags_only_narrow(score in 0.0f64..=100.0, flags in any_flags()) {
            let p = crate::point::test_support::point_with_score(score);
            let ranges = RangeFilterSet::new().snapshot();
            if is_visible(&p, &ranges, &flags) {
                prop_assert!(is_visible(&p, &ranges, &BooleanSnapshot::default()));
            }
        }
    }
}
