//! Address clean-up applied once after loading.

use crate::point::PointRecord;

/// Trim every address part and blank a level that only repeats its parent.
///
/// Municipalities without a separate prefecture level are exported as
/// `北京市,北京市,东城区`; after normalisation that reads `北京市,,东城区`, so the
/// joined display name does not stutter.
pub fn normalize_addresses(points: &mut [PointRecord]) {
    for point in points {
        normalize_point(point);
    }
}

fn normalize_point(point: &mut PointRecord) {
    trim_in_place(&mut point.addr2);
    trim_in_place(&mut point.addr3);
    trim_in_place(&mut point.addr4);

    let addr4_repeats = !point.addr4.is_empty() && point.addr4 == point.addr3;
    let addr3_repeats = !point.addr3.is_empty() && point.addr3 == point.addr2;

    if addr4_repeats {
        point.addr4.clear();
    }
    if addr3_repeats {
        point.addr3.clear();
    }
}

fn trim_in_place(s: &mut String) {
    let trimmed = s.trim();
    if trimmed.len() != s.len() {
        *s = trimmed.to_string();
    }
}
