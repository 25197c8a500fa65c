use std::collections::BTreeSet;

/// Missing-value sentinel that spreadsheet exports leak into text cells
const MISSING_SENTINEL: &str = "nan";

/// Normalize a comma-separated cell into a set of lowercase tokens
///
/// Absent cells yield an empty set. Pieces are trimmed and lowercased;
/// empty pieces and the `nan` sentinel are dropped.
pub fn normalize_list(cell: Option<&str>) -> BTreeSet<String> {
    let Some(cell) = cell else {
        return BTreeSet::new();
    };

    cell.split(',')
        .map(|piece| piece.trim().to_lowercase())
        .filter(|piece| !piece.is_empty() && piece != MISSING_SENTINEL)
        .collect()
}

/// Trim and lowercase a cell, returning an empty string when absent
#[inline]
pub fn to_lower_trimmed(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

/// Parse integer text, falling back to `default` on any failure
pub fn to_int(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

/// Parse an integer catalog cell, falling back to `default` on any failure
///
/// Numeric spreadsheet cells frequently arrive as floats (`"18.0"`), so a
/// finite float is truncated toward zero rather than rejected.
pub fn cell_to_int(value: Option<&str>, default: i64) -> i64 {
    let Some(raw) = value.map(str::trim) else {
        return default;
    };

    if let Ok(parsed) = raw.parse::<i64>() {
        return parsed;
    }

    match raw.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed.trunc() as i64,
        _ => default,
    }
}

/// Parse a floating point cell, falling back to `default` on any failure
///
/// NaN counts as a missing value.
pub fn to_float(value: Option<&str>, default: f64) -> f64 {
    match value.map(str::trim).map(str::parse::<f64>) {
        Some(Ok(parsed)) if !parsed.is_nan() => parsed,
        _ => default,
    }
}
