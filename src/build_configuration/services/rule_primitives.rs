//! Field comparisons shared by the compatibility evaluator and the category filter.
//!
//! Every primitive answers "is there a known conflict?": missing data on either side
//! never counts as a conflict.

/// Both sockets known and different
pub(crate) fn socket_conflict(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a != b)
}

/// Some memory type is a substring of some board support entry.
///
/// Loose match: `"DDR5"` is supported by a board listing `"DDR5-6000"`.
pub(crate) fn ram_type_supported(ram_types: &[String], board_support: &[String]) -> bool {
    ram_types
        .iter()
        .any(|ram| board_support.iter().any(|support| support.contains(ram.as_str())))
}

/// Both lists known and no memory type matches
pub(crate) fn ram_conflict(ram_types: &[String], board_support: &[String]) -> bool {
    !ram_types.is_empty()
        && !board_support.is_empty()
        && !ram_type_supported(ram_types, board_support)
}

/// Case list known and missing the board's form factor (case-insensitive)
pub(crate) fn form_factor_conflict(case_supported: &[String], form_factor: Option<&str>) -> bool {
    let Some(form_factor) = form_factor else {
        return false;
    };
    if case_supported.is_empty() {
        return false;
    }
    let wanted = form_factor.to_lowercase();
    !case_supported.iter().any(|ff| ff.to_lowercase() == wanted)
}

/// Both measurements known and `value` exceeds `limit`
pub(crate) fn exceeds(value: Option<f64>, limit: Option<f64>) -> bool {
    matches!((value, limit), (Some(v), Some(l)) if v > l)
}

/// Air coolers are the only coolers constrained by case height clearance
pub(crate) fn is_air_cooler(cooler_type: Option<&str>) -> bool {
    cooler_type == Some("Air")
}

/// Generation list present and missing the CPU generation.
///
/// An empty list is still a list: it supports nothing.
pub(crate) fn generation_unlisted(supported: Option<&[String]>, generation: Option<&str>) -> bool {
    match (supported, generation) {
        (Some(supported), Some(generation)) => !supported.iter().any(|g| g == generation),
        _ => false,
    }
}
