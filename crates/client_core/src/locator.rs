use shared::domain::Office;

/// Filters the static office list by a free-text query.
///
/// The query is trimmed first; a blank query returns the full list in its
/// original order. Otherwise an office matches when the lowercased query is
/// a substring of its name, address, and phone joined with single spaces,
/// so a phone fragment or a street name both hit. Relative order is
/// preserved.
pub fn filter_offices(offices: &[Office], query: &str) -> Vec<Office> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return offices.to_vec();
    }

    offices
        .iter()
        .filter(|office| {
            format!("{} {} {}", office.name, office.address, office.phone)
                .to_lowercase()
                .contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/locator_tests.rs"]
mod tests;
