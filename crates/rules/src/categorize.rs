use cleargate_core::Category;

/// Infer the product category from a free-text description.
///
/// Rules are checked in a fixed priority order and the first match wins:
/// Electronics before Pharmaceuticals before Machinery. Matching is a
/// case-insensitive substring test; anything unmatched is `Other`.
pub fn infer_category(description: &str) -> Category {
    let lowered = description.to_lowercase();
    if lowered.contains("electronics") {
        Category::Electronics
    } else if ["medicine", "drug", "pharmaceutical"]
        .iter()
        .any(|word| lowered.contains(word))
    {
        Category::Pharmaceuticals
    } else if lowered.contains("machine") || lowered.contains("equipment") {
        Category::Machinery
    } else {
        Category::Other
    }
}
