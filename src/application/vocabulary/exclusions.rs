use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    // Words ending in "s" that are not plurals, so the plural rules must leave them alone.
    static ref EXCLUSIONS: HashSet<&'static str> = [
        "us", "as", "thus", "yes", "is", "was", "does", "has", "his", "this", "news", "means",
        "series", "analysis", "lens", "famous", "serious", "focus", "james", "charles", "wales",
        "thesis", "crisis", "achilles", "venus", "sirius", "moses", "jesus", "thomas", "lewis",
        "harris", "curious", "obvious", "photosynthesis", "bus", "buses", "goes",
    ]
    .into_iter()
    .collect();
}

/// Expects an already lower-cased word.
pub fn is_excluded(lower: &str) -> bool {
    EXCLUSIONS.contains(lower)
}
