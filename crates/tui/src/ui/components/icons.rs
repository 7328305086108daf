pub const FOOD: &str = "🍴";
pub const TRANSPORT: &str = "🚗";
pub const ENTERTAINMENT: &str = "🎬";
pub const OTHER: &str = "💰";

/// Row icon for a category label, matched on its lowercase spelling.
#[must_use]
pub fn category_icon(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "food" => FOOD,
        "transport" => TRANSPORT,
        "entertainment" => ENTERTAINMENT,
        _ => OTHER,
    }
}
