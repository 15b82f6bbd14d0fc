//! Multipack quantity extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Quantity when nothing in the record names a set size.
pub const DEFAULT_QUANTITY: &str = "1";

static ITEM_NUMBER_SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/S(\d+)").expect("Invalid item number set regex"));

static DESCRIPTION_SETS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)set/(\d+)").expect("Invalid set/N regex"),
        Regex::new(r"(?i)set of\s*(\d+)").expect("Invalid set of N regex"),
        Regex::new(r"(?i)(\d+)-pack").expect("Invalid N-pack regex"),
    ]
});

/// Find the number of units sold together.
///
/// The item number's `/S<n>` suffix wins. Otherwise each description pattern
/// is tried in turn, first against the short then the long description.
pub fn multipack_quantity(item_number: &str, description: &str, long_description: &str) -> String {
    if let Some(quantity) = first_capture(&ITEM_NUMBER_SET, item_number) {
        return quantity;
    }
    for pattern in DESCRIPTION_SETS.iter() {
        for text in [description, long_description] {
            if let Some(quantity) = first_capture(pattern, text) {
                return quantity;
            }
        }
    }
    DEFAULT_QUANTITY.to_string()
}

fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|group| group.as_str().to_string())
}
