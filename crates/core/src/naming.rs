/// Convert a model or column name to upper-camel form.
///
/// Splits on underscores, dashes, and spaces and capitalizes the first
/// letter of each part: `rental_space` → `RentalSpace`.
pub fn upper_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for part in name.split(['_', '-', ' ']) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.extend(chars);
        }
    }
    result
}
