use super::string::remove_postfix;

const BUNDLE_SUFFIX: &str = "Bundle";

/// Extract the bundle name from a type path such as `Corp::SomeProductBundle::Entity::Order`.
///
/// Both `::` and `\` separators are accepted. Returns the first segment ending
/// in `Bundle` with that suffix removed, or `None` if there is no such segment.
pub fn bundle_name(type_path: &str) -> Option<String> {
    type_path
        .split(['\\', ':'])
        .find(|segment| segment.ends_with(BUNDLE_SUFFIX))
        .map(|segment| remove_postfix(segment, BUNDLE_SUFFIX).to_string())
}
