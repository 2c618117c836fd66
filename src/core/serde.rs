/*!
 * Serde Helpers
 * Shared skip_serializing_if predicates for boundary output
 */

/// Skip serializing if Option is None
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}
