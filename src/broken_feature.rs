// Deliberately broken: the input is never inspected.

/// Returns `true` for any value, truthy or not.
pub fn will_always_fail<T: ?Sized>(_value: &T) -> bool {
    true
}
