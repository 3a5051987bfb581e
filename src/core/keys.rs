/// The element a keydown was dispatched to, reduced to what routing needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyTarget<'a> {
    pub tag: &'a str,
    pub id: &'a str,
}

// Elements whose own Space/Enter activation must not be swallowed.
const NATIVE_CONTROLS: [&str; 6] = ["BUTTON", "INPUT", "SELECT", "TEXTAREA", "A", "SUMMARY"];

#[inline]
pub fn is_ring_key(key: &str) -> bool {
    matches!(key, " " | "Enter")
}

impl KeyTarget<'_> {
    /// True when the element handles Space/Enter itself.
    pub fn is_control(&self, reserved_ids: &[&str]) -> bool {
        reserved_ids.contains(&self.id)
            || NATIVE_CONTROLS
                .iter()
                .any(|t| t.eq_ignore_ascii_case(self.tag))
    }
}

/// Decide whether a keydown rings the bell. Keys aimed at another control
/// (the motion consent button, form fields, links) keep their default action.
pub fn should_ring(
    key: &str,
    repeat: bool,
    target: Option<KeyTarget<'_>>,
    bell_id: &str,
    reserved_ids: &[&str],
) -> bool {
    if repeat || !is_ring_key(key) {
        return false;
    }
    match target {
        Some(t) if t.id == bell_id => true,
        Some(t) => !t.is_control(reserved_ids),
        None => true,
    }
}
