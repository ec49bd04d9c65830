const HANDHELD_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
    "playbook",
    "silk",
];

/// Whether `user_agent` identifies a handheld (touch/mobile) device.
///
/// Matching is case-insensitive and looks for any of the well-known mobile tokens anywhere in the
/// string.
pub fn is_handheld_user_agent(user_agent: &str) -> bool {
    HANDHELD_TOKENS
        .iter()
        .any(|token| contains_ignore_ascii_case(user_agent, token))
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.len() > hay.len() {
        return false;
    }
    hay.windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle))
}
