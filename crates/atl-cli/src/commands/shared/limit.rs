/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(global: Option<u32>, configured: u32) -> usize {
    usize::try_from(global.unwrap_or(configured)).unwrap_or(usize::MAX)
}

/// Keep at most `limit` items. A limit of zero keeps everything.
pub fn apply_limit<T>(items: &mut Vec<T>, limit: usize) {
    if limit > 0 {
        items.truncate(limit);
    }
}
