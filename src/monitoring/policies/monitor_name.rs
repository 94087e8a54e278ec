use crate::monitoring::domain::ScopeKind;

/// MonitorName policy for matching catalogue entries against a monitor URL slug
///
/// Slugs are lowercase, hyphen-separated and limited to `[-a-z0-9]`:
/// 1. trim and lowercase the name
/// 2. replace spaces with hyphens
/// 3. drop every other character outside `[-a-z0-9]`
/// 4. collapse runs of hyphens
pub struct MonitorName;

impl MonitorName {
    /// Formats a catalogue name into its slug form
    pub fn format(name: &str) -> String {
        let filtered: String = name
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' { '-' } else { c })
            .filter(|c| *c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();

        let mut slug = String::with_capacity(filtered.len());
        for c in filtered.chars() {
            if c == '-' && slug.ends_with('-') {
                continue;
            }
            slug.push(c);
        }
        slug
    }

    /// Strips everything outside `[-a-z0-9]` from a slug received in a request
    pub fn sanitize(monitor_name: &str) -> String {
        monitor_name
            .chars()
            .filter(|c| *c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect()
    }

    /// Whether an entry of `entry_kind` named `entry_name` is the one a request selected
    pub fn is_selected(
        requested_kind: Option<ScopeKind>,
        requested_name: &str,
        entry_kind: ScopeKind,
        entry_name: &str,
    ) -> bool {
        requested_kind == Some(entry_kind) && Self::format(entry_name) == requested_name
    }
}
