//! Slug generation for entity records.
//!
//! People slugs derive from the name. Location slugs combine venue, city,
//! and state with a fixed precedence when some fields are absent, falling
//! back to the surrogate id so the slug is never empty.

use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Lowercase, collapse every non-alphanumeric run to a single hyphen, and
/// trim leading/trailing hyphens.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Slug for a location record.
///
/// Precedence: venue+city+state, venue+city, city+state, venue, city, state.
/// When every field is absent (or blank) the slug is `location-{id}`.
pub fn location_slug(
    id: i64,
    city: Option<&str>,
    state: Option<&str>,
    venue: Option<&str>,
) -> String {
    fn present(field: Option<&str>) -> Option<&str> {
        field.map(str::trim).filter(|s| !s.is_empty())
    }

    let slug = match (present(venue), present(city), present(state)) {
        (Some(v), Some(c), Some(s)) => slugify(&format!("{v} {c} {s}")),
        (Some(v), Some(c), None) => slugify(&format!("{v} {c}")),
        (None, Some(c), Some(s)) => slugify(&format!("{c} {s}")),
        (Some(v), None, _) => slugify(v),
        (None, Some(c), None) => slugify(c),
        (None, None, Some(s)) => slugify(s),
        (None, None, None) => String::new(),
    };

    if slug.is_empty() {
        format!("location-{id}")
    } else {
        slug
    }
}
