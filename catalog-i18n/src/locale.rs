/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Reduces a locale tag to its lowercase language subtag.
///
/// `pt-BR`, `pt_BR` and `PT` all resolve to `pt`. Blank input resolves to
/// [`DEFAULT_LOCALE`].
pub fn resolve_locale(tag: &str) -> String {
    let language = tag
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default();
    if language.is_empty() {
        DEFAULT_LOCALE.to_string()
    } else {
        language.to_ascii_lowercase()
    }
}
