//! Translation of handler-provided UI strings.
//!
//! Entity handlers capture a [`Translate`] implementation at construction
//! and resolve every user-visible label through it. The bootstrap code picks
//! the implementation: a loaded [`MessageCatalog`], the built-in English
//! strings, or any `Fn(&str) -> String` closure in tests.

mod catalog;
mod error;
mod locale;

pub use catalog::MessageCatalog;
pub use error::{I18nError, I18nResult};
pub use locale::{resolve_locale, DEFAULT_LOCALE};

/// A translation function: message key in, localized text out.
///
/// Implementations must never fail. An unknown key translates to itself so
/// a missing entry shows up in the UI instead of crashing a render.
pub trait Translate: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}
