//! Folio internationalization (i18n)
//!
//! Goals:
//! - One explicitly owned [`LocaleStore`] per running site, shared by handle
//! - Two supported locales (`pt`, `en`), `pt` by default
//! - The language preference survives restarts through a [`PreferenceStore`]
//! - Lookups never fail: a missing key resolves to the key itself
//!
//! ```rust,ignore
//! use folio_i18n::{t, FilePreferences, LocaleStore, TranslationTables};
//!
//! let prefs = FilePreferences::new("preferences.toml");
//! let store = LocaleStore::initialize(prefs, TranslationTables::bundled()?);
//! let title = store.translate("contact.email.title");
//! let hello = store.resolve_label(&t!("home.greeting", { name: "Ana" }));
//! store.toggle_locale();
//! ```

mod catalog;
mod error;
mod label;
mod locale;
mod prefs;
mod store;
mod tables;

pub use catalog::{Catalog, CatalogParseError};
pub use error::I18nError;
pub use label::{ArgValue, Label, Message};
pub use locale::{normalize_locale, Locale, UnknownLocale};
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore, LANGUAGE_KEY};
pub use store::{LocaleStore, SubscriptionId};
pub use tables::{ParityReport, TranslationTables};

/// Convenience macro for building a translation key + args as a [`Label`].
///
/// Examples:
/// - `t!("nav.home")`
/// - `t!("blog.reading_time", { minutes: 5 })`
#[macro_export]
macro_rules! t {
    ($id:literal) => {
        $crate::Label::msg($crate::Message::new($id))
    };
    ($id:literal, { $($name:ident : $value:expr),* $(,)? }) => {{
        let mut m = $crate::Message::new($id);
        $(
            m = m.arg(stringify!($name), $value);
        )*
        $crate::Label::msg(m)
    }};
}
