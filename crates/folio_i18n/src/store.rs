use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::label::{Label, Message};
use crate::locale::Locale;
use crate::prefs::{PreferenceStore, LANGUAGE_KEY};
use crate::tables::TranslationTables;

type Subscriber = Arc<dyn Fn(Locale) + Send + Sync>;

/// Handle returned by [`LocaleStore::subscribe`].
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SubscriptionId(u64);

/// Owner of the active locale.
///
/// Created once at startup and shared by handle (usually `Arc<LocaleStore>`)
/// with every component that shows text. Reads never fail. The only mutators
/// are [`set_locale`](Self::set_locale) and its wrapper
/// [`toggle_locale`](Self::toggle_locale); both persist the new choice and
/// call every subscriber before returning.
pub struct LocaleStore {
    active: RwLock<Locale>,
    tables: TranslationTables,
    prefs: Box<dyn PreferenceStore>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_id: AtomicU64,
}

impl LocaleStore {
    /// Build the store, restoring the persisted language.
    ///
    /// A missing, unreadable or unrecognized preference falls back to
    /// [`Locale::Pt`]; none of those cases is an error.
    pub fn initialize(prefs: impl PreferenceStore + 'static, tables: TranslationTables) -> Self {
        let locale = restore_locale(&prefs);
        debug!("LocaleStore::initialize: active locale {}", locale);
        Self {
            active: RwLock::new(locale),
            tables,
            prefs: Box::new(prefs),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn active_locale(&self) -> Locale {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn tables(&self) -> &TranslationTables {
        &self.tables
    }

    /// Localized string for `key`, or `key` itself when no translation exists.
    pub fn translate(&self, key: &str) -> String {
        self.tables
            .get(self.active_locale(), key)
            .unwrap_or(key)
            .to_string()
    }

    /// Translate a message with arguments, falling back to the message id.
    pub fn tr(&self, msg: &Message) -> String {
        self.tables
            .catalog(self.active_locale())
            .format_message(msg)
            .unwrap_or_else(|| msg.id.to_string())
    }

    pub fn resolve_label(&self, label: &Label) -> String {
        match label {
            Label::Raw(s) => s.clone(),
            Label::Msg(m) => self.tr(m),
        }
    }

    /// Switch language, persist it, and notify subscribers.
    ///
    /// Persisting failures are logged and otherwise ignored. Re-selecting
    /// the active locale persists again but does not notify.
    pub fn set_locale(&self, locale: Locale) {
        let mut cur = self.active.write().unwrap_or_else(PoisonError::into_inner);
        let previous = *cur;
        *cur = locale;
        drop(cur);

        if let Err(e) = self.prefs.save(LANGUAGE_KEY, locale.code()) {
            warn!(error = %e, locale = %locale, "failed to persist language preference");
        }

        if previous != locale {
            debug!("LocaleStore::set_locale: {} -> {}", previous, locale);
            self.notify(locale);
        }
    }

    /// Flip to the other locale and return it.
    ///
    /// Defined only for the two-locale set; see [`Locale::other`].
    pub fn toggle_locale(&self) -> Locale {
        let next = self.active_locale().other();
        self.set_locale(next);
        next
    }

    /// Register a callback run with the new locale after every change.
    pub fn subscribe(&self, callback: impl Fn(Locale) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers().push((id, Arc::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscribers();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }

    fn subscribers(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Subscriber)>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, locale: Locale) {
        // Snapshot first so callbacks may use the store (including subscribe).
        let callbacks: Vec<Subscriber> = self
            .subscribers()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for cb in callbacks {
            cb(locale);
        }
    }
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("active", &self.active_locale())
            .field("subscribers", &self.subscribers().len())
            .finish_non_exhaustive()
    }
}

fn restore_locale(prefs: &dyn PreferenceStore) -> Locale {
    match prefs.load(LANGUAGE_KEY) {
        Ok(Some(tag)) => Locale::from_tag(&tag).unwrap_or_else(|| {
            warn!(stored = %tag, "ignoring unrecognized language preference");
            Locale::default()
        }),
        Ok(None) => Locale::default(),
        Err(e) => {
            warn!(error = %e, "language preference unavailable, using default");
            Locale::default()
        }
    }
}
