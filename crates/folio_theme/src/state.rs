//! Theme state owned by the site shell
//!
//! One `ThemeState` is created at startup and shared by handle. Components
//! read colors during render and subscribe to be told when they change.

use crate::color::Color;
use crate::palette::{ColorToken, Palette};
use crate::scheme::ColorScheme;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

type Subscriber = Arc<dyn Fn(ColorScheme) + Send + Sync>;

/// Handle returned by [`ThemeState::subscribe`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SubscriptionId(u64);

/// Current scheme, its palette, and runtime overrides
pub struct ThemeState {
    /// Current color scheme
    scheme: RwLock<ColorScheme>,

    /// Palette for the current scheme
    palette: RwLock<Palette>,

    /// Dynamic color overrides, kept across scheme switches
    color_overrides: RwLock<FxHashMap<ColorToken, Color>>,

    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_id: AtomicU64,
}

impl ThemeState {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: RwLock::new(scheme),
            palette: RwLock::new(Palette::for_scheme(scheme)),
            color_overrides: RwLock::new(FxHashMap::default()),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    // ========== Color Scheme ==========

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the color scheme. No-op if it is already active.
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.scheme.write().unwrap_or_else(PoisonError::into_inner);
        if *current == scheme {
            return;
        }
        tracing::debug!(
            "ThemeState::set_scheme - switching from {:?} to {:?}",
            *current,
            scheme
        );
        *current = scheme;
        drop(current);

        *self.palette.write().unwrap_or_else(PoisonError::into_inner) =
            Palette::for_scheme(scheme);
        self.notify(scheme);
    }

    /// Toggle between light and dark mode, returning the new scheme
    pub fn toggle_scheme(&self) -> ColorScheme {
        let next = self.scheme().toggle();
        self.set_scheme(next);
        next
    }

    // ========== Color Access ==========

    /// Get a color token value (checks override first)
    pub fn color(&self, token: ColorToken) -> Color {
        if let Some(color) = self
            .color_overrides
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&token)
        {
            return *color;
        }
        self.palette
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
    }

    /// Palette of the current scheme, without overrides
    pub fn palette(&self) -> Palette {
        self.palette
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set a color override and notify subscribers
    pub fn set_color_override(&self, token: ColorToken, color: Color) {
        self.color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token, color);
        self.notify(self.scheme());
    }

    /// Remove a color override
    pub fn remove_color_override(&self, token: ColorToken) {
        let removed = self
            .color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&token);
        if removed.is_some() {
            self.notify(self.scheme());
        }
    }

    pub fn clear_overrides(&self) {
        let mut overrides = self
            .color_overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if overrides.is_empty() {
            return;
        }
        overrides.clear();
        drop(overrides);
        self.notify(self.scheme());
    }

    // ========== CSS Variable Generation ==========

    /// Map of CSS variable names (without `--`) to hex colors, overrides applied.
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        ColorToken::ALL
            .iter()
            .map(|t| (t.css_name().to_string(), self.color(*t).to_string()))
            .collect()
    }

    /// A `:root { ... }` block with every token, in token order.
    pub fn to_css(&self) -> String {
        let mut css = format!(":root {{\n  color-scheme: {};\n", self.scheme());
        for token in ColorToken::ALL {
            let _ = writeln!(css, "  --{}: {};", token.css_name(), self.color(token));
        }
        css.push_str("}\n");
        css
    }

    // ========== Change Notification ==========

    /// Register a callback run after every visual change
    pub fn subscribe(
        &self,
        callback: impl Fn(ColorScheme) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers().push((id, Arc::new(callback)));
        id
    }

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

    fn notify(&self, scheme: ColorScheme) {
        let callbacks: Vec<Subscriber> = self
            .subscribers()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for cb in callbacks {
            cb(scheme);
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}
