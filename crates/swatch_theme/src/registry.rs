//! Theme registry
//!
//! [`ThemeRegistry`] owns the current theme and a set of named themes. The
//! current theme is an `Arc<ThemeDefinition>` snapshot behind an `RwLock`;
//! switching swaps the pointer in one write, so readers always see a complete
//! theme. Switches are serialized: subscribers see them in swap order, and a
//! callback must not switch themes on the registry that called it.
//! Construct one and pass it to whatever needs it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use indexmap::IndexMap;
use slotmap::{new_key_type, SlotMap};

use crate::catalog::ThemeCategory;
use crate::presets::ThemePreset;
use crate::theme::ThemeDefinition;

new_key_type! {
    /// Handle returned by [`ThemeRegistry::subscribe`]
    pub struct SubscriptionId;
}

/// Callback invoked with the new theme after every switch
pub type ThemeCallback = Arc<dyn Fn(&Arc<ThemeDefinition>) + Send + Sync>;

pub struct ThemeRegistry {
    current: RwLock<Arc<ThemeDefinition>>,
    themes: RwLock<IndexMap<String, Arc<ThemeDefinition>>>,
    subscribers: RwLock<SlotMap<SubscriptionId, ThemeCallback>>,
    generation: AtomicU64,
    /// Held across swap and notify
    writer: Mutex<()>,
}

impl ThemeRegistry {
    /// Create a registry whose current theme is `default`.
    ///
    /// The default theme is also registered under its name.
    pub fn new(default: impl Into<Arc<ThemeDefinition>>) -> Self {
        let default = default.into();
        let mut themes = IndexMap::new();
        themes.insert(default.name().to_string(), Arc::clone(&default));

        tracing::debug!("ThemeRegistry::new - default theme {}", default);

        Self {
            current: RwLock::new(default),
            themes: RwLock::new(themes),
            subscribers: RwLock::new(SlotMap::with_key()),
            generation: AtomicU64::new(0),
            writer: Mutex::new(()),
        }
    }

    /// The current theme snapshot
    pub fn current_theme(&self) -> Arc<ThemeDefinition> {
        Arc::clone(&self.current.read().unwrap_or_else(|e| e.into_inner()))
    }

    /// Replace the current theme and notify subscribers.
    ///
    /// Subscribers run after the swap. Only the writer lock is held while
    /// they run, so they may read the registry.
    pub fn set_theme(&self, theme: impl Into<Arc<ThemeDefinition>>) {
        let writer = self.lock_writer();
        self.switch(&writer, theme.into());
    }

    /// Switch to the built-in preset of the opposite scheme.
    ///
    /// Only the scheme tag is consulted: any light theme (custom ones too)
    /// toggles to the Dark preset and any dark theme to the Light preset.
    pub fn toggle_theme(&self) -> Arc<ThemeDefinition> {
        let writer = self.lock_writer();
        let scheme = self.current_theme().color_scheme().toggle();
        let next = ThemePreset::for_scheme(scheme).theme();
        self.switch(&writer, Arc::clone(&next));
        next
    }

    /// Add a theme to the lookup set, replacing any theme with the same name
    pub fn register(&self, theme: impl Into<Arc<ThemeDefinition>>) {
        let theme = theme.into();
        tracing::debug!("ThemeRegistry::register - {}", theme);
        self.themes
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(theme.name().to_string(), theme);
    }

    /// Look up a registered theme by name, then a built-in preset by id or
    /// display name
    pub fn theme(&self, name: &str) -> Option<Arc<ThemeDefinition>> {
        let registered = self
            .themes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned();
        let found = registered.or_else(|| ThemePreset::find(name).map(ThemePreset::theme));
        tracing::trace!("ThemeRegistry::theme({}) -> {}", name, found.is_some());
        found
    }

    /// Make the named theme current. Unknown names leave the registry as is.
    pub fn select(&self, name: &str) -> Option<Arc<ThemeDefinition>> {
        let theme = self.theme(name)?;
        self.set_theme(Arc::clone(&theme));
        Some(theme)
    }

    /// Names of the registered themes, in registration order
    pub fn registered_names(&self) -> Vec<String> {
        self.themes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Arc<ThemeDefinition>) + Send + Sync + 'static,
    {
        let id = self
            .subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(Arc::new(callback));
        tracing::debug!("ThemeRegistry::subscribe - {:?}", id);
        id
    }

    /// Returns `false` if `id` was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self
            .subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(id)
            .is_some();
        tracing::debug!("ThemeRegistry::unsubscribe - {:?} removed={}", id, removed);
        removed
    }

    /// Number of theme switches so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn themes_by_category(&self, category: ThemeCategory) -> Vec<Arc<ThemeDefinition>> {
        crate::catalog::themes_by_category(category)
    }

    pub fn random_theme(&self) -> Arc<ThemeDefinition> {
        crate::catalog::random_theme()
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Swap in `theme`, bump the generation and notify. The caller holds the
    /// writer lock.
    fn switch(&self, _writer: &MutexGuard<'_, ()>, theme: Arc<ThemeDefinition>) {
        {
            let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
            tracing::debug!(
                "ThemeRegistry::switch - from {} to {}",
                current,
                theme
            );
            *current = Arc::clone(&theme);
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.notify(&theme);
    }

    fn notify(&self, theme: &Arc<ThemeDefinition>) {
        let callbacks: Vec<ThemeCallback> = self
            .subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        for callback in callbacks {
            callback(theme);
        }
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(ThemePreset::Light.theme())
    }
}

impl std::fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("current", &self.current_theme().name())
            .field("themes", &self.registered_names())
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}
