//! Writes reader settings back to the settings store.
//!
//! Font size and line spacing are usually dragged through several values in
//! a row, so those writes wait for a quiet period. Theme, alignment, font
//! family and page-turn style are written at once, taking any pending
//! change with them.

use crate::settings::ReaderSettings;
use crate::store::SettingsStore;
use chrono::{DateTime, Duration, Utc};
use smartbook_core::SmartBookResult;
use std::sync::Arc;

pub struct SettingsSync {
    store: Arc<dyn SettingsStore>,
    debounce: Duration,
    current: ReaderSettings,
    pending_since: Option<DateTime<Utc>>,
}

fn is_immediate_change(old: &ReaderSettings, new: &ReaderSettings) -> bool {
    old.background_theme != new.background_theme
        || old.text_alignment != new.text_alignment
        || old.font_family != new.font_family
        || old.page_turn_style != new.page_turn_style
}

impl SettingsSync {
    /// Loads the current settings from `store`.
    pub fn load(store: Arc<dyn SettingsStore>, debounce_ms: u64) -> SmartBookResult<Self> {
        let current = store.load()?.normalized();
        Ok(Self {
            store,
            debounce: Duration::milliseconds(i64::try_from(debounce_ms).unwrap_or(i64::MAX)),
            current,
            pending_since: None,
        })
    }

    pub fn current(&self) -> &ReaderSettings {
        &self.current
    }

    pub fn has_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Records new settings. Returns `true` if they were written right away.
    pub fn update(&mut self, settings: ReaderSettings, now: DateTime<Utc>) -> SmartBookResult<bool> {
        if settings == self.current {
            return Ok(false);
        }
        let immediate = is_immediate_change(&self.current, &settings);
        self.current = settings;
        // Stays pending until a write succeeds, so flush and tick can retry.
        self.pending_since = Some(now);

        if immediate {
            self.write()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Writes a pending change once the debounce window has elapsed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> SmartBookResult<bool> {
        match self.pending_since {
            Some(since) if now - since >= self.debounce => {
                self.write()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Writes any pending change regardless of the debounce window.
    pub fn flush(&mut self) -> SmartBookResult<bool> {
        if self.pending_since.is_none() {
            return Ok(false);
        }
        self.write()?;
        Ok(true)
    }

    fn write(&mut self) -> SmartBookResult<()> {
        self.store.save(&self.current)?;
        self.pending_since = None;
        tracing::debug!("Saved reader settings: {:?}", self.current);
        Ok(())
    }
}
