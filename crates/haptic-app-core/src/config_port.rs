// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Prefs-facing config port.

use crate::config::{ConfigError, ConfigService, ConfigStore};
use crate::prefs::{HapticPrefs, PREFS_KEY};

/// Port for reading haptic preferences.
pub trait ConfigPort {
    /// Stored preferences, `None` when the user has not written any.
    fn load_prefs(&self) -> Result<Option<HapticPrefs>, ConfigError>;
}

impl<S> ConfigPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_prefs(&self) -> Result<Option<HapticPrefs>, ConfigError> {
        self.load(PREFS_KEY)
    }
}
