//! The contract between a grid and its plugins.
//!
//! A grid owns its plugins and drives them through [`GridPlugin`]: it asks
//! [`GridPlugin::is_enabled`] whether the configuration turns a plugin on,
//! enables or disables it accordingly, and calls
//! [`GridPlugin::on_update_settings`] whenever its settings change.
//!
//! Plugins talk back to the grid through [`GridHost`].

use crate::config::GridSettings;
use crate::header::HeaderSurfaces;
use crate::hooks::HeaderHooks;

/// What a plugin may ask of the grid it is attached to.
pub trait GridHost: Send + Sync {
    /// A snapshot of the grid's current configuration.
    fn settings(&self) -> GridSettings;

    /// The grid's header render hooks.
    fn hooks(&self) -> &HeaderHooks;

    /// Number of configured column header rows.
    fn column_header_levels(&self) -> usize {
        self.settings().column_header_levels
    }

    /// The currently rendered column header surfaces.
    fn header_surfaces(&self) -> HeaderSurfaces;
}

/// Lifecycle state of a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluginState {
    /// Not active. The initial state.
    #[default]
    Disabled,
    /// Active, with hooks registered.
    Enabled,
    /// Torn down. No further transitions.
    Destroyed,
}

/// Generic plugin lifecycle.
pub trait GridPlugin {
    /// Key of the plugin, also the name of its configuration option.
    fn plugin_key(&self) -> &'static str;

    /// Whether the grid configuration asks for this plugin.
    fn is_enabled(&self) -> bool;

    /// Current lifecycle state.
    fn state(&self) -> PluginState;

    /// Activate the plugin. Does nothing when already enabled.
    fn enable_plugin(&mut self);

    /// Deactivate the plugin. Safe to call repeatedly or before enabling.
    fn disable_plugin(&mut self);

    /// Re-read the configuration of an enabled plugin.
    ///
    /// Does nothing unless the plugin is enabled. Stays disabled when the
    /// configuration no longer asks for the plugin.
    fn update_plugin(&mut self) {
        if self.state() != PluginState::Enabled {
            return;
        }
        self.disable_plugin();
        if self.is_enabled() {
            self.enable_plugin();
        }
    }

    /// React to a change of the grid's settings.
    fn on_update_settings(&mut self) {
        match (self.state(), self.is_enabled()) {
            (PluginState::Disabled, true) => self.enable_plugin(),
            (PluginState::Enabled, false) => self.disable_plugin(),
            (PluginState::Enabled, true) => self.update_plugin(),
            (PluginState::Disabled, false) | (PluginState::Destroyed, _) => {}
        }
    }

    /// Tear the plugin down for good.
    fn destroy(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records lifecycle calls; `configured` stands in for the grid config.
    #[derive(Default)]
    struct Recorder {
        configured: bool,
        state: PluginState,
        calls: Vec<&'static str>,
    }

    impl GridPlugin for Recorder {
        fn plugin_key(&self) -> &'static str {
            "recorder"
        }

        fn is_enabled(&self) -> bool {
            self.configured
        }

        fn state(&self) -> PluginState {
            self.state
        }

        fn enable_plugin(&mut self) {
            self.calls.push("enable");
            self.state = PluginState::Enabled;
        }

        fn disable_plugin(&mut self) {
            self.calls.push("disable");
            self.state = PluginState::Disabled;
        }

        fn destroy(&mut self) {
            self.calls.push("destroy");
            self.state = PluginState::Destroyed;
        }
    }

    #[test]
    fn test_update_on_disabled_plugin_does_nothing() {
        let mut plugin = Recorder::default();
        plugin.update_plugin();
        assert_eq!(plugin.state(), PluginState::Disabled);
        assert!(plugin.calls.is_empty());
    }

    #[test]
    fn test_update_reenables_while_configured() {
        let mut plugin = Recorder {
            configured: true,
            state: PluginState::Enabled,
            ..Default::default()
        };
        plugin.update_plugin();
        assert_eq!(plugin.state(), PluginState::Enabled);
        assert_eq!(plugin.calls, vec!["disable", "enable"]);
    }

    #[test]
    fn test_update_stays_disabled_once_unconfigured() {
        let mut plugin = Recorder {
            configured: false,
            state: PluginState::Enabled,
            ..Default::default()
        };
        plugin.update_plugin();
        assert_eq!(plugin.state(), PluginState::Disabled);
        assert_eq!(plugin.calls, vec!["disable"]);
    }

    #[test]
    fn test_update_after_destroy_is_ignored() {
        let mut plugin = Recorder {
            configured: true,
            state: PluginState::Destroyed,
            ..Default::default()
        };
        plugin.update_plugin();
        plugin.on_update_settings();
        assert_eq!(plugin.state(), PluginState::Destroyed);
        assert!(plugin.calls.is_empty());
    }
}
