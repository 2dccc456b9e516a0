use crate::{breakpoints::BreakpointConfig, screen_type::ScreenType};

/// Re-classifies the window width on every resize and reports band changes.
///
/// Hosts call [`update`](ScreenTypeWatcher::update) from their resize handler and only restyle
/// when it returns a new screen type.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreenTypeWatcher {
    config: BreakpointConfig,
    current: Option<ScreenType>,
}

impl ScreenTypeWatcher {
    pub fn new(config: BreakpointConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn config(&self) -> BreakpointConfig {
        self.config
    }

    /// Replaces the breakpoints. The next update reports its screen type even if unchanged.
    pub fn set_config(&mut self, config: BreakpointConfig) {
        self.config = config;
        self.current = None;
    }

    /// The screen type seen by the last update, if any.
    pub fn current(&self) -> Option<ScreenType> {
        self.current
    }

    pub fn update(&mut self, width: f64) -> Option<ScreenType> {
        let screen_type = self.config.classify(width);
        if self.current == Some(screen_type) {
            return None;
        }

        tracing::trace!(
            width,
            from = ?self.current,
            to = %screen_type,
            "screen type changed"
        );
        self.current = Some(screen_type);
        Some(screen_type)
    }
}
