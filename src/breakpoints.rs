use crate::{error::BreakpointError, screen_type::ScreenType};

/// Width breakpoints in logical pixels.
///
/// A width up to and including `mobile_max` is [`ScreenType::Mobile`], a width up to and
/// including `tablet_max` is [`ScreenType::Tablet`], anything wider is [`ScreenType::Desktop`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBreakpointConfig")
)]
pub struct BreakpointConfig {
    mobile_max: f64,
    tablet_max: f64,
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BreakpointConfig {
    /// Used wherever no enclosing scope installs its own breakpoints.
    pub const DEFAULT: BreakpointConfig = BreakpointConfig {
        mobile_max: 649.0,
        tablet_max: 1099.0,
    };

    /// Creates a config, rejecting bounds that are not finite or not strictly increasing.
    pub fn new(mobile_max: f64, tablet_max: f64) -> Result<Self, BreakpointError> {
        if !mobile_max.is_finite() || !tablet_max.is_finite() || mobile_max >= tablet_max {
            tracing::debug!(mobile_max, tablet_max, "rejected breakpoint configuration");
            return Err(BreakpointError::InvalidConfiguration {
                mobile_max,
                tablet_max,
            });
        }

        Ok(Self {
            mobile_max,
            tablet_max,
        })
    }

    pub fn mobile_max(&self) -> f64 {
        self.mobile_max
    }

    pub fn tablet_max(&self) -> f64 {
        self.tablet_max
    }

    pub fn classify(&self, width: f64) -> ScreenType {
        // NaN fails every comparison, so it is kept in the narrowest band.
        if width.is_nan() || (..=self.mobile_max).contains(&width) {
            return ScreenType::Mobile;
        }
        if (..=self.tablet_max).contains(&width) {
            return ScreenType::Tablet;
        }
        ScreenType::Desktop
    }
}

/// Classifies `width` against `config`.
pub fn classify(width: f64, config: &BreakpointConfig) -> ScreenType {
    config.classify(width)
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBreakpointConfig {
    #[serde(default = "default_mobile_max")]
    mobile_max: f64,
    #[serde(default = "default_tablet_max")]
    tablet_max: f64,
}

#[cfg(feature = "serde")]
fn default_mobile_max() -> f64 {
    BreakpointConfig::DEFAULT.mobile_max
}

#[cfg(feature = "serde")]
fn default_tablet_max() -> f64 {
    BreakpointConfig::DEFAULT.tablet_max
}

#[cfg(feature = "serde")]
impl TryFrom<RawBreakpointConfig> for BreakpointConfig {
    type Error = BreakpointError;

    fn try_from(raw: RawBreakpointConfig) -> Result<Self, Self::Error> {
        BreakpointConfig::new(raw.mobile_max, raw.tablet_max)
    }
}
