use thiserror::Error;

/// Errors raised while setting up breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BreakpointError {
    /// The bounds are unordered or not finite.
    #[error(
        "invalid breakpoint configuration: mobile max {mobile_max} must be less than tablet max {tablet_max}"
    )]
    InvalidConfiguration { mobile_max: f64, tablet_max: f64 },
}
