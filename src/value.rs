use crate::{breakpoints::BreakpointConfig, screen_type::ScreenType};

/// Picks the value for `screen_type`.
///
/// A missing `desktop` falls back to `tablet`, and a missing `tablet` falls back to `mobile`.
pub fn select<T>(screen_type: ScreenType, mobile: T, tablet: Option<T>, desktop: Option<T>) -> T {
    match screen_type {
        ScreenType::Mobile => mobile,
        ScreenType::Tablet => tablet.unwrap_or(mobile),
        ScreenType::Desktop => desktop.or(tablet).unwrap_or(mobile),
    }
}

/// One value per screen type, with `mobile` always present.
///
/// ```rust
/// # use floem_breakpoints::{Responsive, ScreenType};
/// let columns = Responsive::new(1).desktop(4);
/// assert_eq!(*columns.resolve(ScreenType::Tablet), 1);
/// assert_eq!(*columns.resolve(ScreenType::Desktop), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Responsive<T> {
    mobile: T,
    tablet: Option<T>,
    desktop: Option<T>,
}

impl<T> Responsive<T> {
    pub fn new(mobile: T) -> Self {
        Self {
            mobile,
            tablet: None,
            desktop: None,
        }
    }

    pub fn tablet(mut self, tablet: T) -> Self {
        self.tablet = Some(tablet);
        self
    }

    pub fn desktop(mut self, desktop: T) -> Self {
        self.desktop = Some(desktop);
        self
    }

    pub fn resolve(&self, screen_type: ScreenType) -> &T {
        select(
            screen_type,
            &self.mobile,
            self.tablet.as_ref(),
            self.desktop.as_ref(),
        )
    }

    pub fn resolve_width(&self, width: f64, config: &BreakpointConfig) -> &T {
        self.resolve(config.classify(width))
    }

    pub fn into_resolved(self, screen_type: ScreenType) -> T {
        select(screen_type, self.mobile, self.tablet, self.desktop)
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Responsive<U> {
        Responsive {
            mobile: f(self.mobile),
            tablet: self.tablet.map(&mut f),
            desktop: self.desktop.map(&mut f),
        }
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(mobile: T) -> Self {
        Self::new(mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::{select, Responsive};
    use crate::{breakpoints::BreakpointConfig, screen_type::ScreenType};

    #[test]
    fn mobile_ignores_overrides() {
        assert_eq!(select(ScreenType::Mobile, "m", Some("t"), Some("d")), "m");
        assert_eq!(select(ScreenType::Mobile, "m", None, None), "m");
    }

    #[test]
    fn tablet_falls_back_to_mobile() {
        assert_eq!(select(ScreenType::Tablet, "m", None, Some("d")), "m");
        assert_eq!(select(ScreenType::Tablet, "m", Some("t"), Some("d")), "t");
    }

    #[test]
    fn desktop_falls_back_through_tablet() {
        assert_eq!(select(ScreenType::Desktop, "m", Some("t"), None), "t");
        assert_eq!(select(ScreenType::Desktop, "m", None, None), "m");
        assert_eq!(select(ScreenType::Desktop, "m", Some("t"), Some("d")), "d");
    }

    #[test]
    fn responsive_matches_select() {
        let value = Responsive::new(12.0).tablet(16.0);
        for screen_type in ScreenType::ALL {
            assert_eq!(
                *value.resolve(screen_type),
                select(screen_type, 12.0, Some(16.0), None)
            );
        }
        assert_eq!(value.into_resolved(ScreenType::Desktop), 16.0);
    }

    #[test]
    fn resolve_by_width() {
        let padding = Responsive::new(8).tablet(16).desktop(32);
        let config = BreakpointConfig::default();
        assert_eq!(*padding.resolve_width(375.0, &config), 8);
        assert_eq!(*padding.resolve_width(1024.0, &config), 16);
        assert_eq!(*padding.resolve_width(1920.0, &config), 32);
    }

    #[test]
    fn map_keeps_missing_overrides_missing() {
        let labels = Responsive::new(1).desktop(3).map(|n| format!("{n} col"));
        assert_eq!(labels.resolve(ScreenType::Tablet), "1 col");
        assert_eq!(labels.resolve(ScreenType::Desktop), "3 col");
    }
}
