use crate::{
    scope::{BreakpointScope, WidthSource},
    screen_type::{ScreenType, ScreenTypes},
};

/// Whether a view targeted at `targets` should be shown on `screen_type`.
pub fn is_visible(screen_type: ScreenType, targets: ScreenTypes) -> bool {
    targets.contains(screen_type)
}

/// What the host should keep alive for a view while it is hidden.
///
/// These flags are handed through untouched; it is up to the renderer to honor them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VisibilityOptions {
    pub maintain_size: bool,
    pub maintain_state: bool,
    pub maintain_animation: bool,
    pub maintain_interactivity: bool,
}

impl VisibilityOptions {
    pub fn maintain_size(mut self, maintain_size: bool) -> Self {
        self.maintain_size = maintain_size;
        self
    }

    pub fn maintain_state(mut self, maintain_state: bool) -> Self {
        self.maintain_state = maintain_state;
        self
    }

    pub fn maintain_animation(mut self, maintain_animation: bool) -> Self {
        self.maintain_animation = maintain_animation;
        self
    }

    pub fn maintain_interactivity(mut self, maintain_interactivity: bool) -> Self {
        self.maintain_interactivity = maintain_interactivity;
        self
    }
}

/// A view that is only shown on some screen types.
///
/// ```rust
/// # use floem_breakpoints::{ResponsiveVisibility, ScreenType, ScreenTypes};
/// let sidebar = ResponsiveVisibility::hidden_on(ScreenTypes::MOBILE, "sidebar");
/// assert!(!sidebar.is_visible(ScreenType::Mobile));
/// assert_eq!(sidebar.resolve(ScreenType::Desktop), Some(&"sidebar"));
/// ```
#[derive(Clone, Debug)]
pub struct ResponsiveVisibility<V> {
    targets: ScreenTypes,
    child: V,
    replacement: Option<V>,
    options: VisibilityOptions,
}

impl<V> ResponsiveVisibility<V> {
    /// Shows `child` on the screen types in `targets` and hides it everywhere else.
    pub fn visible_on(targets: impl Into<ScreenTypes>, child: V) -> Self {
        Self {
            targets: targets.into(),
            child,
            replacement: None,
            options: VisibilityOptions::default(),
        }
    }

    /// Hides `child` on the screen types in `targets` and shows it everywhere else.
    pub fn hidden_on(targets: impl Into<ScreenTypes>, child: V) -> Self {
        Self::visible_on(ScreenTypes::not(targets.into()), child)
    }

    /// Shown in place of the child while it is hidden.
    pub fn replacement(mut self, replacement: V) -> Self {
        self.replacement = Some(replacement);
        self
    }

    pub fn options(mut self, options: VisibilityOptions) -> Self {
        self.options = options;
        self
    }

    pub fn visibility_options(&self) -> VisibilityOptions {
        self.options
    }

    pub fn targets(&self) -> ScreenTypes {
        self.targets
    }

    pub fn is_visible(&self, screen_type: ScreenType) -> bool {
        is_visible(screen_type, self.targets)
    }

    pub fn is_visible_in(&self, scope: &BreakpointScope<'_>, width: &impl WidthSource) -> bool {
        self.is_visible(scope.screen_type(width))
    }

    /// The child when it is visible, otherwise the replacement if there is one.
    pub fn resolve(&self, screen_type: ScreenType) -> Option<&V> {
        if self.is_visible(screen_type) {
            Some(&self.child)
        } else {
            self.replacement.as_ref()
        }
    }

    pub fn resolve_in(&self, scope: &BreakpointScope<'_>, width: &impl WidthSource) -> Option<&V> {
        self.resolve(scope.screen_type(width))
    }
}

#[cfg(test)]
mod tests {
    use super::{is_visible, ResponsiveVisibility, VisibilityOptions};
    use crate::{
        scope::BreakpointScope,
        screen_type::{range, ScreenType, ScreenTypes},
    };

    #[test]
    fn membership() {
        let targets = ScreenTypes::TABLET | ScreenTypes::DESKTOP;
        assert!(!is_visible(ScreenType::Mobile, targets));
        assert!(is_visible(ScreenType::Tablet, targets));
        assert!(is_visible(ScreenType::Desktop, targets));
        assert!(!is_visible(ScreenType::Desktop, ScreenTypes::NONE));
    }

    #[test]
    fn hidden_on_desktop() {
        let banner = ResponsiveVisibility::hidden_on(ScreenType::Desktop, "banner");
        assert!(banner.is_visible(ScreenType::Mobile));
        assert!(banner.is_visible(ScreenType::Tablet));
        assert!(!banner.is_visible(ScreenType::Desktop));
        assert_eq!(banner.resolve(ScreenType::Desktop), None);
    }

    #[test]
    fn replacement_shown_while_hidden() {
        let menu = ResponsiveVisibility::visible_on(range(ScreenType::Tablet..), "full menu")
            .replacement("hamburger");
        assert_eq!(menu.resolve(ScreenType::Mobile), Some(&"hamburger"));
        assert_eq!(menu.resolve(ScreenType::Tablet), Some(&"full menu"));
    }

    #[test]
    fn follows_width() {
        let scope = BreakpointScope::root();
        let panel = ResponsiveVisibility::visible_on(ScreenTypes::DESKTOP, ());
        assert!(!panel.is_visible_in(&scope, &1099.0_f64));
        assert!(panel.is_visible_in(&scope, &1100.0_f64));
        assert_eq!(panel.resolve_in(&scope, &1100.0_f64), Some(&()));
    }

    #[test]
    fn options_pass_through() {
        let options = VisibilityOptions::default()
            .maintain_state(true)
            .maintain_size(true);
        let view = ResponsiveVisibility::visible_on(ScreenTypes::MOBILE, 0).options(options);
        assert_eq!(view.visibility_options(), options);
        assert!(view.visibility_options().maintain_size);
        assert!(!view.visibility_options().maintain_animation);
        assert_eq!(view.targets(), ScreenTypes::MOBILE);
    }
}
