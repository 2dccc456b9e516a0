use crate::{
    scope::{BreakpointScope, WidthSource},
    screen_type::ScreenType,
    value::{select, Responsive},
};

/// Picks the view to render for `screen_type`, with the same fallbacks as [`select`].
pub fn render<V>(screen_type: ScreenType, mobile: V, tablet: Option<V>, desktop: Option<V>) -> V {
    select(screen_type, mobile, tablet, desktop)
}

/// Holds a different view per screen type and renders whichever one applies.
///
/// ```rust
/// # use floem_breakpoints::{BreakpointScope, ScreenTypeLayout};
/// let layout = ScreenTypeLayout::new("single column").desktop("sidebar and content");
/// let scope = BreakpointScope::root();
///
/// assert_eq!(*layout.render_in(&scope, &480.0_f64), "single column");
/// assert_eq!(*layout.render_in(&scope, &1280.0_f64), "sidebar and content");
/// ```
#[derive(Clone, Debug)]
pub struct ScreenTypeLayout<V> {
    views: Responsive<V>,
}

impl<V> ScreenTypeLayout<V> {
    pub fn new(mobile: V) -> Self {
        Self {
            views: Responsive::new(mobile),
        }
    }

    pub fn tablet(mut self, tablet: V) -> Self {
        self.views = self.views.tablet(tablet);
        self
    }

    pub fn desktop(mut self, desktop: V) -> Self {
        self.views = self.views.desktop(desktop);
        self
    }

    pub fn render(&self, screen_type: ScreenType) -> &V {
        self.views.resolve(screen_type)
    }

    pub fn render_in(&self, scope: &BreakpointScope<'_>, width: &impl WidthSource) -> &V {
        self.render(scope.screen_type(width))
    }

    pub fn into_view(self, screen_type: ScreenType) -> V {
        self.views.into_resolved(screen_type)
    }
}

impl<V> From<Responsive<V>> for ScreenTypeLayout<V> {
    fn from(views: Responsive<V>) -> Self {
        Self { views }
    }
}

/// Builds a view from the current screen type on every call.
pub struct ResponsiveBuilder<F> {
    builder: F,
}

impl<F, V> ResponsiveBuilder<F>
where
    F: Fn(ScreenType) -> V,
{
    pub fn new(builder: F) -> Self {
        Self { builder }
    }

    pub fn build(&self, screen_type: ScreenType) -> V {
        (self.builder)(screen_type)
    }

    pub fn build_in(&self, scope: &BreakpointScope<'_>, width: &impl WidthSource) -> V {
        let screen_type = scope.screen_type(width);
        tracing::trace!(%screen_type, "building responsive view");
        self.build(screen_type)
    }
}
