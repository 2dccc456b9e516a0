//! Explicit breakpoint configuration for nested parts of a view tree.
//!
//! A [`BreakpointScope`] is created where a subtree is built and handed by reference to the
//! code that builds its children. Children that install their own breakpoints create a child
//! scope with [`BreakpointScope::child_with`]; everything else uses [`BreakpointScope::child`]
//! and sees whatever the nearest enclosing scope installed, or [`BreakpointConfig::DEFAULT`]
//! when no scope installed anything.
//!
//! ```rust
//! # use floem_breakpoints::{BreakpointConfig, BreakpointScope, ScreenType};
//! let root = BreakpointScope::root();
//! let sidebar = root.child_with(BreakpointConfig::new(300.0, 500.0).unwrap());
//! let item = sidebar.child();
//!
//! assert_eq!(root.classify(400.0), ScreenType::Mobile);
//! assert_eq!(item.classify(400.0), ScreenType::Tablet);
//! ```

use std::cell::Cell;

use crate::{breakpoints::BreakpointConfig, screen_type::ScreenType};

/// Something that can report the current viewport width on demand.
pub trait WidthSource {
    fn width(&self) -> f64;
}

impl WidthSource for f64 {
    fn width(&self) -> f64 {
        *self
    }
}

impl WidthSource for Cell<f64> {
    fn width(&self) -> f64 {
        self.get()
    }
}

impl<T: WidthSource + ?Sized> WidthSource for &T {
    fn width(&self) -> f64 {
        (**self).width()
    }
}

/// A [`WidthSource`] backed by a closure. See [`width_fn`].
#[derive(Clone, Copy)]
pub struct WidthFn<F>(F);

/// Reads the width by calling `f` every time it is needed.
pub fn width_fn<F>(f: F) -> WidthFn<F>
where
    F: Fn() -> f64,
{
    WidthFn(f)
}

impl<F> WidthSource for WidthFn<F>
where
    F: Fn() -> f64,
{
    fn width(&self) -> f64 {
        (self.0)()
    }
}

/// A link in the chain of enclosing breakpoint configurations.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreakpointScope<'a> {
    parent: Option<&'a BreakpointScope<'a>>,
    config: Option<BreakpointConfig>,
}

impl<'a> BreakpointScope<'a> {
    /// A scope with no breakpoints of its own.
    pub fn root() -> Self {
        Self::default()
    }

    /// A root scope that installs `config` for everything below it.
    pub fn with_config(config: BreakpointConfig) -> Self {
        Self {
            parent: None,
            config: Some(config),
        }
    }

    pub fn child(&'a self) -> BreakpointScope<'a> {
        BreakpointScope {
            parent: Some(self),
            config: None,
        }
    }

    pub fn child_with(&'a self, config: BreakpointConfig) -> BreakpointScope<'a> {
        BreakpointScope {
            parent: Some(self),
            config: Some(config),
        }
    }

    /// The breakpoints installed by this scope or its nearest ancestor that installs any.
    pub fn config(&self) -> BreakpointConfig {
        self.ancestors()
            .find_map(|scope| scope.config)
            .unwrap_or_default()
    }

    /// Whether this scope installs breakpoints itself rather than inheriting them.
    pub fn overrides(&self) -> bool {
        self.config.is_some()
    }

    /// Number of scopes above this one.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    pub fn classify(&self, width: f64) -> ScreenType {
        self.config().classify(width)
    }

    pub fn screen_type(&self, source: &impl WidthSource) -> ScreenType {
        self.classify(source.width())
    }

    fn ancestors(&self) -> impl Iterator<Item = &BreakpointScope<'a>> {
        std::iter::successors(Some(self), |scope| scope.parent)
    }
}
