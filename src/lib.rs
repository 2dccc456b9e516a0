//! # Floem Breakpoints
//! Width breakpoints for responsive views.
//!
//! A viewport width is classified into a [`ScreenType`] (mobile, tablet or desktop) using a
//! [`BreakpointConfig`]. Values and views can then be picked per screen type, falling back to
//! the next narrower band when a wider one has nothing of its own.
//!
//! ```rust
//! use floem_breakpoints::prelude::*;
//!
//! let scope = BreakpointScope::root();
//! let columns = Responsive::new(1).tablet(2).desktop(4);
//!
//! assert_eq!(scope.classify(900.0), ScreenType::Tablet);
//! assert_eq!(*columns.resolve(scope.classify(1440.0)), 4);
//! ```
//!
//! ## Scopes
//! Breakpoints are not looked up from any global state. A [`BreakpointScope`] is passed to
//! whatever builds a subtree, and a subtree that needs different breakpoints creates a child
//! scope that installs them. See the [`scope`] module.
//!
//! ## Views
//! [`ScreenTypeLayout`] and [`ResponsiveBuilder`] choose what to render, and
//! [`ResponsiveVisibility`] decides whether a view is shown at all. The views themselves are
//! generic, so any view type from the host framework can be used.

mod breakpoints;
mod error;
mod layout;
pub mod scope;
mod screen_type;
mod value;
mod visibility;
mod watch;

pub use breakpoints::{classify, BreakpointConfig};
pub use error::BreakpointError;
pub use layout::{render, ResponsiveBuilder, ScreenTypeLayout};
pub use scope::{width_fn, BreakpointScope, WidthFn, WidthSource};
pub use screen_type::{range, ScreenType, ScreenTypeFlags, ScreenTypes};
pub use value::{select, Responsive};
pub use visibility::{is_visible, ResponsiveVisibility, VisibilityOptions};
pub use watch::ScreenTypeWatcher;

pub mod prelude {
    pub use crate::{
        BreakpointConfig, BreakpointScope, Responsive, ResponsiveBuilder, ResponsiveVisibility,
        ScreenType, ScreenTypeLayout, ScreenTypes, WidthSource,
    };
}
