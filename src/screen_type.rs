use std::fmt;
use std::ops::{BitOr, RangeBounds};

use bitflags::bitflags;

bitflags! {
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
  #[must_use]
  pub struct ScreenTypeFlags: u8 {
    const MOBILE = 1;
    const TABLET = 2;
    const DESKTOP = 4;
  }
}

/// The band a viewport width falls into.
///
/// Ordered from the narrowest band to the widest, so `Mobile < Tablet < Desktop`.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ScreenType {
    Mobile,
    Tablet,
    Desktop,
}

impl ScreenType {
    /// Every screen type, narrowest first.
    pub const ALL: [ScreenType; 3] = [ScreenType::Mobile, ScreenType::Tablet, ScreenType::Desktop];

    pub const fn is_mobile(self) -> bool {
        matches!(self, ScreenType::Mobile)
    }

    pub const fn is_tablet(self) -> bool {
        matches!(self, ScreenType::Tablet)
    }

    pub const fn is_desktop(self) -> bool {
        matches!(self, ScreenType::Desktop)
    }

    const fn flag(self) -> ScreenTypeFlags {
        match self {
            ScreenType::Mobile => ScreenTypeFlags::MOBILE,
            ScreenType::Tablet => ScreenTypeFlags::TABLET,
            ScreenType::Desktop => ScreenTypeFlags::DESKTOP,
        }
    }
}

impl fmt::Display for ScreenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScreenType::Mobile => "mobile",
            ScreenType::Tablet => "tablet",
            ScreenType::Desktop => "desktop",
        })
    }
}

/// Builds the set of every screen type inside `range`.
///
/// ```rust
/// # use floem_breakpoints::{range, ScreenType, ScreenTypes};
/// let narrow = range(..ScreenType::Desktop);
/// assert_eq!(narrow, ScreenTypes::MOBILE | ScreenTypes::TABLET);
/// ```
pub fn range<R: RangeBounds<ScreenType>>(range: R) -> ScreenTypes {
    ScreenType::ALL
        .into_iter()
        .filter(|screen_type| range.contains(screen_type))
        .fold(ScreenTypes::NONE, |set, screen_type| set | screen_type)
}

/// A set of screen types, used to target views at some bands and not others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ScreenTypes {
    flags: ScreenTypeFlags,
}

impl ScreenTypes {
    pub const NONE: ScreenTypes = ScreenTypes::new(ScreenTypeFlags::empty());
    pub const MOBILE: ScreenTypes = ScreenTypes::new(ScreenTypeFlags::MOBILE);
    pub const TABLET: ScreenTypes = ScreenTypes::new(ScreenTypeFlags::TABLET);
    pub const DESKTOP: ScreenTypes = ScreenTypes::new(ScreenTypeFlags::DESKTOP);
    pub const ALL: ScreenTypes = ScreenTypes::new(ScreenTypeFlags::all());

    const fn new(flags: ScreenTypeFlags) -> Self {
        Self { flags }
    }

    pub const fn not(types: ScreenTypes) -> Self {
        let flags = ScreenTypeFlags::all().difference(types.flags);
        Self { flags }
    }

    pub const fn contains(&self, screen_type: ScreenType) -> bool {
        self.flags.contains(screen_type.flag())
    }

    pub const fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// The screen types in this set, narrowest first.
    pub fn iter(&self) -> impl Iterator<Item = ScreenType> + use<> {
        let set = *self;
        ScreenType::ALL
            .into_iter()
            .filter(move |screen_type| set.contains(*screen_type))
    }
}

impl From<ScreenType> for ScreenTypes {
    fn from(screen_type: ScreenType) -> Self {
        Self::new(screen_type.flag())
    }
}

impl BitOr for ScreenTypes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}

impl BitOr<ScreenType> for ScreenTypes {
    type Output = Self;

    fn bitor(self, rhs: ScreenType) -> Self::Output {
        Self::new(self.flags | rhs.flag())
    }
}

impl FromIterator<ScreenType> for ScreenTypes {
    fn from_iter<I: IntoIterator<Item = ScreenType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ScreenTypes::NONE, |set, screen_type| set | screen_type)
    }
}
