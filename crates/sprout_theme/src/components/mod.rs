//! Component tokens
//!
//! One struct per component family. Defaults are pure functions of the
//! global [`Token`] (plus the dark flag for a few families); every field can
//! be read and overridden by name through [`ComponentTokens`].
//!
//! Resolvers only produce defaults. Keeping overrides across regeneration is
//! the job of [`ComponentOverrides`] and the store.
//!
//! # Example
//!
//! ```
//! use sprout_theme::components::{ButtonToken, ComponentTokens, TokenValue};
//! use sprout_theme::tokens::{SeedToken, Token};
//!
//! let token = Token::derive(&SeedToken::default(), false);
//! let mut button = ButtonToken::resolve(&token, false);
//! button.set_field("icon_gap", TokenValue::Number(10.0)).unwrap();
//! assert_eq!(button.icon_gap, 10.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OverrideError;
use crate::tokens::Token;

mod overrides;
mod value;

pub use overrides::ComponentOverrides;
pub use value::{TokenField, TokenValue, ValueKind};

/// Behavior shared by every component token struct
pub trait ComponentTokens: Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    const FAMILY: ComponentFamily;

    /// Default values for this family
    fn resolve(token: &Token, is_dark: bool) -> Self;

    fn field_names() -> &'static [&'static str];

    /// Kind of the named field
    fn field_kind(name: &str) -> Option<ValueKind>;

    fn field(&self, name: &str) -> Option<TokenValue>;

    /// Overwrite a field by name. Values are not range-checked.
    fn set_field(&mut self, name: &str, value: TokenValue) -> Result<(), OverrideError>;

    /// This family's entry in the aggregate
    fn slot(components: &ComponentToken) -> &Self;

    fn slot_mut(components: &mut ComponentToken) -> &mut Self;
}

/// Declares a component token struct and its [`ComponentTokens`] impl.
///
/// ```ignore
/// component_tokens! {
///     pub struct EmptyToken for Empty in empty {
///         pub image_height: f32,
///     }
///
///     fn resolve(token, is_dark) {
///         Self { image_height: 100.0 }
///     }
/// }
/// ```
macro_rules! component_tokens {
    (
        $(#[$meta:meta])*
        pub struct $name:ident for $family:ident in $slot:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }

        fn resolve($token:ident, $is_dark:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl $crate::components::ComponentTokens for $name {
            const FAMILY: $crate::components::ComponentFamily =
                $crate::components::ComponentFamily::$family;

            fn resolve($token: &$crate::tokens::Token, $is_dark: bool) -> Self {
                let _ = (&$token, $is_dark);
                $body
            }

            fn field_names() -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }

            fn field_kind(name: &str) -> Option<$crate::components::ValueKind> {
                match name {
                    $(
                        stringify!($field) => {
                            Some(<$ty as $crate::components::TokenField>::KIND)
                        }
                    )*
                    _ => None,
                }
            }

            fn field(&self, name: &str) -> Option<$crate::components::TokenValue> {
                match name {
                    $(
                        stringify!($field) => {
                            Some($crate::components::TokenField::to_value(&self.$field))
                        }
                    )*
                    _ => None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: $crate::components::TokenValue,
            ) -> Result<(), $crate::error::OverrideError> {
                let _ = &value;
                match name {
                    $(
                        stringify!($field) => {
                            match <$ty as $crate::components::TokenField>::from_value(&value) {
                                Some(v) => {
                                    self.$field = v;
                                    Ok(())
                                }
                                None => Err($crate::error::OverrideError::KindMismatch {
                                    family: Self::FAMILY,
                                    field: name.to_string(),
                                    expected: <$ty as $crate::components::TokenField>::KIND,
                                    found: value.kind(),
                                }),
                            }
                        }
                    )*
                    _ => Err($crate::error::OverrideError::UnknownField {
                        family: Self::FAMILY,
                        field: name.to_string(),
                    }),
                }
            }

            fn slot(components: &$crate::components::ComponentToken) -> &Self {
                &components.$slot
            }

            fn slot_mut(components: &mut $crate::components::ComponentToken) -> &mut Self {
                &mut components.$slot
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as $crate::components::ComponentTokens>::resolve(
                    &$crate::tokens::Token::default(),
                    false,
                )
            }
        }
    };
}

mod data_display;
mod data_entry;
mod feedback;
mod general;

pub use data_display::*;
pub use data_entry::*;
pub use feedback::*;
pub use general::*;

/// Declares [`ComponentFamily`] and the [`ComponentToken`] aggregate
macro_rules! component_families {
    ($($family:ident => $slot:ident : $ty:ident),* $(,)?) => {
        /// Every component family with its own token struct
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(rename_all = "lowercase")]
        pub enum ComponentFamily {
            $($family,)*
        }

        impl ComponentFamily {
            /// Full family list.
            pub fn all() -> &'static [ComponentFamily] {
                &[$(ComponentFamily::$family),*]
            }

            /// Stable lowercase name, also the aggregate field name.
            pub fn name(self) -> &'static str {
                match self {
                    $(ComponentFamily::$family => stringify!($slot),)*
                }
            }

            pub fn field_names(self) -> &'static [&'static str] {
                match self {
                    $(ComponentFamily::$family => <$ty as ComponentTokens>::field_names(),)*
                }
            }

            pub fn field_kind(self, name: &str) -> Option<ValueKind> {
                match self {
                    $(ComponentFamily::$family => <$ty as ComponentTokens>::field_kind(name),)*
                }
            }

            /// Check that `value` could be written to `name` without
            /// resolving any tokens
            pub fn check_field(self, name: &str, value: &TokenValue) -> Result<(), OverrideError> {
                let expected = self.field_kind(name).ok_or_else(|| OverrideError::UnknownField {
                    family: self,
                    field: name.to_string(),
                })?;
                if expected.accepts(value) {
                    Ok(())
                } else {
                    Err(OverrideError::KindMismatch {
                        family: self,
                        field: name.to_string(),
                        expected,
                        found: value.kind(),
                    })
                }
            }
        }

        /// One resolved token struct per family
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        pub struct ComponentToken {
            $(pub $slot: $ty,)*
        }

        impl ComponentToken {
            /// Resolve every family's defaults
            pub fn resolve(token: &Token, is_dark: bool) -> Self {
                Self {
                    $($slot: <$ty as ComponentTokens>::resolve(token, is_dark),)*
                }
            }

            /// Read a field by family and name
            pub fn field(&self, family: ComponentFamily, name: &str) -> Option<TokenValue> {
                match family {
                    $(ComponentFamily::$family => self.$slot.field(name),)*
                }
            }

            /// Overwrite a field by family and name
            pub fn set_field(
                &mut self,
                family: ComponentFamily,
                name: &str,
                value: TokenValue,
            ) -> Result<(), OverrideError> {
                match family {
                    $(ComponentFamily::$family => self.$slot.set_field(name, value),)*
                }
            }

            /// Replace one family with its freshly resolved defaults
            pub fn reset_family(&mut self, family: ComponentFamily, token: &Token, is_dark: bool) {
                match family {
                    $(ComponentFamily::$family => {
                        self.$slot = <$ty as ComponentTokens>::resolve(token, is_dark);
                    })*
                }
            }
        }
    };
}

component_families! {
    Alert => alert: AlertToken,
    Avatar => avatar: AvatarToken,
    Badge => badge: BadgeToken,
    Button => button: ButtonToken,
    Checkbox => checkbox: CheckboxToken,
    Divider => divider: DividerToken,
    Empty => empty: EmptyToken,
    Popover => popover: PopoverToken,
    Progress => progress: ProgressToken,
    Radio => radio: RadioToken,
    Rate => rate: RateToken,
    Result => result: ResultToken,
    Skeleton => skeleton: SkeletonToken,
    Slider => slider: SliderToken,
    Space => space: SpaceToken,
    Spin => spin: SpinToken,
    Statistic => statistic: StatisticToken,
    Switch => switch: SwitchToken,
    Tag => tag: TagToken,
    Timeline => timeline: TimelineToken,
    Tooltip => tooltip: TooltipToken,
}

impl ComponentFamily {
    /// Look a family up by name, case-insensitively.
    ///
    /// Unknown names give `None`; callers fall back to the family defaults.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|family| family.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ComponentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ComponentToken {
    /// Typed access to one family
    pub fn get<T: ComponentTokens>(&self) -> &T {
        T::slot(self)
    }

    pub fn get_mut<T: ComponentTokens>(&mut self) -> &mut T {
        T::slot_mut(self)
    }

    /// Read a field by family name. Unknown families or fields give `None`.
    pub fn field_by_name(&self, family: &str, name: &str) -> Option<TokenValue> {
        ComponentFamily::from_name(family).and_then(|family| self.field(family, name))
    }
}

impl Default for ComponentToken {
    fn default() -> Self {
        Self::resolve(&Token::default(), false)
    }
}
