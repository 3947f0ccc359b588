//! Macros for ergonomic state and event declarations.

/// Declare a unit enum usable as a state identifier.
///
/// # Example
///
/// ```
/// use rewind::core::State;
/// use rewind::state_enum;
///
/// state_enum! {
///     pub enum Door {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
///
/// assert_eq!(Door::Locked.name(), "Locked");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare a unit enum usable as an event identifier.
///
/// # Example
///
/// ```
/// use rewind::core::Event;
/// use rewind::event_enum;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Push,
///         Pull,
///     }
/// }
///
/// assert_eq!(DoorEvent::Pull.name(), "Pull");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
