//! Macros for defining the closed enumerations behind filter dimensions
//!
//! These generate the repetitive wire-value, display-label, and rank-table
//! plumbing each categorical enumeration needs.

/// Define a categorical enumeration with wire values, display labels, and an
/// explicit rank table.
///
/// The rank is each member's sort position and is part of the page contract:
/// priority sorts critical first, ticket status sorts in board order — not
/// alphabetically and not by serialization value.
///
/// # Example
///
/// ```rust,ignore
/// dimension_enum! {
///     /// Ticket urgency
///     TicketPriority {
///         Critical => ("critical", "Critical", 0),
///         High => ("high", "High", 1),
///         Medium => ("medium", "Medium", 2),
///         Low => ("low", "Low", 3),
///     }
/// }
/// ```
#[macro_export]
macro_rules! dimension_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($value:literal, $label:literal, $rank:literal) ),+ $(,)?
        }
    ) => {
        $crate::dimension_enum! {
            @base
            $(#[$meta])*
            $name {
                $( $variant => ($value, $label) ),+
            }
        }

        impl $name {
            /// Explicit sort rank; lower sorts first ascending
            pub fn rank(&self) -> u8 {
                match self {
                    $( $name::$variant => $rank ),+
                }
            }
        }
    };

    // Unranked enumerations (pure partitioning, never rank-sorted)
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($value:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $crate::dimension_enum! {
            @base
            $(#[$meta])*
            $name {
                $( $variant => ($value, $label) ),+
            }
        }
    };

    (
        @base
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($value:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            /// Every member, in chip/tab display order
            pub const VALUES: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Wire values of every member, same order as [`Self::VALUES`]
            pub const STRS: &'static [&'static str] = &[ $( $value ),+ ];

            /// Wire value (the serialized snake_case form)
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            /// Display label shown on badges and chips
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
