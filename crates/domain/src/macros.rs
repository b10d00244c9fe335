//! Macro for implementing Display and FromStr for label enums
//!
//! Closed enums that are persisted as text (provider types, for example) use
//! this macro so that storage labels are parsed case-insensitively and
//! always written back in one canonical form.
//!
//! # Example
//!
//! ```rust
//! use workpulse_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Board {
//!     Kanban,
//!     Scrum,
//! }
//!
//! impl_domain_label_conversions!(Board {
//!     Kanban => "kanban",
//!     Scrum => "scrum",
//! });
//!
//! assert_eq!("KANBAN".parse::<Board>().unwrap(), Board::Kanban);
//! assert_eq!(Board::Scrum.to_string(), "scrum");
//! ```

/// Implements Display and FromStr traits for label enums
///
/// Labels must be given in lowercase; parsing lowercases its input before
/// matching. Unknown labels produce a descriptive `String` error naming the
/// enum, which callers wrap in the domain error of their choice.
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}
