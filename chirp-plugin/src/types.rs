use std::borrow::Cow;
use std::fmt;

/// Declares a newtype wrapper for a piece of plugin metadata.
macro_rules! metadata_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Eq, PartialEq, Hash)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            /// Creates a new instance from a static string in a const context.
            #[must_use]
            pub const fn from_static(value: &'static str) -> Self {
                Self(Cow::Borrowed(value))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

metadata_type!(Name, "Name of a plugin");
metadata_type!(Author, "Author of a plugin");
metadata_type!(Version, "Version of a plugin");
