#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        #[repr(transparent)] // Same layout as u32
        pub struct $name(pub u32);

        impl $name {
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(TokenId, "Identifier of one character token within a single segmentation run.");
define_id!(GroupId, "Identifier of a maskable span. Always equal to the id of the span's first token.");
define_id!(Generation, "Tag of one segmentation rebuild. Strictly increasing per engine.");

impl GroupId {
    /// The group opened by `token`.
    pub const fn led_by(token: TokenId) -> Self {
        Self(token.0)
    }
}

impl Generation {
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
