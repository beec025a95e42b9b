//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a category slug where a product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Product identifier: a slug for catalog data, a global id for remote products.
    ProductId
);
define_id!(
    /// Category (collection) identifier.
    CategoryId
);
define_id!(
    /// Order number handed back by the checkout collaborator.
    OrderNumber
);

impl ProductId {
    /// Derive a product id from a display name.
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name))
    }
}

/// Turn a display name into a URL-friendly slug.
///
/// ```
/// use pantry_commerce::ids::slugify;
/// assert_eq!(slugify("Shrimp Paste (Bagoong) 250g"), "shrimp-paste-bagoong-250g");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else if c != '\'' {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("premium-corned-beef");
        assert_eq!(id.as_str(), "premium-corned-beef");
    }

    #[test]
    fn test_id_from_string() {
        let id: CategoryId = "canned-goods".into();
        assert_eq!(id.as_str(), "canned-goods");
        assert_eq!(format!("{}", id), "canned-goods");
    }

    #[test]
    fn test_id_from_name() {
        assert_eq!(
            ProductId::from_name("Premium Corned Beef"),
            ProductId::new("premium-corned-beef")
        );
        assert_eq!(
            ProductId::from_name("Sago't Gulaman Mix 500g").as_str(),
            "sagot-gulaman-mix-500g"
        );
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Instant Pancit Canton - 10 Pack "), "instant-pancit-canton-10-pack");
        assert_eq!(slugify("Snacks & Chips"), "snacks-chips");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = ProductId::new("chips");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"chips\"");
    }
}
