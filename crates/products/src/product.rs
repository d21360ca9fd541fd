use serde::{Deserialize, Serialize};

use checkout_core::{Entity, impl_identity_by_id};

/// Product code: unique catalog key. Identical codes designate identical products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Catalog item.
///
/// Equality, hashing and ordering go through [`Entity::id`] (the product code);
/// description and price never take part in identity.
#[derive(Debug, Clone)]
pub struct Product {
    code: ProductCode,
    description: String,
    /// Unit price, non-negative (validated by the loader).
    price: f64,
}

impl Product {
    pub fn new(code: impl Into<ProductCode>, description: impl Into<String>, price: f64) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            price,
        }
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl_identity_by_id!(Product);

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn identity_is_the_code_only() {
        let a = Product::new("1", "Milk", 1.25);
        let b = Product::new("1", "Whole milk", 1.50);
        let c = Product::new("2", "Milk", 1.25);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Product> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn orders_by_code() {
        let set: BTreeSet<Product> = [
            Product::new("b", "Bread", 2.0),
            Product::new("a", "Apple", 0.5),
            Product::new("c", "Cheese", 4.0),
        ]
        .into_iter()
        .collect();

        let codes: Vec<&str> = set.iter().map(|p| p.code().as_str()).collect();
        assert_eq!(codes, vec!["a", "b", "c"]);
    }

    #[test]
    fn displays_description() {
        let p = Product::new("42", "Peanut butter", 3.10);
        assert_eq!(p.to_string(), "Peanut butter");
        assert_eq!(p.code().to_string(), "42");
        assert_eq!(p.price(), 3.10);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: ordering of products agrees with ordering of their codes.
            #[test]
            fn ordering_matches_code_ordering(
                a in "[A-Z0-9]{1,8}",
                b in "[A-Z0-9]{1,8}",
                pa in 0.0f64..1000.0,
                pb in 0.0f64..1000.0,
            ) {
                let pa = Product::new(a.as_str(), "x", pa);
                let pb = Product::new(b.as_str(), "y", pb);
                prop_assert_eq!(pa.cmp(&pb), a.cmp(&b));
                prop_assert_eq!(pa == pb, a == b);
            }
        }
    }
}
