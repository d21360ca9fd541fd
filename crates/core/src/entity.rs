//! Entity trait: identity that outlives attribute values.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity iff their identifiers are equal, regardless
/// of any other attribute. Implementors derive `PartialEq`, `Eq`, `Hash` and
/// `Ord` from `id()` by hand instead of deriving them structurally, and keep the
/// identifying field private so it cannot change after construction.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Implements `PartialEq`, `Eq`, `Hash`, `PartialOrd` and `Ord` for an entity
/// in terms of its [`Entity::id`].
#[macro_export]
macro_rules! impl_identity_by_id {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::id(self) == $crate::Entity::id(other)
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash($crate::Entity::id(self), state);
            }
        }

        impl PartialOrd for $t {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $t {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                $crate::Entity::id(self).cmp($crate::Entity::id(other))
            }
        }
    };
}
