//! Domain Layer - Core Entity Trait
//!
//! Basic contract for all domain entities: a unique, hashable identifier.

use std::collections::HashSet;
use std::hash::Hash;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// First identifier that appears more than once, if any
pub fn first_duplicate_id<'a, E, I>(entities: I) -> Option<E::Id>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen = HashSet::new();
    for entity in entities {
        let id = entity.id();
        if !seen.insert(id.clone()) {
            return Some(id);
        }
    }
    None
}
