// Interned categorical identifiers (teams, venues, players, seasons, ...).

use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A categorical label read from the source tables.
///
/// Cloning is a reference-count bump. Equality, ordering and hashing are by
/// content, so two `Name`s built from the same text compare equal whether or
/// not they were interned together.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(Arc<str>);

impl Name {
    pub fn new(text: &str) -> Self {
        Name(Arc::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Deduplicating pool used while loading, so every occurrence of the same
/// team or player string shares one allocation.
#[derive(Debug, Default)]
pub struct Interner {
    pool: HashSet<Name>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(existing) = self.pool.get(text) {
            return existing.clone();
        }
        let name = Name::new(text);
        self.pool.insert(name.clone());
        name
    }

    /// Number of distinct strings seen so far.
    pub fn distinct_count(&self) -> usize {
        self.pool.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interned_names_share_allocation() {
        let mut interner = Interner::new();
        let a = interner.intern("Mumbai Indians");
        let b = interner.intern("Mumbai Indians");
        assert!(Arc::ptr_eq(&a.0, &b.0));
        assert_eq!(interner.distinct_count(), 1);
    }

    #[test]
    fn equality_is_by_content() {
        let mut interner = Interner::new();
        let interned = interner.intern("Chennai Super Kings");
        let fresh = Name::new("Chennai Super Kings");
        assert_eq!(interned, fresh);
        assert_eq!(interned, "Chennai Super Kings");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut seasons = vec![Name::new("2010"), Name::new("2007/08"), Name::new("2009")];
        seasons.sort();
        let labels: Vec<&str> = seasons.iter().map(Name::as_str).collect();
        assert_eq!(labels, vec!["2007/08", "2009", "2010"]);
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = Name::new("Wankhede Stadium");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Wankhede Stadium\"");
    }
}
