use crate::{Contact, ContactId, Error, Result};
use std::collections::BTreeMap;

/// A collection of contacts keyed by ID
///
/// Keys are kept ordered so that every traversal (and therefore every report)
/// is deterministic. Scoring only ever borrows the collection immutably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactCollection {
    contacts: BTreeMap<ContactId, Contact>,
}

impl ContactCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from `(id, contact)` pairs, rejecting repeated IDs
    pub fn from_contacts<I>(contacts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ContactId, Contact)>,
    {
        let mut collection = Self::new();
        for (id, contact) in contacts {
            collection.insert(id, contact)?;
        }
        Ok(collection)
    }

    /// Build a collection assigning sequential IDs from 0 in iteration order
    pub fn from_sequence<I>(contacts: I) -> Self
    where
        I: IntoIterator<Item = Contact>,
    {
        Self {
            contacts: contacts
                .into_iter()
                .enumerate()
                .map(|(i, c)| (i as ContactId, c))
                .collect(),
        }
    }

    pub fn insert(&mut self, id: ContactId, contact: Contact) -> Result<()> {
        if self.contacts.contains_key(&id) {
            return Err(Error::DuplicateContact(id));
        }
        self.contacts.insert(id, contact);
        Ok(())
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.get(&id)
    }

    /// Like [`get`](Self::get) but fails with [`Error::ContactNotFound`]
    pub fn contact(&self, id: ContactId) -> Result<&Contact> {
        self.contacts.get(&id).ok_or(Error::ContactNotFound(id))
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.contacts.contains_key(&id)
    }

    /// IDs in ascending order
    pub fn ids(&self) -> impl Iterator<Item = ContactId> + '_ {
        self.contacts.keys().copied()
    }

    /// Contacts in ascending ID order
    pub fn iter(&self) -> impl Iterator<Item = (ContactId, &Contact)> + '_ {
        self.contacts.iter().map(|(id, c)| (*id, c))
    }

    /// Contacts whose ID is strictly greater than `id`, ascending
    pub fn iter_after(&self, id: ContactId) -> impl Iterator<Item = (ContactId, &Contact)> + '_ {
        use std::ops::Bound::{Excluded, Unbounded};
        self.contacts
            .range((Excluded(id), Unbounded))
            .map(|(id, c)| (*id, c))
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Number of unordered pairs, n(n-1)/2
    pub fn pair_count(&self) -> usize {
        let n = self.contacts.len();
        n * n.saturating_sub(1) / 2
    }
}
