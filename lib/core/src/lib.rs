//! # dedupx Core
//!
//! Core data model for the dedupx contact deduplication engine.
//!
//! - [`Contact`] - A contact record with five optional text fields
//! - [`ContactCollection`] - Read-only, ID-ordered container of contacts
//! - [`Error`] - Errors shared by every dedupx crate
//!
//! ## Example
//!
//! ```rust
//! use dedupx_core::{Contact, ContactCollection};
//!
//! let mut collection = ContactCollection::new();
//! collection
//!     .insert(0, Contact::default().with_first_name("Ciara").with_last_name("French"))
//!     .unwrap();
//! collection
//!     .insert(1, Contact::default().with_first_name("C").with_last_name("F"))
//!     .unwrap();
//!
//! assert_eq!(collection.len(), 2);
//! assert_eq!(collection.ids().collect::<Vec<_>>(), vec![0, 1]);
//! ```

pub mod collection;
pub mod contact;
pub mod error;

pub use collection::ContactCollection;
pub use contact::{Contact, ContactField, ContactId};
pub use error::{Error, Result};
