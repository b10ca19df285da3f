use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned contact identifier. Unique within a collection.
pub type ContactId = u64;

/// The five comparable attributes of a contact
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    ZipCode,
    Address,
}

impl ContactField {
    /// All fields in declaration order
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::ZipCode,
        ContactField::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Email => "email",
            ContactField::ZipCode => "zip_code",
            ContactField::Address => "address",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact record
///
/// Every attribute is free text. An empty string means the value is unknown,
/// which is not the same thing as a mismatch when two contacts are compared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Contact {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub address: String,
}

impl Contact {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        zip_code: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            zip_code: zip_code.into(),
            address: address.into(),
        }
    }

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = value.into();
        self
    }

    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = value.into();
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = value.into();
        self
    }

    pub fn with_zip_code(mut self, value: impl Into<String>) -> Self {
        self.zip_code = value.into();
        self
    }

    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.address = value.into();
        self
    }

    /// Get the value of a field
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::ZipCode => &self.zip_code,
            ContactField::Address => &self.address,
        }
    }

    /// Whether the field holds a known (non-empty) value
    pub fn is_known(&self, field: ContactField) -> bool {
        !self.get(field).is_empty()
    }

    /// Whether every field is unknown
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| !self.is_known(*f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let contact = Contact::default()
            .with_first_name("Ciara")
            .with_last_name("French")
            .with_email("non.lacinia.at@zoho.ca")
            .with_zip_code("39746")
            .with_address("449-6990 Tellus. Rd.");

        assert_eq!(contact.get(ContactField::FirstName), "Ciara");
        assert_eq!(contact.get(ContactField::LastName), "French");
        assert_eq!(contact.get(ContactField::Email), "non.lacinia.at@zoho.ca");
        assert_eq!(contact.get(ContactField::ZipCode), "39746");
        assert_eq!(contact.get(ContactField::Address), "449-6990 Tellus. Rd.");
    }

    #[test]
    fn test_empty_means_unknown() {
        let contact = Contact::default().with_email("foo@gmail.com");
        assert!(contact.is_known(ContactField::Email));
        assert!(!contact.is_known(ContactField::FirstName));
        assert!(!contact.is_empty());
        assert!(Contact::default().is_empty());
    }

    #[test]
    fn test_serde_missing_fields_default_to_unknown() {
        let contact: Contact = serde_json::from_str(r#"{"email": "foo@gmail.com"}"#).unwrap();
        assert_eq!(contact, Contact::default().with_email("foo@gmail.com"));
    }
}
