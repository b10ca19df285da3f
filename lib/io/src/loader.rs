//! Contact table loading
//!
//! Reads a CSV table with a header row into a [`ContactCollection`]. Rows get
//! sequential IDs starting at 0 in file order. Empty cells become unknown
//! values.

use crate::error::{IoError, Result};
use dedupx_core::{Contact, ContactCollection, ContactField, ContactId};
use dedupx_similarity::SimilarityWeights;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Header names of the contact columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub zip_code: String,
    pub address: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            first_name: "name".into(),
            last_name: "name1".into(),
            email: "email".into(),
            zip_code: "postalZip".into(),
            address: "address".into(),
        }
    }
}

impl ColumnMapping {
    pub fn column(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::ZipCode => &self.zip_code,
            ContactField::Address => &self.address,
        }
    }
}

/// Loads contacts from CSV
#[derive(Debug, Clone, Default)]
pub struct ContactLoader {
    columns: ColumnMapping,
}

impl ContactLoader {
    pub fn new(columns: ColumnMapping) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &ColumnMapping {
        &self.columns
    }

    /// Load contacts from any reader
    ///
    /// Every mapped column must be present in the header; extra columns are
    /// ignored. A row with a different number of fields than the header is
    /// an error.
    pub fn load<R: Read>(&self, reader: R) -> Result<ContactCollection> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let position = |field: ContactField| {
            let name = self.columns.column(field);
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| IoError::MissingColumn {
                    column: name.to_string(),
                })
        };
        let first_name = position(ContactField::FirstName)?;
        let last_name = position(ContactField::LastName)?;
        let email = position(ContactField::Email)?;
        let zip_code = position(ContactField::ZipCode)?;
        let address = position(ContactField::Address)?;

        let mut collection = ContactCollection::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let cell = |idx: usize| record.get(idx).unwrap_or_default();
            let contact = Contact::new(
                cell(first_name),
                cell(last_name),
                cell(email),
                cell(zip_code),
                cell(address),
            );
            collection.insert(row as ContactId, contact)?;
        }

        debug!(columns = ?self.columns, "contact columns resolved");
        info!(contacts = collection.len(), "contacts loaded");
        Ok(collection)
    }

    /// Load contacts from a CSV file
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<ContactCollection> {
        let file = File::open(path.as_ref())?;
        self.load(file)
    }
}

/// Read and validate a JSON weight set
///
/// Keys left out of the file keep their default value.
pub fn load_weights<P: AsRef<Path>>(path: P) -> Result<SimilarityWeights> {
    let file = File::open(path.as_ref())?;
    let weights: SimilarityWeights = serde_json::from_reader(file)?;
    weights.validate()?;
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
name,name1,email,postalZip,address
C,F,mollis.lectus.pede@outlook.net,,449-6990 Tellus. Rd.
C,French,mollis.lectus.pede@outlook.net,39746,449-6990 Tellus. Rd.
Ciara,F,non.lacinia.at@zoho.ca,39746,
";

    #[test]
    fn test_load_sample() {
        let collection = ContactLoader::default().load(SAMPLE.as_bytes()).unwrap();

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.ids().collect::<Vec<_>>(), vec![0, 1, 2]);

        let first = collection.get(0).unwrap();
        assert_eq!(first.first_name, "C");
        assert_eq!(first.last_name, "F");
        assert_eq!(first.zip_code, "");
        assert_eq!(first.address, "449-6990 Tellus. Rd.");

        let third = collection.get(2).unwrap();
        assert_eq!(third.email, "non.lacinia.at@zoho.ca");
        assert_eq!(third.address, "");
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "\
address,email,extra,name1,name,postalZip
Main St.,a@x.io,ignored,Ortiz,Ruth,10001
";
        let collection = ContactLoader::default().load(csv.as_bytes()).unwrap();
        let contact = collection.get(0).unwrap();

        assert_eq!(
            contact,
            &Contact::new("Ruth", "Ortiz", "a@x.io", "10001", "Main St.")
        );
    }

    #[test]
    fn test_quoted_fields() {
        let csv = "\
name,name1,email,postalZip,address
Ruth,Ortiz,a@x.io,10001,\"12 Main St., Apt 4\"
";
        let collection = ContactLoader::default().load(csv.as_bytes()).unwrap();
        assert_eq!(collection.get(0).unwrap().address, "12 Main St., Apt 4");
    }

    #[test]
    fn test_missing_column() {
        let csv = "name,name1,email,address\nRuth,Ortiz,a@x.io,Main St.\n";
        let result = ContactLoader::default().load(csv.as_bytes());

        assert!(matches!(
            result,
            Err(IoError::MissingColumn { column }) if column == "postalZip"
        ));
    }

    #[test]
    fn test_ragged_row() {
        let csv = "name,name1,email,postalZip,address\nRuth,Ortiz\n";
        let result = ContactLoader::default().load(csv.as_bytes());
        assert!(matches!(result, Err(IoError::Csv(_))));
    }

    #[test]
    fn test_custom_mapping() {
        let csv = "first,last,mail,zip,street\nRuth,Ortiz,a@x.io,10001,Main St.\n";
        let loader = ContactLoader::new(ColumnMapping {
            first_name: "first".into(),
            last_name: "last".into(),
            email: "mail".into(),
            zip_code: "zip".into(),
            address: "street".into(),
        });

        let collection = loader.load(csv.as_bytes()).unwrap();
        assert_eq!(collection.get(0).unwrap().zip_code, "10001");
    }

    #[test]
    fn test_header_only() {
        let csv = "name,name1,email,postalZip,address\n";
        let collection = ContactLoader::default().load(csv.as_bytes()).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_load_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let collection = ContactLoader::default().load_path(file.path()).unwrap();
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_load_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ContactLoader::default().load_path(dir.path().join("nope.csv"));
        assert!(matches!(result, Err(IoError::Io(_))));
    }

    #[test]
    fn test_load_weights() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"full_name": 0.5, "full_address": 0.5}"#).unwrap();

        let weights = load_weights(file.path()).unwrap();
        assert_eq!(weights.full_name, 0.5);
        assert_eq!(weights.address, 0.9);
    }

    #[test]
    fn test_load_invalid_weights() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"full_name": 3.0}"#).unwrap();
        assert!(matches!(load_weights(file.path()), Err(IoError::Schema(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(matches!(load_weights(file.path()), Err(IoError::Json(_))));
    }
}
