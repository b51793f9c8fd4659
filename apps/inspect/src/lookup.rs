use anyhow::{Context, Result};
use paycard_domain::address::{AddressLookupProvider, PostalAddress};
use std::fs;
use std::path::Path;
use tracing::debug;

/// In-memory address lookup backed by a fixed list of addresses.
#[derive(Debug, Default)]
pub(crate) struct AddressBook {
    entries: Vec<PostalAddress>,
}

impl AddressBook {
    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read address book {}", path.display()))?;
        let entries: Vec<PostalAddress> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse address book {}", path.display()))?;

        debug!(count = entries.len(), "Address book loaded");
        Ok(Self { entries })
    }
}

impl AddressLookupProvider for AddressBook {
    /// Case-insensitive substring match over street, city and postal code.
    fn look_up(&self, search_term: &str) -> Vec<PostalAddress> {
        let needle = search_term.to_lowercase();
        self.entries
            .iter()
            .filter(|address| {
                [&address.street, &address.city, &address.postal_code]
                    .into_iter()
                    .flatten()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}
