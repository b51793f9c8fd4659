use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Debug;

/// A postal address as returned by an address lookup service.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostalAddress {
    pub city: Option<String>,
    pub country: Option<String>,
    pub house_number_or_name: Option<String>,
    pub postal_code: Option<String>,
    pub state_or_province: Option<String>,
    pub street: Option<String>,
    pub apartment: Option<String>,
}

/// Address lookup capability provided by the host application.
///
/// The card configuration never owns the provider; it only borrows it and hands the
/// same reference to the form when the lookup mode is selected.
pub trait AddressLookupProvider: Debug + Send + Sync {
    /// Returns the addresses matching a free-form search term.
    fn look_up(&self, search_term: &str) -> Vec<PostalAddress>;
}

/// How the billing address form is presented.
#[derive(Debug, Default, Clone, Copy)]
pub enum AddressFormMode<'a> {
    #[default]
    None,
    PostalCode,
    Full,
    Lookup(&'a dyn AddressLookupProvider),
}

impl<'a> AddressFormMode<'a> {
    /// Maps a raw mode string, ignoring case. Unknown strings yield [`AddressFormMode::None`].
    #[must_use]
    pub fn from_raw(raw: &str, provider: &'a dyn AddressLookupProvider) -> Self {
        match raw.to_lowercase().as_str() {
            "postalcode" | "postal_code" | "postal" => Self::PostalCode,
            "full" => Self::Full,
            "lookup" => Self::Lookup(provider),
            _ => Self::None,
        }
    }

    /// Returns the provider carried by the lookup mode.
    #[must_use]
    pub const fn lookup_provider(&self) -> Option<&'a dyn AddressLookupProvider> {
        match self {
            Self::Lookup(provider) => Some(*provider),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PostalCode => "postalCode",
            Self::Full => "full",
            Self::Lookup(_) => "lookup",
        }
    }
}

impl PartialEq for AddressFormMode<'_> {
    /// Lookup modes are equal only when they carry the very same provider.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None)
            | (Self::PostalCode, Self::PostalCode)
            | (Self::Full, Self::Full) => true,
            (Self::Lookup(a), Self::Lookup(b)) => std::ptr::addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for AddressFormMode<'_> {}

impl Serialize for AddressFormMode<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
