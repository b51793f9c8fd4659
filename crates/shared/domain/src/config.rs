use crate::address::{AddressFormMode, PostalAddress};
use crate::card::CardType;
use crate::visibility::FieldVisibility;
use serde::{Deserialize, Serialize};

/// Stored (tokenized) card behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCardConfig {
    pub shows_security_code_field: bool,
}

/// Billing address form settings.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddressConfig<'a> {
    /// Countries offered in the address form; `None` leaves the choice unrestricted.
    pub country_codes: Option<Vec<String>>,
    pub mode: AddressFormMode<'a>,
}

/// Visual style of the card form. Styling is not driven by the raw configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormComponentStyle {
    pub tint_color: Option<String>,
    pub background_color: Option<String>,
}

/// Shopper details used to prefill the form.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShopperInformation {
    pub shopper_name: Option<String>,
    pub email_address: Option<String>,
    pub telephone_number: Option<String>,
    pub billing_address: Option<PostalAddress>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalizationParameters {
    pub locale: Option<String>,
    pub table_name: Option<String>,
    pub key_separator: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallmentConfiguration {
    pub default_options: Vec<u8>,
    pub shows_regular_payment: bool,
}

/// Configuration of the standalone card component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardComponentConfig<'a> {
    pub style: FormComponentStyle,
    pub shopper_information: Option<ShopperInformation>,
    pub localization_parameters: Option<LocalizationParameters>,
    pub shows_holder_name_field: bool,
    pub shows_store_payment_method_field: bool,
    pub shows_security_code_field: bool,
    pub korean_authentication_mode: FieldVisibility,
    pub social_security_number_mode: FieldVisibility,
    pub stored_card: StoredCardConfig,
    pub allowed_card_types: Option<Vec<CardType>>,
    pub installment_configuration: Option<InstallmentConfiguration>,
    pub billing_address: BillingAddressConfig<'a>,
}

/// Card settings of the drop-in checkout flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropInCardConfig<'a> {
    pub shows_holder_name_field: bool,
    pub shows_store_payment_method_field: bool,
    pub shows_security_code_field: bool,
    pub korean_authentication_mode: FieldVisibility,
    pub social_security_number_mode: FieldVisibility,
    pub stored_card: StoredCardConfig,
    pub allowed_card_types: Option<Vec<CardType>>,
    pub installment_configuration: Option<InstallmentConfiguration>,
    pub billing_address: BillingAddressConfig<'a>,
}

// --- Default ---

impl Default for StoredCardConfig {
    fn default() -> Self {
        Self { shows_security_code_field: true }
    }
}
