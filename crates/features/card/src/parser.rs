use crate::keys;
use crate::raw::RawConfig;
use paycard_domain::address::{AddressFormMode, AddressLookupProvider};
use paycard_domain::card::CardType;
use paycard_domain::config::{
    BillingAddressConfig, CardComponentConfig, DropInCardConfig, FormComponentStyle,
    StoredCardConfig,
};
use paycard_domain::visibility::FieldVisibility;

/// Derives typed card configurations from a raw payload.
///
/// Every accessor is a pure read over the working map and is recomputed on each call.
/// None of them can fail: missing or mistyped keys fall back to fixed defaults.
///
/// The address lookup provider is borrowed, never owned, and is only forwarded into the
/// output when the address form mode is `lookup`.
#[derive(Debug, Clone)]
pub struct CardConfigurationParser<'a> {
    raw: RawConfig,
    provider: &'a dyn AddressLookupProvider,
}

impl<'a> CardConfigurationParser<'a> {
    /// Creates a parser over `raw`.
    ///
    /// When `raw` holds an object under [`keys::ROOT`], that object becomes the working map;
    /// otherwise the payload is used as is.
    #[must_use]
    pub fn new(raw: impl Into<RawConfig>, provider: &'a dyn AddressLookupProvider) -> Self {
        Self { raw: raw.into().into_nested_or_self(keys::ROOT), provider }
    }

    /// The effective working map after root unwrapping.
    #[must_use]
    pub const fn raw(&self) -> &RawConfig {
        &self.raw
    }

    #[must_use]
    pub fn shows_store_payment_method_field(&self) -> bool {
        self.raw.bool_or(keys::SHOW_STORE_PAYMENT_FIELD, true)
    }

    #[must_use]
    pub fn shows_holder_name_field(&self) -> bool {
        self.raw.bool_or(keys::HOLDER_NAME_REQUIRED, false)
    }

    #[must_use]
    pub fn shows_security_code_field(&self) -> bool {
        !self.raw.bool_or(keys::HIDE_CVC, false)
    }

    #[must_use]
    pub fn shows_stored_security_code_field(&self) -> bool {
        !self.raw.bool_or(keys::HIDE_CVC_STORED_CARD, false)
    }

    /// Billing address form mode. Matching is case-insensitive.
    #[must_use]
    pub fn address_visibility(&self) -> AddressFormMode<'a> {
        self.raw
            .str_value(keys::ADDRESS_VISIBILITY)
            .map_or(AddressFormMode::None, |raw| AddressFormMode::from_raw(raw, self.provider))
    }

    #[must_use]
    pub fn kcp_visibility(&self) -> FieldVisibility {
        self.parse_visibility(keys::KCP_VISIBILITY)
    }

    #[must_use]
    pub fn social_security_visibility(&self) -> FieldVisibility {
        self.parse_visibility(keys::SOCIAL_SECURITY)
    }

    /// Allowed card types in payload order. Unknown brand strings are kept.
    #[must_use]
    pub fn allowed_card_types(&self) -> Option<Vec<CardType>> {
        self.raw
            .string_list(keys::ALLOWED_CARD_TYPES)
            .map(|types| types.into_iter().map(CardType::from).collect())
    }

    #[must_use]
    pub fn billing_address_country_codes(&self) -> Option<Vec<String>> {
        self.raw.string_list(keys::BILLING_ADDRESS_COUNTRY_CODES)
    }

    #[must_use]
    pub fn stored_card_configuration(&self) -> StoredCardConfig {
        StoredCardConfig { shows_security_code_field: self.shows_stored_security_code_field() }
    }

    #[must_use]
    pub fn billing_address_configuration(&self) -> BillingAddressConfig<'a> {
        BillingAddressConfig {
            country_codes: self.billing_address_country_codes(),
            mode: self.address_visibility(),
        }
    }

    /// Configuration of the standalone card component.
    ///
    /// Style, shopper information, localization and installments are not configurable
    /// through the raw payload and keep their empty defaults.
    #[must_use]
    pub fn configuration(&self) -> CardComponentConfig<'a> {
        CardComponentConfig {
            style: FormComponentStyle::default(),
            shopper_information: None,
            localization_parameters: None,
            shows_holder_name_field: self.shows_holder_name_field(),
            shows_store_payment_method_field: self.shows_store_payment_method_field(),
            shows_security_code_field: self.shows_security_code_field(),
            korean_authentication_mode: self.kcp_visibility(),
            social_security_number_mode: self.social_security_visibility(),
            stored_card: self.stored_card_configuration(),
            allowed_card_types: self.allowed_card_types(),
            installment_configuration: None,
            billing_address: self.billing_address_configuration(),
        }
    }

    /// Card settings for the drop-in checkout flow.
    #[must_use]
    pub fn dropin_configuration(&self) -> DropInCardConfig<'a> {
        DropInCardConfig {
            shows_holder_name_field: self.shows_holder_name_field(),
            shows_store_payment_method_field: self.shows_store_payment_method_field(),
            shows_security_code_field: self.shows_security_code_field(),
            korean_authentication_mode: self.kcp_visibility(),
            social_security_number_mode: self.social_security_visibility(),
            stored_card: self.stored_card_configuration(),
            allowed_card_types: self.allowed_card_types(),
            installment_configuration: None,
            billing_address: self.billing_address_configuration(),
        }
    }

    fn parse_visibility(&self, key: &str) -> FieldVisibility {
        self.raw.str_value(key).map_or(FieldVisibility::Hide, FieldVisibility::from)
    }
}
