//! Key literals of the raw card configuration payload.

/// Root node the card settings are conventionally nested under.
pub const ROOT: &str = "card";

pub const SHOW_STORE_PAYMENT_FIELD: &str = "showStorePaymentField";
pub const HOLDER_NAME_REQUIRED: &str = "holderNameRequired";
/// Stored value means "hide", the derived flag is its negation.
pub const HIDE_CVC: &str = "hideCvc";
/// Stored value means "hide", the derived flag is its negation.
pub const HIDE_CVC_STORED_CARD: &str = "hideCvcStoredCard";
pub const ADDRESS_VISIBILITY: &str = "addressVisibility";
pub const KCP_VISIBILITY: &str = "kcpVisibility";
pub const SOCIAL_SECURITY: &str = "socialSecurity";
pub const ALLOWED_CARD_TYPES: &str = "supported";
pub const BILLING_ADDRESS_COUNTRY_CODES: &str = "allowedAddressCountryCodes";
