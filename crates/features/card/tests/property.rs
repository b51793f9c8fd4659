use paycard_card::{CardConfigurationParser, RawConfig, keys};
use paycard_domain::address::{AddressLookupProvider, PostalAddress};
use paycard_domain::card::CardType;
use proptest::prelude::*;
use serde_json::{Map, Value};

#[derive(Debug)]
struct NoLookup;

impl AddressLookupProvider for NoLookup {
    fn look_up(&self, _search_term: &str) -> Vec<PostalAddress> {
        Vec::new()
    }
}

const BOOLEAN_KEYS: [&str; 4] = [
    keys::SHOW_STORE_PAYMENT_FIELD,
    keys::HOLDER_NAME_REQUIRED,
    keys::HIDE_CVC,
    keys::HIDE_CVC_STORED_CARD,
];

fn non_boolean() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(Value::from),
        ".*".prop_map(Value::from),
        proptest::collection::vec(any::<bool>(), 0..4).prop_map(Value::from),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        "(show|hide|Show|lookup|full|postal|[a-z]{0,8})".prop_map(Value::from),
        proptest::collection::vec("[a-z]{0,6}", 0..4).prop_map(Value::from),
        non_boolean(),
    ]
}

fn payload() -> impl Strategy<Value = Map<String, Value>> {
    let keys = prop::sample::select(vec![
        keys::SHOW_STORE_PAYMENT_FIELD,
        keys::HOLDER_NAME_REQUIRED,
        keys::HIDE_CVC,
        keys::HIDE_CVC_STORED_CARD,
        keys::ADDRESS_VISIBILITY,
        keys::KCP_VISIBILITY,
        keys::SOCIAL_SECURITY,
        keys::ALLOWED_CARD_TYPES,
        keys::BILLING_ADDRESS_COUNTRY_CODES,
    ]);
    proptest::collection::vec((keys, any_value()), 0..9)
        .prop_map(|pairs| pairs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect())
}

proptest! {
    #[test]
    fn mistyped_booleans_yield_defaults(values in proptest::collection::vec(non_boolean(), 4)) {
        let entries: Map<String, Value> = BOOLEAN_KEYS
            .iter()
            .zip(values)
            .map(|(key, value)| ((*key).to_owned(), value))
            .collect();
        let parser = CardConfigurationParser::new(RawConfig::new(entries), &NoLookup);

        prop_assert!(parser.shows_store_payment_method_field());
        prop_assert!(!parser.shows_holder_name_field());
        prop_assert!(parser.shows_security_code_field());
        prop_assert!(parser.shows_stored_security_code_field());
    }

    #[test]
    fn component_and_dropin_agree(entries in payload(), nested in any::<bool>()) {
        let raw = if nested {
            let mut root = Map::new();
            root.insert(keys::ROOT.to_owned(), Value::Object(entries));
            RawConfig::new(root)
        } else {
            RawConfig::new(entries)
        };
        let parser = CardConfigurationParser::new(raw, &NoLookup);
        let component = parser.configuration();
        let dropin = parser.dropin_configuration();

        prop_assert_eq!(component.shows_holder_name_field, dropin.shows_holder_name_field);
        prop_assert_eq!(component.shows_store_payment_method_field, dropin.shows_store_payment_method_field);
        prop_assert_eq!(component.shows_security_code_field, dropin.shows_security_code_field);
        prop_assert_eq!(component.korean_authentication_mode, dropin.korean_authentication_mode);
        prop_assert_eq!(component.social_security_number_mode, dropin.social_security_number_mode);
        prop_assert_eq!(component.stored_card, dropin.stored_card);
        prop_assert_eq!(component.allowed_card_types, dropin.allowed_card_types);
        prop_assert_eq!(component.billing_address, dropin.billing_address);
    }

    #[test]
    fn card_type_strings_are_never_dropped(types in proptest::collection::vec("[a-zA-Z_]{1,12}", 1..8)) {
        let mut entries = Map::new();
        entries.insert(keys::ALLOWED_CARD_TYPES.to_owned(), Value::from(types.clone()));
        let parser = CardConfigurationParser::new(RawConfig::new(entries), &NoLookup);

        let parsed = parser.allowed_card_types().unwrap();
        let raw_values: Vec<&str> = parsed.iter().map(CardType::raw_value).collect();
        prop_assert_eq!(raw_values, types.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
