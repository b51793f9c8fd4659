use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use strum::{AsRefStr, EnumIter, EnumString};

/// Card brands with a well-known raw identifier.
///
/// The raw identifiers match the brand codes used by the payment backend and are
/// matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
pub enum CardBrand {
    #[strum(serialize = "accel")]
    Accel,
    #[strum(serialize = "amex")]
    AmericanExpress,
    #[strum(serialize = "argencard")]
    Argencard,
    #[strum(serialize = "bcmc")]
    Bancontact,
    #[strum(serialize = "bijcard")]
    BijenkorfCard,
    #[strum(serialize = "cabal")]
    Cabal,
    #[strum(serialize = "cartebancaire")]
    CarteBancaire,
    #[strum(serialize = "cup")]
    ChinaUnionPay,
    #[strum(serialize = "codensa")]
    Codensa,
    #[strum(serialize = "dankort")]
    Dankort,
    #[strum(serialize = "diners")]
    DinersClub,
    #[strum(serialize = "discover")]
    Discover,
    #[strum(serialize = "elo")]
    Elo,
    #[strum(serialize = "forbrugsforeningen")]
    Forbrugsforeningen,
    #[strum(serialize = "hiper")]
    Hiper,
    #[strum(serialize = "hipercard")]
    Hipercard,
    #[strum(serialize = "jcb")]
    Jcb,
    #[strum(serialize = "karenmillen")]
    KarenMillen,
    #[strum(serialize = "kcp_banktransfer")]
    KoreanLocalCard,
    #[strum(serialize = "laser")]
    Laser,
    #[strum(serialize = "maestro")]
    Maestro,
    #[strum(serialize = "maestrouk")]
    MaestroUk,
    #[strum(serialize = "mc")]
    Mastercard,
    #[strum(serialize = "mir")]
    Mir,
    #[strum(serialize = "naranja")]
    Naranja,
    #[strum(serialize = "nyce")]
    Nyce,
    #[strum(serialize = "oasis")]
    Oasis,
    #[strum(serialize = "pulse")]
    Pulse,
    #[strum(serialize = "shopping")]
    Shopping,
    #[strum(serialize = "solo")]
    Solo,
    #[strum(serialize = "star")]
    Star,
    #[strum(serialize = "troy")]
    Troy,
    #[strum(serialize = "uatp")]
    Uatp,
    #[strum(serialize = "visa")]
    Visa,
    #[strum(serialize = "visadankort")]
    VisaDankort,
    #[strum(serialize = "warehouse")]
    Warehouse,
}

/// Identifier of a card type accepted by the card component.
///
/// Any string produces a value: known brand codes map to [`CardType::Brand`], everything
/// else is kept verbatim in [`CardType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardType {
    Brand(CardBrand),
    Other(String),
}

impl CardType {
    /// Returns the raw identifier this card type was built from.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        match self {
            Self::Brand(brand) => brand.as_ref(),
            Self::Other(raw) => raw,
        }
    }

    /// Returns the known brand, if any.
    #[must_use]
    pub const fn brand(&self) -> Option<CardBrand> {
        match self {
            Self::Brand(brand) => Some(*brand),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for CardType {
    fn from(raw: &str) -> Self {
        raw.parse::<CardBrand>().map_or_else(|_| Self::Other(raw.to_owned()), Self::Brand)
    }
}

impl From<String> for CardType {
    fn from(raw: String) -> Self {
        match raw.parse::<CardBrand>() {
            Ok(brand) => Self::Brand(brand),
            Err(_) => Self::Other(raw),
        }
    }
}

impl From<CardBrand> for CardType {
    fn from(brand: CardBrand) -> Self {
        Self::Brand(brand)
    }
}

impl From<CardType> for String {
    fn from(card_type: CardType) -> Self {
        match card_type {
            CardType::Brand(brand) => brand.as_ref().to_owned(),
            CardType::Other(raw) => raw,
        }
    }
}

impl Display for CardType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}
