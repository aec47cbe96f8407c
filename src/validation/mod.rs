use serde::Serialize;
use std::fmt;

pub mod pure;

pub use pure::{card_details_pure, normalize_card_number};

/// Card network as reported by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Diners,
    Jcb,
    Unknown,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Visa => "visa",
            CardType::Mastercard => "mastercard",
            CardType::Amex => "amex",
            CardType::Discover => "discover",
            CardType::Diners => "diners",
            CardType::Jcb => "jcb",
            CardType::Unknown => "unknown",
        }
    }

    /// Card number lengths the network issues
    pub fn lengths(&self) -> &'static [usize] {
        match self {
            CardType::Visa => &[13, 16, 19],
            CardType::Mastercard => &[16],
            CardType::Amex => &[15],
            CardType::Discover => &[16, 19],
            CardType::Diners => &[14],
            CardType::Jcb => &[16, 17, 18, 19],
            CardType::Unknown => &[],
        }
    }

    /// Brands this service will charge
    pub fn is_accepted(&self) -> bool {
        matches!(self, CardType::Visa | CardType::Mastercard)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of card validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDetails {
    pub card_type: CardType,
    pub valid: bool,
}

/// Trait for card number validation
pub trait CardValidator: Send + Sync {
    fn card_details(&self, card_number: &str) -> CardDetails;
}

/// Default implementation: issuer prefix, length and Luhn checks
pub struct DefaultCardValidator;

impl CardValidator for DefaultCardValidator {
    fn card_details(&self, card_number: &str) -> CardDetails {
        card_details_pure(card_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_visa_and_mastercard_accepted() {
        let accepted: Vec<_> = [
            CardType::Visa,
            CardType::Mastercard,
            CardType::Amex,
            CardType::Discover,
            CardType::Diners,
            CardType::Jcb,
            CardType::Unknown,
        ]
        .into_iter()
        .filter(CardType::is_accepted)
        .collect();

        assert_eq!(accepted, vec![CardType::Visa, CardType::Mastercard]);
    }

    #[test]
    fn test_brand_strings() {
        assert_eq!(CardType::Visa.to_string(), "visa");
        assert_eq!(CardType::Mastercard.to_string(), "mastercard");
        assert_eq!(serde_json::to_string(&CardType::Amex).unwrap(), "\"amex\"");
    }

    #[test]
    fn test_default_validator_delegates() {
        let details = DefaultCardValidator.card_details("5555555555554444");
        assert_eq!(details, CardDetails { card_type: CardType::Mastercard, valid: true });
    }
}
