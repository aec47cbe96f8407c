use crate::validation::{CardDetails, CardType};

/// Validate a card number without any external dependencies.
///
/// Spaces and dashes are ignored. The result is `valid` only when the issuer
/// prefix maps to a known brand, the length is one that brand issues, and
/// the Luhn checksum holds.
pub fn card_details_pure(card_number: &str) -> CardDetails {
    let digits = normalize_card_number(card_number);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return CardDetails {
            card_type: CardType::Unknown,
            valid: false,
        };
    }

    let card_type = detect_brand(&digits);
    let valid = card_type != CardType::Unknown
        && card_type.lengths().contains(&digits.len())
        && luhn_checksum_ok(&digits);

    CardDetails { card_type, valid }
}

/// Card number with spaces and dashes removed
pub fn normalize_card_number(card_number: &str) -> String {
    card_number
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect()
}

/// Identify the issuing network from the leading digits
pub fn detect_brand(digits: &str) -> CardType {
    let prefix = |n: usize| -> Option<u32> { digits.get(..n).and_then(|p| p.parse().ok()) };

    if digits.starts_with('4') {
        return CardType::Visa;
    }
    if matches!(prefix(2), Some(51..=55)) || matches!(prefix(4), Some(2221..=2720)) {
        return CardType::Mastercard;
    }
    if matches!(prefix(2), Some(34 | 37)) {
        return CardType::Amex;
    }
    if prefix(4) == Some(6011) || prefix(2) == Some(65) || matches!(prefix(3), Some(644..=649)) {
        return CardType::Discover;
    }
    if matches!(prefix(3), Some(300..=305)) || matches!(prefix(2), Some(36 | 38)) {
        return CardType::Diners;
    }
    if matches!(prefix(4), Some(3528..=3589)) {
        return CardType::Jcb;
    }

    CardType::Unknown
}

/// Luhn mod-10 check. Empty or non-digit input fails.
pub fn luhn_checksum_ok(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 1 {
            let doubled = d * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            d
        };
    }

    sum % 10 == 0
}
