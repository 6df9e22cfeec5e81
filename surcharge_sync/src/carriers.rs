//! Static carrier-code-to-name lookup.
//!
//! The vendor feed rarely fills the carrier name column, so display names are
//! resolved from this fixed table rather than from record content. Plain
//! immutable data; callers that need it in queries take it via
//! [`carrier_name`], never through ambient mutable state.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static CARRIER_NAMES: &[(&str, &str)] = &[
    ("KE", "Korean Air"),
    ("OZ", "Asiana Airlines"),
    ("7C", "Jeju Air"),
    ("LJ", "Jin Air"),
    ("TW", "T'way Air"),
    ("BX", "Air Busan"),
    ("RS", "Air Seoul"),
    ("YP", "Air Premia"),
    ("CX", "Cathay Pacific"),
    ("SQ", "Singapore Airlines"),
    ("JL", "Japan Airlines"),
    ("NH", "All Nippon Airways"),
    ("CA", "Air China"),
    ("MU", "China Eastern Airlines"),
    ("CZ", "China Southern Airlines"),
    ("CI", "China Airlines"),
    ("BR", "EVA Air"),
    ("TG", "Thai Airways"),
    ("VN", "Vietnam Airlines"),
    ("SV", "Saudia"),
    ("EK", "Emirates"),
    ("QR", "Qatar Airways"),
    ("EY", "Etihad Airways"),
    ("TK", "Turkish Airlines"),
    ("LH", "Lufthansa"),
    ("AF", "Air France"),
    ("KL", "KLM"),
    ("BA", "British Airways"),
    ("UA", "United Airlines"),
    ("AA", "American Airlines"),
    ("DL", "Delta Air Lines"),
    ("AC", "Air Canada"),
    ("PO", "Polar Air Cargo"),
    ("5X", "UPS Airlines"),
    ("FX", "FedEx Express"),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CARRIER_NAMES.iter().copied().collect());

/// Resolves a carrier code to its display name, if known.
pub fn carrier_name(code: &str) -> Option<&'static str> {
    BY_CODE.get(code.trim().to_ascii_uppercase().as_str()).copied()
}
