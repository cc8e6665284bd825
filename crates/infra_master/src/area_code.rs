//! Lebanese telephone area codes and mobile carrier bands.
//!
//! Classification is a two-tier table lookup:
//!
//! 1. The main code (first two digits) selects either a fixed region or a
//!    carrier band.
//! 2. For carrier bands, the secondary code (third digit) is looked up in the
//!    band's own [`SecondaryTable`].
//!
//! Both tiers are plain data ([`MAIN_CODES`] and the band tables it refers
//! to) so the rules can be audited independently of the dispatch code.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::MasterDataError;

/// Number of digits in a Lebanese phone number (without country code).
pub const PHONE_NUMBER_LEN: usize = 8;

/// Carrier or geographic region a phone number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaCode {
    /// Beirut landline
    Beirut,
    /// Former Syria band (no longer in use)
    Syria,
    /// Mount Lebanon, Metn Caza
    MetnCaza,
    /// Mount Lebanon, Baabda + Aley + Chouf Cazas
    BaabdaAleyChoufCaza,
    /// North Lebanon
    NorthLebanon,
    /// South Lebanon
    SouthLebanon,
    /// Bekaa and Baalbek-Hermel
    BekaaBaalbekHermel,
    /// Mount Lebanon, Kesrouan + Byblos Cazas
    KesrouanByblosCaza,
    /// Multimedia messaging service
    Mms,
    /// Alfa mobile network
    Alfa,
    /// Touch mobile network
    Touch,
    /// Band with no assigned carrier
    NotApplicable,
}

impl AreaCode {
    /// Every classification result, in table order.
    pub const ALL: [AreaCode; 12] = [
        AreaCode::Beirut,
        AreaCode::Syria,
        AreaCode::MetnCaza,
        AreaCode::BaabdaAleyChoufCaza,
        AreaCode::NorthLebanon,
        AreaCode::SouthLebanon,
        AreaCode::BekaaBaalbekHermel,
        AreaCode::KesrouanByblosCaza,
        AreaCode::Mms,
        AreaCode::Alfa,
        AreaCode::Touch,
        AreaCode::NotApplicable,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AreaCode::Beirut => "Beirut",
            AreaCode::Syria => "Syria (no longer in use)",
            AreaCode::MetnCaza => "Mount Lebanon, Metn Caza",
            AreaCode::BaabdaAleyChoufCaza => {
                "Mount Lebanon, Baabda Caza + Aley Caza + Chouf Caza"
            }
            AreaCode::NorthLebanon => "North Lebanon",
            AreaCode::SouthLebanon => "South Lebanon",
            AreaCode::BekaaBaalbekHermel => "Bekaa and Baalbek-Hermel",
            AreaCode::KesrouanByblosCaza => "Mount Lebanon, Kesrouan Caza + Byblos Caza",
            AreaCode::Mms => "MMS",
            AreaCode::Alfa => "Alfa",
            AreaCode::Touch => "Touch",
            AreaCode::NotApplicable => "n/a",
        }
    }

    /// Whether this result names a mobile carrier.
    pub fn is_carrier(&self) -> bool {
        matches!(self, AreaCode::Alfa | AreaCode::Touch)
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AreaCode {
    type Err = MasterDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AreaCode::ALL
            .into_iter()
            .find(|area| area.label() == s)
            .ok_or_else(|| MasterDataError::UnknownLabel(s.to_string()))
    }
}

/// Secondary-code rules for one carrier band.
///
/// Rules are checked in order; the first digit set containing the secondary
/// code wins, otherwise `fallback` applies.
#[derive(Debug)]
pub struct SecondaryTable {
    rules: &'static [(&'static [u8], AreaCode)],
    fallback: AreaCode,
}

impl SecondaryTable {
    /// Resolve a secondary code (0-9).
    pub fn lookup(&self, secondary: u8) -> AreaCode {
        self.rules
            .iter()
            .find(|(digits, _)| digits.contains(&secondary))
            .map(|(_, area)| *area)
            .unwrap_or(self.fallback)
    }

    /// Explicit digit-set rules.
    pub fn rules(&self) -> &'static [(&'static [u8], AreaCode)] {
        self.rules
    }

    /// Result for digits not covered by any rule.
    pub fn fallback(&self) -> AreaCode {
        self.fallback
    }
}

/// What a main code resolves to.
#[derive(Debug, Clone, Copy)]
pub enum MainCodeRule {
    /// Region fixed by the main code alone
    Fixed(AreaCode),
    /// Carrier band disambiguated by the secondary code
    Band(&'static SecondaryTable),
}

static BAND_03: SecondaryTable = SecondaryTable {
    rules: &[(&[0, 6, 7, 8, 9], AreaCode::Touch)],
    fallback: AreaCode::Alfa,
};

static BAND_70: SecondaryTable = SecondaryTable {
    rules: &[(&[0, 6, 7, 8, 9], AreaCode::Touch)],
    fallback: AreaCode::Alfa,
};

// Inverted relative to 03/70. Kept as published; pending confirmation with
// the numbering plan owner.
static BAND_71: SecondaryTable = SecondaryTable {
    rules: &[(&[0, 6, 7, 8, 9], AreaCode::Alfa)],
    fallback: AreaCode::Touch,
};

static BAND_76: SecondaryTable = SecondaryTable {
    rules: &[
        (&[0, 6, 7, 8, 9], AreaCode::Touch),
        (&[2], AreaCode::NotApplicable),
    ],
    fallback: AreaCode::Alfa,
};

static BAND_78: SecondaryTable = SecondaryTable {
    rules: &[(&[8, 9], AreaCode::Touch)],
    fallback: AreaCode::NotApplicable,
};

static BAND_79: SecondaryTable = SecondaryTable {
    rules: &[(&[1, 2, 3], AreaCode::Alfa)],
    fallback: AreaCode::NotApplicable,
};

static BAND_81: SecondaryTable = SecondaryTable {
    rules: &[(&[2, 3, 4], AreaCode::Alfa), (&[6, 7, 8], AreaCode::Touch)],
    fallback: AreaCode::NotApplicable,
};

/// Main code (first two digits, as a number) to rule.
pub static MAIN_CODES: [(u8, MainCodeRule); 16] = [
    (1, MainCodeRule::Fixed(AreaCode::Beirut)),
    (2, MainCodeRule::Fixed(AreaCode::Syria)),
    (3, MainCodeRule::Band(&BAND_03)),
    (4, MainCodeRule::Fixed(AreaCode::MetnCaza)),
    (5, MainCodeRule::Fixed(AreaCode::BaabdaAleyChoufCaza)),
    (6, MainCodeRule::Fixed(AreaCode::NorthLebanon)),
    (7, MainCodeRule::Fixed(AreaCode::SouthLebanon)),
    (8, MainCodeRule::Fixed(AreaCode::BekaaBaalbekHermel)),
    (9, MainCodeRule::Fixed(AreaCode::KesrouanByblosCaza)),
    (10, MainCodeRule::Fixed(AreaCode::Mms)),
    (70, MainCodeRule::Band(&BAND_70)),
    (71, MainCodeRule::Band(&BAND_71)),
    (76, MainCodeRule::Band(&BAND_76)),
    (78, MainCodeRule::Band(&BAND_78)),
    (79, MainCodeRule::Band(&BAND_79)),
    (81, MainCodeRule::Band(&BAND_81)),
];

/// Look up the rule for a main code.
pub fn main_code_rule(main_code: u8) -> Option<MainCodeRule> {
    MAIN_CODES
        .iter()
        .find(|(code, _)| *code == main_code)
        .map(|(_, rule)| *rule)
}

/// Validated eight-digit Lebanese phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    digits: [u8; PHONE_NUMBER_LEN],
}

impl PhoneNumber {
    /// Parse and validate a phone number.
    ///
    /// The digit check runs before the length check, so `"0123456a"` is an
    /// [`MasterDataError::InvalidFormat`] and `"0123456"` an
    /// [`MasterDataError::InvalidLength`].
    pub fn parse(number: &str) -> Result<Self, MasterDataError> {
        if !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MasterDataError::InvalidFormat(number.to_string()));
        }

        let bytes: [u8; PHONE_NUMBER_LEN] = number.as_bytes().try_into().map_err(|_| {
            MasterDataError::InvalidLength {
                expected: PHONE_NUMBER_LEN,
                actual: number.len(),
            }
        })?;

        Ok(Self {
            digits: bytes.map(|b| b - b'0'),
        })
    }

    /// First two digits as a number (`"03..."` is `3`).
    pub fn main_code(&self) -> u8 {
        self.digits[0] * 10 + self.digits[1]
    }

    /// Third digit.
    pub fn secondary_code(&self) -> u8 {
        self.digits[2]
    }

    /// Classify this number.
    pub fn classify(&self) -> Result<AreaCode, MasterDataError> {
        let main_code = self.main_code();
        match main_code_rule(main_code) {
            Some(MainCodeRule::Fixed(area)) => Ok(area),
            Some(MainCodeRule::Band(table)) => Ok(table.lookup(self.secondary_code())),
            None => {
                debug!(number = %self, "no area code rule for main code {:02}", main_code);
                Err(MasterDataError::UnknownPrefix(format!("{:02}", main_code)))
            }
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl FromStr for PhoneNumber {
    type Err = MasterDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Classify an eight-digit phone number into a carrier or region.
///
/// # Examples
///
/// ```
/// use infra_master::{classify, AreaCode};
///
/// assert_eq!(classify("01234567").unwrap(), AreaCode::Beirut);
/// assert_eq!(classify("71234567").unwrap(), AreaCode::Touch);
/// assert!(classify("99123456").is_err());
/// ```
pub fn classify(number: &str) -> Result<AreaCode, MasterDataError> {
    PhoneNumber::parse(number)?.classify()
}

/// Whether the number belongs to Alfa. Classification errors propagate.
pub fn is_alfa(number: &str) -> Result<bool, MasterDataError> {
    classify(number).map(|area| area == AreaCode::Alfa)
}

/// Whether the number belongs to Touch. Classification errors propagate.
pub fn is_touch(number: &str) -> Result<bool, MasterDataError> {
    classify(number).map(|area| area == AreaCode::Touch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(main: &str, secondary: u8) -> String {
        format!("{}{}34567", main, secondary)
    }

    #[test]
    fn test_fixed_regions_ignore_remaining_digits() {
        let cases = [
            ("01", AreaCode::Beirut),
            ("02", AreaCode::Syria),
            ("04", AreaCode::MetnCaza),
            ("05", AreaCode::BaabdaAleyChoufCaza),
            ("06", AreaCode::NorthLebanon),
            ("07", AreaCode::SouthLebanon),
            ("08", AreaCode::BekaaBaalbekHermel),
            ("09", AreaCode::KesrouanByblosCaza),
            ("10", AreaCode::Mms),
        ];

        for (main, expected) in cases {
            for tail in ["000000", "999999", "123456"] {
                let input = format!("{}{}", main, tail);
                assert_eq!(classify(&input), Ok(expected), "{}", input);
            }
        }
    }

    #[test]
    fn test_03_and_70_bands() {
        for main in ["03", "70"] {
            for d in [0, 6, 7, 8, 9] {
                assert_eq!(classify(&number(main, d)), Ok(AreaCode::Touch));
            }
            for d in 1..=5 {
                assert_eq!(classify(&number(main, d)), Ok(AreaCode::Alfa));
            }
        }
    }

    #[test]
    fn test_71_band_is_inverted() {
        assert_eq!(classify("71234567"), Ok(AreaCode::Touch));
        assert_eq!(classify("71034567"), Ok(AreaCode::Alfa));
        for d in [0, 6, 7, 8, 9] {
            assert_eq!(classify(&number("71", d)), Ok(AreaCode::Alfa));
        }
        for d in 1..=5 {
            assert_eq!(classify(&number("71", d)), Ok(AreaCode::Touch));
        }
    }

    #[test]
    fn test_76_band() {
        assert_eq!(classify("76234567"), Ok(AreaCode::NotApplicable));
        assert_eq!(classify("76034567"), Ok(AreaCode::Touch));
        assert_eq!(classify("76934567"), Ok(AreaCode::Touch));
        for d in [1, 3, 4, 5] {
            assert_eq!(classify(&number("76", d)), Ok(AreaCode::Alfa));
        }
    }

    #[test]
    fn test_78_band() {
        assert_eq!(classify("78834567"), Ok(AreaCode::Touch));
        assert_eq!(classify("78934567"), Ok(AreaCode::Touch));
        for d in 0..=7 {
            assert_eq!(classify(&number("78", d)), Ok(AreaCode::NotApplicable));
        }
    }

    #[test]
    fn test_79_band() {
        for d in 1..=3 {
            assert_eq!(classify(&number("79", d)), Ok(AreaCode::Alfa));
        }
        for d in [0, 4, 5, 6, 7, 8, 9] {
            assert_eq!(classify(&number("79", d)), Ok(AreaCode::NotApplicable));
        }
    }

    #[test]
    fn test_81_band() {
        assert_eq!(classify("81223456"), Ok(AreaCode::Alfa));
        assert_eq!(classify("81623456"), Ok(AreaCode::Touch));
        assert_eq!(classify("81923456"), Ok(AreaCode::NotApplicable));
        assert_eq!(classify("81023456"), Ok(AreaCode::NotApplicable));
        assert_eq!(classify("81523456"), Ok(AreaCode::NotApplicable));
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            classify("0123456"),
            Err(MasterDataError::InvalidLength {
                expected: 8,
                actual: 7
            })
        );
        assert!(matches!(
            classify("012345678"),
            Err(MasterDataError::InvalidLength { actual: 9, .. })
        ));
        assert!(matches!(
            classify(""),
            Err(MasterDataError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(
            classify("0123456a"),
            Err(MasterDataError::InvalidFormat("0123456a".to_string()))
        );
        assert!(matches!(classify("01-23456"), Err(MasterDataError::InvalidFormat(_))));
        assert!(matches!(classify("+9613123"), Err(MasterDataError::InvalidFormat(_))));
        assert!(matches!(classify("abc"), Err(MasterDataError::InvalidFormat(_))));
        // Arabic-Indic digits are not ASCII digits
        assert!(matches!(classify("٠١٢٣٤٥٦٧"), Err(MasterDataError::InvalidFormat(_))));
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(
            classify("99123456"),
            Err(MasterDataError::UnknownPrefix("99".to_string()))
        );
        assert_eq!(
            classify("00123456"),
            Err(MasterDataError::UnknownPrefix("00".to_string()))
        );
        assert!(matches!(classify("72123456"), Err(MasterDataError::UnknownPrefix(_))));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let first = classify("76234567");
        let second = classify("76234567");
        assert_eq!(first, second);
    }

    #[test]
    fn test_carrier_predicates() {
        assert_eq!(is_alfa("71034567"), Ok(true));
        assert_eq!(is_touch("71034567"), Ok(false));
        assert_eq!(is_touch("03034567"), Ok(true));
        assert_eq!(is_alfa("01234567"), Ok(false));
        assert_eq!(is_touch("01234567"), Ok(false));
    }

    #[test]
    fn test_carrier_predicates_propagate_errors() {
        assert!(matches!(is_alfa("0123456"), Err(MasterDataError::InvalidLength { .. })));
        assert!(matches!(is_touch("0123456a"), Err(MasterDataError::InvalidFormat(_))));
        assert!(matches!(is_touch("99123456"), Err(MasterDataError::UnknownPrefix(_))));
    }

    #[test]
    fn test_main_codes_are_unique() {
        for (i, (code, _)) in MAIN_CODES.iter().enumerate() {
            assert!(
                MAIN_CODES[i + 1..].iter().all(|(other, _)| other != code),
                "duplicate main code {:02}",
                code
            );
        }
    }

    #[test]
    fn test_band_digit_sets_are_disjoint() {
        for (code, rule) in MAIN_CODES.iter() {
            if let MainCodeRule::Band(table) = rule {
                let mut seen = [false; 10];
                for (digits, _) in table.rules() {
                    for d in digits.iter() {
                        assert!(!seen[*d as usize], "overlap in band {:02}", code);
                        seen[*d as usize] = true;
                    }
                }
            }
        }
    }

    #[test]
    fn test_phone_number_accessors() {
        let phone = PhoneNumber::parse("81623456").unwrap();
        assert_eq!(phone.main_code(), 81);
        assert_eq!(phone.secondary_code(), 6);
        assert_eq!(phone.to_string(), "81623456");

        let leading_zero: PhoneNumber = "03123456".parse().unwrap();
        assert_eq!(leading_zero.main_code(), 3);
        assert_eq!(leading_zero.to_string(), "03123456");
    }

    #[test]
    fn test_label_parses_back() {
        for area in AreaCode::ALL {
            assert_eq!(area.label().parse::<AreaCode>(), Ok(area));
        }
        assert!(matches!(
            "Zahle".parse::<AreaCode>(),
            Err(MasterDataError::UnknownLabel(_))
        ));
    }

    #[test]
    fn test_is_carrier() {
        assert!(AreaCode::Alfa.is_carrier());
        assert!(AreaCode::Touch.is_carrier());
        assert!(!AreaCode::NotApplicable.is_carrier());
        assert!(!AreaCode::Beirut.is_carrier());
    }
}
