//! Letter grade scale
//!
//! The grade scale is the fixed knowledge base of the advisor: thirteen letter
//! symbols, each mapped to a numeric weight in [1.0, 4.0]. The mapping is a
//! process-wide constant and is never mutated at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grade weight below which a course is flagged as needing attention.
/// Everything under the C+ tier qualifies.
pub const LOW_GRADE_THRESHOLD: f64 = 2.75;

/// A letter grade on the thirteen-symbol scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// A (4.0)
    A,
    /// A- (3.75)
    AMinus,
    /// B+ (3.5)
    BPlus,
    /// B (3.25)
    B,
    /// B- (3.0)
    BMinus,
    /// C+ (2.75)
    CPlus,
    /// C (2.5)
    C,
    /// C- (2.25)
    CMinus,
    /// D+ (2.0)
    DPlus,
    /// D (1.75)
    D,
    /// D- (1.5)
    DMinus,
    /// E+ (1.25)
    EPlus,
    /// E (1.0)
    E,
}

impl Grade {
    /// Every grade symbol, ordered from highest weight to lowest
    pub const ALL: [Self; 13] = [
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::EPlus,
        Self::E,
    ];

    /// Numeric weight of this grade on the 4.0 scale
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::AMinus => 3.75,
            Self::BPlus => 3.5,
            Self::B => 3.25,
            Self::BMinus => 3.0,
            Self::CPlus => 2.75,
            Self::C => 2.5,
            Self::CMinus => 2.25,
            Self::DPlus => 2.0,
            Self::D => 1.75,
            Self::DMinus => 1.5,
            Self::EPlus => 1.25,
            Self::E => 1.0,
        }
    }

    /// The letter symbol as written on a transcript (e.g., "A-", "C+")
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::EPlus => "E+",
            Self::E => "E",
        }
    }

    /// Whether this grade falls below the flagging threshold (under C+)
    #[must_use]
    pub fn is_low(self) -> bool {
        self.weight() < LOW_GRADE_THRESHOLD
    }
}

impl FromStr for Grade {
    type Err = String;

    /// Parse a grade symbol. Unknown symbols are a hard error, never coerced
    /// to a default weight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "A-" => Ok(Self::AMinus),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "B-" => Ok(Self::BMinus),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "C-" => Ok(Self::CMinus),
            "D+" => Ok(Self::DPlus),
            "D" => Ok(Self::D),
            "D-" => Ok(Self::DMinus),
            "E+" => Ok(Self::EPlus),
            "E" => Ok(Self::E),
            _ => Err(format!("Unknown grade symbol: '{s}'")),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_span_the_scale() {
        assert!((Grade::A.weight() - 4.0).abs() < f64::EPSILON);
        assert!((Grade::BMinus.weight() - 3.0).abs() < f64::EPSILON);
        assert!((Grade::E.weight() - 1.0).abs() < f64::EPSILON);

        for grade in Grade::ALL {
            assert!(grade.weight() >= 1.0 && grade.weight() <= 4.0);
        }
    }

    #[test]
    fn parses_all_symbols_round_trip() {
        for grade in Grade::ALL {
            let parsed: Grade = grade.symbol().parse().expect("known symbol");
            assert_eq!(parsed, grade);
        }
    }

    #[test]
    fn parsing_is_case_and_whitespace_tolerant() {
        assert_eq!(" b+ ".parse::<Grade>(), Ok(Grade::BPlus));
        assert_eq!("a-".parse::<Grade>(), Ok(Grade::AMinus));
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert!("F".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
        assert!("A+".parse::<Grade>().is_err());
    }

    #[test]
    fn low_grade_boundary_excludes_c_plus() {
        assert!(!Grade::CPlus.is_low());
        assert!(Grade::C.is_low());
        assert!(Grade::E.is_low());
    }
}
