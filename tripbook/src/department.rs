//! Bolivia's nine departments.
//!
//! Reservations refer to "cities", which in this domain are the nine
//! first-level departments. Parsing is case-insensitive and tolerates missing
//! accents, so `"potosi"` resolves to [`Department::Potosi`]. The department
//! name `"Chuquisaca"` resolves to [`Department::Sucre`], which is always
//! displayed by its capital's name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A Bolivian department.
///
/// # Examples
///
/// ```
/// use tripbook::Department;
///
/// let dept: Department = "santa cruz".parse().unwrap();
/// assert_eq!(dept, Department::SantaCruz);
/// assert_eq!(dept.to_string(), "Santa Cruz");
/// assert!("Lima".parse::<Department>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    /// La Paz.
    #[serde(rename = "La Paz")]
    LaPaz,
    /// Santa Cruz.
    #[serde(rename = "Santa Cruz")]
    SantaCruz,
    /// Cochabamba.
    Cochabamba,
    /// Chuquisaca, named after its capital Sucre. Parses from either name.
    #[serde(alias = "Chuquisaca")]
    Sucre,
    /// Potosí.
    #[serde(rename = "Potosí")]
    Potosi,
    /// Oruro.
    Oruro,
    /// Tarija.
    Tarija,
    /// Beni.
    Beni,
    /// Pando.
    Pando,
}

impl Department {
    /// All departments in their conventional listing order.
    pub const ALL: [Self; 9] = [
        Self::LaPaz,
        Self::SantaCruz,
        Self::Cochabamba,
        Self::Sucre,
        Self::Potosi,
        Self::Oruro,
        Self::Tarija,
        Self::Beni,
        Self::Pando,
    ];

    /// Alternative spellings accepted when parsing.
    const ALIASES: [(&'static str, Self); 1] = [("Chuquisaca", Self::Sucre)];

    /// Returns the canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LaPaz => "La Paz",
            Self::SantaCruz => "Santa Cruz",
            Self::Cochabamba => "Cochabamba",
            Self::Sucre => "Sucre",
            Self::Potosi => "Potosí",
            Self::Oruro => "Oruro",
            Self::Tarija => "Tarija",
            Self::Beni => "Beni",
            Self::Pando => "Pando",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercases, strips accents, and collapses inner whitespace.
fn fold(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| match c {
                    'á' | 'Á' => 'a',
                    'é' | 'É' => 'e',
                    'í' | 'Í' => 'i',
                    'ó' | 'Ó' => 'o',
                    'ú' | 'Ú' | 'ü' | 'Ü' => 'u',
                    other => other.to_ascii_lowercase(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl FromStr for Department {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold(s);
        Self::ALL
            .into_iter()
            .map(|dept| (dept.name(), dept))
            .chain(Self::ALIASES)
            .find(|(name, _)| fold(name) == folded)
            .map(|(_, dept)| dept)
            .ok_or_else(|| ValidationError {
                field: "department".into(),
                message: format!(
                    "'{}' is not a Bolivian department (expected one of: {})",
                    s.trim(),
                    Self::ALL.map(Self::name).join(", ")
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for dept in Department::ALL {
            assert_eq!(dept.name().parse::<Department>().unwrap(), dept);
        }
    }

    #[test]
    fn test_parse_is_case_and_accent_insensitive() {
        assert_eq!("POTOSI".parse::<Department>().unwrap(), Department::Potosi);
        assert_eq!("potosí".parse::<Department>().unwrap(), Department::Potosi);
        assert_eq!("  la   paz ".parse::<Department>().unwrap(), Department::LaPaz);
    }

    #[test]
    fn test_department_name_parses_to_capital() {
        for input in ["Chuquisaca", "chuquisaca", " CHUQUISACA "] {
            assert_eq!(input.parse::<Department>().unwrap(), Department::Sucre);
        }
        assert_eq!(Department::Sucre.to_string(), "Sucre");

        let back: Department = serde_json::from_str("\"Chuquisaca\"").unwrap();
        assert_eq!(back, Department::Sucre);
        assert_eq!(serde_json::to_string(&back).unwrap(), "\"Sucre\"");
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Uyuni".parse::<Department>().unwrap_err();
        assert_eq!(err.field, "department");
        assert!(err.message.contains("Uyuni"));
        assert!(err.message.contains("Potosí"));
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Department::SantaCruz).unwrap();
        assert_eq!(json, "\"Santa Cruz\"");
        let back: Department = serde_json::from_str("\"Potosí\"").unwrap();
        assert_eq!(back, Department::Potosi);
    }
}
