//! Italian regions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 20 Italian regions.
///
/// Serialized using the region's Italian name (e.g. `"Emilia-Romagna"`).
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Abruzzo")]
    Abruzzo,
    #[serde(rename = "Basilicata")]
    Basilicata,
    #[serde(rename = "Calabria")]
    Calabria,
    #[serde(rename = "Campania")]
    Campania,
    #[serde(rename = "Emilia-Romagna")]
    EmiliaRomagna,
    #[serde(rename = "Friuli-Venezia Giulia")]
    FriuliVeneziaGiulia,
    #[serde(rename = "Lazio")]
    Lazio,
    #[serde(rename = "Liguria")]
    Liguria,
    #[serde(rename = "Lombardia")]
    Lombardia,
    #[serde(rename = "Marche")]
    Marche,
    #[serde(rename = "Molise")]
    Molise,
    #[serde(rename = "Piemonte")]
    Piemonte,
    #[serde(rename = "Puglia")]
    Puglia,
    #[serde(rename = "Sardegna")]
    Sardegna,
    #[serde(rename = "Sicilia")]
    Sicilia,
    #[serde(rename = "Toscana")]
    Toscana,
    #[serde(rename = "Trentino-Alto Adige")]
    TrentinoAltoAdige,
    #[serde(rename = "Umbria")]
    Umbria,
    #[serde(rename = "Valle d'Aosta")]
    ValleDAosta,
    #[serde(rename = "Veneto")]
    Veneto,
}

impl Region {
    /// All regions in alphabetical order.
    pub const ALL: [Region; 20] = [
        Region::Abruzzo,
        Region::Basilicata,
        Region::Calabria,
        Region::Campania,
        Region::EmiliaRomagna,
        Region::FriuliVeneziaGiulia,
        Region::Lazio,
        Region::Liguria,
        Region::Lombardia,
        Region::Marche,
        Region::Molise,
        Region::Piemonte,
        Region::Puglia,
        Region::Sardegna,
        Region::Sicilia,
        Region::Toscana,
        Region::TrentinoAltoAdige,
        Region::Umbria,
        Region::ValleDAosta,
        Region::Veneto,
    ];

    /// Returns the Italian name of the region.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Abruzzo => "Abruzzo",
            Region::Basilicata => "Basilicata",
            Region::Calabria => "Calabria",
            Region::Campania => "Campania",
            Region::EmiliaRomagna => "Emilia-Romagna",
            Region::FriuliVeneziaGiulia => "Friuli-Venezia Giulia",
            Region::Lazio => "Lazio",
            Region::Liguria => "Liguria",
            Region::Lombardia => "Lombardia",
            Region::Marche => "Marche",
            Region::Molise => "Molise",
            Region::Piemonte => "Piemonte",
            Region::Puglia => "Puglia",
            Region::Sardegna => "Sardegna",
            Region::Sicilia => "Sicilia",
            Region::Toscana => "Toscana",
            Region::TrentinoAltoAdige => "Trentino-Alto Adige",
            Region::Umbria => "Umbria",
            Region::ValleDAosta => "Valle d'Aosta",
            Region::Veneto => "Veneto",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = String;

    /// Parses a region name, ignoring case, spaces, hyphens and apostrophes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn squash(value: &str) -> String {
            value
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect()
        }

        let wanted = squash(s);
        Region::ALL
            .iter()
            .copied()
            .find(|region| squash(region.name()) == wanted)
            .ok_or_else(|| format!("unknown region '{}'", s))
    }
}
