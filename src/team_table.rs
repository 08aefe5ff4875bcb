use std::collections::HashMap;

/// Known team names (including spelling variants seen in the match sheets) and their codes.
const TEAM_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Al Hilal", "HIL"),
    ("Atlético de Madrid", "ATM"),
    ("Atletico Madrid", "ATM"),
    ("Auckland City", "AKL"),
    ("Auckland City FC", "AKL"),
    ("Boca Juniors", "BOC"),
    ("Borussia Dortmund", "BVB"),
    ("Botafogo", "BOT"),
    ("Chelsea", "CHE"),
    ("Chelsea FC", "CHE"),
    ("CF Monterrey", "MTY"),
    ("Monterrey", "MTY"),
    ("CF Pachuca", "PNC"),
    ("Pachuca", "PNC"),
    ("Espérance de Túnis", "EST"),
    ("Esperance de Tunis", "EST"),
    ("FC Bayern Munich", "BAY"),
    ("Bayern Munich", "BAY"),
    ("Batern Munich", "BAY"), // typo in the match sheets
    ("FC Porto", "POR"),
    ("Porto", "POR"),
    ("RB Salzburg", "SAL"),
    ("FC Salzburg", "SAL"),
    ("Flamengo", "FLA"),
    ("Fluminense", "FLU"),
    ("Inter Miami CF", "MIA"),
    ("Inter Milan", "INT"),
    ("Juventus", "JUV"),
    ("Juventus FC", "JUV"),
    ("Los Angeles FC", "LAF"),
    ("LAFC", "LAF"),
    ("Mamelodi Sundowns", "SUN"),
    ("Manchester City", "MCI"),
    ("Manchester City FC", "MCI"),
    ("Palmeiras", "PNL"),
    ("Paris Saint-Germain", "PSG"),
    ("Real Madrid", "RMA"),
    ("Real Madrid CF", "RMA"),
    ("River Plate", "RIV"),
    ("Seattle Sounders FC", "SEA"),
    ("SL Benfica", "BEN"),
    ("Benfica", "BEN"),
    ("Ulsan HD FC", "ULS"),
    ("Ulsan Hyundai", "ULS"),
    ("Urawa Red Diamonds", "URD"),
    ("Wydad AC", "WAC"),
];

/// Read-only lookup from full team name to its 3-letter code.
#[derive(Debug)]
pub struct TeamTable {
    codes: HashMap<&'static str, &'static str>,
}

impl Default for TeamTable {
    fn default() -> Self {
        TeamTable::from_entries(TEAM_ABBREVIATIONS)
    }
}

impl TeamTable {
    /// Builds a table from `(name, code)` pairs. A repeated name keeps its last code.
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        TeamTable {
            codes: entries.iter().copied().collect(),
        }
    }

    /// Exact, case-sensitive lookup. Callers trim the name first.
    #[inline]
    pub fn abbreviation(&self, name: &str) -> Option<&'static str> {
        self.codes.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }
}
