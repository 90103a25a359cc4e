use chrono::Datelike;

/// Academic seasons in their in-year presentation order (FALL opens the
/// academic year in every screen of the dashboard).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Fall,
    Spring,
    Summer,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Fall, Season::Spring, Season::Summer];

    pub fn token(self) -> &'static str {
        match self {
            Season::Fall => "FALL",
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Season::Fall => 1,
            Season::Spring => 2,
            Season::Summer => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Ascending),
            "desc" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Strict parse of `{SEASON}{2-digit-year}`, e.g. `FALL24` -> (24, 1).
/// Anything else is treated as an opaque observed value, not an error.
pub fn parse_term(s: &str) -> Option<(u8, u8)> {
    let season = Season::ALL
        .into_iter()
        .find(|sea| s.starts_with(sea.token()))?;
    let rest = &s[season.token().len()..];
    if rest.len() != 2 || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: u8 = rest.parse().ok()?;
    Some((year, season.rank()))
}

fn format_term(season: Season, year: i32) -> String {
    format!("{}{:02}", season.token(), year.rem_euclid(100))
}

// Unparsable terms sort after every well-formed term, by string, so the
// universe order stays total no matter what the live data contains.
fn sort_key(s: &str) -> (u8, u8, u8, String) {
    match parse_term(s) {
        Some((year, rank)) => (0, year, rank, String::new()),
        None => (1, 0, 0, s.to_string()),
    }
}

/// Builds the semester dropdown universe: FALL/SPRING/SUMMER for each year
/// in `[reference_year - 2, reference_year + 2]`, unioned with any terms
/// observed in live data, deduplicated by exact string equality and sorted
/// by (year, season rank). Observed terms are carried verbatim.
pub fn generate(reference_year: i32, observed: &[String], order: SortOrder) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(15 + observed.len());
    for year in (reference_year - 2)..=(reference_year + 2) {
        for season in Season::ALL {
            terms.push(format_term(season, year));
        }
    }
    for t in observed {
        terms.push(t.clone());
    }

    terms.sort_by_cached_key(|t| sort_key(t));
    terms.dedup();
    if order == SortOrder::Descending {
        terms.reverse();
    }
    terms
}

/// Current calendar year, used when a caller passes no reference year.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Best-effort extraction of `semester` fields from an array of course
/// records as returned by the backend. Records missing the field are
/// skipped; a non-array payload is a caller mistake worth reporting.
pub fn observed_terms(records: &serde_json::Value) -> anyhow::Result<Vec<String>> {
    let rows = records
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("expected an array of course records"))?;
    let mut out = Vec::new();
    for row in rows {
        if let Some(t) = row.get("semester").and_then(|v| v.as_str()) {
            if !t.is_empty() {
                out.push(t.to_string());
            }
        }
    }
    Ok(out)
}
