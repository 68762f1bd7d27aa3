use serde::Serialize;

use super::Key;

/// Column every personalization file must carry
pub const PROFILE_COLUMN: &str = "profile_id";

/// User-to-item picks
///
/// The export pipeline decides which item columns to include, so the table
/// keeps them as an ordered header plus one value per column. The profile
/// column is split out at load time and is never part of `columns`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PersonalizationTable {
    pub columns: Vec<String>,
    pub rows: Vec<PersonalizedPick>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PersonalizedPick {
    pub profile_id: Key,
    pub values: Vec<String>,
}

impl PersonalizationTable {
    /// Builds the table from a header and its records
    ///
    /// Fails with the reason when the header lacks `profile_id` or a record
    /// has a different width than the header.
    pub fn from_records<H, R, I>(header: H, records: I) -> Result<Self, String>
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
        I: IntoIterator<Item = R>,
    {
        let header: Vec<String> = header.into_iter().map(|h| h.as_ref().trim().to_string()).collect();
        let profile_idx = header
            .iter()
            .position(|h| h == PROFILE_COLUMN)
            .ok_or_else(|| format!("missing column `{}`", PROFILE_COLUMN))?;

        let columns = header
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != profile_idx)
            .map(|(_, h)| h.clone())
            .collect();

        let mut rows = Vec::new();
        for (line, record) in records.into_iter().enumerate() {
            let mut cells: Vec<String> = record.into_iter().map(|c| c.as_ref().to_string()).collect();
            if cells.len() != header.len() {
                return Err(format!(
                    "record {} has {} fields, expected {}",
                    line + 1,
                    cells.len(),
                    header.len()
                ));
            }
            let profile_id = Key::new(cells.remove(profile_idx));
            rows.push(PersonalizedPick {
                profile_id,
                values: cells,
            });
        }

        Ok(Self { columns, rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Picks for one profile, in file order
    pub fn picks_for<'a>(&'a self, profile: &'a Key) -> impl Iterator<Item = &'a PersonalizedPick> {
        self.rows.iter().filter(move |r| &r.profile_id == profile)
    }
}
