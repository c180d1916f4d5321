use crate::model::{Dataset, Picker};
use anyhow::{Context, Result};
use std::{collections::HashSet, fs, path::Path};

/// Roster of the December 2025 whiteboard, thirteen days per picker.
pub fn builtin_roster() -> Dataset {
    let rows: [(&str, [i64; 13]); 19] = [
        ("ABDUL", [10, 20, 7, 12, 12, 0, 0, 20, 25, 12, 17, 0, 24]),
        ("ANJAS", [9, 10, 6, 7, 0, 0, 34, 0, 18, 13, 8, 0, 4]),
        ("DENI", [17, 11, 10, 10, 0, 0, 0, 1, 8, 0, 6, 18, 0]),
        ("IQBAL", [3, 8, 7, 0, 6, 17, 9, 9, 0, 9, 3, 0, 13]),
        ("IMAM", [0, 1, 10, 13, 10, 0, 0, 8, 5, 7, 2, 19, 0]),
        ("JANUAR", [0, 2, 9, 17, 16, 0, 0, 5, 6, 18, 15, 50, 0]),
        ("JOSHUA", [0, 3, 10, 0, 6, 14, 0, 0, 4, 0, 4, 10, 3]),
        ("PRAHARA", [10, 7, 2, 9, 18, 0, 0, 16, 12, 5, 2, 25, 0]),
        ("RAFLI", [0, 8, 16, 0, 9, 27, 20, 0, 0, 5, 15, 26, 5]),
        ("REANDI", [16, 0, 3, 32, 7, 0, 0, 13, 25, 13, 3, 0, 0]),
        ("REDI", [0, 10, 30, 17, 12, 19, 36, 22, 13, 11, 12, 0, 2]),
        ("RIKI", [21, 0, 9, 19, 12, 13, 30, 0, 21, 0, 8, 25, 0]),
        ("RIFO", [0, 17, 29, 0, 13, 14, 35, 8, 11, 0, 0, 27, 6]),
        ("RYAN", [22, 14, 5, 6, 6, 0, 0, 12, 29, 10, 5, 15, 0]),
        ("ROBI", [0, 14, 0, 13, 6, 0, 0, 14, 0, 0, 4, 11, 11]),
        ("RIZKY", [0, 5, 0, 19, 10, 10, 15, 0, 11, 14, 4, 10, 16]),
        ("REXXY", [0, 5, 18, 13, 0, 0, 10, 21, 4, 0, 6, 0, 23]),
        ("SEPTI", [0, 0, 13, 5, 18, 20, 0, 0, 16, 9, 10, 0, 0]),
        ("WIWID", [0, 6, 0, 0, 7, 8, 15, 0, 3, 0, 0, 27, 2]),
    ];

    let pickers = rows
        .into_iter()
        .map(|(name, scores)| Picker::new(name, scores.to_vec()))
        .collect();

    Dataset::new(pickers)
}

/// Load a [`Dataset`] from a TOML file with one `[[pickers]]` table per picker.
///
/// # Errors
/// Returns an error if the file cannot be read or deserialized.
pub fn load_dataset<P: AsRef<Path>>(file: P) -> Result<Dataset> {
    let file = file.as_ref();
    let contents = fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

    parse_dataset(&contents).with_context(|| format!("failed to parse {file:?}"))
}

pub fn parse_dataset(contents: &str) -> Result<Dataset> {
    let dataset: Dataset = toml::from_str(contents).context("failed to deserialize dataset")?;
    Ok(dataset)
}

/// Log roster rows that do not match the expected shape.
///
/// Returns the number of rows that were flagged.
pub fn inspect_dataset(dataset: &Dataset, column_count: usize) -> usize {
    let mut seen = HashSet::new();
    let mut n_flagged = 0;

    for (i_row, picker) in dataset.pickers.iter().enumerate() {
        let mut flagged = false;

        if !seen.insert(picker.name.as_str()) {
            log::warn!("row {i_row}: duplicate picker name {:?}", picker.name);
            flagged = true;
        }

        let len = picker.scores.len();
        if len != column_count {
            log::warn!(
                "row {i_row}: picker {:?} has {len} scores, expected {column_count}",
                picker.name
            );
            flagged = true;
        }

        if flagged {
            n_flagged += 1;
        }
    }

    n_flagged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_roster_has_nineteen_full_rows() {
        let roster = builtin_roster();
        assert_eq!(roster.len(), 19);
        assert!(roster.pickers.iter().all(|p| p.scores.len() == 13));
        assert_eq!(inspect_dataset(&roster, 13), 0);
    }

    #[test]
    fn parses_pickers_tables() {
        let dataset = parse_dataset(
            r#"
[[pickers]]
name = "A"
scores = [10, 0, 20]

[[pickers]]
name = "B"
scores = []
"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.pickers[0], Picker::new("A", vec![10, 0, 20]));
        assert!(dataset.pickers[1].scores.is_empty());
    }

    #[test]
    fn empty_document_is_an_empty_roster() {
        let dataset = parse_dataset("").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn missing_scores_field_is_an_error() {
        assert!(parse_dataset("[[pickers]]\nname = \"A\"\n").is_err());
    }

    #[test]
    fn fractional_scores_are_rejected() {
        let err = parse_dataset("[[pickers]]\nname = \"A\"\nscores = [1.5, 2]\n").unwrap_err();
        assert!(format!("{err:#}").contains("failed to deserialize dataset"));
    }

    #[test]
    fn inspect_flags_duplicates_and_short_rows() {
        let dataset = Dataset::new(vec![
            Picker::new("A", vec![1, 2, 3]),
            Picker::new("A", vec![1, 2, 3]),
            Picker::new("B", vec![1]),
        ]);
        assert_eq!(inspect_dataset(&dataset, 3), 2);
    }
}
