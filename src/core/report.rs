use serde::Serialize;

const MISSING: &str = "N/A";

/// One row of the lab table pulled out of a report's extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabRow {
    pub test: String,
    pub result: String,
    pub reference_range: String,
}

/// Keeps lines that contain `(` and splits them on whitespace runs: first token
/// is the test, second the result, the rest the reference range.
///
/// Leading blanks are dropped before splitting, so an indented line keeps its
/// test name in the first column. A plain split on the separator regex would
/// yield an empty first token (shown as `N/A`) and shift every column right.
pub fn lab_rows(extracted_text: &str) -> Vec<LabRow> {
    extracted_text
        .split('\n')
        .filter(|line| line.contains('('))
        .map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            let or_missing = |s: Option<&&str>| s.map_or(MISSING.to_string(), |p| p.to_string());
            let rest = parts.get(2..).map(|r| r.join(" ")).unwrap_or_default();

            LabRow {
                test: or_missing(parts.first()),
                result: or_missing(parts.get(1)),
                reference_range: if rest.is_empty() { MISSING.to_string() } else { rest },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_without_parenthesis_are_skipped() {
        let text = "PATIENT REPORT\nHemoglobin 13.5 (12.0 - 15.5 g/dL)\nSigned by lab";
        let rows = lab_rows(text);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].test, "Hemoglobin");
        assert_eq!(rows[0].result, "13.5");
        assert_eq!(rows[0].reference_range, "(12.0 - 15.5 g/dL)");
    }

    #[test]
    fn test_short_lines_fill_missing_columns() {
        let rows = lab_rows("Glucose(fasting)\nTSH 2.1");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].test, "Glucose(fasting)");
        assert_eq!(rows[0].result, "N/A");
        assert_eq!(rows[0].reference_range, "N/A");
    }

    #[test]
    fn test_indented_line_keeps_columns() {
        let rows = lab_rows("   WBC\t\t7200   (4000   -   11000)");
        assert_eq!(rows[0].test, "WBC");
        assert_eq!(rows[0].result, "7200");
        assert_eq!(rows[0].reference_range, "(4000 - 11000)");
    }
}
