use crate::export::ExportError;

/// Classes that hide a row regardless of its computed style.
pub const HIDDEN_CLASSES: [&str; 2] = ["hidden", "d-none"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Computed `display` value, if known.
    pub display: Option<String>,
    /// Computed `visibility` value, if known.
    pub visibility: Option<String>,
    pub classes: Vec<String>,
}

impl TableRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_display(mut self, display: &str) -> Self {
        self.display = Some(display.to_string());
        self
    }

    pub fn with_visibility(mut self, visibility: &str) -> Self {
        self.visibility = Some(visibility.to_string());
        self
    }

    pub fn is_visible(&self) -> bool {
        let display_none = self
            .display
            .as_deref()
            .is_some_and(|d| d.trim().eq_ignore_ascii_case("none"));
        let visibility_hidden = self
            .visibility
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("hidden"));
        let hidden_class = self
            .classes
            .iter()
            .any(|class| HIDDEN_CLASSES.contains(&class.as_str()));

        !(display_none || visibility_hidden || hidden_class)
    }
}

/// A table as read once at export time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSnapshot {
    pub headers: Vec<String>,
    /// `None` when the table has no body section.
    pub body: Option<Vec<TableRow>>,
}

/// Anything that can hand out table snapshots by element id.
pub trait TableDocument {
    fn snapshot(&self, table_id: &str) -> Option<TableSnapshot>;
}

/// Header row plus the visible data rows, ready for an encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMatrix {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableMatrix {
    /// Header row followed by data rows.
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        std::iter::once(&self.headers).chain(self.rows.iter())
    }
}

fn kept_columns(len: usize, exclude_last_column: bool) -> usize {
    if exclude_last_column {
        len.saturating_sub(1)
    } else {
        len
    }
}

/// Builds the export matrix from the visible rows of `snapshot`.
///
/// The last column is dropped from headers and rows when `exclude_last_column`
/// is set. The first column is renumbered 1..=n over the rows that survive the
/// visibility filter, so serials stay contiguous after client-side filtering.
pub fn extract(snapshot: &TableSnapshot, exclude_last_column: bool) -> Result<TableMatrix, ExportError> {
    let body = snapshot.body.as_ref().ok_or(ExportError::BodyNotFound)?;

    let header_len = kept_columns(snapshot.headers.len(), exclude_last_column);
    let headers = snapshot.headers[..header_len]
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let rows: Vec<Vec<String>> = body
        .iter()
        .filter(|row| row.is_visible())
        .enumerate()
        .map(|(index, row)| {
            let len = kept_columns(row.cells.len(), exclude_last_column);
            row.cells[..len]
                .iter()
                .enumerate()
                .map(|(col, text)| {
                    if col == 0 {
                        (index + 1).to_string()
                    } else {
                        text.trim().to_string()
                    }
                })
                .collect()
        })
        .collect();

    if rows.is_empty() {
        return Err(ExportError::NoVisibleRows);
    }

    Ok(TableMatrix { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(rows: Vec<TableRow>) -> TableSnapshot {
        TableSnapshot {
            headers: vec!["#".into(), "Name".into(), "Score".into(), "Actions".into()],
            body: Some(rows),
        }
    }

    fn row(serial: &str, name: &str) -> TableRow {
        TableRow::new([serial, name, "90", "Edit"])
    }

    #[test]
    fn drops_last_column_and_renumbers_visible_rows() {
        let snap = snapshot(vec![
            row("7", "Ada"),
            row("8", "Grace").with_class("d-none"),
            row("9", "Linus"),
        ]);

        let matrix = extract(&snap, true).unwrap();

        assert_eq!(matrix.headers, vec!["#", "Name", "Score"]);
        assert_eq!(
            matrix.rows,
            vec![vec!["1", "Ada", "90"], vec!["2", "Linus", "90"]]
        );
    }

    #[test]
    fn every_hiding_mechanism_excludes_the_row() {
        let snap = snapshot(vec![
            row("1", "shown"),
            row("2", "display").with_display("none"),
            row("3", "visibility").with_visibility("hidden"),
            row("4", "class").with_class("hidden"),
            row("5", "bootstrap").with_class("d-none"),
            row("6", "also shown").with_display("table-row").with_class("highlight"),
        ]);

        let matrix = extract(&snap, true).unwrap();
        let names: Vec<&str> = matrix.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(names, vec!["shown", "also shown"]);
        assert_eq!(matrix.rows[1][0], "2");
    }

    #[test]
    fn keeps_all_columns_when_exclusion_is_off() {
        let snap = snapshot(vec![row("1", "Ada")]);
        let matrix = extract(&snap, false).unwrap();
        assert_eq!(matrix.headers.len(), 4);
        assert_eq!(matrix.rows[0], vec!["1", "Ada", "90", "Edit"]);
    }

    #[test]
    fn all_visible_rows_are_kept() {
        let snap = snapshot((0..6).map(|n| row("x", &format!("r{n}"))).collect());
        let matrix = extract(&snap, true).unwrap();
        assert_eq!(matrix.rows.len(), 6);
        let serials: Vec<&str> = matrix.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(serials, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn no_visible_rows_is_reported() {
        let snap = snapshot(vec![row("1", "Ada").with_class("hidden")]);
        assert!(matches!(extract(&snap, true), Err(ExportError::NoVisibleRows)));

        let empty = snapshot(vec![]);
        assert!(matches!(extract(&empty, true), Err(ExportError::NoVisibleRows)));
    }

    #[test]
    fn missing_body_is_reported() {
        let snap = TableSnapshot {
            headers: vec!["#".into()],
            body: None,
        };
        assert!(matches!(extract(&snap, true), Err(ExportError::BodyNotFound)));
    }

    #[test]
    fn short_rows_do_not_panic() {
        let snap = snapshot(vec![TableRow::new(Vec::<String>::new()), TableRow::new(["only"])]);
        let matrix = extract(&snap, true).unwrap();
        assert_eq!(matrix.rows, vec![Vec::<String>::new(), Vec::<String>::new()]);
    }
}
