use rust_xlsxwriter::*;

use crate::export::table::TableMatrix;

pub const SHEET_NAME: &str = "Sheet1";

const MIN_COLUMN_WIDTH: usize = 10;
const COLUMN_PADDING: usize = 2;

// ── Color palette ──
const HEADER_FILL: u32 = 0x808080; // Gray
const HEADER_BORDER: u32 = 0x000000; // Black
const STRIPE_FILL: u32 = 0xF3F6FF; // Light blue
const BODY_BORDER: u32 = 0xCCCCCC; // Light gray

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Header,
    Striped,
    Plain,
}

/// Style of the sheet row at `row` (0 is the header row).
pub fn row_style(row: usize) -> RowStyle {
    match row {
        0 => RowStyle::Header,
        r if r % 2 == 0 => RowStyle::Striped,
        _ => RowStyle::Plain,
    }
}

/// Longest cell per column (header included) with a floor, plus padding.
pub fn column_widths(matrix: &TableMatrix) -> Vec<usize> {
    let columns = matrix.all_rows().map(Vec::len).max().unwrap_or(0);
    (0..columns)
        .map(|col| {
            let longest = matrix
                .all_rows()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            longest.max(MIN_COLUMN_WIDTH) + COLUMN_PADDING
        })
        .collect()
}

fn format_for(style: RowStyle) -> Format {
    let base = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    match style {
        RowStyle::Header => base
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(HEADER_FILL))
            .set_pattern(FormatPattern::Solid)
            .set_border_color(Color::RGB(HEADER_BORDER)),
        RowStyle::Striped => base
            .set_background_color(Color::RGB(STRIPE_FILL))
            .set_pattern(FormatPattern::Solid)
            .set_border_color(Color::RGB(BODY_BORDER)),
        RowStyle::Plain => base.set_border_color(Color::RGB(BODY_BORDER)),
    }
}

/// Single-sheet workbook: styled header, striped rows, autofilter, frozen header.
pub fn build_workbook(matrix: &TableMatrix) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (r, cells) in matrix.all_rows().enumerate() {
        let format = format_for(row_style(r));
        for (c, text) in cells.iter().enumerate() {
            worksheet.write_string_with_format(r as u32, c as u16, text, &format)?;
        }
    }

    let widths = column_widths(matrix);
    for (c, width) in widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *width as f64)?;
    }

    // Freeze panes (header stays visible while scrolling)
    worksheet.set_freeze_panes(1, 0)?;

    if !widths.is_empty() {
        worksheet.autofilter(0, 0, matrix.rows.len() as u32, (widths.len() - 1) as u16)?;
    }

    Ok(workbook)
}

pub fn render(matrix: &TableMatrix) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = build_workbook(matrix)?;
    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> TableMatrix {
        TableMatrix {
            headers: vec!["#".into(), "Name".into(), "Institution".into()],
            rows: vec![
                vec!["1".into(), "Ada".into(), "University College London".into()],
                vec!["2".into(), "Grace".into(), "Yale".into()],
            ],
        }
    }

    #[test]
    fn header_then_alternating_stripes() {
        assert_eq!(row_style(0), RowStyle::Header);
        assert_eq!(row_style(1), RowStyle::Plain);
        assert_eq!(row_style(2), RowStyle::Striped);
        assert_eq!(row_style(3), RowStyle::Plain);
        assert_eq!(row_style(4), RowStyle::Striped);
    }

    #[test]
    fn widths_use_longest_cell_with_floor_and_padding() {
        assert_eq!(column_widths(&matrix()), vec![12, 12, 27]);
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        let m = TableMatrix {
            headers: vec!["Имя".into()],
            rows: vec![vec!["Александр Сергеевич".into()]],
        };
        assert_eq!(column_widths(&m), vec![21]);
    }

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        std::io::Read::read_to_string(&mut archive.by_name(name).unwrap(), &mut xml).unwrap();
        xml
    }

    fn style_of<'a>(sheet: &'a str, cell: &str) -> &'a str {
        let marker = format!("<c r=\"{}\" s=\"", cell);
        let start = sheet.find(&marker).unwrap() + marker.len();
        let len = sheet[start..].find('"').unwrap();
        &sheet[start..start + len]
    }

    #[test]
    fn workbook_carries_filter_frozen_header_and_palette() {
        let mut m = matrix();
        m.rows.push(vec!["3".into(), "Linus".into(), "Helsinki".into()]);
        let bytes = render(&m).unwrap();

        let sheet = part(&bytes, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains(r#"<autoFilter ref="A1:C4"/>"#));
        assert!(sheet.contains(r#"ySplit="1""#));
        assert!(sheet.contains(r#"state="frozen""#));

        let header = style_of(&sheet, "A1");
        let plain = style_of(&sheet, "A2");
        let striped = style_of(&sheet, "A3");
        assert_eq!(style_of(&sheet, "A4"), plain);
        assert_ne!(header, plain);
        assert_ne!(striped, plain);
        assert_ne!(striped, header);

        let styles = part(&bytes, "xl/styles.xml");
        for rgb in ["FF808080", "FFF3F6FF", "FF000000", "FFCCCCCC", "FFFFFFFF"] {
            assert!(styles.contains(&format!(r#"rgb="{}""#, rgb)), "missing {}", rgb);
        }
        assert!(styles.contains("<b/>"));
    }

    #[test]
    fn renders_a_zip_container() {
        let bytes = render(&matrix()).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }
}
