use crate::export::table::TableMatrix;
use crate::export::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfTableStyle {
    pub halign: HAlign,
    pub valign: VAlign,
    pub head_fill: [u8; 3],
    pub head_text: [u8; 3],
    pub head_bold: bool,
    /// Distance from the top of the page to the table, in document units.
    pub start_y: f32,
}

impl Default for PdfTableStyle {
    fn default() -> Self {
        Self {
            halign: HAlign::Center,
            valign: VAlign::Middle,
            head_fill: [128, 128, 128],
            head_text: [255, 255, 255],
            head_bold: true,
            start_y: 20.0,
        }
    }
}

/// What the renderer receives: one header band and the data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfTable {
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
    pub style: PdfTableStyle,
}

impl From<TableMatrix> for PdfTable {
    fn from(matrix: TableMatrix) -> Self {
        Self {
            head: matrix.headers,
            body: matrix.rows,
            style: PdfTableStyle::default(),
        }
    }
}

/// Table-layout engine that turns a [`PdfTable`] into PDF bytes.
///
/// Table drawing may be an optional capability of the engine; exports check
/// `supports_tables` right before rendering.
#[cfg_attr(test, mockall::automock)]
pub trait PdfTableRenderer {
    fn supports_tables(&self) -> bool;

    fn render_table(&mut self, table: &PdfTable) -> Result<Vec<u8>, ExportError>;
}
