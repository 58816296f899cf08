//! Export of the visible part of a table to `.xlsx` or `.pdf`.
//!
//! Both formats share [`table::extract`]. Precondition failures are reported to
//! a [`Notifier`] and end the export without writing anything.

pub mod html;
pub mod pdf;
pub mod table;
pub mod xlsx;

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::export::html::HtmlDocument;
use crate::export::pdf::{PdfTable, PdfTableRenderer};
use crate::export::table::{TableDocument, TableMatrix};

pub const DEFAULT_FILE_STEM: &str = "exported_table";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Table not found!")]
    TableNotFound,

    #[error("Table body not found!")]
    BodyNotFound,

    #[error("No visible data to export!")]
    NoVisibleRows,

    #[error("PDF table renderer is not available.")]
    RendererUnavailable,

    #[error("Excel export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF export error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ExportError::TableNotFound
                | ExportError::BodyNotFound
                | ExportError::NoVisibleRows
                | ExportError::RendererUnavailable
        )
    }
}

/// User-facing notices raised by an export.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Sends notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        warn!(target: "export", "{}", message);
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// File name without extension; `exported_table` when absent or empty.
    pub filename: Option<String>,
    /// Drops the trailing column, which normally holds row action controls.
    pub exclude_last_column: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filename: None,
            exclude_last_column: true,
        }
    }
}

impl ExportOptions {
    pub fn named(filename: &str) -> Self {
        Self {
            filename: Some(filename.to_string()),
            ..Self::default()
        }
    }

    pub fn file_name(&self, extension: &str) -> String {
        let stem = self
            .filename
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILE_STEM);
        format!("{}.{}", stem, extension)
    }
}

#[derive(Debug)]
pub enum ExportOutcome {
    Written(PathBuf),
    /// Nothing was written; the notice has already been delivered.
    Aborted(ExportError),
}

impl ExportOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Written(path) => Some(path),
            ExportOutcome::Aborted(_) => None,
        }
    }
}

pub struct TableExporter<N = LogNotifier> {
    output_dir: PathBuf,
    notifier: N,
}

impl TableExporter<LogNotifier> {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_notifier(output_dir, LogNotifier)
    }
}

impl<N: Notifier> TableExporter<N> {
    pub fn with_notifier(output_dir: impl Into<PathBuf>, notifier: N) -> Self {
        Self {
            output_dir: output_dir.into(),
            notifier,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn export_table_to_excel<D>(
        &self,
        document: &D,
        table_id: &str,
        options: &ExportOptions,
    ) -> ExportOutcome
    where
        D: TableDocument + ?Sized,
    {
        let result = read_matrix(document, table_id, options).and_then(|matrix| {
            let bytes = xlsx::render(&matrix)?;
            self.write(&options.file_name("xlsx"), &bytes)
        });
        self.finish(result)
    }

    pub fn export_table_to_pdf<D, R>(
        &self,
        document: &D,
        renderer: &mut R,
        table_id: &str,
        options: &ExportOptions,
    ) -> ExportOutcome
    where
        D: TableDocument + ?Sized,
        R: PdfTableRenderer + ?Sized,
    {
        let result = read_matrix(document, table_id, options).and_then(|matrix| {
            if !renderer.supports_tables() {
                return Err(ExportError::RendererUnavailable);
            }
            let bytes = renderer.render_table(&PdfTable::from(matrix))?;
            self.write(&options.file_name("pdf"), &bytes)
        });
        self.finish(result)
    }

    pub fn export_html_table_to_excel(
        &self,
        html: &str,
        table_id: &str,
        options: &ExportOptions,
    ) -> ExportOutcome {
        self.export_table_to_excel(&HtmlDocument::parse(html), table_id, options)
    }

    pub fn export_html_table_to_pdf<R>(
        &self,
        html: &str,
        renderer: &mut R,
        table_id: &str,
        options: &ExportOptions,
    ) -> ExportOutcome
    where
        R: PdfTableRenderer + ?Sized,
    {
        self.export_table_to_pdf(&HtmlDocument::parse(html), renderer, table_id, options)
    }

    /// Writes through a temporary sibling so a failed export leaves no partial file.
    fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        let path = self.output_dir.join(file_name);
        let mut tmp = NamedTempFile::new_in(&self.output_dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(path)
    }

    fn finish(&self, result: Result<PathBuf, ExportError>) -> ExportOutcome {
        match result {
            Ok(path) => {
                info!(target: "export", path = %path.display(), "table exported");
                ExportOutcome::Written(path)
            }
            Err(err) => {
                self.notifier.notify(&err.to_string());
                ExportOutcome::Aborted(err)
            }
        }
    }
}

fn read_matrix<D>(
    document: &D,
    table_id: &str,
    options: &ExportOptions,
) -> Result<TableMatrix, ExportError>
where
    D: TableDocument + ?Sized,
{
    let snapshot = document
        .snapshot(table_id)
        .ok_or(ExportError::TableNotFound)?;
    table::extract(&snapshot, options.exclude_last_column)
}
