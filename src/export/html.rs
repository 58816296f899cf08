use scraper::{ElementRef, Html, Selector};

use crate::export::table::{TableDocument, TableRow, TableSnapshot};

/// Parsed HTML page used as a table source.
///
/// There is no layout engine here, so a row's computed style is read from its
/// inline `style` attribute and the `hidden` attribute.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }
}

impl TableDocument for HtmlDocument {
    fn snapshot(&self, table_id: &str) -> Option<TableSnapshot> {
        let table_selector = Selector::parse("table").ok()?;
        let header_selector = Selector::parse("thead tr th").ok()?;

        let table = self
            .html
            .select(&table_selector)
            .find(|el| el.value().id() == Some(table_id))?;

        let headers = table.select(&header_selector).map(text_of).collect();
        let body = child_elements(table, "tbody")
            .next()
            .map(|tbody| child_elements(tbody, "tr").map(row_of).collect::<Vec<_>>());

        Some(TableSnapshot { headers, body })
    }
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}

fn row_of(tr: ElementRef<'_>) -> TableRow {
    let cells = tr
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .map(text_of)
        .collect();

    let style = tr.value().attr("style").unwrap_or_default();
    let mut display = inline_property(style, "display");
    if tr.value().attr("hidden").is_some() && display.is_none() {
        display = Some("none".to_string());
    }

    TableRow {
        cells,
        display,
        visibility: inline_property(style, "visibility"),
        classes: tr.value().classes().map(str::to_string).collect(),
    }
}

/// Rendered text: whitespace runs collapse to single spaces.
fn text_of(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Value of `property` in a style attribute; the last declaration wins.
fn inline_property(style: &str, property: &str) -> Option<String> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .filter(|(name, _)| name.trim().eq_ignore_ascii_case(property))
        .map(|(_, value)| {
            value
                .trim()
                .trim_end_matches("!important")
                .trim()
                .to_ascii_lowercase()
        })
        .last()
}
