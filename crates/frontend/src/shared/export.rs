//! Export of the current list page to CSV / Excel
use super::crud::view_model::ListViewModel;
use super::format::cell_text;
use super::html::escape_html;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const CSV_MIME: &str = "text/csv;charset=utf-8;";
const EXCEL_MIME: &str = "application/vnd.ms-excel;charset=utf-8;";

/// CSV with `;` separator and a UTF-8 BOM so Excel keeps the accents
pub fn build_csv(vm: &ListViewModel) -> String {
    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = vm.columns.iter().map(|c| escape_csv_cell(c.label)).collect();
    csv_content.push_str(&headers.join(";"));
    csv_content.push('\n');

    for row in &vm.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| escape_csv_cell(&cell_text(cell)))
            .collect();
        csv_content.push_str(&cells.join(";"));
        csv_content.push('\n');
    }

    csv_content
}

/// HTML table Excel opens as a spreadsheet. Every value is escaped.
pub fn build_excel_html(vm: &ListViewModel, title: &str) -> String {
    let mut html = String::from(
        "<html><head><meta charset=\"utf-8\"></head><body>",
    );
    html.push_str(&format!("<h3>{}</h3><table border=\"1\"><thead><tr>", escape_html(Some(title))));
    for column in &vm.columns {
        html.push_str(&format!("<th>{}</th>", escape_html(Some(column.label))));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &vm.rows {
        html.push_str("<tr>");
        for cell in &row.cells {
            html.push_str(&format!("<td>{}</td>", escape_html(Some(cell_text(cell)))));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></body></html>");
    html
}

pub fn export_to_csv(vm: &ListViewModel, filename: &str) -> Result<(), String> {
    if vm.is_empty() {
        return Err("Nenhum dado para exportar".to_string());
    }
    let blob = create_blob(&build_csv(vm), CSV_MIME)?;
    download_blob(&blob, filename)
}

pub fn export_to_excel(vm: &ListViewModel, title: &str, filename: &str) -> Result<(), String> {
    if vm.is_empty() {
        return Err("Nenhum dado para exportar".to_string());
    }
    let blob = create_blob(&build_excel_html(vm, title), EXCEL_MIME)?;
    download_blob(&blob, filename)
}

/// Quote a CSV cell holding the separator, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Trigger a browser download of the blob
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
