//! Text and CSV rendering for licence tables

use console::Style;
use licreplib::LicenceTable;

/// Spaces between columns in the text table
const COLUMN_GAP: usize = 2;

/// Compute column widths from headings and row content.
fn column_widths(table: &LicenceTable) -> (usize, usize, usize) {
    let mut index_width = table.headings[0].len();
    let mut licence_width = table.headings[1].len();
    let mut prod_key_width = table.headings[2].len();

    for row in &table.rows {
        index_width = index_width.max(row.index.to_string().len());
        licence_width = licence_width.max(row.licence.len());
        prod_key_width = prod_key_width.max(row.prod_key.len());
    }

    (index_width, licence_width, prod_key_width)
}

/// Render a licence table as padded text.
///
/// Title and headings are bold when writing to a terminal; the index column
/// is right-aligned, text columns left-aligned.
pub fn render_table(table: &LicenceTable) -> String {
    let heading_style = Style::new().bold();
    let (index_width, licence_width, prod_key_width) = column_widths(table);

    let mut output = format!("{}\n\n", heading_style.apply_to(&table.title));

    let headings = format!(
        "{:>iw$}  {:<lw$}  {}",
        table.headings[0],
        table.headings[1],
        table.headings[2],
        iw = index_width,
        lw = licence_width,
    );
    output.push_str(&format!("{}\n", heading_style.apply_to(headings)));
    output.push_str(&"-".repeat(index_width + licence_width + prod_key_width + 2 * COLUMN_GAP));
    output.push('\n');

    for row in &table.rows {
        output.push_str(&format!(
            "{:>iw$}  {:<lw$}  {}\n",
            row.index,
            row.licence,
            row.prod_key,
            iw = index_width,
            lw = licence_width,
        ));
    }

    output
}

/// Render a licence table as CSV with quoted text fields.
pub fn render_csv(table: &LicenceTable) -> String {
    let mut output = table.headings.join(",");
    output.push('\n');

    for row in &table.rows {
        output.push_str(&format!(
            "{},\"{}\",\"{}\"\n",
            row.index, row.licence, row.prod_key
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use licreplib::ProjectResults;

    fn sample_table() -> LicenceTable {
        let results = ProjectResults::from_json_str(
            r#"{"licenses": {"MIT": [{"prod_key": "rails"}, {"prod_key": "rack"}],
                             "Apache-2.0": [{"prod_key": "thrift"}]}}"#,
        )
        .unwrap();
        LicenceTable::from_results(&results)
    }

    #[test]
    fn test_render_table_contains_title_and_headings() {
        let rendered = render_table(&sample_table());
        assert!(rendered.contains("Licences"));
        assert!(rendered.contains("index"));
        assert!(rendered.contains("licence"));
        assert!(rendered.contains("product_keys"));
    }

    #[test]
    fn test_render_table_rows() {
        let rendered = render_table(&sample_table());
        let rows: Vec<&str> = rendered
            .lines()
            .filter(|l| l.contains("MIT") || l.contains("Apache-2.0"))
            .collect();

        assert_eq!(rows.len(), 3);
        // Index is right-aligned under a 5-char heading; licence column is
        // padded to the widest licence name
        assert_eq!(rows[0], "    1  MIT         rails");
        assert_eq!(rows[1], "    1  MIT         rack");
        assert_eq!(rows[2], "    2  Apache-2.0  thrift");
    }

    #[test]
    fn test_render_table_empty_rows() {
        let table = LicenceTable::new();
        let rendered = render_table(&table);

        assert!(rendered.contains("Licences"));
        assert!(rendered.contains("index"));
        // Headings plus separator, no data lines
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn test_render_csv() {
        let rendered = render_csv(&sample_table());
        assert_eq!(
            rendered,
            "index,licence,product_keys\n\
             1,\"MIT\",\"rails\"\n\
             1,\"MIT\",\"rack\"\n\
             2,\"Apache-2.0\",\"thrift\"\n"
        );
    }

    #[test]
    fn test_render_csv_empty_rows() {
        let rendered = render_csv(&LicenceTable::new());
        assert_eq!(rendered, "index,licence,product_keys\n");
    }
}
