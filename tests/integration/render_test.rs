//! Integration tests for extraction and grid rendering

use docgrid::{render_html, Extraction, Grid, GridError, GridLimits, PositionedChar};

use super::helpers::load_fixture;

fn render(html: &str) -> Result<String, anyhow::Error> {
    let mut out = Vec::new();
    render_html(html, &GridLimits::default(), &mut out)?;
    Ok(String::from_utf8(out).expect("Grid output should be UTF-8"))
}

fn table(rows: &[(&str, &str, &str)]) -> String {
    let mut html = String::from("<table><tr><td>x</td><td>Character</td><td>y</td></tr>");
    for (x, c, y) in rows {
        html.push_str(&format!("<tr><td>{}</td><td>{}</td><td>{}</td></tr>", x, c, y));
    }
    html.push_str("</table>");
    html
}

#[test]
fn published_document_draws_letter() {
    let output = render(&load_fixture("published_doc.html")).unwrap();

    insta::assert_snapshot!(output.trim_end(), @r"
    █▀▀▀
    █▀▀
    █
    ");
}

#[test]
fn single_row_scenario() {
    let output = render(&table(&[("0", "H", "0"), ("1", "I", "0")])).unwrap();
    assert_eq!(output, "HI\n");
}

#[test]
fn two_row_scenario_flips_vertically() {
    let output = render(&table(&[("0", "A", "1"), ("2", "B", "0")])).unwrap();
    assert_eq!(output, "A\n  B\n");
}

#[test]
fn later_duplicate_overwrites_earlier() {
    let output = render(&table(&[("0", "A", "0"), ("1", "x", "0"), ("0", "B", "0")])).unwrap();
    assert_eq!(output, "Bx\n");
}

#[test]
fn empty_character_cell_collapses_its_column() {
    let output = render(&table(&[("0", "A", "0"), ("1", " ", "0"), ("2", "C", "0")])).unwrap();
    assert_eq!(output, "AC\n");
}

#[test]
fn bad_rows_do_not_stop_later_rows() {
    let mut out = Vec::new();
    let summary = render_html(&load_fixture("bad_rows.html"), &GridLimits::default(), &mut out)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "OK\n");
    assert_eq!(summary.cells_placed, 2);
    assert_eq!(summary.rows_skipped, 2);
    assert_eq!(summary.rows_rendered, 1);
}

#[test]
fn header_and_malformed_row_is_empty_result() {
    let err = render(&load_fixture("header_only.html")).unwrap_err();
    assert_eq!(err.downcast_ref::<GridError>(), Some(&GridError::Empty));
}

#[test]
fn document_without_table_is_empty_result() {
    let err = render("<html><body><p>Just prose.</p></body></html>").unwrap_err();
    assert_eq!(err.downcast_ref::<GridError>(), Some(&GridError::Empty));
}

#[test]
fn line_count_matches_highest_row() {
    let output = render(&table(&[("5", "a", "0"), ("0", "b", "6"), ("3", "c", "2")])).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "b");
    assert_eq!(lines[4], "   c");
    assert_eq!(lines[6], "     a");
    assert!(lines.iter().all(|line| line.chars().count() <= 6));
}

#[test]
fn extraction_and_grid_compose_directly() {
    let html = table(&[("1", "#", "1"), ("0", "#", "0")]);
    let extraction: Extraction = docgrid::extract_cells(&docgrid::parse_document(&html));

    assert_eq!(
        extraction.cells,
        vec![PositionedChar::new(1, 1, "#"), PositionedChar::new(0, 0, "#")]
    );

    let grid = Grid::from_cells(&extraction.cells, &GridLimits::default()).unwrap();
    assert_eq!(grid.to_string(), " #\n#\n");
}
