// Only used during testing so no need to return results

/// Builds an all-fields-quoted csv string, header first, matching the
/// dialect the extract tool reads and writes.
pub fn quoted_csv(rows: Vec<Vec<&str>>) -> String {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(vec![]);
    for row in rows {
        wtr.write_record(&row).unwrap();
    }
    wtr.flush().unwrap();
    String::from_utf8(wtr.into_inner().unwrap()).unwrap()
}

// Row order of the output files is not guaranteed. Headers are compared in
// place, data rows as unordered collections. This is used to ensure tests
// are not flaky
pub fn assert_unsorted_eq(actual: &str, expected: &str) {
    let mut actual_lines = actual.lines();
    let mut expected_lines = expected.lines();
    assert_eq!(
        actual_lines.next(),
        expected_lines.next(),
        "header rows differ"
    );

    let mut actual_rows: Vec<&str> = actual_lines.collect();
    let mut expected_rows: Vec<&str> = expected_lines.collect();
    actual_rows.sort_unstable();
    expected_rows.sort_unstable();
    assert_eq!(actual_rows, expected_rows);
}
