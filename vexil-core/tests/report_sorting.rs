//! End-to-end sorting behavior through the public API, as the CLI uses it.

use vexil_core::{ReportDocument, TableLocator};
use vexil_model::SortMode;

fn violation_row(priority: &str, rule: &str, path: &str) -> String {
    format!(
        "    <tr class=\"violationRow\">\n      \
         <td class=\"number\">7</td>\n      \
         <td class=\"pathColumn\">{path}</td>\n      \
         <td class=\"priority{priority} priorityColumn\">{priority}</td>\n      \
         <td class=\"ruleColumn\">{rule}</td>\n    </tr>"
    )
}

fn sample_report(rows: &[String]) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Violations Report</title>\n\
         <style>\n  .priorityColumn {{ text-align: center; }}\n</style>\n\
         <script>\n  function compare(a, b) {{ return a < b; }}\n</script>\n\
         </head>\n<body>\n<h1>Report</h1>\n\
         <table id=\"violationsTable\" class=\"report\">\n\
         <thead>\n<tr><th>#</th><th>File</th><th>Priority</th><th>Rule</th></tr>\n</thead>\n\
         <tbody>\n{}\n</tbody>\n</table>\n</body>\n</html>\n",
        rows.join("\n")
    )
}

fn standard_rows() -> Vec<String> {
    vec![
        violation_row("2", "UnusedImport", "src/main/App.groovy"),
        violation_row("1", "EmptyCatchBlock", "src/main/Service.groovy"),
        violation_row("3", "UnusedImport", "src/main/App.groovy"),
        violation_row("2", "DuplicateImport", "src/main/App.groovy"),
        violation_row("1", "UnusedImport", "src/test/AppTest.groovy"),
    ]
}

fn parsed(rows: &[String]) -> ReportDocument {
    ReportDocument::parse(&sample_report(rows), &TableLocator::default())
        .expect("sample report should parse")
}

#[test]
fn parsing_keeps_the_document_byte_identical() {
    let source = sample_report(&standard_rows());
    let doc = ReportDocument::parse(&source, &TableLocator::default()).unwrap();
    assert_eq!(doc.to_html(), source);
}

#[test]
fn priority_order_is_ascending_text_over_adjacent_rows() {
    let mut doc = parsed(&standard_rows());
    doc.sort(SortMode::Priority).unwrap();
    let values: Vec<&str> = doc.rows().iter().map(|r| r.priority().unwrap()).collect();
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "{:?} out of order", pair);
    }
}

#[test]
fn rule_frequency_order_is_ascending_count_over_adjacent_rows() {
    let mut doc = parsed(&standard_rows());
    let counts = doc.rule_counts();
    doc.sort(SortMode::RuleFrequency).unwrap();
    let ordered: Vec<u32> = doc
        .rows()
        .iter()
        .map(|r| counts[r.rule().unwrap()])
        .collect();
    for pair in ordered.windows(2) {
        assert!(pair[0] <= pair[1], "counts {:?} out of order", pair);
    }
}

#[test]
fn rule_name_order_is_descending_text_over_adjacent_rows() {
    let mut doc = parsed(&standard_rows());
    doc.sort(SortMode::RuleName).unwrap();
    let names: Vec<&str> = doc.rows().iter().map(|r| r.rule().unwrap()).collect();
    for pair in names.windows(2) {
        assert!(pair[0] >= pair[1], "{:?} out of order", pair);
    }
}

#[test]
fn file_order_follows_the_composite_key() {
    let mut doc = parsed(&standard_rows());
    let counts = doc.file_counts();
    doc.sort(SortMode::File).unwrap();
    let keys: Vec<String> = doc
        .rows()
        .iter()
        .map(|r| {
            let path = r.path().unwrap();
            let priority: i64 = r.priority().unwrap().parse().unwrap();
            format!("{} {} {}", counts[path], path, 100 - priority)
        })
        .collect();
    for pair in keys.windows(2) {
        assert!(pair[0] <= pair[1], "{:?} out of order", pair);
    }
}

#[test]
fn repeating_a_sort_changes_nothing() {
    let mut doc = parsed(&standard_rows());
    doc.sort(SortMode::RuleFrequency).unwrap();
    let first = doc.to_html();
    doc.sort(SortMode::RuleFrequency).unwrap();
    assert_eq!(doc.to_html(), first);
}

#[test]
fn sorted_output_reparses_to_the_same_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");
    std::fs::write(&path, sample_report(&standard_rows())).unwrap();

    let mut doc = ReportDocument::from_file(&path, &TableLocator::default()).unwrap();
    doc.sort(SortMode::File).unwrap();
    std::fs::write(&path, doc.to_html()).unwrap();

    let reparsed = ReportDocument::from_file(&path, &TableLocator::default()).unwrap();
    let before: Vec<_> = doc.rows().iter().map(|r| r.fragment().to_string()).collect();
    let after: Vec<_> = reparsed.rows().iter().map(|r| r.fragment().to_string()).collect();
    assert_eq!(before, after);
}
