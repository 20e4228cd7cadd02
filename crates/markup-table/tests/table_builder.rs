//! Integration tests for the table builder

use markup_table::{RowSource, Table, TableError, VecRowSource};

#[test]
fn demo_table_end_to_end() {
    let mut table =
        Table::with_header(5, &["Head1", "Head2", "Head3", "Head4", "Head5"]).unwrap();
    let _ = table.add_row(&["a1", "b1", "c1", "d1", ""]).unwrap();
    let _ = table.add_row(&["a2", "b2", "c2", "d2", "e2"]).unwrap();
    let _ = table.add_row(&["a3", "b3", "c3", "d3", "e3"]).unwrap();
    let _ = table.add_row(&["a4", "b4", "c4", "d4", "e4"]).unwrap();
    let _ = table.add_spanning_row("Spanning row");
    let _ = table.insert_spanning_header_row(0, "Part 1");
    let _ = table.insert_spanning_header_row(4, "Part 2");
    table.add_attribute("border", "2");

    assert_eq!(table.row_count(), 7);
    let markup = table.render();
    assert!(markup.starts_with("<table border=\"2\">"));
    // Main header precedes the body, including the row inserted at 0.
    let head = markup.find("<th>Head1</th>").unwrap();
    let part1 = markup.find("Part 1").unwrap();
    assert!(head < part1);
    assert!(markup.contains("<td colspan=\"5\">Spanning row</td>"));
}

#[test]
fn spec_scenario_three_columns() {
    let mut table = Table::with_header(3, &["A", "B", "C"]).unwrap();

    assert_eq!(
        table.add_row(&["1", "2"]),
        Err(TableError::ColumnCountMismatch {
            expected: 3,
            got: 2
        })
    );
    assert_eq!(table.row_count(), 0);

    assert_eq!(table.add_row(&["1", "2", "3"]), Ok(1));
    assert_eq!(table.row_count(), 1);
}

#[test]
fn double_render_emits_header_once_each() {
    let mut table = Table::with_header(2, &["A", "B"]).unwrap();
    let _ = table.add_row(&["1", "2"]).unwrap();

    let first = table.render();
    let second = table.render();
    assert_eq!(first, second);
    assert_eq!(second.matches("<th>A</th>").count(), 1);
}

#[test]
fn rows_can_be_styled_individually() {
    let mut source = VecRowSource::new(["Class", "Instructor"]);
    source.push_row(["ECE 201", "Smith"]);
    source.push_row(["ECE 315", "Jones"]);
    source.push_row(["ECE 440", "Lee"]);
    let mut table = Table::from_row_source(&source).unwrap();

    for index in 0..table.row_count() {
        if index % 2 == 0 {
            let row = table.row_mut(index).unwrap();
            let _ = row.add_attribute("style", "background-color: #ddd;");
        }
    }

    let markup = table.render();
    assert_eq!(
        markup.matches("style=\"background-color: #ddd;\"").count(),
        2
    );
}

#[test]
fn custom_row_source_implementation() {
    struct Fixed;
    impl RowSource for Fixed {
        fn column_names(&self) -> Vec<String> {
            vec!["N".to_string()]
        }
        fn rows(&self) -> Vec<Vec<String>> {
            vec![vec!["1".to_string()], vec!["2".to_string()]]
        }
    }

    let table = Table::from_row_source(&Fixed).unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.header_strings(), Some(vec!["N".to_string()]));
}
