use htmldom::{Document, DomError, Element};
use trestle::{Cell, Column, Row, SortDirection, TableController, TableError};

fn grid_doc() -> (Document, TableController) {
    let doc = Document::with_root(Element::new("body").child(Element::table().id("grid")));
    let table = TableController::attach(&doc, "#grid").unwrap();
    (doc, table)
}

fn name_age_header() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(true),
        Column::new("age", "Age").sortable(true),
    ]
}

fn people() -> Vec<Row> {
    vec![
        Row::new().cell("name", "Bob").cell("age", "30"),
        Row::new().cell("name", "Ann").cell("age", "5"),
    ]
}

fn names(table: &TableController) -> Vec<String> {
    table
        .rows()
        .iter()
        .map(|row| row.value("name").unwrap_or_default().to_string())
        .collect()
}

fn marker(doc: &Document, id: &str) -> Option<String> {
    doc.with_selected(&format!("#{id}"), |el| {
        if el.has_class("ascending") {
            Some("ascending".to_string())
        } else if el.has_class("descending") {
            Some("descending".to_string())
        } else {
            None
        }
    })
    .unwrap()
}

#[test]
fn test_attach_requires_existing_container() {
    let doc = Document::new();

    match TableController::attach(&doc, "#grid") {
        Err(TableError::ContainerNotFound(selector)) => assert_eq!(selector, "#grid"),
        other => panic!("expected missing container, got {other:?}"),
    }
}

#[test]
fn test_header_renders_cells_in_order() {
    let (doc, table) = grid_doc();

    table.set_header(name_age_header()).unwrap();

    assert_eq!(
        doc.html(),
        concat!(
            r#"<body><table id="grid"><thead><tr>"#,
            r#"<th id="name" sortable data-id="name">Name</th>"#,
            r#"<th id="age" sortable data-id="age">Age</th>"#,
            r#"</tr></thead></table></body>"#,
        )
    );
}

#[test]
fn test_non_sortable_column_has_no_marker_attribute() {
    let (doc, table) = grid_doc();

    table
        .set_header(vec![Column::new("notes", "Notes")])
        .unwrap();

    assert!(doc
        .with_selected("#notes", |el| !el.has_attr("sortable"))
        .unwrap());
}

#[test]
fn test_empty_header_is_a_noop() {
    let (doc, table) = grid_doc();
    let before = doc.html();

    table.set_header(Vec::new()).unwrap();

    assert_eq!(doc.html(), before);
    assert!(table.columns().is_empty());
}

#[test]
fn test_repeated_set_header_replaces_the_section() {
    let (doc, table) = grid_doc();

    table.set_header(name_age_header()).unwrap();
    table
        .set_header(vec![Column::new("city", "City").sortable(true)])
        .unwrap();

    let html = doc.html();
    assert_eq!(html.matches("<thead>").count(), 1);
    assert!(!html.contains("data-id=\"name\""));
    assert!(html.contains("data-id=\"city\""));
}

#[test]
fn test_repeated_set_header_does_not_stack_listeners() {
    let (doc, table) = grid_doc();

    table.set_header(name_age_header()).unwrap();
    table.set_header(name_age_header()).unwrap();
    table.set_data(people()).unwrap();

    // One click must apply exactly one sort step: ascending. Stacked
    // handlers would toggle straight through to descending.
    doc.click("age").unwrap();
    assert_eq!(names(&table), vec!["Ann", "Bob"]);
}

#[test]
fn test_replaced_header_drops_old_listeners() {
    let (doc, table) = grid_doc();

    table.set_header(name_age_header()).unwrap();
    table
        .set_header(vec![Column::new("city", "City").sortable(true)])
        .unwrap();

    // The old sortable ids are gone from the registry; a stray element
    // reusing the id receives no table handler.
    doc.update(|root| root.append_child(Element::span().id("age")));
    assert!(doc.click("age").is_ok());
    assert_eq!(table.selected_column(), None);
}

#[test]
fn test_set_data_then_rows_roundtrip() {
    let (_doc, table) = grid_doc();

    table.set_header(name_age_header()).unwrap();
    table.set_data(people()).unwrap();

    assert_eq!(names(&table), vec!["Bob", "Ann"]);
}

#[test]
fn test_set_data_renders_body_in_header_order() {
    let (doc, table) = grid_doc();

    table.set_header(name_age_header()).unwrap();
    table.set_data(people()).unwrap();

    let html = doc.html();
    assert_eq!(html.matches("<tbody>").count(), 1);
    assert!(html.contains("<tr><td>Bob</td><td>30</td></tr>"));
    assert!(html.contains("<tr><td>Ann</td><td>5</td></tr>"));
}

#[test]
fn test_repeated_set_data_replaces_the_body() {
    let (doc, table) = grid_doc();

    table.set_header(name_age_header()).unwrap();
    table.set_data(people()).unwrap();
    table
        .set_data(vec![Row::new().cell("name", "Cid").cell("age", "41")])
        .unwrap();

    let html = doc.html();
    assert_eq!(html.matches("<tbody>").count(), 1);
    assert!(!html.contains("Bob"));
    assert_eq!(names(&table), vec!["Cid"]);
}

#[test]
fn test_empty_dataset_is_a_noop() {
    let (doc, table) = grid_doc();

    table.set_header(name_age_header()).unwrap();
    table.set_data(people()).unwrap();
    table.set_data(Vec::new()).unwrap();

    assert_eq!(names(&table), vec!["Bob", "Ann"]);
    assert!(doc.html().contains("<tbody>"));
}

#[test]
fn test_row_missing_a_cell_is_an_error() {
    let (_doc, table) = grid_doc();

    table.set_header(name_age_header()).unwrap();
    let result = table.set_data(vec![
        Row::new().cell("name", "Bob").cell("age", "30"),
        Row::new().cell("name", "Ann"),
    ]);

    match result {
        Err(TableError::MissingCell { row, column }) => {
            assert_eq!(row, 1);
            assert_eq!(column, "age");
        }
        other => panic!("expected missing cell, got {other:?}"),
    }
}

#[test]
fn test_click_scenario_age_then_age_then_name() {
    let (doc, table) = grid_doc();
    table.set_header(name_age_header()).unwrap();
    table.set_data(people()).unwrap();

    doc.click("age").unwrap();
    assert_eq!(names(&table), vec!["Ann", "Bob"]);
    assert_eq!(marker(&doc, "age").as_deref(), Some("ascending"));

    doc.click("age").unwrap();
    assert_eq!(names(&table), vec!["Bob", "Ann"]);
    assert_eq!(marker(&doc, "age").as_deref(), Some("descending"));

    doc.click("name").unwrap();
    assert_eq!(names(&table), vec!["Ann", "Bob"]);
    assert_eq!(marker(&doc, "name").as_deref(), Some("ascending"));
    assert_eq!(marker(&doc, "age"), None);
}

#[test]
fn test_toggle_law_descending_is_exact_reverse() {
    let (doc, table) = grid_doc();
    table.set_header(name_age_header()).unwrap();
    table
        .set_data(vec![
            Row::new().cell("name", "Bob").cell("age", "30"),
            Row::new().cell("name", "Ann").cell("age", "5"),
            Row::new().cell("name", "Cid").cell("age", "112"),
        ])
        .unwrap();

    doc.click("age").unwrap();
    let ascending = names(&table);

    doc.click("age").unwrap();
    let descending = names(&table);

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);

    // A third activation reproduces the ascending order exactly.
    doc.click("age").unwrap();
    assert_eq!(names(&table), ascending);
}

#[test]
fn test_numeric_policy_via_clicks() {
    let (doc, table) = grid_doc();
    table
        .set_header(vec![Column::new("count", "Count").sortable(true)])
        .unwrap();
    table
        .set_data(vec![
            Row::new().cell("count", "10"),
            Row::new().cell("count", "2"),
            Row::new().cell("count", "1,000"),
        ])
        .unwrap();

    doc.click("count").unwrap();
    let counts: Vec<String> = table
        .rows()
        .iter()
        .map(|row| row.value("count").unwrap_or_default().to_string())
        .collect();
    assert_eq!(counts, vec!["2", "10", "1,000"]);
}

#[test]
fn test_fresh_data_is_not_auto_sorted() {
    let (doc, table) = grid_doc();
    table.set_header(name_age_header()).unwrap();
    table.set_data(people()).unwrap();
    doc.click("age").unwrap();

    table
        .set_data(vec![
            Row::new().cell("name", "Zoe").cell("age", "9"),
            Row::new().cell("name", "Al").cell("age", "2"),
        ])
        .unwrap();

    // Rendered as given, selection untouched.
    assert_eq!(names(&table), vec!["Zoe", "Al"]);
    assert_eq!(table.selected_column().as_deref(), Some("age"));

    // The next activation of the selected column still flips direction.
    doc.click("age").unwrap();
    assert_eq!(names(&table), vec!["Zoe", "Al"]);
    assert_eq!(marker(&doc, "age").as_deref(), Some("descending"));
}

#[test]
fn test_switching_column_starts_fresh_ascending() {
    let (doc, table) = grid_doc();
    table.set_header(name_age_header()).unwrap();
    table.set_data(people()).unwrap();

    doc.click("name").unwrap();
    doc.click("name").unwrap(); // name now descending
    doc.click("age").unwrap(); // fresh column: ascending, not a flip

    assert_eq!(marker(&doc, "age").as_deref(), Some("ascending"));
    assert_eq!(names(&table), vec!["Ann", "Bob"]);

    // name keeps its last-applied direction in memory, marker-free.
    let columns = table.columns();
    let name = columns.iter().find(|col| col.id == "name").unwrap();
    assert_eq!(name.sort_direction(), Some(SortDirection::Descending));
    assert_eq!(marker(&doc, "name"), None);
}

#[test]
fn test_sort_unknown_header_cell_fails() {
    let (_doc, table) = grid_doc();
    table.set_header(name_age_header()).unwrap();

    match table.sort("bogus") {
        Err(TableError::HeaderCellNotFound(id)) => assert_eq!(id, "bogus"),
        other => panic!("expected missing header cell, got {other:?}"),
    }
}

#[test]
fn test_sort_unregistered_column_fails() {
    let (doc, table) = grid_doc();
    table.set_header(name_age_header()).unwrap();

    // A header cell exists in the container but no column is registered
    // for it.
    doc.update_selected("#grid", |el| {
        el.append_child(Element::th().id("stray"));
    });

    match table.sort("stray") {
        Err(TableError::UnknownColumn(id)) => assert_eq!(id, "stray"),
        other => panic!("expected unknown column, got {other:?}"),
    }
}

#[test]
fn test_click_without_data_id_fails() {
    let (doc, table) = grid_doc();
    table.set_header(name_age_header()).unwrap();
    table.set_data(people()).unwrap();

    doc.update_selected("#age", |el| {
        el.data.remove("id");
    });

    match doc.click("age") {
        Err(DomError::Handler { source, .. }) => {
            let table_error = source.downcast_ref::<TableError>().unwrap();
            assert!(matches!(table_error, TableError::MissingSortKey(target) if target == "age"));
        }
        other => panic!("expected handler error, got {other:?}"),
    }
    // The failed activation changed nothing.
    assert_eq!(names(&table), vec!["Bob", "Ann"]);
}

#[test]
fn test_renderer_output_is_verbatim_and_plain_text_is_escaped() {
    let (doc, table) = grid_doc();
    table
        .set_header(vec![
            Column::new("medal", "Medal"),
            Column::new("note", "Note"),
        ])
        .unwrap();
    table
        .set_data(vec![Row::new()
            .cell(
                "medal",
                Cell::new("gold").renderer(|value| format!("<strong>{value}</strong>")),
            )
            .cell("note", "<b>not markup</b>")])
        .unwrap();

    let html = doc.html();
    assert!(html.contains("<td><strong>gold</strong></td>"));
    assert!(html.contains("<td>&lt;b&gt;not markup&lt;/b&gt;</td>"));
}

#[test]
fn test_clicking_non_sortable_header_does_nothing() {
    let (doc, table) = grid_doc();
    table
        .set_header(vec![
            Column::new("name", "Name"),
            Column::new("age", "Age").sortable(true),
        ])
        .unwrap();
    table.set_data(people()).unwrap();

    doc.click("name").unwrap();

    assert_eq!(names(&table), vec!["Bob", "Ann"]);
    assert_eq!(table.selected_column(), None);
}

#[test]
fn test_rows_is_empty_before_data() {
    let (_doc, table) = grid_doc();
    table.set_header(name_age_header()).unwrap();

    assert!(table.rows().is_empty());
}
