//! Integration tests for table loading through a recording sink.

use csvload_load::{
    ColumnType, InsertStatement, LoadError, SinkResult, SqlValue, TableLoad, TableSink,
    build_table,
};

#[derive(Default)]
struct RecordingSink {
    statements: Vec<String>,
    inserts: Vec<(String, Vec<SqlValue>)>,
}

impl TableSink for RecordingSink {
    fn execute_ddl(&mut self, statement: &str) -> SinkResult {
        self.statements.push(statement.to_string());
        Ok(())
    }

    fn insert_row(&mut self, insert: &InsertStatement, values: &[SqlValue]) -> SinkResult {
        assert_eq!(insert.params, values.len());
        self.inserts.push((insert.sql.clone(), values.to_vec()));
        Ok(())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn loads_typed_rows_in_order() {
    let header = strings(&["host", "pct_used", "count", "seen_at"]);
    let rows = vec![
        strings(&["a", "95", "3", "2021-06-01T10:00:00+00:00"]),
        strings(&["b", "80.5", "4", "2021-06-01T11:30:00+02:00"]),
    ];
    let mut sink = RecordingSink::default();

    let load = build_table(&mut sink, "usage", &header, &rows).expect("load");

    assert_eq!(
        load,
        TableLoad::Created {
            table: "usage".to_string(),
            columns: 4,
            rows: 2,
        }
    );
    assert_eq!(
        sink.statements,
        vec![
            "DROP TABLE IF EXISTS usage".to_string(),
            "CREATE TABLE usage (id bigint not null auto_increment primary key, \
             host text not null, pct_used double not null, count bigint not null, \
             seen_at datetime not null) CHARACTER SET utf8 COLLATE utf8_unicode_ci"
                .to_string(),
        ]
    );
    assert_eq!(sink.inserts.len(), 2);
    let (sql, first) = &sink.inserts[0];
    assert_eq!(
        sql,
        "INSERT INTO usage(host, pct_used, count, seen_at) VALUES (?, ?, ?, ?)"
    );
    assert_eq!(first[0], SqlValue::Text("a".to_string()));
    assert_eq!(first[1], SqlValue::Double(95.0));
    assert_eq!(first[2], SqlValue::Bigint(3));
    assert_eq!(first[3].column_type(), ColumnType::Datetime);

    let (_, second) = &sink.inserts[1];
    assert_eq!(second[1], SqlValue::Double(80.5));
    match &second[3] {
        SqlValue::Datetime(ts) => assert_eq!(ts.offset().local_minus_utc(), 2 * 3600),
        other => panic!("expected datetime, got {other:?}"),
    }
}

#[test]
fn empty_rows_create_nothing() {
    let mut sink = RecordingSink::default();

    let load = build_table(&mut sink, "nothing", &strings(&["a", "b"]), &[]).expect("load");

    assert!(load.is_skipped());
    assert!(sink.statements.is_empty());
    assert!(sink.inserts.is_empty());
}

#[test]
fn later_row_type_mismatch_is_fatal_after_partial_insert() {
    let header = strings(&["name", "count"]);
    let rows = vec![
        strings(&["a", "1"]),
        strings(&["b", "2"]),
        strings(&["c", "3"]),
        strings(&["d", "4"]),
        strings(&["e", "five"]),
        strings(&["f", "6"]),
    ];
    let mut sink = RecordingSink::default();

    let err = build_table(&mut sink, "counts", &header, &rows).unwrap_err();

    match err {
        LoadError::Coercion {
            table,
            row,
            column,
            expected,
            value,
        } => {
            assert_eq!(table, "counts");
            assert_eq!(row, 5);
            assert_eq!(column, "count");
            assert_eq!(expected, ColumnType::Bigint);
            assert_eq!(value, "five");
        }
        other => panic!("expected coercion error, got {other:?}"),
    }
    // No transaction: rows before the bad one stay inserted, rows after are never sent
    assert_eq!(sink.inserts.len(), 4);
}

#[test]
fn every_value_reparses_under_the_inferred_type() {
    let header = strings(&["n", "x", "ts"]);
    let rows = vec![
        strings(&["1", "1.5", "2020-01-01T00:00:00+00:00"]),
        strings(&["-2", "3", "2020-01-02T00:00:00-03:00"]),
        strings(&["30", "-0.25", "2020-01-03T12:34:56+05:45"]),
    ];
    let mut sink = RecordingSink::default();

    build_table(&mut sink, "mixed", &header, &rows).expect("load");

    for (_, values) in &sink.inserts {
        assert_eq!(values[0].column_type(), ColumnType::Bigint);
        assert_eq!(values[1].column_type(), ColumnType::Double);
        assert_eq!(values[2].column_type(), ColumnType::Datetime);
    }
}

#[test]
fn malformed_double_and_datetime_are_fatal() {
    let header = strings(&["x", "ts"]);

    let bad_double = vec![
        strings(&["1.5", "2020-01-01T00:00:00+00:00"]),
        strings(&["oops", "2020-01-01T00:00:00+00:00"]),
    ];
    let mut sink = RecordingSink::default();
    let err = build_table(&mut sink, "t", &header, &bad_double).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Coercion {
            expected: ColumnType::Double,
            row: 2,
            ..
        }
    ));

    let bad_datetime = vec![
        strings(&["1.5", "2020-01-01T00:00:00+00:00"]),
        strings(&["2.5", "2020-01-01T00:00:00Z"]),
    ];
    let mut sink = RecordingSink::default();
    let err = build_table(&mut sink, "t", &header, &bad_datetime).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Coercion {
            expected: ColumnType::Datetime,
            row: 2,
            ..
        }
    ));
}

#[test]
fn text_column_accepts_anything_after_text_inference() {
    let header = strings(&["label"]);
    let rows = vec![strings(&["alpha"]), strings(&["42"]), strings(&[""])];
    let mut sink = RecordingSink::default();

    let load = build_table(&mut sink, "labels", &header, &rows).expect("load");

    assert_eq!(load.rows_inserted(), 3);
    assert_eq!(sink.inserts[1].1[0], SqlValue::Text("42".to_string()));
}
