use schemastore::{
    row, ColumnType, Error, Location, Row, SchemaStore, SessionState, Target, Value,
};

fn ninja_schema() -> [(&'static str, ColumnType); 2] {
    [("ninja", ColumnType::Text), ("bitecoins", ColumnType::Integer)]
}

fn ninjas() -> Vec<Row> {
    vec![row!["taspotts", 906], row!["Tomade", 896]]
}

#[test]
fn test_ninjas_end_to_end() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();

    db.create("ninjas", ninja_schema(), "ninja").unwrap();
    db.insert("ninjas", ninjas()).unwrap();

    let taspotts = Some(Target::equals("ninja", "taspotts"));
    assert_eq!(
        db.select("ninjas", None, taspotts.clone()).unwrap(),
        vec![row!["taspotts", 906]]
    );

    db.update("ninjas", ("bitecoins", 1000), ("ninja", "taspotts"))
        .unwrap();
    assert_eq!(
        db.select("ninjas", None, taspotts).unwrap(),
        vec![row!["taspotts", 1000]]
    );

    db.delete("ninjas", ("ninja", "Tomade")).unwrap();
    assert_eq!(
        db.select("ninjas", None, None).unwrap(),
        vec![row!["taspotts", 1000]]
    );
}

#[test]
fn test_missing_primary_key_leaves_catalog_untouched() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();

    let err = db.create("ninjas", ninja_schema(), "id").unwrap_err();
    assert!(err.is_schema_error());
    assert!(matches!(err, Error::PrimaryKeyNotInSchema(_)));
    assert!(db.tables().is_empty());

    // nothing reached the engine either
    let err = db.select("ninjas", Some(&["ninja"]), None).unwrap_err();
    assert!(matches!(err, Error::Engine(_)));
}

#[test]
fn test_select_returns_rows_in_insert_order_and_schema_order() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();

    db.create(
        "things",
        [
            ("id", ColumnType::Integer),
            ("weight", ColumnType::Real),
            ("label", ColumnType::Text),
            ("payload", ColumnType::Blob),
            ("nothing", ColumnType::Null),
        ],
        "id",
    )
    .unwrap();

    let rows = vec![
        row![1, 1.25, "c", vec![0u8, 1, 2], Value::Null],
        row![2, -0.5, "a", Vec::<u8>::new(), Value::Null],
        row![3, 1e10, "b", vec![255u8], Value::Null],
    ];
    db.insert("things", rows.clone()).unwrap();

    assert_eq!(db.select("things", None, None).unwrap(), rows);

    let labels = db
        .select("things", Some(&["label", "id"]), None)
        .unwrap();
    assert_eq!(labels, vec![row!["c", 1], row!["a", 2], row!["b", 3]]);
}

#[test]
fn test_arity_mismatch_rejects_whole_batch() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();
    db.create("ninjas", ninja_schema(), "ninja").unwrap();

    let rows = vec![row!["taspotts", 906], row!["Tomade", 896, "extra"]];
    let err = db.insert("ninjas", rows).unwrap_err();

    assert!(matches!(
        err,
        Error::ArityMismatch { ref table, expected: 2, found: 3 } if table == "ninjas"
    ));
    assert!(db.select("ninjas", None, None).unwrap().is_empty());
    assert_eq!(db.num_transactions().unwrap(), 0);
}

#[test]
fn test_type_mismatch_rejected_before_submission() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();
    db.create("ninjas", ninja_schema(), "ninja").unwrap();

    for bad in [row!["taspotts", "906"], row!["taspotts", 906.0], row![Value::Null, 1]] {
        let err = db.insert("ninjas", vec![row!["ok", 1], bad]).unwrap_err();
        assert!(err.is_schema_error(), "unexpected error: {}", err);
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    assert!(db.select("ninjas", None, None).unwrap().is_empty());
    assert_eq!(db.num_transactions().unwrap(), 0);
}

#[test]
fn test_engine_failure_mid_batch_rolls_back() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();
    db.create("ninjas", ninja_schema(), "ninja").unwrap();

    let rows = vec![row!["taspotts", 906], row!["taspotts", 1]];
    let err = db.insert("ninjas", rows).unwrap_err();

    assert!(matches!(err, Error::Engine(_)));
    assert!(db.select("ninjas", None, None).unwrap().is_empty());
}

#[test]
fn test_pair_target_equals_explicit_equality() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();
    db.create("ninjas", ninja_schema(), "ninja").unwrap();
    db.insert("ninjas", ninjas()).unwrap();

    let pair = db
        .select("ninjas", None, Some(("bitecoins", 896).into()))
        .unwrap();
    let triple = db
        .select("ninjas", None, Some(("bitecoins", "=", 896).into()))
        .unwrap();

    assert_eq!(pair, triple);
    assert_eq!(pair, vec![row!["Tomade", 896]]);
}

#[test]
fn test_operator_targets() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();
    db.create("ninjas", ninja_schema(), "ninja").unwrap();
    db.insert("ninjas", ninjas()).unwrap();

    let rich = db
        .select("ninjas", Some(&["ninja"]), Some(Target::new("bitecoins", ">", 900)))
        .unwrap();
    assert_eq!(rich, vec![row!["taspotts"]]);

    let t_names = db
        .select("ninjas", Some(&["ninja"]), Some(Target::new("ninja", "LIKE", "t%")))
        .unwrap();
    assert_eq!(t_names.len(), 2);

    let none = db
        .select("ninjas", None, Some(Target::equals("ninja", "nobody")))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_num_transactions_counts_row_changes() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();
    assert_eq!(db.num_transactions().unwrap(), 0);

    db.create("ninjas", ninja_schema(), "ninja").unwrap();
    assert_eq!(db.num_transactions().unwrap(), 0);

    db.insert("ninjas", ninjas()).unwrap();
    let after_insert = db.num_transactions().unwrap();
    assert!(after_insert >= 2);

    let changed = db
        .update("ninjas", ("bitecoins", 0), ("bitecoins", 896))
        .unwrap();
    assert_eq!(changed, 1);
    let after_update = db.num_transactions().unwrap();
    assert!(after_update >= after_insert + 1);

    let removed = db.delete("ninjas", ("bitecoins", 0)).unwrap();
    assert_eq!(removed, 1);
    assert!(db.num_transactions().unwrap() >= after_update + 1);

    // zero matches are fine and change nothing
    assert_eq!(db.delete("ninjas", ("ninja", "nobody")).unwrap(), 0);
}

#[test]
fn test_usage_errors_outside_session() {
    let mut store = SchemaStore::in_memory();

    let err = store.insert("ninjas", ninjas()).unwrap_err();
    assert!(err.is_usage_error());
    assert!(!err.is_schema_error());

    store
        .with_session(|db| db.create("ninjas", ninja_schema(), "ninja"))
        .unwrap();

    assert_eq!(store.state(), SessionState::Closed);
    let err = store
        .update("ninjas", ("bitecoins", 1), ("ninja", "x"))
        .unwrap_err();
    assert!(matches!(err, Error::NotActive(SessionState::Closed)));
    assert_eq!(store.num_transactions().unwrap(), 0);
}

#[test]
fn test_duplicate_table_error_comes_from_engine() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();
    db.create("ninjas", ninja_schema(), "ninja").unwrap();

    let err = db
        .create("ninjas", [("id", ColumnType::Integer)], "id")
        .unwrap_err();
    assert!(matches!(err, Error::Engine(_)));
    // the recorded schema is replaced even though the engine refused
    assert_eq!(db.schema("ninjas").unwrap().primary_key(), "id");
}

#[test]
fn test_memory_store_is_discarded_on_close() {
    let mut store = SchemaStore::in_memory();
    store
        .with_session(|db| {
            db.create("ninjas", ninja_schema(), "ninja")?;
            db.insert("ninjas", ninjas())?;
            Ok::<_, Error>(())
        })
        .unwrap();

    let db = store.open().unwrap();
    // schema survives in the catalog, the table does not survive in the engine
    assert_eq!(db.tables(), vec!["ninjas"]);
    assert!(matches!(
        db.select("ninjas", None, None).unwrap_err(),
        Error::Engine(_)
    ));
}

#[test]
fn test_file_store_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ninjas.db");

    let mut store = SchemaStore::new(Location::file(&path));
    store
        .with_session(|db| {
            db.create("ninjas", ninja_schema(), "ninja")?;
            db.insert("ninjas", ninjas())?;
            Ok::<_, Error>(())
        })
        .unwrap();
    assert!(path.exists());

    let rows = store
        .with_session(|db| db.select("ninjas", None, None))
        .unwrap();
    assert_eq!(rows, ninjas());
}

#[test]
fn test_session_released_on_early_return() {
    fn failing(store: &mut SchemaStore) -> schemastore::Result<()> {
        let mut db = store.open()?;
        db.create("ninjas", ninja_schema(), "ninja")?;
        db.insert("ninjas", vec![row!["only one value"]])?;
        db.close()
    }

    let mut store = SchemaStore::in_memory();
    assert!(failing(&mut store).unwrap_err().is_schema_error());
    assert_eq!(store.state(), SessionState::Closed);
}

#[test]
fn test_panic_inside_with_session_releases_connection() {
    let mut store = SchemaStore::in_memory();

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        store.with_session(|db| -> schemastore::Result<()> {
            db.create("ninjas", ninja_schema(), "ninja")?;
            db.insert("ninjas", ninjas())?;
            panic!("interrupted inside the session");
        })
    }));

    assert!(outcome.is_err());
    assert_eq!(store.state(), SessionState::Closed);
    assert_eq!(store.num_transactions().unwrap(), 0);
}

#[test]
fn test_nested_open_is_refused() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();
    db.create("ninjas", ninja_schema(), "ninja").unwrap();
    db.insert("ninjas", vec![row!["taspotts", 906]]).unwrap();

    assert!(matches!(db.open().unwrap_err(), Error::AlreadyActive));

    assert_eq!(
        db.select("ninjas", None, None).unwrap(),
        vec![row!["taspotts", 906]]
    );
    db.close().unwrap();
    assert_eq!(store.state(), SessionState::Closed);
}

#[test]
fn test_nan_rejected_for_real_column() {
    let mut store = SchemaStore::in_memory();
    let mut db = store.open().unwrap();
    db.create(
        "readings",
        [("id", ColumnType::Integer), ("value", ColumnType::Real)],
        "id",
    )
    .unwrap();

    let err = db
        .insert("readings", vec![row![1, 0.5], row![2, f64::NAN]])
        .unwrap_err();
    assert!(err.is_schema_error());
    assert!(db.select("readings", None, None).unwrap().is_empty());
}
