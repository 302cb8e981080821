mod common;

use common::{employee, employee_bytes, employees_db, records, rids};
use minirel::{Datatype, ExecError, Executor, HeapEngine, Operator};

fn populate(exec: &Executor<'_, minirel::CatalogManager, HeapEngine<'_>>) {
    for (id, name) in [("1", "Ann"), ("4", "Bob"), ("6", "Cid"), ("9", "Dee"), ("4", "Eve")] {
        exec.insert("Employees", &employee(id, name)).unwrap();
    }
}

#[test]
fn test_delete_all_without_attribute() {
    let (_dir, catalog) = employees_db();
    let engine = HeapEngine::new(&catalog);
    let exec = Executor::new(&catalog, &engine);
    populate(&exec);

    // filter arguments are ignored in this mode
    let deleted = exec
        .delete("Employees", None, Operator::Lt, Datatype::Float, "garbage")
        .unwrap();
    assert_eq!(deleted, 5);
    assert!(records(&catalog, "Employees").is_empty());
}

#[test]
fn test_delete_empty_attribute_name_means_all() {
    let (_dir, catalog) = employees_db();
    let engine = HeapEngine::new(&catalog);
    let exec = Executor::new(&catalog, &engine);
    populate(&exec);

    let deleted = exec
        .delete("Employees", Some(""), Operator::Eq, Datatype::String, "")
        .unwrap();
    assert_eq!(deleted, 5);
    assert!(records(&catalog, "Employees").is_empty());
}

#[test]
fn test_delete_with_predicate_removes_exact_set() {
    let (_dir, catalog) = employees_db();
    let engine = HeapEngine::new(&catalog);
    let exec = Executor::new(&catalog, &engine);
    populate(&exec);

    let before = records(&catalog, "Employees");
    let expected_gone: Vec<_> = before
        .iter()
        .filter(|(_, bytes)| i32::from_ne_bytes(bytes[0..4].try_into().unwrap()) == 4)
        .map(|(rid, _)| *rid)
        .collect();

    let deleted = exec
        .delete("Employees", Some("id"), Operator::Eq, Datatype::Integer, "4")
        .unwrap();
    assert_eq!(deleted, 2);

    let after = rids(&catalog, "Employees");
    let all: std::collections::BTreeSet<_> = before.iter().map(|(rid, _)| *rid).collect();
    let gone: Vec<_> = all.difference(&after).copied().collect();
    assert_eq!(gone, expected_gone);

    // survivors are byte-for-byte untouched
    let survivors: Vec<_> = records(&catalog, "Employees").into_iter().map(|(_, b)| b).collect();
    assert_eq!(
        survivors,
        vec![
            employee_bytes(1, "Ann"),
            employee_bytes(6, "Cid"),
            employee_bytes(9, "Dee"),
        ]
    );
}

#[test]
fn test_delete_each_operator() {
    let cases = [
        (Operator::Eq, "6", 1),
        (Operator::Ne, "6", 4),
        (Operator::Lt, "6", 3),
        (Operator::Le, "6", 4),
        (Operator::Gt, "6", 1),
        (Operator::Ge, "6", 2),
    ];
    for (op, value, expected) in cases {
        let (_dir, catalog) = employees_db();
        let engine = HeapEngine::new(&catalog);
        let exec = Executor::new(&catalog, &engine);
        populate(&exec);

        let deleted = exec
            .delete("Employees", Some("id"), op, Datatype::Integer, value)
            .unwrap();
        assert_eq!(deleted, expected, "operator {op}");
        assert_eq!(records(&catalog, "Employees").len(), 5 - expected);
    }
}

#[test]
fn test_delete_on_string_attribute() {
    let (_dir, catalog) = employees_db();
    let engine = HeapEngine::new(&catalog);
    let exec = Executor::new(&catalog, &engine);
    populate(&exec);

    let deleted = exec
        .delete("Employees", Some("name"), Operator::Le, Datatype::String, "Bob")
        .unwrap();
    assert_eq!(deleted, 2);
    let names: Vec<_> = records(&catalog, "Employees")
        .into_iter()
        .map(|(_, b)| b[4..7].to_vec())
        .collect();
    assert_eq!(names, vec![b"Cid".to_vec(), b"Dee".to_vec(), b"Eve".to_vec()]);
}

#[test]
fn test_delete_is_idempotent() {
    let (_dir, catalog) = employees_db();
    let engine = HeapEngine::new(&catalog);
    let exec = Executor::new(&catalog, &engine);
    populate(&exec);

    let first = exec
        .delete("Employees", Some("id"), Operator::Gt, Datatype::Integer, "5")
        .unwrap();
    let second = exec
        .delete("Employees", Some("id"), Operator::Gt, Datatype::Integer, "5")
        .unwrap();
    assert_eq!((first, second), (2, 0));
}

#[test]
fn test_delete_across_pages() {
    let (_dir, catalog) = employees_db();
    let engine = HeapEngine::new(&catalog);
    let exec = Executor::new(&catalog, &engine);

    // 14-byte records plus 6-byte item ids: ~408 per page
    for i in 0..1000 {
        exec.insert("Employees", &employee(&i.to_string(), "n")).unwrap();
    }
    assert!(catalog.heap_file("Employees").unwrap().page_count().unwrap() > 2);

    let deleted = exec
        .delete("Employees", Some("id"), Operator::Ge, Datatype::Integer, "500")
        .unwrap();
    assert_eq!(deleted, 500);
    assert_eq!(records(&catalog, "Employees").len(), 500);
}

#[test]
fn test_delete_unknown_relation() {
    let (_dir, catalog) = employees_db();
    let engine = HeapEngine::new(&catalog);
    let exec = Executor::new(&catalog, &engine);

    let err = exec
        .delete("Ghosts", None, Operator::Eq, Datatype::Integer, "1")
        .unwrap_err();
    assert!(matches!(err, ExecError::ScanOpen(_)));
}

#[test]
fn test_delete_unknown_attribute() {
    let (_dir, catalog) = employees_db();
    let engine = HeapEngine::new(&catalog);
    let exec = Executor::new(&catalog, &engine);
    populate(&exec);

    let err = exec
        .delete("Employees", Some("salary"), Operator::Eq, Datatype::Integer, "1")
        .unwrap_err();
    assert!(matches!(err, ExecError::AttributeNotFound { .. }));
    assert_eq!(records(&catalog, "Employees").len(), 5);
}

#[test]
fn test_delete_declared_type_must_match_catalog() {
    let (_dir, catalog) = employees_db();
    let engine = HeapEngine::new(&catalog);
    let exec = Executor::new(&catalog, &engine);
    populate(&exec);

    let err = exec
        .delete("Employees", Some("id"), Operator::Eq, Datatype::String, "4")
        .unwrap_err();
    assert!(matches!(err, ExecError::AttributeTypeMismatch { .. }));
    assert_eq!(records(&catalog, "Employees").len(), 5);
}
