use minirel::{
    Datatype, HeapFile, HeapFileScan, Operator, RelationScan, Rid, ScanPredicate, StorageError,
    Value,
};
use tempfile::TempDir;

/// Heap of 8-byte records: a 4-byte id followed by a 4-byte tag.
fn heap_with(ids: &[i32]) -> (TempDir, HeapFile) {
    let dir = TempDir::new().unwrap();
    let heap = HeapFile::create(dir.path().join("r.tbl")).unwrap();
    for id in ids {
        let mut rec = id.to_ne_bytes().to_vec();
        rec.extend_from_slice(b"tag\0");
        heap.insert_record(&rec).unwrap();
    }
    (dir, heap)
}

fn id_is(op: Operator, v: i64) -> ScanPredicate {
    ScanPredicate {
        offset: 0,
        length: 4,
        attr_type: Datatype::Integer,
        op,
        value: Value::Integer(v),
    }
}

fn collect_ids(scan: &mut HeapFileScan) -> Vec<i32> {
    let mut ids = Vec::new();
    while scan.scan_next().unwrap().is_some() {
        let rec = scan.get_record().unwrap();
        ids.push(i32::from_ne_bytes(rec[0..4].try_into().unwrap()));
    }
    ids
}

#[test]
fn test_unfiltered_scan_visits_every_record() {
    let (_dir, heap) = heap_with(&[3, 1, 4, 1, 5]);
    let mut scan = HeapFileScan::new("r", heap);
    scan.start_scan(None).unwrap();

    assert_eq!(collect_ids(&mut scan), vec![3, 1, 4, 1, 5]);
    // exhausted scans stay exhausted
    assert_eq!(scan.scan_next().unwrap(), None);
    scan.end_scan();
}

#[test]
fn test_filtered_scan() {
    let (_dir, heap) = heap_with(&[3, 1, 4, 1, 5]);
    let mut scan = HeapFileScan::new("r", heap);

    scan.start_scan(Some(id_is(Operator::Ge, 3))).unwrap();
    assert_eq!(collect_ids(&mut scan), vec![3, 4, 5]);

    // restarting resets the cursor and swaps the predicate
    scan.start_scan(Some(id_is(Operator::Eq, 1))).unwrap();
    assert_eq!(collect_ids(&mut scan), vec![1, 1]);
}

#[test]
fn test_string_predicate_compares_padded_field() {
    let (_dir, heap) = heap_with(&[1, 2]);
    let mut scan = HeapFileScan::new("r", heap);
    scan.start_scan(Some(ScanPredicate {
        offset: 4,
        length: 4,
        attr_type: Datatype::String,
        op: Operator::Eq,
        value: Value::Text(b"tag\0".to_vec()),
    }))
    .unwrap();
    assert_eq!(collect_ids(&mut scan), vec![1, 2]);
}

#[test]
fn test_delete_during_scan_keeps_cursor() {
    let (_dir, heap) = heap_with(&[1, 2, 3, 4, 5, 6]);
    let reader = heap.clone();
    let mut scan = HeapFileScan::new("r", heap);
    scan.start_scan(None).unwrap();

    let mut seen = Vec::new();
    while let Some(rid) = scan.scan_next().unwrap() {
        let rec = scan.get_record().unwrap();
        let id = i32::from_ne_bytes(rec[0..4].try_into().unwrap());
        seen.push(id);
        if id % 2 == 0 {
            scan.delete_record().unwrap();
            // the record is gone, but the cursor is not
            assert!(matches!(scan.get_record(), Err(StorageError::NoCurrentRecord)));
            assert!(matches!(reader.get_record(rid), Err(StorageError::SlotUnused(_))));
        }
    }
    scan.end_scan();

    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    let left: Vec<Rid> = reader.scan_all().unwrap().into_iter().map(|(rid, _)| rid).collect();
    assert_eq!(left, vec![Rid::new(0, 0), Rid::new(0, 2), Rid::new(0, 4)]);
}

#[test]
fn test_scan_spans_pages() {
    let ids: Vec<i32> = (0..1500).collect();
    let (_dir, heap) = heap_with(&ids);
    assert!(heap.page_count().unwrap() > 1);

    let mut scan = HeapFileScan::new("r", heap);
    scan.start_scan(Some(id_is(Operator::Lt, 1000))).unwrap();
    assert_eq!(collect_ids(&mut scan), (0..1000).collect::<Vec<_>>());
}

#[test]
fn test_scan_requires_start() {
    let (_dir, heap) = heap_with(&[1]);
    let mut scan = HeapFileScan::new("r", heap);

    assert!(matches!(scan.scan_next(), Err(StorageError::ScanNotStarted)));
    assert!(matches!(scan.get_record(), Err(StorageError::NoCurrentRecord)));
    assert!(matches!(scan.delete_record(), Err(StorageError::NoCurrentRecord)));

    scan.start_scan(None).unwrap();
    scan.end_scan();
    scan.end_scan();
    assert!(matches!(scan.scan_next(), Err(StorageError::ScanNotStarted)));
}

#[test]
fn test_invalid_predicates() {
    let (_dir, heap) = heap_with(&[1]);
    let mut scan = HeapFileScan::new("r", heap);

    let odd_width = ScanPredicate {
        length: 3,
        ..id_is(Operator::Eq, 1)
    };
    assert!(matches!(
        scan.start_scan(Some(odd_width)),
        Err(StorageError::InvalidPredicate(_))
    ));

    let wrong_value = ScanPredicate {
        value: Value::Text(b"1".to_vec()),
        ..id_is(Operator::Eq, 1)
    };
    assert!(matches!(
        scan.start_scan(Some(wrong_value)),
        Err(StorageError::InvalidPredicate(_))
    ));

    let past_end = ScanPredicate {
        offset: 6,
        ..id_is(Operator::Eq, 1)
    };
    scan.start_scan(Some(past_end)).unwrap();
    assert!(matches!(
        scan.scan_next(),
        Err(StorageError::PredicateOutOfBounds { offset: 6, end: 10, record_len: 8 })
    ));
}

#[test]
fn test_nan_only_satisfies_ne() {
    let dir = TempDir::new().unwrap();
    let heap = HeapFile::create(dir.path().join("f.tbl")).unwrap();
    heap.insert_record(&f64::NAN.to_ne_bytes()).unwrap();
    heap.insert_record(&2.5f64.to_ne_bytes()).unwrap();

    let mut scan = HeapFileScan::new("f", heap);
    for (op, expected) in [
        (Operator::Eq, 0),
        (Operator::Ne, 2),
        (Operator::Lt, 0),
        (Operator::Le, 0),
        (Operator::Gt, 1),
        (Operator::Ge, 1),
    ] {
        scan.start_scan(Some(ScanPredicate {
            offset: 0,
            length: 8,
            attr_type: Datatype::Float,
            op,
            value: Value::Float(1.0),
        }))
        .unwrap();
        let mut hits = 0;
        while scan.scan_next().unwrap().is_some() {
            hits += 1;
        }
        assert_eq!(hits, expected, "operator {op}");
    }
}
