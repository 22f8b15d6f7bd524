use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn delimiter_follows_extension() {
    assert_eq!(delimiter_for(Path::new("a/b.tsv")), b'\t');
    assert_eq!(delimiter_for(Path::new("a/b.txt.gz")), b'\t');
    assert_eq!(delimiter_for(Path::new("a/b.csv")), b',');
    assert_eq!(delimiter_for(Path::new("a/b")), b',');
}

#[test]
fn table_stem_strips_gz_and_extension() {
    assert_eq!(table_stem(Path::new("x/Bcell.csv")).as_deref(), Some("Bcell"));
    assert_eq!(
        table_stem(Path::new("x/T_cell.tsv.gz")).as_deref(),
        Some("T_cell")
    );
    assert!(is_table_file(Path::new("x/T_cell.tsv.gz")));
    assert!(!is_table_file(Path::new("x/notes.md")));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let err = match open_reader(&dir.path().join("absent.tsv")) {
        Err(err) => err,
        Ok(_) => panic!("expected error"),
    };
    assert!(matches!(err, InputError::MissingFile(_)));
}

#[test]
fn column_index_reports_missing_column() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("t.tsv");
    fs::write(&path, "A\tB\n1\t2\n").expect("write file");
    let mut reader = open_table(&path).expect("open");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(column_index(&headers, "B", &path).expect("B"), 1);
    let err = column_index(&headers, "C", &path).unwrap_err();
    match err {
        InputError::MissingColumn { column, .. } => assert_eq!(column, "C"),
        other => panic!("unexpected error: {other}"),
    }
}
