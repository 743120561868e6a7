use std::fs;

use pilonkit_bed::{BedConvertOptions, convert_changes_file, default_output_path};
use tempfile::tempdir;

#[test]
fn test_convert_changes_file_writes_next_to_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("pilon.changes");
    fs::write(
        &input,
        "tig00000001:1500 tig00000001_pilon:1499 . A\n\
         tig00000001:2000-2001 tig00000001_pilon:2000 GG .\n",
    )
    .unwrap();

    let output = default_output_path(&input);
    let summary = convert_changes_file(&input, &output, BedConvertOptions { strict: true }).unwrap();

    assert_eq!(summary.converted, 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("pilon.changes.bed")).unwrap(),
        "tig00000001\t1500\tNA\t1499\tNA\t.\tA\n\
         tig00000001\t2000\t2001\t2000\tNA\tGG\t.\n"
    );
}

#[test]
fn test_convert_missing_input_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("does_not_exist.changes");
    let output = default_output_path(&input);
    assert!(convert_changes_file(&input, &output, BedConvertOptions::default()).is_err());
}
