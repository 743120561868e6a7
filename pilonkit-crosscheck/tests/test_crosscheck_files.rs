use std::fs;

use pilonkit_crosscheck::{CrossCheckPaths, cross_check_files};
use tempfile::tempdir;

#[test]
fn test_cross_check_files_end_to_end() {
    let dir = tempdir().unwrap();

    let changes = dir.path().join("pilon.changes.bed");
    fs::write(
        &changes,
        "tig1\t100\tNA\t100\tNA\t.\tAT\n\
         tig1\t300\t302\t299\tNA\tGGC\t.\n",
    )
    .unwrap();

    let candidates = dir.path().join("targets_onlybad.txt");
    fs::write(
        &candidates,
        "#name\tpos\tend\tc3\tc4\tref\talt\tc7\thaplotype\tc9\tc10\n\
         tig1\t99\t100\tx\ty\t.\tAT\tz\t\tp\tq\n\
         tig1\t299\t302\tx\ty\tGGC\t.\tz\tA,C\tp\tq\n\
         tig1\t42\t43\tx\ty\t.\tC\tz\t\tp\tq\n",
    )
    .unwrap();

    let outputs = CrossCheckPaths {
        primary: dir.path().join("pilon_common.txt"),
        unmatched: dir.path().join("pilon_not_common.txt"),
        non_warning: dir.path().join("not_warning.txt"),
        warning: dir.path().join("warning.txt"),
    };

    let summary = cross_check_files(&changes, &candidates, &outputs).unwrap();
    assert_eq!(summary.matched, 2);
    assert_eq!(summary.unmatched, 1);

    let primary = fs::read_to_string(&outputs.primary).unwrap();
    let rows: Vec<&str> = primary.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with('#'));
    assert_eq!(rows[1], "tig1\t99\t100\tx\ty\t.\tAT\t2\t+2AT\tp\tq");
    assert_eq!(rows[2], "tig1\t299\t302\tx\ty\tGGC\t.\t-3\t-3GGC\tp\tq");

    assert_eq!(
        fs::read_to_string(&outputs.unmatched).unwrap(),
        "tig1\t42\t43\tx\ty\t.\tC\tz\t\tp\tq\n"
    );
    assert!(
        fs::read_to_string(&outputs.warning)
            .unwrap()
            .starts_with("tig1\t299\t")
    );
    assert!(
        fs::read_to_string(&outputs.non_warning)
            .unwrap()
            .starts_with("tig1\t99\t")
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    let changes = dir.path().join("changes.bed");
    fs::write(&changes, "tig1\t100\tNA\t100\tNA\t.\tAT\n").unwrap();
    let candidates = dir.path().join("candidates.txt");
    fs::write(&candidates, "tig1\t99\t100\tx\ty\t.\tAT\tz\t\tp\tq\n").unwrap();

    let outputs = CrossCheckPaths {
        primary: dir.path().join("a.txt"),
        unmatched: dir.path().join("b.txt"),
        non_warning: dir.path().join("c.txt"),
        warning: dir.path().join("d.txt"),
    };

    cross_check_files(&changes, &candidates, &outputs).unwrap();
    let first = fs::read(&outputs.primary).unwrap();
    cross_check_files(&changes, &candidates, &outputs).unwrap();
    let second = fs::read(&outputs.primary).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_short_unmatched_candidate_goes_to_unmatched_file() {
    let dir = tempdir().unwrap();
    let changes = dir.path().join("changes.bed");
    fs::write(&changes, "tig1\t100\tNA\t100\tNA\t.\tAT\n").unwrap();
    let candidates = dir.path().join("candidates.txt");
    fs::write(
        &candidates,
        "chr9\t5\t6\tc3\tc4\t.\tA\tc7\t\n\
         tig1\t99\t100\tx\ty\t.\tAT\tz\t\tp\tq\n",
    )
    .unwrap();

    let outputs = CrossCheckPaths {
        primary: dir.path().join("a.txt"),
        unmatched: dir.path().join("b.txt"),
        non_warning: dir.path().join("c.txt"),
        warning: dir.path().join("d.txt"),
    };

    let summary = cross_check_files(&changes, &candidates, &outputs).unwrap();
    assert_eq!(summary.matched, 1);
    assert_eq!(summary.unmatched, 1);
    assert_eq!(
        fs::read_to_string(&outputs.unmatched).unwrap(),
        "chr9\t5\t6\tc3\tc4\t.\tA\tc7\t\n"
    );
}
