use std::collections::HashSet;

use crate::add_test;
use crate::common::Fixture;

// Test a plain run writes all entries next to the binary
add_test!(generates_archive_next_to_binary, async {
    let mut fixture = Fixture::install();

    let output = fixture.run_installed(&[]).await;
    assert!(output.status.success(), "generator failed: {}", output.stderr);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    assert!(fixture.archive_path().is_file());
    assert!(!fixture.work_dir().join("test.zip").exists());

    let entries = fixture.read_archive();
    assert_eq!(entries.len(), 100);
    for (i, (name, content)) in entries.iter().enumerate() {
        assert_eq!(name, &format!("answer{i:03}.txt"));
        assert_eq!(content, &format!("question{i:03}"));
    }
});

// Test the boundary entries and the absence of a 101st entry
add_test!(boundary_entries, async {
    let mut fixture = Fixture::install();

    let output = fixture.run_installed(&[]).await;
    assert!(output.status.success());

    let entries = fixture.read_archive();
    assert_eq!(
        entries.first(),
        Some(&("answer000.txt".to_string(), "question000".to_string()))
    );
    assert_eq!(
        entries.last(),
        Some(&("answer099.txt".to_string(), "question099".to_string()))
    );
    assert!(entries.iter().all(|(name, _)| name != "answer100.txt"));

    let names: HashSet<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names.len(), 100);
});

// Test that two runs produce the same archive bytes
add_test!(repeated_runs_are_identical, async {
    let mut fixture = Fixture::install();

    let output = fixture.run_installed(&[]).await;
    assert!(output.status.success());
    let first = std::fs::read(fixture.archive_path()).unwrap();

    let output = fixture.run_installed(&[]).await;
    assert!(output.status.success());
    let second = std::fs::read(fixture.archive_path()).unwrap();

    assert!(first == second);
});

// Test verbose progress reporting on stderr
add_test!(verbose_reports_progress, async {
    let mut fixture = Fixture::install();

    let output = fixture.run_installed(&["--verbose"]).await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("Added answer000.txt (11 bytes)"));
    assert!(output.stderr.contains("Added answer099.txt (11 bytes)"));
    assert!(output.stderr.contains("100 entries verified"));
    assert_eq!(fixture.read_archive().len(), 100);
});
