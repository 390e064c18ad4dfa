//! Integration tests for swap runs over files on disk.

use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use yoda_swap::prelude::*;

fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
    path
}

fn answers(input: &str) -> TokenPrompt<Cursor<Vec<u8>>, Vec<u8>> {
    TokenPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_swap_equality_with_yes() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path(), "main.c", "if (a == b)\n");

    let mut console = Vec::new();
    let report = YodaSwap::new(&input)
        .run(&mut answers("y\n"), &mut console)
        .unwrap();

    let output = fs::read_to_string(dir.path().join("main.c.YODA")).unwrap();
    assert_eq!(output, "if (b == a)\n");
    assert_eq!(report.swapped, 1);

    // The original stays intact
    assert_eq!(fs::read_to_string(&input).unwrap(), "if (a == b)\n");

    let console = String::from_utf8(console).unwrap();
    assert!(console.starts_with("Yoda Swap v"));
    assert!(console.contains("Swap successful: if (b == a)"));
    assert!(console.ends_with(&format!(
        "\nDone. New text file is called {}\n",
        input.with_file_name("main.c.YODA").display()
    )));
}

#[test]
fn test_trailing_brace_dropped() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path(), "loop.c", "if(x!=y){\n");

    YodaSwap::new(&input)
        .run(&mut answers("y\n"), &mut Vec::new())
        .unwrap();

    let output = fs::read_to_string(output_path_for(&input)).unwrap();
    assert_eq!(output, "if(y != x)\n");
}

#[test]
fn test_trailing_brace_kept() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path(), "loop.c", "if(x!=y){\n");

    YodaSwap::new(&input)
        .trailing(TrailingText::Keep)
        .run(&mut AutoConfirm::Yes, &mut Vec::new())
        .unwrap();

    let output = fs::read_to_string(output_path_for(&input)).unwrap();
    assert_eq!(output, "if(y != x){\n");
}

#[test]
fn test_no_conditionals_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let source = "#include <stdio.h>\n\nint main(void) {\n    return 0;\n}\n";
    let input = write_source(dir.path(), "plain.c", source);

    // An empty answer stream would decline anything the prompt was asked.
    let mut prompt = answers("");
    let report = YodaSwap::new(&input).run(&mut prompt, &mut Vec::new()).unwrap();

    assert_eq!(fs::read_to_string(output_path_for(&input)).unwrap(), source);
    assert_eq!(report.matched, 0);
    assert!(prompt.into_output().is_empty());
}

#[test]
fn test_line_count_preserved() {
    let dir = TempDir::new().unwrap();
    let source = "int a = 1;\nif (a == 1) {\n  a++;\n}\nelse if (a != 2)\n\nreturn a;";
    let input = write_source(dir.path(), "count.c", source);

    let report = YodaSwap::new(&input)
        .run(&mut answers("y y"), &mut Vec::new())
        .unwrap();

    let output = fs::read_to_string(output_path_for(&input)).unwrap();
    assert_eq!(output.lines().count(), source.lines().count());
    assert_eq!(report.lines, 7);
    assert_eq!(
        output,
        "int a = 1;\nif (1 == a)\n  a++;\n}\nelse if (2 != a)\n\nreturn a;\n"
    );
}

#[test]
fn test_mixed_answers() {
    let dir = TempDir::new().unwrap();
    let input = write_source(
        dir.path(),
        "mixed.js",
        "if (user == null)\nif (count != 0)\nif (done == true)\n",
    );

    let report = YodaSwap::new(&input)
        .run(&mut answers("n\nmaybe\ny\nY\nn\n"), &mut Vec::new())
        .unwrap();

    let output = fs::read_to_string(output_path_for(&input)).unwrap();
    assert_eq!(output, "if (user == null)\nif (0 != count)\nif (done == true)\n");
    assert_eq!(report.declined, 2);
    assert_eq!(report.swapped, 1);
    assert_eq!(report.changes[0].line_number, 2);
}

#[test]
fn test_existing_output_overwritten() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path(), "old.c", "x = 1;\n");
    write_source(dir.path(), "old.c.YODA", "stale content\nmore\n");

    YodaSwap::new(&input)
        .run(&mut AutoConfirm::Yes, &mut Vec::new())
        .unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("old.c.YODA")).unwrap(),
        "x = 1;\n"
    );
}

#[test]
fn test_custom_output_path() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path(), "a.c", "if (a == b)\n");
    let target = dir.path().join("swapped.c");

    YodaSwap::new(&input)
        .output(&target)
        .run(&mut AutoConfirm::Yes, &mut Vec::new())
        .unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "if (b == a)\n");
    assert!(!output_path_for(&input).exists());
}

#[test]
fn test_missing_input_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.c");

    let err = YodaSwap::new(&input)
        .run(&mut AutoConfirm::Yes, &mut Vec::new())
        .unwrap_err();

    assert!(matches!(err, YodaError::FileOpen { .. }));
    assert_eq!(
        err.to_string(),
        format!("{}: No such file or directory", input.display())
    );
    assert!(!output_path_for(&input).exists());
}

#[test]
fn test_directory_input_rejected() {
    let dir = TempDir::new().unwrap();
    let err = YodaSwap::new(dir.path())
        .run(&mut AutoConfirm::Yes, &mut Vec::new())
        .unwrap_err();

    assert!(matches!(err, YodaError::FileOpen { .. }));
    assert!(!output_path_for(dir.path()).exists());
}

#[test]
fn test_unwritable_output_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path(), "a.c", "if (a == b)\n");

    let err = YodaSwap::new(&input)
        .output(dir.path().join("no/such/dir/out.c"))
        .run(&mut AutoConfirm::Yes, &mut Vec::new())
        .unwrap_err();

    assert!(matches!(err, YodaError::OutputCreate { .. }));
}

#[test]
fn test_diff_of_run() {
    let dir = TempDir::new().unwrap();
    let source = "int a;\nif (a == b)\nreturn;\n";
    let input = write_source(dir.path(), "d.c", source);

    YodaSwap::new(&input)
        .run(&mut AutoConfirm::Yes, &mut Vec::new())
        .unwrap();

    let output_path = output_path_for(&input);
    let swapped = fs::read_to_string(&output_path).unwrap();
    let diff = unified_diff(source, &swapped, &input, &output_path);
    assert!(diff.contains("-if (a == b)"));
    assert!(diff.contains("+if (b == a)"));

    let summary = DiffSummary::from_diff(source, &swapped);
    assert_eq!((summary.insertions, summary.deletions), (1, 1));
}

#[test]
fn test_latin1_file_swapped_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("latin1.c");
    fs::write(&input, b"/* r\xe9sum\xe9 */\nif (name == \"caf\xe9\") {\n").unwrap();

    let report = YodaSwap::new(&input)
        .run(&mut answers("y\n"), &mut Vec::new())
        .unwrap();

    assert_eq!(report.swapped, 1);
    assert_eq!(
        fs::read(output_path_for(&input)).unwrap(),
        b"/* r\xe9sum\xe9 */\nif (\"caf\xe9\" == name)\n"
    );
}
