//! End-to-end driver tests over real files.

use kotgen_cli::driver::{DriveOptions, discover_inputs, drive_file};
use std::fs;

#[test]
fn converts_a_declaration_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("greeter.d.ts");
    fs::write(
        &input,
        "declare var version: string;\ndeclare function greet(name: string, loud?: boolean): void;\n",
    )
    .unwrap();

    let result = drive_file(&input, &DriveOptions::default()).unwrap();
    assert!(!result.has_errors(), "{:?}", result.diagnostics);

    let text = result.text.unwrap();
    assert_eq!(
        text,
        "package greeter\n\nvar version: String = definedExternally\nfun greet(name: String, loud: Boolean? = null): Unit = definedExternally\n"
    );
}

#[test]
fn skipped_declaration_is_reported_but_file_still_converts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("partial.d.ts");
    fs::write(
        &input,
        "declare function bad(...xs: number): void;\ndeclare var ok: number;\n",
    )
    .unwrap();

    let result = drive_file(&input, &DriveOptions::default()).unwrap();
    assert!(result.has_errors());
    let text = result.text.unwrap();
    assert!(text.contains("var ok: Number"));
    assert!(!text.contains("bad"));
}

#[test]
fn fatal_translation_error_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.d.ts");
    fs::write(&input, "declare function f(...xs: Array<number, string>): void;\n").unwrap();

    let result = drive_file(&input, &DriveOptions::default()).unwrap();
    assert!(result.text.is_none());
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message_text.contains("Array should have one type argument"))
    );
}

#[test]
fn discovery_walks_directories_for_declaration_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("a.d.ts"), "declare var a: number;").unwrap();
    fs::write(dir.path().join("nested/b.d.ts"), "declare var b: number;").unwrap();
    fs::write(dir.path().join("ignored.ts"), "let x = 1;").unwrap();

    let inputs = discover_inputs(&[dir.path().to_path_buf()]).unwrap();
    let names: Vec<String> = inputs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.d.ts", "b.d.ts"]);
}

#[test]
fn dump_json_serializes_declarations() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("api.d.ts");
    fs::write(&input, "declare function ping(): void;\n").unwrap();

    let options = DriveOptions {
        dump_json: true,
        ..DriveOptions::default()
    };
    let result = drive_file(&input, &options).unwrap();
    let json = result.text.unwrap();
    assert!(json.contains("\"Function\""));
    assert!(json.contains("\"ping\""));
}
