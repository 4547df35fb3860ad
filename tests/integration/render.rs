use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::basetools;

const HEADER_TEMPLATE: &str = "\
// $MODULE
${BEGIN}extern EFI_GUID ${GUID_NAME};  // ${GUID_VALUE}
${END}";

fn write(temp: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_render_to_stdout_with_definitions() {
    let temp = TempDir::new().unwrap();
    let template = write(&temp, "list.template", "${BEGIN}${NAME}-${TAG};${END}");

    basetools()
        .arg("render")
        .arg(&template)
        .args(["--", "--list", "NAME", "A", "B", "--scalar", "TAG", "X"])
        .assert()
        .success()
        .stdout("A-X;B-X;");
}

#[test]
fn test_render_with_vars_file() {
    let temp = TempDir::new().unwrap();
    let template = write(&temp, "AutoGen.h.template", HEADER_TEMPLATE);
    let vars = write(
        &temp,
        "vars.toml",
        r#"
[vars]
MODULE = "Shell"
GUID_NAME = ["gEfiA", "gEfiB"]
GUID_VALUE = ["1", "2"]
"#,
    );

    basetools()
        .arg("render")
        .arg(&template)
        .arg("--vars")
        .arg(&vars)
        .assert()
        .success()
        .stdout("// Shell\nextern EFI_GUID gEfiA;  // 1\nextern EFI_GUID gEfiB;  // 2\n");
}

#[test]
fn test_definitions_override_vars_file() {
    let temp = TempDir::new().unwrap();
    let template = write(&temp, "t.template", "$MODULE $UNSET");
    let vars = write(&temp, "vars.toml", "[vars]\nMODULE = \"FromFile\"\n");

    basetools()
        .arg("render")
        .arg(&template)
        .arg("--vars")
        .arg(&vars)
        .args(["--", "-s", "MODULE", "FromCli"])
        .assert()
        .success()
        .stdout("FromCli $UNSET");
}

#[test]
fn test_output_dir_writes_only_changed_files() {
    let temp = TempDir::new().unwrap();
    let template = write(&temp, "AutoGen.h.template", "#define VALUE $VALUE\n");
    let out_dir = temp.path().join("Build").join("X64");
    let output = out_dir.join("AutoGen.h");

    basetools()
        .arg("render")
        .arg(&template)
        .arg("--output-dir")
        .arg(&out_dir)
        .args(["--", "--scalar", "VALUE", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "#define VALUE 1\n");

    basetools()
        .arg("render")
        .arg(&template)
        .arg("--output-dir")
        .arg(&out_dir)
        .args(["--", "--scalar", "VALUE", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchanged"));

    basetools()
        .arg("render")
        .arg(&template)
        .arg("--output-dir")
        .arg(&out_dir)
        .args(["--", "--scalar", "VALUE", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "#define VALUE 2\n");
}

#[test]
fn test_multiple_templates_to_output_dir() {
    let temp = TempDir::new().unwrap();
    let header = write(&temp, "AutoGen.h.template", "h:$N\n");
    let source = write(&temp, "AutoGen.c.template", "c:$N\n");
    let out_dir = temp.path().join("out");

    basetools()
        .arg("render")
        .arg(&header)
        .arg(&source)
        .arg("--output-dir")
        .arg(&out_dir)
        .args(["--", "-s", "N", "7"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out_dir.join("AutoGen.h")).unwrap(), "h:7\n");
    assert_eq!(fs::read_to_string(out_dir.join("AutoGen.c")).unwrap(), "c:7\n");
}

#[test]
fn test_inconsistent_repeat_count_fails() {
    let temp = TempDir::new().unwrap();
    let template = write(&temp, "t.template", "${BEGIN}$NAME=$ID${END}");

    basetools()
        .arg("render")
        .arg(&template)
        .args(["--", "-l", "NAME", "A", "B", "C", "-l", "ID", "1", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("different repeat count"));
}

#[test]
fn test_invalid_definition_fails() {
    let temp = TempDir::new().unwrap();
    let template = write(&temp, "t.template", "$X");

    basetools()
        .arg("render")
        .arg(&template)
        .args(["--", "--scalar", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid variable definition"));
}

#[test]
fn test_missing_template_fails() {
    let temp = TempDir::new().unwrap();

    basetools()
        .arg("render")
        .arg(temp.path().join("missing.template"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.template"));
}

#[test]
fn test_bad_vars_file_fails() {
    let temp = TempDir::new().unwrap();
    let template = write(&temp, "t.template", "$X");
    let vars = write(&temp, "vars.toml", "[vars]\nX = { nested = 1 }\n");

    basetools()
        .arg("render")
        .arg(&template)
        .arg("--vars")
        .arg(&vars)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid variables file"));
}

const PROGRESS_MESSAGE: &str = "Writing generated files";

/// `render --output-dir` invocation; `global` flags go before the subcommand since
/// everything after `--` is a variable definition.
fn render_to_dir(temp: &TempDir, global: &[&str]) -> assert_cmd::Command {
    let template = write(temp, "AutoGen.h.template", "#define VALUE $VALUE\n");
    let mut cmd = basetools();
    cmd.args(global)
        .arg("render")
        .arg(&template)
        .arg("--output-dir")
        .arg(temp.path().join("out"))
        .args(["--", "--scalar", "VALUE", "1"]);
    cmd
}

#[test]
fn test_progress_shown_by_default() {
    let temp = TempDir::new().unwrap();

    render_to_dir(&temp, &[])
        .env_remove("BASETOOLS_NO_PROGRESS")
        .assert()
        .success()
        .stderr(predicate::str::contains(PROGRESS_MESSAGE))
        .stderr(predicate::str::contains(" done"));
}

#[test]
fn test_progress_disabled_by_env_var() {
    let temp = TempDir::new().unwrap();

    render_to_dir(&temp, &[])
        .env("BASETOOLS_NO_PROGRESS", "1")
        .assert()
        .success()
        .stderr(predicate::str::contains(PROGRESS_MESSAGE).not());
}

#[test]
fn test_progress_disabled_by_flag() {
    let temp = TempDir::new().unwrap();

    render_to_dir(&temp, &["--no-progress"])
        .env_remove("BASETOOLS_NO_PROGRESS")
        .assert()
        .success()
        .stderr(predicate::str::contains(PROGRESS_MESSAGE).not());
}
