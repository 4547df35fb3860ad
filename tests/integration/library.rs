//! Scenarios that drive the library the way a build-file generator would.

use basetools::cli::args::{parse_definitions, take_variable_arguments};
use basetools::config::VariablesFile;
use basetools::templating::{Placeholders, TemplateString};
use basetools::test_utils::{SharedBuffer, init_test_logging};
use basetools::utils::Progressor;
use basetools::utils::fs::{save_file_on_change, save_files_on_change};
use basetools::utils::{guid_string_to_struct_string, guid_struct_string_to_value_name};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_generate_guid_table_and_write_once() {
    init_test_logging(None);
    let guids = ["8be4df61-93ca-11d2-aa0d-00e098032b8c", "00000000-0000-0000-0000-000000000001"];
    let structs: Vec<String> =
        guids.iter().map(|g| guid_string_to_struct_string(g).unwrap()).collect();
    let names: Vec<String> = structs
        .iter()
        .map(|s| format!("g{}", guid_struct_string_to_value_name(s).unwrap()))
        .collect();

    let vars = Placeholders::new()
        .with("GUID_NAME", names)
        .with("GUID_STRUCT", structs)
        .with("MODULE", "Sample");

    let mut source = TemplateString::new();
    source.append("// Generated\n");
    source
        .append_with("// $MODULE\n${BEGIN}EFI_GUID ${GUID_NAME} = ${GUID_STRUCT};\n${END}", &vars)
        .unwrap();

    let expected = "\
// Generated
// Sample
EFI_GUID g8be4df61_93ca_11d2_aa0d_00e098032b8c = {0x8be4df61, 0x93ca, 0x11d2, {0xaa, 0x0d, 0x00, 0xe0, 0x98, 0x03, 0x2b, 0x8c}};
EFI_GUID g00000000_0000_0000_0000_000000000001 = {0x00000000, 0x0000, 0x0000, {0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01}};
";
    assert_eq!(source.as_str(), expected);

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Build").join("AutoGen.c");
    assert!(save_file_on_change(&path, source.as_str().as_bytes()).unwrap());
    assert!(!save_file_on_change(&path, source.as_str().as_bytes()).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_command_line_definitions_merge_over_file() {
    let file = VariablesFile::parse("[vars]\nARCH = \"IA32\"\nTARGET = \"DEBUG\"\n", "vars.toml")
        .unwrap();
    let mut vars = file.to_placeholders("vars.toml").unwrap();

    let args = ["--list", "ARCH", "IA32", "X64", "--scalar", "TARGET", "RELEASE"];
    vars.merge(parse_definitions(&args).unwrap());

    let mut out = TemplateString::new();
    out.append_with("${BEGIN}$TARGET/$ARCH ${END}", &vars).unwrap();
    assert_eq!(out.as_str(), "RELEASE/IA32 RELEASE/X64 ");
}

#[test]
fn test_variable_argument_split() {
    let args = ["IA32", "X64", "--target", "DEBUG"];
    let (values, rest) = take_variable_arguments(&args);
    assert_eq!(values, ["IA32", "X64"]);
    assert_eq!(rest, ["--target", "DEBUG"]);
}

#[tokio::test]
async fn test_batch_write_under_progress() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let vars = Placeholders::new().with("N", vec!["1", "2"]);

    let mut files = Vec::new();
    for name in ["AutoGen.h", "AutoGen.c"] {
        let mut text = TemplateString::new();
        text.append_with(&format!("// {name}\n${{BEGIN}}$N\n${{END}}"), &vars).unwrap();
        files.push((temp.path().join(name), String::from(text).into_bytes()));
    }

    let output = SharedBuffer::default();
    let mut progress = Progressor::new("Generating ", " done", '.', Duration::from_secs(60))
        .with_writer(output.clone());
    progress.start().unwrap();
    let changed = save_files_on_change(&files).await.unwrap();
    progress.stop();

    assert_eq!(changed, vec![true, true]);
    assert_eq!(fs::read_to_string(temp.path().join("AutoGen.c")).unwrap(), "// AutoGen.c\n1\n2\n");
    assert_eq!(output.contents(), "Generating  done\n");
}
