use predicates::prelude::*;

use super::basetools;

const REGISTRY: &str = "8be4df61-93ca-11d2-aa0d-00e098032b8c";
const STRUCT: &str =
    "{0x8be4df61, 0x93ca, 0x11d2, {0xaa, 0x0d, 0x00, 0xe0, 0x98, 0x03, 0x2b, 0x8c}}";

#[test]
fn test_to_struct() {
    basetools()
        .args(["guid", "to-struct", REGISTRY])
        .assert()
        .success()
        .stdout(format!("{STRUCT}\n"));
}

#[test]
fn test_to_registry_and_value_name() {
    basetools()
        .args(["guid", "to-registry", STRUCT])
        .assert()
        .success()
        .stdout(format!("{REGISTRY}\n"));

    basetools()
        .args(["guid", "value-name", STRUCT])
        .assert()
        .success()
        .stdout("8be4df61_93ca_11d2_aa0d_00e098032b8c\n");
}

#[test]
fn test_multiple_inputs_one_per_line() {
    basetools()
        .args(["guid", "to-struct", REGISTRY, "00000000-0000-0000-0000-000000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(STRUCT))
        .stdout(predicate::str::contains(
            "{0x00000000, 0x0000, 0x0000, {0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00}}",
        ));
}

#[test]
fn test_invalid_guid_reports_error() {
    basetools()
        .args(["guid", "to-registry", "{0x1, 0x2}"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid GUID value string"))
        .stderr(predicate::str::contains("suggestion"));
}
