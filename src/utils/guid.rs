//! Conversions between the textual GUID formats used in firmware build metadata.
//!
//! Three spellings of the same 128-bit value show up in build files:
//!
//! | Format | Example |
//! |--------|---------|
//! | Registry | `8be4df61-93ca-11d2-aa0d-00e098032b8c` |
//! | C structure | `{0x8be4df61, 0x93ca, 0x11d2, {0xaa, 0x0d, 0x00, 0xe0, 0x98, 0x03, 0x2b, 0x8c}}` |
//! | Value name | `8be4df61_93ca_11d2_aa0d_00e098032b8c` |
//!
//! The structure format is parsed leniently: braces and whitespace are ignored, hex
//! digits may be in either case and the `0x` prefix is optional. Output is always
//! lowercase and zero-padded.

use uuid::Uuid;

use crate::core::BasetoolsError;

/// Group lengths of a registry-format GUID.
const REGISTRY_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Number of comma-separated fields in a C structure GUID.
const STRUCT_FIELDS: usize = 11;

fn invalid(value: &str, reason: impl Into<String>) -> BasetoolsError {
    BasetoolsError::InvalidGuid {
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parses `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
fn parse_registry(guid: &str) -> Result<Uuid, BasetoolsError> {
    let trimmed = guid.trim();
    let groups: Vec<&str> = trimmed.split('-').collect();

    if groups.len() != REGISTRY_GROUPS.len() {
        return Err(invalid(guid, format!("expected 5 groups, found {}", groups.len())));
    }
    for (group, expected) in groups.iter().zip(REGISTRY_GROUPS) {
        if group.len() != expected || !group.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid(
                guid,
                format!("group '{group}' should be {expected} hex digits"),
            ));
        }
    }

    Uuid::try_parse(trimmed).map_err(|e| invalid(guid, e.to_string()))
}

fn parse_field<T>(
    guid: &str,
    field: &str,
    parse: fn(&str, u32) -> Result<T, std::num::ParseIntError>,
) -> Result<T, BasetoolsError> {
    let digits = field.strip_prefix("0x").unwrap_or(field);
    if digits.is_empty() {
        return Err(invalid(guid, format!("empty field '{field}'")));
    }
    parse(digits, 16).map_err(|e| invalid(guid, format!("field '{field}': {e}")))
}

/// Parses `{0x..., 0x..., 0x..., {0x.., ... 8 bytes}}`.
fn parse_struct(value: &str) -> Result<Uuid, BasetoolsError> {
    let normalized: String = value
        .chars()
        .filter(|c| !matches!(c, '{' | '}') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    let fields: Vec<&str> = normalized.split(',').collect();

    if fields.len() != STRUCT_FIELDS {
        return Err(invalid(
            value,
            format!("expected {STRUCT_FIELDS} fields, found {}", fields.len()),
        ));
    }

    let data1 = parse_field(value, fields[0], u32::from_str_radix)?;
    let data2 = parse_field(value, fields[1], u16::from_str_radix)?;
    let data3 = parse_field(value, fields[2], u16::from_str_radix)?;
    let mut data4 = [0u8; 8];
    for (byte, field) in data4.iter_mut().zip(&fields[3..]) {
        *byte = parse_field(value, field, u8::from_str_radix)?;
    }

    Ok(Uuid::from_fields(data1, data2, data3, &data4))
}

/// Converts a registry-format GUID to a C structure initializer.
///
/// ```rust
/// use basetools::utils::guid::guid_string_to_struct_string;
///
/// assert_eq!(
///     guid_string_to_struct_string("8BE4DF61-93CA-11D2-AA0D-00E098032B8C")?,
///     "{0x8be4df61, 0x93ca, 0x11d2, {0xaa, 0x0d, 0x00, 0xe0, 0x98, 0x03, 0x2b, 0x8c}}"
/// );
/// # Ok::<(), basetools::core::BasetoolsError>(())
/// ```
pub fn guid_string_to_struct_string(guid: &str) -> Result<String, BasetoolsError> {
    let uuid = parse_registry(guid)?;
    let (data1, data2, data3, data4) = uuid.as_fields();
    let bytes: Vec<String> = data4.iter().map(|b| format!("0x{b:02x}")).collect();

    Ok(format!("{{0x{data1:08x}, 0x{data2:04x}, 0x{data3:04x}, {{{}}}}}", bytes.join(", ")))
}

/// Converts a C structure initializer to a registry-format GUID.
pub fn guid_struct_string_to_guid_string(value: &str) -> Result<String, BasetoolsError> {
    Ok(parse_struct(value)?.hyphenated().to_string())
}

/// Converts a C structure initializer to an identifier-safe name (`_` separators).
pub fn guid_struct_string_to_value_name(value: &str) -> Result<String, BasetoolsError> {
    Ok(guid_struct_string_to_guid_string(value)?.replace('-', "_"))
}
