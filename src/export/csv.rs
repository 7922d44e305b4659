//! CSV serialization.
//!
//! Output is UTF-8 text with CRLF row separators and RFC 4180-style quoting
//! applied only when a field contains a quote, comma, or newline.

/// The fixed export header row.
pub const CSV_HEADER: [&str; 6] = [
    "Day",
    "EmployeeID",
    "Employee Name",
    "Shift Start",
    "Shift End",
    "Break Required",
];

/// Escapes one CSV field, wrapping it in quotes and doubling internal quotes
/// only when the field contains `"`, `,`, or a newline.
pub fn escape_field(field: &str) -> String {
    let needs_quoting = field.chars().any(|c| matches!(c, '"' | ',' | '\n'));
    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serializes rows of cells to CSV bytes, CRLF-joined with no trailing
/// terminator.
pub fn serialize_rows<R, C>(rows: R) -> Vec<u8>
where
    R: IntoIterator<Item = C>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let lines: Vec<String> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| escape_field(cell.as_ref()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    lines.join("\r\n").into_bytes()
}
