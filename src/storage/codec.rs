// Record Codec
//
// Encodes and decodes the two kinds of lines stored in a table file: the
// schema line (`name type` pairs) and record lines (scalar values). Both use
// the same field delimiter and never carry a trailing delimiter.

use crate::catalog::Column;
use crate::common::types::{FIELD_DELIMITER, QUOTE};
use crate::storage::error::{StorageError, StorageResult};

/// Encode a schema as `name1 type1<TAB>name2 type2...`
pub fn encode_schema_line(columns: &[Column]) -> String {
    let fields: Vec<String> = columns.iter().map(|col| col.to_string()).collect();
    encode_record_line(&fields)
}

/// Decode a schema line into its columns.
///
/// Each field is a name followed by whitespace and a type; the type is the
/// rest of the field, so it may itself contain spaces.
pub fn decode_schema_line(line: &str) -> StorageResult<Vec<Column>> {
    line.split(FIELD_DELIMITER)
        .map(|field| {
            let field = field.trim();
            match field.split_once(char::is_whitespace) {
                Some((name, data_type)) if !data_type.trim().is_empty() => {
                    Ok(Column::new(name, data_type.trim()))
                }
                _ => Err(StorageError::MalformedSchema(field.to_string())),
            }
        })
        .collect()
}

/// Encode one record as a field-delimited line
pub fn encode_record_line<S: AsRef<str>>(values: &[S]) -> String {
    let mut line = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(FIELD_DELIMITER);
        }
        line.push_str(value.as_ref());
    }
    line
}

/// Decode one record line into its fields. Field count is checked by callers.
pub fn decode_record_line(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER).map(str::to_string).collect()
}

/// Remove one pair of enclosing single quotes, if present
pub fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with(QUOTE) && value.ends_with(QUOTE) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
