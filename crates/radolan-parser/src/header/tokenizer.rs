//! Splitting of the delimiter-free header text into fields.
//!
//! RADOLAN headers have no separators between fields. A field name is a run
//! of uppercase letters and its content is everything up to the next
//! uppercase run:
//!
//! ```text
//! BY22205LV 6  1.0 19.0 ...
//! ^^     ^^
//! ```

use std::collections::HashMap;

/// Split the header fields (product code, timestamp and terminator already
/// stripped) into `name -> content`.
///
/// A header that does not start with an uppercase letter yields an empty map,
/// since no field name exists to own the leading content. Repeated names keep
/// the last occurrence. A trailing name without content maps to `""`.
pub fn split_header(header: &str) -> HashMap<&str, &str> {
    let mut fields = HashMap::new();
    if header.is_empty() {
        return fields;
    }

    let (mut begin_key, mut end_key) = (0, 0);
    let (mut begin_value, mut end_value) = (0, 0);
    let mut value_open = false;

    for (i, c) in header.char_indices() {
        if c.is_uppercase() {
            if value_open {
                fields.insert(&header[begin_key..end_key], &header[begin_value..end_value]);
                begin_key = i;
                value_open = false;
            }
            end_key = i + c.len_utf8();
        } else {
            if i == 0 {
                return fields;
            }
            if !value_open {
                begin_value = i;
                value_open = true;
            }
            end_value = i + c.len_utf8();
        }
    }

    let value = if value_open {
        &header[begin_value..end_value]
    } else {
        ""
    };
    fields.insert(&header[begin_key..end_key], value);

    fields
}
