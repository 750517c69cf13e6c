//! CSV line tokenizer
//!
//! Splits one physical line into fields, honoring double-quoted fields with
//! embedded commas and `""` escapes. Quoted fields spanning several lines
//! are not supported.
//!
//! Malformed quoting never fails: an unterminated quote simply swallows the
//! rest of the line, which is what spreadsheet exports need.

/// Split one CSV line into its fields
///
/// The result always has one more element than there are unquoted commas,
/// so an empty line yields a single empty field.
#[must_use]
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            },
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}
