//! Quote-aware field splitting for plain-text records.
//!
//! Either `"` or `'` opens a quoted section; only the same character closes
//! it, and the other one is kept as literal text while a quote is open.
//! Quote marks themselves never reach the output. A delimiter inside a
//! quoted section is kept as content.
//!
//! Known limitation: quoted text that itself contains the opposite quote
//! character around a delimiter is not protected beyond the rules above.
//! A trailing empty field is dropped (`a,b,` yields two fields).

pub const DEFAULT_DELIMITER: char = ',';

pub fn tokenize(line: &str) -> Vec<String> {
    tokenize_with(line, DEFAULT_DELIMITER)
}

pub fn tokenize_with(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quote: Option<char> = None;

    for c in line.chars() {
        if c == '"' || c == '\'' {
            match quote {
                None => quote = Some(c),
                Some(open) if open == c => quote = None,
                Some(_) => field.push(c),
            }
            continue;
        }

        if quote.is_none() && c == delimiter {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }

    if !field.is_empty() {
        fields.push(field);
    }

    fields
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tokenize.rs"]
mod tests;
