//! Text helpers for card labels.

/// Label shown in a card header when detection found nothing.
pub const NO_OBJECT_DETECTED: &str = "No Object Detected";

/// Title-case every whitespace-delimited token.
///
/// Within a token, anything before the first word character (alphanumeric
/// or `_`) is kept verbatim; that character is upper-cased and the rest of
/// the token lower-cased. Whitespace is preserved as-is, so the function is
/// idempotent. A first character whose upper-case form expands to more than
/// one character (e.g. `ß`) is left alone.
///
/// ```
/// use homewatch_core::formatting::title_case;
///
/// assert_eq!(title_case("PERSON, dog"), "Person, Dog");
/// assert_eq!(title_case("(person) 'dog"), "(Person) 'Dog");
/// assert_eq!(title_case(""), "");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // Still looking for the first word character of the current token.
    let mut in_prefix = true;

    for c in s.chars() {
        if c.is_whitespace() {
            out.push(c);
            in_prefix = true;
        } else if in_prefix {
            if is_word_char(c) {
                let mut upper = c.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(u), None) => out.push(u),
                    _ => out.push(c),
                }
                in_prefix = false;
            } else {
                out.push(c);
            }
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Header label for a card: title-cased objects, or the placeholder text
/// when the backend sent nothing. A blank but non-empty value is shown as-is.
pub fn detected_label(detected_objects: &str) -> String {
    if detected_objects.is_empty() {
        NO_OBJECT_DETECTED.to_string()
    } else {
        title_case(detected_objects)
    }
}
