// `NOT_EQUALS` becomes `NotEquals`: first character verbatim, rest
// lower-cased, then every underscore is dropped and the character that
// followed it is upper-cased. Literals of one character or less pass
// through untouched. Nothing here checks that the result is a legal
// identifier; the grammar is trusted to only quote keyword spellings.
pub fn to_enum_name(literal: &str) -> String {
    if literal.chars().count() <= 1 {
        return literal.to_string();
    }

    let mut chars = literal.chars();
    let head = chars.next().unwrap();

    let mut merged = String::with_capacity(literal.len());
    merged.push(head);
    merged.push_str(&chars.as_str().to_lowercase());

    let mut name = String::with_capacity(merged.len());
    let mut upper_next = false;

    for ch in merged.chars() {
        if ch == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            name.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            name.push(ch);
        }
    }

    name
}
