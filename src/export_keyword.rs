use crate::{with_indent, KeywordSymbol};

pub fn export_keyword_pretty(symbols: &[KeywordSymbol]) -> String {
    // pub enum Keyword {
    //     Select,
    // ...
    // static KEYWORDS:phf::Map<&'static str, CockroachToken> = phf_map! {
    //     "SELECT" => CockroachToken::Keyword(Keyword::Select),

    let variants = symbols.iter()
        .map(|symbol| with_indent(&format!("{},", symbol.enum_name), 1))
    ;

    let map_members = symbols.iter()
        .map(|symbol| {
            let member = format!(
                "\"{}\" => CockroachToken::Keyword(Keyword::{}),",
                symbol.literal, symbol.enum_name
            );
            with_indent(&member, 1)
        })
    ;

    let iter = std::iter::empty();
    iter.chain(vec!["pub enum Keyword {".to_string()])
        .chain(variants)
        .chain(vec!["}".to_string(), "".to_string(), "".to_string()])
        .chain(vec!["static KEYWORDS:phf::Map<&'static str, CockroachToken> = phf_map! {".to_string()])
        .chain(map_members)
        .chain(vec!["}".to_string()])
        .collect::<Vec<_>>()
        .join("\n")
}
