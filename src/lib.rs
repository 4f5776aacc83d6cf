mod convert;
mod export_keyword;
mod scan;

pub use convert::to_enum_name;
pub use export_keyword::export_keyword_pretty;
pub use scan::scan_quoted_literals;

#[derive(Clone, Debug)]
pub struct KeywordSymbol {
    pub literal: String,
    pub enum_name: String,
}

pub fn with_indent(token_str: &str, depth: usize) -> String {
    let mut s = String::new();
    s.push_str(&"\t".repeat(depth));
    s.push_str(token_str);
    s
}
