use anyhow::bail;
use keyword_generate::{export_keyword_pretty, scan_quoted_literals, to_enum_name, KeywordSymbol};
use std::io::{BufWriter, Write};

pub fn main() -> Result<(), anyhow::Error> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 2 {
        bail!("Usage: cmd <infilepath>");
    }

    let source = std::fs::read_to_string(&args[1])?;
    let exported = export_keyword_pretty(&keyword_symbols(&source));

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writer.write_all(exported.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

fn keyword_symbols(source: &str) -> Vec<KeywordSymbol> {
    scan_quoted_literals(source).into_iter()
        .map(|literal| {
            let enum_name = to_enum_name(&literal);
            KeywordSymbol { literal, enum_name }
        })
        .collect::<Vec<_>>()
}
