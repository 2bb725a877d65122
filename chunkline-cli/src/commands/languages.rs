use std::io::Write;

use chunkline_splitters::Language;

pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    for language in Language::ALL {
        writeln!(
            out,
            "{:<12} {} separators",
            language.as_str(),
            language.separators().len()
        )?;
    }
    Ok(())
}
