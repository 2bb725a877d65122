use std::io::Write;

use chunkline_splitters::Language;

pub fn run<W: Write>(language: Language, out: &mut W) -> anyhow::Result<()> {
    for separator in language.separators() {
        writeln!(out, "{separator:?}")?;
    }
    Ok(())
}
