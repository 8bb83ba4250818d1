//! `psr0 loaders` – show the configured chain.

use psr0_core::LoaderChain;
use std::io::{self, Write};

pub fn run_loaders(chain: &LoaderChain) -> io::Result<()> {
    write_loaders(&mut io::stdout().lock(), chain)
}

pub fn write_loaders<W: Write>(out: &mut W, chain: &LoaderChain) -> io::Result<()> {
    if chain.is_empty() {
        writeln!(out, "No loaders configured.")?;
    } else {
        writeln!(out, "{:<4} {:<24} {:<8} {}", "#", "NAMESPACE", "EXT", "ROOT")?;
        for (idx, l) in chain.loaders().iter().enumerate() {
            let ns = if l.is_catch_all() { "*" } else { l.namespace() };
            let root = l
                .include_root()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(search path)".to_string());
            writeln!(out, "{:<4} {:<24} {:<8} {}", idx, ns, l.file_extension(), root)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Search path:")?;
    for dir in chain.search_path().entries() {
        writeln!(out, "  {}", dir.display())?;
    }
    Ok(())
}
