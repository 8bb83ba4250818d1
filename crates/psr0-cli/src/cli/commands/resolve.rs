//! `psr0 resolve <class>` – show candidate paths without loading anything.

use anyhow::Result;
use psr0_core::{Candidate, FsIncluder, LoaderChain, Located};
use serde::Serialize;
use std::io::{self, Write};

/// JSON shape of `psr0 resolve --json`.
#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    class: &'a str,
    candidates: &'a [Candidate],
    resolved: Option<&'a Located>,
}

pub fn run_resolve(chain: &LoaderChain, class: &str, as_json: bool) -> Result<()> {
    write_resolve(&mut io::stdout().lock(), chain, class, as_json)
}

/// Paths that are not valid UTF-8 cannot be written as JSON and surface as an error.
pub fn write_resolve<W: Write>(
    out: &mut W,
    chain: &LoaderChain,
    class: &str,
    as_json: bool,
) -> Result<()> {
    let candidates = chain.candidates(class);
    let located = chain.locate(class, &FsIncluder::new());

    if as_json {
        let report = ResolveOutput {
            class,
            candidates: &candidates,
            resolved: located.as_ref(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    write_table(out, class, &candidates, located.as_ref())?;
    Ok(())
}

fn write_table<W: Write>(
    out: &mut W,
    class: &str,
    candidates: &[Candidate],
    located: Option<&Located>,
) -> io::Result<()> {
    writeln!(out, "{class}")?;
    for c in candidates {
        let ns = if c.namespace.is_empty() { "*" } else { c.namespace.as_str() };
        match &c.path {
            Some(p) if c.uses_search_path => {
                writeln!(out, "  [{}] {:<24} {} (search path)", c.loader, ns, p.display())?
            }
            Some(p) => writeln!(out, "  [{}] {:<24} {}", c.loader, ns, p.display())?,
            None => writeln!(out, "  [{}] {:<24} -", c.loader, ns)?,
        }
    }
    match located {
        Some(l) => writeln!(out, "=> {} (loader {})", l.path.display(), l.loader),
        None => writeln!(out, "=> not found"),
    }
}
