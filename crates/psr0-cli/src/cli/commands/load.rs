//! `psr0 load <class>...` – run classes through the loader chain.

use anyhow::{bail, Result};
use psr0_core::{FsIncluder, LoaderChain};

/// Loads each class in turn, sharing one includer so repeated files are read once.
/// Fails if any class could not be found.
pub fn run_load(chain: &LoaderChain, classes: &[String]) -> Result<()> {
    let mut includer = FsIncluder::new();
    let mut missing = 0usize;

    for class in classes {
        let before = includer.len();
        if chain.try_all(class, &mut includer)? {
            match includer.units().get(before) {
                Some(unit) => println!("loaded {class} from {}", unit.path.display()),
                None => println!("loaded {class} (already included)"),
            }
        } else {
            println!("not found: {class}");
            missing += 1;
        }
    }

    if missing > 0 {
        bail!("{missing} of {} classes not found", classes.len());
    }
    Ok(())
}
