//! Emits the `VERGEN_GIT_*` variables read by `octomino_tools::version`.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Outside a git checkout vergen warns instead of failing; the version then reads `unknown`.
    Emitter::default()
        .add_instructions(&GitclBuilder::all_git()?)?
        .emit()?;
    Ok(())
}
