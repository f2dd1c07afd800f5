pub mod cli;
pub mod cubes;
mod input;

pub use self::input::{Input, Lines};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli::Opts;
    pub use crate::input::Input;
    pub use anyhow::{anyhow, bail, Context, Result};
}

/// Read an input file.
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<Input> {
    use anyhow::{anyhow, Context};
    use std::fs::File;
    use std::io::Read;

    return inner(path, read_path).with_context(|| anyhow!("{path}"));

    fn inner(path: &'static str, read_path: &str) -> anyhow::Result<Input> {
        let mut file = File::open(read_path)?;
        let mut buf = String::with_capacity(4096);
        file.read_to_string(&mut buf)?;
        Ok(Input::new(path, buf))
    }
}

/// Open an input file under the package `inputs/` directory.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        $crate::input(path, read_path)?
    }};
}
