//! Ad-hoc text input for `suggest` and `classify`

use std::fs;
use std::io::{self, Read};

use notelink_core::bail_usage;
use notelink_core::error::Result;

use crate::cli::InputArgs;

/// Text from `--file`, `--text` or stdin, in that order of preference
pub fn read_input(args: &InputArgs) -> Result<String> {
    let text = if let Some(path) = &args.file {
        fs::read_to_string(path)?
    } else if let Some(text) = &args.text {
        text.clone()
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    if text.trim().is_empty() {
        bail_usage!("no input text: pass --file, --text or pipe text on stdin");
    }
    Ok(text)
}
