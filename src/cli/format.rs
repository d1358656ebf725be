//! Format output dispatch helpers

/// Dispatch output by format with minimal boilerplate.
///
/// Use when the json branch returns `Result` and human/records return `()`.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => print_json(&value),
///     human => { println!("Done"); },
///     records => { println!("H notelink=1 records=1 mode=done"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
