use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;
use std::env;

/// Rewrite single-dash long flags (`-input`) to their double-dash form (`--input`)
///
/// Only the names in `longs` are rewritten, optionally followed by `=value`. Everything after a
/// lone `--` is left untouched.
pub fn normalize_long_flags<I>(args: I, longs: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut escaped = false;

    args.into_iter()
        .map(|arg| {
            if escaped {
                return arg;
            }
            if arg == "--" {
                escaped = true;
                return arg;
            }

            match arg.strip_prefix('-') {
                Some(flag) if !flag.starts_with('-') && is_long(flag, longs) => format!("-{arg}"),
                _ => arg,
            }
        })
        .collect()
}

fn is_long(flag: &str, longs: &[&str]) -> bool {
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    longs.contains(&name)
}

/// Initialize logging to stderr
///
/// Warnings are always shown, each level of verbosity adds one more. `RUST_LOG` takes precedence.
pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = LoggerBuilder::new();
    builder.filter_level(level).format_timestamp(None);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONGS: &[&str] = &["input", "output", "single", "outfile"];

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_long_flags(args.iter().map(|arg| arg.to_string()), LONGS)
    }

    #[test]
    fn single_dash() {
        assert_eq!(
            normalize(&["tool", "-input", "tunes.json", "-single", "-outfile=all.abc"]),
            ["tool", "--input", "tunes.json", "--single", "--outfile=all.abc"]
        );
    }

    #[test]
    fn leaves_others_alone() {
        assert_eq!(
            normalize(&["tool", "--input", "x", "-v", "-vv", "-inputs", "-", "output"]),
            ["tool", "--input", "x", "-v", "-vv", "-inputs", "-", "output"]
        );
    }

    #[test]
    fn stops_after_escape() {
        assert_eq!(
            normalize(&["tool", "-output", "dir", "--", "-input"]),
            ["tool", "--output", "dir", "--", "-input"]
        );
    }
}
