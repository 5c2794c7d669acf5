use anyhow::Result;
use clap::Parser;

use tunebook_tools::convert::{convert, ConvertArgs};
use tunebook_tools::utils::{init_logger, normalize_long_flags};

fn main() -> Result<()> {
    let args = ConvertArgs::parse_from(normalize_long_flags(
        wild::args(),
        ConvertArgs::LONG_FLAGS,
    ));

    init_logger(args.verbose);
    convert(args)
}
