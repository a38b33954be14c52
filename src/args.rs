use clap::{Arg, ArgAction, Command};

fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .help("Output format for byte sequences")
        .value_name("FORMAT")
        .value_parser(["dec", "hex"])
        .default_value("dec")
}

/// Command-line interface for the `qrecc` binary
pub fn build_cli() -> Command {
    Command::new("qrecc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("QR Code Version 1 Reed-Solomon error correction calculator")
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging (RUST_LOG overrides)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Compute the codeword for a data message")
                .arg(
                    Arg::new("message")
                        .help("Data bytes: ASCII text, or hex with --hex")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("level")
                        .short('l')
                        .long("level")
                        .help("Error correction level: 1-L, 1-M, 1-Q or 1-H")
                        .value_name("LEVEL")
                        .default_value("1-M"),
                )
                .arg(
                    Arg::new("hex")
                        .long("hex")
                        .help("Interpret MESSAGE as hex-encoded bytes")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("ecc-only")
                        .long("ecc-only")
                        .help("Print only the error correction bytes")
                        .action(ArgAction::SetTrue),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("tables")
                .about("Print the GF(2^8) exponential and logarithm tables")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Cross-check table multiplication and generator polynomials"),
        )
        .subcommand(
            Command::new("levels").about("List the supported error correction levels"),
        )
}
