//! qrecc binary - QR Code Version 1 error correction calculator

use anyhow::{Context, Result};
use log::{debug, LevelFilter};
use qrecc::config::{EncodeConfig, OutputFormat};
use qrecc::galois::{find_mul_mismatch, galois_field};
use qrecc::reed_solomon::{LevelConfig, QrReedSolomon};

fn main() -> Result<()> {
    let matches = qrecc::build_cli().get_matches();

    let mut logger = env_logger::Builder::new();
    logger
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .filter_level(if matches.get_flag("verbose") {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    match matches.subcommand() {
        Some(("encode", sub_matches)) => handle_encode(sub_matches),
        Some(("tables", sub_matches)) => handle_tables(sub_matches),
        Some(("check", _)) => handle_check(),
        Some(("levels", _)) => handle_levels(),
        Some((cmd, _)) => anyhow::bail!("Unknown command: {}", cmd),
        None => anyhow::bail!("No command specified"),
    }
}

fn output_format(matches: &clap::ArgMatches) -> Result<OutputFormat> {
    match matches.get_one::<String>("format") {
        Some(s) => Ok(s.parse()?),
        None => Ok(OutputFormat::default()),
    }
}

fn handle_encode(matches: &clap::ArgMatches) -> Result<()> {
    let message = matches
        .get_one::<String>("message")
        .context("MESSAGE is required")?;
    let config = EncodeConfig::from_args(matches)?;
    let data = config.data_bytes(message)?;

    let rs = QrReedSolomon::new(config.level)?;
    let codeword = rs
        .encode(&data)
        .with_context(|| format!("Failed to encode {:?}", message))?;
    debug!("{} codeword: {:?}", config.level, codeword.as_bytes());

    if config.ecc_only {
        println!("{}", config.format.render(codeword.ecc()));
    } else {
        println!("{}", config.format.render(codeword.as_bytes()));
    }
    Ok(())
}

fn handle_tables(matches: &clap::ArgMatches) -> Result<()> {
    let format = output_format(matches)?;
    let gf = galois_field();

    println!("exp: {}", format.render(gf.exp_table()));
    println!("log: {}", format.render(gf.log_table()));
    Ok(())
}

fn handle_check() -> Result<()> {
    if let Some((a, b)) = find_mul_mismatch(galois_field()) {
        anyhow::bail!("table and bitwise multiply disagree for {} * {}", a, b);
    }
    println!("multiply: table and bitwise agree on all 65536 pairs");

    for config in LevelConfig::all() {
        config.validate()?;
        anyhow::ensure!(
            config.matches_derived_generator(),
            "{} generator polynomial does not match the derived one",
            config.level
        );
        println!("{}: generator polynomial ok", config.level);
    }
    Ok(())
}

fn handle_levels() -> Result<()> {
    for config in LevelConfig::all() {
        println!(
            "{}  data={:<2} ecc={:<2} generator={:?}",
            config.level, config.data_len, config.ecc_len, config.generator
        );
    }
    Ok(())
}
