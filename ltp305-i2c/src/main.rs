use std::{fmt::Debug, thread, time::Duration};

use anyhow::{anyhow, Result};
use clap::Parser;
use ltp305_i2c::{config, MatrixDisplay};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ltp305-demo")]
#[command(about = "Count through 0-9 and a-j on an LTP305 breakout behind an MCP2221", long_about = None)]
#[command(version)]
struct Cli {
    /// I2C address of the breakout (0x61, 0x62 or 0x63)
    #[arg(short, long, default_value = "0x61", value_parser = parse_address)]
    address: u8,
    /// LED brightness from 0.0 to 1.0
    #[arg(short, long, default_value_t = 0.5)]
    brightness: f32,
    /// Delay between frames in milliseconds
    #[arg(short, long, default_value_t = 200)]
    interval_ms: u64,
    /// Number of 0-9 passes, 0 runs forever
    #[arg(short, long, default_value_t = 0)]
    cycles: u32,
}

fn parse_address(arg: &str) -> Result<u8, String> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => arg.parse(),
    };
    parsed.map_err(|err| format!("invalid I2C address {arg:?}: {err}"))
}

fn matrix_err<E: Debug>(err: ltp305_i2c::Error<E>) -> anyhow::Error {
    anyhow!("{err}")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if !config::is_known_address(cli.address) {
        warn!(address = cli.address, "address is not one the LTP305 can be strapped to");
    }

    let mcp_config = mcp2221::Config::default();
    let i2c = mcp2221::Handle::open_first(&mcp_config)
        .map_err(|err| anyhow!("could not open MCP2221: {err:?}"))?;

    let mut matrix = MatrixDisplay::with_brightness(i2c, cli.address, cli.brightness);
    info!(
        address = matrix.address(),
        brightness = matrix.brightness().get(),
        "display ready"
    );

    let interval = Duration::from_millis(cli.interval_ms);
    let mut decimals = (false, true);
    matrix.set_decimal(Some(decimals.0), Some(decimals.1));
    matrix.show().map_err(matrix_err)?;

    let mut pass = 0u32;
    loop {
        for (digit, letter) in ('0'..='9').zip('a'..='j') {
            matrix.set_character(0, digit).map_err(matrix_err)?;
            matrix.set_character(5, letter).map_err(matrix_err)?;
            decimals = (decimals.1, decimals.0);
            matrix.set_decimal(Some(decimals.0), Some(decimals.1));
            matrix.show().map_err(matrix_err)?;
            debug!(%digit, %letter, "frame shown");
            thread::sleep(interval);
        }

        pass = pass.saturating_add(1);
        if cli.cycles != 0 && pass >= cli.cycles {
            break;
        }
    }

    info!(passes = pass, "done, blanking display");
    matrix.clear();
    matrix.show().map_err(matrix_err)?;
    Ok(())
}
