mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Convert a coordinate pair into a Geohash-36 string
	Encode(tools::encode::Subcommand),

	/// Convert a Geohash-36 string back into coordinates
	Decode(tools::decode::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Encode(arguments) => tools::encode::run(arguments),
		Commands::Decode(arguments) => tools::decode::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{:?}", cli);
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geohash36"]).unwrap_err().to_string();
		assert!(err.starts_with("Convert coordinates to Geohash-36 strings and back."));
		assert!(err.contains("\nUsage: geohash36 [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geohash36", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geohash36 "));
	}

	#[test]
	fn encode_subcommand() {
		let output = run_command(vec!["geohash36", "encode"]).unwrap_err().to_string();
		assert!(output.starts_with("Convert a coordinate pair into a Geohash-36 string"));
	}

	#[test]
	fn decode_subcommand() {
		let output = run_command(vec!["geohash36", "decode"]).unwrap_err().to_string();
		assert!(output.starts_with("Convert a Geohash-36 string back into coordinates"));
	}
}
