use anyhow::Result;
use clap::Args;
use geohash36::geocode;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// Geohash-36 string of 1 to 10 symbols
	#[arg(required = true)]
	geohash: String,

	/// number of decimal digits in the decoded coordinates
	#[arg(long, short, default_value_t = geocode::DEFAULT_ACCURACY)]
	accuracy: u32,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::debug!("decoding \"{}\" at accuracy {}", arguments.geohash, arguments.accuracy);
	let point = geocode::decode(&arguments.geohash, arguments.accuracy)?;

	println!("{point}");

	Ok(())
}
