use anyhow::Result;
use clap::Args;
use geohash36::{GeoPoint, geocode};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// latitude in degrees (-90 to 90)
	#[arg(required = true, allow_hyphen_values = true)]
	latitude: f64,

	/// longitude in degrees (-180 to 180)
	#[arg(required = true, allow_hyphen_values = true)]
	longitude: f64,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let point = GeoPoint::new(arguments.latitude, arguments.longitude)?;
	log::debug!("encoding {point:?}");

	println!("{}", geocode::encode(&point)?);

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn encodes_a_known_vector() {
		run_command(vec!["geohash36", "encode", "54", "32"]).unwrap();
	}

	#[test]
	fn accepts_negative_coordinates() {
		run_command(vec!["geohash36", "encode", "-40.689167", "-74.044444"]).unwrap();
	}

	#[test]
	fn rejects_out_of_range_latitude() {
		assert!(run_command(vec!["geohash36", "encode", "91", "0"]).is_err());
	}
}
