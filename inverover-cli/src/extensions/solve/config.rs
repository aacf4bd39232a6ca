#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use inverover::prelude::*;
use std::io::{BufReader, Read};

/// Reads algorithm configuration from json. Missing properties get default values.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<InverOverConfig> {
    let config: InverOverConfig =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))?;

    config.validate()?;

    Ok(config)
}
