//! Generates the receive ring size used by the default `EthHandle`.
//!
//! The old HAL sources declared `ETH_RX_DESC_CNT` as an overridable macro defaulting to 4.
//! The same knob is exposed here through the `ETH_RX_DESC_CNT` environment variable.
#![forbid(unsafe_code)]
use std::{env::var, fs, path::PathBuf};

/// Ring size used when the environment does not override it.
const DEFAULT_RX_DESC_CNT: usize = 4;

/// A macro to print cargo instructions.
macro_rules! cargo {
    ($param:expr, $value:expr) => {
        println!("cargo:{param}={value}", param = $param, value = $value);
    };
}

fn rx_desc_cnt() -> usize {
    let Ok(raw) = var("ETH_RX_DESC_CNT") else {
        return DEFAULT_RX_DESC_CNT;
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => panic!("ETH_RX_DESC_CNT must be at least 1"),
        Ok(count) if u32::try_from(count).is_ok() => count,
        Ok(count) => panic!("ETH_RX_DESC_CNT={count} does not fit the 32-bit ring cursor"),
        Err(err) => panic!("Invalid ETH_RX_DESC_CNT '{raw}': {err}"),
    }
}

fn main() {
    cargo!("rerun-if-changed", "./build.rs");
    cargo!("rerun-if-env-changed", "ETH_RX_DESC_CNT");

    let count = rx_desc_cnt();
    let out_dir = PathBuf::from(var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(
        out_dir.join("config.rs"),
        format!(
            "/// Number of receive descriptors in the default ring.\n\
             pub const ETH_RX_DESC_CNT: usize = {count};\n"
        ),
    )
    .expect("Failed to write config.rs");
}
