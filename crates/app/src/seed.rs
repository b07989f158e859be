//! Run seed resolution: an explicit `--seed` wins, otherwise the app mixes
//! fresh process entropy so every launch plays a different organism.

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

pub fn generate_runtime_seed() -> u64 {
    let now_nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    mix_seed((now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17))
}

/// Accepts `--seed N` and `--seed=N`; anything else falls through untouched.
pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedChoice, String> {
    let mut index = 1_usize;
    while index < args.len() {
        let argument = args[index].as_str();
        if argument == "--seed" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --seed".to_string());
            };
            return parse_seed_value(value).map(SeedChoice::Cli);
        }
        if let Some(value) = argument.strip_prefix("--seed=") {
            return parse_seed_value(value).map(SeedChoice::Cli);
        }
        index += 1;
    }
    Ok(SeedChoice::Generated(generated_seed))
}

fn parse_seed_value(raw: &str) -> Result<u64, String> {
    raw.parse::<u64>().map_err(|_| format!("seed value '{raw}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
