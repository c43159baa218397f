//! Command-line interface for single-block AES.

#![forbid(unsafe_code)]

use aes_core::kat::FIPS197;
use aes_core::{Aes, AesError, Block, KeySize};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, error, info};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// FIPS-197 AES block cipher CLI.
#[derive(Parser)]
#[command(
    name = "aesblk",
    version,
    author,
    about = "Encrypt or decrypt single AES blocks (128/192/256-bit keys)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        /// Key as hex (32, 48 or 64 characters).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Key size in bits.
        #[arg(long, env = "AESBLK_KEY_SIZE", default_value_t = 128)]
        key_size: u32,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Dec {
        /// Key as hex (32, 48 or 64 characters).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Key size in bits.
        #[arg(long, env = "AESBLK_KEY_SIZE", default_value_t = 128)]
        key_size: u32,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Run the FIPS-197 vectors and random round trips for every key size.
    Check {
        /// Random round trips per key size.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt and decrypt a random block under a random key.
    Demo {
        /// Key size in bits.
        #[arg(long, env = "AESBLK_KEY_SIZE", default_value_t = 128)]
        key_size: u32,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            key_size,
            block_hex,
        } => cmd_transform(Direction::Encrypt, &key_hex, key_size, &block_hex),
        Commands::Dec {
            key_hex,
            key_size,
            block_hex,
        } => cmd_transform(Direction::Decrypt, &key_hex, key_size, &block_hex),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { key_size, seed } => cmd_demo(key_size, seed),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn name(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

fn cmd_transform(
    direction: Direction,
    key_hex: &str,
    key_size: u32,
    block_hex: &str,
) -> Result<()> {
    let out = transform(direction, key_hex, key_size, block_hex)?;
    println!("{}", hex::encode(out));
    Ok(())
}

fn transform(
    direction: Direction,
    key_hex: &str,
    key_size: u32,
    block_hex: &str,
) -> Result<Block> {
    let key = decode_hex("key", key_hex)?;
    let block = decode_hex("block", block_hex)?;
    let result = match direction {
        Direction::Encrypt => aes_core::encrypt(&key, key_size, &block),
        Direction::Decrypt => aes_core::decrypt(&key, key_size, &block),
    };
    result.map_err(|err| report(direction, err))
}

// The core never logs; invalid key sizes are reported here.
fn report(direction: Direction, err: AesError) -> anyhow::Error {
    if let AesError::InvalidKeySize(bits) = err {
        error!("aes {}: invalid key size {}", direction.name(), bits);
    }
    anyhow::Error::new(err).context(format!("aes {} failed", direction.name()))
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for vector in FIPS197 {
        let aes = Aes::from_slice(vector.key, vector.key_size)
            .with_context(|| format!("load {} vector key", vector.key_size))?;
        if aes.encrypt_block(&vector.plaintext) != vector.ciphertext {
            bail!("{} known-answer encryption mismatch", vector.key_size);
        }
        if aes.decrypt_block(&vector.ciphertext) != vector.plaintext {
            bail!("{} known-answer decryption mismatch", vector.key_size);
        }
        info!("{} known-answer vector ok", vector.key_size);
    }

    let mut rng = seeded_rng(seed);
    for size in KeySize::ALL {
        for sample in 0..samples {
            let aes = random_cipher(&mut rng, size)?;
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            let ct = aes.encrypt_block(&block);
            if aes.decrypt_block(&ct) != block {
                bail!("{size} round trip failed on sample {sample}");
            }
        }
        debug!("{size}: {samples} random round trips ok");
    }
    println!("all checks passed");
    Ok(())
}

fn cmd_demo(key_size: u32, seed: Option<u64>) -> Result<()> {
    let size = KeySize::from_bits(key_size).map_err(|err| report(Direction::Encrypt, err))?;
    let mut rng = seeded_rng(seed);
    let mut key_bytes = vec![0u8; size.key_len()];
    rng.fill_bytes(&mut key_bytes);
    let aes = Aes::from_slice(&key_bytes, size)?;

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    let ciphertext = aes.encrypt_block(&block);
    let decrypted = aes.decrypt_block(&ciphertext);

    println!("demo key ({size}): {}", hex::encode(&key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn decode_hex(what: &str, hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

fn random_cipher(rng: &mut impl RngCore, size: KeySize) -> Result<Aes> {
    let mut key_bytes = vec![0u8; size.key_len()];
    rng.fill_bytes(&mut key_bytes);
    Ok(Aes::from_slice(&key_bytes, size)?)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_128: &str = "000102030405060708090a0b0c0d0e0f";
    const PLAIN: &str = "00112233445566778899aabbccddeeff";
    const CIPHER: &str = "69c4e0d86a7b0430d8cdb78070b4c55a";

    #[test]
    fn transform_runs_both_directions() {
        let ct = transform(Direction::Encrypt, KEY_128, 128, PLAIN).unwrap();
        assert_eq!(hex::encode(ct), CIPHER);
        let pt = transform(Direction::Decrypt, KEY_128, 128, CIPHER).unwrap();
        assert_eq!(hex::encode(pt), PLAIN);
    }

    #[test]
    fn invalid_key_size_keeps_core_error() {
        let err = transform(Direction::Encrypt, KEY_128, 100, PLAIN).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AesError>(),
            Some(&AesError::InvalidKeySize(100))
        );
        assert!(format!("{err:#}").contains("aes encrypt failed"));
    }

    #[test]
    fn bad_hex_is_reported() {
        let err = transform(Direction::Decrypt, "zz", 128, PLAIN).unwrap_err();
        assert!(err.to_string().contains("decode key hex"));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(9));
        let mut b = seeded_rng(Some(9));
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn check_and_demo_succeed_with_seed() {
        cmd_check(4, Some(1)).unwrap();
        cmd_demo(256, Some(2)).unwrap();
        assert!(cmd_demo(100, Some(2)).is_err());
    }

    #[test]
    fn cli_parses_demo_arguments() {
        let cli = Cli::try_parse_from(["aesblk", "demo", "--key-size", "192"]).unwrap();
        match cli.command {
            Commands::Demo { key_size, seed } => {
                assert_eq!(key_size, 192);
                assert_eq!(seed, None);
            }
            _ => panic!("expected demo"),
        }
    }
}
