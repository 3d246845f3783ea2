mod args;

use args::{BlockArgs, Cli, Commands};
use clap::Parser;

use aes128::{Cipher, Direction, Key, expand_key, to_hex};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error(transparent)]
    Aes(#[from] aes128::Error),
}

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if let Err(e) = aes_cli(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn aes_cli(args: Cli) -> Result<(), CliError> {
    match args.command {
        Commands::Encrypt(block_args) => run_block(block_args, Direction::Encrypt),
        Commands::Decrypt(block_args) => run_block(block_args, Direction::Decrypt),
        Commands::ExpandKey(key_args) => {
            let key = Key::try_from_slice(&parse_hex(&key_args.key)?)?;
            for (round, round_key) in expand_key(&key).iter().enumerate() {
                println!("{round:02}: {}", to_hex(round_key));
            }
            Ok(())
        }
        Commands::GenKey => {
            let key = Key::random()?;
            println!("{}", to_hex(key.as_bytes()));
            Ok(())
        }
        Commands::SelfTest => {
            aes128::self_test()?;

            // same output shape as the reference check: ciphertext, then its decryption
            let case = aes128::FIPS197_C1;
            let cipher = Cipher::new(&Key::from(case.key));
            let ct = cipher.encrypt_block(&case.plaintext)?;
            let pt = cipher.decrypt_block(&ct)?;
            println!("{} {}", to_hex(&ct), to_hex(&pt));
            Ok(())
        }
    }
}

fn run_block(block_args: BlockArgs, direction: Direction) -> Result<(), CliError> {
    // hex decoding happens here, length checks are left to the library
    let key = Key::try_from_slice(&parse_hex(&block_args.key.key)?)?;
    let block = parse_hex(&block_args.block)?;

    let cipher = Cipher::new(&key);
    let out = cipher.process_block(&block, direction)?;
    println!("{}", to_hex(&out));
    Ok(())
}

fn parse_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(&digits);
    hex::decode(digits)
}
