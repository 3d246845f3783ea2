use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt a single 16-byte block
    Encrypt(BlockArgs),

    /// Decrypt a single 16-byte block
    Decrypt(BlockArgs),

    /// Print the eleven round keys for a key
    ExpandKey(KeyArgs),

    /// Print a random 128-bit key
    GenKey,

    /// Run the built-in known-answer vectors
    SelfTest,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct KeyArgs {
    /// Key as 32 hex digits (whitespace and a leading 0x are ignored).
    #[arg(short = 'k', long = "key", value_name = "HEX")]
    pub key: String,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct BlockArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Block as 32 hex digits (whitespace and a leading 0x are ignored).
    #[arg(short = 'b', long = "block", value_name = "HEX")]
    pub block: String,
}
