use clap::{Parser, Subcommand, ValueEnum};

/// typedenv - read environment variables as typed values
#[derive(Parser, Debug)]
#[command(name = "typedenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read one variable and print its coerced value to stdout
    Get {
        /// Environment variable name
        #[arg(value_name = "KEY")]
        key: String,

        /// Target type
        #[arg(long, value_enum, default_value_t = Kind::String)]
        kind: Kind,

        /// Default value, written in the same form the variable would be
        #[arg(long, value_name = "RAW")]
        default: Option<String>,

        /// Print nothing and exit 0 when the variable is absent
        #[arg(long, default_value = "false", conflicts_with = "default")]
        optional: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    String,
    Int,
    Bool,
    Json,
}
