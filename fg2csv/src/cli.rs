use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fg2csv")]
#[command(about = "Export Fortigate firewall configuration objects to delimited tables")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Export `config firewall address` objects.
    Addresses(AddressArgs),
    /// Export `config firewall vip` objects.
    Vips(VipArgs),
}

#[derive(Parser, Debug)]
pub struct AddressArgs {
    /// Fortigate configuration file, for example fgfw.cfg.
    pub input: PathBuf,
    /// Output file path.
    #[arg(short, long, default_value = "addresses-out.csv")]
    pub output: PathBuf,
    /// Insert a blank row after each address for readability.
    #[arg(short, long)]
    pub newline: bool,
    /// Do not emit the header row.
    #[arg(short, long)]
    pub skip_header: bool,
    /// Put the IP address and subnet mask in separate columns.
    #[arg(short = 'S', long)]
    pub split_ip_subnet: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct VipArgs {
    /// Fortigate configuration file, for example fgfw.cfg.
    pub input: PathBuf,
    /// Output file path.
    #[arg(short, long, default_value = "vip-out.csv")]
    pub output: PathBuf,
    /// Insert a blank row after each VIP for readability.
    #[arg(short, long)]
    pub newline: bool,
    /// Do not emit the header row.
    #[arg(short, long)]
    pub skip_header: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}
