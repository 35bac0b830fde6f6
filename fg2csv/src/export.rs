//! Export orchestration: parse one converter variant's block, then write the
//! complete result set in the requested format.
//!
//! The whole input is read and parsed before any output is written. When the
//! parse finds nothing to export, no output file is created at all.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fgcfg_core::{write_file, BlockParser, BlockProfile, ParseOutcome, TableOptions};

use crate::cli::{AddressArgs, OutputFormat, VipArgs};

pub fn run_addresses(args: AddressArgs) -> Result<()> {
    let profile = BlockProfile::addresses(args.split_ip_subnet);
    let options = TableOptions {
        blank_row_after_record: args.newline,
        skip_header: args.skip_header,
    };
    run_export(profile, &args.input, &args.output, options, args.format)
}

pub fn run_vips(args: VipArgs) -> Result<()> {
    let options = TableOptions {
        blank_row_after_record: args.newline,
        skip_header: args.skip_header,
    };
    run_export(
        BlockProfile::vips(),
        &args.input,
        &args.output,
        options,
        args.format,
    )
}

fn run_export(
    profile: BlockProfile,
    input: &Path,
    output: &Path,
    options: TableOptions,
    format: OutputFormat,
) -> Result<()> {
    let parser = BlockParser::new(profile);
    let outcome = parser
        .parse_file(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let written = match format {
        OutputFormat::Csv => write_file(&outcome.records, &outcome.keys, &options, output)
            .with_context(|| format!("failed to write {}", output.display()))?,
        OutputFormat::Json => write_json(&outcome, output)?,
    };

    if written {
        println!(
            "wrote {} records ({} columns) to {}",
            outcome.records.len(),
            outcome.keys.len(),
            output.display()
        );
    } else {
        println!("no matching objects found; {} not written", output.display());
    }

    Ok(())
}

/// JSON rendering of the record list, subject to the same empty-result
/// no-op policy as the delimited table.
fn write_json(outcome: &ParseOutcome, path: &Path) -> Result<bool> {
    if outcome.records.is_empty() || outcome.keys.is_empty() {
        return Ok(false);
    }

    let json = serde_json::to_string_pretty(&outcome.records)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
