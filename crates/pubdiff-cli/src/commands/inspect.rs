//! `pubdiff inspect`: show what a comparison would see for one build.

use pubdiff_core::application::TypeListing;

use crate::{
    cli::{InspectArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: InspectArgs, output: OutputManager) -> CliResult<()> {
    let type_name = args.type_name.as_deref().map(str::trim);
    if type_name == Some("") {
        return Err(CliError::InvalidInput {
            message: "--type must not be empty".into(),
            source: None,
        });
    }

    let listings = super::comparison_service().inspect(&args.path, type_name)?;

    match output.format() {
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(&listings).map_err(|e| CliError::IoError {
                message: "serialising listing".into(),
                source: e.into(),
            })?;
            output.data(&text)?;
        }
        OutputFormat::Plain => {
            for line in plain_lines(&listings) {
                output.print(&line)?;
            }
        }
        OutputFormat::Human | OutputFormat::Auto => {
            for listing in &listings {
                output.header(&format!("{} {}", listing.visibility, listing.full_name))?;
                for member in &listing.members {
                    output.print(&format!("  {member}"))?;
                }
            }
            output.info(&format!("{} visible type(s)", listings.len()))?;
        }
    }

    Ok(())
}

fn plain_lines(listings: &[TypeListing]) -> Vec<String> {
    listings
        .iter()
        .flat_map(|l| {
            std::iter::once(format!("{} {}", l.visibility, l.full_name))
                .chain(l.members.iter().map(|m| format!("  {m}")))
        })
        .collect()
}
