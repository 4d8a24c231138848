//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::OneOrMany;
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Procedures) => cmd_procedures(cli),
        Some(Commands::Group {
            values,
            upper,
            strict,
        }) => cmd_group(values, *upper, *strict),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "oneormany", &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| crate::infrastructure::InfraError::io("print help", e))?;
            Ok(())
        }
    }
}

#[instrument(skip(cli))]
fn cmd_procedures(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let container = ServiceContainer::new(settings)?;
    let service = container.procedure_service();

    let stdout = io::stdout();
    let stderr = io::stderr();
    service.print_names(&mut stdout.lock(), &mut stderr.lock());
    Ok(())
}

/// Group raw values, optionally upper-casing them.
///
/// In strict mode the values must form a `Many`: no values at all is a usage
/// error, a single value is rejected by `OneOrMany::many`. Otherwise they go
/// through `from_list`, and an empty input yields `None`.
pub fn group_values(
    values: &[String],
    upper: bool,
    strict: bool,
) -> CliResult<Option<OneOrMany<String>>> {
    debug!("group_values: n={} upper={} strict={}", values.len(), upper, strict);
    if strict && values.is_empty() {
        return Err(CliError::Usage("group --strict needs at least two values".into()));
    }
    let grouped = if strict {
        Some(OneOrMany::many(values.to_vec())?)
    } else {
        OneOrMany::from_list(values.to_vec())
    };

    Ok(if upper {
        grouped.map(|g| g.map(|v| v.to_uppercase()))
    } else {
        grouped
    })
}

/// Render a grouping result for display: JSON, or `none` when absent.
pub fn render_group(grouped: Option<&OneOrMany<String>>) -> CliResult<String> {
    match grouped {
        Some(value) => Ok(serde_json::to_string(value)?),
        None => Ok("none".to_string()),
    }
}

#[instrument]
fn cmd_group(values: &[String], upper: bool, strict: bool) -> CliResult<()> {
    let grouped = group_values(values, upper, strict)?;
    output::info(&render_group(grouped.as_ref())?);
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no home directory, global config disabled"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn given_no_values_when_grouping_then_none() {
        let grouped = group_values(&[], false, false).unwrap();
        assert_eq!(grouped, None);
        assert_eq!(render_group(grouped.as_ref()).unwrap(), "none");
    }

    #[test]
    fn given_values_and_upper_when_grouping_then_maps_each_value() {
        let grouped = group_values(&strings(&["quito", "cuenca"]), true, false).unwrap();
        assert_eq!(
            grouped,
            Some(OneOrMany::Many(strings(&["QUITO", "CUENCA"])))
        );
        assert_eq!(
            render_group(grouped.as_ref()).unwrap(),
            r#"{"tag":"Many","value":["QUITO","CUENCA"]}"#
        );
    }

    #[test]
    fn given_no_values_and_strict_when_grouping_then_usage_error() {
        let err = group_values(&[], false, true).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_single_value_and_strict_when_grouping_then_invalid_argument() {
        let err = group_values(&strings(&["quito"]), false, true).unwrap_err();
        assert!(matches!(err, CliError::Infra(_)));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }
}
