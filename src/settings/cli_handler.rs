// src/settings/cli_handler.rs
use crate::cli::Commands;
use crate::config::AppConfig;
use crate::settings::criteria::strip_tags;
use crate::settings::form::SettingsForm;
use crate::settings::import_export::{import_submission, read_submission};
use crate::settings::repository::SettingsRepository;
use crate::utils::utils::{format_time, truncate_string};
use anyhow::{anyhow, Result};
use tracing::info;

/// Width of criterion descriptions in listings
const DESCRIPTION_WIDTH: usize = 40;

/// Execute a command from the CLI
pub fn execute_command(command: Commands, config: AppConfig) -> Result<()> {
    match command {
        Commands::Validate { file } => {
            let submission = read_submission(&file)?;
            let form = SettingsForm::new(config);

            let result = form.validation(&submission);
            println!("{}", result.summary());

            if result.has_errors() {
                return Err(anyhow!(
                    "Settings submission has {} invalid fields",
                    result.errors.len()
                ));
            }
        },

        Commands::Normalize { file, output } => {
            let form = SettingsForm::new(config);
            let (record, validation) = import_submission(&form, &file)?;

            if validation.has_warnings() {
                eprintln!("{}", validation.summary());
            }

            match output {
                Some(output_path) => {
                    let repository = SettingsRepository::new(output_path);
                    repository.save(&record)?;
                    println!("Settings record written to: {}", repository.path().display());
                },
                None => {
                    println!("{}", serde_json::to_string_pretty(&record)?);
                },
            }
        },

        Commands::Defaults { record } => {
            let form = match record {
                Some(path) => {
                    let repository = SettingsRepository::new(path);
                    SettingsForm::for_existing(repository.load()?, config)
                },
                None => SettingsForm::new(config),
            };

            let defaults = form.data_preprocessing();
            info!(
                "Prepared form defaults with {} criterion rows",
                defaults.assessmentcriteria_count
            );
            println!("{}", serde_json::to_string_pretty(&defaults)?);
        },

        Commands::Show { record } => {
            let repository = SettingsRepository::new(record);
            let settings = repository.load()?;

            println!("\n=== PEER ASSESSMENT SETTINGS ===");
            println!("Name: {}", settings.name);
            let intro = strip_tags(&settings.intro.text);
            println!("Description: {}", truncate_string(intro.trim(), 60));
            println!("From: {}", format_time(settings.fromdate.as_ref()));
            println!("Due: {}", format_time(settings.duedate.as_ref()));
            println!("Allow Late Submissions: {}", yes_no(settings.allowlatesubmissions));
            println!("Notify Late Submissions: {}", yes_no(settings.notifylatesubmissions));
            println!("Max Files: {}", settings.maxfiles);
            println!("Treat 0 As Grade: {}", yes_no(settings.treat0asgrade));
            println!("Self Grading: {}", yes_no(settings.selfgrading));
            println!("Peer Assessment Weighting: {}%", settings.paweighting);
            println!("Non-completion Penalty: {}%", settings.noncompletionpenalty);
            println!("Justification: {}", settings.justification);
            if let Some(graded_peers) = settings.completiongradedpeers {
                println!("Completion Requires Grading Peers: {}", yes_no(graded_peers));
            }

            let criteria = repository.get_criteria()?;
            println!("\n=== ASSESSMENT CRITERIA ({}) ===", criteria.len());
            println!("{:<5} | {:<40} | {:<8} | {:<6}", "Order", "Description", "Scale", "Weight");
            println!("{:-<5}-+-{:-<40}-+-{:-<8}-+-{:-<6}", "", "", "", "");
            for criterion in &criteria {
                let description = strip_tags(&criterion.description);
                println!("{:<5} | {:<40} | {:<8} | {:<6}",
                         criterion.sortorder,
                         truncate_string(description.trim(), DESCRIPTION_WIDTH),
                         criterion.scale(),
                         criterion.weight);
            }
        },
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
