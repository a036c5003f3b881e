/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Applies one cleaning or property function to a single value, which is
//! handy for checking how a cell will be normalized.

use crate::cells::{
    average_range, remove_uncertainty, standardize_synthesis_method, try_normalize_formula,
};
use crate::classify::{classify_microstructure, classify_processing_method};
use crate::properties::{calculate_density, calculate_youngs_modulus};
use crate::records::{categorize_phases_with, neg_elongation_with, FieldNames, Record};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;

/// hea-data - cleaning helpers for high-entropy alloy datasets
#[derive(Debug, Parser)]
#[command(name = "hea-data")]
#[command(version)]
#[command(about = "Normalize alloy dataset cells and estimate ROM properties", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Strip uncertainty and inequality annotations from a value
    Uncertainty { cell: String },

    /// Average an integer range such as "2-5"
    Range { cell: String },

    /// Remove whitespace from a synthesis-method code
    Synthesis { method: String },

    /// Normalize a formula and estimate its density and Young's modulus
    Formula { formula: String },

    /// Classify a synthesis-method code into a processing route
    Processing { method: String },

    /// Classify a "+"-separated phase list
    Microstructure { phases: String },

    /// Categorize phases and sign the elongation of one JSON row
    Row {
        /// JSON file holding a single object of column name to value
        path: PathBuf,

        /// Phase column name
        #[arg(long)]
        phases_field: Option<String>,

        /// Elongation column name
        #[arg(long)]
        elongation_field: Option<String>,

        /// Test type column name
        #[arg(long)]
        test_type_field: Option<String>,
    },
}

/// Execute a parsed command line and print its result
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let result = evaluate(cli.command)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_plain(&result);
    }
    Ok(())
}

/// Evaluate a command into a JSON value without printing it
pub fn evaluate(command: Commands) -> anyhow::Result<Value> {
    let value = match command {
        Commands::Uncertainty { cell } => json!({ "value": remove_uncertainty(&cell) }),
        Commands::Range { cell } => json!({ "value": average_range(&cell) }),
        Commands::Synthesis { method } => {
            json!({ "value": standardize_synthesis_method(&method) })
        }
        Commands::Formula { formula } => {
            json!({
                "normalized": try_normalize_formula(&formula)?,
                "density": calculate_density(&formula)?,
                "youngs_modulus": calculate_youngs_modulus(&formula)?,
            })
        }
        Commands::Processing { method } => {
            json!({ "value": classify_processing_method(&method).label() })
        }
        Commands::Microstructure { phases } => {
            json!({ "value": classify_microstructure(&phases) })
        }
        Commands::Row {
            path,
            phases_field,
            elongation_field,
            test_type_field,
        } => {
            let defaults = FieldNames::default();
            let fields = FieldNames {
                phases: phases_field.unwrap_or(defaults.phases),
                elongation: elongation_field.unwrap_or(defaults.elongation),
                test_type: test_type_field.unwrap_or(defaults.test_type),
            };
            let row = Record::from_json_file(&path)?;
            json!({
                "phase_category": categorize_phases_with(&row, &fields)?,
                "elongation": neg_elongation_with(&row, &fields)?,
            })
        }
    };
    Ok(value)
}

fn print_plain(result: &Value) {
    let Some(object) = result.as_object() else {
        println!("{}", result);
        return;
    };
    if let (1, Some(value)) = (object.len(), object.get("value")) {
        println!("{}", plain(value));
        return;
    }
    for (key, value) in object {
        println!("{:<16} {}", key, plain(value));
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
