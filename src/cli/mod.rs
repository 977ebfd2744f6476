//! CLI Module
//!
//! Command-line interface for the Shapeview conversion pipeline: validate
//! a file selection and upload a bundle to the conversion service.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shapeview - shapefile upload and layer state tool
#[derive(Parser, Debug)]
#[command(name = "shapeview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a file selection and report bundle completeness
    #[command(name = "classify")]
    Classify {
        /// Files to classify
        files: Vec<PathBuf>,
    },

    /// Upload a shapefile bundle to the conversion service
    #[command(name = "upload")]
    Upload {
        /// Files making up the bundle (shp, shx, dbf)
        files: Vec<PathBuf>,

        /// Layer color for the resulting layer
        #[arg(short, long, default_value = crate::app::DEFAULT_LAYER_COLOR)]
        color: String,

        /// Conversion service endpoint (overrides SHAPEVIEW_CONVERT_URL)
        #[arg(short, long)]
        endpoint: Option<String>,
    },
}
