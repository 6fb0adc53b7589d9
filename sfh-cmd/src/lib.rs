//! Command implementations for the Smart Farm Hub CLI.
//!
//! Greenhouse commands load the farm first, then select the greenhouse
//! through the same presenter the web dashboard uses, so a greenhouse that
//! does not belong to the farm is rejected before anything is sent.

use clap::Subcommand;
use sfh_core::community::PostSort;
use std::path::PathBuf;

pub mod board;
pub mod farm;

#[derive(Subcommand)]
pub enum Command {
    /// List the greenhouses of a farm
    Greenhouses {
        /// Farm id
        #[arg(long)]
        farm: i64,
    },

    /// Show the crop groups of a greenhouse, optionally exporting them as CSV
    Groups {
        /// Farm the greenhouse belongs to
        #[arg(long)]
        farm: i64,

        /// Greenhouse id
        #[arg(long)]
        greenhouse: i64,

        /// Write the groups to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Ask an IoT device to photograph a group, then show the refreshed groups
    Capture {
        /// Farm the greenhouse belongs to
        #[arg(long)]
        farm: i64,

        /// Greenhouse id
        #[arg(long)]
        greenhouse: i64,

        /// Group to photograph
        #[arg(long)]
        group: i64,

        /// IoT device id
        #[arg(long)]
        iot: i64,

        /// Send the command and exit without waiting for the analysis
        #[arg(long)]
        no_wait: bool,
    },

    /// Upload images of a group for analysis
    Upload {
        /// Farm the greenhouse belongs to
        #[arg(long)]
        farm: i64,

        /// Greenhouse id
        #[arg(long)]
        greenhouse: i64,

        /// Group the images show
        #[arg(long)]
        group: i64,

        /// Image files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Change one grid cell (0 = path, 1 = strawberry, 2 = tomato) and save
    SetCell {
        /// Farm the greenhouse belongs to
        #[arg(long)]
        farm: i64,

        /// Greenhouse id
        #[arg(long)]
        greenhouse: i64,

        /// Zero-based row
        row: usize,

        /// Zero-based column
        col: usize,

        /// New cell value
        value: u8,
    },

    /// List community posts
    Posts {
        /// Sort order: new or popular
        #[arg(long, default_value = "new")]
        sort: PostSort,

        /// Search text
        #[arg(long, default_value = "")]
        search: String,
    },
}

pub async fn run(command: Command, base_url: &str) -> anyhow::Result<()> {
    let client = sfh_core::client::HttpClient::new(base_url)?;
    match command {
        Command::Greenhouses { farm } => farm::list_greenhouses(&client, farm).await,
        Command::Groups {
            farm,
            greenhouse,
            csv,
        } => farm::show_groups(&client, farm, greenhouse, csv.as_deref()).await,
        Command::Capture {
            farm,
            greenhouse,
            group,
            iot,
            no_wait,
        } => farm::capture(&client, farm, greenhouse, group, iot, !no_wait).await,
        Command::Upload {
            farm,
            greenhouse,
            group,
            files,
        } => farm::upload(&client, farm, greenhouse, group, &files).await,
        Command::SetCell {
            farm,
            greenhouse,
            row,
            col,
            value,
        } => farm::set_cell(&client, farm, greenhouse, row, col, value).await,
        Command::Posts { sort, search } => board::list_posts(&client, sort, &search).await,
    }
}
