mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pulpit_core::DEFAULT_EVENT_COLOR;
use pulpit_core::config::PulpitConfig;
use pulpit_core::planner::Planner;
use pulpit_core::remote::RemoteGateway;

#[derive(Parser)]
#[command(name = "pulpit")]
#[command(about = "Plan sermon series and keep the calendar view in sync")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List active and archived series
    List,
    /// Create a new series
    New {
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Display color (hex token); defaults from config
        #[arg(long)]
        color: Option<String>,

        /// First service day (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last service day (YYYY-MM-DD)
        #[arg(long)]
        end: String,
    },
    /// Move a series to the archive (its calendar events stay)
    Archive {
        /// Series id or title
        series: String,
    },
    /// Restore a series from the archive
    Unarchive {
        /// Series id or title
        series: String,
    },
    /// Delete a series, its sermons, and their calendar events
    Delete {
        /// Series id or title
        series: String,
    },
    /// Manage sermons within a series
    Sermon {
        #[command(subcommand)]
        command: SermonCommands,
    },
    /// Show the derived calendar, date-ordered
    Calendar,
}

#[derive(Subcommand)]
enum SermonCommands {
    /// Add a sermon to a series
    Add {
        /// Series id or title
        series: String,
        title: String,

        /// Service day (YYYY-MM-DD); undated sermons have no calendar entry
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value = "")]
        theme: String,

        #[arg(long, default_value = "")]
        scripture: String,
    },
    /// Remove a sermon from a series
    Rm {
        /// Series id or title
        series: String,
        /// Sermon id or title
        sermon: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = PulpitConfig::load()?;
    let default_color = config
        .default_color
        .clone()
        .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string());
    let mut planner = connect(&config).await?;

    match cli.command {
        Commands::List => commands::list::run(&planner),
        Commands::New {
            title,
            description,
            color,
            start,
            end,
        } => {
            let color = color.unwrap_or(default_color);
            commands::new::run(&mut planner, title, description, color, &start, &end).await
        }
        Commands::Archive { series } => commands::archive::run(&mut planner, &series, true).await,
        Commands::Unarchive { series } => {
            commands::archive::run(&mut planner, &series, false).await
        }
        Commands::Delete { series } => commands::delete::run(&mut planner, &series).await,
        Commands::Sermon { command } => match command {
            SermonCommands::Add {
                series,
                title,
                date,
                theme,
                scripture,
            } => {
                commands::sermon::add(&mut planner, &series, title, date.as_deref(), theme, scripture)
                    .await
            }
            SermonCommands::Rm { series, sermon } => {
                commands::sermon::rm(&mut planner, &series, &sermon).await
            }
        },
        Commands::Calendar => commands::calendar::run(&planner),
    }
}

async fn connect(config: &PulpitConfig) -> Result<Planner<RemoteGateway>> {
    let Some(remote) = &config.remote else {
        anyhow::bail!(
            "No persistence provider configured.\n\n\
            Add one to {} :\n  \
            [remote]\n  \
            provider = \"local\"",
            PulpitConfig::config_path()?.display()
        );
    };

    let gateway = RemoteGateway::from_remote_config(remote);
    let mut planner = Planner::new(gateway);
    planner.load().await?;
    Ok(planner)
}
