use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use server_api::{count_overdue, group_by_series, ScheduleBuilder};
use shared::view::ScheduleViewModel;
use storage::EpisodeStore;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = "./data.json")]
    data: String,
    /// Day to compare air dates against (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Episode and overdue counts per series.
    Summary,
    /// Print a schedule page as plain text.
    Preview {
        #[arg(long)]
        upcoming: bool,
        #[arg(long)]
        max_upcoming: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = EpisodeStore::open(&cli.data)
        .with_context(|| format!("failed to load episodes from '{}'", cli.data))?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    match cli.command {
        Command::Summary => {
            let groups = group_by_series(store.snapshot());
            println!("{} episodes across {} series", store.len(), groups.len());
            for (series, episodes) in groups {
                let overdue = count_overdue(episodes.iter().copied(), today);
                println!("{series}: {} episodes, {overdue} aired", episodes.len());
            }
        }
        Command::Preview {
            upcoming,
            max_upcoming,
        } => {
            let builder = ScheduleBuilder::default().with_max_upcoming(max_upcoming);
            let view = if upcoming {
                builder.build_upcoming_view(store.snapshot(), today)
            } else {
                builder.build_all_episodes_view(store.snapshot(), today)
            };
            print_view(&view);
        }
    }

    Ok(())
}

fn print_view(view: &ScheduleViewModel) {
    println!("{}", view.title);
    for group in &view.series_groups {
        if group.show_badge {
            println!("\n{} [{}]", group.title, group.badge_count);
        } else {
            println!("\n{}", group.title);
        }
        for item in &group.episode_items {
            println!("  {:<14} {:<10} {}", item.label, item.air_date_text, item.title);
        }
    }
}
