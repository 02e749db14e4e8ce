//! Print random colors along with their value in every representation.

use anyhow::Result;
use clap::Parser;
use colorix::{Color, Space};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "palette",
    about = "Generate random colors in RGB, CMYK or hex",
    version
)]
struct Cli {
    /// Representation to generate colors in: rgb, cmyk or hex
    #[arg(short, long, default_value = "rgb")]
    mode: String,

    /// Number of colors to generate
    #[arg(short, long, default_value_t = 8)]
    count: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorix=warn,colorix_palette=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    // Validate the mode up front so a typo fails before any output.
    let space: Space = cli.mode.parse()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(%space, count = cli.count, seed = ?cli.seed, "Generating palette");

    for _ in 0..cli.count {
        let color = colorix::random_in(&mut rng, space);
        println!("{}", row(&color));
    }

    Ok(())
}

/// Format a color in all three representations, one column each.
fn row(color: &Color) -> String {
    let columns = Space::ALL.map(|space| format!("{:<22}", color.to_space(space).to_string()));
    columns.join(" ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["palette"]);
        assert_eq!(cli.mode, "rgb");
        assert_eq!(cli.count, 8);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn row_lists_every_representation() {
        let color = Color::from(colorix::Rgb::new(255, 0, 255).unwrap());
        let row = row(&color);
        assert!(row.starts_with("rgb(255, 0, 255)"));
        assert!(row.ends_with("#ff00ff"));
        assert!(row.contains("cmyk(0, 100, 0, 0)"));
    }
}
