//! verso - spread layout and decoration template inspector

use std::fs;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use verso::{
    DefaultStyleOptions, EffectiveReadingProgression, HtmlDecorationTemplates, ReadingOrderItem,
    ReadingProgression, SpreadLayout,
};

#[derive(Parser)]
#[command(name = "verso")]
#[command(version, about = "Pagination and decoration engine for ebook readers", long_about = None)]
#[command(after_help = "EXAMPLES:
    verso spreads reading-order.json              Compute the spread layout
    verso spreads reading-order.json --json       Same, as JSON
    verso spreads manga.json --progression rtl    Right-to-left pairing
    verso templates                               Dump the default style templates")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the spread layout for a reading order
    Spreads {
        /// Reading order JSON: an array of {href, type?, page?} items
        #[arg(value_name = "READING_ORDER")]
        input: String,

        /// Declared reading progression (ltr, rtl, ttb, btt, auto)
        #[arg(long, default_value = "auto")]
        progression: String,

        /// Primary publication language, used to resolve auto progression
        #[arg(long)]
        language: Option<String>,

        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Print the default decoration style templates as JSON
    Templates,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> verso::Result<()> {
    match command {
        Command::Spreads {
            input,
            progression,
            language,
            json,
        } => {
            let data = fs::read_to_string(&input)?;
            let items: Vec<ReadingOrderItem> = serde_json::from_str(&data)?;

            let declared =
                ReadingProgression::from_property(&progression).unwrap_or(ReadingProgression::Auto);
            let effective = EffectiveReadingProgression::resolve(declared, language.as_deref());
            let layout = SpreadLayout::new(items, effective);

            if json {
                println!("{}", serde_json::to_string_pretty(layout.spreads())?);
            } else {
                print_layout(&layout);
            }
        }
        Command::Templates => {
            let templates = HtmlDecorationTemplates::default_styles(DefaultStyleOptions::default());
            println!("{}", serde_json::to_string_pretty(&templates.to_json())?);
        }
    }

    Ok(())
}

fn print_layout(layout: &SpreadLayout) {
    println!(
        "{} page(s), {} spread(s), {:?} progression",
        layout.items().len(),
        layout.spread_count(),
        layout.progression()
    );

    for (position, spread) in layout.spreads().iter().enumerate() {
        let hrefs: Vec<&str> = spread
            .pages()
            .filter_map(|index| layout.item_at(index))
            .map(|item| item.href.as_str())
            .collect();
        println!("{position:4}  {spread}  {}", hrefs.join(", "));
    }
}
