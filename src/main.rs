//! The command line front end for the spendbook library.
//!
//! Every ledger mutation and every derived view is reachable from a
//! subcommand; rendering stays here, computation stays in the library.

use std::{path::PathBuf, sync::OnceLock};

use clap::{Parser, Subcommand, ValueEnum};
use numfmt::{Formatter, Precision};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use spendbook::{
    BudgetStatus, Category, CategoryFilter, ChartKind, ChartSeries, Error, Expense, JsonFileStore,
    Ledger, SortKey, budget_progress, chart_series, dashboard_summary, filter_and_sort, to_csv,
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");
const TIMESTAMP_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Parser)]
#[command(
    name = "spendbook",
    about = "Track personal expenses and per-category monthly budgets."
)]
struct Cli {
    /// Directory where the expense and budget snapshots are stored.
    #[arg(long, default_value = ".spendbook")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a new expense.
    Add {
        /// A label describing the expense.
        name: String,
        /// The amount spent.
        amount: f64,
        /// The category the expense belongs to.
        category: Category,
        /// The date of the expense (YYYY-MM-DD), defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    /// Replace every field of an existing expense.
    Edit {
        /// The ID of the expense to edit.
        id: i64,
        /// The new label.
        name: String,
        /// The new amount.
        amount: f64,
        /// The new category.
        category: Category,
        /// The new date (YYYY-MM-DD).
        date: String,
    },
    /// Delete an expense. Deleting an unknown ID is a no-op.
    Delete {
        /// The ID of the expense to delete.
        id: i64,
    },
    /// List expenses, optionally filtered by category and sorted.
    List {
        /// Only show expenses in this category.
        #[arg(long)]
        category: Option<Category>,
        /// The order to list expenses in.
        #[arg(long, value_enum, default_value_t = SortArg::DateDesc)]
        sort: SortArg,
    },
    /// Set the monthly budget for a category.
    SetBudget {
        /// The category the limit applies to.
        category: Category,
        /// The monthly limit.
        limit: f64,
    },
    /// Show progress against each category budget for the current month.
    Progress,
    /// Show the overall total and the top spending category.
    Summary,
    /// Print chart-ready series data.
    Chart {
        /// The kind of chart to produce data for.
        #[arg(value_enum)]
        kind: ChartArg,
    },
    /// Export every expense as CSV.
    Export {
        /// Write the CSV to this file instead of standard output.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Delete every expense and budget.
    Clear {
        /// Confirm that all data should be deleted.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::DateDesc => SortKey::DateDescending,
            SortArg::DateAsc => SortKey::DateAscending,
            SortArg::AmountDesc => SortKey::AmountDescending,
            SortArg::AmountAsc => SortKey::AmountAscending,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartArg {
    Pie,
    Bar,
    Line,
}

impl From<ChartArg> for ChartKind {
    fn from(value: ChartArg) -> Self {
        match value {
            ChartArg::Pie => ChartKind::Pie,
            ChartArg::Bar => ChartKind::Bar,
            ChartArg::Line => ChartKind::Line,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::from_default_env()),
        )
        .init();

    if let Err(error) = run(Cli::parse()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let store = JsonFileStore::open(&cli.data_dir)?;
    let mut ledger = Ledger::load(store);

    match cli.command {
        Command::Add {
            name,
            amount,
            category,
            date,
        } => {
            let mut builder = Expense::build(name, amount, category);
            if let Some(date) = date {
                builder = builder.date(parse_date(&date)?);
            }

            let expense = ledger.add(builder)?;
            println!(
                "added expense {}: {} {} ({})",
                expense.id,
                expense.name,
                currency(expense.amount),
                expense.category
            );
        }
        Command::Edit {
            id,
            name,
            amount,
            category,
            date,
        } => {
            let builder = Expense::build(name, amount, category).date(parse_date(&date)?);

            let expense = ledger.update(id, builder)?;
            println!("updated expense {}", expense.id);
        }
        Command::Delete { id } => {
            ledger.remove(id)?;
            println!("deleted expense {id}");
        }
        Command::List { category, sort } => {
            let filter = match category {
                Some(category) => CategoryFilter::Only(category),
                None => CategoryFilter::All,
            };

            let rows = filter_and_sort(ledger.expenses(), filter, sort.into());

            if rows.is_empty() {
                println!("no expenses found");
                return Ok(());
            }

            for row in rows {
                println!(
                    "{:<14} {:>10} {:>10} {:<15} {}",
                    row.id,
                    format_date(row.date),
                    currency(row.amount),
                    row.category.to_string(),
                    row.name
                );
            }
        }
        Command::SetBudget { category, limit } => {
            ledger.set_budget(category, limit)?;
            println!("budget for {category} set to {}", currency(limit));
        }
        Command::Progress => {
            let now = now();
            let progress = budget_progress(
                ledger.expenses(),
                ledger.budgets(),
                now.year(),
                now.month(),
            );

            if progress.is_empty() {
                println!("no budgets set");
                return Ok(());
            }

            for entry in progress {
                println!(
                    "{:<15} {} / {} ({:.0}%, {})",
                    entry.category.to_string(),
                    currency(entry.spent),
                    currency(entry.limit),
                    entry.percentage,
                    status_label(entry.status)
                );
            }
        }
        Command::Summary => {
            let summary = dashboard_summary(ledger.expenses());
            let top_category = summary
                .top_category
                .map_or("None".to_owned(), |category| category.to_string());

            println!("total spent:  {}", currency(summary.total));
            println!("top category: {top_category}");
            println!(
                "computed at:  {}",
                summary
                    .last_computed_at
                    .format(&TIMESTAMP_FORMAT)
                    .expect("timestamps always format with a constant description")
            );
        }
        Command::Chart { kind } => match chart_series(ledger.expenses(), kind.into()) {
            ChartSeries::Pie(totals) => {
                for (category, total) in totals {
                    println!("{:<15} {}", category.to_string(), currency(total));
                }
            }
            ChartSeries::Bar(series) => {
                for bucket in series {
                    println!("{} {}", bucket.label(), currency(bucket.total));
                }
            }
            ChartSeries::Line(series) => {
                let header: Vec<String> = series
                    .categories
                    .iter()
                    .map(|category| category.to_string())
                    .collect();
                println!("date        {}", header.join(" "));

                for row in series.rows {
                    let totals: Vec<String> =
                        row.totals.iter().map(|total| currency(*total)).collect();
                    println!("{} {}", format_date(row.date), totals.join(" "));
                }
            }
        },
        Command::Export { output } => {
            if ledger.expenses().is_empty() {
                eprintln!("no expenses to export");
                return Ok(());
            }

            let csv = to_csv(ledger.expenses())?;

            match output {
                Some(path) => std::fs::write(&path, csv)
                    .map_err(|error| Error::Storage(format!("{}: {error}", path.display())))?,
                None => print!("{csv}"),
            }
        }
        Command::Clear { force } => {
            if !force {
                eprintln!("this deletes every expense and budget; pass --force to confirm");
                return Ok(());
            }

            ledger.clear()?;
            println!("all data cleared");
        }
    }

    Ok(())
}

fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, &DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

fn format_date(date: Date) -> String {
    date.format(&DATE_FORMAT)
        .expect("dates always format with a constant description")
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Safe => "safe",
        BudgetStatus::Warning => "warning",
        BudgetStatus::Danger => "danger",
    }
}

fn currency(number: f64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number > 0.0 {
        fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}
