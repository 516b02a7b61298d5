use analytics::{AccountMetrics, MetricsGenerator, MonthRef, calendar_cells, profitable_days, total_pnl};
use anyhow::Context;
use checkout::{NewEvaluationOrder, quote};
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use configuration::{ConfigArgs, DEFAULT_LOG_DIRECTIVE, DeskConfig, init_tracing, load_config};
use roster::{AccountScope, mock_accounts, scoped_accounts, visible_accounts};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// The entry point for the Velocity Desk preview tool.
fn main() -> anyhow::Result<()> {
    init_tracing(DEFAULT_LOG_DIRECTIVE)?;

    // Parse command-line arguments
    let cli = Cli::parse();
    let config = load_config(&cli.config.config)
        .with_context(|| format!("loading {}", cli.config.config.display()))?;
    tracing::debug!(accounts = config.seeds.len(), "Desk configuration ready.");

    // Execute the appropriate command
    match cli.command {
        Commands::Metrics(args) => handle_metrics(args, &config),
        Commands::Calendar(args) => handle_calendar(args, &config),
        Commands::Accounts(args) => handle_accounts(args, &config),
        Commands::Quote(args) => handle_quote(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Inspect the sample data behind the Velocity Funds trader dashboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the generated metrics for an account.
    Metrics(MetricsArgs),
    /// Show an account's daily P&L as a Sunday-first month grid.
    Calendar(CalendarArgs),
    /// List the trader account roster.
    Accounts(AccountsArgs),
    /// Price a new evaluation.
    Quote(QuoteArgs),
}

#[derive(Parser)]
struct MetricsArgs {
    /// The account id. Unknown or omitted ids show the default account.
    #[arg(long)]
    account: Option<String>,

    /// The month to generate (format: YYYY-MM). Defaults to the current month.
    #[arg(long)]
    month: Option<MonthRef>,

    /// Print the full metrics bundle as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct CalendarArgs {
    #[arg(long)]
    account: Option<String>,

    /// The month to generate (format: YYYY-MM). Defaults to the current month.
    #[arg(long)]
    month: Option<MonthRef>,
}

#[derive(Parser)]
struct AccountsArgs {
    /// Include archived accounts.
    #[arg(long)]
    show_archived: bool,

    /// Restrict the list to evaluation or funded accounts.
    #[arg(long, default_value = "all")]
    scope: AccountScope,
}

#[derive(Parser)]
struct QuoteArgs {
    /// Account size in dollars (e.g., 100000).
    #[arg(long)]
    size: Option<u32>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn generate(config: &DeskConfig, account: Option<&str>, month: Option<MonthRef>) -> AccountMetrics {
    let generator = MetricsGenerator::from_config(config);
    generator.compute(account, month.unwrap_or_else(MonthRef::current))
}

fn handle_metrics(args: MetricsArgs, config: &DeskConfig) -> anyhow::Result<()> {
    let metrics = generate(config, args.account.as_deref(), args.month);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    let overview = &metrics.metrics_overview;
    let objectives = &metrics.trading_objectives;
    let days = &metrics.calendar_month.days;

    println!("{} \u{2013} {}", metrics.account_id, metrics.calendar_month.month_label);

    let mut summary = Table::new();
    summary.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    summary.add_row(vec!["Average Win".to_string(), format!("${}", overview.avg_win)]);
    summary.add_row(vec!["Average Loss".to_string(), format!("${}", overview.avg_loss)]);
    summary.add_row(vec![
        "Win Ratio".to_string(),
        format!("{}%", (overview.win_rate * Decimal::ONE_HUNDRED).round()),
    ]);
    summary.add_row(vec!["Profit Factor".to_string(), overview.profit_factor.round_dp(1).to_string()]);
    summary.add_row(vec!["Month P&L".to_string(), format!("${}", total_pnl(days))]);
    summary.add_row(vec!["Profitable Days".to_string(), profitable_days(days).to_string()]);
    println!("{summary}");

    let mut goals = Table::new();
    goals.load_preset(UTF8_FULL).set_header(vec!["Objective", "Status", "Progress"]);
    goals.add_row(vec![
        "Profitable Days".to_string(),
        format!("{} / {}", objectives.profitable_days.completed, objectives.profitable_days.required),
        percent(objectives.profitable_days.progress()),
    ]);
    goals.add_row(vec![
        "Trailing Loss Buffer".to_string(),
        format!(
            "${} of ${}",
            objectives.trailing_loss.remaining_buffer, objectives.trailing_loss.starting_equity
        ),
        percent(objectives.trailing_loss.buffer_ratio()),
    ]);
    goals.add_row(vec![
        "HFT Profit".to_string(),
        (if objectives.hft_profit.passed { "Passed" } else { "Failed" }).to_string(),
        percent(objectives.hft_profit.value),
    ]);
    goals.add_row(vec![
        "Max Daily Loss".to_string(),
        format!("${} of ${}", objectives.max_daily_loss.current, objectives.max_daily_loss.limit),
        percent(objectives.max_daily_loss.usage()),
    ]);
    println!("{goals}");

    let mut weeks = Table::new();
    weeks.load_preset(UTF8_FULL).set_header(vec!["Week", "Range", "P&L", "Trades"]);
    for week in &metrics.weekly_summaries {
        weeks.add_row(vec![
            week.label.clone(),
            week.range.clone(),
            format!("${}", week.pnl),
            week.trades.to_string(),
        ]);
    }
    println!("{weeks}");

    Ok(())
}

fn handle_calendar(args: CalendarArgs, config: &DeskConfig) -> anyhow::Result<()> {
    let metrics = generate(config, args.account.as_deref(), args.month);
    let cells = calendar_cells(&metrics.calendar_month.days);

    println!("{} \u{2013} {}", metrics.account_id, metrics.calendar_month.month_label);
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["S", "M", "T", "W", "T", "F", "S"]);
    for week in cells.chunks(7) {
        let row: Vec<Cell> = week
            .iter()
            .map(|cell| match (cell.day, cell.pnl) {
                (Some(day), Some(pnl)) => Cell::new(format!("{day}\n${pnl}")),
                (Some(day), None) => Cell::new(format!("{day}\n\u{2014}")),
                (None, _) => Cell::new(""),
            })
            .collect();
        table.add_row(row);
    }
    println!("{table}");

    Ok(())
}

fn handle_accounts(args: AccountsArgs, config: &DeskConfig) -> anyhow::Result<()> {
    let accounts = mock_accounts();
    let visible = visible_accounts(&accounts, args.show_archived);
    let scoped = scoped_accounts(&accounts, args.scope);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Account", "Model", "Platform", "Size", "Balance", "P&L", "Target", "Status",
    ]);
    for account in visible.into_iter().filter(|a| scoped.iter().any(|s| s.id == a.id)) {
        table.add_row(vec![
            account.label.clone(),
            account.model.label().to_string(),
            account.platform.label().to_string(),
            account
                .size
                .to_u32()
                .and_then(|s| config.catalog.size_label(s))
                .map(str::to_string)
                .unwrap_or_else(|| format!("${}", account.size)),
            format!("${}", account.balance),
            format!("${} ({}%)", account.pnl, account.pnl_percent),
            format!("{}%", account.profit_target_percent()),
            account.status.label().to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}

fn handle_quote(args: QuoteArgs, config: &DeskConfig) -> anyhow::Result<()> {
    let size = args
        .size
        .unwrap_or_else(|| NewEvaluationOrder::with_defaults(&config.catalog).size);
    let quote = quote(&config.catalog, size);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Account Size", "Base Price", "Discount", "Total"]);
    table.add_row(vec![
        config
            .catalog
            .size_label(size)
            .map(str::to_string)
            .unwrap_or_else(|| format!("${size}")),
        format!("${}", quote.base_price),
        format!("${}", quote.discount),
        format!("${}", quote.total),
    ]);
    println!("{table}");

    Ok(())
}

/// Formats a 0..1 ratio as a whole percentage.
fn percent(ratio: Decimal) -> String {
    format!("{}%", (ratio * Decimal::ONE_HUNDRED).round())
}
