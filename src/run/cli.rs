use anyhow::{Context, Result};

use crate::form::{Field, FormMode, SubmitOutcome};
use crate::models::{Category, Transaction};
use crate::storage::Storage;
use crate::ui::app::{App, Intent};
use crate::ui::util::{capitalize, format_amount, format_signed, format_whole, truncate};
use crate::views::{self, CategoryTotal, Filter, Sort};

pub(crate) fn as_cli<S: Storage>(args: &[String], app: &mut App<S>) -> Result<()> {
    let Some(command) = args.get(1) else {
        cli_summary(app);
        println!();
        return cli_list(&[], app);
    };

    match command.as_str() {
        "list" | "ls" => cli_list(&args[2..], app),
        "add" | "a" => cli_add(&args[2..], app),
        "edit" | "e" => cli_edit(&args[2..], app),
        "delete" | "rm" => cli_delete(&args[2..], app),
        "summary" | "s" => {
            cli_summary(app);
            Ok(())
        }
        "categories" => {
            cli_categories();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendlog {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("spendlog: local-only personal expense tracker");
    println!();
    println!("Usage: spendlog [--db <path>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                          Summary followed by the transaction list");
    println!("  list                            List transactions");
    println!("    --filter <all|income|expense> Which direction to show (default: all)");
    println!("    --sort <newest|oldest|high|low>  Ordering (default: newest)");
    println!("  add <name> <amount>             Record a transaction");
    println!("    --type <expense|income>       Direction (default: expense)");
    println!("    --category <key>              One of `spendlog categories` (default: other)");
    println!("    --date <YYYY-MM-DD>           Defaults to today");
    println!("    --desc <text>                 Free-form description");
    println!("  edit <id>                       Change fields of a transaction");
    println!("    --name, --amount, --type, --category, --date, --desc");
    println!("  delete <id>                     Remove a transaction");
    println!("  summary                         Totals and category breakdown");
    println!("  categories                      List categories");
    println!("  --help, -h                      Show this help");
    println!("  --version, -V                   Show version");
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Apply `--<field> <value>` pairs to the form, e.g. `--amount 120 --category food`.
fn apply_field_flags<S: Storage>(args: &[String], app: &mut App<S>) -> Result<()> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let Some(name) = arg.strip_prefix("--") else {
            anyhow::bail!("Unexpected argument: {arg}");
        };
        let field = Field::parse(name).ok_or_else(|| anyhow::anyhow!("Unknown option: {arg}"))?;
        let value = iter
            .next()
            .ok_or_else(|| anyhow::anyhow!("{arg} requires a value"))?;

        if field == Field::Category && is_unknown_category(value) {
            eprintln!("Warning: unknown category '{value}', using 'other'");
        }
        app.dispatch(Intent::ChangeField(field, value.clone()))?;
    }
    Ok(())
}

/// True when `value` would silently fall back to `other`.
fn is_unknown_category(value: &str) -> bool {
    Category::parse(value) == Category::Other && !value.trim().eq_ignore_ascii_case("other")
}

fn cli_list<S: Storage>(args: &[String], app: &mut App<S>) -> Result<()> {
    if let Some(value) = flag_value(args, "--filter") {
        let filter = Filter::parse(value).ok_or_else(|| {
            anyhow::anyhow!("Unknown filter '{value}'. Use one of: {}", options(Filter::all()))
        })?;
        app.dispatch(Intent::SetFilter(filter))?;
    }
    if let Some(value) = flag_value(args, "--sort") {
        let sort = Sort::parse(value).ok_or_else(|| {
            anyhow::anyhow!("Unknown sort '{value}'. Use one of: {}", options(Sort::all()))
        })?;
        app.dispatch(Intent::SetSort(sort))?;
    }

    let visible = app.visible();
    if visible.is_empty() {
        if app.store.transactions().is_empty() {
            println!("No transactions yet. Add your first one with `spendlog add <name> <amount>`");
        } else {
            println!("No {} transactions", app.filter);
        }
        return Ok(());
    }

    println!("Transaction History ({}, {})", app.filter, app.sort);
    println!(
        "{:<14} {:<10} {:<3} {:<24} {:>16}",
        "ID", "Date", "", "Name", "Amount"
    );
    println!("{}", "─".repeat(71));
    for txn in &visible {
        print_row(txn);
    }
    Ok(())
}

fn print_row(txn: &Transaction) {
    println!(
        "{:<14} {:<10} {:<3} {:<24} {:>16}",
        txn.id.unwrap_or(0),
        txn.date.format("%Y-%m-%d"),
        txn.category.icon(),
        truncate(&txn.name, 24),
        format_signed(txn.amount),
    );
    if !txn.description.is_empty() {
        println!("{:<29} {}", "", truncate(&txn.description, 40));
    }
}

fn options<T: std::fmt::Display>(all: &[T]) -> String {
    all.iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn cli_add<S: Storage>(args: &[String], app: &mut App<S>) -> Result<()> {
    if args.len() < 2 || args[0].starts_with("--") || args[1].starts_with("--") {
        anyhow::bail!("Usage: spendlog add <name> <amount> [--type <t>] [--category <c>] [--date <d>] [--desc <text>]");
    }

    app.dispatch(Intent::CancelEdit)?;
    app.dispatch(Intent::ChangeField(Field::Name, args[0].clone()))?;
    app.dispatch(Intent::ChangeField(Field::Amount, args[1].clone()))?;
    apply_field_flags(&args[2..], app)?;
    app.dispatch(Intent::Submit)?;

    match app.last_outcome.take() {
        Some(SubmitOutcome::Created(txn)) => {
            println!(
                "Added {}: {} {} ({})",
                txn.id.unwrap_or(0),
                txn.name,
                format_signed(txn.amount),
                txn.category
            );
            Ok(())
        }
        Some(SubmitOutcome::Rejected(e)) => anyhow::bail!("Not saved: {e}"),
        _ => anyhow::bail!("{}", app.status_message),
    }
}

fn cli_edit<S: Storage>(args: &[String], app: &mut App<S>) -> Result<()> {
    let Some(raw_id) = args.first() else {
        anyhow::bail!("Usage: spendlog edit <id> [--name ..] [--amount ..] [--type ..] [--category ..] [--date ..] [--desc ..]");
    };
    let id: i64 = raw_id
        .parse()
        .with_context(|| format!("Invalid transaction id: {raw_id}"))?;

    app.dispatch(Intent::Edit(id))?;
    if app.form.mode() != FormMode::Edit(id) {
        anyhow::bail!("{}", app.status_message);
    }
    apply_field_flags(&args[1..], app)?;
    app.dispatch(Intent::Submit)?;

    match app.last_outcome.take() {
        Some(SubmitOutcome::Updated(txn)) => {
            println!("Updated {id}: {} {}", txn.name, format_signed(txn.amount));
            Ok(())
        }
        Some(SubmitOutcome::Rejected(e)) => anyhow::bail!("Not saved: {e}"),
        _ => anyhow::bail!("{}", app.status_message),
    }
}

fn cli_delete<S: Storage>(args: &[String], app: &mut App<S>) -> Result<()> {
    let Some(raw_id) = args.first() else {
        anyhow::bail!("Usage: spendlog delete <id>");
    };

    // Ids are always numeric, so anything else simply isn't there
    match raw_id.parse::<i64>() {
        Ok(id) => app.dispatch(Intent::Delete(id))?,
        Err(_) => app.set_status(format!("No transaction with id {raw_id}")),
    }
    println!("{}", app.status_message);
    Ok(())
}

fn cli_summary<S: Storage>(app: &App<S>) {
    let totals = app.totals();
    let count = app.store.transactions().len();

    println!("Summary");
    println!("{}", "─".repeat(40));
    println!("  Balance:    {}", format_amount(totals.balance));
    println!("  Income:     {}", format_amount(totals.income));
    println!("  Expenses:   {}", format_amount(totals.expense.abs()));
    println!("  Total Txns: {count}");

    let expense = app.expense_breakdown();
    let income = app.income_breakdown();
    if expense.is_empty() && income.is_empty() {
        println!();
        println!("No transaction data to analyze yet");
        return;
    }

    print_breakdown("Expense Distribution", &expense);
    print_breakdown("Income Distribution", &income);
    print_breakdown("All Activity", &app.overall_breakdown());
}

fn print_breakdown(title: &str, breakdown: &[CategoryTotal]) {
    if breakdown.is_empty() {
        return;
    }
    let total = views::breakdown_total(breakdown);

    println!();
    println!("{title} (total {}):", format_amount(total));
    for slice in breakdown {
        println!(
            "  {} {:<16} {:>16} {:>6}%",
            slice.category.icon(),
            capitalize(slice.category.as_str()),
            format_whole(slice.value),
            views::share(slice.value, total),
        );
    }
}

fn cli_categories() {
    println!("{:<15} {:<4} {:<20} Color", "Key", "", "Label");
    println!("{}", "─".repeat(50));
    for cat in Category::all() {
        println!(
            "{:<15} {:<4} {:<20} {}",
            cat.as_str(),
            cat.icon(),
            cat.label(),
            cat.color()
        );
    }
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
