use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use tally::backend::JsonStore;
use tally::transaction::Amount;
use tally::{Ledger, LedgerError};

mod cli_config;
use cli_config::AppConfig;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// Path to the ledger file to operate on
    #[clap(value_parser, default_value = "ledger.json")]
    path: PathBuf,

    /// Optional TOML config with startup policy settings
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    let config = match &args.config {
        Some(path) => AppConfig::read(path)?,
        None => AppConfig::default(),
    };

    let mut ledger = match Ledger::load(JsonStore::new(&args.path))? {
        Some(ledger) => {
            if config.reauthenticate_on_load {
                let pin = prompt("Enter PIN: ")?;
                match ledger.balance(&pin) {
                    Ok(balance) => println!("Ledger loaded. Current balance: {}", balance),
                    Err(_) => {
                        eprintln!("Incorrect PIN! Access denied.");
                        return Ok(ExitCode::FAILURE);
                    }
                }
            } else {
                println!("Ledger loaded from {}.", args.path.display());
            }
            ledger
        }
        None => {
            println!("No previous data found. Starting a new ledger.");
            let pin = prompt("Set your security PIN: ")?;
            Ledger::create(JsonStore::new(&args.path), &pin)?
        }
    };

    loop {
        print_menu();
        let choice = prompt("Select an option: ")?;
        match choice.as_str() {
            "1" => credit(&mut ledger)?,
            "2" => debit(&mut ledger)?,
            "3" => list_transactions(&ledger)?,
            "4" => show_balance(&ledger)?,
            "5" => change_pin(&mut ledger)?,
            "6" => {
                println!("Goodbye!");
                return Ok(ExitCode::SUCCESS);
            }
            _ => println!("Invalid option. Try again."),
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", "--- Personal Ledger ---".bold());
    println!("1. Credit amount");
    println!("2. Debit amount");
    println!("3. Show transactions");
    println!("4. Show balance");
    println!("5. Change PIN");
    println!("6. Exit");
}

fn credit(ledger: &mut Ledger<JsonStore>) -> anyhow::Result<()> {
    let amount = match prompt_amount("Enter amount to credit: ")? {
        Some(amount) => amount,
        None => return Ok(()),
    };
    let pin = prompt("Enter PIN: ")?;

    match ledger.credit(&pin, amount) {
        Ok(balance) => println!(
            "Credited: {}. New balance: {}",
            amount.to_string().green(),
            balance
        ),
        Err(err) => report(err),
    }
    Ok(())
}

fn debit(ledger: &mut Ledger<JsonStore>) -> anyhow::Result<()> {
    let amount = match prompt_amount("Enter amount to debit: ")? {
        Some(amount) => amount,
        None => return Ok(()),
    };
    let pin = prompt("Enter PIN: ")?;

    match ledger.debit(&pin, amount) {
        Ok(balance) => println!(
            "Debited: {}. New balance: {}",
            amount.to_string().red(),
            balance
        ),
        Err(err) => report(err),
    }
    Ok(())
}

fn list_transactions(ledger: &Ledger<JsonStore>) -> anyhow::Result<()> {
    let pin = prompt("Enter PIN: ")?;

    match ledger.transactions(&pin) {
        Ok(transactions) if transactions.is_empty() => println!("No transactions yet."),
        Ok(transactions) => {
            println!("\nTransaction history:");
            for transaction in transactions {
                println!("{}", transaction);
            }
        }
        Err(err) => report(err),
    }
    Ok(())
}

fn show_balance(ledger: &Ledger<JsonStore>) -> anyhow::Result<()> {
    let pin = prompt("Enter PIN: ")?;

    match ledger.balance(&pin) {
        Ok(balance) => {
            let fmt_balance = if balance > Amount::ZERO {
                balance.to_string().green()
            } else {
                balance.to_string().normal()
            };
            println!("Current balance: {}", fmt_balance);
        }
        Err(err) => report(err),
    }
    Ok(())
}

fn change_pin(ledger: &mut Ledger<JsonStore>) -> anyhow::Result<()> {
    let old_pin = prompt("Enter PIN: ")?;
    let new_pin = prompt("Enter new PIN: ")?;
    let confirm_pin = prompt("Confirm new PIN: ")?;

    match ledger.change_pin(&old_pin, &new_pin, &confirm_pin) {
        Ok(()) => println!("PIN changed successfully."),
        Err(err) => report(err),
    }
    Ok(())
}

fn report(err: LedgerError) {
    match err {
        LedgerError::Store(_) => eprintln!(
            "{} {} (the persisted record may be stale)",
            "warning:".yellow().bold(),
            err
        ),
        _ => eprintln!("{}", err),
    }
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    return Ok(line.trim().to_owned());
}

fn prompt_amount(message: &str) -> anyhow::Result<Option<Amount>> {
    let raw = prompt(message)?;
    match raw.parse::<Amount>() {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            println!("Invalid amount.");
            Ok(None)
        }
    }
}
