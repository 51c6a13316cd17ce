//! Chainbank CLI - demo walkthrough and chain inspection

use chainbank_accounts::Account;
use chainbank_ledger::{sha256_hex, SharedLedger, Transaction, GENESIS_SEED};
use clap::{Parser, Subcommand};
use rust_decimal_macros::dec;

#[derive(Parser)]
#[command(name = "chainbank")]
#[command(about = "Chainbank - hash-chained multi-account ledger", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted walkthrough and dump the resulting chain
    Demo {
        /// Emit the chain as JSON lines instead of canonical lines
        #[arg(long)]
        json: bool,
    },
    /// Print the genesis constants and digests
    Genesis,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { json } => run_demo(json),
        Commands::Genesis => show_genesis(),
    }
}

/// Scripted two-account session ending in a full chain verification.
fn run_demo(json: bool) -> anyhow::Result<()> {
    tracing::info!("starting chainbank demo");
    let ledger = SharedLedger::new();
    let bob = Account::open("bob", ledger.clone());
    let mut alice = Account::open("alice", ledger.clone());

    let tx = bob.deposit(dec!(10.00))?;
    println!("✅ Deposited 10.00 for bob (hash: {})", tx.hash());

    let tx = bob.withdraw(dec!(5.00))?;
    println!("✅ Withdrew 5.00 for bob (hash: {})", tx.hash());

    bob.transfer(&alice, dec!(5.00))?;
    println!("✅ Transferred 5.00 from bob to alice");

    alice.block();
    println!("🔒 Blocked alice");

    match alice.deposit(dec!(1.00)) {
        Err(err) => println!("❌ Deposit rejected: {}", err),
        Ok(_) => anyhow::bail!("deposit on a blocked account succeeded"),
    }

    println!("{}", bob);
    println!("{}", alice);

    println!("--- chain ---");
    let snapshot = ledger.snapshot();
    if json {
        for tx in snapshot.transactions() {
            println!("{}", serde_json::to_string(tx)?);
        }
    } else {
        println!("{}", snapshot);
    }

    ledger.verify()?;
    println!("✅ Chain verified: {} entries intact", ledger.len());
    Ok(())
}

/// Show the fixed chain anchor every ledger starts from.
fn show_genesis() -> anyhow::Result<()> {
    let genesis = Transaction::genesis();
    println!("seed:        {}", GENESIS_SEED);
    println!("seed digest: {}", sha256_hex(GENESIS_SEED));
    println!("canonical:   {}", genesis);
    println!("hash:        {}", genesis.hash());
    Ok(())
}
