//! Walkthrough of the step shapes: arranged, direct, pending, table-driven.
//!
//! Run with: cargo run --example demo

use std::time::Duration;

use thiserror::Error;
use triphase::{step, Fixture};

// ============================================================================
// Demo domain
// ============================================================================

#[derive(Debug, Clone)]
struct Account {
    owner: String,
    balance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum TransferError {
    #[error("insufficient funds: have {available}, need {requested}")]
    InsufficientFunds { available: u32, requested: u32 },
}

fn withdraw(account: &Account, amount: u32) -> Result<u32, TransferError> {
    account
        .balance
        .checked_sub(amount)
        .ok_or(TransferError::InsufficientFunds {
            available: account.balance,
            requested: amount,
        })
}

async fn open_account(owner: &str, balance: u32) -> Account {
    // Stand-in for hitting a real backend.
    tokio::time::sleep(Duration::from_millis(50)).await;
    Account {
        owner: owner.to_string(),
        balance,
    }
}

// ============================================================================
// Demo
// ============================================================================

#[tokio::main]
async fn main() {
    println!("=== Arranged shape, synchronous phases ===");
    step()
        .arrange(|| Account {
            owner: "alice".into(),
            balance: 120,
        })
        .act(|account: &Account| withdraw(account, 50))
        .assert(|remaining, account: &Account| {
            println!("  {} withdrew 50, left: {:?}", account.owner, remaining);
            assert_eq!(remaining, Ok(70));
        })
        .run()
        .await;

    println!("=== Arranged shape, pending arrange ===");
    step()
        .arrange_async(|| open_account("bob", 30))
        .act(|account: &Account| withdraw(account, 50))
        .assert(|outcome, account: &Account| {
            println!("  {} tried to overdraw: {:?}", account.owner, outcome);
            assert_eq!(
                outcome,
                Err(TransferError::InsufficientFunds {
                    available: 30,
                    requested: 50,
                })
            );
        })
        .run()
        .await;

    println!("=== Direct shape ===");
    step()
        .act(|| 1 + 2)
        .assert(|sum| {
            println!("  1 + 2 = {}", sum);
            assert_eq!(sum, 3);
        })
        .run()
        .await;

    println!("=== Record macro ===");
    step! {
        act: || "triphase".len(),
        assert: |len| assert_eq!(len, 8),
    }
    .run()
    .await;

    println!("=== Shared fixture, fresh context per run ===");
    let accounts = Fixture::new(|| Account {
        owner: "carol".into(),
        balance: 10,
    });
    let spend = step()
        .arrange_fixture(accounts.clone())
        .act(|account: &Account| withdraw(account, 10))
        .assert(|remaining, _account: &Account| assert_eq!(remaining, Ok(0)));
    // Two runs, two independent accounts: the first run cannot drain the
    // second run's balance.
    spend.run().await;
    spend.run().await;
    println!("  both runs saw a fresh balance of 10");

    println!("=== Table-driven rows ===");
    let addition = step()
        .act_with(|row: &(u32, u32, u32)| (row.0 + row.1, row.2))
        .assert(|(sum, expected)| assert_eq!(sum, expected));
    addition
        .run_each(vec![(1, 2, 3), (0, 0, 0), (40, 2, 42)])
        .await;
    println!("  3 rows verified independently");

    println!("demo complete");
}
