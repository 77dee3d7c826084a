use std::time::Instant;

use minibank_ledger::{AccountNumber, AccountStore, ArrayStore, ListStore, StoreKind};

/// Mean nanoseconds per lookup of the oldest account
fn time_lookups(store: &dyn AccountStore, rounds: u32) -> f64 {
    let start = Instant::now();
    for _ in 0..rounds {
        std::hint::black_box(store.find_account(AccountNumber::new(0)));
    }
    start.elapsed().as_nanos() as f64 / rounds as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    minibank_demos::init_tracing("warn");

    println!("{:>10} {:>14} {:>14}", "accounts", "array ns/find", "list ns/find");
    for population in [10usize, 100, 1_000, 10_000] {
        let mut array = ArrayStore::with_capacity(population);
        let mut list = ListStore::new();
        for i in 0..population {
            let owner = format!("owner-{}", i);
            array.create_account(&owner)?;
            list.create_account(&owner)?;
        }

        println!(
            "{:>10} {:>14.1} {:>14.1}",
            population,
            time_lookups(&array, 10_000),
            time_lookups(&list, 10_000)
        );
    }

    // One past capacity is refused
    let mut full = StoreKind::Array { capacity: 2 }.build();
    full.create_account("a")?;
    full.create_account("b")?;
    if let Err(e) = full.create_account("c") {
        println!("{}", e);
    }

    Ok(())
}
