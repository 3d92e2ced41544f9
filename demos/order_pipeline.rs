//! Order Pipeline
//!
//! Drives an order from placement to a terminal outcome.
//!
//! Key concepts:
//! - States with payloads keep one identity per variant
//! - Transition functions decide the next state from the payload
//! - A final transition ends the run; its output is the result
//! - A recorder observer captures the realized path
//!
//! Run with: cargo run --example order_pipeline

use waypoint::core::HistoryRecorder;
use waypoint::{state_enum, StateMachine, Transition};

state_enum! {
    enum Order {
        Placed { total_cents: u64 },
        Paid { total_cents: u64 },
        Rejected { reason: String },
        Shipped,
        Cancelled { reason: String },
    }
}

fn main() {
    println!("=== Order Pipeline ===\n");

    let recorder = HistoryRecorder::<Order>::new();

    let machine = StateMachine::new([
        Transition::new(Order::Placed { total_cents: 0 }, |order| match order {
            Order::Placed { total_cents } if total_cents > 0 => Order::Paid { total_cents },
            _ => Order::Rejected {
                reason: "empty order".to_string(),
            },
        })
        .on_transition(recorder.observer()),
        Transition::terminal(Order::Paid { total_cents: 0 }, |_| Order::Shipped)
            .on_transition(recorder.observer()),
        Transition::terminal(Order::Rejected { reason: String::new() }, |order| match order {
            Order::Rejected { reason } => Order::Cancelled { reason },
            other => other,
        })
        .on_transition(recorder.observer()),
    ])
    .expect("order pipeline table is valid");

    for total_cents in [4_200, 0] {
        recorder.clear();
        let outcome = machine
            .run(Order::Placed { total_cents })
            .expect("every reachable state is registered");

        println!("Order of {total_cents} cents -> {outcome:?}");
        println!("  path: {}", recorder.snapshot().get_path().join(" -> "));
    }

    match machine.run(Order::Shipped) {
        Ok(state) => println!("\nUnexpected result: {state:?}"),
        Err(err) => println!("\nRunning a shipped order: {err}"),
    }

    println!("\n=== Example Complete ===");
}
