use std::io::{self, Write};

use log::debug;
use serde::Serialize;

use crate::blockchain::{BlockView, Blockchain};

const RULE: &str = "-----------------------------------------------------------------------------------";

/// JSON aggregate printed by the `dump` command.
#[derive(Serialize)]
struct ChainDump<'a> {
    length: usize,
    difficulty: u32,
    blocks: Vec<BlockView<'a>>,
}

/// Interactive terminal loop around the core chain operations. Reads
/// transaction payloads from stdin; any line that is not a command becomes
/// the data of a freshly mined block.
pub fn run(difficulty: u32) -> io::Result<()> {
    let mut bc = Blockchain::new(difficulty);
    println!("Genesis block mined:");
    print_chain(&bc);

    let mut input = String::new();
    loop {
        print!("\nEnter transaction data to add to the blockchain (or 'help'): ");
        io::stdout().flush()?;

        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }

        match input.trim() {
            "" => println!("Nothing to add; type 'help' for the command list."),
            "exit" | "quit" => break,
            "help" => print_help(),
            "show" => print_chain(&bc),
            "verify" => print_verify(&bc),
            "dump" => print_dump(&bc),
            "stats" => print_stats(&bc),
            data => {
                debug!("CLI - mining block for a {}-byte payload", data.len());
                let (index, hash) = {
                    let block = bc.mine_block(data.to_string());
                    (block.index, block.hash.clone())
                };
                println!("\nTransaction successfully added to the blockchain:");
                println!("  block #{index} sealed with hash {hash}");
                print_chain(&bc);
                print_verify(&bc);
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  show     print every block in the chain");
    println!("  verify   run the integrity check");
    println!("  dump     print the chain as JSON");
    println!("  stats    height, difficulty and block intervals");
    println!("  help     this message");
    println!("  exit     leave the loop (also: quit)");
    println!("Any other input is added to the chain as transaction data.");
}

fn print_chain(bc: &Blockchain) {
    let views = bc.render();
    let last = views.len().saturating_sub(1);
    for (i, block) in views.iter().enumerate() {
        println!("{RULE}");
        println!("| Block index: {}", block.index);
        println!("| Timestamp: {}", block.timestamp);
        println!("| Data: {}", block.data);
        println!("| Hash: {}", block.hash);
        println!("| Previous hash: {}", block.previous_hash);
        println!("{RULE}");
        if i != last {
            println!("{:^83}", "||");
        }
    }
}

fn print_verify(bc: &Blockchain) {
    println!(
        "\nBlockchain integrity check successful: {}",
        bc.verify_integrity()
    );
}

fn print_dump(bc: &Blockchain) {
    let dump = ChainDump {
        length: bc.len(),
        difficulty: bc.difficulty(),
        blocks: bc.render(),
    };
    let json = serde_json::to_string_pretty(&dump).expect("serialize chain dump");
    println!("{json}");
}

fn print_stats(bc: &Blockchain) {
    let views = bc.render();
    let height = views.len();

    println!("Height: {height}");
    println!("Difficulty: {}", bc.difficulty());
    if let Some(tail) = views.last() {
        println!("Tail hash: {}", tail.hash);
    }

    if height >= 2 {
        let newer = &views[height - 1];
        let older = &views[height - 2];
        let last_interval = (newer.timestamp - older.timestamp).max(0);
        let total: i64 = views
            .windows(2)
            .map(|w| (w[1].timestamp - w[0].timestamp).max(0))
            .sum();
        let avg = total as f64 / (height - 1) as f64;
        println!("Last block interval: {:.3} ms", last_interval as f64 / 1e6);
        println!("Average block interval: {:.3} ms", avg / 1e6);
    }
}
