use avl_collections::avl_tree::AvlSet;
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::io::{self, BufRead};

const SEED_SIZE: i32 = 15;
const PROMPT: &str = "Value to remove";

fn print_set(set: &AvlSet<i32>) {
    match set.render() {
        Ok(rendered) => println!("{}", rendered),
        Err(_) => println!("Tree is empty"),
    }
}

fn main() {
    if let Err(err) = WriteLogger::init(LevelFilter::Info, Config::default(), io::stderr()) {
        eprintln!("Error: failed to initialize logger: {}", err);
    }

    let mut set = AvlSet::new();
    for value in 0..SEED_SIZE {
        set.add(value);
    }
    info!("Seeded set with {} values.", set.len());
    print_set(&set);

    let input = io::stdin();
    let mut lines = input.lock().lines();

    loop {
        println!("{}", PROMPT);
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                warn!("Failed to read input: {}", err);
                break;
            },
            None => break,
        };

        let value = match line.trim().parse::<i32>() {
            Ok(value) => value,
            Err(err) => {
                warn!("Ignoring `{}`: {}", line.trim(), err);
                continue;
            },
        };

        if set.remove(&value) {
            info!("Removed {}, {} values left.", value, set.len());
        } else {
            info!("{} is not in the set.", value);
        }
        print_set(&set);
    }
}
