//! Action-table dump.
//!
//! Prints every action index of a variant with its packed code,
//! direction flag, and human reading. Handy for eyeballing index
//! agreement against the engine's enumeration.

use clap::Parser;
use damka::moves::Table;
use damka::moves::Variant;

#[derive(Parser)]
#[command(version, about = "Dump a variant's action table")]
struct Args {
    /// american, russian, or ugolki
    #[arg(long, default_value = "american")]
    variant: String,
}

fn main() {
    damka::log();
    let args = Args::parse();
    let variant = Variant::try_from(args.variant.as_str()).expect("known variant");
    let table = Table::from(variant);
    log::info!("{} table, {} actions", variant, table.len());
    for (index, entry) in table.entries().iter().enumerate() {
        let (from, till) = table.decode(index).expect("coherent table");
        println!(
            "{:>4}  {}  {}  {} => {}",
            index,
            entry.code,
            if entry.primary { " " } else { "*" },
            from,
            till,
        );
    }
}
