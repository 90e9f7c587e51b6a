//! `nes_loader_debug` takes the path to the given .nes file, resolves it
//! the way the loader core would and prints the description, memory map,
//! placements and entry points. It stands in for a host adapter by
//! projecting the CPU visible placements into a flat 64 KiB store so the
//! hardware vectors can be read back.
use std::fs::read;

use clap::Parser;

use color_eyre::eyre::{eyre, Result};
use nes_loader::layout::{REGIONS, REGISTERS, TRAINER_REGION};
use nes_loader::vectors;
use nes_loader::PlacementKind;

/// `nes_loader_debug` will load the given iNES file and print its resolved layout.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(help = "Filename containing .nes data", long)]
    filename: String,

    #[arg(help = "Repair a corrupt header before resolving", long)]
    fix_header: bool,

    #[arg(help = "Also print the I/O register map", long)]
    registers: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let bytes: Vec<u8> = read(&args.filename)?;

    let Some(accepted) = nes_loader::accept(&bytes, 0) else {
        return Err(eyre!("{} is not an iNES ROM image", args.filename));
    };
    println!(
        "{} detected: setting processor type to {}.",
        accepted.format_name, accepted.processor
    );

    let image = nes_loader::load(&bytes, args.fix_header)?;

    println!("\n{}", image.description);

    for warning in &image.warnings {
        println!("warning: {warning}");
    }

    println!("\nSegments:");
    for region in &REGIONS {
        println!(
            "  {:8} {:04X}-{:04X}",
            region.name,
            region.base,
            region.base + region.size
        );
    }
    if image.header.trainer() {
        println!(
            "  {:8} {:04X}-{:04X}",
            TRAINER_REGION.name,
            TRAINER_REGION.base,
            TRAINER_REGION.base + TRAINER_REGION.size
        );
    }

    let mut store = vec![0u8; 0x10000];

    println!("\nPlacements:");
    for p in &image.placements {
        print!(
            "  mapping {} to {:04X}-{:04X} (file offset {:08X}) ..",
            p.kind,
            p.dest,
            p.dest + p.length,
            p.source_offset
        );
        if p.kind == PlacementKind::Chr {
            // CHR targets the separate graphics space; nothing to project
            // into the CPU store.
            println!("graphics space, skipped");
            continue;
        }
        let start = usize::try_from(p.source_offset)?;
        let Some(end) = start.checked_add(p.length as usize) else {
            println!("failure (corrupt ROM image?)");
            continue;
        };
        if end > bytes.len() {
            println!("failure (corrupt ROM image?)");
            continue;
        }
        let dest = p.dest as usize;
        store[dest..dest + p.length as usize].copy_from_slice(&bytes[start..end]);
        println!("ok");
    }

    let read_word =
        |addr: u16| u16::from(store[addr as usize]) | u16::from(store[addr as usize + 1]) << 8;

    println!("\nEntry points:");
    for ep in vectors::resolve(read_word) {
        println!(
            "  {:<5} vector at {:04X} -> {:04X}",
            ep.vector.to_string(),
            ep.vector.address(),
            ep.address
        );
    }
    println!("Execution entry point: {:04X}", vectors::entry_point(read_word));

    if args.registers {
        println!("\nI/O registers:");
        for reg in &REGISTERS {
            println!("  {:04X} {:12} {}", reg.address, reg.name, reg.description);
        }
    }

    Ok(())
}
