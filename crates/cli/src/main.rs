//! MIPS-subset instruction-level simulator CLI.
//!
//! This binary is the driver for the simulator core. It performs:
//! 1. **Load:** Read a flat big-endian program image into the machine.
//! 2. **Step:** Run one instruction at a time, with an optional interactive
//!    pause (`q` quits) before each step.
//! 3. **Report:** Print each decoded instruction and the register/memory
//!    effects of each step, in full or changed-only form.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process;
use tracing_subscriber::EnvFilter;

use mipsim_core::config::GeneralConfig;
use mipsim_core::isa::disasm::disassemble;
use mipsim_core::sim::loader;
use mipsim_core::{Config, Machine, StepOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "MIPS-subset instruction-level simulator",
    long_about = "Simulate a flat big-endian program image one instruction at a time.\n\nEach step prints the fetched word, its disassembly, and the register or\nmemory location it changed. Simulation ends at the first word that does\nnot decode (the all-zero word is the conventional terminator).\n\nExamples:\n  sim program.dump\n  sim -i -r program.dump\n  sim --config machine.json program.dump"
)]
struct Cli {
    /// Program image: flat file of big-endian 32-bit instruction words.
    file: String,

    /// Print the full register file after every step, not just the change.
    #[arg(short = 'r', long)]
    registers: bool,

    /// Print all nonzero data memory after every step, not just the change.
    #[arg(short = 'm', long)]
    memory: bool,

    /// Pause for input before each step; a line starting with 'q' quits.
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Log each retired instruction (RUST_LOG overrides the level).
    #[arg(short = 'd', long)]
    debug: bool,

    /// JSON config file overriding machine geometry and report flags.
    #[arg(short, long)]
    config: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::from_json_file(path).unwrap_or_else(|e| fatal(&e)),
        None => Config::default(),
    };
    config.general.print_registers |= cli.registers;
    config.general.print_memory |= cli.memory;
    config.general.interactive |= cli.interactive;

    let image = loader::load_image(&cli.file).unwrap_or_else(|e| fatal(&e));
    let mut machine = Machine::new(&config, &image).unwrap_or_else(|e| fatal(&e));

    run(&mut machine, &config.general);
    machine.stats.print();
}

/// Reports a fatal setup error and exits.
fn fatal(err: &mipsim_core::common::SimError) -> ! {
    eprintln!("[!] FATAL: {err}");
    process::exit(1);
}

/// Installs the global tracing subscriber.
///
/// `-d` forces debug-level output; otherwise `RUST_LOG` decides, defaulting
/// to warnings only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Loops the step interface until the program terminates or the user quits.
fn run(machine: &mut Machine, opts: &GeneralConfig) {
    let stdin = io::stdin();
    loop {
        if opts.interactive && !prompt_continue(&stdin) {
            return;
        }

        let pc = machine.pc;
        let word = machine.read_word(pc);
        println!("Executing instruction at {pc:08x}: {word:08x}");

        let outcome = match machine.step() {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("Simulation ended: {e}");
                return;
            }
        };

        println!("{}", disassemble(&outcome.instruction, pc));
        report(machine, opts, &outcome);
    }
}

/// Shows the interactive prompt; returns `false` when the user quits.
fn prompt_continue(stdin: &io::Stdin) -> bool {
    print!("> ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => !line.starts_with('q'),
    }
}

/// Prints the state changes of one step.
///
/// With `-r`/`-m` the full register file or all nonzero data memory is
/// printed; otherwise only the changed register/word, or a note that
/// nothing changed.
fn report(machine: &Machine, opts: &GeneralConfig, outcome: &StepOutcome) {
    println!("New pc = {:08x}", machine.pc);

    if opts.print_registers {
        machine.regs.dump();
    } else if let Some(idx) = outcome.changed_reg {
        println!("Updated r{:02} to {:08x}", idx, machine.read_reg(idx));
    } else {
        println!("No register was updated.");
    }

    if opts.print_memory {
        println!("Nonzero memory");
        println!("ADDR      CONTENTS");
        let mut addr = machine.memory.data_base();
        while addr < machine.memory.limit() {
            let word = machine.read_word(addr);
            if word != 0 {
                println!("{addr:08x}  {word:08x}");
            }
            addr += 4;
        }
    } else if let Some(addr) = outcome.changed_mem {
        println!(
            "Updated memory at address {:08x} to {:08x}",
            addr,
            machine.read_word(addr)
        );
    } else {
        println!("No memory location was updated.");
    }
}
