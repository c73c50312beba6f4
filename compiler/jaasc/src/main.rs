//! `jaasc` CLI
//!
//! Lexes and validates inline login-module configuration.

use jaas_parse::JaasError;
use jaasc::commands::{check_file, lex_file, parse_check_options};

fn main() {
    jaasc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(2);
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: jaasc lex <file|->");
                std::process::exit(2);
            }
            report(lex_file(&args[2]));
        }
        "check" => {
            let options = match parse_check_options(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    std::process::exit(2);
                }
            };
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with("--")) else {
                eprintln!("error: missing file path");
                eprintln!("Usage: jaasc check <file|-> [--context=<name>] [--login-type=client|server]");
                std::process::exit(2);
            };
            report(check_file(path, &options));
        }
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {command}");
            print_usage();
            std::process::exit(2);
        }
    }
}

/// Print a command's output, or its error and exit with status 1.
fn report(result: Result<Vec<String>, JaasError>) {
    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("jaasc - inline login-module configuration checker");
    println!();
    println!("Usage: jaasc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->      Show the token stream (word text is not printed)");
    println!("  check <file|->    Parse and summarize login modules");
    println!("  help              Show this message");
    println!();
    println!("Check options:");
    println!("  --context=<name>              Bind entries to this context name");
    println!("  --login-type=client|server    Use KafkaClient or KafkaServer (default: client)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=jaas_parse=debug) for diagnostic logging.");
}
