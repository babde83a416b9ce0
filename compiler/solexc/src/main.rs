//! solex CLI

use solex_lexer::default_tokenizer;
use solexc::commands::{catalog_report, lex_files, opcode_lookup};

fn main() {
    solexc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let tokenizer = match default_tokenizer() {
        Ok(tokenizer) => tokenizer,
        Err(err) => {
            eprintln!("error: invalid token tables: {err}");
            std::process::exit(2);
        }
    };

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: solex lex <file>...");
                std::process::exit(1);
            }
            let report = lex_files(tokenizer, &args[2..]);
            print!("{}", report.output);
            if report.failed {
                std::process::exit(1);
            }
        }
        "catalog" => {
            print!("{}", catalog_report(tokenizer));
        }
        "opcode" => {
            let Some(query) = args.get(2) else {
                eprintln!("Usage: solex opcode <name|code>");
                std::process::exit(1);
            };
            match opcode_lookup(tokenizer, query) {
                Ok(line) => println!("{line}"),
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("solex - lexical front-end for contract sources");
    println!();
    println!("Usage: solex <command> [args]");
    println!();
    println!("Commands:");
    println!("  lex <file>...          Print the tokens of each file");
    println!("  catalog                List token categories in priority order");
    println!("  opcode <name|code>     Look up an opcode by mnemonic or code");
    println!("  help                   Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) for tracing output.");
}
