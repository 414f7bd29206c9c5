use std::{
    env, fs,
    io::{self, BufRead, Write},
    process,
};

use noop::{
    Error, Interpreter, RuntimeConfig, init_tracing,
    syntax::{lexer::Lexer, parse},
};

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let trace = args.iter().any(|arg| arg == "--trace");
    let no_gc = args.iter().any(|arg| arg == "--no-gc");
    let report_pool = args.iter().any(|arg| arg == "--report-pool");
    let as_text = args.iter().any(|arg| arg == "--text");
    args.retain(|arg| !matches!(arg.as_str(), "--trace" | "--no-gc" | "--report-pool" | "--text"));

    let gc_threshold = match extract_usize_flag(&mut args, "--gc-threshold") {
        Some(value) => value,
        None => return,
    };
    let max_depth = match extract_usize_flag(&mut args, "--max-depth") {
        Some(value) => value,
        None => return,
    };

    let level = if trace {
        Some(tracing::Level::TRACE)
    } else if report_pool {
        Some(tracing::Level::INFO)
    } else {
        None
    };
    init_tracing(level);

    let mut config = RuntimeConfig::default()
        .with_trace(trace)
        .with_disable_gc(no_gc)
        .with_report_pool_usage(report_pool);
    if let Some(threshold) = gc_threshold {
        config = config.with_gc_threshold(threshold);
    }
    if let Some(depth) = max_depth {
        config = config.with_max_call_depth(depth);
    }

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => print_help(),
        "run" => match args.get(2) {
            Some(path) => run_file(path, config),
            None => eprintln!("Usage: noop run <file>"),
        },
        "tokens" => match args.get(2) {
            Some(path) => show_tokens(path),
            None => eprintln!("Usage: noop tokens <file>"),
        },
        "ast" => match args.get(2) {
            Some(path) => show_ast(path, as_text),
            None => eprintln!("Usage: noop ast [--text] <file>"),
        },
        "repl" => repl(config),
        path => run_file(path, config),
    }
}

fn print_help() {
    println!(
        "\
noop CLI

Usage:
  noop <file>
  noop run <file>
  noop tokens <file>
  noop ast [--text] <file>
  noop repl

Flags:
  --trace              Log every evaluated node (tracing, stderr)
  --no-gc              Never reclaim heap slots
  --report-pool        Log pool usage after collections; print it as JSON at exit
  --gc-threshold <n>   Allocations between automatic collections (default: 1024)
  --max-depth <n>      Maximum nested calls (default: 512)
  --text               With `ast`, print parenthesised source instead of JSON
  -h, --help           Show this help message

Environment:
  RUST_LOG             Overrides the log filter (e.g. RUST_LOG=noop=debug)
  NO_COLOR             Disables colored diagnostics"
    );
}

fn extract_usize_flag(args: &mut Vec<String>, flag: &str) -> Option<Option<usize>> {
    let mut result = None;
    let mut i = 0;
    while i < args.len() {
        if args[i] == flag {
            if i + 1 >= args.len() {
                eprintln!("Usage: noop <file> {} <n>", flag);
                return None;
            }
            let value = args.remove(i + 1);
            args.remove(i);
            match value.parse::<usize>() {
                Ok(parsed) => result = Some(parsed),
                Err(_) => {
                    eprintln!("Error: {} expects a non-negative integer.", flag);
                    return None;
                }
            }
            continue;
        }
        i += 1;
    }
    Some(result)
}

fn read_source(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            process::exit(1);
        }
    }
}

fn run_file(path: &str, config: RuntimeConfig) {
    let source = read_source(path);
    let mut interpreter = Interpreter::new(config);

    let result = parse(&source)
        .map_err(Error::from)
        .and_then(|program| program.execute(&mut interpreter).map_err(Error::from));

    if config.report_pool_usage {
        match serde_json::to_string_pretty(&interpreter.pool_usage()) {
            Ok(json) => eprintln!("{}", json),
            Err(e) => eprintln!("Error encoding pool usage: {}", e),
        }
    }

    if let Err(err) = result {
        eprintln!("{}", err.to_diagnostic().render(Some(&source), Some(path)));
        process::exit(1);
    }
}

fn show_tokens(path: &str) {
    let source = read_source(path);
    let mut lexer = Lexer::new(&source);
    match lexer.tokenize() {
        Ok(tokens) => {
            println!("Tokens from {}:", path);
            println!("{}", "─".repeat(50));
            for token in tokens {
                println!("{}", token);
            }
        }
        Err(diagnostic) => {
            eprintln!("{}", diagnostic.render(Some(&source), Some(path)));
            process::exit(1);
        }
    }
}

fn show_ast(path: &str, as_text: bool) {
    let source = read_source(path);
    let program = match parse(&source) {
        Ok(program) => program,
        Err(diagnostic) => {
            eprintln!("{}", diagnostic.render(Some(&source), Some(path)));
            process::exit(1);
        }
    };

    if as_text {
        println!("{}", program);
        return;
    }
    match serde_json::to_string_pretty(&program) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error encoding AST: {}", e);
            process::exit(1);
        }
    }
}

/// Line-at-a-time evaluation against one interpreter, so bindings persist.
fn repl(config: RuntimeConfig) {
    println!(
        "noop REPL v{} (type :help for help, :quit to exit)",
        env!("CARGO_PKG_VERSION")
    );

    let mut interpreter = Interpreter::new(config);
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        print!("noop> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match reader.read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let trimmed = input.trim();
        match trimmed {
            "" => continue,
            ":quit" | ":q" => break,
            ":help" | ":h" => {
                println!(":quit, :q   exit\n:gc         collect now\n:pool       show pool usage");
                continue;
            }
            ":gc" => {
                match interpreter.collect_garbage() {
                    Some(report) => println!("freed {} slots", report.freed),
                    None => println!("gc is disabled"),
                }
                continue;
            }
            ":pool" => {
                println!("{}", interpreter.pool_usage());
                continue;
            }
            _ => {}
        }

        match noop::run_source(&mut interpreter, &input) {
            Ok(value) => println!("{}", value),
            Err(err) => eprintln!("{}", err.to_diagnostic().render(Some(&input), Some("<repl>"))),
        }
    }
}
