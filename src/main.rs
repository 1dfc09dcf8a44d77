use std::{env, process};

use tagsym::runtime::{
    Realm, RuntimeContext,
    builtins::get_builtin,
    error::RuntimeError,
    symbol::{SymbolReport, key_for},
    value::Value,
};

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let trace = args.iter().any(|arg| arg == "--trace");
    let json = args.iter().any(|arg| arg == "--json");
    if trace {
        args.retain(|arg| arg != "--trace");
    }
    if json {
        args.retain(|arg| arg != "--json");
    }

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if trace {
            tracing::Level::TRACE
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: failed to install logger: {}", err);
    }

    if args.len() < 2 || args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return;
    }

    let mut realm = Realm::new();
    let result = match args[1].as_str() {
        "new" => {
            let description = match args.get(2) {
                Some(desc) => realm.string(desc),
                None => Value::Undefined,
            };
            call_symbol(&mut realm, "Symbol", description)
        }
        "for" => {
            if args.len() < 3 {
                eprintln!("Usage: tagsym for <description>");
                process::exit(1);
            }
            let description = realm.string(&args[2]);
            call_symbol(&mut realm, "Symbol.for", description)
        }
        "decode" => {
            let bytes = hex_arg(&args, "decode");
            Ok(bytes)
        }
        "key-for" => {
            let bytes = hex_arg(&args, "key-for");
            lookup_key(&mut realm, &bytes, json);
            return;
        }
        other => {
            eprintln!("Error: unknown command: {}", other);
            print_help();
            process::exit(1);
        }
    };

    match result {
        Ok(bytes) => print_report(&bytes, json),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn print_help() {
    println!(
        "\
Tagsym CLI

Usage:
  tagsym new [description]
  tagsym for <description>
  tagsym decode <hex>
  tagsym key-for <hex>

Flags:
  --trace            Log symbol operations to stderr
  --json             Print reports as JSON
  -h, --help         Show this help message

Hex arguments may separate byte pairs with spaces, e.g. \"81 69 64 ff 31\".
"
    );
}

fn call_symbol(realm: &mut Realm, name: &str, description: Value) -> Result<Vec<u8>, RuntimeError> {
    let Some(builtin) = get_builtin(name) else {
        eprintln!("Error: missing builtin: {}", name);
        process::exit(1);
    };
    match realm.call(builtin, &Value::Undefined, &[description])? {
        Value::String(symbol) => Ok(symbol.as_bytes().to_vec()),
        other => {
            eprintln!("Error: {} returned {}", name, other);
            process::exit(1);
        }
    }
}

fn lookup_key(realm: &mut Realm, bytes: &[u8], json: bool) {
    let tagged = Value::String(realm.strings().intern(bytes));
    match key_for(realm, &tagged) {
        Ok(Value::String(key)) if json => {
            println!("{}", serde_json::json!({ "key": key.to_string_lossy() }));
        }
        Ok(Value::String(key)) => println!("{}", key),
        Ok(_) if json => println!("{}", serde_json::json!({ "key": null })),
        Ok(other) => println!("{}", other),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn print_report(bytes: &[u8], json: bool) {
    let report = SymbolReport::new(bytes);
    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("Error: failed to serialize report: {}", err);
                process::exit(1);
            }
        }
        return;
    }

    if let Some(descriptive) = &report.descriptive {
        println!("{}", descriptive);
    }
    println!("kind:  {}", report.kind);
    println!("bytes: {}", report.bytes);
    if let Some(description) = &report.description {
        println!("description: {:?}", description);
    }
    if let Some(discriminator) = &report.discriminator {
        println!("discriminator: {}", discriminator);
    }
}

fn hex_arg(args: &[String], command: &str) -> Vec<u8> {
    if args.len() < 3 {
        eprintln!("Usage: tagsym {} <hex>", command);
        process::exit(1);
    }
    match parse_hex_bytes(&args[2..].join("")) {
        Ok(bytes) => bytes,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            process::exit(1);
        }
    }
}

fn parse_hex_bytes(text: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in '{}'", text));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let hi = hex_value(pair[0]);
            let lo = hex_value(pair[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
                _ => Err(format!(
                    "invalid hex byte '{}'",
                    String::from_utf8_lossy(pair)
                )),
            }
        })
        .collect()
}

fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|d| d as u8)
}
