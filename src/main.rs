//! Purpose: `switchboard` CLI entry point.
//! Role: Binary crate root; lists operations, marshals request documents, normalizes responses.
//! Invariants: Command results are JSON on stdout (compact unless stdout is a TTY).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
#![allow(clippy::result_large_err)]
use std::io::{self, IsTerminal, Read};

use clap::{Parser, Subcommand, error::ErrorKind as ClapErrorKind};
use serde_json::{Map, Value, json};
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

use switchboard::api::{ClientConfig, Error, ErrorKind, HttpRequest, to_exit_code};
use switchboard::catalog::{self, CATALOG, CatalogEntry};
use switchboard::json::parse;

#[derive(Parser, Debug)]
#[command(
    name = "switchboard",
    version,
    about = "Marshal and decode contact-center API requests as JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported operations, one JSON object per line.
    Operations {
        /// Include each operation's request field table.
        #[arg(long)]
        fields: bool,
    },
    /// Marshal a request document into an HTTP request description.
    Marshal {
        /// Operation name (e.g. ListQueues).
        operation: String,
        /// Request document path; use - for stdin.
        #[arg(short, long, default_value = "-")]
        input: String,
        /// Service endpoint (http or https origin).
        #[arg(long)]
        endpoint: Option<String>,
        /// Region used to derive the default endpoint.
        #[arg(long)]
        region: Option<String>,
    },
    /// Decode a response body and print it re-encoded (unknown keys dropped).
    Decode {
        /// Operation name (e.g. DescribeUser).
        operation: String,
        /// Response body path; use - for stdin.
        #[arg(short, long, default_value = "-")]
        input: String,
    },
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<i32, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(exit_code);
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(clap_error_summary(&err))
                    .with_hint("Try `switchboard --help`."));
            }
        },
    };

    match cli.command {
        Command::Operations { fields } => {
            for entry in CATALOG {
                emit_json(operation_json(entry, fields));
            }
        }
        Command::Marshal {
            operation,
            input,
            endpoint,
            region,
        } => {
            let entry = lookup_operation(&operation)?;
            let config = resolve_config(region, endpoint)?;
            let document = read_input(&input)?;
            let request = entry.marshal_json(&document)?;
            emit_json(request_json(&config, &request)?);
        }
        Command::Decode { operation, input } => {
            let entry = lookup_operation(&operation)?;
            let body = read_input(&input)?;
            let normalized = entry.normalize_output(&body)?;
            emit_json(parse_json(&normalized, "cli.decode")?);
        }
    }
    Ok(0)
}

fn lookup_operation(name: &str) -> Result<&'static CatalogEntry, Error> {
    catalog::find(name).ok_or_else(|| {
        Error::new(ErrorKind::Usage)
            .with_message(format!("unknown operation '{name}'"))
            .with_hint("Run `switchboard operations` to list supported operations.")
    })
}

fn resolve_config(region: Option<String>, endpoint: Option<String>) -> Result<ClientConfig, Error> {
    let config = match region {
        Some(region) => ClientConfig::new(region)?,
        None => ClientConfig::from_env()?,
    };
    match endpoint {
        Some(endpoint) => config.with_endpoint(&endpoint),
        None => Ok(config),
    }
}

fn read_input(path: &str) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    if path == "-" {
        io::stdin().read_to_end(&mut bytes).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to read stdin")
                .with_source(err)
        })?;
        return Ok(bytes);
    }
    std::fs::read(path).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message(format!("failed to read input file '{path}'"))
            .with_hint("Pass a readable file to --input, or - for stdin.")
            .with_source(err)
    })
}

fn parse_json(bytes: &[u8], context: &str) -> Result<Value, Error> {
    parse::from_slice(bytes).map_err(|err| {
        Error::new(ErrorKind::Client)
            .with_message("invalid json")
            .with_hint(parse::hint_for_error(&err, context))
            .with_source(err)
    })
}

fn operation_json(entry: &CatalogEntry, with_fields: bool) -> Value {
    let mut value = json!({
        "name": entry.name,
        "method": entry.method.as_str(),
        "uri": entry.uri,
        "input": entry.input_type,
        "output": entry.output_type,
    });
    if with_fields {
        value["fields"] = json!(entry.input_fields());
    }
    value
}

fn request_json(config: &ClientConfig, request: &HttpRequest) -> Result<Value, Error> {
    let body = if request.body.is_empty() {
        Value::Null
    } else {
        parse_json(&request.body, "cli.marshal")?
    };
    let query: Vec<Value> = request
        .query
        .iter()
        .map(|(name, value)| json!([name, value]))
        .collect();
    Ok(json!({
        "operation": request.operation,
        "method": request.method.as_str(),
        "path": request.resource_path,
        "url": config.request_url(request).as_str(),
        "query": query,
        "headers": request.headers,
        "body": body,
    }))
}

fn emit_json(value: Value) {
    let json = if io::stdout().is_terminal() {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

fn emit_error(err: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("{}", error_text(err));
        return;
    }
    let json = serde_json::to_string(&error_json(err)).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Client\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::InvalidArgument => "invalid argument".to_string(),
        ErrorKind::Client => "client error".to_string(),
        ErrorKind::Service => "service error".to_string(),
        ErrorKind::Transport => "transport error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(operation) = err.operation() {
        inner.insert("operation".to_string(), json!(operation));
    }
    if let Some(code) = err.code() {
        inner.insert("code".to_string(), json!(code));
    }
    if let Some(status) = err.status() {
        inner.insert("status".to_string(), json!(status));
    }
    if let Some(request_id) = err.request_id() {
        inner.insert("request_id".to_string(), json!(request_id));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error) -> String {
    let mut lines = vec![format!("error: {}", error_message(err))];
    if let Some(operation) = err.operation() {
        lines.push(format!("operation: {operation}"));
    }
    if let Some(hint) = err.hint() {
        lines.push(format!("hint: {hint}"));
    }
    for cause in error_causes(err) {
        lines.push(format!("caused by: {cause}"));
    }
    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}
