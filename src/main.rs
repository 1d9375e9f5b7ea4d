use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use cgiparams::config;
use cgiparams::utils::array::{DEFAULT_DELIMITER, DEFAULT_VALUE_DELIMITER};
use cgiparams::utils::{
    find_duplicate_names, parameters_from_query_string, rewrite_duplicate_names, split_smart,
    Parameters,
};
use cgiparams::{server, AppError};

#[derive(Parser)]
#[command(
    name = "cgiparams",
    author,
    version,
    about = "Decode query strings with CGI-style repeated parameters",
    long_about = r#"cgiparams decodes query strings where a repeated name means a list:

    tag=a&tag=b  ->  {"tag": ["a", "b"]}

Examples:
  1) Decode a query string:
      cgiparams decode 'name1=val1&arrVal=one&arrVal=two'
  2) Show the bracket-syntax rewrite:
      cgiparams rewrite 'a=1&a=2'
  3) Run the HTTP echo service:
      cgiparams serve --host 127.0.0.1 --port 8080
"#,
    after_help = "Use `cgiparams <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (falls back to CGIPARAMS_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (falls back to CGIPARAMS_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Decode a query string
    #[command(long_about = "Decode a raw query string. Repeated names become lists, values are percent-decoded and `+` becomes a space.")]
    Decode {
        query: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List parameter names that appear more than once
    Duplicates { query: String },
    /// Print the query string with repeated names rewritten to `name[]`
    Rewrite { query: String },
    /// Split a loosely delimited list (`a, b, c` or `k=v; k2=v2`)
    Split {
        input: String,
        /// Delimiter to try before `,` and `&`
        #[arg(long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
        /// Key/value delimiter
        #[arg(long, default_value_t = DEFAULT_VALUE_DELIMITER)]
        value_delimiter: char,
    },
}

fn print_parameters(params: &Parameters) {
    if params.is_empty() {
        println!("(no parameters)");
        return;
    }
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["Name", "Kind", "Value"]);

    let mut names: Vec<&String> = params.keys().collect();
    names.sort();
    for name in names {
        let value = &params[name];
        let kind = if value.is_many() { "list" } else { "single" };
        let joined = value.to_csv();
        table.add_row(vec![name.as_str(), kind, joined.as_str()]);
    }
    println!("\n{table}\n");
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Failed to serialize output").red(), e);
            process::exit(1);
        }
    }
}

async fn run_server(host: Option<String>, port: Option<u16>, env_file: Option<&str>) -> Result<(), AppError> {
    config::load_env_file(env_file);
    let host = host.unwrap_or_else(config::get_host);
    let port = match port {
        Some(p) => p,
        None => config::get_port()?,
    };
    server::start_server(&host, port).await
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        env_file: None,
    });
    match command {
        Commands::Serve { host, port, env_file } => {
            if let Err(e) = run_server(host, port, env_file.as_deref()).await {
                tracing::error!(%e, "Server failed");
                eprintln!("{}", yansi::Paint::new(e.to_string()).red());
                if matches!(e, AppError::Bind { .. }) {
                    eprintln!("{}", yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
                }
                process::exit(1);
            }
        }
        Commands::Decode { query, json } => {
            let params = parameters_from_query_string(&query);
            if json {
                print_json(&params);
            } else {
                print_parameters(&params);
            }
        }
        Commands::Duplicates { query } => {
            let mut names: Vec<String> = find_duplicate_names(&query).into_iter().collect();
            names.sort();
            for name in names {
                println!("{}", name);
            }
        }
        Commands::Rewrite { query } => {
            let duplicates = find_duplicate_names(&query);
            println!("{}", rewrite_duplicate_names(&query, &duplicates));
        }
        Commands::Split { input, delimiter, value_delimiter } => {
            print_json(&split_smart(&input, delimiter, value_delimiter));
        }
    }
}
