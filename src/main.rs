use element_catalog::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use element_catalog::error::AppError;
use element_catalog::models::{AppState, SortSpec};
use element_catalog::render::{self, EnglishMessages, ListConfig, MessageCatalog, Messages};
use element_catalog::routes::build_router;
use element_catalog::store::{ElementQuery, MemoryStore};

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use comfy_table::{Table, presets, modifiers, ContentArrangement};
use terminal_size::{Width, terminal_size};

fn build_state_from_env(env_file: Option<&str>, data: Option<PathBuf>) -> Result<AppState, AppError> {
    config::load_env_file(env_file);
    let page_size = config::get_page_size();
    let data_file = data.unwrap_or_else(config::get_data_file);
    let store = MemoryStore::load(&data_file, page_size)?;
    let messages: Arc<dyn Messages> = match config::get_messages_file() {
        Some(path) => Arc::new(MessageCatalog::load(&path)?),
        None => Arc::new(EnglishMessages),
    };
    let list_config = ListConfig {
        page_window: config::get_page_window(),
        container_id: config::get_container_id(),
        ..ListConfig::default()
    };

    Ok(AppState {
        store: Arc::new(store),
        messages,
        list_config: Arc::new(list_config),
        page_size,
        default_sort: config::get_default_sort(),
        custom_css: None,
    })
}

fn load_state_or_exit(env_file: Option<&str>, data: Option<PathBuf>) -> AppState {
    match build_state_from_env(env_file, data) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(%e, "Failed to load configuration");
            eprintln!("{}: {}", yansi::Paint::red("Failed to load configuration"), e);
            process::exit(1);
        }
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting element catalog server");
    println!("{} {}", yansi::Paint::new("Web server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

/// Query options shared by `list` and `render`.
#[derive(clap::Args)]
struct PageArgs {
    /// Page number to display (1-indexed)
    #[arg(long, short = 'p', default_value_t = 1)]
    page: usize,
    /// Number of elements per page (defaults to PAGE_SIZE)
    #[arg(long)]
    per_page: Option<usize>,
    /// Field to sort by (name, type, priority, description, categories, defaults, allowed_values)
    #[arg(long)]
    sort: Option<String>,
    /// Sort direction (asc|desc)
    #[arg(long)]
    direction: Option<String>,
    /// Only elements of this object template
    #[arg(long)]
    template: Option<u64>,
    /// Path to .env file
    #[arg(long)]
    env_file: Option<String>,
    /// Path to the element data file (overrides DATA_FILE)
    #[arg(long)]
    data: Option<PathBuf>,
}

impl PageArgs {
    fn query(&self, state: &AppState) -> (ElementQuery, SortSpec) {
        let params = element_catalog::handlers::elements::ListParams {
            page: None,
            sort: self.sort.clone(),
            direction: self.direction.clone(),
        };
        let sort = element_catalog::handlers::elements::resolve_sort(&params, state.default_sort);
        let mut query = ElementQuery::new(self.page, self.per_page.unwrap_or(state.page_size), sort);
        if let Some(t) = self.template {
            query = query.for_template(t);
        }
        (query, sort)
    }
}

fn print_page(state: &AppState, query: &ElementQuery) {
    let page = state.store.page(query);
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }

    let columns: Vec<_> = state
        .list_config
        .columns
        .iter()
        .filter_map(|c| match c.kind {
            render::ColumnKind::Field(f) => Some((f, state.messages.translate(&c.label).into_owned())),
            render::ColumnKind::Actions => None,
        })
        .collect();
    let mut header = vec!["ID".to_string()];
    header.extend(columns.iter().map(|(_, label)| label.clone()));
    table.set_header(header);

    if page.is_empty() {
        println!("(empty list)");
    } else {
        for record in &page.records {
            let mut row = vec![record.id.to_string()];
            row.extend(columns.iter().map(|(f, _)| render::field_lines(record, *f).join("\n")));
            table.add_row(row);
        }
        println!("\n{table}\n");
    }
    let counter = render::messages::format_counter(&state.messages.translate(render::messages::COUNTER), &page);
    println!("{}", yansi::Paint::new(counter).dim());
}

#[derive(Parser)]
#[command(
    name = "element-catalog",
    author,
    version,
    about = "Browse object template elements",
    long_about = r#"Serve and browse a catalog of object template elements.

The web UI lists elements in a sortable, paginated table that refreshes in
place. The same listing is available on the terminal with `list`.

Examples:
  1) Run the server:
      element-catalog serve --data elements.json --port 5000
  2) Print page 2 sorted by priority:
      element-catalog list --page 2 --sort priority --direction desc
  3) Print the list fragment HTML:
      element-catalog render --template 12
"#,
    after_help = "Use `element-catalog <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Only log warnings and errors
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to the element data file (overrides DATA_FILE)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (env vars, data file, message catalog)
    #[command(about = "Validate configuration and data files.", long_about = "Load the element data file and the optional message catalog exactly as the server would and report what was found.")]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print one page of elements as a table
    List(PageArgs),
    /// Print the HTML list fragment for one page
    Render(PageArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.silent {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // With no command, serve with defaults
    let Some(command) = cli.command else {
        let state = load_state_or_exit(None, None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };
    match command {
        Commands::Serve { host, port, env_file, data, stylesheet } => {
            let state = load_state_or_exit(env_file.as_deref(), data);
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file, data } => {
            let state = load_state_or_exit(env_file.as_deref(), data);
            let first = state.store.page(&ElementQuery::new(1, state.page_size, state.default_sort));
            println!(
                "{} ({} elements, page size {}, default sort {} {})",
                yansi::Paint::new("Configuration looks valid").green(),
                first.total_count,
                state.page_size,
                state.default_sort.field,
                state.default_sort.direction.as_str(),
            );
        }
        Commands::List(args) => {
            let state = load_state_or_exit(args.env_file.as_deref(), args.data.clone());
            let (query, _) = args.query(&state);
            print_page(&state, &query);
        }
        Commands::Render(args) => {
            let state = load_state_or_exit(args.env_file.as_deref(), args.data.clone());
            let (query, sort) = args.query(&state);
            let page = state.store.page(&query);
            let base_path = match args.template {
                Some(t) => format!("/object-templates/{}/elements", t),
                None => config::DEFAULT_LIST_PATH.to_string(),
            };
            let list_config = state.list_config.with_base_path(base_path);
            match render::render_page(&page, &sort, &list_config, state.messages.as_ref()) {
                Ok(html) => println!("{}", html),
                Err(e) => {
                    tracing::error!(%e, "Failed to render list");
                    eprintln!("{}: {}", yansi::Paint::red("Failed to render list"), e);
                    process::exit(1);
                }
            }
        }
    }
}
