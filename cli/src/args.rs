use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tienda_cli::OutputFormat;

/// Tienda CLI - terminal client for the Tienda back office
#[derive(Parser, Debug)]
#[command(name = "tienda")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the Tienda back office", long_about = None)]
pub struct Cli {
    /// Server base URL (e.g. http://localhost:3001/api)
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Deployment name the stored session is keyed by
    #[arg(long = "instance", default_value = "local")]
    pub instance: String,

    /// Configuration file path
    #[arg(long = "config", default_value = "~/.config/tienda/config.toml")]
    pub config: PathBuf,

    /// Output format (defaults to the config file's choice, else table)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable JSON output (shorthand for --format=json)
    #[arg(long = "json", conflicts_with = "format")]
    pub json: bool,

    /// Authentication model override: "bearer" or "cookie"
    #[arg(long = "auth-mode")]
    pub auth_mode: Option<String>,

    /// HTTP request timeout in seconds (default: 30)
    #[arg(long = "timeout", value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,

    /// Connection timeout in seconds (TCP + TLS handshake, default: 10)
    #[arg(
        long = "connection-timeout",
        value_name = "SECONDS",
        default_value_t = 10
    )]
    pub connection_timeout: u64,

    /// Use fast timeout preset (optimized for local development)
    #[arg(long = "fast-timeouts")]
    pub fast_timeouts: bool,

    /// Use relaxed timeout preset (optimized for high-latency networks)
    #[arg(long = "relaxed-timeouts", conflicts_with = "fast_timeouts")]
    pub relaxed_timeouts: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Log out, clearing the stored session
    Logout,

    /// Show the stored user and authentication state
    Whoami,

    /// Register a new account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
        /// admin, manager or employee; omitted to let the server choose
        #[arg(long)]
        role: Option<String>,
    },

    /// Product catalog
    #[command(subcommand)]
    Products(ProductsCommand),

    /// Stock levels
    #[command(subcommand)]
    Stock(StockCommand),

    /// Orders
    #[command(subcommand)]
    Orders(OrdersCommand),

    /// User accounts
    #[command(subcommand)]
    Users(UsersCommand),

    /// Attendance clock
    #[command(subcommand)]
    Attendance(AttendanceCommand),

    /// Reports
    #[command(subcommand)]
    Reports(ReportsCommand),
}

#[derive(Subcommand, Debug)]
pub enum ProductsCommand {
    /// List products, optionally filtered
    List {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Filter on active flag (true/false)
        #[arg(long)]
        active: Option<bool>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one product
    Get { id: String },

    /// Search products by name
    Search { name: String },

    /// List products in a category
    Category { category: String },

    /// List active products
    Active,

    /// List products that are active and in stock
    Available,

    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        category: String,
    },

    /// Update fields of a product
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a product
    Delete { id: String },

    /// Flip a product inactive without deleting it
    Deactivate { id: String },
}

#[derive(Subcommand, Debug)]
pub enum StockCommand {
    /// List all stock records
    List,

    /// Show stock for one product
    Product { product_id: String },

    /// List items at or below their minimum quantity
    Low,

    /// Increase stock for a product
    Increase {
        product_id: String,
        quantity: i64,
        #[arg(long)]
        reason: Option<String>,
    },

    /// Decrease stock for a product
    Decrease {
        product_id: String,
        quantity: i64,
        #[arg(long)]
        reason: Option<String>,
    },

    /// Set an absolute quantity, optionally adjusting thresholds
    Set {
        product_id: String,
        quantity: i64,
        #[arg(long)]
        min: Option<i64>,
        #[arg(long)]
        max: Option<i64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrdersCommand {
    /// List orders
    List,

    /// Show one order with its lines
    Get { id: String },

    /// Place an order; repeat --item for each line
    Create {
        /// Order line as product_id:quantity (e.g. --item p42:3)
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List user accounts
    List,

    /// Show one user
    Get { id: String },

    /// Create a user account
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
        /// admin, manager or employee
        #[arg(long)]
        role: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AttendanceCommand {
    /// Register a clock-in
    In { user_id: String },

    /// Register a clock-out
    Out { user_id: String },

    /// List attendance records
    List {
        #[arg(long)]
        user: Option<String>,
        /// Day in YYYY-MM-DD format
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportsCommand {
    /// Sales report over a date range
    Sales {
        /// Start date, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// End date, YYYY-MM-DD
        #[arg(long)]
        to: String,
    },

    /// Current stock report
    Stock,

    /// Attendance report over a date range
    Attendance {
        /// Start date, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// End date, YYYY-MM-DD
        #[arg(long)]
        to: String,
    },
}
