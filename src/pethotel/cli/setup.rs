use clap::{Args, CommandFactory, Parser, Subcommand};
use pethotel::api::{BookingInput, CustomerInput, PetInput};
use pethotel::error::HotelError;
use pethotel::model::picker_date_to_display;
use pethotel::query::{BookingQuery, CustomerQuery, PetQuery};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pethotel",
    bin_name = "pethotel",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Customer, pet and room booking records for a pet hotel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the per-user data dir)
    #[arg(long, global = true, env = "PETHOTEL_DATA", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Password, read from the environment when set
    #[arg(long, global = true, env = "PETHOTEL_PASSWORD", hide = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Records,
    Planning,
    Access,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Records => "Records:",
            CommandGroup::Planning => "Planning:",
            CommandGroup::Access => "Setup & Access:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "customer" | "pet" | "booking" => Some(CommandGroup::Records),
            "schedule" => Some(CommandGroup::Planning),
            "init" | "login" | "passwd" | "config" | "help" => Some(CommandGroup::Access),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Records,
            CommandGroup::Planning,
            CommandGroup::Access,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("pethotel {version}\n"));
    output.push_str("Customer, pet and room booking records for a pet hotel\n");
    output.push('\n');
    output.push_str("Usage: pethotel [OPTIONS] <COMMAND>\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data <DIR>  Data directory [env: PETHOTEL_DATA]\n");
    output.push_str("  -v, --verbose     Verbose output\n");
    output.push_str("  -h, --help        Print help\n");
    output.push_str("  -V, --version     Print version\n");
    output.push('\n');
    output.push_str("Set PETHOTEL_PASSWORD to skip the password prompt.\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, e.g. `booking` or `booking add`
pub fn print_help_for_command(path: &[&str]) {
    let mut cmd = Cli::command();
    let mut current = &mut cmd;
    for name in path {
        match current.find_subcommand_mut(name) {
            Some(sub) => current = sub,
            None => {
                eprintln!("Unknown command: {}", path.join(" "));
                eprintln!();
                print_grouped_help();
                return;
            }
        }
    }
    print!("{}", current.render_help());
}

/// Names of the subcommand path the user asked help for
pub fn command_path(command: &Option<Commands>) -> Vec<&'static str> {
    match command {
        None => Vec::new(),
        Some(Commands::Customer { action }) => vec![
            "customer",
            match action {
                CustomerCommands::Add(_) => "add",
                CustomerCommands::Edit { .. } => "edit",
                CustomerCommands::Delete { .. } => "delete",
                CustomerCommands::List { .. } => "list",
            },
        ],
        Some(Commands::Pet { action }) => vec![
            "pet",
            match action {
                PetCommands::Add(_) => "add",
                PetCommands::Edit { .. } => "edit",
                PetCommands::Delete { .. } => "delete",
                PetCommands::List { .. } => "list",
            },
        ],
        Some(Commands::Booking { action }) => vec![
            "booking",
            match action {
                BookingCommands::Add(_) => "add",
                BookingCommands::Edit { .. } => "edit",
                BookingCommands::Delete { .. } => "delete",
                BookingCommands::View { .. } => "view",
                BookingCommands::List { .. } => "list",
                BookingCommands::Archive { .. } => "archive",
                BookingCommands::Unarchive { .. } => "unarchive",
                BookingCommands::Archived { .. } => "archived",
                BookingCommands::Rooms => "rooms",
            },
        ],
        Some(Commands::Schedule { .. }) => vec!["schedule"],
        Some(Commands::Init { .. }) => vec!["init"],
        Some(Commands::Login) => vec!["login"],
        Some(Commands::Passwd { .. }) => vec!["passwd"],
        Some(Commands::Config { .. }) => vec!["config"],
        Some(Commands::Help { .. }) => vec!["help"],
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add, edit, delete and search customers
    #[command(alias = "c", display_order = 1)]
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },

    /// Add, edit, delete and search pets
    #[command(alias = "p", display_order = 2)]
    Pet {
        #[command(subcommand)]
        action: PetCommands,
    },

    /// Manage room bookings and the archive
    #[command(alias = "b", display_order = 3)]
    Booking {
        #[command(subcommand)]
        action: BookingCommands,
    },

    /// Show room occupancy for a month
    #[command(alias = "s", display_order = 10)]
    Schedule {
        /// Month as MM/YYYY (defaults to the current month)
        month: Option<String>,

        /// Months to move forward (negative moves back)
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        offset: i32,
    },

    /// Create the data directory and set both passwords
    #[command(display_order = 20)]
    Init {
        /// Staff password (prompted when omitted)
        #[arg(long = "staff-password")]
        staff: Option<String>,

        /// Admin password (prompted when omitted)
        #[arg(long = "admin-password")]
        admin: Option<String>,
    },

    /// Check a password and report its access level
    #[command(display_order = 21)]
    Login,

    /// Change passwords (requires the admin password)
    #[command(display_order = 22)]
    Passwd {
        /// New staff password (prompted when omitted)
        #[arg(long = "new")]
        new: Option<String>,

        /// New admin password (left unchanged when omitted)
        #[arg(long = "new-admin")]
        new_admin: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 23)]
    Config {
        /// Configuration key (rooms, page_size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for pethotel or a subcommand
    #[command(display_order = 24)]
    Help {
        /// Subcommand to get help for
        #[arg(num_args = 0..)]
        command: Vec<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct CustomerFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub surname: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub postcode: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

impl From<CustomerFields> for CustomerInput {
    fn from(f: CustomerFields) -> Self {
        Self {
            first_name: f.first_name,
            surname: f.surname,
            address: f.address,
            postcode: f.postcode,
            email: f.email,
            phone: f.phone,
        }
    }
}

impl From<CustomerFields> for CustomerQuery {
    fn from(f: CustomerFields) -> Self {
        Self {
            first_name: f.first_name,
            surname: f.surname,
            address: f.address,
            postcode: f.postcode,
            email: f.email,
            phone: f.phone,
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct PetFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub diet: Option<String>,
    /// Additional information (optional)
    #[arg(long)]
    pub info: Option<String>,
}

impl From<PetFields> for PetInput {
    fn from(f: PetFields) -> Self {
        Self {
            name: f.name,
            age: f.age,
            species: f.species,
            description: f.description,
            diet: f.diet,
            additional_info: f.info,
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct PetSearch {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
}

impl From<PetSearch> for PetQuery {
    fn from(f: PetSearch) -> Self {
        Self {
            name: f.name,
            species: f.species,
            age: f.age,
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct BookingFields {
    /// Customer list number
    #[arg(long)]
    pub customer: Option<usize>,
    /// Pet list number
    #[arg(long)]
    pub pet: Option<usize>,
    #[arg(long)]
    pub room: Option<String>,
    /// Start date, DD/MM/YYYY
    #[arg(long)]
    pub start: Option<String>,
    /// End date, DD/MM/YYYY
    #[arg(long)]
    pub end: Option<String>,
    /// Drop-off time, HH:MM
    #[arg(long)]
    pub drop_off: Option<String>,
    /// Collection time, HH:MM
    #[arg(long)]
    pub collect: Option<String>,
    /// Start and end were copied from a calendar picker (MM/DD/YY)
    #[arg(long)]
    pub picked: bool,
}

impl TryFrom<BookingFields> for BookingInput {
    type Error = HotelError;

    fn try_from(f: BookingFields) -> Result<Self, Self::Error> {
        let picked = f.picked;
        let date = |value: Option<String>| -> Result<Option<String>, HotelError> {
            match value {
                Some(text) if picked => picker_date_to_display(&text)
                    .map(Some)
                    .map_err(HotelError::Api),
                other => Ok(other),
            }
        };
        Ok(Self {
            customer: f.customer,
            pet: f.pet,
            start: date(f.start)?,
            end: date(f.end)?,
            room: f.room,
            drop_off: f.drop_off,
            collect: f.collect,
        })
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct BookingSearch {
    #[arg(long)]
    pub room: Option<String>,
    /// Exact start date, DD/MM/YYYY
    #[arg(long)]
    pub start: Option<String>,
    /// Exact end date, DD/MM/YYYY
    #[arg(long)]
    pub end: Option<String>,
}

impl From<BookingSearch> for BookingQuery {
    fn from(f: BookingSearch) -> Self {
        Self {
            room: f.room,
            start: f.start,
            end: f.end,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// Add a customer
    Add(CustomerFields),

    /// Change a customer's details (unset fields are kept)
    Edit {
        /// List number of the customer
        number: usize,
        #[command(flatten)]
        fields: CustomerFields,
    },

    /// Delete a customer
    #[command(alias = "rm")]
    Delete {
        /// List number of the customer
        number: usize,
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List customers, optionally filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        search: CustomerFields,
        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum PetCommands {
    /// Add a pet
    Add(PetFields),

    /// Change a pet's details (unset fields are kept)
    Edit {
        /// List number of the pet
        number: usize,
        #[command(flatten)]
        fields: PetFields,
    },

    /// Delete a pet
    #[command(alias = "rm")]
    Delete {
        /// List number of the pet
        number: usize,
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List pets, optionally filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        search: PetSearch,
        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum BookingCommands {
    /// Book a room
    Add(BookingFields),

    /// Change a booking (unset fields are kept)
    Edit {
        /// List number of the booking
        number: usize,
        #[command(flatten)]
        fields: BookingFields,
    },

    /// Delete an active booking
    #[command(alias = "rm")]
    Delete {
        /// List number of the booking
        number: usize,
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show a booking with its customer and pet
    View {
        /// List number of the booking
        number: usize,
        /// Look in the archive instead
        #[arg(long)]
        archived: bool,
    },

    /// List active bookings, optionally filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        search: BookingSearch,
        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Move a booking to the archive
    Archive {
        /// List number of the booking
        number: usize,
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move an archived booking back to the active list
    Unarchive {
        /// List number in the archive
        number: usize,
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List archived bookings
    Archived {
        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// List rooms free for a new booking
    Rooms,
}
