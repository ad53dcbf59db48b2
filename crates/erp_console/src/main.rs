use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use erp_console::setup::setup_components;
use erp_console::Console;
use erp_navigation::find_parents;
use erp_types::{modules, Action, NavigationItem};
use erp_utils::color::LogColors;
use std::process::ExitCode;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Parser)]
#[command(name = "erp")]
#[command(about = "Session, access and appearance tools for the erp console", long_about = None)]
struct Cli {
    /// Emit JSON logs to stdout
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the signed-in user and what they can do
    Whoami,
    /// Check one module action for the signed-in user
    Check { module: String, action: String },
    /// Print the menu visible to the signed-in user
    Nav {
        /// Highlight the chain of entries leading to this path
        #[arg(short, long)]
        path: Option<String>,
    },
    /// Read or change the accent color
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
}

#[derive(Subcommand)]
enum ThemeCommand {
    Get,
    Set { color: String },
}

#[derive(Tabled)]
struct AccessRow {
    #[tabled(rename = "Module")]
    module: String,

    #[tabled(rename = "Licensed")]
    licensed: String,

    #[tabled(rename = "Allowed")]
    allowed: String,
}

#[derive(Tabled)]
struct MenuRow {
    #[tabled(rename = "Entry")]
    entry: String,

    #[tabled(rename = "Path")]
    path: String,
}

fn menu_rows(items: &[NavigationItem], depth: usize, active: &[String], rows: &mut Vec<MenuRow>) {
    for item in items {
        let label = format!("{}{}", "  ".repeat(depth), item.title);
        let entry = if active.contains(&item.title) {
            LogColors::green(&label)
        } else {
            label
        };
        rows.push(MenuRow {
            entry,
            path: LogColors::muted(item.href.as_deref().unwrap_or_default()),
        });
        menu_rows(&item.children, depth + 1, active, rows);
    }
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = setup_components(cli.verbose)?;
    let console = Console::new(config).context(LogColors::purple("Failed to start console"))?;

    match cli.command {
        Commands::Login { username, password } => {
            match console.login(&username, &password)? {
                Some(user) => println!("{}", LogColors::green(&format!("Signed in as {}", user.name))),
                None => {
                    println!("{}", LogColors::alert("Invalid username or password"));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Commands::Logout => {
            console.logout()?;
            println!("{}", LogColors::green("Signed out"));
        }

        Commands::Whoami => {
            let user = match console.current_user() {
                Some(user) => user,
                None => {
                    println!("{}", LogColors::alert("Not signed in"));
                    return Ok(ExitCode::SUCCESS);
                }
            };

            println!(
                "{} ({}, {})",
                LogColors::purple(&user.name),
                user.username,
                user.role
            );

            let rows = modules::ALL
                .iter()
                .map(|module| {
                    let allowed: Vec<&str> = console
                        .session()
                        .allowed_actions(module)
                        .iter()
                        .map(|a| a.as_str())
                        .collect();
                    AccessRow {
                        module: module.to_string(),
                        licensed: erp_auth::has_license(&user, module).to_string(),
                        allowed: allowed.join(", "),
                    }
                })
                .collect::<Vec<_>>();
            print_table(rows);
        }

        Commands::Check { module, action } => {
            let action: Action = action.parse()?;
            if console.check_access(&module, action) {
                println!("{}", LogColors::green(&format!("{}.{}: allowed", module, action)));
            } else {
                println!("{}", LogColors::alert(&format!("{}.{}: denied", module, action)));
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Nav { path } => {
            let menu = console.menu();
            if menu.is_empty() {
                println!("{}", LogColors::alert("No menu entries available"));
                return Ok(ExitCode::SUCCESS);
            }

            let active: Vec<String> = path
                .as_deref()
                .map(|path| {
                    find_parents(&menu, path)
                        .into_iter()
                        .map(|item| item.title.clone())
                        .collect()
                })
                .unwrap_or_default();

            let mut rows = Vec::new();
            menu_rows(&menu, 0, &active, &mut rows);
            print_table(rows);
        }

        Commands::Theme { command } => match command {
            ThemeCommand::Get => println!("{}", console.theme_color()),
            ThemeCommand::Set { color } => {
                let color = console.set_theme_color(&color)?;
                println!("{}", LogColors::green(&format!("Theme color set to {}", color)));
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
