//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

/// Course enrollment backend - catalog management and authentication
#[derive(Parser, Debug)]
#[command(name = "course-enrollment")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage the course catalog
    Catalog(CatalogArgs),

    /// Manage user identities
    Users(UsersArgs),

    /// Authenticate and print a bearer token
    Login(LoginArgs),

    /// Inspect bearer tokens
    Token(TokenArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Catalog entity kinds
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Categories,
    Courses,
    Instructors,
    Enrollments,
}

/// Arguments for the catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub action: CatalogAction,
}

/// Catalog actions
#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    /// List every record of a kind
    List {
        #[arg(value_enum)]
        kind: EntityKind,
    },
    /// Show one record with its relations
    Show {
        #[arg(value_enum)]
        kind: EntityKind,
        id: i32,
    },
    /// Delete one record
    Delete {
        #[arg(value_enum)]
        kind: EntityKind,
        id: i32,
    },
    /// Add a category
    AddCategory {
        #[arg(long)]
        name: String,
    },
    /// Rename a category
    UpdateCategory {
        id: i32,
        #[arg(long)]
        name: String,
    },
    /// Add a course to a category
    AddCourse {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category_id: i32,
        #[arg(long)]
        description: Option<String>,
    },
    /// Replace a course
    UpdateCourse {
        id: i32,
        #[arg(long)]
        title: String,
        #[arg(long)]
        category_id: i32,
        #[arg(long)]
        description: Option<String>,
    },
    /// Add an instructor
    AddInstructor {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Replace an instructor
    UpdateInstructor {
        id: i32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Enroll an instructor on a course
    Enroll {
        #[arg(long)]
        course_id: i32,
        #[arg(long)]
        instructor_id: i32,
    },
    /// Move an enrollment to another course or instructor
    UpdateEnrollment {
        id: i32,
        #[arg(long)]
        course_id: i32,
        #[arg(long)]
        instructor_id: i32,
    },
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Identity actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Register a new identity
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "USER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show an identity by ID
    Show { id: Uuid },
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Username or email
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long, env = "USER_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Arguments for the token command
#[derive(Parser, Debug)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub action: TokenAction,
}

/// Token actions
#[derive(Subcommand, Debug)]
pub enum TokenAction {
    /// Validate a token and print its claims
    Verify { token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_catalog_show() {
        let cli = Cli::parse_from(["course-enrollment", "catalog", "show", "courses", "3"]);
        match cli.command {
            Commands::Catalog(CatalogArgs {
                action: CatalogAction::Show { kind, id },
            }) => {
                assert_eq!(kind, EntityKind::Courses);
                assert_eq!(id, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_login() {
        let cli = Cli::parse_from([
            "course-enrollment",
            "login",
            "--username",
            "alice@example.com",
            "--password",
            "secret-pass",
        ]);
        assert!(matches!(cli.command, Commands::Login(ref args) if args.username == "alice@example.com"));
    }
}
