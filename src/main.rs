use clap::{Parser, Subcommand};
use rusty_catalog_ddd::{
    adapters::csv::{catalog::Catalog as CsvCatalog, user_store::UserStore as CsvUserStore},
    adapters::fs::action_log::ActionLog as FileActionLog,
    adapters::mock::notification::AvailabilityNotifier as MockAvailabilityNotifier,
    application::auth,
    application::catalog::{self as catalog_maintenance, AddBookOutcome, RemoveBookOutcome},
    application::lending::{self, BorrowOutcome, ReturnOutcome, ServiceDependencies, TitleLocks},
    application::logging::{Action, with_action_log},
    application::search::{self, DisplayFilter, SearchField},
    domain::{
        Book, BookTitle, Requester,
        commands::{BorrowBook, ReturnBook},
    },
    ports::{
        action_log::ActionLog, catalog::Catalog, notification::AvailabilityNotifier,
        user_store::UserStore,
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "rusty-catalog",
    about = "Library catalog staff console: lending, waiting lists, search and accounts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a staff account
    Register { username: String, password: String },

    /// Log in with a staff account
    Login { username: String, password: String },

    /// Add a book to the catalog
    AddBook {
        title: String,
        author: String,
        genre: String,
        year: u16,

        /// Number of copies in stock
        #[arg(long, default_value_t = 1)]
        copies: u32,
    },

    /// Remove a book from the catalog
    RemoveBook { title: String },

    /// Borrow a copy, or join the waiting list when none is available
    Borrow {
        title: String,

        /// Requester to queue when no copy is available
        #[arg(long)]
        requester: Option<String>,
    },

    /// Return a copy and notify the next requester in line
    Return { title: String },

    /// Search books by field
    Search {
        query: String,

        /// One of: title, author, genre, year, copies_available
        #[arg(long, default_value = "title")]
        by: String,
    },

    /// List books with a filter
    List {
        /// One of: all, popular, available, loaned
        #[arg(long, default_value = "all")]
        filter: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_catalog_ddd=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Flat-file locations, overridable per installation
    let books_csv = std::env::var("BOOKS_CSV").unwrap_or_else(|_| "books.csv".into());
    let users_csv = std::env::var("USERS_CSV").unwrap_or_else(|_| "users.csv".into());
    let log_file = std::env::var("ACTION_LOG").unwrap_or_else(|_| "library_logs.txt".into());

    // Initialize adapters
    let catalog: Arc<dyn Catalog> =
        Arc::new(CsvCatalog::open(&books_csv).expect("Failed to open books file"));
    let users: Arc<dyn UserStore> =
        Arc::new(CsvUserStore::open(&users_csv).expect("Failed to open users file"));
    let action_log: Arc<dyn ActionLog> =
        Arc::new(FileActionLog::open(&log_file).expect("Failed to open action log file"));
    let notifier: Arc<dyn AvailabilityNotifier> = Arc::new(MockAvailabilityNotifier::new());

    // Create service dependencies
    let deps = ServiceDependencies {
        catalog: catalog.clone(),
        notifier,
        locks: Arc::new(TitleLocks::new()),
    };

    let cli = Cli::parse();

    match cli.command {
        Commands::Register { username, password } => {
            let result =
                with_action_log(&action_log, Action::Register, auth::register(&users, &username, &password)).await;
            match result {
                Ok(outcome) => println!("{outcome}"),
                Err(error) => fail(error),
            }
        }

        Commands::Login { username, password } => {
            let result =
                with_action_log(&action_log, Action::Login, auth::login(&users, &username, &password)).await;
            match result {
                Ok(outcome) => println!("{outcome}"),
                Err(error) => fail(error),
            }
        }

        Commands::AddBook {
            title,
            author,
            genre,
            year,
            copies,
        } => {
            let title = BookTitle::new(title).expect("Title must not be empty");
            let book = Book::new(title.clone(), author, genre, year, copies);
            let result = with_action_log(
                &action_log,
                Action::AddBook,
                catalog_maintenance::add_book(&catalog, book),
            )
            .await;
            match result {
                Ok(AddBookOutcome::Added) => println!("Book '{title}' added to the catalog."),
                Ok(AddBookOutcome::DuplicateTitle) => {
                    println!("Error: Book '{title}' already exists.")
                }
                Err(error) => fail(error),
            }
        }

        Commands::RemoveBook { title } => {
            let title = BookTitle::new(title).expect("Title must not be empty");
            let result = with_action_log(
                &action_log,
                Action::RemoveBook,
                catalog_maintenance::remove_book(&catalog, &title),
            )
            .await;
            match result {
                Ok(RemoveBookOutcome::Removed) => println!("Book '{title}' removed."),
                Ok(RemoveBookOutcome::TitleNotFound) => {
                    println!("Error: Book '{title}' not found.")
                }
                Err(error) => fail(error),
            }
        }

        Commands::Borrow { title, requester } => {
            let title = BookTitle::new(title).expect("Title must not be empty");
            let requester = requester
                .map(|name| Requester::new(name).expect("Requester name must not be empty"));
            let cmd = BorrowBook {
                title: title.clone(),
                requester: requester.clone(),
            };
            let outcome =
                with_action_log(&action_log, Action::BorrowBook, lending::borrow_book(&deps, cmd))
                    .await;
            match outcome {
                BorrowOutcome::Loaned => {
                    let borrower = requester
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "anonymous".into());
                    println!("Book '{title}' borrowed by {borrower}.");
                }
                BorrowOutcome::Queued => {
                    // Queued is only returned when a requester was given
                    let name = requester
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "anonymous".into());
                    println!("{name} added to the waiting list for '{title}'.");
                }
                BorrowOutcome::Rejected(reason) => {
                    println!("Error: could not borrow '{title}': {reason}.")
                }
            }
        }

        Commands::Return { title } => {
            let title = BookTitle::new(title).expect("Title must not be empty");
            let cmd = ReturnBook {
                title: title.clone(),
            };
            let outcome =
                with_action_log(&action_log, Action::ReturnBook, lending::return_book(&deps, cmd))
                    .await;
            match outcome {
                ReturnOutcome::Returned {
                    notified: Some(requester),
                } => {
                    println!("Book '{title}' returned.");
                    println!("Notification: The book '{title}' is now available for {requester}.");
                }
                ReturnOutcome::Returned { notified: None } => {
                    println!("Book '{title}' returned. No users in the waiting list.");
                }
                ReturnOutcome::Rejected(reason) => {
                    println!("Error: could not return '{title}': {reason}.")
                }
            }
        }

        Commands::Search { query, by } => {
            let field: SearchField = by.parse().unwrap_or_else(|error| fail(error));
            let action = Action::Search {
                query: query.clone(),
                field,
            };
            let result =
                with_action_log(&action_log, action, search::perform_search(&catalog, &query, field))
                    .await;
            match result {
                Ok(books) if books.is_empty() => println!("No books found."),
                Ok(books) => {
                    for book in books {
                        println!(
                            "{} | {} | {} | {}",
                            book.title, book.author, book.year, book.genre
                        );
                    }
                }
                Err(error) => fail(error),
            }
        }

        Commands::List { filter } => {
            let filter: DisplayFilter = filter.parse().unwrap_or_else(|error| fail(error));
            // Only the popular listing is a logged action
            let result = if filter == DisplayFilter::Popular {
                with_action_log(
                    &action_log,
                    Action::DisplayPopular,
                    search::display_books(&catalog, filter),
                )
                .await
            } else {
                search::display_books(&catalog, filter).await
            };
            match result {
                Ok(books) if books.is_empty() => println!("No books found."),
                Ok(books) => {
                    for book in books {
                        println!(
                            "{} | {} | {} | {} | {} of {} available",
                            book.title,
                            book.author,
                            book.genre,
                            book.year,
                            book.copies_available,
                            book.total_copies
                        );
                    }
                }
                Err(error) => fail(error),
            }
        }
    }
}

/// Print the error and exit nonzero
fn fail(error: impl std::fmt::Display) -> ! {
    eprintln!("Error: {error}");
    std::process::exit(1);
}
