use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use storefront_cart::{CartConfig, CartError, CorruptEntryPolicy, FileStore, ItemId, ShoppingCart};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "cart", about = "Inspect and edit a storefront cart kept in a JSON file")]
struct Cli {
    /// JSON file holding the store entries.
    #[arg(long, env = "CART_STORE_PATH", default_value = "cart.json")]
    store: PathBuf,

    /// Entry key the cart is stored under.
    #[arg(long, env = "CART_STORAGE_KEY", default_value = storefront_cart::DEFAULT_STORAGE_KEY)]
    key: String,

    /// Fail on a malformed stored cart instead of resetting it.
    #[arg(long, default_value_t = false)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print items and total quantity.
    Show,
    /// Add one unit of an item.
    Add {
        #[arg(allow_negative_numbers = true)]
        id: ItemId,
    },
    /// Remove one unit of an item.
    Decrease {
        #[arg(allow_negative_numbers = true)]
        id: ItemId,
    },
    /// Remove an item entirely.
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: ItemId,
    },
    /// Print the quantity of one item.
    Quantity {
        #[arg(allow_negative_numbers = true)]
        id: ItemId,
    },
    /// Print the total quantity.
    Total,
}

impl Cli {
    fn config(&self) -> CartConfig {
        let policy = if self.strict { CorruptEntryPolicy::Fail } else { CorruptEntryPolicy::Reset };
        CartConfig::default().with_storage_key(self.key.clone()).with_corrupt_policy(policy)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    finish(&cli, run(&cli))
}

fn finish(cli: &Cli, result: Result<String, CliError>) -> ExitCode {
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(store = %cli.store.display(), error = %e, "cart command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let mut cart = ShoppingCart::open(FileStore::new(&cli.store), &cli.config())?;
    let value = execute(&mut cart, &cli.command)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn execute(cart: &mut ShoppingCart<FileStore>, command: &Command) -> Result<Value, CliError> {
    let value = match *command {
        Command::Show => json!({ "items": cart.cart_items(), "total": cart.cart_quantity() }),
        Command::Add { id } => {
            cart.increase_quantity(id)?;
            item_json(cart, id)
        }
        Command::Decrease { id } => {
            cart.decrease_quantity(id)?;
            item_json(cart, id)
        }
        Command::Remove { id } => {
            cart.remove_item(id)?;
            item_json(cart, id)
        }
        Command::Quantity { id } => item_json(cart, id),
        Command::Total => json!({ "total": cart.cart_quantity() }),
    };
    Ok(value)
}

fn item_json(cart: &ShoppingCart<FileStore>, id: ItemId) -> Value {
    json!({ "id": id, "quantity": cart.get_quantity(id) })
}
