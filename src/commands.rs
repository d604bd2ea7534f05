//! Terminal subcommands. Bodies go through the same `RequestValidator` as the HTTP handlers.

use crate::error::AppError;
use crate::model::{NewClient, NewOrder};
use crate::service::RequestValidator;
use crate::state::AppState;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Print the client report.
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    Remove { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// Print the order report, newest first.
    List,
    Add {
        #[arg(long)]
        client_id: i64,
        #[arg(long)]
        product: String,
        #[arg(long)]
        amount: f64,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
}

fn missing(id: i64) -> AppError {
    AppError::NotFound(format!("client {} not found", id))
}

pub async fn run_clients(state: &AppState, cmd: ClientCommand) -> Result<(), AppError> {
    match cmd {
        ClientCommand::List => state.clients.render_report().await,
        ClientCommand::Add { name, email, phone } => {
            let client = NewClient::new(name, email, phone);
            RequestValidator::validate_client(&client)?;
            let id = state.clients.create(&client).await?;
            println!("✓ client {} registered", id);
        }
        ClientCommand::Update { id, name, email, phone } => {
            let client = NewClient::new(name, email, phone);
            RequestValidator::validate_client(&client)?;
            state.clients.update(id, &client).await?.matched().map_err(|_| missing(id))?;
            println!("✓ client {} updated", id);
        }
        ClientCommand::Remove { id } => {
            state.clients.delete(id).await?.matched().map_err(|_| missing(id))?;
            println!("✓ client {} removed", id);
        }
    }
    Ok(())
}

pub async fn run_orders(state: &AppState, cmd: OrderCommand) -> Result<(), AppError> {
    match cmd {
        OrderCommand::List => state.orders.render_report().await,
        OrderCommand::Add { client_id, product, amount, date } => {
            let order = NewOrder::new(client_id, product, amount, date);
            RequestValidator::validate_order(&order)?;
            let id = state.orders.create(&order).await?;
            println!("✓ order {} registered for client {}", id, client_id);
        }
    }
    Ok(())
}
