//! Replay a scripted sequence of basket operations.
//!
//! Scripts are YAML files with a list of steps, each tagged by `action`.
//! Prices must be quoted so they stay decimal:
//!
//! ```yaml
//! steps:
//!   - action: add
//!     sessionId: 1
//!     product: { productCode: 11, name: milk, unitPrice: "1.40" }
//!     count: 5
//!   - action: remove
//!     sessionId: 1
//!     product: { productCode: 11, name: milk, unitPrice: "1.40" }
//!     count: 2
//!   - action: basket
//!     sessionId: 1
//!   - action: checkout
//!     sessionId: 1
//! ```

use std::path::Path;

use basket_core::{
    BasketError, BasketStore, BasketUpdateRequest, CheckoutResult, Item, SessionId,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A replay script.
#[derive(Debug, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

/// One basket operation.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Add(BasketUpdateRequest),
    Remove(BasketUpdateRequest),
    Basket {
        #[serde(rename = "sessionId")]
        session_id: SessionId,
    },
    Checkout {
        #[serde(rename = "sessionId")]
        session_id: SessionId,
    },
}

/// What a step produced.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Items(Vec<Item>),
    Checkout(Option<CheckoutResult>),
}

/// Run every step of `script` against `store`, in order.
///
/// # Errors
///
/// Stops at the first step the store rejects.
pub fn run_script(script: &Script, store: &BasketStore) -> Result<Vec<Outcome>, BasketError> {
    script
        .steps
        .iter()
        .map(|step| match step {
            Step::Add(request) => store.apply_add(request.clone()).map(Outcome::Items),
            Step::Remove(request) => store.apply_remove(request).map(Outcome::Items),
            Step::Basket { session_id } => store.get_basket(*session_id).map(Outcome::Items),
            Step::Checkout { session_id } => {
                store.calculate_checkout(*session_id).map(Outcome::Checkout)
            }
        })
        .collect()
}

/// Replay a script file against a fresh store and log each outcome.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML script
/// * `show_snapshot` - If true, log every stored basket after the last step
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if a step fails.
pub async fn replay(
    file_path: &str,
    show_snapshot: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading replay script");

    let content = tokio::fs::read_to_string(path).await?;
    let script: Script = serde_yaml::from_str(&content)?;

    info!(steps = script.steps.len(), "Parsed script");

    let store = BasketStore::new();
    let outcomes = run_script(&script, &store)?;

    for (index, outcome) in outcomes.iter().enumerate() {
        let result = serde_json::to_string(outcome)?;
        info!(step = index + 1, %result, "Step complete");
    }

    if show_snapshot {
        let snapshot = store.snapshot()?;
        let baskets = serde_json::to_string(&snapshot)?;
        info!(sessions = snapshot.len(), %baskets, "Final store state");
    }

    Ok(())
}
