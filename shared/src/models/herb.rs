//! Herb models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{FarmerId, HerbId};

/// Herb category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HerbCategory {
    Cannabis,
    Traditional,
}

/// A herb grown by a farmer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Herb {
    pub id: HerbId,
    pub name: String,
    pub farmer_id: FarmerId,
    pub category: HerbCategory,
    /// THC content in percent (cannabis only)
    pub thc_content: Option<Decimal>,
    /// CBD content in percent (cannabis only)
    pub cbd_content: Option<Decimal>,
    pub properties: Vec<String>,
}
