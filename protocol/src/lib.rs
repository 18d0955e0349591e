//! Line-oriented JSON messages between a grid session and a front end.
//!
//! Every message is a single JSON object tagged by `"type"`. The types here
//! are plain views so front ends do not need the core crate to decode them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Click { row: u8, col: u8 },
    Reset,
    Undo,
    Snapshot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Grid {
        cells: Vec<Vec<CellView>>,
        stats: StatsView,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        outcome: Option<String>,
    },
    Rejected {
        reason: String,
    },
}

impl ServerMessage {
    pub fn rejected(reason: impl ToString) -> Self {
        Self::Rejected {
            reason: reason.to_string(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadeView {
    Even,
    Odd,
    Locked,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub value: u32,
    pub locked: bool,
    pub shade: ShadeView,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub total_value: u32,
    pub locked_cells: u8,
}

pub fn decode_client(line: &str) -> Result<ClientMessage> {
    Ok(serde_json::from_str(line.trim())?)
}

pub fn encode_client(message: &ClientMessage) -> Result<String> {
    Ok(serde_json::to_string(message)?)
}

pub fn decode_server(line: &str) -> Result<ServerMessage> {
    Ok(serde_json::from_str(line.trim())?)
}

pub fn encode_server(message: &ServerMessage) -> Result<String> {
    Ok(serde_json::to_string(message)?)
}
