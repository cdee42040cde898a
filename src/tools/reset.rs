/// Tool for resetting the hunter
///
/// This module implements the hunter_reset MCP tool. A reset wipes the
/// progression record and every quest, so it demands an explicit
/// confirmation flag.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, GuildState};

/// Parameters for resetting the hunter
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ResetParams {
    /// Must be true; guards against accidental resets
    pub confirm: bool,
}

/// Response from resetting the hunter
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

/// Reset stats and quests to a fresh guild
pub fn hunter_reset(
    state: &mut GuildState,
    params: ResetParams,
) -> Result<ResetResponse, DomainError> {
    if !params.confirm {
        return Err(DomainError::Validation {
            message: "Reset requires confirm=true; this wipes all quests and progression"
                .to_string(),
        });
    }

    state.reset();

    Ok(ResetResponse {
        success: true,
        message: "💀 The hunter has been reborn. Level 1, rank E, empty quest log.".to_string(),
    })
}
