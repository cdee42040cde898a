/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the server loop that:
/// 1. Reads JSON-RPC requests from stdin, one per line
/// 2. Routes tool calls into the quest tracker
/// 3. Writes JSON-RPC responses to stdout
///
/// Mutating tools persist a snapshot after every successful call.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::mcp::protocol::*;
use crate::tools;
use crate::{QuestTrackerServer, ServerError};

/// Parse a tool argument map into a typed parameter struct
fn parse_params<T: DeserializeOwned>(args: HashMap<String, Value>) -> Result<T, serde_json::Error> {
    let object: serde_json::Map<String, Value> = args.into_iter().collect();
    serde_json::from_value(Value::Object(object))
}

/// Build a tool definition whose input schema is derived from the parameter
/// struct
fn tool_definition<T: JsonSchema>(name: &str, description: &str) -> ToolDefinition {
    let schema = schemars::schema_for!(T);
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: serde_json::to_value(schema).unwrap_or_else(|_| json!({"type": "object"})),
    }
}

/// MCP server wrapping the quest tracker
pub struct McpServer {
    quest_tracker: QuestTrackerServer,
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(quest_tracker: QuestTrackerServer) -> Self {
        Self {
            quest_tracker,
            initialized: false,
        }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line) {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                ));
            }
        };

        Some(self.handle_request(request))
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "initialized" | "notifications/initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(request.id, json!(null))
            }
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request),
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "Quest Tracker MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::error(
                request.id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
            ),
        }
    }

    /// Handle tools/list request
    ///
    /// Input schemas are derived from the tools' parameter structs.
    fn handle_tools_list(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tool_list = vec![
            tool_definition::<tools::CreateQuestParams>(
                "quest_create",
                "Accept a new quest (habit) with a difficulty rank that fixes its XP reward",
            ),
            tool_definition::<tools::CompleteQuestParams>(
                "quest_complete",
                "Complete a quest for today (or a given day) and collect XP, mana, streaks, level-ups and rank-ups",
            ),
            tool_definition::<tools::ListQuestsParams>(
                "quest_list",
                "List quests with rank, XP reward, per-quest streak and completion state",
            ),
            tool_definition::<tools::DeleteQuestParams>(
                "quest_delete",
                "Abandon a quest by id",
            ),
            tool_definition::<tools::ClearCompletedParams>(
                "quest_clear_completed",
                "Remove every completed one-shot quest from the log",
            ),
            tool_definition::<tools::HunterStatusParams>(
                "hunter_status",
                "Show the hunter's level, XP, rank, title, mana and streaks",
            ),
            tool_definition::<tools::AchievementsParams>(
                "hunter_achievements",
                "List all achievements with unlock state and progress, unlocked first",
            ),
            tool_definition::<tools::ResetParams>(
                "hunter_reset",
                "Reset the hunter and wipe all quests (requires confirm=true)",
            ),
        ];

        JsonRpcResponse::success(request.id, json!({ "tools": tool_list }))
    }

    /// Handle tools/call request
    fn handle_tools_call(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match request.params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        request.id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                );
            }
        };

        let result = match tool_params.name.as_str() {
            "quest_create" => self.call_quest_create(tool_params.arguments),
            "quest_complete" => self.call_quest_complete(tool_params.arguments),
            "quest_list" => self.call_quest_list(tool_params.arguments),
            "quest_delete" => self.call_quest_delete(tool_params.arguments),
            "quest_clear_completed" => self.call_quest_clear_completed(tool_params.arguments),
            "hunter_status" => self.call_hunter_status(tool_params.arguments),
            "hunter_achievements" => self.call_hunter_achievements(tool_params.arguments),
            "hunter_reset" => self.call_hunter_reset(tool_params.arguments),
            _ => ToolCallResult::error(format!("Unknown tool: {}", tool_params.name)),
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::error(
                request.id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
            ),
        }
    }

    /// Call the quest_create tool
    fn call_quest_create(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::CreateQuestParams = match parse_params(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(format!("Invalid parameters: {}", e)),
        };

        match tools::create_quest(self.quest_tracker.state_mut(), params) {
            Ok(response) => {
                self.quest_tracker.persist();
                let message = if let Some(quest_id) = &response.quest_id {
                    format!("{}\nQuest ID: {}", response.message, quest_id)
                } else {
                    response.message
                };
                ToolCallResult::success(message)
            }
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the quest_complete tool
    fn call_quest_complete(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::CompleteQuestParams = match parse_params(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(format!("Invalid parameters: {}", e)),
        };

        let (state, bonus) = self.quest_tracker.parts_mut();
        match tools::complete_quest(state, bonus, params) {
            Ok(response) => {
                self.quest_tracker.persist();
                ToolCallResult::success(response.message)
            }
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the quest_list tool
    fn call_quest_list(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::ListQuestsParams = match parse_params(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(format!("Invalid parameters: {}", e)),
        };

        match tools::list_quests(self.quest_tracker.state(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the quest_delete tool
    fn call_quest_delete(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::DeleteQuestParams = match parse_params(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(format!("Invalid parameters: {}", e)),
        };

        match tools::delete_quest(self.quest_tracker.state_mut(), params) {
            Ok(response) => {
                self.quest_tracker.persist();
                ToolCallResult::success(response.message)
            }
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the quest_clear_completed tool
    fn call_quest_clear_completed(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::ClearCompletedParams = match parse_params(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(format!("Invalid parameters: {}", e)),
        };

        match tools::clear_completed(self.quest_tracker.state_mut(), params) {
            Ok(response) => {
                self.quest_tracker.persist();
                ToolCallResult::success(response.message)
            }
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the hunter_status tool
    fn call_hunter_status(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::HunterStatusParams = match parse_params(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(format!("Invalid parameters: {}", e)),
        };

        match tools::hunter_status(self.quest_tracker.state(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the hunter_achievements tool
    fn call_hunter_achievements(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::AchievementsParams = match parse_params(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(format!("Invalid parameters: {}", e)),
        };

        match tools::hunter_achievements(self.quest_tracker.state(), params) {
            Ok(response) => ToolCallResult::success(response.message),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Call the hunter_reset tool
    fn call_hunter_reset(&mut self, args: HashMap<String, Value>) -> ToolCallResult {
        let params: tools::ResetParams = match parse_params(args) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(format!("Invalid parameters: {}", e)),
        };

        match tools::hunter_reset(self.quest_tracker.state_mut(), params) {
            Ok(response) => {
                self.quest_tracker.persist();
                ToolCallResult::success(response.message)
            }
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }
}
