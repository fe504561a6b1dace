use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionArgs {
    session_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClaimArgs {
    session_id: String,
    word_id: String,
    value: i64,
}

// -- Types matching backend structs --

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EarningsSummary {
    pub session_id: String,
    pub total: i64,
    pub claimed: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimOutcome {
    Recorded,
    AlreadyClaimed,
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

fn session_args(session_id: &str) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(&SessionArgs {
        session_id: session_id.to_string(),
    })
    .map_err(|e| e.to_string())
}

// -- Session --

pub async fn get_session_id() -> Result<String, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("get_session_id", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// -- Reward ledger --

pub async fn get_earnings_summary(session_id: &str) -> Result<EarningsSummary, String> {
    let result = invoke("get_earnings_summary", session_args(session_id)?)
        .await
        .map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn claim_reward(
    session_id: &str,
    word_id: &str,
    value: i64,
) -> Result<ClaimOutcome, String> {
    let args = serde_wasm_bindgen::to_value(&ClaimArgs {
        session_id: session_id.to_string(),
        word_id: word_id.to_string(),
        value,
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("claim_reward", args).await.map_err(js_error)?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_args_are_camel_case() {
        let json = serde_json::to_value(ClaimArgs {
            session_id: "session_1_a".into(),
            word_id: "table".into(),
            value: 2500,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sessionId": "session_1_a", "wordId": "table", "value": 2500})
        );
    }

    #[test]
    fn test_outcome_wire_names() {
        let outcome: ClaimOutcome = serde_json::from_str("\"already_claimed\"").unwrap();
        assert_eq!(outcome, ClaimOutcome::AlreadyClaimed);
        assert_eq!(
            serde_json::to_string(&ClaimOutcome::Recorded).unwrap(),
            "\"recorded\""
        );
    }

    #[test]
    fn test_summary_shape() {
        let summary: EarningsSummary = serde_json::from_str(
            r#"{"session_id":"session_1_a","total":1500,"claimed":["hero-red-words"]}"#,
        )
        .unwrap();
        assert_eq!(summary.total, 1500);
        assert_eq!(summary.claimed, vec!["hero-red-words".to_string()]);
    }
}
