use gloo_net::http::Request;
use serde_json::Value;

use crate::models::QueryRequest;

/// Query endpoint of the intelligence pipeline.
// const API_URL: &str =
//     "http://ci-news-system-backendapi-env.eba-8fpv57cs.us-west-2.elasticbeanstalk.com/query";
const API_URL: &str = "http://127.0.0.1:8000/query";

/// Posts a user query and returns the raw JSON body.
///
/// The backend reports failures in-band, so any JSON body is handed to
/// classification regardless of status code; only a network failure or a
/// non-JSON body is an `Err` here.
pub async fn send_query(query: &str) -> Result<Value, String> {
    let body = QueryRequest { query: query.to_string() };

    let resp = Request::post(API_URL)
        .json(&body)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    resp.json::<Value>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}
