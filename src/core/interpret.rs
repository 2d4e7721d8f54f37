use serde_json::Value;

use crate::error::LoadError;
use crate::models::{TreeNode, is_truthy, message_text};
use crate::source::RawResponse;

/// Turns a completed exchange into a tree root, or the reason the load failed.
pub fn interpret(response: RawResponse) -> Result<TreeNode, LoadError> {
    if !response.is_success() {
        return Err(LoadError::HttpStatus(response.status));
    }

    let body: Value = serde_json::from_str(&response.body)?;

    let Value::Object(fields) = &body else {
        return Err(LoadError::Malformed(format!(
            "expected a tree object, got {body}"
        )));
    };

    if let Some(error) = fields.get("error")
        && is_truthy(error)
    {
        return Err(LoadError::Application(message_text(error)));
    }

    Ok(serde_json::from_value(body)?)
}
