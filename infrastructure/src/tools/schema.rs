//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing provider-neutral
//! JSON Schema that an agent runtime can hand to its model.

use harvest_application::ports::tool_schema::ToolSchemaPort;
use harvest_domain::tool::entities::{ToolDefinition, ToolParameter, ToolSpec};
use serde_json::{Map, Value, json};

/// Converts [`ToolDefinition`]s to JSON Schema.
///
/// | `param_type` | JSON Schema type |
/// |--------------|------------------|
/// | `string`, `path` | `string` |
/// | `integer` | `integer` (with `minimum: 1`) |
/// | `number` | `number` |
/// | `boolean` | `boolean` |
///
/// Sensitive parameters are marked `writeOnly`.
pub struct JsonSchemaToolConverter;

fn parameter_schema(param: &ToolParameter) -> Value {
    let mut prop = Map::new();
    let schema_type = match param.param_type.as_str() {
        "integer" => {
            prop.insert("minimum".to_string(), json!(1));
            "integer"
        }
        "number" => "number",
        "boolean" => "boolean",
        _ => "string",
    };
    prop.insert("type".to_string(), json!(schema_type));
    prop.insert("description".to_string(), json!(param.description));
    if param.sensitive {
        prop.insert("writeOnly".to_string(), json!(true));
    }
    Value::Object(prop)
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let properties: Map<String, Value> = tool
            .parameters
            .iter()
            .map(|p| (p.name.clone(), parameter_schema(p)))
            .collect();
        let required: Vec<&str> = tool
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();

        json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<Value> {
        spec.sorted()
            .into_iter()
            .map(|t| self.tool_to_schema(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::repository::clone_repo_definition;

    #[test]
    fn test_clone_repo_schema() {
        let schema = JsonSchemaToolConverter.tool_to_schema(&clone_repo_definition());

        assert_eq!(schema["name"], "clone_repo");
        assert_eq!(schema["input_schema"]["type"], "object");
        assert_eq!(schema["input_schema"]["additionalProperties"], false);

        let props = &schema["input_schema"]["properties"];
        assert_eq!(props["repo_url"]["type"], "string");
        assert_eq!(props["dest_dir"]["type"], "string");
        assert_eq!(props["depth"]["type"], "integer");
        assert_eq!(props["depth"]["minimum"], 1);
        assert_eq!(props["token"]["writeOnly"], true);
        assert!(props["branch"].get("writeOnly").is_none());

        assert_eq!(schema["input_schema"]["required"], json!(["repo_url"]));
    }

    #[test]
    fn test_all_tools_schema_sorted() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new(
                "zeta",
                "last",
                harvest_domain::RiskLevel::Low,
            ))
            .register(clone_repo_definition());

        let tools = JsonSchemaToolConverter.all_tools_schema(&spec);
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["clone_repo", "zeta"]);
    }
}
