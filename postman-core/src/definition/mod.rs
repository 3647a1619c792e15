use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
    Auto,
}

/// An API definition file (OpenAPI/AsyncAPI) parsed to its JSON root.
#[derive(Debug, Clone)]
pub struct ParsedDefinition {
    pub root: serde_json::Value,
    pub format: DefinitionFormat,
}

pub fn parse_definition_str(
    input: &str,
    format: DefinitionFormat,
) -> Result<ParsedDefinition, ParseError> {
    match format {
        DefinitionFormat::Json => Ok(ParsedDefinition {
            root: serde_json::from_str::<serde_json::Value>(input)?,
            format,
        }),
        DefinitionFormat::Yaml => Ok(ParsedDefinition {
            root: serde_yaml::from_str::<serde_json::Value>(input)?,
            format,
        }),
        DefinitionFormat::Auto => parse_definition_auto(input),
    }
}

fn parse_definition_auto(input: &str) -> Result<ParsedDefinition, ParseError> {
    // Heuristic: JSON always starts with `{` or `[` after trimming.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        match serde_json::from_str::<serde_json::Value>(input) {
            Ok(root) => {
                return Ok(ParsedDefinition {
                    root,
                    format: DefinitionFormat::Json,
                });
            }
            Err(e) => {
                // YAML is a superset of JSON for most inputs; try it before
                // giving up, but report the JSON error since JSON was tried
                // first.
                if let Ok(root) = serde_yaml::from_str::<serde_json::Value>(input) {
                    return Ok(ParsedDefinition {
                        root,
                        format: DefinitionFormat::Yaml,
                    });
                }
                return Err(ParseError::Json(e));
            }
        }
    }

    match serde_yaml::from_str::<serde_json::Value>(input) {
        Ok(root) => Ok(ParsedDefinition {
            root,
            format: DefinitionFormat::Yaml,
        }),
        Err(e) => {
            if let Ok(root) = serde_json::from_str::<serde_json::Value>(input) {
                return Ok(ParsedDefinition {
                    root,
                    format: DefinitionFormat::Json,
                });
            }
            Err(ParseError::Yaml(e))
        }
    }
}
