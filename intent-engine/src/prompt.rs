use crate::vocabulary::{ApplicationName, KEYWORD_CLASSES};

/// One line describing which keywords map to which fields
pub fn field_mapping_line() -> String {
    KEYWORD_CLASSES
        .iter()
        .map(|class| {
            let keywords = class
                .keywords
                .iter()
                .map(|k| format!("'{k}'"))
                .collect::<Vec<_>>()
                .join("/");
            let fields = class
                .fields
                .iter()
                .map(|f| format!("\"{f}\""))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{keywords} -> {fields}")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Few-shot extraction prompt; `user_input` is embedded verbatim
pub fn build_extraction_prompt(user_input: &str, app: &ApplicationName) -> String {
    format!(
        r#"Task: Extract values from the User Request and map them to JSON keys.
Application: {app}
RULES:
1. Extract the NUMBER from the request.
2. Use REAL NUMBERS, not variable names.
3. Mapping: {mapping}
4. Answer with a single JSON object and nothing else.

EXAMPLES:
User: "set memory to 1024" -> {{ "limitMiB": 1024, "requestMiB": 1024 }}
User: "change replicas to 5" -> {{ "replicas": 5 }}
User: "cpu 500 olsun" -> {{ "limitMilliCPU": 500, "requestMilliCPU": 500 }}

User Request: "{user_input}"
JSON:
"#,
        mapping = field_mapping_line(),
    )
}
