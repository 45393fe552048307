use std::io::Write;
use vramcast::config::presets;
use vramcast::EstimateConfig;

#[test]
fn test_defaults_for_omitted_workload_and_quantization() {
    let json = r#"{
        "parameters": {
            "total_parameters": 7000000000,
            "num_layers": 32,
            "hidden_size": 4096,
            "num_attention_heads": 32
        }
    }"#;
    let config = EstimateConfig::from_json_str(json).unwrap();

    assert_eq!(config.batch_size, 1);
    assert_eq!(config.context_length, 2048);
    assert_eq!(config.concurrent_users, 1);
    assert_eq!(config.quantization.bits_per_weight, 16.0);
    assert_eq!(config.quantization.bits_per_activation, 16.0);
}

#[test]
fn test_partial_quantization_group_keeps_other_default() {
    let json = r#"{
        "parameters": {
            "total_parameters": 7000000000,
            "num_layers": 32,
            "hidden_size": 4096,
            "num_attention_heads": 32
        },
        "quantization": { "bits_per_weight": 4 }
    }"#;
    let config = EstimateConfig::from_json_str(json).unwrap();

    assert_eq!(config.quantization.bits_per_weight, 4.0);
    assert_eq!(config.quantization.bits_per_activation, 16.0);
}

#[test]
fn test_missing_parameters_group_parses_but_fields_are_absent() {
    // An empty object is a valid configuration shape; the absence of the
    // required architecture fields surfaces later, from the estimator
    let config = EstimateConfig::from_json_str("{}").unwrap();
    assert!(config.parameters.total_parameters.is_none());
    assert!(vramcast::estimate(&config).is_err());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let json = r#"{
        "parameters": {
            "total_parameters": 7000000000,
            "num_layers": 32,
            "hidden_size": 4096,
            "num_attention_heads": 32,
            "vocab_size": 32000
        },
        "deployment_name": "staging"
    }"#;
    let config = EstimateConfig::from_json_str(json).unwrap();
    assert_eq!(config.parameters.num_layers, Some(32));
}

#[test]
fn test_malformed_json_is_reported() {
    let err = EstimateConfig::from_json_str("not json at all").unwrap_err();
    assert!(
        err.to_string().contains("Invalid configuration JSON"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "parameters": {{
                "total_parameters": 13000000000,
                "num_layers": 40,
                "hidden_size": 5120,
                "num_attention_heads": 40
            }},
            "context_length": 4096
        }}"#
    )
    .unwrap();

    let config = EstimateConfig::from_path(file.path()).unwrap();
    assert_eq!(config.parameters.total_parameters, Some(13_000_000_000));
    assert_eq!(config.context_length, 4096);
    assert_eq!(config.batch_size, 1);
}

#[test]
fn test_missing_file_is_reported_with_path() {
    let err = EstimateConfig::from_path("/nonexistent/deploy.json").unwrap_err();
    assert!(
        err.to_string().contains("/nonexistent/deploy.json"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_reader_input_mirrors_string_input() {
    let json = r#"{
        "parameters": {
            "total_parameters": 7000000000,
            "num_layers": 32,
            "hidden_size": 4096,
            "num_attention_heads": 32
        }
    }"#;
    let from_reader = EstimateConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(from_reader.parameters.hidden_size, Some(4096));
}

#[test]
fn test_preset_config_populates_architecture() {
    let config = EstimateConfig::for_preset("mistral-7b").unwrap();
    assert_eq!(config.parameters.total_parameters, Some(7_200_000_000));
    assert_eq!(config.parameters.num_layers, Some(32));
    // Workload stays at defaults
    assert_eq!(config.context_length, 2048);
}

#[test]
fn test_unknown_preset_lists_available_names() {
    let err = EstimateConfig::for_preset("gpt-99").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Unknown preset: gpt-99"));
    assert!(message.contains("llama-2-7b"));
}

#[test]
fn test_preset_table_sizes_are_ascending_by_family() {
    let small = presets::lookup("llama-2-7b").unwrap();
    let large = presets::lookup("llama-2-70b").unwrap();
    assert!(small.total_parameters < large.total_parameters);
    assert!(small.num_layers < large.num_layers);
}
