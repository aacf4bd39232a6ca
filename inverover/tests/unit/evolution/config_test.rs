use super::*;

#[test]
fn can_use_defaults() {
    let config = InverOverConfigBuilder::default().build().unwrap();

    assert_eq!(config, InverOverConfig::default());
    assert_eq!(config.generations, 10000);
    assert_eq!(config.mutation_probability, 0.05);
    assert_eq!(config.initialization, InitializationMode::NearestNeighbor);
}

#[test]
fn can_override_defaults() {
    let config = InverOverConfigBuilder::default()
        .with_generations(0)
        .with_mutation_probability(1.)
        .with_initialization(InitializationMode::Random)
        .build()
        .unwrap();

    assert_eq!(
        config,
        InverOverConfig { generations: 0, mutation_probability: 1., initialization: InitializationMode::Random }
    );
}

parameterized_test! {can_reject_invalid_mutation_probability, probability, {
    can_reject_invalid_mutation_probability_impl(probability);
}}

can_reject_invalid_mutation_probability! {
    case_01_negative: -0.1,
    case_02_above_one: 1.01,
    case_03_nan: f64::NAN,
}

fn can_reject_invalid_mutation_probability_impl(probability: f64) {
    let result = InverOverConfigBuilder::default().with_mutation_probability(probability).build();

    assert!(matches!(result, Err(EvolutionError::Configuration(_))));
}

#[test]
fn can_deserialize_config() {
    let config: InverOverConfig =
        serde_json::from_str(r#"{"generations":50,"mutationProbability":0.1,"initialization":"random"}"#).unwrap();

    assert_eq!(config.generations, 50);
    assert_eq!(config.mutation_probability, 0.1);
    assert_eq!(config.initialization, InitializationMode::Random);
}

#[test]
fn can_reject_negative_generations_on_deserialize() {
    let result = serde_json::from_str::<InverOverConfig>(
        r#"{"generations":-1,"mutationProbability":0.1,"initialization":"random"}"#,
    );

    assert!(result.is_err());
}

#[test]
fn can_deserialize_partial_config() {
    let config: InverOverConfig = serde_json::from_str(r#"{"mutationProbability":0.2}"#).unwrap();

    assert_eq!(config, InverOverConfig { mutation_probability: 0.2, ..InverOverConfig::default() });
}
