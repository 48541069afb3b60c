use bevy::prelude::*;
use rand::prelude::*;
use rand::rng;
use serde::Deserialize;

const SPARKS_JSON: &str = include_str!("../assets/sparks.json");

/// Resource holding the fixed list of spark messages
#[derive(Resource, Debug)]
pub struct SparkLibrary {
    sparks: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SparksDoc {
    sparks: Vec<String>,
}

impl SparkLibrary {
    /// Load the spark library from the embedded JSON document
    pub fn load() -> Result<Self, String> {
        Self::from_json(SPARKS_JSON)
    }

    fn from_json(json: &str) -> Result<Self, String> {
        let doc: SparksDoc =
            serde_json::from_str(json).map_err(|e| format!("Invalid sparks document: {}", e))?;

        if doc.sparks.is_empty() {
            return Err("Sparks document contains no messages".to_string());
        }

        if let Some(idx) = doc.sparks.iter().position(|s| s.trim().is_empty()) {
            return Err(format!("Spark {} is blank", idx));
        }

        Ok(SparkLibrary { sparks: doc.sparks })
    }

    /// Pick a spark uniformly at random
    pub fn random_spark(&self) -> &str {
        self.sparks
            .choose(&mut rng())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }
}

/// System to load and insert the spark library
/// Runs early in Startup, before anything that can ignite
pub fn setup_spark_library(mut commands: Commands) {
    match SparkLibrary::load() {
        Ok(library) => {
            info!("Spark library loaded: {} messages", library.len());
            commands.insert_resource(library);
        }
        Err(e) => {
            error!("Failed to load spark library: {}", e);
            panic!("Cannot continue without spark data");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_JSON: &str = r#"{"sparks": ["first", "second", "third"]}"#;

    #[test]
    fn test_load_embedded() {
        let library = SparkLibrary::load().unwrap();
        assert_eq!(library.len(), 20);
    }

    #[test]
    fn test_random_spark_is_member() {
        let library = SparkLibrary::from_json(TEST_JSON).unwrap();

        for _ in 0..50 {
            let spark = library.random_spark();
            assert!(["first", "second", "third"].contains(&spark));
        }
    }

    #[test]
    fn test_invalid_document() {
        assert!(SparkLibrary::from_json("not json").is_err());
        assert!(SparkLibrary::from_json(r#"{"sparks": "nope"}"#).is_err());
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(SparkLibrary::from_json(r#"{"sparks": []}"#).is_err());
    }

    #[test]
    fn test_blank_spark_rejected() {
        assert!(SparkLibrary::from_json(r#"{"sparks": ["fine", "  "]}"#).is_err());
    }
}
