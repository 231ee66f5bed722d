//! Artifact loading tests against real files on disk.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use forecast_common::{CityRegistry, FeatureVector};
use forecast_model::{ModelError, WeatherPredictor};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const MODEL_JSON: &str = r#"{
    "feature_names": ["latitude", "longitude", "hour", "month", "dayofweek"],
    "n_classes": 2,
    "trees": [
        {
            "root": {
                "feature_idx": 3,
                "threshold": 5.5,
                "class": 0,
                "left": { "class": 0 },
                "right": { "class": 1 }
            }
        },
        {
            "root": { "class": 1 }
        },
        {
            "root": {
                "feature_idx": 3,
                "threshold": 8.5,
                "class": 0,
                "left": { "class": 1 },
                "right": { "class": 0 }
            }
        }
    ]
}"#;

const LABELS_JSON: &str = r#"{ "classes": ["Clear", "Rain"] }"#;

#[test]
fn test_load_and_predict_from_disk() {
    let dir = TempDir::new().unwrap();
    let model_path = write_file(&dir, "weather_model.json", MODEL_JSON);
    let labels_path = write_file(&dir, "label_encoder.json", LABELS_JSON);

    let predictor = WeatherPredictor::load(&model_path, &labels_path).unwrap();
    assert_eq!(predictor.n_trees(), 3);
    assert_eq!(predictor.label_vocabulary(), ["Clear", "Rain"]);

    // June in Kochi: all three trees vote Rain.
    let registry = CityRegistry::kerala();
    let coords = registry.lookup("Kochi").unwrap();
    let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let label = predictor.predict(&FeatureVector::derive(coords, date)).unwrap();
    assert_eq!(label, "Rain");

    // January in Kochi: trees vote Clear, Rain, Rain.
    let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let label = predictor.predict(&FeatureVector::derive(coords, date)).unwrap();
    assert_eq!(label, "Rain");

    // December in Kochi: trees vote Rain, Rain, Clear.
    let date = chrono::NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
    let label = predictor.predict(&FeatureVector::derive(coords, date)).unwrap();
    assert_eq!(label, "Rain");
}

#[test]
fn test_load_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let model_path = write_file(&dir, "weather_model.json", "{ not json");
    let labels_path = write_file(&dir, "label_encoder.json", LABELS_JSON);

    assert!(matches!(
        WeatherPredictor::load(&model_path, &labels_path),
        Err(ModelError::ArtifactParse { .. })
    ));
}

#[test]
fn test_load_rejects_missing_labels_file() {
    let dir = TempDir::new().unwrap();
    let model_path = write_file(&dir, "weather_model.json", MODEL_JSON);
    let labels_path = dir.path().join("label_encoder.json");

    assert!(matches!(
        WeatherPredictor::load(&model_path, &labels_path),
        Err(ModelError::ArtifactRead { .. })
    ));
}

#[test]
fn test_load_rejects_reordered_feature_columns() {
    let reordered = MODEL_JSON.replace(
        r#"["latitude", "longitude", "hour", "month", "dayofweek"]"#,
        r#"["dayofweek", "longitude", "hour", "month", "latitude"]"#,
    );

    let dir = TempDir::new().unwrap();
    let model_path = write_file(&dir, "weather_model.json", &reordered);
    let labels_path = write_file(&dir, "label_encoder.json", LABELS_JSON);

    assert!(matches!(
        WeatherPredictor::load(&model_path, &labels_path),
        Err(ModelError::CorruptArtifact(_))
    ));
}

#[test]
fn test_load_rejects_vocabulary_mismatch() {
    let dir = TempDir::new().unwrap();
    let model_path = write_file(&dir, "weather_model.json", MODEL_JSON);
    let labels_path = write_file(
        &dir,
        "label_encoder.json",
        r#"{ "classes": ["Clear", "Rain", "Thunderstorm"] }"#,
    );

    assert!(matches!(
        WeatherPredictor::load(&model_path, &labels_path),
        Err(ModelError::CorruptArtifact(_))
    ));
}
