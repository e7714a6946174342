//! Loads a map stored as a key list and a value list, edits it and writes it back.
//!
//! Run with `LIST_MAP_LOG=debug` to see each step.
use list_map::ListMap;

const STORED: &str = r#"{
    "keys": ["volume", "brightness", "volume"],
    "values": [0.8, 0.5, 0.1]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    list_map_logger::setup();

    let mut settings: ListMap<String, f32> = serde_json::from_str(STORED)?;
    log::info!("loaded {} entries", settings.len());

    if let Some((first, repeated)) = settings.first_duplicate_key() {
        let (key, _) = settings
            .remove_index(repeated)
            .ok_or("duplicate index out of range")?;
        log::info!("dropped {key:?} at {repeated}, kept the one at {first}");
    }

    *settings.get_or_insert_with("contrast".into(), || 1.0) *= 0.5;
    log::debug!("brightness is {}", settings.try_get("brightness")?);
    settings.remove("volume");

    for (key, value) in &settings {
        log::debug!("{key} = {value}");
    }
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
