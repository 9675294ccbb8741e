//! Save-file handling under `~/.posad/`.

use crate::core::game_state::GameState;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Directory holding all save data, created on demand.
pub fn posad_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".posad");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn save_path() -> io::Result<PathBuf> {
    Ok(posad_dir()?.join("save.json"))
}

/// Loads a JSON file, falling back to `Default` when the file is missing
/// or unreadable. A corrupt save should never brick the game.
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: &PathBuf) -> T {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Loads a JSON file, surfacing any error to the caller.
pub fn load_json<T: DeserializeOwned>(path: &PathBuf) -> io::Result<T> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Writes a value as pretty JSON via a temp file rename, so a crash
/// mid-write cannot leave a truncated save.
pub fn save_json<T: Serialize>(path: &PathBuf, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Moves a corrupt save aside under a timestamped name instead of
/// deleting it, so nothing is lost if it turns out recoverable.
pub fn quarantine_save(path: &PathBuf) -> io::Result<PathBuf> {
    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let dest = path.with_extension(format!("corrupt-{}.json", stamp));
    fs::rename(path, &dest)?;
    Ok(dest)
}

/// Loads the save at the default path. A corrupt file is quarantined and
/// a fresh state started in its place.
pub fn load_or_create(username: &str) -> io::Result<GameState> {
    let path = save_path()?;
    if path.exists() {
        match load_json::<GameState>(&path) {
            Ok(state) => return Ok(state),
            Err(_) => {
                quarantine_save(&path).ok();
            }
        }
    }
    Ok(GameState::new(username, Utc::now().timestamp()))
}

/// Writes the state to the default save path.
pub fn save_game(state: &GameState) -> io::Result<()> {
    save_json(&save_path()?, state)
}
