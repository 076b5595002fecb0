use anyhow::{Context, Result};
use spaarpot_ingest::UploadSession;
use std::fs;
use std::path::PathBuf;

/// Root directory for config, the expense log and the upload session.
/// `SPAARPOT_HOME` overrides the default `~/.spaarpot`.
pub fn spaarpot_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SPAARPOT_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".spaarpot"))
}

pub fn ensure_spaarpot_home() -> Result<PathBuf> {
    let dir = spaarpot_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn session_path() -> Result<PathBuf> {
    Ok(ensure_spaarpot_home()?.join("upload_session.json"))
}

pub fn read_session() -> Result<UploadSession> {
    let p = session_path()?;
    if !p.exists() {
        return Ok(UploadSession::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    UploadSession::from_json(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn write_session(session: &UploadSession) -> Result<()> {
    let p = session_path()?;
    let json = session.to_json().context("serialize upload session")?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}
