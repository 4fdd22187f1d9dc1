//! Site scaffolding for `folio init`

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::config::{FolioConfig, CONFIG_FILE};

const SAMPLE_TIMELINE: &str = r#"{
  "timeline": [
    {
      "id": 1,
      "title": "Scrum Foundation Professional Certificate",
      "institution": "CertiProf",
      "date": "2023-04-10",
      "status": "completed",
      "description": "Agile fundamentals and the Scrum framework."
    },
    {
      "id": 2,
      "title": "AWS Certified Cloud Practitioner",
      "institution": "Amazon Web Services",
      "date": "2024-02-20",
      "status": "completed",
      "description": "Core AWS services, security and billing."
    },
    {
      "id": 3,
      "title": "Certified Kubernetes Application Developer",
      "institution": "The Linux Foundation",
      "date": "2027-03-01",
      "status": "planned",
      "description": "Designing and deploying applications on Kubernetes."
    }
  ]
}
"#;

/// Create `folio.toml` and a sample timeline under `path`
pub fn create_site(path: &Path, name: &str) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        bail!(
            "{} already exists; remove it first to start over",
            config_path.display()
        );
    }

    fs::create_dir_all(path)?;
    let config = FolioConfig::new(name);
    fs::write(&config_path, config.to_toml()?)?;

    let timeline_path = path.join(&config.timeline.data);
    if let Some(parent) = timeline_path.parent() {
        fs::create_dir_all(parent)?;
    }
    if !timeline_path.exists() {
        fs::write(&timeline_path, SAMPLE_TIMELINE)?;
    }

    tracing::info!("initialized site `{}` in {}", name, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_timeline::Timeline;

    #[test]
    fn creates_config_and_loadable_timeline() {
        let dir = tempfile::tempdir().unwrap();
        create_site(dir.path(), "ana").unwrap();

        let config = FolioConfig::load_from_path(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.site.name, "ana");

        let timeline = Timeline::load(&dir.path().join(&config.timeline.data)).unwrap();
        assert_eq!(timeline.len(), 3);
    }

    #[test]
    fn refuses_to_overwrite_config() {
        let dir = tempfile::tempdir().unwrap();
        create_site(dir.path(), "ana").unwrap();
        assert!(create_site(dir.path(), "again").is_err());
    }
}
