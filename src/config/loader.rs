use std::path::{Path, PathBuf};

use super::{Config, ConfigError, Settings, parse_config};

/// Project-level file names, in order of preference.
const LOCAL_FILES: [&str; 2] = ["rexplode.yml", "rexplode.yaml"];

/// Resolves `Settings` from up to three layers, lowest precedence first:
/// the user's global file, the project file, then command-line overrides.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    global: Option<PathBuf>,
    project_dir: PathBuf,
}

impl ConfigLoader {
    /// Loader for `project_dir` with the global file under `$HOME/.config`.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        let global = std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| Path::new(&home).join(".config/rexplode/rexplode.yml"));
        Self {
            global,
            project_dir: project_dir.into(),
        }
    }

    /// Replace the global file location; `None` disables the global layer.
    pub fn with_global(mut self, global: Option<PathBuf>) -> Self {
        self.global = global;
        self
    }

    /// Existing config files, lowest precedence first.
    pub fn files(&self) -> Vec<PathBuf> {
        let global = self.global.iter().filter(|path| path.is_file()).cloned();
        let local = LOCAL_FILES
            .iter()
            .map(|name| self.project_dir.join(name))
            .find(|path| path.is_file());
        global.chain(local).collect()
    }

    pub fn resolve(&self, overrides: Config) -> Result<Settings, ConfigError> {
        let mut config = Config::default();
        for path in self.files() {
            config = config.overlay(read_layer(&path)?);
        }
        let settings = config.overlay(overrides).into_settings()?;
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

fn read_layer(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!(path = %path.display(), "reading config layer");
    let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&yaml).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    /// A temp dir holding `home/rexplode.yml` (global) and `project/` (local).
    struct Layout {
        root: TempDir,
    }

    impl Layout {
        fn global_path(&self) -> PathBuf {
            self.root.path().join("home").join("rexplode.yml")
        }

        fn project(&self) -> PathBuf {
            self.root.path().join("project")
        }

        fn write_global(&self, yaml: &str) {
            fs::write(self.global_path(), yaml).unwrap();
        }

        fn write_local(&self, name: &str, yaml: &str) {
            fs::write(self.project().join(name), yaml).unwrap();
        }

        fn loader(&self) -> ConfigLoader {
            ConfigLoader::new(self.project()).with_global(Some(self.global_path()))
        }
    }

    #[fixture]
    fn layout() -> Layout {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("home")).unwrap();
        fs::create_dir_all(root.path().join("project")).unwrap();
        Layout { root }
    }

    #[rstest]
    fn no_files_gives_defaults(layout: Layout) {
        assert!(layout.loader().files().is_empty());
        let settings = layout.loader().resolve(Config::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[rstest]
    #[case::yml_only(&[("rexplode.yml", "limit: 5\n")], Some(5))]
    #[case::yaml_fallback(&[("rexplode.yaml", "limit: 6\n")], Some(6))]
    #[case::yml_preferred(
        &[("rexplode.yml", "limit: 7\n"), ("rexplode.yaml", "limit: 9\n")],
        Some(7)
    )]
    fn local_file_selection(
        layout: Layout,
        #[case] files: &[(&str, &str)],
        #[case] limit: Option<usize>,
    ) {
        for (name, yaml) in files {
            layout.write_local(name, yaml);
        }
        assert_eq!(layout.loader().files().len(), 1);
        assert_eq!(layout.loader().resolve(Config::default()).unwrap().limit, limit);
    }

    #[rstest]
    fn layers_stack_global_local_overrides(layout: Layout) {
        layout.write_global(indoc! {"
            max_repeat: 2
            seed: 7
            limit: 1
        "});
        layout.write_local(
            "rexplode.yml",
            indoc! {"
                max_repeat: 6
                limit: 20
            "},
        );
        let overrides = Config {
            max_repeat: None,
            seed: None,
            limit: Some(3),
        };

        let settings = layout.loader().resolve(overrides).unwrap();
        assert_eq!(
            settings,
            Settings {
                max_repeat: 6,
                seed: Some(7),
                limit: Some(3),
            }
        );
    }

    #[rstest]
    fn disabled_global_layer_is_skipped(layout: Layout) {
        layout.write_global("max_repeat: 9\n");
        let loader = layout.loader().with_global(None);
        assert_eq!(loader.resolve(Config::default()).unwrap().max_repeat, 4);
    }

    #[rstest]
    fn override_can_repair_invalid_file_value(layout: Layout) {
        layout.write_global("max_repeat: 0\n");
        let overrides = Config {
            max_repeat: Some(3),
            ..Config::default()
        };
        assert_eq!(layout.loader().resolve(overrides).unwrap().max_repeat, 3);
    }

    #[rstest]
    fn invalid_value_is_rejected(layout: Layout) {
        layout.write_local("rexplode.yml", "max_repeat: 0\n");
        let err = layout.loader().resolve(Config::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[rstest]
    fn malformed_file_names_its_path(layout: Layout) {
        layout.write_local("rexplode.yml", "max_repeat: [\n");
        let err = layout.loader().resolve(Config::default()).unwrap_err();
        match &err {
            ConfigError::Parse { path, .. } => {
                assert_eq!(path, &layout.project().join("rexplode.yml"))
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
