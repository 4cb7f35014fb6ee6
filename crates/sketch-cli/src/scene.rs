// Imports
use anyhow::Context;
use serde::{Deserialize, Serialize};
use sketch_geom::shapes::Shapeable;
use sketch_geom::{BindingConfig, Shape};
use std::path::Path;

/// A shape of the scene with its identity and version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "scene_shape")]
pub(crate) struct SceneShape {
    #[serde(rename = "id")]
    pub(crate) id: String,
    /// Bumped by the scene author whenever the shape changes.
    #[serde(rename = "version", default)]
    pub(crate) version: u64,
    #[serde(flatten)]
    pub(crate) shape: Shape,
}

/// A scene as stored in scene files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "scene")]
pub(crate) struct Scene {
    #[serde(rename = "config", default)]
    pub(crate) config: BindingConfig,
    #[serde(rename = "shapes", default)]
    pub(crate) shapes: Vec<SceneShape>,
}

impl Scene {
    pub(crate) fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let scene: Scene = serde_json::from_str(json).context("Deserializing scene failed.")?;

        if let Some(id) = scene.duplicate_id() {
            return Err(anyhow::anyhow!(
                "Scene contains the shape id \"{id}\" more than once."
            ));
        }
        scene
            .config
            .validate()
            .context("Invalid binding configuration.")?;
        Ok(scene)
    }

    pub(crate) fn load_from_file(scene_file: impl AsRef<Path>) -> anyhow::Result<Self> {
        let scene_file = scene_file.as_ref();
        let json = std::fs::read_to_string(scene_file).with_context(|| {
            format!("Failed to read scene file \"{}\".", scene_file.display())
        })?;

        Self::from_json_str(&json)
            .with_context(|| format!("Invalid scene file \"{}\".", scene_file.display()))
    }

    /// Overrides the configured binding margin when one is given.
    pub(crate) fn with_margin(mut self, margin: Option<f64>) -> anyhow::Result<Self> {
        if let Some(margin) = margin {
            self.config.margin = margin;
            self.config
                .validate()
                .context("Invalid binding margin override.")?;
        }
        Ok(self)
    }

    pub(crate) fn shape(&self, id: &str) -> Option<&SceneShape> {
        self.shapes.iter().find(|scene_shape| scene_shape.id == id)
    }

    fn duplicate_id(&self) -> Option<&str> {
        self.shapes
            .iter()
            .enumerate()
            .find(|(i, scene_shape)| {
                self.shapes[..*i]
                    .iter()
                    .any(|other| other.id == scene_shape.id)
            })
            .map(|(_, scene_shape)| scene_shape.id.as_str())
    }
}

impl SceneShape {
    pub(crate) fn kind_name(&self) -> &'static str {
        self.shape.kind_name()
    }

    pub(crate) fn can_bind(&self) -> bool {
        self.shape.can_bind()
    }
}
