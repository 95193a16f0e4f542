//! # Cabinet Generator
//!
//! Maps a cabinet request (type, width, optional height/depth and overrides)
//! to a fully populated [`Cabinet`].
//!
//! Widths, heights and depths must be members of the enumerated standard
//! sets from [`crate::catalog`]; there is no interpolation. Identifiers are
//! drawn from an injected [`IdSource`], so generation is otherwise
//! referentially transparent.

use crate::cabinet::Cabinet;
use crate::catalog::{self, CabinetTemplate, DEFAULT_THICKNESS};
use crate::cut_list::build_cut_list;
use cabinetkit_core::data::standard_library;
use cabinetkit_core::{
    CabinetError, CabinetResult, CabinetStyle, CabinetType, Dimensions, DoorStyle,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of cabinet identifiers
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix>-<n>` ids, starting at 1
#[derive(Debug)]
pub struct SequentialIdSource {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

/// Shop defaults applied when a request leaves a field unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorDefaults {
    pub material: String,
    /// Carcass thickness; `None` uses the material's nominal thickness
    pub thickness: Option<f64>,
    pub style: CabinetStyle,
    pub door_style: DoorStyle,
    pub include_back: bool,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            material: "plywood".to_string(),
            thickness: None,
            style: CabinetStyle::Euro,
            door_style: DoorStyle::Shaker,
            include_back: true,
        }
    }
}

/// Generation input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetRequest {
    pub cabinet_type: CabinetType,
    pub width: f64,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub depth: Option<f64>,
    #[serde(default)]
    pub style: Option<CabinetStyle>,
    #[serde(default)]
    pub door_style: Option<DoorStyle>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub door_count: Option<u32>,
    #[serde(default)]
    pub shelf_count: Option<u32>,
    #[serde(default)]
    pub include_back: Option<bool>,
}

impl CabinetRequest {
    pub fn new(cabinet_type: CabinetType, width: f64) -> Self {
        Self {
            cabinet_type,
            width,
            height: None,
            depth: None,
            style: None,
            door_style: None,
            material: None,
            door_count: None,
            shelf_count: None,
            include_back: None,
        }
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn style(mut self, style: CabinetStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn door_style(mut self, door_style: DoorStyle) -> Self {
        self.door_style = Some(door_style);
        self
    }

    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn doors(mut self, door_count: u32) -> Self {
        self.door_count = Some(door_count);
        self
    }

    pub fn shelves(mut self, shelf_count: u32) -> Self {
        self.shelf_count = Some(shelf_count);
        self
    }

    pub fn include_back(mut self, include_back: bool) -> Self {
        self.include_back = Some(include_back);
        self
    }
}

/// Cabinet generator
pub struct CabinetGenerator {
    ids: Box<dyn IdSource>,
    defaults: GeneratorDefaults,
}

impl CabinetGenerator {
    pub fn new(ids: impl IdSource + 'static) -> Self {
        Self {
            ids: Box::new(ids),
            defaults: GeneratorDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: GeneratorDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &GeneratorDefaults {
        &self.defaults
    }

    /// Generate a cabinet from a request.
    ///
    /// Fails with `InvalidDimension` for sizes outside the standard sets and
    /// with `DegenerateConfiguration` when the counts leave no room for a
    /// positive panel.
    pub fn generate(&self, request: &CabinetRequest) -> CabinetResult<Cabinet> {
        let ty = request.cabinet_type;
        let width = request.width;
        let height = request.height.unwrap_or_else(|| catalog::default_height(ty));
        let depth = request.depth.unwrap_or_else(|| catalog::default_depth(ty));

        if !catalog::is_standard_width(ty, width) {
            return Err(CabinetError::invalid_dimension(
                "width",
                width,
                format!("not a standard {} width", ty.as_str()),
            ));
        }
        if !catalog::is_standard_height(ty, height) {
            return Err(CabinetError::invalid_dimension(
                "height",
                height,
                format!("not a standard {} height", ty.as_str()),
            ));
        }
        if !catalog::is_standard_depth(ty, depth) {
            return Err(CabinetError::invalid_dimension(
                "depth",
                depth,
                format!("not a standard {} depth", ty.as_str()),
            ));
        }

        let material = request
            .material
            .clone()
            .unwrap_or_else(|| self.defaults.material.clone());
        let thickness = self.thickness_for(&material);

        let cabinet = Cabinet {
            id: self.ids.next_id(),
            template_id: None,
            cabinet_type: ty,
            dimensions: Dimensions::new(width, height, depth, thickness),
            style: request.style.unwrap_or(self.defaults.style),
            door_style: request.door_style.unwrap_or(self.defaults.door_style),
            material,
            door_count: request
                .door_count
                .unwrap_or_else(|| catalog::default_door_count(width)),
            shelf_count: request
                .shelf_count
                .unwrap_or_else(|| catalog::default_shelf_count(ty, height)),
            include_back: request.include_back.unwrap_or(self.defaults.include_back),
        };

        self.check(&cabinet)?;
        tracing::debug!(
            id = %cabinet.id,
            cabinet_type = %ty,
            width,
            height,
            depth,
            "Generated cabinet"
        );
        Ok(cabinet)
    }

    pub fn generate_base(&self, width: f64) -> CabinetResult<Cabinet> {
        self.generate(&CabinetRequest::new(CabinetType::Base, width))
    }

    pub fn generate_wall(&self, width: f64, height: f64) -> CabinetResult<Cabinet> {
        self.generate(&CabinetRequest::new(CabinetType::Wall, width).height(height))
    }

    pub fn generate_tall(&self, width: f64, height: f64) -> CabinetResult<Cabinet> {
        self.generate(&CabinetRequest::new(CabinetType::Tall, width).height(height))
    }

    /// Instantiate a catalog template with the generator defaults.
    pub fn from_template(&self, template: &CabinetTemplate) -> CabinetResult<Cabinet> {
        let mut dimensions = template.dimensions;
        dimensions.thickness = self.thickness_for(&self.defaults.material);

        let cabinet = Cabinet {
            id: self.ids.next_id(),
            template_id: Some(template.id.clone()),
            cabinet_type: template.cabinet_type,
            dimensions,
            style: template.style,
            door_style: self.defaults.door_style,
            material: self.defaults.material.clone(),
            door_count: template.door_count,
            shelf_count: template.shelf_count,
            include_back: self.defaults.include_back,
        };

        self.check(&cabinet)?;
        tracing::debug!(id = %cabinet.id, template = %template.id, "Generated cabinet from template");
        Ok(cabinet)
    }

    pub fn from_template_id(&self, template_id: &str) -> CabinetResult<Cabinet> {
        self.from_template(catalog::get_template(template_id)?)
    }

    /// Generate every request or none of them
    pub fn generate_batch(&self, requests: &[CabinetRequest]) -> CabinetResult<Vec<Cabinet>> {
        requests.iter().map(|r| self.generate(r)).collect()
    }

    fn thickness_for(&self, material: &str) -> f64 {
        if let Some(thickness) = self.defaults.thickness {
            return thickness;
        }
        match standard_library().resolve(material) {
            Some(m) => m.thickness,
            None => {
                tracing::debug!(material, "Unknown material, using nominal 3/4\" carcass");
                DEFAULT_THICKNESS
            }
        }
    }

    fn check(&self, cabinet: &Cabinet) -> CabinetResult<()> {
        cabinet.dimensions.validate()?;
        build_cut_list(cabinet).map(|_| ())
    }
}

impl Default for CabinetGenerator {
    fn default() -> Self {
        Self::new(UuidIdSource)
    }
}
