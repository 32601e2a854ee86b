use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

/// Number of projects shown on the home page.
pub const FEATURED_COUNT: usize = 3;

const CATALOG_FILE: &str = "projects.json";

static GLOBAL_CATALOG: LazyLock<Catalog> = LazyLock::new(load_embedded);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Relative path of the project's static detail page
    pub link: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse project catalog: {0}")]
    Parse(String),
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),
    #[error("Project at position {0} has an empty id")]
    EmptyId(usize),
}

/// Ordered, read-only list of projects. Order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let projects = serde_json::from_str::<Vec<Project>>(raw)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(projects)
    }

    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::new();
            for (i, p) in projects.iter().enumerate() {
                if p.id.is_empty() {
                    return Err(CatalogError::EmptyId(i));
                }
                if !seen.insert(p.id.as_str()) {
                    return Err(CatalogError::DuplicateId(p.id.clone()));
                }
            }
        }
        Ok(Self { projects })
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// The first `count` projects, or all of them if there are fewer.
    pub fn featured(&self, count: usize) -> &[Project] {
        &self.projects[..count.min(self.projects.len())]
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// The catalog compiled into the binary.
pub fn catalog() -> &'static Catalog {
    &GLOBAL_CATALOG
}

fn read_embedded() -> Result<Catalog, CatalogError> {
    let file =
        Content::get(CATALOG_FILE).ok_or_else(|| CatalogError::Missing(CATALOG_FILE.to_string()))?;
    let raw =
        std::str::from_utf8(&file.data).map_err(|e| CatalogError::Parse(e.to_string()))?;
    Catalog::parse(raw)
}

fn load_embedded() -> Catalog {
    match read_embedded() {
        Ok(catalog) => {
            log::debug!("loaded {} projects", catalog.len());
            catalog
        }
        Err(e) => {
            log::error!("{e}");
            Catalog::default()
        }
    }
}
