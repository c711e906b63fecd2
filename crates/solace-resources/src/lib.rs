// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Crisis support resource directory.
//!
//! A fixed, region-keyed table of crisis contacts (hotline, text line,
//! emergency services, helpline directories) surfaced alongside escalations
//! and crisis-support responses. The directory is configuration data, not
//! computed: it is built once from compiled-in defaults plus any configured
//! extra entries, and lookups always return the full regional list.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

use solace_config::model::ResourcesConfig;
use solace_core::SolaceError;

/// The kind of crisis resource an entry describes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Voice hotline.
    Hotline,
    /// Text-message line.
    Text,
    /// Emergency services.
    Emergency,
    /// Index of helplines (e.g. an international directory site).
    Directory,
}

/// A single crisis support contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisResource {
    pub kind: ResourceKind,
    pub name: String,
    pub contact: String,
    pub description: String,
}

impl CrisisResource {
    fn new(kind: ResourceKind, name: &str, contact: &str, description: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            contact: contact.to_string(),
            description: description.to_string(),
        }
    }
}

/// The full resource directory for one region.
#[derive(Debug, Clone, Serialize)]
pub struct CrisisDirectory {
    region: String,
    resources: Vec<CrisisResource>,
}

impl CrisisDirectory {
    /// Build the directory from configuration: compiled-in defaults for the
    /// configured region, plus any configured extra entries appended in
    /// order. Rejects extra entries with an unknown `kind`.
    pub fn from_config(config: &ResourcesConfig) -> Result<Self, SolaceError> {
        let region = config.region.trim().to_lowercase();
        let mut resources = builtin_resources(&region);

        for entry in &config.extra {
            let kind = ResourceKind::from_str(&entry.kind).map_err(|_| {
                SolaceError::Config(format!(
                    "resources.extra entry `{}` has unknown kind `{}` \
                     (expected hotline, text, emergency, or directory)",
                    entry.name, entry.kind
                ))
            })?;
            resources.push(CrisisResource {
                kind,
                name: entry.name.clone(),
                contact: entry.contact.clone(),
                description: entry.description.clone(),
            });
        }

        Ok(Self { region, resources })
    }

    /// The region this directory serves.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Every resource for the region, always in full: crisis surfaces must
    /// never filter or rank the list.
    pub fn all(&self) -> &[CrisisResource] {
        &self.resources
    }
}

impl Default for CrisisDirectory {
    fn default() -> Self {
        let region = ResourcesConfig::default().region;
        let resources = builtin_resources(&region);
        Self { region, resources }
    }
}

/// Compiled-in entries per region. Unknown regions still carry the
/// international helpline directory so no deployment serves an empty list.
fn builtin_resources(region: &str) -> Vec<CrisisResource> {
    let international = CrisisResource::new(
        ResourceKind::Directory,
        "Find a Helpline",
        "https://findahelpline.com",
        "International helpline directory",
    );

    match region {
        "us" => vec![
            CrisisResource::new(
                ResourceKind::Hotline,
                "988 Suicide & Crisis Lifeline",
                "988",
                "24/7 crisis support",
            ),
            CrisisResource::new(
                ResourceKind::Text,
                "Crisis Text Line",
                "Text HOME to 741741",
                "Text-based crisis support",
            ),
            CrisisResource::new(
                ResourceKind::Emergency,
                "Emergency Services",
                "911",
                "Immediate emergency assistance",
            ),
            international,
        ],
        _ => vec![international],
    }
}
