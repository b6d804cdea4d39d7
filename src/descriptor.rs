use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::error::{PomVersionError, Result};

/// Fixed relative path of the project descriptor.
pub const DESCRIPTOR_PATH: &str = "./pom.xml";

/// XML namespace of POM 4.0.0 project descriptors.
pub const POM_NAMESPACE: &[u8] = b"http://maven.apache.org/POM/4.0.0";

/// Resolves the project version.
///
/// An explicit override is returned verbatim without touching the
/// filesystem. Otherwise the version is read from the descriptor at
/// [`DESCRIPTOR_PATH`].
///
/// # Arguments
/// * `override_value` - Version supplied on the command line, if any
///
/// # Returns
/// * `Ok(String)` - The resolved version string
/// * `Err` - If the descriptor is missing, malformed, or lacks a version
pub fn resolve(override_value: Option<String>) -> Result<String> {
    match override_value {
        Some(version) => Ok(version),
        None => version_from_descriptor(Path::new(DESCRIPTOR_PATH)),
    }
}

/// Reads the project version from the descriptor file at `path`.
pub fn version_from_descriptor(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| {
        PomVersionError::descriptor(format!("unable to read '{}': {}", path.display(), e))
    })?;

    extract_version(&content)?.ok_or_else(|| {
        PomVersionError::descriptor(format!(
            "no <version> element in the POM namespace found in '{}'",
            path.display()
        ))
    })
}

/// Extracts the text of the first `version` element in the POM namespace
/// that is a direct child of the document root.
///
/// Nested occurrences such as `<parent><version>` do not count.
fn extract_version(xml: &str) -> Result<Option<String>> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut in_version = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| PomVersionError::descriptor(format!("malformed XML: {}", e)))?;

        match event {
            Event::Start(start) => {
                depth += 1;
                let (ns, local) = reader.resolve_element(start.name());
                in_version = depth == 2
                    && local.as_ref() == b"version"
                    && ns == ResolveResult::Bound(Namespace(POM_NAMESPACE));
            }
            Event::Text(text) if in_version => {
                let decoded = text
                    .decode()
                    .map_err(|e| PomVersionError::descriptor(format!("malformed XML: {}", e)))?;
                let value = quick_xml::escape::unescape(&decoded)
                    .map_err(|e| PomVersionError::descriptor(format!("malformed XML: {}", e)))?;
                return Ok(Some(value.into_owned()));
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                in_version = false;
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}
