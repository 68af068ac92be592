//! Archive packaging: tar.gz per route, all nested in one device-shaped zip
//!
//! Every rendered route becomes a gzip-compressed tar holding a single
//! `<id>.xml`. The tars are then collected at
//! `BMWData/Navigation/Routes/<name>.tar.gz` inside a zip built in memory, or
//! written to the same layout below a directory.

use crate::{Element, Result, Stage, utils};
use chrono::{DateTime, Datelike, Timelike, Utc};
use flate2::Compression;
use flate2::write::GzEncoder;
use rayon::prelude::*;
use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

/// A route's finished document, ready to be archived
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedRoute {
    pub id: u32,
    pub name: String,
    pub document: Element,
}

impl RenderedRoute {
    /// Name of the XML file inside the tar
    pub fn xml_file_name(&self) -> String {
        format!("{}.xml", self.id)
    }

    /// Serialize the document and wrap it in a tar.gz
    pub fn to_tar_gz(&self, modified: DateTime<Utc>) -> Result<Vec<u8>> {
        let xml = self.document.to_xml()?;
        tar_gz_document(&self.xml_file_name(), &xml, modified)
    }
}

/// Wrap one file in a gzip-compressed tar archive
pub fn tar_gz_document(file_name: &str, contents: &[u8], modified: DateTime<Utc>) -> Result<Vec<u8>> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Regular);
    header.set_size(contents.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(modified.timestamp().max(0) as u64);
    builder.append_data(&mut header, file_name, contents)?;

    let encoder = builder.into_inner()?;
    Ok(encoder.finish()?)
}

/// In-memory zip composed from `(path, bytes)` pairs and written once
///
/// Adding a path that already exists replaces the earlier bytes in place.
#[derive(Debug, Default)]
pub struct ZipBuilder {
    entries: Vec<(String, Vec<u8>)>,
    modified: Option<DateTime<Utc>>,
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp stored on every entry (zip epoch 1980-01-01 when unset)
    pub fn with_modified_time(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn add(&mut self, path: impl Into<String>, contents: Vec<u8>) -> &mut Self {
        let path = path.into();
        match self.entries.iter().position(|(existing, _)| *existing == path) {
            Some(index) => {
                tracing::warn!("Archive entry '{}' added twice, keeping the last one", path);
                self.entries[index].1 = contents;
            }
            None => self.entries.push((path, contents)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry and return the finished archive bytes
    pub fn finish(self) -> Result<Vec<u8>> {
        let modified = self.modified.map(zip_date_time).unwrap_or_default();
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644)
            .last_modified_time(modified);

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (path, contents) in &self.entries {
            writer.start_file(path.as_str(), options)?;
            writer.write_all(contents)?;
        }
        Ok(writer.finish()?.into_inner())
    }
}

/// Zip timestamps cannot precede 1980; those fall back to the zip epoch
fn zip_date_time(time: DateTime<Utc>) -> zip::DateTime {
    let (Ok(year), Ok(month), Ok(day), Ok(hour), Ok(minute), Ok(second)) = (
        u16::try_from(time.year()),
        u8::try_from(time.month()),
        u8::try_from(time.day()),
        u8::try_from(time.hour()),
        u8::try_from(time.minute()),
        u8::try_from(time.second()),
    ) else {
        return zip::DateTime::default();
    };
    zip::DateTime::from_date_and_time(year, month, day, hour, minute, second).unwrap_or_default()
}

/// Package rendered routes into the final zip
///
/// Tars are built in parallel; entry order follows `routes`. Routes sharing a
/// name collide on the same entry and the last one wins.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn package(routes: &[RenderedRoute], created: DateTime<Utc>) -> Result<Vec<u8>> {
    let archives = routes
        .par_iter()
        .map(|route| {
            let archive = route
                .to_tar_gz(created)
                .map_err(|err| err.in_route(route.id, &route.name, Stage::Package))?;
            Ok((utils::archive_entry_path(&route.name), archive))
        })
        .collect::<Result<Vec<(String, Vec<u8>)>>>()?;

    let mut zip = ZipBuilder::new().with_modified_time(created);
    for (path, archive) in archives {
        tracing::debug!("Adding {} ({} bytes)", path, archive.len());
        zip.add(path, archive);
    }
    zip.finish()
}

/// Write rendered routes to `<root>/BMWData/Navigation/Routes/`
///
/// Each document is first written as `<id>.xml`, archived into
/// `<name>.tar.gz` next to it, then the loose XML file is removed. Returns the
/// written archive paths.
pub fn write_to_directory(
    routes: &[RenderedRoute],
    root: &Path,
    created: DateTime<Utc>,
) -> Result<Vec<PathBuf>> {
    let directory = utils::ROUTES_DIR
        .split('/')
        .fold(root.to_path_buf(), |path, component| path.join(component));
    std::fs::create_dir_all(&directory)?;

    let mut written = Vec::with_capacity(routes.len());
    let mut seen = HashSet::new();
    for route in routes {
        let archive_path = write_route(&directory, route, created)
            .map_err(|err| err.in_route(route.id, &route.name, Stage::Package))?;
        if !seen.insert(archive_path.clone()) {
            tracing::warn!("Overwrote {} with route {}", archive_path.display(), route.id);
        }
        written.push(archive_path);
    }
    Ok(written)
}

fn write_route(directory: &Path, route: &RenderedRoute, created: DateTime<Utc>) -> Result<PathBuf> {
    let xml = route.document.to_xml()?;
    let xml_path = directory.join(route.xml_file_name());
    std::fs::write(&xml_path, &xml)?;

    let archive_path = directory.join(format!(
        "{}.tar.gz",
        utils::sanitize_file_name(&route.name)
    ));
    let archived = tar_gz_document(&route.xml_file_name(), &xml, created)
        .and_then(|archive| Ok(std::fs::write(&archive_path, archive)?));
    let removed = std::fs::remove_file(&xml_path);
    archived?;
    removed?;

    tracing::debug!("Wrote {}", archive_path.display());
    Ok(archive_path)
}
