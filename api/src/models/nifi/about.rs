//! The `/flow/about` resource.

use serde::{Deserialize, Serialize};

use crate::record::{Field, Record, Schema};

const TITLE: Field = Field::string("title", "title");
const VERSION: Field = Field::string("version", "version");
const URI: Field = Field::string("uri", "uri");
const CONTENT_VIEWER_URL: Field = Field::string("content_viewer_url", "contentViewerUrl");
const TIMEZONE: Field = Field::string("timezone", "timezone");
const BUILD_TAG: Field = Field::string("build_tag", "buildTag");
const BUILD_REVISION: Field = Field::string("build_revision", "buildRevision");
const BUILD_BRANCH: Field = Field::string("build_branch", "buildBranch");
const BUILD_TIMESTAMP: Field = Field::string("build_timestamp", "buildTimestamp");

static ABOUT_SCHEMA: Schema = Schema {
    name: "AboutDTO",
    fields: &[
        TITLE,
        VERSION,
        URI,
        CONTENT_VIEWER_URL,
        TIMEZONE,
        BUILD_TAG,
        BUILD_REVISION,
        BUILD_BRANCH,
        BUILD_TIMESTAMP,
    ],
};

/// Build and version details of a NiFi instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutDto {
    title: Option<String>,
    version: Option<String>,
    uri: Option<String>,
    content_viewer_url: Option<String>,
    timezone: Option<String>,
    build_tag: Option<String>,
    build_revision: Option<String>,
    build_branch: Option<String>,
    build_timestamp: Option<String>,
}

impl AboutDto {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// The NiFi release, e.g. `2.0.0`.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn set_uri(&mut self, uri: Option<String>) {
        self.uri = uri;
    }

    pub fn content_viewer_url(&self) -> Option<&str> {
        self.content_viewer_url.as_deref()
    }

    pub fn set_content_viewer_url(&mut self, url: Option<String>) {
        self.content_viewer_url = url;
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn set_timezone(&mut self, timezone: Option<String>) {
        self.timezone = timezone;
    }

    pub fn build_tag(&self) -> Option<&str> {
        self.build_tag.as_deref()
    }

    pub fn set_build_tag(&mut self, tag: Option<String>) {
        self.build_tag = tag;
    }

    pub fn build_revision(&self) -> Option<&str> {
        self.build_revision.as_deref()
    }

    pub fn set_build_revision(&mut self, revision: Option<String>) {
        self.build_revision = revision;
    }

    pub fn build_branch(&self) -> Option<&str> {
        self.build_branch.as_deref()
    }

    pub fn set_build_branch(&mut self, branch: Option<String>) {
        self.build_branch = branch;
    }

    pub fn build_timestamp(&self) -> Option<&str> {
        self.build_timestamp.as_deref()
    }

    pub fn set_build_timestamp(&mut self, timestamp: Option<String>) {
        self.build_timestamp = timestamp;
    }
}

impl Record for AboutDto {
    fn schema() -> &'static Schema {
        &ABOUT_SCHEMA
    }
}

const ABOUT: Field = Field::record("about", "about", AboutDto::schema);

static ABOUT_ENTITY_SCHEMA: Schema = Schema {
    name: "AboutEntity",
    fields: &[ABOUT],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutEntity {
    about: Option<AboutDto>,
}

impl AboutEntity {
    pub fn new(about: AboutDto) -> Self {
        Self { about: Some(about) }
    }

    pub fn about(&self) -> Option<&AboutDto> {
        self.about.as_ref()
    }

    pub fn set_about(&mut self, about: Option<AboutDto>) {
        self.about = about;
    }
}

impl Record for AboutEntity {
    fn schema() -> &'static Schema {
        &ABOUT_ENTITY_SCHEMA
    }
}
